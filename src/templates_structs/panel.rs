use askama::Template;

use crate::models::dashboard::Snapshot;
use crate::models::panel::Dialog;
use crate::models::schema::FieldKind;
use super::PageContext;

pub struct FormOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// One dialog control, ready for the template.
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub required: bool,
    pub value: String,
    pub placeholder: &'static str,
    pub min: String,
    pub step: String,
    pub checked: bool,
    pub options: Vec<FormOption>,
}

impl FormField {
    /// Controls for a dialog; selection lists come from the snapshot.
    pub fn for_dialog(dialog: &Dialog, snapshot: &Snapshot) -> Vec<FormField> {
        dialog
            .schema()
            .fields
            .iter()
            .map(|def| {
                let value = dialog.draft.get(def.key).to_string();
                let (min, step) = match def.kind {
                    FieldKind::Integer { min } => (min.to_string(), "1".to_string()),
                    FieldKind::Decimal { min, step } => (min.to_string(), step.to_string()),
                    _ => (String::new(), String::new()),
                };
                let options = match def.kind {
                    FieldKind::Reference(target) => snapshot
                        .options(target)
                        .into_iter()
                        .map(|o| FormOption {
                            selected: o.record_id == value,
                            value: o.record_id,
                            label: o.label,
                        })
                        .collect(),
                    _ => vec![],
                };
                FormField {
                    key: def.key,
                    label: def.label,
                    input_type: def.kind.input_type(),
                    required: def.required,
                    checked: dialog.draft.is_checked(def.key),
                    value,
                    placeholder: def.placeholder,
                    min,
                    step,
                    options,
                }
            })
            .collect()
    }
}

#[derive(Template)]
#[template(path = "panel/form.html")]
pub struct PanelFormTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub form_action: String,
    pub cancel_href: String,
    pub fields: Vec<FormField>,
    pub error: Option<String>,
    pub can_submit: bool,
}

#[derive(Template)]
#[template(path = "panel/confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub description: String,
    pub record_name: String,
    pub warning: Option<String>,
    pub form_action: String,
    pub cancel_href: String,
}
