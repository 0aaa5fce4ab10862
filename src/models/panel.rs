//! Lifecycle of one entity panel: the add/edit dialog and the delete
//! confirmation. Handlers drive these transitions around the remote calls.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::livingapps::{ApiLocation, RawRecord};

use super::collection::Collection;
use super::draft::{Draft, SaveMode};
use super::schema::{schema, EntitySchema};

/// Open add/edit dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub collection: Collection,
    /// Present when editing an existing record.
    pub edit_id: Option<String>,
    pub draft: Draft,
    pub error: Option<String>,
}

impl Dialog {
    pub fn new(collection: Collection, edit_id: Option<String>, draft: Draft) -> Self {
        Dialog { collection, edit_id, draft, error: None }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        schema(self.collection)
    }

    pub fn title(&self) -> &'static str {
        if self.edit_id.is_some() {
            self.schema().edit_title
        } else {
            self.schema().new_title
        }
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_complete(self.schema())
    }

    fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Remote call a panel asks for after a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create {
        collection: Collection,
        fields: Map<String, Value>,
    },
    Update {
        collection: Collection,
        record_id: String,
        fields: Map<String, Value>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Idle,
    Editing(Dialog),
    Saving(Dialog),
    ConfirmingDelete { collection: Collection, record_id: String },
    Deleting { collection: Collection, record_id: String },
}

impl PanelState {
    pub fn open_add(collection: Collection, today: NaiveDate) -> Self {
        let draft = Draft::for_add(schema(collection), today);
        PanelState::Editing(Dialog::new(collection, None, draft))
    }

    pub fn open_edit(collection: Collection, record: &RawRecord) -> Self {
        let draft = Draft::from_record(schema(collection), &record.fields);
        PanelState::Editing(Dialog::new(collection, Some(record.record_id.clone()), draft))
    }

    /// Editing → Saving with the request to send, or back to Editing with
    /// an error when the draft cannot be sent. Other states ignore submits.
    pub fn submit(self, location: &ApiLocation) -> (PanelState, Option<SaveRequest>) {
        let dialog = match self {
            PanelState::Editing(dialog) => dialog,
            other => return (other, None),
        };

        let schema = dialog.schema();
        let missing = dialog.draft.missing_required(schema);
        if !missing.is_empty() {
            let msg = format!("Bitte füllen Sie alle Pflichtfelder aus: {}", missing.join(", "));
            return (PanelState::Editing(dialog.with_error(msg)), None);
        }

        let mode = if dialog.edit_id.is_some() { SaveMode::Update } else { SaveMode::Create };
        let fields = match dialog.draft.to_fields(schema, location, mode) {
            Ok(fields) => fields,
            Err(e) => return (PanelState::Editing(dialog.with_error(e.to_string())), None),
        };

        let request = match &dialog.edit_id {
            Some(id) => SaveRequest::Update {
                collection: dialog.collection,
                record_id: id.clone(),
                fields,
            },
            None => SaveRequest::Create { collection: dialog.collection, fields },
        };
        (PanelState::Saving(Dialog { error: None, ..dialog }), Some(request))
    }

    /// Saving → Idle on success; on failure the dialog stays open with the
    /// submitted draft.
    pub fn save_finished(self, outcome: Result<(), String>) -> Self {
        match (self, outcome) {
            (PanelState::Saving(_), Ok(())) => PanelState::Idle,
            (PanelState::Saving(dialog), Err(e)) => PanelState::Editing(dialog.with_error(e)),
            (other, _) => other,
        }
    }

    pub fn request_delete(collection: Collection, record_id: impl Into<String>) -> Self {
        PanelState::ConfirmingDelete { collection, record_id: record_id.into() }
    }

    /// ConfirmingDelete → Deleting, yielding the record to delete.
    pub fn confirm_delete(self) -> (PanelState, Option<(Collection, String)>) {
        match self {
            PanelState::ConfirmingDelete { collection, record_id } => {
                let target = (collection, record_id.clone());
                (PanelState::Deleting { collection, record_id }, Some(target))
            }
            other => (other, None),
        }
    }

    /// The delete flow closes whatever the outcome.
    pub fn delete_finished(self) -> Self {
        match self {
            PanelState::Deleting { .. } => PanelState::Idle,
            other => other,
        }
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        match self {
            PanelState::Editing(d) | PanelState::Saving(d) => Some(d),
            _ => None,
        }
    }

    pub fn into_dialog(self) -> Option<Dialog> {
        match self {
            PanelState::Editing(d) | PanelState::Saving(d) => Some(d),
            _ => None,
        }
    }
}
