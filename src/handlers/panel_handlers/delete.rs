use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::auth::session::set_flash;
use crate::dashboard::DashboardController;
use crate::errors::{AppError, render};
use crate::livingapps::RecordRef;
use crate::models::collection::Collection;
use crate::models::format;
use crate::models::panel::PanelState;
use crate::models::schema::{delete_description, schema};
use crate::templates_structs::{ConfirmDeleteTemplate, PageContext};
use super::helpers;

/// Confirmation page. Registrations are not deleted with their course,
/// so the page says how many would be left pointing at nothing.
pub async fn confirm_delete(
    dashboard: web::Data<DashboardController>,
    session: Session,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (collection, id) = helpers::record_from_path(path.into_inner())?;

    let snapshot = dashboard.refresh().await?;
    if snapshot.record(collection, &id).is_none() {
        return Err(AppError::NotFound);
    }

    let schema = schema(collection);
    let record_name = snapshot.display_name(&RecordRef::new(collection, id.as_str()));
    let warning = match collection {
        Collection::Courses => match snapshot.registrations_for_course(&id) {
            0 => None,
            1 => Some("1 Anmeldung verweist auf diesen Kurs und bleibt bestehen.".to_string()),
            n => Some(format!("{n} Anmeldungen verweisen auf diesen Kurs und bleiben bestehen.")),
        },
        _ => None,
    };

    let tmpl = ConfirmDeleteTemplate {
        ctx: PageContext::build(&session, collection),
        title: schema.delete_title,
        description: delete_description(schema),
        record_name: format::text(record_name.as_deref()),
        warning,
        form_action: format!("/{}/{id}/delete", collection.slug()),
        cancel_href: helpers::tab_location(collection),
    };
    render(tmpl)
}

/// Delete and go back to the tab. A failure is logged and flashed; the
/// record then simply stays in the table.
pub async fn delete(
    dashboard: web::Data<DashboardController>,
    session: Session,
    path: web::Path<(String, String)>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let (collection, id) = helpers::record_from_path(path.into_inner())?;
    helpers::check_csrf(&session, &form)?;

    if let (_, Some((collection, record_id))) =
        PanelState::request_delete(collection, id).confirm_delete()
    {
        match dashboard.client().delete(collection, &record_id).await {
            Ok(()) => {
                log::info!("Deleted {collection} record {record_id}");
                set_flash(&session, "Eintrag gelöscht.");
            }
            Err(e) => {
                log::error!("Failed to delete {collection} record {record_id}: {e}");
                set_flash(&session, "Löschen fehlgeschlagen.");
            }
        }
    }

    Ok(helpers::redirect(&helpers::tab_location(collection)))
}
