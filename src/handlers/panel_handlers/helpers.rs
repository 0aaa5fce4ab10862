use std::collections::HashMap;
use std::sync::Arc;

use actix_session::Session;
use actix_web::HttpResponse;

use crate::auth::csrf;
use crate::auth::session::set_flash;
use crate::dashboard::DashboardController;
use crate::errors::{AppError, render};
use crate::livingapps::{ApiError, LivingAppsClient, is_record_id};
use crate::models::collection::Collection;
use crate::models::dashboard::Snapshot;
use crate::models::panel::{Dialog, PanelState, SaveRequest};
use crate::templates_structs::{FormField, PageContext, PanelFormTemplate};

/// Collection from a path slug; unknown slugs are a 404.
pub fn collection_from_path(slug: &str) -> Result<Collection, AppError> {
    Collection::from_slug(slug).ok_or(AppError::NotFound)
}

/// `/{collection}/{id}` path parts, both validated.
pub fn record_from_path(path: (String, String)) -> Result<(Collection, String), AppError> {
    let (slug, id) = path;
    let collection = collection_from_path(&slug)?;
    if !is_record_id(&id) {
        return Err(AppError::NotFound);
    }
    Ok((collection, id))
}

pub fn tab_location(collection: Collection) -> String {
    format!("/?tab={}", collection.slug())
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

pub fn check_csrf(session: &Session, form: &HashMap<String, String>) -> Result<(), AppError> {
    csrf::verify(session, form.get(csrf::FORM_FIELD).map(String::as_str))
}

fn form_action(dialog: &Dialog) -> String {
    match &dialog.edit_id {
        Some(id) => format!("/{}/{id}", dialog.collection.slug()),
        None => format!("/{}", dialog.collection.slug()),
    }
}

/// Render the add/edit dialog; selection lists come from `snapshot`.
pub fn render_dialog(
    session: &Session,
    dialog: &Dialog,
    snapshot: &Snapshot,
) -> Result<HttpResponse, AppError> {
    let tmpl = PanelFormTemplate {
        ctx: PageContext::build(session, dialog.collection),
        title: dialog.title(),
        form_action: form_action(dialog),
        cancel_href: tab_location(dialog.collection),
        fields: FormField::for_dialog(dialog, snapshot),
        error: dialog.error.clone(),
        can_submit: dialog.can_submit(),
    };
    render(tmpl)
}

/// Snapshot for showing a dialog again after a failed save. The backend
/// may be down, so a failed refresh falls back to the last installed
/// snapshot (or an empty one) instead of losing the user's input.
async fn snapshot_for_retry(dashboard: &DashboardController) -> Arc<Snapshot> {
    match dashboard.refresh().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Showing dialog with the last known data, refresh failed: {e}");
            dashboard.current().await.unwrap_or_default()
        }
    }
}

async fn execute(client: &LivingAppsClient, request: &SaveRequest) -> Result<(), ApiError> {
    match request {
        SaveRequest::Create { collection, fields } => {
            let created = client.create(*collection, fields.clone()).await?;
            log::info!("Created {collection} record: {created}");
        }
        SaveRequest::Update { collection, record_id, fields } => {
            client.update(*collection, record_id, fields.clone()).await?;
            log::info!("Updated {collection} record {record_id}");
        }
    }
    Ok(())
}

/// Submit an open dialog. Success redirects to the tab with a flash;
/// an invalid draft or a failed call shows the dialog again with the
/// error and the user's input.
pub async fn save(
    dashboard: &DashboardController,
    session: &Session,
    collection: Collection,
    state: PanelState,
) -> Result<HttpResponse, AppError> {
    let (state, request) = state.submit(dashboard.client().location());

    let state = match request {
        Some(request) => {
            let outcome = execute(dashboard.client(), &request).await.map_err(|e| {
                log::error!("Failed to save {collection} record: {e}");
                format!("Speichern fehlgeschlagen: {e}")
            });
            state.save_finished(outcome)
        }
        None => state,
    };

    match state.into_dialog() {
        Some(dialog) => {
            let snapshot = snapshot_for_retry(dashboard).await;
            render_dialog(session, &dialog, &snapshot)
        }
        None => {
            set_flash(session, "Änderungen gespeichert.");
            Ok(redirect(&tab_location(collection)))
        }
    }
}
