use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::dashboard::DashboardController;
use crate::errors::AppError;
use crate::models::panel::PanelState;
use super::helpers;

/// Edit dialog pre-filled from the record's current values.
pub async fn edit_form(
    dashboard: web::Data<DashboardController>,
    session: Session,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (collection, id) = helpers::record_from_path(path.into_inner())?;

    let snapshot = dashboard.refresh().await?;
    let record = snapshot.record(collection, &id).ok_or(AppError::NotFound)?;

    match PanelState::open_edit(collection, &record).into_dialog() {
        Some(dialog) => helpers::render_dialog(&session, &dialog, &snapshot),
        None => Err(AppError::NotFound),
    }
}
