use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::dashboard::DashboardController;
use crate::errors::AppError;
use crate::models::draft::Draft;
use crate::models::panel::{Dialog, PanelState};
use crate::models::schema::schema;
use super::helpers;

/// Empty add dialog; date fields marked for it start at today.
pub async fn new_form(
    dashboard: web::Data<DashboardController>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let collection = helpers::collection_from_path(&path)?;
    let snapshot = dashboard.refresh().await?;
    let today = chrono::Local::now().date_naive();
    match PanelState::open_add(collection, today).into_dialog() {
        Some(dialog) => helpers::render_dialog(&session, &dialog, &snapshot),
        None => Err(AppError::NotFound),
    }
}

pub async fn create(
    dashboard: web::Data<DashboardController>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let collection = helpers::collection_from_path(&path)?;
    helpers::check_csrf(&session, &form)?;

    let draft = Draft::from_form(schema(collection), &form);
    let state = PanelState::Editing(Dialog::new(collection, None, draft));
    helpers::save(&dashboard, &session, collection, state).await
}
