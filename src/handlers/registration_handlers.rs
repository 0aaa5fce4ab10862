use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::auth::csrf;
use crate::dashboard::DashboardController;
use crate::errors::AppError;
use crate::livingapps::is_record_id;
use crate::models::collection::Collection;
use super::panel_handlers::helpers::{redirect, tab_location};

#[derive(Deserialize)]
pub struct TogglePaidForm {
    pub csrf_token: String,
    /// Paid flag as the table showed it.
    #[serde(default)]
    pub paid: String,
}

/// One-click Bezahlt/Offen switch. Sends only the flipped flag; a failure
/// is logged and the table simply shows the old state again.
pub async fn toggle_paid(
    dashboard: web::Data<DashboardController>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<TogglePaidForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, Some(form.csrf_token.as_str()))?;

    let id = path.into_inner();
    if !is_record_id(&id) {
        return Err(AppError::NotFound);
    }

    let paid = form.paid != "true";
    let mut fields = Map::new();
    fields.insert("bezahlt".to_string(), Value::Bool(paid));

    match dashboard.client().update(Collection::Registrations, &id, fields).await {
        Ok(()) => log::info!("Registration {id} marked as {}", if paid { "paid" } else { "open" }),
        Err(e) => log::error!("Failed to update payment status of {id}: {e}"),
    }

    Ok(redirect(&tab_location(Collection::Registrations)))
}
