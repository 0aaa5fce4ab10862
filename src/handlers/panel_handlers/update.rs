use std::collections::HashMap;

use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::dashboard::DashboardController;
use crate::errors::AppError;
use crate::models::draft::Draft;
use crate::models::panel::{Dialog, PanelState};
use crate::models::schema::schema;
use super::helpers;

pub async fn update(
    dashboard: web::Data<DashboardController>,
    session: Session,
    path: web::Path<(String, String)>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let (collection, id) = helpers::record_from_path(path.into_inner())?;
    helpers::check_csrf(&session, &form)?;

    let draft = Draft::from_form(schema(collection), &form);
    let state = PanelState::Editing(Dialog::new(collection, Some(id), draft));
    helpers::save(&dashboard, &session, collection, state).await
}
