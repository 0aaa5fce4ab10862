use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::dashboard::DashboardController;
use crate::errors::{AppError, render};
use crate::models::collection::Collection;
use crate::models::schema::schema;
use crate::models::table;
use crate::templates_structs::{DashboardTemplate, PageContext, PanelView, StatCard};

#[derive(Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

/// Stats cards plus the active tab's table. Every visit re-fetches all
/// five collections; a failing collection fails the page.
pub async fn index(
    dashboard: web::Data<DashboardController>,
    session: Session,
    query: web::Query<TabQuery>,
) -> Result<HttpResponse, AppError> {
    let active = query
        .tab
        .as_deref()
        .and_then(Collection::from_slug)
        .unwrap_or(Collection::Courses);

    let snapshot = dashboard.refresh().await?;
    let schema = schema(active);

    let tmpl = DashboardTemplate {
        ctx: PageContext::build(&session, active),
        stats: StatCard::from_stats(&snapshot.stats()),
        panel: PanelView::new(schema, table::build(schema, &snapshot)),
    };
    render(tmpl)
}
