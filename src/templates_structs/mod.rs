// Template context structures for Askama templates.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::take_flash;
use crate::models::collection::Collection;

mod dashboard;
mod panel;

pub use self::dashboard::{DashboardTemplate, PanelView, StatCard};
pub use self::panel::{ConfirmDeleteTemplate, FormField, FormOption, PanelFormTemplate};

pub const APP_NAME: &str = "Kursverwaltung";

/// Tab bar entry.
pub struct TabLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Common context shared by all pages.
/// Templates access these as `ctx.flash`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: &'static str,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub tabs: Vec<TabLink>,
}

impl PageContext {
    pub fn build(session: &Session, active: Collection) -> Self {
        let flash = take_flash(session);
        let csrf_token = csrf::session_token(session);
        let tabs = Collection::ALL
            .into_iter()
            .map(|c| TabLink { slug: c.slug(), label: c.label(), active: c == active })
            .collect();
        Self { app_name: APP_NAME, flash, csrf_token, tabs }
    }
}
