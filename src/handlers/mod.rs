pub mod dashboard;
pub mod panel_handlers;
pub mod registration_handlers;

use actix_web::web;

/// Register all page routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard::index))
        // Paid toggle before the generic record routes
        .route(
            "/anmeldungen/{id}/toggle-paid",
            web::post().to(registration_handlers::toggle_paid),
        )
        // Panel CRUD, /{collection}/new BEFORE /{collection}/{id}
        .route("/{collection}/new", web::get().to(panel_handlers::new_form))
        .route("/{collection}", web::post().to(panel_handlers::create))
        .route("/{collection}/{id}/edit", web::get().to(panel_handlers::edit_form))
        .route("/{collection}/{id}", web::post().to(panel_handlers::update))
        .route("/{collection}/{id}/delete", web::get().to(panel_handlers::confirm_delete))
        .route("/{collection}/{id}/delete", web::post().to(panel_handlers::delete));
}
