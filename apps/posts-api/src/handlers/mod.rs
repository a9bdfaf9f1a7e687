//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_error_handler, route_not_found};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/posts")
                .route(web::post().to(posts::create_post)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::update_post))
                .route(web::delete().to(posts::delete_post)),
        )
        .route("/articles/{limit}/{offset}", web::get().to(posts::list_posts))
        .default_service(web::to(route_not_found));
}
