//! HTTP handlers and route configuration.

mod categories;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/search", web::get().to(posts::search_posts))
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list_categories))
                    .route("/{name}/posts", web::get().to(categories::category_posts)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}
