//! HTTP inbound adapter exposing the booking REST endpoints.

use actix_web::web;

pub mod bookings;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;

/// Register the `/api` scope with extractor error handlers that emit domain
/// error payloads.
///
/// Callers provide [`state::HttpState`] as `web::Data` on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let _app = App::new().configure(hotel_booking::inbound::http::configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
            .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
            .service(bookings::create_booking)
            .service(bookings::get_booking)
            .service(bookings::list_bookings),
    );
}
