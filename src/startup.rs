use actix_web::dev::Server;
use actix_web::error::JsonPayloadError;
use actix_web::{web, App, HttpRequest, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;

use crate::configuration::JwtSettings;
use crate::error::{AppError, ValidationError};
use crate::logger::RequestLogger;
use crate::routes::{health_check, login, logout, refresh};
use crate::user_store::UserStore;

/// Bodies that fail to parse as a login request get the same 400 as
/// a body with missing fields.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(ValidationError::MalformedBody(err.to_string())).into()
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn UserStore>,
    jwt_config: JwtSettings,
) -> Result<Server, std::io::Error> {
    let store: web::Data<dyn UserStore> = web::Data::from(store);
    let jwt_config = web::Data::new(jwt_config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLogger)
            // Shared state
            .app_data(store.clone())
            .app_data(jwt_config.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(login))
                    .route("/refresh", web::get().to(refresh))
                    .route("/logout", web::get().to(logout)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
