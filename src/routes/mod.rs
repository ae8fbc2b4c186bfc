mod auth;
mod health_check;

pub use auth::{login, logout, refresh, REFRESH_COOKIE_NAME};
pub use health_check::health_check;
