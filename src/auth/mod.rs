/// Authentication module
///
/// Password verification plus access/refresh token issuance and validation.

mod claims;
mod jwt;
mod password;

pub use claims::AccessClaims;
pub use claims::RefreshClaims;
pub use jwt::generate_access_token;
pub use jwt::generate_refresh_token;
pub use jwt::validate_access_token;
pub use jwt::validate_refresh_token;
pub use password::hash_password;
pub use password::verify_password;
