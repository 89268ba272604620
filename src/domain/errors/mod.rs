//! Domain error types.

mod login_error;
mod network_error;

pub use login_error::LoginError;
pub use network_error::NetworkError;
