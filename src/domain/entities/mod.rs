//! Domain entity definitions.

mod dashboard;
mod login_request;
mod phone_number;
mod session;
mod verification_code;

pub use dashboard::{Dashboard, DetailEntry, DetailKind, MetricCard, Trend};
pub use login_request::LoginRequest;
pub use phone_number::{PHONE_NUMBER_MAX_LEN, PhoneNumber, sanitize_digits};
pub use session::Session;
pub use verification_code::{VERIFICATION_CODE_LEN, VerificationCode};
