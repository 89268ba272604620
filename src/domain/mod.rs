//! Domain layer with core entities and port definitions.

/// Alert definitions.
pub mod alert;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use alert::{Alert, AlertKind};
pub use entities::{LoginRequest, PhoneNumber, Session, VerificationCode};
pub use errors::{LoginError, NetworkError};
pub use ports::{AuthPort, CodeDeliveryPort};
