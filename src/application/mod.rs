//! Application layer with the login flow and use cases.

/// Login flow controller and runtime.
pub mod login;
/// Use case implementations.
pub mod use_cases;

pub use login::{LoginController, LoginFlow, LoginHandle, LoginIntent, LoginRuntime, LoginSnapshot};
pub use use_cases::{LoginUseCase, SendCodeUseCase};
