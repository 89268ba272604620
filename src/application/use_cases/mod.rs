//! Use case implementations.

mod login_use_case;
mod send_code_use_case;

pub use login_use_case::LoginUseCase;
pub use send_code_use_case::SendCodeUseCase;
