mod auth_port;
mod code_delivery_port;

pub use auth_port::AuthPort;
pub use code_delivery_port::CodeDeliveryPort;

#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::code_delivery_port::mock::MockCodeDelivery;
}
