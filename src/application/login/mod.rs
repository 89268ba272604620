//! Login flow: validation, cooldown and collaborator orchestration.

mod controller;
mod countdown;
mod runtime;

pub use controller::{
    CodeDispatch, LoginController, LoginDispatch, LoginFlow, LoginSnapshot, OperationTicket,
};
pub use countdown::Countdown;
pub use runtime::{LoginHandle, LoginIntent, LoginRuntime, LoginTimings};
