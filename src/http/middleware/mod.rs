//! Request middleware.

pub mod https_switch;

pub use https_switch::{https_switch_middleware, SwitchState};
