//! Core library components.

pub mod codec;
pub mod constants;
pub mod domain;
pub mod quorum;
pub mod store;
pub mod types;
pub mod validation;
pub mod warden;

pub use warden::Warden;
