//! Request loading and validation

pub mod loader;

pub use loader::{QueryLoader, REQUIRED_KEYS};
