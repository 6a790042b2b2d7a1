//! Shared types and logic for the IndieCrop Advisory Engine
//!
//! This crate contains models, validation and the pure calendar
//! organizer shared between the backend and the browser client (via
//! WASM).

pub mod calendar;
pub mod models;
pub mod validation;

pub use calendar::*;
pub use models::*;
pub use validation::*;
