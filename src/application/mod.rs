//! Application layer managing state and the submission workflow.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the form record, the submission phase, and the hand-off to the
//! feedback generator.

pub mod state;

pub use state::*;
