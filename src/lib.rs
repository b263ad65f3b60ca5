//! GTAPPLY - GramTech Labs Application Form
//!
//! A terminal application form for the GramTech Labs skill development
//! program, with AI-generated feedback on submission.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::*;
pub use domain::*;
