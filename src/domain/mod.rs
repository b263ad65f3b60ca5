pub mod content;
pub mod errors;
pub mod models;
pub mod services;

pub use content::*;
pub use errors::*;
pub use models::*;
pub use services::*;
