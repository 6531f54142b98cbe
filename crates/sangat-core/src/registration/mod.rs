//! Sangat registration records: model, form validation, search, persistence
//! and export.

pub mod export;
mod model;
pub mod search;
pub mod store;
mod validate;

pub use model::{Answer, NewRegistration, Registration};
pub use validate::ValidationError;
