pub mod controller;
pub mod errors;
pub mod helpers;

pub use controller::CrudController;
pub use errors::BoundaryError;
