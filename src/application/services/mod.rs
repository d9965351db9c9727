pub mod crud_service;

pub use crud_service::{CrudService, ensure_found};
