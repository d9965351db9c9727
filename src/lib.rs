//! Generic scaffold for layered CRUD services.
//!
//! The crate defines the three-layer capability chain every concrete
//! feature implements — [`Repository`](domain::repositories::Repository) →
//! [`CrudService`](application::services::CrudService) →
//! [`CrudController`](presentation::CrudController) — together with the
//! error-translation rules between layers, a persistence context that
//! stamps audit timestamps on commit, connection-string composition and
//! pagination-filter validation. It carries no business entities of its
//! own; features instantiate the chain with their concrete types.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
