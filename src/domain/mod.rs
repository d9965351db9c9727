pub mod audit;
pub mod errors;
pub mod filters;
pub mod repositories;
pub mod validation;
