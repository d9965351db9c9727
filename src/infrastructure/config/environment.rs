use std::env;

pub const ENV_ENVIRONMENT: &str = "CRUDKIT_ENVIRONMENT";

const DEVELOPMENT: &str = "development";

/// Whether the environment name marks a development deployment. The marker
/// gates diagnostic verbosity only; anything else about behavior must not
/// depend on it.
pub fn is_development_marker(value: &str) -> bool {
    value.eq_ignore_ascii_case(DEVELOPMENT)
}

/// Read the environment marker from the process environment. Defaults to
/// disabled when the variable is missing.
pub fn is_development() -> bool {
    env::var(ENV_ENVIRONMENT)
        .map(|value| is_development_marker(&value))
        .unwrap_or(false)
}
