use std::env;

use serde::Deserialize;

use crate::domain::validation::{Validate, Violation};

pub const ENV_DB_CONNECTION: &str = "CRUDKIT_DB_CONNECTION";
pub const ENV_DB_USERNAME: &str = "CRUDKIT_DB_USERNAME";
pub const ENV_DB_PASSWORD: &str = "CRUDKIT_DB_PASSWORD";

/// Datastore connection settings: a base connection fragment plus the two
/// credential fragments, supplied by process configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub db_connection: String,
    pub db_user_name: String,
    pub db_password: String,
}

impl DatabaseConfig {
    /// Load the three fragments from the process environment. A `.env`
    /// file is honored when present; missing variables become empty
    /// fragments and are caught by [`Validate::validate`].
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            db_connection: env::var(ENV_DB_CONNECTION).unwrap_or_default(),
            db_user_name: env::var(ENV_DB_USERNAME).unwrap_or_default(),
            db_password: env::var(ENV_DB_PASSWORD).unwrap_or_default(),
        }
    }

    /// The full connection string: base fragment first, username second,
    /// password last. The order matters because the driver may honor the
    /// last occurrence of a duplicate key.
    pub fn full_connection_string(&self) -> String {
        merge_with_delimiter(
            &merge_with_delimiter(
                &self.db_connection,
                &format!("Username={}", self.db_user_name),
                ';',
            ),
            &format!("Password={}", self.db_password),
            ';',
        )
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.db_connection.is_empty() {
            violations.push(Violation::new("db_connection", "required", "min_length 1"));
        }
        if self.db_user_name.is_empty() {
            violations.push(Violation::new("db_user_name", "required", "min_length 1"));
        }
        if self.db_password.is_empty() {
            violations.push(Violation::new("db_password", "required", "min_length 1"));
        }

        violations
    }
}

/// Join two connection-string fragments without doubling the delimiter.
/// An empty fragment is dropped rather than merged.
pub fn merge_with_delimiter(one: &str, another: &str, delimiter: char) -> String {
    if one.is_empty() {
        return another.to_string();
    }
    if another.is_empty() {
        return one.to_string();
    }
    format!(
        "{}{}{}",
        one.trim_end_matches(delimiter),
        delimiter,
        another.trim_start_matches(delimiter)
    )
}

#[cfg(test)]
mod tests {
    use super::{DatabaseConfig, merge_with_delimiter};
    use crate::domain::validation::Validate;

    #[test]
    fn empty_left_fragment_is_dropped() {
        assert_eq!(merge_with_delimiter("", "Username=x", ';'), "Username=x");
    }

    #[test]
    fn empty_right_fragment_is_dropped() {
        assert_eq!(merge_with_delimiter("Host=h", "", ';'), "Host=h");
    }

    #[test]
    fn trailing_delimiter_is_not_doubled() {
        assert_eq!(
            merge_with_delimiter("Host=h;Db=d;", "Username=u;", ';'),
            "Host=h;Db=d;Username=u"
        );
    }

    #[test]
    fn fragments_merge_left_to_right() {
        assert_eq!(
            merge_with_delimiter(&merge_with_delimiter("Host=h", "Username=u", ';'), "Password=p", ';'),
            "Host=h;Username=u;Password=p"
        );
    }

    #[test]
    fn full_connection_string_orders_base_username_password() {
        let config = DatabaseConfig {
            db_connection: "Host=localhost;Database=app;".to_string(),
            db_user_name: "svc".to_string(),
            db_password: "secret".to_string(),
        };
        assert_eq!(
            config.full_connection_string(),
            "Host=localhost;Database=app;Username=svc;Password=secret"
        );
    }

    #[test]
    fn missing_settings_are_reported_per_field() {
        let config = DatabaseConfig {
            db_connection: "Host=localhost".to_string(),
            db_user_name: String::new(),
            db_password: String::new(),
        };
        let violations = config.validate();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "db_user_name");
        assert_eq!(violations[1].field, "db_password");
    }
}
