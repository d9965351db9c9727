/// Map a model-style name (`CreatedAt`, `UserProfile`) to the
/// lower-snake-case form used for every schema, table and column name.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in name.chars() {
        if ch.is_uppercase() {
            if prev_lower_or_digit {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower_or_digit = false;
        } else if ch == ' ' || ch == '-' {
            out.push('_');
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::to_snake_case;

    #[test]
    fn pascal_case_fields_map_to_snake_case() {
        assert_eq!(to_snake_case("CreatedAt"), "created_at");
        assert_eq!(to_snake_case("UpdatedAt"), "updated_at");
        assert_eq!(to_snake_case("Id"), "id");
    }

    #[test]
    fn acronym_runs_stay_together() {
        assert_eq!(to_snake_case("UserID"), "user_id");
    }

    #[test]
    fn already_snake_case_names_are_untouched() {
        assert_eq!(to_snake_case("page_size"), "page_size");
    }

    #[test]
    fn spaces_and_dashes_become_underscores() {
        assert_eq!(to_snake_case("audit-record name"), "audit_record_name");
    }
}
