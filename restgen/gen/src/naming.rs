//! Identifier case conversion.
//!
//! Every generated module spells a field or edge name through these
//! functions, and modules are generated independently, so the functions are
//! pure and total: the same input always yields the same output.
//!
//! ## Conventions
//!
//! | Purpose | Function | `FullName` | `created_at` |
//! |---|---|---|---|
//! | Generated property | [`to_camel_case_with_first_lower`] | `fullName` | `createdAt` |
//! | Wire payload key | [`to_snake_case`] | `full_name` | `created_at` |
//! | REST path segment | [`to_snake_case`] | `full_name` | `created_at` |
//! | Method name suffix | [`to_capitalized_camel_case`] | `FullName` | `CreatedAt` |
//!
//! Word boundaries are only detected at a single ASCII lowercase letter
//! followed by an ASCII uppercase letter. Runs of capitals (`HTTPServer`)
//! are not split, so `to_snake_case("HTTPServer")` is `httpserver`.

/// Collapses `-`/`_` separated segments into camelCase.
///
/// Each run of separators is removed and the character following it (if any)
/// is upper-cased. The first character is left untouched.
///
/// ```
/// use restgen_gen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("created_at"), "createdAt");
/// assert_eq!(to_camel_case("owner-team"), "ownerTeam");
/// assert_eq!(to_camel_case("a__b"), "aB");
/// assert_eq!(to_camel_case("FullName"), "FullName");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if is_separator(c) {
            while chars.next_if(|&next| is_separator(next)).is_some() {}
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Inserts `_` at each lowercase→uppercase transition, then lower-cases.
///
/// ```
/// use restgen_gen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("FullName"), "full_name");
/// assert_eq!(to_snake_case("appealNumber"), "appeal_number");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_boundaries(s, '_')
}

/// Inserts `-` at each lowercase→uppercase transition, then lower-cases.
///
/// ```
/// use restgen_gen::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("FullName"), "full-name");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    split_boundaries(s, '-')
}

/// camelCase with the first character forced to lowercase.
///
/// The first character is taken from the raw input and lower-cased; the rest
/// comes from [`to_camel_case`] with its first character dropped.
///
/// ```
/// use restgen_gen::naming::to_camel_case_with_first_lower;
///
/// assert_eq!(to_camel_case_with_first_lower("FullName"), "fullName");
/// assert_eq!(to_camel_case_with_first_lower("full_name"), "fullName");
/// assert_eq!(to_camel_case_with_first_lower("ID"), "iD");
/// ```
pub fn to_camel_case_with_first_lower(s: &str) -> String {
    let mut raw = s.chars();
    let Some(first) = raw.next() else {
        return String::new();
    };

    let mut out: String = first.to_lowercase().collect();
    out.extend(to_camel_case(s).chars().skip(1));
    out
}

/// Upper-cases the first character and camel-cases the remainder with
/// [`to_camel_case_with_first_lower`].
///
/// Used to build accessor names such as `get<Edge>` and `connect<Edge>`.
///
/// ```
/// use restgen_gen::naming::to_capitalized_camel_case;
///
/// assert_eq!(to_capitalized_camel_case("owner"), "Owner");
/// assert_eq!(to_capitalized_camel_case("owner_team"), "OwnerTeam");
/// assert_eq!(to_capitalized_camel_case("Owner"), "Owner");
/// ```
pub fn to_capitalized_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out: String = first.to_uppercase().collect();
    out.push_str(&to_camel_case_with_first_lower(chars.as_str()));
    out
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_'
}

fn split_boundaries(s: &str, separator: char) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if let Some(p) = prev
            && p.is_ascii_lowercase()
            && c.is_ascii_uppercase()
        {
            out.push(separator);
        }
        out.push(c);
        prev = Some(c);
    }

    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // === to_camel_case tests ===

    #[test]
    fn camel_case_removes_separators() {
        assert_eq!(to_camel_case("appeal_number"), "appealNumber");
        assert_eq!(to_camel_case("mail-number"), "mailNumber");
        assert_eq!(to_camel_case("a_b_c"), "aBC");
    }

    #[test]
    fn camel_case_collapses_separator_runs() {
        assert_eq!(to_camel_case("a__b"), "aB");
        assert_eq!(to_camel_case("a-_-b"), "aB");
    }

    #[test]
    fn camel_case_drops_trailing_separator() {
        assert_eq!(to_camel_case("name_"), "name");
        assert_eq!(to_camel_case("___"), "");
    }

    #[test]
    fn camel_case_leading_separator_capitalizes() {
        assert_eq!(to_camel_case("_id"), "Id");
    }

    #[test]
    fn camel_case_empty() {
        assert_eq!(to_camel_case(""), "");
    }

    // === to_snake_case / to_kebab_case tests ===

    #[test]
    fn snake_case_splits_single_boundaries() {
        assert_eq!(to_snake_case("AppealNumber"), "appeal_number");
        assert_eq!(to_snake_case("mailNumberID"), "mail_number_id");
    }

    #[test]
    fn snake_case_does_not_split_capital_runs() {
        assert_eq!(to_snake_case("HTTPServer"), "httpserver");
        assert_eq!(to_snake_case("ID"), "id");
    }

    #[test]
    fn snake_case_ignores_digits_as_boundaries() {
        assert_eq!(to_snake_case("v2Name"), "v2name");
        assert_eq!(to_snake_case("name2"), "name2");
    }

    #[test]
    fn kebab_case_uses_hyphen() {
        assert_eq!(to_kebab_case("AppealNumber"), "appeal-number");
        assert_eq!(to_kebab_case("closedAt"), "closed-at");
    }

    // === to_camel_case_with_first_lower tests ===

    #[test]
    fn first_lower_from_pascal_case() {
        assert_eq!(to_camel_case_with_first_lower("AppealNumber"), "appealNumber");
        assert_eq!(to_camel_case_with_first_lower("User"), "user");
    }

    #[test]
    fn first_lower_from_snake_case() {
        assert_eq!(to_camel_case_with_first_lower("closed_at"), "closedAt");
    }

    #[test]
    fn first_lower_keeps_raw_first_character_for_leading_separator() {
        // first character comes from the raw input, remainder from camelCase
        assert_eq!(to_camel_case_with_first_lower("_id"), "_d");
    }

    #[test]
    fn first_lower_empty() {
        assert_eq!(to_camel_case_with_first_lower(""), "");
    }

    // === to_capitalized_camel_case tests ===

    #[test]
    fn capitalized_camel_case_for_accessors() {
        assert_eq!(to_capitalized_camel_case("recipient"), "Recipient");
        assert_eq!(to_capitalized_camel_case("mail_source"), "MailSource");
        assert_eq!(to_capitalized_camel_case("x"), "X");
        assert_eq!(to_capitalized_camel_case(""), "");
    }

    #[test]
    fn capitalized_camel_case_lowers_second_character() {
        assert_eq!(to_capitalized_camel_case("ABC"), "AbC");
    }

    // Property-based tests using proptest
    proptest! {
        #[test]
        fn first_lower_starts_lowercase(s in "[A-Za-z][A-Za-z_-]{0,15}") {
            let camel = to_camel_case_with_first_lower(&s);
            let first = camel.chars().next().unwrap();
            prop_assert!(first.is_lowercase());
        }

        #[test]
        fn snake_round_trips_through_camel_from_snake(s in "[a-z]{1,6}(_[a-z]{1,6}){0,3}") {
            let camel = to_camel_case_with_first_lower(&s);
            prop_assert_eq!(to_snake_case(&camel), to_snake_case(&s));
        }

        #[test]
        fn snake_round_trips_through_camel_from_pascal(s in "[A-Za-z][a-z]{1,5}([A-Z][a-z]{1,5}){0,3}") {
            let camel = to_camel_case_with_first_lower(&s);
            prop_assert_eq!(to_snake_case(&camel), to_snake_case(&s));
        }

        #[test]
        fn conversions_are_deterministic(s in "\\PC{0,20}") {
            prop_assert_eq!(to_camel_case(&s), to_camel_case(&s));
            prop_assert_eq!(to_snake_case(&s), to_snake_case(&s));
            prop_assert_eq!(to_kebab_case(&s), to_kebab_case(&s));
        }

        #[test]
        fn snake_output_has_no_uppercase_ascii(s in "[A-Za-z_]{0,20}") {
            prop_assert!(!to_snake_case(&s).chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
