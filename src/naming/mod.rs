//! Naming convention classification and profiling.

use crate::constants::DOMINANT_SHARE_MIN;
use crate::types::{Dominant, NamingConvention, NamingStat};

/// Classify one identifier or filename stem.
///
/// Checks are ordered so a name matches at most one convention; anything
/// left over (mixed separators, leading digits, symbols) is `Unknown`.
pub fn classify(name: &str) -> NamingConvention {
    if name.is_empty() {
        return NamingConvention::Unknown;
    }
    let has_upper = name.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = name.chars().any(|c| c.is_ascii_lowercase());
    let alnum = name.chars().all(|c| c.is_ascii_alphanumeric());
    let first = name.chars().next().unwrap_or_default();

    if first.is_ascii_uppercase() && has_lower && alnum {
        return NamingConvention::PascalCase;
    }
    if first.is_ascii_lowercase() && has_upper && alnum {
        return NamingConvention::CamelCase;
    }
    if !has_upper
        && name.contains('_')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return NamingConvention::SnakeCase;
    }
    if !has_upper
        && name.contains('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return NamingConvention::KebabCase;
    }
    if !has_lower
        && has_upper
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        return NamingConvention::Uppercase;
    }
    if first.is_ascii_lowercase() && !has_upper && alnum {
        return NamingConvention::Lowercase;
    }
    NamingConvention::Unknown
}

/// Tally conventions over a population of names.
///
/// `dominant` is `None` for an empty population, the winning convention when
/// it covers at least [`DOMINANT_SHARE_MIN`] of the names, and `Mixed`
/// otherwise. `Unknown` names count toward the total but never win.
pub fn profile<I, S>(names: I) -> NamingStat
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stat = NamingStat::default();
    for name in names {
        *stat.counts.entry(classify(name.as_ref())).or_insert(0) += 1;
        stat.total += 1;
    }
    if stat.total == 0 {
        return stat;
    }

    let winner = stat
        .counts
        .iter()
        .filter(|(c, _)| **c != NamingConvention::Unknown)
        .max_by_key(|(_, count)| **count);
    stat.dominant = Some(match winner {
        Some((convention, count)) if *count as f64 / stat.total as f64 >= DOMINANT_SHARE_MIN => {
            Dominant::Convention(*convention)
        }
        _ => Dominant::Mixed,
    });
    stat
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_vector() {
        let expected = [
            ("fetchData", NamingConvention::CamelCase),
            ("UserModel", NamingConvention::PascalCase),
            ("user_model", NamingConvention::SnakeCase),
            ("user-model", NamingConvention::KebabCase),
            ("USERMODEL", NamingConvention::Uppercase),
            ("usermodel", NamingConvention::Lowercase),
        ];
        for (name, convention) in expected {
            assert_eq!(classify(name), convention, "{}", name);
        }
    }

    #[test]
    fn test_classify_rejects_mixed_forms() {
        assert_eq!(classify(""), NamingConvention::Unknown);
        assert_eq!(classify("User_Model"), NamingConvention::Unknown);
        assert_eq!(classify("user-model_x"), NamingConvention::Unknown);
        assert_eq!(classify("3users"), NamingConvention::Unknown);
        assert_eq!(classify("données"), NamingConvention::Unknown);
    }

    #[test]
    fn test_screaming_snake_is_uppercase() {
        assert_eq!(classify("MAX_RETRIES"), NamingConvention::Uppercase);
    }

    #[test]
    fn test_profile_empty_population() {
        let stat = profile(Vec::<String>::new());
        assert_eq!(stat.total, 0);
        assert!(stat.dominant.is_none());
    }

    #[test]
    fn test_profile_dominant() {
        let stat = profile(["fetchData", "parseInput", "saveUser", "user_count"]);
        assert_eq!(stat.total, 4);
        assert_eq!(
            stat.dominant,
            Some(Dominant::Convention(NamingConvention::CamelCase))
        );
        assert!((stat.dominant_share().unwrap() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_profile_mixed_below_threshold() {
        let stat = profile(["fetchData", "user_count", "UserModel", "save-user"]);
        assert_eq!(stat.dominant, Some(Dominant::Mixed));
    }

    #[test]
    fn test_unknown_never_dominates() {
        let stat = profile(["User_Model", "Save-User", "3users"]);
        assert_eq!(stat.dominant, Some(Dominant::Mixed));
    }

    proptest! {
        #[test]
        fn prop_camel_population_dominates(names in prop::collection::vec("[a-z]{2,8}[A-Z][a-z]{1,6}", 1..40)) {
            let stat = profile(&names);
            prop_assert_eq!(
                stat.dominant,
                Some(Dominant::Convention(NamingConvention::CamelCase))
            );
        }

        #[test]
        fn prop_classify_total_is_population(names in prop::collection::vec("[a-zA-Z_-]{0,12}", 0..40)) {
            let stat = profile(&names);
            prop_assert_eq!(stat.total, names.len());
            prop_assert_eq!(stat.counts.values().sum::<usize>(), names.len());
        }
    }
}
