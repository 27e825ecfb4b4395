//! Positional argument templating for stored fact bodies.

/// Highest placeholder index a fact template may use.
pub const MAX_ARG_INDEX: usize = 10;

/// Expand `$1`..`$10` placeholders in `template` from a whitespace-separated
/// argument string.
///
/// Placeholders with no corresponding argument, or beyond index 10, are left
/// as literal text. Replacement runs from `$10` down to `$1` so substituting
/// `$1` cannot corrupt a literal `$10`. No recursion, no nested evaluation.
pub fn apply_args(template: &str, provided: &str) -> String {
    let args: Vec<&str> = provided.split_whitespace().collect();
    let mut result = template.to_string();
    for i in (1..=MAX_ARG_INDEX).rev() {
        if let Some(arg) = args.get(i - 1) {
            result = result.replace(&format!("${i}"), arg);
        }
    }
    result
}

/// Whether a stored template contains any positional placeholder.
pub fn has_placeholders(template: &str) -> bool {
    (1..=MAX_ARG_INDEX).any(|i| template.contains(&format!("${i}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_expansion() {
        assert_eq!(
            apply_args("welcome $1 to $2", "alice chat"),
            "welcome alice to chat"
        );
    }

    #[test]
    fn test_missing_argument_left_literal() {
        assert_eq!(apply_args("hi $1", ""), "hi $1");
        assert_eq!(apply_args("$1 and $2", "only"), "only and $2");
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(apply_args("$1 $1 $1", "go"), "go go go");
    }

    #[test]
    fn test_tenth_argument_not_corrupted_by_first() {
        assert_eq!(
            apply_args("$1 ... $10", "a b c d e f g h i j"),
            "a ... j"
        );
    }

    #[test]
    fn test_placeholder_beyond_limit_left_literal() {
        assert_eq!(
            apply_args("$11", "a b c d e f g h i j k"),
            "$11"
        );
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("hello $1"));
        assert!(has_placeholders("$10 only"));
        assert!(!has_placeholders("plain text"));
        assert!(!has_placeholders("money is $$"));
    }
}
