// src/core/password.rs

use rand::Rng;
use tracing::debug;

use crate::core::error::ToolError;
use crate::core::models::{PasswordSpec, PasswordStrength, ToolResult};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
/// Removed from the charset when `exclude_similar` is set.
pub const SIMILAR: &[char] = &['i', 'l', '1', 'L', 'o', '0', 'O'];

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 100;

/// Assembles the charset in class order: uppercase, lowercase, digits,
/// symbols. The result may be empty.
pub fn charset(spec: &PasswordSpec) -> Vec<char> {
    let mut set = String::new();
    for (enabled, class) in [
        (spec.uppercase, UPPERCASE),
        (spec.lowercase, LOWERCASE),
        (spec.numbers, NUMBERS),
        (spec.symbols, SYMBOLS),
    ] {
        if enabled {
            set.push_str(class);
        }
    }
    set.chars()
        .filter(|c| !(spec.exclude_similar && SIMILAR.contains(c)))
        .collect()
}

/// Draws `spec.length` characters uniformly and independently from the
/// charset.
///
/// An empty charset (no class selected, or only classes emptied by
/// `exclude_similar`) is a validation error, as is a length outside
/// `MIN_LENGTH..=MAX_LENGTH`.
pub fn generate<R: Rng + ?Sized>(spec: &PasswordSpec, rng: &mut R) -> ToolResult<String> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&spec.length) {
        return Err(ToolError::validation(format!(
            "Password length must be between {MIN_LENGTH} and {MAX_LENGTH}"
        )));
    }
    let chars = charset(spec);
    if chars.is_empty() {
        return Err(ToolError::validation("Please select at least one character type"));
    }
    debug!(length = spec.length, charset_size = chars.len(), "Generating password.");
    Ok((0..spec.length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect())
}

/// Rates a password purely by its length.
pub fn strength(password: &str) -> PasswordStrength {
    match password.chars().count() {
        0..8 => PasswordStrength::Weak,
        8..12 => PasswordStrength::Medium,
        12..16 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_classes(length: usize) -> PasswordSpec {
        PasswordSpec { length, ..PasswordSpec::default() }
    }

    #[test]
    fn charset_follows_class_order() {
        let spec = PasswordSpec {
            uppercase: false,
            symbols: false,
            ..PasswordSpec::default()
        };
        let set: String = charset(&spec).into_iter().collect();
        assert_eq!(set, format!("{LOWERCASE}{NUMBERS}"));
    }

    #[test]
    fn generates_exact_length_from_union_of_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        let password = generate(&all_classes(16), &mut rng).unwrap();
        assert_eq!(password.chars().count(), 16);
        let union = format!("{UPPERCASE}{LOWERCASE}{NUMBERS}{SYMBOLS}");
        assert!(password.chars().all(|c| union.contains(c)));
    }

    #[test]
    fn exclude_similar_removes_ambiguous_characters() {
        let spec = PasswordSpec { exclude_similar: true, length: 100, ..PasswordSpec::default() };
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let password = generate(&spec, &mut rng).unwrap();
            assert!(!password.chars().any(|c| SIMILAR.contains(&c)), "{password}");
        }
    }

    #[test]
    fn no_class_selected_is_an_error() {
        let spec = PasswordSpec {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            ..PasswordSpec::default()
        };
        let err = generate(&spec, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, ToolError::validation("Please select at least one character type"));
    }

    #[test]
    fn digits_without_similar_keeps_the_rest() {
        let spec = PasswordSpec {
            uppercase: false,
            lowercase: false,
            symbols: false,
            exclude_similar: true,
            ..PasswordSpec::default()
        };
        let set: String = charset(&spec).into_iter().collect();
        assert_eq!(set, "23456789");
    }

    #[test]
    fn length_bounds_are_enforced() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&all_classes(3), &mut rng).is_err());
        assert!(generate(&all_classes(101), &mut rng).is_err());
        assert_eq!(generate(&all_classes(4), &mut rng).unwrap().len(), 4);
        assert_eq!(generate(&all_classes(100), &mut rng).unwrap().len(), 100);
    }

    #[test]
    fn strength_thresholds() {
        assert_eq!(strength(""), PasswordStrength::Weak);
        assert_eq!(strength("1234567"), PasswordStrength::Weak);
        assert_eq!(strength("12345678"), PasswordStrength::Medium);
        assert_eq!(strength("123456789012"), PasswordStrength::Strong);
        assert_eq!(strength("1234567890123456"), PasswordStrength::VeryStrong);
    }
}
