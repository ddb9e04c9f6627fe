//! Short code generation.
//!
//! Codes are decimal strings drawn uniformly from a fixed numeric range.
//! Uniqueness is not guaranteed here; callers retry against the storage
//! unique constraint.

use rand::Rng;

/// Inclusive lower bound of generated codes.
pub const CODE_MIN: i64 = 1_000_000;

/// Exclusive upper bound of generated codes.
pub const CODE_MAX: i64 = 100_000_000;

/// Generates a random short code.
///
/// The result is a 7 or 8 digit decimal string in `[CODE_MIN, CODE_MAX)`.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert!(code.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn generate_code() -> String {
    rand::rng().random_range(CODE_MIN..CODE_MAX).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_is_decimal() {
        let code = generate_code();
        assert!(!code.is_empty());
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_within_range() {
        for _ in 0..1000 {
            let code = generate_code();
            let value: i64 = code.parse().unwrap();
            assert!((CODE_MIN..CODE_MAX).contains(&value));
        }
    }

    #[test]
    fn test_generate_code_length() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(code.len() == 7 || code.len() == 8);
        }
    }

    #[test]
    fn test_generate_code_varies() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        // 100 draws from a 99M space; a single repeated value is fine, a
        // constant generator is not.
        assert!(codes.len() > 1);
    }
}
