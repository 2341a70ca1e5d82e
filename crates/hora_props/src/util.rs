//! Shared helpers for the identifier vocabularies.

use crate::error::PropsError;

/// Resolve a display name against a vocabulary by exact match.
pub(crate) fn find_by_name<T: Copy>(
    all: &[T],
    name: fn(T) -> &'static str,
    table: &'static str,
    key: &str,
) -> Result<T, PropsError> {
    all.iter()
        .copied()
        .find(|&v| name(v) == key)
        .ok_or_else(|| PropsError::unknown(table, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Pair {
        Left,
        Right,
    }

    fn pair_name(p: Pair) -> &'static str {
        match p {
            Pair::Left => "Left",
            Pair::Right => "Right",
        }
    }

    #[test]
    fn finds_exact_match() {
        let r = find_by_name(&[Pair::Left, Pair::Right], pair_name, "pair", "Right");
        assert_eq!(r, Ok(Pair::Right));
    }

    #[test]
    fn match_is_case_sensitive() {
        let r = find_by_name(&[Pair::Left, Pair::Right], pair_name, "pair", "right");
        assert!(matches!(r, Err(PropsError::UnknownIdentifier { table: "pair", .. })));
    }
}
