//! Cyclic tiling of short base sequences across ordered keys.
//!
//! Most per-sign and per-house properties repeat with a short period:
//! modes cycle every three signs, genders every two, elements every four.
//! Rather than listing each value by hand, the tables are generated by
//! tiling a base sequence across the twelve keys.
//!
//! Two tilings are supported:
//! - [`Tiling::RoundRobin`]: position `i` takes `base[i mod len(base)]`.
//! - [`Tiling::Block`]: position `i` takes `base[i div block]`, where
//!   `block = ceil(total / len(base))`, so each base value is repeated
//!   consecutively (seasons over signs: three signs per season).

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

/// How a base sequence is laid out across the target positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tiling {
    /// `a b c a b c ...`
    RoundRobin,
    /// `a a a b b b ...`
    Block,
}

impl Tiling {
    /// Slot in a base sequence of `base_len` values for position `index`
    /// of an assignment `total_len` long.
    ///
    /// Callers guarantee `base_len > 0` and `index < total_len`; under
    /// those bounds the result is always `< base_len`.
    pub(crate) const fn slot(self, index: usize, base_len: usize, total_len: usize) -> usize {
        match self {
            Self::RoundRobin => index % base_len,
            Self::Block => index / max(total_len.div_ceil(base_len), 1),
        }
    }
}

/// Tile `base` across `len` positions.
///
/// An empty base yields an empty assignment regardless of `len`.
pub fn tile<T: Copy>(base: &[T], len: usize, tiling: Tiling) -> Vec<T> {
    if base.is_empty() {
        return Vec::new();
    }
    (0..len)
        .map(|i| base[tiling.slot(i, base.len(), len)])
        .collect()
}

/// Fixed-size form of [`tile`], used to build the per-sign and per-house
/// tables. The base length is checked at compile time.
pub fn tile_array<T: Copy, const B: usize, const N: usize>(base: &[T; B], tiling: Tiling) -> [T; N] {
    const { assert!(B > 0, "tiling base must be non-empty") };
    std::array::from_fn(|i| base[tiling.slot(i, B, N)])
}
