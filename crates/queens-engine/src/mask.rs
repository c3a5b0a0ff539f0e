//! Occupancy mask representation and operations.
//!
//! A mask is a 64-bit integer used as a compact set of line indices: one bit
//! per row, or one bit per diagonal. A set bit means the line is occupied.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A 64-bit occupancy mask.
///
/// Bit `i` set means line `i` already holds a queen.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Mask(pub u64);

impl Mask {
    /// Number of lines a mask can track.
    pub const BITS: u32 = u64::BITS;

    /// Empty mask (no lines occupied).
    pub const EMPTY: Mask = Mask(0);

    /// Creates a mask with only line `index` set.
    #[inline]
    pub const fn bit(index: u32) -> Self {
        debug_assert!(index < Self::BITS);
        Mask(1u64 << index)
    }

    /// Returns the number of occupied lines.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the two masks share any occupied line.
    #[inline]
    pub const fn intersects(self, other: Mask) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Mask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Mask(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mask({:#066b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_bit() {
        let m = Mask::bit(3);
        assert_eq!(m.0, 0b1000);
        assert!(m.intersects(Mask(0b1100)));
        assert!(!m.intersects(Mask(0b0100)));
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn mask_empty() {
        assert_eq!(Mask::default(), Mask::EMPTY);
        assert_eq!(Mask::EMPTY.count(), 0);
    }

    #[test]
    fn mask_intersects() {
        let a = Mask(0b0110);
        assert!(a.intersects(Mask::bit(1)));
        assert!(!a.intersects(Mask::bit(0)));
        assert!(!Mask::EMPTY.intersects(Mask(!0)));
    }

    #[test]
    fn mask_or_assign() {
        let mut m = Mask::EMPTY;
        m |= Mask::bit(0);
        m |= Mask::bit(63);
        assert_eq!(m.count(), 2);
        assert!(m.intersects(Mask(1 << 63)));
        assert_eq!(Mask::bit(1) | Mask::bit(2), Mask(0b110));
    }
}
