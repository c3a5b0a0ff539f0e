//! Exhaustive column-to-row assignment counter.

/// A base-`N` counter with one digit per column.
///
/// `digits()[column]` is the row of the queen in that column. Column 0 is
/// the least significant digit, so starting from all zeros and advancing
/// until the counter wraps visits every one of the `N^N` assignments
/// exactly once, in increasing numeric order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odometer<const N: usize> {
    digits: [u8; N],
}

impl<const N: usize> Odometer<N> {
    const DIGIT_CHECK: () = assert!(N <= u8::MAX as usize, "odometer digits are u8");

    /// Creates a counter at the first assignment (every queen on row 0).
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIGIT_CHECK;
        Odometer { digits: [0; N] }
    }

    /// Returns the current assignment.
    #[inline]
    pub const fn digits(&self) -> &[u8; N] {
        &self.digits
    }

    /// Steps to the next assignment.
    ///
    /// Returns false once the carry runs past the last column, leaving the
    /// counter back at all zeros.
    pub fn advance(&mut self) -> bool {
        for digit in self.digits.iter_mut() {
            if *digit as usize + 1 < N {
                *digit += 1;
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl<const N: usize> Default for Odometer<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited<const N: usize>() -> Vec<[u8; N]> {
        let mut odometer = Odometer::<N>::new();
        let mut seen = vec![*odometer.digits()];
        while odometer.advance() {
            seen.push(*odometer.digits());
        }
        seen
    }

    #[test]
    fn odometer_starts_at_zero() {
        assert_eq!(Odometer::<4>::new().digits(), &[0, 0, 0, 0]);
    }

    #[test]
    fn odometer_column_zero_is_least_significant() {
        let seen = visited::<3>();
        assert_eq!(&seen[..5], &[[0, 0, 0], [1, 0, 0], [2, 0, 0], [0, 1, 0], [1, 1, 0]]);
        assert_eq!(seen.last(), Some(&[2, 2, 2]));
    }

    #[test]
    fn odometer_visits_every_assignment_once() {
        let seen = visited::<4>();
        assert_eq!(seen.len(), 256);
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 256);
    }

    #[test]
    fn odometer_wraps_to_zero() {
        let mut odometer = Odometer::<2>::new();
        assert!(odometer.advance());
        assert!(odometer.advance());
        assert!(odometer.advance());
        assert_eq!(odometer.digits(), &[1, 1]);
        assert!(!odometer.advance());
        assert_eq!(odometer.digits(), &[0, 0]);
    }

    #[test]
    fn odometer_trivial_sizes() {
        assert_eq!(visited::<1>(), vec![[0]]);
        assert_eq!(visited::<0>(), vec![[]]);
    }
}
