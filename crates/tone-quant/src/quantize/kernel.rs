/// An error diffusion kernel.
///
/// Each entry is `(d_row, d_col, weight)`; a neighbour receives
/// `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub entries: &'static [(isize, isize, i32)],
    pub divisor: i32,
}

/// Four-tap Floyd-Steinberg kernel, 16/16 total propagation.
///
/// ```text
///   row-1:        .    3
///   row  :        X    5
///   row+1:        7    1
/// ```
///
/// The taps follow the column-major orientation of the classic kernel. The
/// `(row-1, col+1)` tap lands on a sample that raster order has already
/// emitted, so that sample's stored value changes after its own decision.
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // below
        (-1, 1, 3), // above-right
        (0, 1, 5),  // right
        (1, 1, 1),  // below-right
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_propagation() {
        let sum: i32 = FLOYD_STEINBERG.entries.iter().map(|&(_, _, w)| w).sum();
        assert_eq!(sum, FLOYD_STEINBERG.divisor);
    }
}
