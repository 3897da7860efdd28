//! Lamport display conversions.
//!
//! All monetary amounts and token supplies in the Friendzy protocol are u64
//! values denominated in lamports (1e9 lamports = 1 SOL, and one whole key is
//! 1e9 token lamports).

/// Lamports per SOL (and token lamports per whole key).
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a lamport amount (u64) to a display value (f64).
///
/// Values above 2^53 lamports lose precision in the f64 conversion; display
/// values are for presentation only and all protocol math stays in u64.
pub fn lamports_to_ui(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_ui() {
        assert_eq!(lamports_to_ui(0), 0.0);
        assert_eq!(lamports_to_ui(500_000_000), 0.5);
        assert_eq!(lamports_to_ui(1_000_000_000), 1.0);
        assert_eq!(lamports_to_ui(10_000_000), 0.01);
    }

    #[test]
    fn test_sub_lamport_digits() {
        assert_eq!(lamports_to_ui(10_166_667), 0.010166667);
        assert_eq!(lamports_to_ui(4_923_033_333), 4.923033333);
    }
}
