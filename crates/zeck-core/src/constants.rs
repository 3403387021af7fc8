//! Constants for the Zeckendorf representation and the process exit codes.

/// Index of the Fibonacci number weighting the least-significant digit.
///
/// F(1) = F(2) = 1, so F(1) is dropped from the base and the lowest digit
/// stands for F(2).
pub const FIBONACCI_OFFSET: usize = 2;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: usize = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Seeds the shared term table so the common case never touches the
/// big-integer recurrence.
pub const FIB_TABLE: [u64; MAX_FIB_U64 + 1] = {
    let mut table = [0u64; MAX_FIB_U64 + 1];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i <= MAX_FIB_U64 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Exit codes for the `zeck` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An operand was not a signed decimal integer.
    pub const ERROR_FORMAT: i32 = 2;
    /// A narrowing conversion did not fit its target type.
    pub const ERROR_OVERFLOW: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[3], 2);
        assert_eq!(FIB_TABLE[9], 34);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[MAX_FIB_U64], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..=MAX_FIB_U64 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }
}
