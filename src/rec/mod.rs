/// Reconstruction from the first `k` points
pub mod direct;
/// Lagrange interpolation
pub mod lagrange;
/// Majority vote over all `k`-subsets of the points
pub mod majority;
/// Points, aka shares
pub mod point;

use thiserror::Error;

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RecError {
    #[error("Invalid parameters: need 1 <= k <= n, got n = {n}, k = {k}")]
    InvalidParameters { n: i64, k: i64 },
    #[error("Division by zero: x = {x} appears more than once")]
    DivisionByZero { x: i64 },
}

pub(crate) fn check_params(n: usize, k: usize) -> Result<(), RecError> {
    if k < 1 || k > n {
        return Err(RecError::InvalidParameters {
            n: saturating_i64(n),
            k: saturating_i64(k),
        });
    }
    Ok(())
}

fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
