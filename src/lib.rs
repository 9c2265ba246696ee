/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
pub mod decode;
/// Reading share documents and writing results
pub mod input;
pub mod traits;

/// Exact rational numbers and polynomials
pub mod algebra;

/// Polynomial reconstruction algorithms
pub mod rec;

pub use rug::Integer;
