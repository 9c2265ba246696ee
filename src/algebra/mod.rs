/// Polynomials
pub mod poly;
/// Rational numbers
pub mod rat;
