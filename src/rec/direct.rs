use log::debug;

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::{check_params, lagrange::interpolate, point::{sorted_by_x, Point}, RecError},
};

/// Polynomial reconstructed from a fixed subset of points
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reconstruction {
    /// The points used for reconstruction, sorted by `x`
    pub used: Vec<Point>,
    /// Coefficients in ascending order of powers
    pub poly: DensePoly<Rat>,
}

impl Reconstruction {
    pub fn degree(&self) -> usize {
        self.poly.degree().unwrap_or_default()
    }

    /// The constant term, aka the secret
    pub fn secret(&self) -> Option<&Rat> {
        self.poly.constant_term()
    }
}

/// Reconstruct a polynomial of degree `k - 1` from the `k` points
/// with the smallest `x`
pub fn rec_from_pts(
    pts: &[Point],
    k: usize,
) -> Result<Reconstruction, RecError> {
    check_params(pts.len(), k)?;
    let mut used = sorted_by_x(pts);
    used.truncate(k);
    let poly = interpolate(&used)?;
    debug!("Reconstructed from {k} points: {poly}");
    Ok(Reconstruction { used, poly })
}
