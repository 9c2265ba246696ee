use log::trace;

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::{point::Point, RecError},
    traits::{Eval, One, TryDiv},
};

/// Lagrange interpolation through the given points
///
/// Returns the coefficients of the unique polynomial of degree
/// `pts.len() - 1` (or lower, in which case the leading coefficients
/// vanish) through all points. Points are used in the order given.
///
/// Fails with `RecError::DivisionByZero` if two points share the same
/// `x`.
pub fn interpolate(pts: &[Point]) -> Result<DensePoly<Rat>, RecError> {
    let xs = Vec::from_iter(pts.iter().map(|pt| Rat::from(pt.x)));
    let mut res = DensePoly::<Rat>::zero_with_len(pts.len());
    for (i, pt) in pts.iter().enumerate() {
        let mut basis = DensePoly::<Rat>::one();
        let mut den = Rat::one();
        for (j, xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            basis = basis.mul_linear(xj);
            den *= &(&xs[i] - xj);
        }
        let scale = Rat::from(pt.y.clone())
            .try_div(&den)
            .map_err(|_| RecError::DivisionByZero { x: pt.x })?;
        trace!("Weight of basis polynomial for {pt}: {scale}");
        res = &res + &(&basis * &scale);
    }
    Ok(res)
}

/// Evaluate the polynomial at an integer argument
pub fn eval_at(poly: &DensePoly<Rat>, x: i64) -> Rat {
    poly.eval(&Rat::from(x))
}

/// Check whether the polynomial passes exactly through the point
pub fn fits(poly: &DensePoly<Rat>, pt: &Point) -> bool {
    eval_at(poly, pt.x) == Rat::from(pt.y.clone())
}
