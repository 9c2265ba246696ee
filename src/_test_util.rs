use rand::{seq::index::sample, Rng};
use rug::Integer;

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::{lagrange::eval_at, point::Point},
};

const MAX_X: usize = 100;

// generate a random polynomial with integer coefficients
// each coefficient has up to two 64-bit limbs and a random sign
pub fn gen_poly(degree: usize, mut rng: impl Rng) -> DensePoly<Rat> {
    let coeff = (0..=degree)
        .map(|_| {
            let mut c = Integer::from(rng.gen::<u64>());
            if rng.gen() {
                c *= rng.gen::<u64>();
            }
            if rng.gen() {
                c = -c;
            }
            Rat::from(c)
        })
        .collect();
    DensePoly::from_coeff(coeff)
}

// sample `npts` points of `poly` at distinct positive x
pub fn gen_points(
    poly: &DensePoly<Rat>,
    npts: usize,
    mut rng: impl Rng,
) -> Vec<Point> {
    assert!(npts <= MAX_X);
    sample(&mut rng, MAX_X, npts)
        .into_iter()
        .map(|x| {
            let x = x as i64 + 1;
            let y = eval_at(poly, x);
            assert!(y.is_integer());
            Point::new(x, y.into_num_den().0)
        })
        .collect()
}
