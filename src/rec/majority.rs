use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::{
        check_params,
        lagrange::{fits, interpolate},
        point::{sorted_by_x, Point},
        RecError,
    },
};

/// Result of a majority vote over all `k`-subsets of the points
///
/// All indices refer to `points`, i.e. the points sorted by `x`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Majority {
    /// The points sorted by `x`
    pub points: Vec<Point>,
    /// The most frequent constant term
    pub secret: Rat,
    /// How many subsets produced `secret`
    pub count: usize,
    /// The first subset that produced `secret`
    pub subset: Vec<usize>,
    /// Polynomial reconstructed from `subset`
    pub poly: DensePoly<Rat>,
    /// Points through which `poly` passes exactly
    pub consistent: Vec<usize>,
    /// Total number of subsets considered
    pub ncombinations: usize,
}

impl Majority {
    /// Points through which the reconstructed polynomial does not pass
    pub fn inconsistent(&self) -> Vec<usize> {
        (0..self.points.len())
            .filter(|i| self.consistent.binary_search(i).is_err())
            .collect()
    }
}

impl Display for Majority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Most frequent a0: {} (count={})", self.secret, self.count)?;
        write!(f, "Fits points (0-based indices): [")?;
        if let Some((first, rest)) = self.consistent.split_first() {
            write!(f, "{first}")?;
            for r in rest {
                write!(f, ",{r}")?;
            }
        }
        write!(f, "]")
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct TallyEntry {
    a0: Rat,
    count: usize,
    subset: Vec<usize>,
}

// occurrences of each constant term, in order of first appearance
#[derive(Clone, Debug, Default)]
struct Tally {
    entries: Vec<TallyEntry>,
    idx: HashMap<Rat, usize>,
}

impl Tally {
    fn add(&mut self, a0: Rat, subset: &[usize]) {
        if let Some(&pos) = self.idx.get(&a0) {
            self.entries[pos].count += 1;
        } else {
            self.idx.insert(a0.clone(), self.entries.len());
            self.entries.push(TallyEntry {
                a0,
                count: 1,
                subset: subset.to_vec(),
            });
        }
    }

    // ties go to the value seen first
    fn into_most_frequent(self) -> Option<TallyEntry> {
        let mut best: Option<TallyEntry> = None;
        for entry in self.entries {
            if best.as_ref().map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best
    }
}

/// Majority-vote reconstruction
///
/// Interpolates a polynomial of degree `k - 1` through each `k`-subset
/// of the points, taken in lexicographic order of their indices after
/// sorting by `x`. The constant term that occurs most often wins; the
/// polynomial from the first subset producing it is then checked
/// against all points.
///
/// Any interpolation failure aborts the reconstruction.
pub fn rec_majority(pts: &[Point], k: usize) -> Result<Majority, RecError> {
    check_params(pts.len(), k)?;
    let points = sorted_by_x(pts);
    let mut tally = Tally::default();
    let mut ncombinations = 0;
    for subset in (0..points.len()).combinations(k) {
        let chosen = Vec::from_iter(subset.iter().map(|&i| points[i].clone()));
        let poly = interpolate(&chosen)?;
        let a0 = poly.into_coeff().swap_remove(0);
        trace!("a0 from {subset:?}: {a0}");
        tally.add(a0, &subset);
        ncombinations += 1;
    }
    debug!(
        "Interpolated {ncombinations} subsets, found {} distinct constant terms",
        tally.entries.len()
    );
    let best = tally
        .into_most_frequent()
        .expect("1 <= k <= n gives at least one subset");
    debug!("Most frequent a0: {} (count={})", best.a0, best.count);

    let chosen = Vec::from_iter(best.subset.iter().map(|&i| points[i].clone()));
    let poly = interpolate(&chosen)?;
    let consistent = points
        .iter()
        .enumerate()
        .filter(|(_, pt)| fits(&poly, pt))
        .map(|(i, _)| i)
        .collect();
    Ok(Majority {
        points,
        secret: best.a0,
        count: best.count,
        subset: best.subset,
        poly,
        consistent,
        ncombinations,
    })
}

#[cfg(test)]
mod tests {
    use log::debug;
    use rand::{seq::SliceRandom, Rng};
    use rand_xoshiro::rand_core::SeedableRng;

    use super::*;
    use crate::{
        _test_util::{gen_points, gen_poly},
        traits::{One, Zero},
    };

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn single_outlier() {
        log_init();

        // y = 2x + 3, except for the last point
        let pts = [
            Point::new(1, 5),
            Point::new(2, 7),
            Point::new(3, 9),
            Point::new(4, 100),
        ];
        let res = rec_majority(&pts, 3).unwrap();
        assert_eq!(res.ncombinations, 4);
        assert_eq!(res.secret, Rat::from(3));
        assert_eq!(res.count, 1);
        assert_eq!(res.subset, [0, 1, 2]);
        assert_eq!(res.poly.to_string(), "0*x^2 + 2*x + 3");
        assert_eq!(res.consistent, [0, 1, 2]);
        assert_eq!(res.inconsistent(), [3]);

        let res = rec_majority(&pts, 2).unwrap();
        assert_eq!(res.ncombinations, 6);
        assert_eq!(res.secret, Rat::from(3));
        assert_eq!(res.count, 3);
        assert_eq!(res.subset, [0, 1]);
        assert_eq!(res.poly.to_string(), "2*x + 3");
        assert_eq!(res.consistent, [0, 1, 2]);
    }

    #[test]
    fn indices_refer_to_sorted_points() {
        log_init();

        let pts = [
            Point::new(4, 100),
            Point::new(2, 7),
            Point::new(3, 9),
            Point::new(1, 5),
        ];
        let res = rec_majority(&pts, 2).unwrap();
        assert_eq!(res.points[0], Point::new(1, 5));
        assert_eq!(res.secret, Rat::from(3));
        assert_eq!(res.consistent, [0, 1, 2]);
    }

    #[test]
    fn ties_go_to_first_seen() {
        log_init();

        // every pair gives a different a0, so all counts are 1
        let pts = [Point::new(1, 1), Point::new(2, 4), Point::new(3, 9)];
        let res = rec_majority(&pts, 2).unwrap();
        assert_eq!(res.count, 1);
        assert_eq!(res.subset, [0, 1]);
        // line through (1, 1) and (2, 4): y = 3x - 2
        assert_eq!(res.secret, Rat::from(-2));
        assert_eq!(res.consistent, [0, 1]);
    }

    #[test]
    fn rational_secret() {
        log_init();

        let pts = [Point::new(1, 1), Point::new(3, 2)];
        let res = rec_majority(&pts, 2).unwrap();
        assert_eq!(res.secret.to_string(), "1/2");
        assert_eq!(res.consistent, [0, 1]);
    }

    #[test]
    fn report() {
        log_init();

        let pts = [
            Point::new(1, 5),
            Point::new(2, 7),
            Point::new(3, 9),
            Point::new(4, 100),
        ];
        let res = rec_majority(&pts, 2).unwrap();
        assert_eq!(
            res.to_string(),
            "Most frequent a0: 3 (count=3)\nFits points (0-based indices): [0,1,2]"
        );
    }

    #[test]
    fn k_equals_n() {
        log_init();

        let pts = [Point::new(1, 5), Point::new(2, 7)];
        let res = rec_majority(&pts, 2).unwrap();
        assert_eq!(res.ncombinations, 1);
        assert_eq!(res.count, 1);
        assert_eq!(res.consistent, [0, 1]);
    }

    #[test]
    fn k_equals_one() {
        log_init();

        let pts = [Point::new(1, 5), Point::new(2, 7), Point::new(3, 5)];
        let res = rec_majority(&pts, 1).unwrap();
        assert_eq!(res.secret, Rat::from(5));
        assert_eq!(res.count, 2);
        assert_eq!(res.consistent, [0, 2]);
    }

    #[test]
    fn invalid_params() {
        log_init();

        let pts = [Point::new(1, 5), Point::new(2, 7)];
        assert_eq!(
            rec_majority(&pts, 0),
            Err(RecError::InvalidParameters { n: 2, k: 0 })
        );
        assert_eq!(
            rec_majority(&pts, 3),
            Err(RecError::InvalidParameters { n: 2, k: 3 })
        );
    }

    #[test]
    fn duplicate_x() {
        log_init();

        let pts = [Point::new(1, 5), Point::new(2, 7), Point::new(2, 8)];
        assert_eq!(
            rec_majority(&pts, 2),
            Err(RecError::DivisionByZero { x: 2 })
        );
    }

    #[test]
    fn rec_with_corrupted_shares() {
        log_init();

        const NTESTS: usize = 20;
        const MAX_DEGREE: usize = 3;

        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
        for _ in 0..NTESTS {
            let degree = rng.gen_range(0..=MAX_DEGREE);
            let k = degree + 1;
            let orig = gen_poly(degree, &mut rng);
            debug!("original: {orig}");
            // enough good shares to outvote a single bad one
            let npts = k + 2;
            let mut pts = gen_points(&orig, npts, &mut rng);
            let bad = rng.gen_range(0..npts);
            pts[bad].y += 1;
            let bad_x = pts[bad].x;
            pts.shuffle(&mut rng);

            let res = rec_majority(&pts, k).unwrap();
            assert_eq!(res.secret, orig.coeff()[0]);
            assert_eq!(res.poly, orig);
            let bad_idx = res.points.iter().position(|pt| pt.x == bad_x).unwrap();
            assert_eq!(res.inconsistent(), [bad_idx]);
        }
    }

    #[test]
    fn single_share() {
        log_init();

        let res = rec_majority(&[Point::new(3, 11)], 1).unwrap();
        assert_eq!(res.ncombinations, 1);
        assert_eq!(res.secret, Rat::from(11));
        assert_eq!(res.count, 1);
        assert_eq!(res.subset, [0]);
        assert_eq!(res.consistent, [0]);
        assert!(Tally::default().into_most_frequent().is_none());
    }

    #[test]
    fn tally_order() {
        log_init();

        let mut tally = Tally::default();
        tally.add(Rat::one(), &[0]);
        tally.add(Rat::zero(), &[1]);
        tally.add(Rat::zero(), &[2]);
        tally.add(Rat::one(), &[3]);
        let best = tally.into_most_frequent().unwrap();
        assert_eq!(best.a0, Rat::one());
        assert_eq!(best.count, 2);
        assert_eq!(best.subset, [0]);
    }
}
