use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub},
};

use rug::{Integer, Rational};
use thiserror::Error;

use crate::traits::{One, TryDiv, Zero};

/// Exact rational number
///
/// Always kept in canonical form: the denominator is strictly positive
/// and coprime to the numerator. Zero is represented as `0/1`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rat(Rational);

#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Error,
)]
#[error("Zero denominator")]
pub struct ZeroDenominator;

impl Rat {
    /// Construct `num / den` in lowest terms
    pub fn new(num: Integer, den: Integer) -> Result<Self, ZeroDenominator> {
        if den.is_zero() {
            return Err(ZeroDenominator);
        }
        Ok(Self(Rational::from((num, den))))
    }

    pub fn num(&self) -> &Integer {
        self.0.numer()
    }

    pub fn den(&self) -> &Integer {
        self.0.denom()
    }

    pub fn into_num_den(self) -> (Integer, Integer) {
        self.0.into_numer_denom()
    }

    pub fn is_integer(&self) -> bool {
        self.den().is_one()
    }

    pub fn as_rational(&self) -> &Rational {
        &self.0
    }
}

impl Zero for Rat {
    fn zero() -> Self {
        Self(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.num().is_zero()
    }
}

impl One for Rat {
    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_one(&self) -> bool {
        self.num().is_one() && self.den().is_one()
    }
}

impl From<Rational> for Rat {
    fn from(r: Rational) -> Self {
        Self(r)
    }
}

impl From<Rat> for Rational {
    fn from(r: Rat) -> Self {
        r.0
    }
}

impl From<Integer> for Rat {
    fn from(num: Integer) -> Self {
        Self(Rational::from(num))
    }
}

impl From<i64> for Rat {
    fn from(num: i64) -> Self {
        Self(Rational::from(num))
    }
}

impl<'a, 'b> Add<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn add(self, rhs: &'b Rat) -> Self::Output {
        Rat(Rational::from(&self.0 + &rhs.0))
    }
}

impl Add for Rat {
    type Output = Rat;

    fn add(self, rhs: Rat) -> Self::Output {
        Rat(self.0 + rhs.0)
    }
}

impl AddAssign<&Rat> for Rat {
    fn add_assign(&mut self, rhs: &Rat) {
        self.0 += &rhs.0;
    }
}

impl<'a, 'b> Sub<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn sub(self, rhs: &'b Rat) -> Self::Output {
        Rat(Rational::from(&self.0 - &rhs.0))
    }
}

impl Sub for Rat {
    type Output = Rat;

    fn sub(self, rhs: Rat) -> Self::Output {
        Rat(self.0 - rhs.0)
    }
}

impl<'a, 'b> Mul<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn mul(self, rhs: &'b Rat) -> Self::Output {
        Rat(Rational::from(&self.0 * &rhs.0))
    }
}

impl Mul for Rat {
    type Output = Rat;

    fn mul(self, rhs: Rat) -> Self::Output {
        Rat(self.0 * rhs.0)
    }
}

impl MulAssign<&Rat> for Rat {
    fn mul_assign(&mut self, rhs: &Rat) {
        self.0 *= &rhs.0;
    }
}

impl Neg for Rat {
    type Output = Rat;

    fn neg(self) -> Self::Output {
        Rat(-self.0)
    }
}

impl<'a> Neg for &'a Rat {
    type Output = Rat;

    fn neg(self) -> Self::Output {
        Rat(Rational::from(-&self.0))
    }
}

impl<'a, 'b> TryDiv<&'b Rat> for &'a Rat {
    type Output = Rat;
    type Error = ZeroDenominator;

    // `Rational` division panics on a zero divisor
    fn try_div(self, rhs: &'b Rat) -> Result<Self::Output, Self::Error> {
        if rhs.is_zero() {
            return Err(ZeroDenominator);
        }
        Ok(Rat(Rational::from(&self.0 / &rhs.0)))
    }
}

impl Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
