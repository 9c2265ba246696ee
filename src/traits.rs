use rug::Integer;

pub trait Eval<T> {
    type Output;

    fn eval(&self, pt: &T) -> Self::Output;
}

/// Division that can fail, e.g. for a vanishing divisor
pub trait TryDiv<Rhs = Self> {
    type Output;
    type Error;

    fn try_div(self, rhs: Rhs) -> Result<Self::Output, Self::Error>;
}

// custom Zero trait that doesn't require Add
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

impl Zero for Integer {
    fn zero() -> Self {
        <Integer as num_traits::Zero>::zero()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }
}

// custom One trait that doesn't require Mul
pub trait One {
    fn one() -> Self;
    fn is_one(&self) -> bool;
}

impl One for Integer {
    fn one() -> Self {
        <Integer as num_traits::One>::one()
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }
}

pub trait WithVars<'a, V> {
    type Output;

    fn with_vars(&'a self, vars: V) -> Self::Output;
}
