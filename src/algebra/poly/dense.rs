use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, Neg},
};

use crate::traits::{Eval, One, WithVars, Zero};

/// Dense univariate polynomial
///
/// The coefficient with index `i` belongs to `x^i`. Unlike a normalised
/// representation, vanishing leading coefficients are kept, so a
/// polynomial built from `k` points always has `k` coefficients.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DensePoly<T> {
    coeff: Vec<T>,
}

impl<T> DensePoly<T> {
    pub fn new() -> Self {
        Self { coeff: Vec::new() }
    }

    pub fn from_coeff(coeff: Vec<T>) -> Self {
        Self { coeff }
    }

    pub fn coeff(&self) -> &[T] {
        &self.coeff
    }

    pub fn into_coeff(self) -> Vec<T> {
        self.coeff
    }

    pub fn len(&self) -> usize {
        self.coeff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeff.is_empty()
    }

    /// Nominal degree, counting vanishing leading coefficients
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    pub fn constant_term(&self) -> Option<&T> {
        self.coeff.first()
    }
}

impl<T: Zero> DensePoly<T> {
    pub fn zero_with_len(len: usize) -> Self {
        Self::from_coeff(std::iter::repeat_with(T::zero).take(len).collect())
    }
}

impl<T: One> DensePoly<T> {
    pub fn one() -> Self {
        Self::from_coeff(vec![T::one()])
    }
}

impl<T> DensePoly<T>
where
    T: Zero + for<'a> AddAssign<&'a T>,
    for<'a> &'a T: Mul<&'a T, Output = T> + Neg<Output = T>,
{
    /// Multiply by the linear factor `x - root`
    pub fn mul_linear(&self, root: &T) -> Self {
        let neg_root = -root;
        let mut res = Self::zero_with_len(self.len() + 1);
        for (d, c) in self.coeff.iter().enumerate() {
            res.coeff[d] += &(c * &neg_root);
            res.coeff[d + 1] += c;
        }
        res
    }
}

impl<'a, 'b, T> Add<&'b DensePoly<T>> for &'a DensePoly<T>
where
    T: Zero,
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = DensePoly<T>;

    fn add(self, rhs: &'b DensePoly<T>) -> Self::Output {
        let zero = T::zero();
        let len = std::cmp::max(self.len(), rhs.len());
        let coeff = (0..len)
            .map(|i| {
                let lhs = self.coeff.get(i).unwrap_or(&zero);
                let rhs = rhs.coeff.get(i).unwrap_or(&zero);
                lhs + rhs
            })
            .collect();
        DensePoly::from_coeff(coeff)
    }
}

impl<'a, 'b, T> Mul<&'b T> for &'a DensePoly<T>
where
    for<'c> &'c T: Mul<&'c T, Output = T>,
{
    type Output = DensePoly<T>;

    fn mul(self, rhs: &'b T) -> Self::Output {
        DensePoly::from_coeff(self.coeff.iter().map(|c| c * rhs).collect())
    }
}

impl<T> Eval<T> for DensePoly<T>
where
    T: Zero,
    for<'a> &'a T: Add<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    type Output = T;

    fn eval(&self, x: &T) -> T {
        self.coeff
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| &(&acc * x) + c)
    }
}

impl<'a, 'b, V: Display + 'b, T: 'a> WithVars<'a, &'b [V; 1]>
    for DensePoly<T>
{
    type Output = FmtDensePoly<'a, 'b, T, V>;

    fn with_vars(&'a self, vars: &'b [V; 1]) -> Self::Output {
        FmtDensePoly::new(self, &vars[0])
    }
}

/// Display helper listing all terms from the highest power down
#[derive(Copy, Clone, Debug)]
pub struct FmtDensePoly<'a, 'b, T, V> {
    p: &'a DensePoly<T>,
    var: &'b V,
}

impl<'a, 'b, T, V> FmtDensePoly<'a, 'b, T, V> {
    fn new(p: &'a DensePoly<T>, var: &'b V) -> Self {
        Self { p, var }
    }
}

impl<'a, 'b, T: Display, V: Display> Display for FmtDensePoly<'a, 'b, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let var = self.var;
        let mut terms = self.p.coeff.iter().enumerate().rev();
        let Some((pow, c)) = terms.next() else {
            return write!(f, "0");
        };
        fmt_term(f, c, var, pow)?;
        for (pow, c) in terms {
            write!(f, " + ")?;
            fmt_term(f, c, var, pow)?;
        }
        Ok(())
    }
}

fn fmt_term(
    f: &mut fmt::Formatter,
    c: impl Display,
    var: impl Display,
    pow: usize,
) -> fmt::Result {
    match pow {
        0 => write!(f, "{c}"),
        1 => write!(f, "{c}*{var}"),
        _ => write!(f, "{c}*{var}^{pow}"),
    }
}

impl<T: Display> Display for DensePoly<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.with_vars(&["x"]).fmt(f)
    }
}
