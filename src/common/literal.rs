use std::{
    fmt::Display,
    num::{NonZeroI32, NonZeroU32},
    ops::Neg,
};

/// A variable identified by its 1-based index in some variable map.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Variable {
    inner: NonZeroU32,
}

impl Variable {
    /// Indices must fit a literal, so 0 and anything above `i32::MAX` are rejected.
    pub fn try_new(index: u32) -> Option<Self> {
        if index > i32::MAX as u32 {
            return None;
        }
        NonZeroU32::new(index).map(|inner| Variable { inner })
    }

    pub fn index(self) -> u32 {
        self.inner.get()
    }
}

impl From<u32> for Variable {
    fn from(value: u32) -> Self {
        Variable::try_new(value).expect("variable index must be in 1..=i32::MAX")
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// A literal represented by an integer. The magnitude is the variable index, the sign its
/// polarity.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Literal {
    // nonzero so that 0 can never end up inside an assignment
    inner: NonZeroI32,
}

impl Literal {
    pub fn new(variable: Variable, positive: bool) -> Self {
        // Variable indices never exceed i32::MAX
        let index = variable.index() as i32;
        Literal::from(if positive { index } else { -index })
    }

    /// `i32::MIN` is rejected since its negation does not exist.
    pub fn try_from_raw(value: i32) -> Option<Self> {
        if value == i32::MIN {
            return None;
        }
        NonZeroI32::new(value).map(|inner| Literal { inner })
    }

    /// Compares to literals and returns true if they use the same variable
    pub fn matches(self, other: Self) -> bool {
        self.inner.unsigned_abs() == other.inner.unsigned_abs()
    }

    pub fn var(self) -> Variable {
        Variable {
            inner: self.inner.unsigned_abs(),
        }
    }

    pub fn is_positive(self) -> bool {
        self.inner.get() > 0
    }

    pub fn raw(&self) -> i32 {
        i32::from(self.inner)
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.inner = -self.inner;
        self
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::try_from_raw(value).expect("literal must be nonzero and above i32::MIN")
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
