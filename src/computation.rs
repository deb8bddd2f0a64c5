//! Deferred computations that can be mapped, joined and continued. Nothing runs until
//! [`Computation::compute`] is called; a failing input stops every computation built on it.

use anyhow::Result;

pub trait Computation: Sized + Send {
    type Output: Send;

    fn compute(self) -> Result<Self::Output>;

    /// Transform the result once it is available.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Compute both sides concurrently and pair their results.
    fn join<C: Computation>(self, other: C) -> Join<Self, C> {
        Join {
            left: self,
            right: other,
        }
    }

    /// Continue with a fallible computation on the result.
    fn then<F, U>(self, f: F) -> Then<Self, F>
    where
        F: FnOnce(Self::Output) -> Result<U> + Send,
        U: Send,
    {
        Then { inner: self, f }
    }
}

/// An already known value.
#[derive(Debug, Clone)]
pub struct Constant<T>(T);

pub fn of<T: Send>(value: T) -> Constant<T> {
    Constant(value)
}

impl<T: Send> Computation for Constant<T> {
    type Output = T;

    fn compute(self) -> Result<T> {
        Ok(self.0)
    }
}

#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

pub fn from_fn<F, T>(f: F) -> FromFn<F>
where
    F: FnOnce() -> Result<T> + Send,
    T: Send,
{
    FromFn(f)
}

impl<F, T> Computation for FromFn<F>
where
    F: FnOnce() -> Result<T> + Send,
    T: Send,
{
    type Output = T;

    fn compute(self) -> Result<T> {
        (self.0)()
    }
}

#[derive(Debug, Clone)]
pub struct Map<C, F> {
    inner: C,
    f: F,
}

impl<C, F, U> Computation for Map<C, F>
where
    C: Computation,
    F: FnOnce(C::Output) -> U + Send,
    U: Send,
{
    type Output = U;

    fn compute(self) -> Result<U> {
        self.inner.compute().map(self.f)
    }
}

#[derive(Debug, Clone)]
pub struct Join<A, B> {
    left: A,
    right: B,
}

impl<A: Computation, B: Computation> Computation for Join<A, B> {
    type Output = (A::Output, B::Output);

    fn compute(self) -> Result<Self::Output> {
        let Join { left, right } = self;
        let (left, right) = rayon::join(move || left.compute(), move || right.compute());
        Ok((left?, right?))
    }
}

#[derive(Debug, Clone)]
pub struct Then<C, F> {
    inner: C,
    f: F,
}

impl<C, F, U> Computation for Then<C, F>
where
    C: Computation,
    F: FnOnce(C::Output) -> Result<U> + Send,
    U: Send,
{
    type Output = U;

    fn compute(self) -> Result<U> {
        let value = self.inner.compute()?;
        (self.f)(value)
    }
}
