use std::convert::Infallible;

/// A real-valued function of one real variable.
///
/// Solvers only ever call a function; they never store or mutate it beyond
/// the current run. Implementations should be pure: calling twice with the
/// same `x` must give the same result.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: Function + ?Sized> Function for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`Function`] backed by an infallible closure.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps an infallible closure as a [`Function`].
///
/// # Example
///
/// ```
/// use rootline_core::{Function, from_fn};
///
/// let f = from_fn(|x| x * x - 4.0);
/// assert_eq!(f.call(3.0), Ok(5.0));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn(f)
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}

/// A [`Function`] backed by a fallible closure.
///
/// Created with [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFromFn<F>(F);

/// Wraps a fallible closure as a [`Function`].
pub fn try_from_fn<F, E>(f: F) -> TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    TryFromFn(f)
}

impl<F, E> Function for TryFromFn<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Undefined;

    impl std::fmt::Display for Undefined {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("undefined")
        }
    }

    impl std::error::Error for Undefined {}

    #[test]
    fn from_fn_calls_closure() {
        let f = from_fn(|x| 2.0 * x + 1.0);
        assert_eq!(f.call(3.0), Ok(7.0));
    }

    #[test]
    fn try_from_fn_propagates_errors() {
        let f = try_from_fn(|x: f64| if x == 0.0 { Err(Undefined) } else { Ok(1.0 / x) });

        assert_eq!(f.call(2.0), Ok(0.5));
        assert_eq!(f.call(0.0), Err(Undefined));
    }

    #[test]
    fn references_are_functions() {
        fn eval(f: impl Function<Error = Infallible>, x: f64) -> f64 {
            match f.call(x) {
                Ok(value) => value,
                Err(never) => match never {},
            }
        }

        let f = from_fn(|x| x * x);
        assert_eq!(eval(&f, 3.0), 9.0);
        assert_eq!(eval(&&f, 4.0), 16.0);
    }
}
