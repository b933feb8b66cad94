use thiserror::Error;

/// A midpoint evaluation: the point and the function value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Midpoint {
    /// The midpoint of the bracket at the time of evaluation.
    pub c: f64,
    /// The function value at `c`.
    pub f_c: f64,
}

/// The iteration budget ran out before either stopping test was met.
///
/// This is the solver's only failure mode and it is always returned as a
/// value, never raised. The caller decides what to do next, typically
/// raising `max_iters` or adjusting the interval.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("cannot find a root in the interval [{a}, {b}] in {max_iters} iterations")]
pub struct ConvergenceFailure {
    /// Left bound as originally supplied.
    pub a: f64,
    /// Right bound as originally supplied.
    pub b: f64,
    /// The iteration budget that was exhausted.
    pub max_iters: usize,
    /// The midpoint evaluated on the final permitted iteration.
    ///
    /// `None` exactly when `max_iters` was zero, since zero iterations
    /// evaluate no midpoint.
    pub last: Option<Midpoint>,
}
