//! Finds a root of a scalar function by interval bisection.
//!
//! [`solve`] repeatedly halves the bracket `[a, b]` and keeps the half in
//! which a sign change is detected, stopping as soon as either the function
//! value at the midpoint or the bracket half-width drops below the
//! configured tolerance. Either test alone is sufficient to stop, so a
//! function that never changes sign (a tangential root such as
//! `(x - 2)^2`) can still converge purely through bracket shrinkage.
//!
//! The classical method assumes `f` is continuous and changes sign across
//! the bracket, but neither assumption is checked: the solver runs the
//! refinement regardless and reports a [`ConvergenceFailure`] value if the
//! iteration budget runs out. Bound order does not matter either; a
//! reversed bracket simply produces a negative half-width and the midpoint
//! arithmetic proceeds unchanged.

mod config;
mod error;

pub use config::Config;
pub use error::{ConvergenceFailure, Midpoint};

use crate::observe::Observer;

/// Iteration event emitted by the bisection solver.
///
/// One event is emitted per iteration, before the stopping tests run, so
/// every evaluated midpoint is observed, including the one the solver
/// returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (0-based).
    pub iter: usize,
    /// Current left bound.
    pub a: f64,
    /// Midpoint of the current bracket.
    pub c: f64,
    /// Current right bound.
    pub b: f64,
    /// Function value at `a`.
    pub f_a: f64,
    /// Function value at `c`.
    pub f_c: f64,
    /// Function value at `b`.
    pub f_b: f64,
}

/// Finds a root of `f` in the bracket `[a, b]` using the bisection method.
///
/// Stops at the first midpoint `c` where `|f(c)| < tolerance` or where the
/// bracket half-width is below the tolerance, whichever comes first.
/// Observers see each iteration's bracket and function values but cannot
/// affect the outcome.
///
/// # Errors
///
/// Returns [`ConvergenceFailure`] if `config.max_iters` iterations pass
/// without meeting either stopping test. The failure carries the original
/// bounds, the budget, and the last evaluated midpoint so the caller can
/// decide how to proceed.
pub fn solve<F, Obs>(
    f: F,
    a: f64,
    b: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<f64, ConvergenceFailure>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event>,
{
    let (original_a, original_b) = (a, b);
    let (mut a, mut b) = (a, b);

    let mut f_a = f(a);
    // Evaluated once for the trace's f(b) field and kept current as the
    // right bound moves; the algorithm itself never reads it.
    let mut f_b = f(b);

    let mut last = None;

    for iter in 0..config.max_iters {
        let delta = (b - a) / 2.0;
        let c = a + delta;
        let f_c = f(c);
        last = Some(Midpoint { c, f_c });

        observer.observe(&Event {
            iter,
            a,
            c,
            b,
            f_a,
            f_c,
            f_b,
        });

        if f_c.abs() < config.tolerance || delta.abs() < config.tolerance {
            return Ok(c);
        }

        // A non-negative product means no sign change was detected between
        // a and c (a product of exactly zero counts as no change), so the
        // left half is discarded. An exact root at c never reaches this
        // branch; the stopping test above catches it first.
        if f_a * f_c >= 0.0 {
            a = c;
            f_a = f_c;
        } else {
            b = c;
            f_b = f_c;
        }
    }

    Err(ConvergenceFailure {
        a: original_a,
        b: original_b,
        max_iters: config.max_iters,
        last,
    })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns [`ConvergenceFailure`] if the iteration budget is exhausted
/// without meeting either stopping test.
pub fn solve_unobserved<F>(
    f: F,
    a: f64,
    b: f64,
    config: &Config,
) -> Result<f64, ConvergenceFailure>
where
    F: Fn(f64) -> f64,
{
    solve(f, a, b, config, ())
}
