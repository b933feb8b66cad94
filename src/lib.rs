//! Root-finding for scalar functions by interval bisection.
//!
//! The crate exposes a single solver: [`bisection::solve`] narrows a
//! bracketing interval `[a, b]` toward a root of `f` by repeatedly halving
//! it, and reports the outcome as a value. Success is the approximate root;
//! failure is a [`ConvergenceFailure`] carrying the original bounds and the
//! last midpoint evaluated. Nothing panics and nothing is retried; callers
//! branch on the returned `Result`.
//!
//! ```
//! use bisector::bisection::{self, Config};
//!
//! let root = bisection::solve_unobserved(|x| x * x - 2.0, 0.0, 2.0, &Config::default())
//!     .expect("sqrt(2) is bracketed by [0, 2]");
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-11);
//! ```
//!
//! Each iteration can be traced through an [`Observer`], a side channel
//! that sees the bracket and function values but cannot influence the
//! result.
//!
//! [`ConvergenceFailure`]: bisection::ConvergenceFailure

pub mod bisection;
mod observe;

pub use observe::Observer;
