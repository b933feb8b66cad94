/// Tuning parameters for the bisection solver.
///
/// The same `tolerance` serves both stopping tests: "function value near
/// zero" and "bracket narrow enough". The solver performs no validation of
/// these fields; a non-positive tolerance or a zero iteration budget is
/// honored literally (zero iterations always fail).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of refinement steps.
    pub max_iters: usize,
    /// Threshold for both `|f(c)|` and the bracket half-width.
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-12,
        }
    }
}
