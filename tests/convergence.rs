use approx::assert_abs_diff_eq;

use bisector::bisection::{Config, solve_unobserved};

/// One solver invocation and the root it should find.
struct Case {
    f: fn(f64) -> f64,
    a: f64,
    b: f64,
    max_iters: usize,
    expected: f64,
}

/// f(x) = (x - 2)^2, tangential root at x = 2.
fn square(x: f64) -> f64 {
    (x - 2.0).powi(2)
}

/// f(x) = ((x / 2) - 3)^2 - 1, roots at x = 4 and x = 8.
fn shifted_parabola(x: f64) -> f64 {
    (x / 2.0 - 3.0).powi(2) - 1.0
}

#[test]
fn converges_within_tolerance() {
    let cases = [
        Case {
            f: square,
            a: 0.5,
            b: 2.1,
            max_iters: 100,
            expected: 2.0,
        },
        Case {
            f: shifted_parabola,
            a: 3.9,
            b: 5.6,
            max_iters: 100,
            expected: 4.0,
        },
        Case {
            f: shifted_parabola,
            a: 4.1,
            b: 16.2,
            max_iters: 100,
            expected: 8.0,
        },
    ];

    for case in cases {
        let config = Config {
            max_iters: case.max_iters,
            ..Config::default()
        };
        let root = solve_unobserved(case.f, case.a, case.b, &config)
            .unwrap_or_else(|failure| panic!("{failure}"));

        assert_abs_diff_eq!(root, case.expected, epsilon = 1e-12);
    }
}

#[test]
fn widened_budget_recovers_a_starved_solve() {
    let starved = Config {
        max_iters: 5,
        ..Config::default()
    };
    let failure = solve_unobserved(shifted_parabola, 3.9, 5.6, &starved)
        .expect_err("five iterations are not enough at 1e-12");
    assert_eq!(failure.max_iters, 5);

    let root = solve_unobserved(shifted_parabola, failure.a, failure.b, &Config::default())
        .expect("default budget converges");
    assert_abs_diff_eq!(root, 4.0, epsilon = 1e-12);
}
