//! End-to-end checks of the integrator and step search on linear problems
//! with known closed-form solutions.

use approx::assert_relative_eq;

use kutta_problems::{LinearSystem, ScalarLinear, ScalarParams};
use kutta_solvers::{
    deviation::max_deviation,
    step_search::{self, Config, Horizon, Status, search_unobserved},
    transient::rk4,
};

fn scalar(d: f64) -> ScalarLinear {
    let params = ScalarParams {
        d,
        ..ScalarParams::default()
    };
    ScalarLinear::new(params, 0.0).expect("valid parameters")
}

#[test]
fn rk4_is_fourth_order_on_the_scalar_problem() {
    let problem = scalar(2.0);
    let span = 2.0;

    let errors: Vec<f64> = [20_u32, 40, 80, 160]
        .into_iter()
        .map(|steps| {
            let h = span / f64::from(steps);
            let trajectory = rk4::solve_unobserved(&problem, 2.0, 0.0, h, steps as usize)
                .expect("should integrate")
                .trajectory;
            max_deviation(&problem, &trajectory)
                .expect("should measure")
                .max_abs
        })
        .collect();

    for pair in errors.windows(2) {
        let ratio = pair[0] / pair[1];
        assert!(
            (13.5..18.5).contains(&ratio),
            "halving the step shrank the error by {ratio}"
        );
    }
}

#[test]
fn scalar_search_converges_on_a_power_of_two_fraction() {
    let problem = scalar(0.5);
    let config = Config::new(1e-3, 1e-6, 1000).expect("valid config");

    let solution =
        search_unobserved(&problem, problem.initial(), 0.0, 0.1, 100, &config).expect("should run");

    assert!(solution.converged());
    assert!(solution.step <= 0.1);
    assert_relative_eq!(solution.step * 2f64.powi(solution.iters as i32), 0.1);
    assert!(solution.profile.max_abs <= 1e-3);
    assert_eq!(solution.trajectory.len(), solution.steps);
}

#[test]
fn coupled_reference_meets_tolerance_in_both_components() {
    let problem = LinearSystem::reference();
    let tolerance = 1e-5;
    let config = Config::new(tolerance, 1e-6, 1000).expect("valid config");

    let solution = search_unobserved(&problem, problem.initial(), 0.0, 0.01, 1000, &config)
        .expect("should run");

    assert_eq!(solution.status, Status::Converged);
    let [u1, u2] = solution.profile.max_abs;
    assert!(u1 <= tolerance, "u1 deviation {u1}");
    assert!(u2 <= tolerance, "u2 deviation {u2}");
}

#[test]
fn coupled_reference_over_a_fixed_span() {
    let problem = LinearSystem::reference();
    let config = Config::new(1e-6, 1e-6, 20)
        .expect("valid config")
        .with_horizon(Horizon::FixedSpan);

    let solution = search_unobserved(&problem, problem.initial(), 0.0, 0.05, 20, &config)
        .expect("should run");

    assert!(solution.converged());
    let end = solution.trajectory.last().expect("non-empty").t;
    assert_relative_eq!(end, 1.0, epsilon = 1e-12);
}

#[test]
fn unstable_step_is_a_numeric_error() {
    let problem = LinearSystem::reference();

    let result = rk4::solve_unobserved(&problem, problem.initial(), 0.0, 0.2, 1000);
    assert!(matches!(result, Err(rk4::Error::NonFinite { .. })));

    let config = Config::default();
    let result = search_unobserved(&problem, problem.initial(), 0.0, 0.2, 1000, &config);
    match result {
        Err(step_search::Error::Integration {
            step, iteration, ..
        }) => {
            assert_relative_eq!(step, 0.2);
            assert_eq!(iteration, 0);
        }
        other => panic!("expected an integration error, got {other:?}"),
    }
}

#[test]
fn repeated_searches_agree_exactly() {
    let problem = LinearSystem::reference();
    let config = Config::new(1e-7, 1e-6, 1000).expect("valid config");

    let first = search_unobserved(&problem, problem.initial(), 0.0, 0.02, 200, &config)
        .expect("should run");
    let second = search_unobserved(&problem, problem.initial(), 0.0, 0.02, 200, &config)
        .expect("should run");

    assert_eq!(first.status, second.status);
    assert_eq!(first.iters, second.iters);
    assert_eq!(first.step.to_bits(), second.step.to_bits());
    assert_eq!(first.profile, second.profile);
    assert_eq!(first.trajectory, second.trajectory);
}
