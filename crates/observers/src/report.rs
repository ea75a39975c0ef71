use std::fmt;

use kutta_core::{AnalyticalSolution, StepIntegrable, Trajectory};
use kutta_solvers::{deviation, step_search};

/// A side-by-side comparison of a trajectory with its analytical solution.
///
/// Renders as tab-separated text: a header row, one row per sample with the
/// time followed by `numerical, analytical, difference` for each state
/// component, then the maximum difference of each component. If a search
/// outcome is attached, a closing line reports the step size it found.
///
/// ```text
/// t	Numerical	Analytical	Difference
/// 0.1	0.4984…	0.4984…	1.2e-8
/// …
/// Maximum difference	3.1e-8
/// Minimum step size where difference <= 0.001: 0.1
/// ```
///
/// Vector states get one column group per component, labelled `u1`, `u2`, …
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    dimension: usize,
    rows: Vec<Row>,
    max_abs: Vec<f64>,
    search: Option<SearchLine>,
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    t: f64,
    numerical: Vec<f64>,
    analytical: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SearchLine {
    tolerance: f64,
    step: f64,
    converged: bool,
}

impl Report {
    /// Builds a report by evaluating the analytical solution at every sample.
    ///
    /// # Errors
    ///
    /// Returns a [`deviation::Error`] if the trajectory is empty or the
    /// analytical solution fails or is not finite at a sample time.
    pub fn new<P>(problem: &P, trajectory: &Trajectory<P::State>) -> Result<Self, deviation::Error>
    where
        P: AnalyticalSolution,
    {
        let mut rows = Vec::with_capacity(trajectory.len());
        let mut max_abs: Option<P::State> = None;
        for sample in trajectory {
            let exact = problem
                .solution(sample.t)
                .map_err(|e| deviation::Error::Problem(Box::new(e)))?;
            if !exact.is_finite() {
                return Err(deviation::Error::NonFinite { t: sample.t });
            }

            let difference = sample.state.zip_map(&exact, |num, ana| (num - ana).abs());
            max_abs = Some(match max_abs {
                Some(max) => max.zip_map(&difference, f64::max),
                None => difference,
            });

            rows.push(Row {
                t: sample.t,
                numerical: sample.state.components().collect(),
                analytical: exact.components().collect(),
            });
        }

        let max_abs = max_abs.ok_or(deviation::Error::EmptyTrajectory)?;
        let max_abs: Vec<f64> = max_abs.components().collect();
        Ok(Self {
            dimension: max_abs.len(),
            rows,
            max_abs,
            search: None,
        })
    }

    /// Builds a report for the final attempt of a step search.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Report::new`].
    pub fn from_search<P>(
        problem: &P,
        solution: &step_search::Solution<P::State>,
        tolerance: f64,
    ) -> Result<Self, deviation::Error>
    where
        P: AnalyticalSolution,
    {
        Ok(Self::new(problem, &solution.trajectory)?.with_search(
            tolerance,
            solution.step,
            solution.converged(),
        ))
    }

    /// Attaches the outcome of a step search.
    #[must_use]
    pub fn with_search(self, tolerance: f64, step: f64, converged: bool) -> Self {
        Self {
            search: Some(SearchLine {
                tolerance,
                step,
                converged,
            }),
            ..self
        }
    }

    /// Returns the number of state components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of sample rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the report has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the maximum absolute difference of each component.
    #[must_use]
    pub fn max_abs(&self) -> &[f64] {
        &self.max_abs
    }

    fn suffix(&self, component: usize) -> String {
        if self.dimension == 1 {
            String::new()
        } else {
            format!(" u{}", component + 1)
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t")?;
        for i in 0..self.dimension {
            let suffix = self.suffix(i);
            write!(f, "\tNumerical{suffix}\tAnalytical{suffix}\tDifference{suffix}")?;
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{}", row.t)?;
            for (num, ana) in row.numerical.iter().zip(&row.analytical) {
                write!(f, "\t{num}\t{ana}\t{}", (num - ana).abs())?;
            }
            writeln!(f)?;
        }

        for (i, max) in self.max_abs.iter().enumerate() {
            writeln!(f, "Maximum difference{}\t{max}", self.suffix(i))?;
        }

        if let Some(SearchLine {
            tolerance,
            step,
            converged,
        }) = self.search
        {
            if converged {
                writeln!(
                    f,
                    "Minimum step size where difference <= {tolerance}: {step}"
                )?;
            } else {
                writeln!(
                    f,
                    "No step size down to {step} met difference <= {tolerance}"
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, convert::Infallible};

    use approx::assert_relative_eq;
    use kutta_core::OdeProblem;
    use kutta_problems::{LinearSystem, ScalarLinear};
    use kutta_solvers::{
        step_search::{Config, search_unobserved},
        transient::rk4,
    };

    #[test]
    fn scalar_report_layout() {
        let problem = ScalarLinear::new(Default::default(), 0.0).unwrap();
        let trajectory = rk4::solve_unobserved(&problem, 0.5, 0.0, 0.1, 5)
            .unwrap()
            .trajectory;

        let report = Report::new(&problem, &trajectory).unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(report.dimension(), 1);
        assert_eq!(report.len(), 5);
        assert_eq!(lines.len(), 1 + 5 + 1);
        assert_eq!(lines[0], "t\tNumerical\tAnalytical\tDifference");
        assert!(lines[1].starts_with("0.1\t"));
        assert_eq!(lines[1].split('\t').count(), 4);
        assert!(lines[6].starts_with("Maximum difference\t"));
    }

    #[test]
    fn system_report_has_a_column_group_per_component() {
        let problem = LinearSystem::reference();
        let trajectory = rk4::solve_unobserved(&problem, problem.initial(), 0.0, 0.01, 20)
            .unwrap()
            .trajectory;

        let text = Report::new(&problem, &trajectory).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "t\tNumerical u1\tAnalytical u1\tDifference u1\t\
             Numerical u2\tAnalytical u2\tDifference u2"
        );
        assert_eq!(lines[1].split('\t').count(), 7);
        assert!(lines[21].starts_with("Maximum difference u1\t"));
        assert!(lines[22].starts_with("Maximum difference u2\t"));
    }

    #[test]
    fn maximum_matches_rows() {
        let problem = ScalarLinear::new(Default::default(), 0.0).unwrap();
        let trajectory = rk4::solve_unobserved(&problem, 0.5, 0.0, 0.2, 10)
            .unwrap()
            .trajectory;

        let report = Report::new(&problem, &trajectory).unwrap();

        let largest = report
            .rows
            .iter()
            .map(|row| (row.numerical[0] - row.analytical[0]).abs())
            .fold(0.0, f64::max);
        assert_relative_eq!(report.max_abs()[0], largest);
    }

    /// Counts analytical evaluations of the wrapped problem.
    struct Counted {
        inner: ScalarLinear,
        calls: Cell<usize>,
    }

    impl OdeProblem for Counted {
        type State = f64;
        type Error = Infallible;

        fn derivative(&self, t: f64, y: &f64) -> Result<f64, Self::Error> {
            self.inner.derivative(t, y)
        }
    }

    impl AnalyticalSolution for Counted {
        fn solution(&self, t: f64) -> Result<f64, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.inner.solution(t)
        }
    }

    #[test]
    fn reference_is_evaluated_once_per_sample() {
        let problem = Counted {
            inner: ScalarLinear::new(Default::default(), 0.0).unwrap(),
            calls: Cell::new(0),
        };
        let trajectory = rk4::solve_unobserved(&problem, 0.5, 0.0, 0.1, 8)
            .unwrap()
            .trajectory;

        let report = Report::new(&problem, &trajectory).unwrap();

        assert_eq!(problem.calls.get(), 8);
        let profile = deviation::max_deviation(&problem.inner, &trajectory).unwrap();
        assert_eq!(report.max_abs(), &[profile.max_abs]);
    }

    #[test]
    fn empty_trajectory_cannot_be_reported() {
        let problem = ScalarLinear::new(Default::default(), 0.0).unwrap();
        let trajectory = Trajectory::with_capacity(0);

        let result = Report::new(&problem, &trajectory);

        assert!(matches!(result, Err(deviation::Error::EmptyTrajectory)));
    }

    #[test]
    fn search_outcome_closes_the_report() {
        let problem = ScalarLinear::new(Default::default(), 0.0).unwrap();
        let config = Config::new(1e-3, 1e-6, 100).unwrap();
        let solution = search_unobserved(&problem, 0.5, 0.0, 0.1, 50, &config).unwrap();

        let text = Report::from_search(&problem, &solution, config.tolerance())
            .unwrap()
            .to_string();

        let expected = format!(
            "Minimum step size where difference <= 0.001: {}",
            solution.step
        );
        assert_eq!(text.lines().last(), Some(expected.as_str()));
    }

    #[test]
    fn exhausted_search_is_not_reported_as_a_minimum() {
        let problem = ScalarLinear::new(Default::default(), 0.0).unwrap();
        let trajectory = rk4::solve_unobserved(&problem, 0.5, 0.0, 0.1, 3)
            .unwrap()
            .trajectory;

        let text = Report::new(&problem, &trajectory)
            .unwrap()
            .with_search(0.0, 0.1, false)
            .to_string();

        assert_eq!(
            text.lines().last(),
            Some("No step size down to 0.1 met difference <= 0")
        );
    }
}
