use thiserror::Error;

/// Errors that can occur when constructing a problem from its parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("decay rate b must be nonzero")]
    ZeroDecay,

    #[error("coefficient matrix has complex eigenvalues")]
    ComplexEigenvalues,

    #[error("coefficient matrix has repeated eigenvalues")]
    RepeatedEigenvalues,

    #[error("coefficient matrix is numerically singular")]
    Degenerate,
}

/// Checks that every named value is finite.
pub(crate) fn ensure_finite(values: &[(&'static str, f64)]) -> Result<(), ParameterError> {
    match values.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, _)) => Err(ParameterError::NonFinite(*name)),
        None => Ok(()),
    }
}
