/// Crate-wide result alias for the simulation pipeline.
pub type ReflResult<T> = Result<T, ReflError>;

/// Failure modes surfaced by the simulation core. Nothing is swallowed or
/// retried internally; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflError {
    #[error("sld profile requires at least {required} slices, got {actual}")]
    InsufficientSlices { required: usize, actual: usize },
    #[error("profile sampling requires at least 1 point, got {requested}")]
    InvalidSampleCount { requested: usize },
    #[error("simulation interrupted after {completed} of {total} ticks")]
    Interrupted { completed: usize, total: usize },
}

#[cfg(test)]
mod tests {
    use super::ReflError;

    #[test]
    fn error_messages_carry_context() {
        let error = ReflError::InsufficientSlices {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "sld profile requires at least 2 slices, got 1"
        );

        let error = ReflError::Interrupted {
            completed: 42,
            total: 500,
        };
        assert_eq!(
            error.to_string(),
            "simulation interrupted after 42 of 500 ticks"
        );
    }
}
