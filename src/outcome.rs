use std::fmt::Display;

// -------------------------------------------------------------------------------------------------
// Outcome
// -------------------------------------------------------------------------------------------------
/// A value that denotes either success or a failure that can describe itself.
///
/// This is implemented for `Result<T, E>` (an `Err` is a failure), for `Option<E>` (a `Some` is a
/// failure, like a nullable error value), and for references to any outcome.
pub trait Outcome {
    type Failure: Display + ?Sized;

    /// Get the failure carried by this outcome, or `None` if it denotes success.
    fn failure(&self) -> Option<&Self::Failure>;

    #[inline]
    fn is_failure(&self) -> bool {
        self.failure().is_some()
    }
}

impl<T, E: Display> Outcome for Result<T, E> {
    type Failure = E;

    #[inline]
    fn failure(&self) -> Option<&E> {
        self.as_ref().err()
    }
}

impl<E: Display> Outcome for Option<E> {
    type Failure = E;

    #[inline]
    fn failure(&self) -> Option<&E> {
        self.as_ref()
    }
}

impl<O: Outcome + ?Sized> Outcome for &O {
    type Failure = O::Failure;

    #[inline]
    fn failure(&self) -> Option<&Self::Failure> {
        (**self).failure()
    }
}

// -------------------------------------------------------------------------------------------------
// Failure
// -------------------------------------------------------------------------------------------------
/// A failure that carries nothing but a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Failure { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure { message }
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::new(message)
    }
}

/// Convenience constructor for a failed outcome with the given message.
pub fn failure<S: Into<String>>(message: S) -> Result<(), Failure> {
    Err(Failure::new(message))
}

/// Convenience constructor for a successful outcome.
pub fn success() -> Result<(), Failure> {
    Ok(())
}
