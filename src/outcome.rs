//! src/outcome.rs

/// Either a failed computation holding an error of type `E`, or a
/// successful one holding a value of type `A`.
///
/// `map` and `chain` only ever touch the success channel. Once a `Failure`
/// shows up, every following `map`/`chain` passes it through untouched
/// without calling its closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<E, A> {
    Failure(E),
    Success(A),
}

impl<E, A> Outcome<E, A> {
    pub fn success(value: A) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Transform the success value, keep a failure as is.
    pub fn map<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Sequence a step that may itself fail. `f` runs only on success.
    pub fn chain<B, F>(self, f: F) -> Outcome<E, B>
    where
        F: FnOnce(A) -> Outcome<E, B>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn map_failure<G, F>(self, f: F) -> Outcome<G, A>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    pub fn as_ref(&self) -> Outcome<&E, &A> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    pub fn success_value(&self) -> Option<&A> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure_value(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Hand over to `std::result::Result`, e.g. to use `?`.
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<E, A> Outcome<E, Outcome<E, A>> {
    /// Collapse one level of nesting, as produced by mapping with a
    /// fallible function.
    pub fn flatten(self) -> Outcome<E, A> {
        self.chain(|inner| inner)
    }
}

impl<T> Outcome<T, T> {
    /// The held payload, whichever variant carries it.
    pub fn value(self) -> T {
        match self {
            Outcome::Success(value) | Outcome::Failure(value) => value,
        }
    }
}

impl<E, A> From<Result<A, E>> for Outcome<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<E, A> From<Outcome<E, A>> for Result<A, E> {
    fn from(outcome: Outcome<E, A>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
