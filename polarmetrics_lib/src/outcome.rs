//! Tagged result of one pipeline stage.

/// What a stage produced: data, a successful but empty answer, or nothing
/// because its upstream was unavailable.
///
/// Stages never fail the pipeline with an `Outcome`; callers degrade
/// `Empty` and `Unavailable` to the default value and move on.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Data(T),
    Empty,
    /// The upstream failed; the string says why, for logging.
    Unavailable(String),
}

impl<T> Outcome<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Outcome::Unavailable(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Data(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Data(value) => Outcome::Data(f(value)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Unavailable(reason) => Outcome::Unavailable(reason),
        }
    }
}

impl<T: Default> Outcome<T> {
    /// The stage's value, or `T::default()` when there is none.
    pub fn unwrap_or_default(self) -> T {
        match self {
            Outcome::Data(value) => value,
            _ => T::default(),
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// `Empty` for an empty vector, `Data` otherwise.
    pub fn from_vec(values: Vec<T>) -> Self {
        if values.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Data(values)
        }
    }

    pub fn len(&self) -> usize {
        self.data().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
