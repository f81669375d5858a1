use thiserror::Error;

/// Returned by [`Tree::add`](crate::Tree::add) when the value compares equal
/// to one already stored. Hands the rejected value back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("a node with value {value} already exists")]
pub struct DuplicateValueError<T> {
    value: T,
}

impl<T> DuplicateValueError<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_value() {
        let err = DuplicateValueError::new(42);
        assert_eq!(err.to_string(), "a node with value 42 already exists");
        assert_eq!(*err.value(), 42);
        assert_eq!(err.into_value(), 42);
    }
}
