//! Values captured out of a dispatched response

use std::any::{Any, type_name};
use std::fmt;

use eddy_client::error::{self, Result};

/// The outcome slot of an executed binding.
///
/// A capture is either empty, produced by actions that only run a callback, or holds one value
/// whose type name is recorded so retrieval as the wrong type reports both types.
///
/// Different bindings of one tree may capture different types; the type is fixed by the action,
/// never by the attribute it was bound to.
pub struct Capture {
    value: Option<Box<dyn Any + Send>>,
    type_name: &'static str,
}

impl Capture {
    /// Capture `value`, recording `T` as its declared type.
    #[must_use]
    pub fn value_of<T: Send + 'static>(value: T) -> Self {
        Self {
            value: Some(Box::new(value)),
            type_name: type_name::<T>(),
        }
    }

    /// The empty capture.
    #[must_use]
    pub fn none() -> Self {
        Self {
            value: None,
            type_name: "()",
        }
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Declared type of the captured value, if there is one.
    #[must_use]
    pub fn type_name(&self) -> Option<&'static str> {
        self.value.as_ref().map(|_| self.type_name)
    }

    /// Take the captured value out as a `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::TypeMismatch`](eddy_client::Kind::TypeMismatch) error if a value is
    /// present and was captured as a different type.
    pub fn into_value<T: 'static>(self) -> Result<Option<T>> {
        let actual = self.type_name;
        match self.value {
            None => Ok(None),
            Some(value) => value
                .downcast::<T>()
                .map(|value| Some(*value))
                .map_err(|_| error::type_mismatch(type_name::<T>(), actual)),
        }
    }
}

impl Default for Capture {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_name() {
            Some(type_name) => f.debug_tuple("Capture").field(&type_name).finish(),
            None => f.write_str("Capture::none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieves_the_captured_value() {
        let capture = Capture::value_of(String::from("ready"));

        assert_eq!(capture.type_name(), Some("alloc::string::String"));
        assert_eq!(
            capture.into_value::<String>().expect("same type"),
            Some("ready".to_string())
        );
    }

    #[test]
    fn empty_capture_yields_nothing_for_any_type() {
        assert!(!Capture::none().is_present());
        assert_eq!(Capture::none().into_value::<u64>().expect("empty"), None);
    }

    #[test]
    fn wrong_type_is_a_mismatch() {
        let error = Capture::value_of(404_u16).into_value::<String>().unwrap_err();

        assert!(error.is_type_mismatch());
        assert_eq!(
            error.to_string(),
            "captured value is u16, not alloc::string::String"
        );
    }
}
