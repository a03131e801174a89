use super::BoxError;
use super::helpers::TimedOut;
use super::types::{Error, Kind};

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a failed request/response exchange.
pub fn transport<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Transport).with(e.into())
}

/// Creates an `Error` for an exchange that did not finish in time.
pub fn timeout() -> Error {
    Error::new(Kind::Timeout).with(TimedOut)
}

/// Creates an `Error` for a response that could not be read.
pub fn body<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Body).with(e.into())
}

/// Creates an `Error` for a body that could not be serialized or deserialized.
pub fn conversion<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Conversion).with(e.into())
}

/// Creates the routing-internal "nothing matched, no wildcard" signal.
pub fn no_wildcard() -> Error {
    Error::new(Kind::NoWildcard)
}

/// Creates an `Error` for a failed user callback.
///
/// A callback that re-raises an `eddy_client::Error` gets it back unchanged.
pub fn callback<E: Into<BoxError>>(e: E) -> Error {
    match e.into().downcast::<Error>() {
        Ok(error) => *error,
        Err(other) => Error::new(Kind::Callback).with(other),
    }
}

/// Creates an `Error` for a capture retrieved as the wrong type.
pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Error {
    Error::new(Kind::TypeMismatch { expected, actual })
}

/// Creates an `Error` for a call that was dropped before it completed.
pub fn canceled<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Canceled).with(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_passes_eddy_errors_through() {
        let original = conversion("bad json");
        let error = callback(original);

        assert_eq!(error.kind(), &Kind::Conversion);
    }

    #[test]
    fn callback_wraps_foreign_errors() {
        let error = callback(std::io::Error::other("disk full"));

        assert_eq!(error.kind(), &Kind::Callback);
        assert_eq!(error.to_string(), "callback failed: disk full");
    }
}
