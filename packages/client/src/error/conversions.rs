use http::header::{InvalidHeaderName, InvalidHeaderValue};

use super::constructors::builder;
use super::types::Error;

impl From<InvalidHeaderName> for Error {
    fn from(error: InvalidHeaderName) -> Self {
        builder(error)
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(error: InvalidHeaderValue) -> Self {
        builder(error)
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        builder(error)
    }
}

impl From<http::Error> for Error {
    fn from(error: http::Error) -> Self {
        builder(error)
    }
}
