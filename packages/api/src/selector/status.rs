//! Status line selectors

use std::fmt;

use eddy_client::ClientResponse;
use eddy_client::error::Result;
use http::StatusCode;

use super::Selector;

/// Routes on [`ClientResponse::status`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusSelector;

impl Selector<StatusCode> for StatusSelector {
    fn attribute_of(&self, response: &ClientResponse) -> Result<Option<StatusCode>> {
        Ok(Some(response.status()))
    }
}

/// Routes on the status as a plain `u16`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCodeSelector;

impl Selector<u16> for StatusCodeSelector {
    fn attribute_of(&self, response: &ClientResponse) -> Result<Option<u16>> {
        Ok(Some(response.status().as_u16()))
    }
}

/// Routes on the canonical reason phrase; statuses without one have no attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReasonPhraseSelector;

impl Selector<&'static str> for ReasonPhraseSelector {
    fn attribute_of(&self, response: &ClientResponse) -> Result<Option<&'static str>> {
        Ok(response.status().canonical_reason())
    }
}

/// The class of a status code, given by its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Series {
    Informational,
    Successful,
    Redirection,
    ClientError,
    ServerError,
}

impl Series {
    /// Series of `status`, or `None` for codes outside `100..=599`.
    #[must_use]
    pub fn of(status: StatusCode) -> Option<Series> {
        match status.as_u16() / 100 {
            1 => Some(Series::Informational),
            2 => Some(Series::Successful),
            3 => Some(Series::Redirection),
            4 => Some(Series::ClientError),
            5 => Some(Series::ServerError),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(self, status: StatusCode) -> bool {
        Series::of(status) == Some(self)
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digit = match self {
            Series::Informational => 1,
            Series::Successful => 2,
            Series::Redirection => 3,
            Series::ClientError => 4,
            Series::ServerError => 5,
        };
        write!(f, "{digit}xx")
    }
}

/// Routes on the [`Series`] of the status, so one binding covers a whole family.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesSelector;

impl Selector<Series> for SeriesSelector {
    fn attribute_of(&self, response: &ClientResponse) -> Result<Option<Series>> {
        Ok(Series::of(response.status()))
    }
}
