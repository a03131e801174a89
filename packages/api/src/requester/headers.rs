//! Header accumulation

use eddy_client::error;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use mime::Mime;

use super::Requester;

impl Requester {
    /// Append a header.
    ///
    /// Values are appended, so repeating a name sends the header several times. A name or value
    /// that is not valid fails the request when it is issued.
    #[must_use]
    pub fn header<K, V>(mut self, name: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        let name: Result<HeaderName, http::Error> =
            HeaderName::try_from(name).map_err(Into::into);
        let value: Result<HeaderValue, http::Error> =
            HeaderValue::try_from(value).map_err(Into::into);
        match name.and_then(|name| value.map(|value| (name, value))) {
            Ok((name, value)) => {
                self.headers.append(name, value);
            }
            Err(invalid) => self.fail(error::builder(invalid)),
        }
        self
    }

    /// Set every header in `headers`.
    ///
    /// Each name present in `headers` replaces all values already accumulated under it,
    /// defaults included; other headers are kept.
    #[must_use]
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        for name in headers.keys() {
            self.headers.remove(name);
        }
        for (name, value) in &headers {
            self.headers.append(name.clone(), value.clone());
        }
        self
    }

    /// Replace `Accept` with `first` followed by `rest`, in order of preference.
    #[must_use]
    pub fn accept(mut self, first: Mime, rest: impl IntoIterator<Item = Mime>) -> Self {
        let media = std::iter::once(first)
            .chain(rest)
            .map(|media| media.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        match HeaderValue::from_str(&media) {
            Ok(value) => {
                self.headers.insert(ACCEPT, value);
            }
            Err(invalid) => self.fail(error::builder(invalid)),
        }
        self
    }

    /// Set `Content-Type`, which also selects the codec [`body`](Requester::body) writes with.
    #[must_use]
    pub fn content_type(mut self, media: Mime) -> Self {
        match HeaderValue::from_str(media.as_ref()) {
            Ok(value) => {
                self.headers.insert(CONTENT_TYPE, value);
            }
            Err(invalid) => self.fail(error::builder(invalid)),
        }
        self
    }
}
