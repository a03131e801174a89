//! Request URI resolution and query string encoding

use url::Url;

use crate::error::{self, Result};

/// Query parameters keyed by name, each name holding an ordered set of values.
///
/// Names keep the order of their first insertion and values keep their insertion order within a
/// name. Adding a name/value pair that is already present has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` under `name`, returning `false` if the pair was already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, values)) => {
                if values.contains(&value) {
                    false
                } else {
                    values.push(value);
                    true
                }
            }
            None => {
                self.entries.push((name, vec![value]));
                true
            }
        }
    }

    /// Add every pair of `other`, in its order.
    pub fn extend(&mut self, other: QueryParams) {
        for (name, values) in other.entries {
            for value in values {
                self.insert(name.clone(), value);
            }
        }
    }

    /// Values stored under `name`, in insertion order.
    #[must_use]
    pub fn get(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All pairs, grouped by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    /// Percent-encode every name and value and join them into a query string.
    #[must_use]
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Resolve a request URI against an optional base URL.
///
/// Absolute URIs are used as they are. Anything else is appended to the base URL's path, so
/// `"/users"` against `https://api.example.com/v1` yields `https://api.example.com/v1/users`.
///
/// # Errors
///
/// Returns a [`Kind::Builder`](crate::error::Kind::Builder) error if `uri` is relative and no
/// base URL is configured, or if the result is not a valid URL.
pub fn resolve_url(base: Option<&Url>, uri: &str) -> Result<Url> {
    match Url::parse(uri) {
        Ok(absolute) => return Ok(absolute),
        Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => return Err(e.into()),
    }

    let Some(base) = base else {
        return Err(error::builder(format!(
            "relative URI '{uri}' requires a base URL"
        )));
    };

    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    };

    let mut resolved = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    resolved.set_path(&joined);

    if let Some(query) = query {
        merge_query(&mut resolved, query);
    }

    Ok(resolved)
}

/// Merge `query` into the request URL.
///
/// The URL is already encoded, so only the parameters are encoded here and then appended to
/// whatever query the URL carries.
#[must_use]
pub fn prepare_request_url(mut url: Url, query: &QueryParams) -> Url {
    if !query.is_empty() {
        merge_query(&mut url, &query.encode());
    }
    url
}

fn merge_query(url: &mut Url, encoded: &str) {
    let merged = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
        _ => encoded.to_owned(),
    };
    url.set_query(Some(&merged));
}
