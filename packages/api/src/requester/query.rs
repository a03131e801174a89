//! Query parameter accumulation

use super::Requester;

impl Requester {
    /// Add `value` to query parameter `name`.
    ///
    /// Parameters keep the order they were first added in; adding a name/value pair that is
    /// already present has no effect. Names and values are percent-encoded when the request is
    /// issued, separately from the already encoded base URI.
    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(name, value.to_string());
        self
    }

    /// Add every value in `values` to query parameter `name`.
    #[must_use]
    pub fn query_params<V: ToString>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let name = name.into();
        for value in values {
            self.query.insert(name.clone(), value.to_string());
        }
        self
    }
}
