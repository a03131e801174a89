//! Content-negotiating body conversion
//!
//! The worker is stateless apart from its codec list and is shared by every in-flight
//! dispatch, so one instance serves all requests of a client concurrently.

use std::any::type_name;

use bytes::Bytes;
use http::HeaderValue;
use http::header::{CONTENT_TYPE, HeaderMap};
use mime::Mime;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::codec::Codec;
use crate::error::{self, NoSuitableCodec, Result};
use crate::http::response::ClientResponse;

/// Reads response bodies and writes request bodies with the first matching [`Codec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageWorker {
    codecs: Vec<Codec>,
}

impl Default for MessageWorker {
    fn default() -> Self {
        Self::new([Codec::Json, Codec::Form, Codec::Text])
    }
}

impl MessageWorker {
    /// Worker trying `codecs` in order.
    #[must_use]
    pub fn new(codecs: impl IntoIterator<Item = Codec>) -> Self {
        Self {
            codecs: codecs.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn codecs(&self) -> &[Codec] {
        &self.codecs
    }

    /// Deserialize the response body into `T`.
    ///
    /// A response without `Content-Type` is treated as `application/octet-stream`.
    ///
    /// # Errors
    ///
    /// - [`Kind::Body`](crate::error::Kind::Body) if the `Content-Type` header is malformed
    /// - [`Kind::Conversion`](crate::error::Kind::Conversion) if no codec reads the content
    ///   type or the body does not deserialize into `T`
    pub fn read<T: DeserializeOwned>(&self, response: &ClientResponse) -> Result<T> {
        let media = response
            .content_type()?
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let codec = self.find::<T>(&media)?;

        tracing::trace!(
            codec = ?codec,
            content_type = %media,
            target = type_name::<T>(),
            "reading response body"
        );

        codec.decode(response.body())
    }

    /// Serialize `entity` for a request carrying `headers`.
    ///
    /// The request's `Content-Type` selects the codec. Without one, the first codec is used and
    /// its media type is written into `headers`.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Conversion`](crate::error::Kind::Conversion) error if the declared
    /// content type is malformed, no codec writes it, or `entity` cannot be serialized.
    pub fn write<T: Serialize + ?Sized>(
        &self,
        headers: &mut HeaderMap,
        entity: &T,
    ) -> Result<Bytes> {
        let declared = match headers.get(CONTENT_TYPE) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(error::conversion)?
                    .parse::<Mime>()
                    .map_err(error::conversion)?,
            ),
            None => None,
        };

        match declared {
            Some(media) => self.find::<T>(&media)?.encode(entity),
            None => {
                let codec = self.codecs.first().copied().ok_or_else(|| {
                    error::conversion(NoSuitableCodec {
                        target: type_name::<T>(),
                        media_type: "*/*".to_string(),
                    })
                })?;
                let body = codec.encode(entity)?;
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_str(codec.media_type().as_ref())?,
                );
                Ok(body)
            }
        }
    }

    fn find<T: ?Sized>(&self, media: &Mime) -> Result<Codec> {
        self.codecs
            .iter()
            .copied()
            .find(|codec| codec.supports(media))
            .ok_or_else(|| {
                error::conversion(NoSuitableCodec {
                    target: type_name::<T>(),
                    media_type: media.to_string(),
                })
            })
    }
}
