//! Media-type specific body codecs

use bytes::Bytes;
use mime::Mime;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::de::value::StrDeserializer;

use crate::error::{self, Result};

/// A body format the [`MessageWorker`](super::MessageWorker) can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// `application/json` and any `+json` structured syntax suffix
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
    /// `text/*`, read into and written from string-like values
    Text,
}

impl Codec {
    /// Media type written into `Content-Type` when this codec serializes a body.
    #[must_use]
    pub fn media_type(self) -> Mime {
        match self {
            Codec::Json => mime::APPLICATION_JSON,
            Codec::Form => mime::APPLICATION_WWW_FORM_URLENCODED,
            Codec::Text => mime::TEXT_PLAIN_UTF_8,
        }
    }

    /// Whether this codec understands bodies of type `media`.
    #[must_use]
    pub fn supports(self, media: &Mime) -> bool {
        match self {
            Codec::Json => {
                media.type_() == mime::APPLICATION
                    && (media.subtype() == mime::JSON || media.suffix() == Some(mime::JSON))
            }
            Codec::Form => {
                media.type_() == mime::APPLICATION
                    && media.subtype() == mime::WWW_FORM_URLENCODED
            }
            Codec::Text => media.type_() == mime::TEXT,
        }
    }

    /// Deserialize `body` into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Conversion`](crate::error::Kind::Conversion) error if the body is not
    /// a valid document of this format or does not fit `T`.
    pub fn decode<T: DeserializeOwned>(self, body: &[u8]) -> Result<T> {
        match self {
            Codec::Json => serde_json::from_slice(body).map_err(error::conversion),
            Codec::Form => serde_urlencoded::from_bytes(body).map_err(error::conversion),
            Codec::Text => {
                let text = std::str::from_utf8(body).map_err(error::conversion)?;
                T::deserialize(StrDeserializer::<serde::de::value::Error>::new(text))
                    .map_err(error::conversion)
            }
        }
    }

    /// Serialize `entity` into a body.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Conversion`](crate::error::Kind::Conversion) error if `entity` cannot
    /// be represented in this format.
    pub fn encode<T: Serialize + ?Sized>(self, entity: &T) -> Result<Bytes> {
        match self {
            Codec::Json => serde_json::to_vec(entity)
                .map(Bytes::from)
                .map_err(error::conversion),
            Codec::Form => serde_urlencoded::to_string(entity)
                .map(Bytes::from)
                .map_err(error::conversion),
            Codec::Text => match serde_json::to_value(entity).map_err(error::conversion)? {
                serde_json::Value::String(text) => Ok(Bytes::from(text)),
                serde_json::Value::Number(number) => Ok(Bytes::from(number.to_string())),
                serde_json::Value::Bool(flag) => Ok(Bytes::from(flag.to_string())),
                other => Err(error::conversion(format!(
                    "text/plain cannot carry a structured value: {other}"
                ))),
            },
        }
    }
}
