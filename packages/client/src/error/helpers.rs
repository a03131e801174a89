use std::fmt;

/// A marker type to indicate that an exchange timed out.
#[derive(Debug)]
pub struct TimedOut;

impl fmt::Display for TimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out")
    }
}

impl std::error::Error for TimedOut {}

/// A marker type to indicate that no codec handles a media type.
#[derive(Debug)]
pub struct NoSuitableCodec {
    pub(crate) target: &'static str,
    pub(crate) media_type: String,
}

impl fmt::Display for NoSuitableCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no suitable codec for type [{}] and content type [{}]",
            self.target, self.media_type
        )
    }
}

impl std::error::Error for NoSuitableCodec {}
