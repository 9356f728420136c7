use bytes::Bytes;

use crate::error::Error;

/// Persists uploaded content and returns the name it can be fetched under.
pub trait FileStorer: Send + Sync {
    fn write(&self, bytes: Bytes, extension: Option<&str>) -> Result<String, Error>;
}
