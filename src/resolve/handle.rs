//! Resolved configuration resource handles.

use std::fmt;
use std::fs;
use std::io;

use thiserror::Error;
use url::Url;

use crate::resources;

/// Resolved address of a configuration byte stream.
///
/// Produced by exactly one resolution strategy per location and
/// immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceHandle {
    /// A schemed URL, e.g. `file:///opt/conf/log.xml`.
    Url(Url),
    /// A path inside the crate's bundled resource set.
    Bundled(String),
}

/// Errors that can occur while reading a resolved resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The handle's scheme cannot be opened by this crate.
    #[error("unsupported resource scheme '{0}'")]
    UnsupportedScheme(String),

    /// A `file` URL did not convert to a local path.
    #[error("file URL has no usable local path: {0}")]
    InvalidFilePath(Url),

    /// A bundled path vanished from the embedded set.
    #[error("bundled resource not found: {0}")]
    BundledNotFound(String),

    /// Reading the underlying file failed.
    #[error("failed to read resource")]
    Io(#[from] io::Error),
}

impl ResourceHandle {
    /// Read the full byte stream this handle points at.
    ///
    /// `file` URLs read from the filesystem, bundled paths from the
    /// embedded set. Other schemes are not openable here and surface as
    /// `UnsupportedScheme`, which callers treat as an apply failure.
    pub fn read(&self) -> Result<Vec<u8>, ResourceError> {
        match self {
            ResourceHandle::Url(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|_| ResourceError::InvalidFilePath(url.clone()))?;
                Ok(fs::read(path)?)
            }
            ResourceHandle::Url(url) => {
                Err(ResourceError::UnsupportedScheme(url.scheme().to_string()))
            }
            ResourceHandle::Bundled(path) => resources::read(path)
                .ok_or_else(|| ResourceError::BundledNotFound(path.clone())),
        }
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceHandle::Url(url) => f.write_str(url.as_str()),
            ResourceHandle::Bundled(path) => write!(f, "classpath:{path}"),
        }
    }
}
