use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use sha2::{Digest, Sha256};

use crate::core::storer::FileStorer;
use crate::error::Error;

const MAX_EXTENSION_LEN: usize = 10;

/// Content-addressed files under one directory: the same upload always lands on the same name.
#[derive(Debug, Clone)]
pub struct LocalStorer {
    path: PathBuf,
}

impl LocalStorer {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_owned() }
    }
}

fn sanitize_extension(ext: &str) -> Option<String> {
    let ext: String = ext.chars().filter(|c| c.is_ascii_alphanumeric()).take(MAX_EXTENSION_LEN).collect();
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_ascii_lowercase())
    }
}

impl FileStorer for LocalStorer {
    fn write(&self, bytes: Bytes, extension: Option<&str>) -> Result<String, Error> {
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = format!("{:x}", hasher.finalize());
        let name = match extension.and_then(sanitize_extension) {
            Some(ext) => format!("{}.{}", digest, ext),
            None => digest,
        };
        let mut file = File::create(self.path.join(&name))?;
        file.write_all(&bytes)?;
        log::debug!("stored {} bytes as {}", bytes.len(), name);
        Ok(name)
    }
}
