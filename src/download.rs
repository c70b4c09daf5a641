use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::error::FetchError;

/// What came back from the server, once a response was received at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved { path: PathBuf, bytes: usize },
    Rejected { status: StatusCode },
}

impl Outcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Saved { path, .. } => write!(f, "File saved to {}", path.display()),
            Outcome::Rejected { status } => write!(f, "Failed to download: {}", status.as_u16()),
        }
    }
}

/// Issues a single GET for `url` and writes the body to `output_path` only on `200 OK`.
///
/// Any other status, including other 2xx codes, leaves the filesystem alone.
pub fn fetch_to_file(client: &Client, url: &str, output_path: &Path) -> Result<Outcome, FetchError> {
    log::info!("Downloading from {} to {:?}", url, output_path);

    let response = client.get(url).send().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        log::warn!("Download rejected with status: {}", status);
        return Ok(Outcome::Rejected { status });
    }

    let bytes = response.bytes().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    write_body(output_path, &bytes)?;

    log::info!("Download completed: {} bytes", bytes.len());
    Ok(Outcome::Saved {
        path: output_path.to_path_buf(),
        bytes: bytes.len(),
    })
}

fn write_body(output_path: &Path, bytes: &[u8]) -> Result<(), FetchError> {
    let write_err = |source| FetchError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = fs::File::create(output_path).map_err(write_err)?;
    file.write_all(bytes).map_err(write_err)?;

    Ok(())
}
