pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod logging;

use std::io::Write;

pub use config::Settings;
pub use download::{fetch_to_file, Outcome};
pub use error::FetchError;

/// Fetches the configured URL once and reports the outcome as a single line on `out`.
///
/// Nothing is written to `out` when the request itself fails.
pub fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<Outcome, FetchError> {
    let client = settings.build_client()?;
    let outcome = fetch_to_file(&client, &settings.url, &settings.output)?;

    writeln!(out, "{}", outcome).map_err(|source| FetchError::Report { source })?;

    Ok(outcome)
}
