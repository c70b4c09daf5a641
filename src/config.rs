use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FetchError;

pub const DEFAULT_URL: &str = "https://raw.githubusercontent.com/rasbt/LLMs-from-scratch/main/ch02/01_main-chapter-code/the-verdict.txt";
pub const DEFAULT_OUTPUT: &str = "data/the-verdict.txt";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub output: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("verdict-fetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    pub fn build_client(&self) -> Result<Client, FetchError> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)
    }
}
