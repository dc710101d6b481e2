use std::io;
use std::time::Duration;
use url::Url;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_PROVIDER_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_PROVIDER_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server_port: u16,
    pub provider_base_url: Url,
    pub provider_timeout: Duration,
}

impl Config {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(invalid_input)?,
            None => DEFAULT_SERVER_PORT,
        };

        let provider_base_url = lookup("PROVIDER_BASE_URL")
            .unwrap_or_else(|| DEFAULT_PROVIDER_BASE_URL.to_string());
        let provider_base_url = Url::parse(&provider_base_url).map_err(invalid_input)?;

        let provider_timeout = match lookup("PROVIDER_TIMEOUT_SECONDS") {
            Some(value) => value.parse::<u64>().map_err(invalid_input)?,
            None => DEFAULT_PROVIDER_TIMEOUT_SECONDS,
        };

        Ok(Config {
            server_port,
            provider_base_url,
            provider_timeout: Duration::from_secs(provider_timeout),
        })
    }
}

fn invalid_input<E>(error: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidInput, error)
}
