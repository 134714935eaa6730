use anyhow::Context;

#[derive(Debug, Clone)]
pub struct BankConfig {
    pub database_url: String,
    pub port: u16,
}

impl BankConfig {
    /// Read configuration from the environment. `DATABASE_URL` is required;
    /// `BANK_PORT` defaults to 3100.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let port = match std::env::var("BANK_PORT") {
            Ok(raw) => raw.parse().context("BANK_PORT is not a valid port")?,
            Err(_) => 3100,
        };
        Ok(Self { database_url, port })
    }
}
