use crate::errors::{AnalyzerError, AnalyzerResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Upper bound on request body size, enforced by the router.
    pub max_body_bytes: usize,
    /// Largest strike accepted. Bounds the sweep to 2 * max_strike_price + 1 samples.
    pub max_strike_price: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            max_body_bytes: 64 * 1024,
            max_strike_price: 100_000.0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AnalyzerResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| AnalyzerError::Config(format!("SERVER_PORT: {e}")))?;

        let max_body_bytes = env_var_or("MAX_BODY_BYTES", "65536")
            .parse::<usize>()
            .map_err(|e| AnalyzerError::Config(format!("MAX_BODY_BYTES: {e}")))?;

        let max_strike_price = parse_max_strike_price(&env_var_or("MAX_STRIKE_PRICE", "100000"))?;

        Ok(Self {
            server_host: env_var_or("SERVER_HOST", "0.0.0.0"),
            server_port,
            max_body_bytes,
            max_strike_price,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Strike limits above this would make the sweep too large to allocate.
pub const MAX_STRIKE_PRICE_CAP: f64 = 10_000_000.0;

fn parse_max_strike_price(raw: &str) -> AnalyzerResult<f64> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| AnalyzerError::Config(format!("MAX_STRIKE_PRICE: {e}")))?;

    if !value.is_finite() || !(0.0..=MAX_STRIKE_PRICE_CAP).contains(&value) {
        return Err(AnalyzerError::Config(format!(
            "MAX_STRIKE_PRICE: must be between 0 and {MAX_STRIKE_PRICE_CAP}, got {value}"
        )));
    }
    Ok(value)
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
