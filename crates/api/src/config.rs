//! API configuration.
//!
//! Loaded from environment variables with fallback to defaults.

use std::net::SocketAddr;

use thiserror::Error;

use shopcart_cart::{DiscountPolicy, DiscountRateError};
use shopcart_observability::LogFormat;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error(transparent)]
    Discount(#[from] DiscountRateError),
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to (`BIND_ADDR`).
    pub bind_addr: SocketAddr,

    /// Log output format (`LOG_FORMAT`: `json` or `pretty`).
    pub log_format: LogFormat,

    /// Discount table (`DISCOUNT_CODES`: `CODE=rate,CODE=rate`).
    pub discounts: DiscountPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::default(),
            discounts: DiscountPolicy::standard(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr: SocketAddr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse().map_err(|e: shopcart_observability::ParseLogFormatError| {
                ConfigError::InvalidValue {
                    key: "LOG_FORMAT",
                    reason: e.to_string(),
                }
            })?,
            None => LogFormat::default(),
        };

        let discounts = match lookup("DISCOUNT_CODES") {
            Some(v) => parse_discount_codes(&v)?,
            None => DiscountPolicy::standard(),
        };

        Ok(Self {
            bind_addr,
            log_format,
            discounts,
        })
    }
}

/// Parse `CODE=rate,CODE=rate` into a discount table.
pub fn parse_discount_codes(raw: &str) -> Result<DiscountPolicy, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: "DISCOUNT_CODES",
        reason,
    };

    let mut rates = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (code, rate) = entry
            .split_once('=')
            .ok_or_else(|| invalid(format!("expected CODE=rate, got {entry:?}")))?;
        let code = code.trim();
        if code.is_empty() {
            return Err(invalid(format!("empty code in {entry:?}")));
        }
        let rate: f64 = rate
            .trim()
            .parse()
            .map_err(|e| invalid(format!("bad rate for {code}: {e}")))?;
        rates.push((code.to_string(), rate));
    }

    Ok(DiscountPolicy::new(rates)?)
}
