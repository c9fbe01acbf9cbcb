use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

/// Address the HTTP server listens on when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Lifetime of a login code in seconds when `OTP_TTL_SECS` is unset
pub const DEFAULT_OTP_TTL_SECS: i64 = 300;

/// Runtime configuration read from environment variables
pub struct Config {
    /// Postgres connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Valkey connection string backing the session store (`VALKEY_URL`)
    pub valkey_url: String,
    /// Endpoint of the SMS gateway (`SMS_GATEWAY_URL`)
    pub sms_gateway_url: String,
    /// API key sent to the SMS gateway (`SMS_GATEWAY_KEY`)
    pub sms_gateway_key: String,
    /// Socket address to bind the HTTP server to
    pub bind_address: SocketAddr,
    /// How long an issued login code stays valid, in seconds
    pub otp_ttl_secs: i64,
}

impl Config {
    /// Loads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source, missing optional values fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let otp_ttl_secs = match lookup("OTP_TTL_SECS") {
            Some(value) => parse_ttl(&value)?,
            None => DEFAULT_OTP_TTL_SECS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            sms_gateway_url: required("SMS_GATEWAY_URL")?,
            sms_gateway_key: required("SMS_GATEWAY_KEY")?,
            bind_address,
            otp_ttl_secs,
        })
    }
}

fn parse_ttl(value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "OTP_TTL_SECS".to_string(),
        reason,
    };

    let secs = value.parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    if secs <= 0 {
        return Err(invalid("must be a positive number of seconds".to_string()));
    }

    Ok(secs)
}
