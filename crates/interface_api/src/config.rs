//! API configuration

use core_kernel::{TemporalError, Timezone};
use domain_eligibility::{Horizon, DEFAULT_URGENT_LIMIT, REPORT_HORIZON_DAYS};
use serde::Deserialize;

/// API configuration
///
/// The engine defaults live here so a request may omit `timezone`,
/// `horizon_days` or `limit`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// IANA timezone used when a request does not name one
    pub timezone: String,
    /// Look-ahead for insurance classification
    pub insurance_horizon_days: u32,
    /// Look-ahead for certification renewals
    pub certification_horizon_days: u32,
    /// Number of urgent insurance cases shown on the dashboard
    pub urgent_limit: usize,
    /// Look-ahead for the expiring certifications report
    pub report_horizon_days: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            timezone: "UTC".to_string(),
            insurance_horizon_days: Horizon::DEFAULT_DAYS,
            certification_horizon_days: Horizon::DEFAULT_DAYS,
            urgent_limit: DEFAULT_URGENT_LIMIT,
            report_horizon_days: REPORT_HORIZON_DAYS,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    ///
    /// Reads `API_*` variables on top of the defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("timezone", defaults.timezone)?
            .set_default("insurance_horizon_days", i64::from(defaults.insurance_horizon_days))?
            .set_default("certification_horizon_days", i64::from(defaults.certification_horizon_days))?
            .set_default("urgent_limit", defaults.urgent_limit as i64)?
            .set_default("report_horizon_days", i64::from(defaults.report_horizon_days))?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured default timezone
    pub fn default_timezone(&self) -> Result<Timezone, TemporalError> {
        Timezone::parse(&self.timezone)
    }

    pub fn insurance_horizon(&self) -> Horizon {
        Horizon::from_days(self.insurance_horizon_days)
    }

    pub fn certification_horizon(&self) -> Horizon {
        Horizon::from_days(self.certification_horizon_days)
    }

    pub fn report_horizon(&self) -> Horizon {
        Horizon::from_days(self.report_horizon_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.insurance_horizon(), Horizon::default());
        assert_eq!(config.urgent_limit, 3);
        assert_eq!(config.report_horizon().as_days(), 90);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.default_timezone().is_ok());
    }
}
