//! Lending policy and runtime configuration.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Longest loan the library will grant, in days.
pub const MAX_LOAN_PERIOD_DAYS: i64 = 3_650;

/// A configuration value outside its accepted range.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Loan period must be between 1 and {max} days, got {0}", max = MAX_LOAN_PERIOD_DAYS)]
    LoanPeriodOutOfRange(i64),
}

/// Fine amounts, in whole currency units, for each overdue band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FineSchedule {
    /// Charged per day while an item is 1 to 29 days overdue.
    pub daily: u64,
    /// Charged per full 30-day month while an item is 30 to 364 days overdue.
    pub monthly: u64,
    /// Flat amount once an item is a year or more overdue.
    pub yearly: u64,
}

impl Default for FineSchedule {
    fn default() -> Self {
        Self {
            daily: 15,
            monthly: 500,
            yearly: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Days between lending an item and its due date.
    pub loan_period_days: i64,
    pub fines: FineSchedule,
    /// Mailbox size of the library actor.
    pub channel_buffer: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            loan_period_days: 4,
            fines: FineSchedule::default(),
            channel_buffer: 32,
        }
    }
}

impl LibraryConfig {
    /// Defaults overlaid with any `LIBRARY_*` environment variables that are set.
    ///
    /// - `LIBRARY_LOAN_PERIOD_DAYS`
    /// - `LIBRARY_DAILY_FINE`, `LIBRARY_MONTHLY_FINE`, `LIBRARY_YEARLY_FINE`
    /// - `LIBRARY_CHANNEL_BUFFER`
    ///
    /// A loan period outside the accepted range is ignored like an unparseable value.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        override_from_env("LIBRARY_LOAN_PERIOD_DAYS", &mut config.loan_period_days);
        override_from_env("LIBRARY_DAILY_FINE", &mut config.fines.daily);
        override_from_env("LIBRARY_MONTHLY_FINE", &mut config.fines.monthly);
        override_from_env("LIBRARY_YEARLY_FINE", &mut config.fines.yearly);
        override_from_env("LIBRARY_CHANNEL_BUFFER", &mut config.channel_buffer);

        if let Err(e) = config.validate() {
            let default = Self::default().loan_period_days;
            warn!(error = %e, default, "Ignoring out-of-range config value");
            config.loan_period_days = default;
        }
        config
    }

    /// Checks that the loan period is a positive number of days no longer than
    /// [`MAX_LOAN_PERIOD_DAYS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=MAX_LOAN_PERIOD_DAYS).contains(&self.loan_period_days) {
            Ok(())
        } else {
            Err(ConfigError::LoanPeriodOutOfRange(self.loan_period_days))
        }
    }

    /// The validated loan period.
    pub fn loan_period(&self) -> Result<chrono::Duration, ConfigError> {
        self.validate()?;
        Ok(chrono::Duration::days(self.loan_period_days))
    }
}

fn override_from_env<T: FromStr>(key: &str, target: &mut T) {
    let Ok(raw) = env::var(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "Ignoring unparseable config value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_lending_rules() {
        let config = LibraryConfig::default();
        assert_eq!(config.loan_period(), Ok(chrono::Duration::days(4)));
        assert_eq!(config.fines, FineSchedule { daily: 15, monthly: 500, yearly: 10_000 });
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: LibraryConfig =
            serde_json::from_str(r#"{"loan_period_days": 14, "fines": {"daily": 20}}"#).unwrap();

        assert_eq!(config.loan_period_days, 14);
        assert_eq!(config.fines.daily, 20);
        assert_eq!(config.fines.monthly, 500);
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn loan_period_must_be_in_range() {
        for days in [0, -400, MAX_LOAN_PERIOD_DAYS + 1, 100_000_000, i64::MAX] {
            let config = LibraryConfig {
                loan_period_days: days,
                ..LibraryConfig::default()
            };
            assert_eq!(config.loan_period(), Err(ConfigError::LoanPeriodOutOfRange(days)));
        }

        let config = LibraryConfig {
            loan_period_days: MAX_LOAN_PERIOD_DAYS,
            ..LibraryConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_out_of_range_loan_period_keeps_default() {
        env::set_var("LIBRARY_LOAN_PERIOD_DAYS", "100000000");
        let config = LibraryConfig::from_env();
        env::remove_var("LIBRARY_LOAN_PERIOD_DAYS");

        assert_eq!(config.loan_period_days, 4);
    }

    #[test]
    fn env_override_ignores_garbage() {
        let mut days = 4_i64;
        env::set_var("LIBRARY_TEST_GARBAGE_DAYS", "soon");
        override_from_env("LIBRARY_TEST_GARBAGE_DAYS", &mut days);
        assert_eq!(days, 4);

        env::set_var("LIBRARY_TEST_VALID_DAYS", " 7 ");
        override_from_env("LIBRARY_TEST_VALID_DAYS", &mut days);
        assert_eq!(days, 7);
    }
}
