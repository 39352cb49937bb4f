// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: ladder monotonicity, range bounds, and non-zero caps.

use crate::diagnostic::ConfigError;
use crate::model::PaideiaConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PaideiaConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // The threshold ladder must be strictly increasing for the level mapping
    // to be monotonic.
    let risk = &config.risk;
    if !(risk.medium_threshold > 0.0
        && risk.medium_threshold < risk.high_threshold
        && risk.high_threshold < risk.critical_threshold)
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk thresholds must satisfy 0 < medium < high < critical, got {} / {} / {}",
                risk.medium_threshold, risk.high_threshold, risk.critical_threshold
            ),
        });
    }

    if risk.critical_threshold > 10.0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk.critical_threshold must be within the [0, 10] score range, got {}",
                risk.critical_threshold
            ),
        });
    }

    if !(0.0..=1.0).contains(&risk.involvement_threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "risk.involvement_threshold must be in [0, 1], got {}",
                risk.involvement_threshold
            ),
        });
    }

    for (name, increment) in [
        ("risk.streak_cognitive_increment", risk.streak_cognitive_increment),
        ("risk.streak_governance_increment", risk.streak_governance_increment),
        (
            "risk.involvement_governance_increment",
            risk.involvement_governance_increment,
        ),
    ] {
        if !(0.0..=10.0).contains(&increment) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "{name} must be within the [0, 10] score range, got {increment}"
                ),
            });
        }
    }

    if config.classifier.scan_cap_chars == 0 {
        errors.push(ConfigError::Validation {
            message: "classifier.scan_cap_chars must be greater than zero".to_string(),
        });
    }

    if config.strategy.intervention_cap == 0 {
        errors.push(ConfigError::Validation {
            message: "strategy.intervention_cap must be greater than zero".to_string(),
        });
    }

    if config.strategy.autonomy_low < config.strategy.autonomy_medium {
        errors.push(ConfigError::Validation {
            message: format!(
                "strategy.autonomy_low ({}) must be >= strategy.autonomy_medium ({})",
                config.strategy.autonomy_low, config.strategy.autonomy_medium
            ),
        });
    }

    if config.engine.turn_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "engine.turn_timeout_secs must be greater than zero".to_string(),
        });
    }

    if config.engine.cache_capacity == 0 {
        errors.push(ConfigError::Validation {
            message: "engine.cache_capacity must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&PaideiaConfig::default()).is_ok());
    }

    #[test]
    fn inverted_ladder_is_rejected() {
        let mut config = PaideiaConfig::default();
        config.risk.medium_threshold = 7.0;
        config.risk.high_threshold = 5.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("thresholds")));
    }

    #[test]
    fn involvement_out_of_range_is_rejected() {
        let mut config = PaideiaConfig::default();
        config.risk.involvement_threshold = 1.5;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn history_increment_out_of_range_is_rejected() {
        let mut config = PaideiaConfig::default();
        config.risk.streak_cognitive_increment = -1.0;
        config.risk.involvement_governance_increment = 12.0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("streak_cognitive_increment")));
    }

    #[test]
    fn collects_all_errors_instead_of_failing_fast() {
        let mut config = PaideiaConfig::default();
        config.classifier.scan_cap_chars = 0;
        config.strategy.intervention_cap = 0;
        config.engine.turn_timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn zero_cache_capacity_is_rejected() {
        let mut config = PaideiaConfig::default();
        config.engine.cache_capacity = 0;
        assert!(validate_config(&config).is_err());
    }
}
