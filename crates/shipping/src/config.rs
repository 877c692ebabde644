//! Shipping configuration.
//!
//! The fee is fixed per registry: every package created through one registry
//! is charged the same amount.

use serde::{Deserialize, Serialize};

use airpack_core::{DomainError, DomainResult, Money};

/// Default fee charged per package, in the smallest currency unit.
pub const PACKAGE_FEE: Money = Money::new(10);

/// Environment variable overriding [`ShippingConfig::package_fee`].
pub const PACKAGE_FEE_ENV: &str = "AIRPACK_PACKAGE_FEE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingConfig {
    pub package_fee: Money,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            package_fee: PACKAGE_FEE,
        }
    }
}

impl ShippingConfig {
    /// Load configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; malformed values are rejected.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (env, maps in tests).
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PACKAGE_FEE_ENV) {
            config.package_fee = parse_fee(&raw)?;
        } else {
            tracing::debug!(fee = %config.package_fee, "{PACKAGE_FEE_ENV} not set; using default package fee");
        }

        Ok(config)
    }
}

fn parse_fee(raw: &str) -> DomainResult<Money> {
    let amount: i64 = raw.trim().parse().map_err(|e| {
        DomainError::validation(format!("{PACKAGE_FEE_ENV}: `{raw}` is not an integer amount: {e}"))
    })?;

    let fee = Money::new(amount);
    if fee.is_negative() {
        return Err(DomainError::validation(format!(
            "{PACKAGE_FEE_ENV}: fee cannot be negative (got {amount})"
        )));
    }
    Ok(fee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_fixed_package_fee() {
        let config = ShippingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.package_fee, PACKAGE_FEE);
        assert_eq!(config, ShippingConfig::default());
    }

    #[test]
    fn reads_fee_override() {
        let config = ShippingConfig::from_lookup(lookup_from(&[(PACKAGE_FEE_ENV, " 25 ")])).unwrap();
        assert_eq!(config.package_fee, Money::new(25));
    }

    #[test]
    fn rejects_malformed_fee() {
        let err = ShippingConfig::from_lookup(lookup_from(&[(PACKAGE_FEE_ENV, "ten")])).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains(PACKAGE_FEE_ENV)),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_fee() {
        let err = ShippingConfig::from_lookup(lookup_from(&[(PACKAGE_FEE_ENV, "-1")])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn deserializes_with_missing_fields_as_default() {
        let config: ShippingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.package_fee, PACKAGE_FEE);

        let config: ShippingConfig = serde_json::from_str(r#"{"package_fee": 7}"#).unwrap();
        assert_eq!(config.package_fee, Money::new(7));
    }
}
