//! # Store Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BISTRO_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no lock is needed.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use bistro_core::Money;

/// Id of the seeded "All" category.
pub const ALL_CATEGORY_ID: i64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shown on the home screen header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u32,

    /// Where orders are delivered (payment screen)
    pub delivery_address: String,

    /// Estimated delivery time text (payment screen)
    pub delivery_window: String,

    /// Avatar service used for new accounts
    pub avatar_base_url: String,
    pub avatar_background: String,
    pub avatar_color: String,

    /// Category that stands for the whole menu on the category screen
    pub all_category_id: Option<i64>,

    /// Database file; `None` means the platform data directory
    pub database_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    /// Development defaults.
    fn default() -> Self {
        StoreConfig {
            store_name: "Bistro".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            delivery_address: "Palestine, Gaza".to_string(),
            delivery_window: "ASAP (30-45 min)".to_string(),
            avatar_base_url: "https://ui-avatars.com/api/".to_string(),
            avatar_background: "876d4c".to_string(),
            avatar_color: "2C1810".to_string(),
            all_category_id: Some(ALL_CATEGORY_ID),
            database_path: None,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by environment variables.
    ///
    /// ## Environment Variables
    /// - `BISTRO_STORE_NAME`: Override store name
    /// - `BISTRO_DELIVERY_ADDRESS`: Override delivery address
    /// - `BISTRO_DB_PATH`: Use this database file
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("BISTRO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(address) = std::env::var("BISTRO_DELIVERY_ADDRESS") {
            config.delivery_address = address;
        }

        if let Ok(path) = std::env::var("BISTRO_DB_PATH") {
            if !path.trim().is_empty() {
                config.database_path = Some(PathBuf::from(path));
            }
        }

        config
    }

    /// Formats an amount for display, rounding half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::Money;
    /// use bistro_storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(2559)), "$25.59");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rounded = amount
            .amount()
            .round_dp_with_strategy(self.currency_decimals, RoundingStrategy::MidpointAwayFromZero);

        format!(
            "{}{}{:.*}",
            if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" },
            self.currency_symbol,
            self.currency_decimals as usize,
            rounded.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_currency_positive() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_rounds_tax() {
        let config = StoreConfig::default();
        // 10.99 × 8% = 0.8792
        let tax = Money::from_decimal(Decimal::new(8792, 4));
        assert_eq!(config.format_currency(tax), "$0.88");
    }

    #[test]
    fn test_format_currency_whole_units() {
        let config = StoreConfig {
            currency_symbol: "₪".to_string(),
            currency_decimals: 0,
            ..StoreConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(1250)), "₪13");
    }
}
