//! # Application Configuration
//!
//! Configuration loaded at startup from environment variables over defaults.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FOODDASH_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no mutex needed.

use fooddash_core::{Money, PricingConfig, TaxRate};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store name shown in the terminal header.
    pub store_name: String,

    /// Tax rate in basis points (500 = 5%).
    pub tax_rate_bps: u32,

    /// Flat delivery fee in minor currency units.
    pub delivery_fee_cents: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "FoodDash".to_string(),
            tax_rate_bps: fooddash_core::TAX_RATE_BPS,
            delivery_fee_cents: fooddash_core::DELIVERY_FEE_CENTS,
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FOODDASH_STORE_NAME`: Override store name
    /// - `FOODDASH_TAX_RATE`: Override tax rate as a percentage (e.g. "5")
    /// - `FOODDASH_DELIVERY_FEE`: Override delivery fee in rupees (e.g. "40")
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(store_name) = std::env::var("FOODDASH_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(rate) = std::env::var("FOODDASH_TAX_RATE") {
            if let Ok(pct) = rate.parse::<f64>() {
                config.tax_rate_bps = TaxRate::from_percentage(pct).bps();
            }
        }

        if let Ok(fee) = std::env::var("FOODDASH_DELIVERY_FEE") {
            if let Ok(rupees) = fee.parse::<i64>() {
                config.delivery_fee_cents = rupees * 100;
            }
        }

        config
    }

    /// The pricing parameters for the session.
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: TaxRate::from_bps(self.tax_rate_bps),
            delivery_fee: Money::from_cents(self.delivery_fee_cents),
        }
    }
}
