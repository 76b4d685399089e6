use serde::Deserialize;

use crate::error::{PulseError, Result};

const EMBEDDED_CONFIG: &str = include_str!("../pricepulse.toml");

/// Whether coupon-discounted prices take part in picking the best price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BestPricePolicy {
    /// Minimum of the two list prices; discounts are display-only.
    #[default]
    ListPrice,
    /// A platform's discounted price replaces its list price when present.
    WithDiscounts,
}

/// Stock pictures for one category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryImages {
    pub category: String,
    pub paths: Vec<String>,
}

impl CategoryImages {
    fn new(category: &str, paths: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Storefront settings, read from `pricepulse.toml` at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend origin. Empty means the page's own origin.
    pub api_base: String,
    /// `EnvFilter` directive for the console subscriber.
    pub log_level: String,
    pub search_debounce_ms: u32,
    pub price_debounce_ms: u32,
    pub notice_duration_ms: u32,
    pub currency_symbol: String,
    pub best_price_policy: BestPricePolicy,
    /// Category buttons, in display order. The first entry is the "all" bucket.
    pub categories: Vec<String>,
    pub fallback_image: String,
    /// Stock images per category, in file order. The order matters: an
    /// unknown category picks from all lists joined in this order, and an
    /// empty category counts as the first entry.
    pub images: Vec<CategoryImages>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let images = vec![
            CategoryImages::new("Phones", &["/static/images/modern_smartphone_mo_eaff691a.jpg"]),
            CategoryImages::new("Laptops", &["/static/images/modern_laptop_comput_85fcc696.jpg"]),
            CategoryImages::new(
                "Headphones",
                &["/static/images/modern_wireless_head_af4d6f0f.jpg"],
            ),
        ];

        Self {
            api_base: String::new(),
            log_level: "info".to_string(),
            search_debounce_ms: 300,
            price_debounce_ms: 500,
            notice_duration_ms: 5000,
            currency_symbol: "\u{20B9}".to_string(),
            best_price_policy: BestPricePolicy::ListPrice,
            categories: ["All", "Phones", "Laptops", "Headphones"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            fallback_image: "/static/images/modern_smartphone_mo_eaff691a.jpg".to_string(),
            images,
        }
    }
}

impl AppConfig {
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| PulseError::Config(e.to_string()))
    }

    /// Parse the config compiled into the binary.
    pub fn load() -> Result<Self> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    /// Add categories reported by the backend that aren't configured yet.
    pub fn merge_categories(&self, extra: &[String]) -> Vec<String> {
        let mut merged = self.categories.clone();
        for category in extra {
            if !category.is_empty() && !merged.contains(category) {
                merged.push(category.clone());
            }
        }
        merged
    }
}
