use crate::config::{AppConfig, BestPricePolicy};
use crate::images::product_image;
use crate::model::{format_price, Comparison, ComparisonResult, Platform};

use super::card::{BEST_PRICE_CLASS, HIGHER_PRICE_CLASS};

pub const NOTHING_TO_COMPARE: &str = "No products to compare.";
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// Metric rows of the comparison table, top to bottom.
pub const ROW_LABELS: [&str; 4] = [
    "Amazon Price",
    "Flipkart Price",
    "Best Platform",
    "Price Difference",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonPrice {
    pub platform: Platform,
    pub price_text: String,
    pub is_best: bool,
    pub after_coupon_text: Option<String>,
    pub coupon: Option<String>,
    pub buy_url: Option<String>,
}

impl ComparisonPrice {
    pub fn class(&self) -> &'static str {
        if self.is_best {
            BEST_PRICE_CLASS
        } else {
            HIGHER_PRICE_CLASS
        }
    }
}

/// One product's column.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonColumn {
    pub key: String,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub prices: Vec<ComparisonPrice>,
    pub best_platform: String,
    pub coupon_summary: Option<String>,
    pub difference_text: String,
    pub difference_class: &'static str,
    pub savings_hint: String,
}

impl ComparisonColumn {
    pub fn build(row: &ComparisonResult, config: &AppConfig) -> Self {
        let product = &row.product;
        let policy = config.best_price_policy;
        let symbol = config.currency_symbol.as_str();

        let reported_best = if row.best_price > 0.0 {
            row.best_price
        } else {
            product.best_price(BestPricePolicy::ListPrice)
        };

        let prices = Platform::ALL
            .iter()
            .map(|&platform| ComparisonPrice {
                platform,
                price_text: format_price(symbol, product.price(platform)),
                is_best: match policy {
                    BestPricePolicy::ListPrice => product.price(platform) == reported_best,
                    BestPricePolicy::WithDiscounts => product.is_best(platform, policy),
                },
                after_coupon_text: product
                    .discounted_price(platform)
                    .map(|p| format!("After coupon: {}", format_price(symbol, p))),
                coupon: product.coupon(platform).map(str::to_string),
                buy_url: product.url(platform).map(str::to_string),
            })
            .collect();

        let cheaper = row.cheaper_platform();
        let best_platform = match policy {
            BestPricePolicy::ListPrice => Some(row.best_platform.clone()),
            BestPricePolicy::WithDiscounts => row.best_platform_with_coupon.clone(),
        }
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| cheaper.label().to_string());

        Self {
            key: product.key().to_string(),
            name: product.product_name.clone(),
            brand: product
                .brand
                .clone()
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| UNKNOWN_BRAND.to_string()),
            image: product_image(config, product),
            prices,
            best_platform,
            coupon_summary: product.coupon_summary(),
            difference_text: format_price(symbol, row.price_difference),
            difference_class: if cheaper == Platform::Amazon {
                "savings"
            } else {
                "extra-cost"
            },
            savings_hint: format!("Save on {}", cheaper.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub overall_best: Option<String>,
    pub columns: Vec<ComparisonColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonView {
    Nothing(&'static str),
    Table(ComparisonTable),
}

impl ComparisonView {
    /// Columns follow the order of `comparison.rows`; nothing is sorted by value.
    pub fn build(comparison: &Comparison, config: &AppConfig) -> Self {
        if comparison.rows.is_empty() {
            return ComparisonView::Nothing(NOTHING_TO_COMPARE);
        }
        ComparisonView::Table(ComparisonTable {
            overall_best: comparison.overall_best_name(),
            columns: comparison
                .rows
                .iter()
                .map(|row| ComparisonColumn::build(row, config))
                .collect(),
        })
    }
}
