use serde::{Deserialize, Serialize};

use crate::config::BestPricePolicy;

pub type ProductId = i64;

/// The two marketplaces every product is priced on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Amazon,
    Flipkart,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Amazon, Platform::Flipkart];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
        }
    }

    /// CSS modifier used for buttons and coupon text.
    pub fn css(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
        }
    }

    fn covered_by(&self, coupon_platform: Option<&str>) -> bool {
        match coupon_platform {
            None => true,
            Some(p) => p.eq_ignore_ascii_case("both") || p.eq_ignore_ascii_case(self.label()),
        }
    }
}

/// A product listing as served by `/api/products`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub category: String,
    pub brand: Option<String>,

    pub amazon_price: f64,
    pub amazon_url: Option<String>,
    pub amazon_coupon: Option<String>,
    pub amazon_discounted_price: Option<f64>,

    pub flipkart_price: f64,
    pub flipkart_url: Option<String>,
    pub flipkart_coupon: Option<String>,
    pub flipkart_discounted_price: Option<f64>,

    // Shared coupon, optionally limited to one platform
    pub coupon_code: Option<String>,
    pub coupon_type: Option<String>,
    pub coupon_amount: Option<f64>,
    pub coupon_platform: Option<String>,
    pub coupon_expires: Option<String>,
}

impl Product {
    pub fn price(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Amazon => self.amazon_price,
            Platform::Flipkart => self.flipkart_price,
        }
    }

    pub fn discounted_price(&self, platform: Platform) -> Option<f64> {
        match platform {
            Platform::Amazon => self.amazon_discounted_price,
            Platform::Flipkart => self.flipkart_discounted_price,
        }
    }

    pub fn url(&self, platform: Platform) -> Option<&str> {
        let url = match platform {
            Platform::Amazon => self.amazon_url.as_deref(),
            Platform::Flipkart => self.flipkart_url.as_deref(),
        };
        url.filter(|u| !u.is_empty())
    }

    /// Coupon text that applies to `platform`: the platform's own coupon
    /// first, then the shared coupon code if it covers the platform.
    pub fn coupon(&self, platform: Platform) -> Option<&str> {
        let own = match platform {
            Platform::Amazon => self.amazon_coupon.as_deref(),
            Platform::Flipkart => self.flipkart_coupon.as_deref(),
        };
        own.filter(|c| !c.is_empty()).or_else(|| {
            self.shared_coupon()
                .filter(|_| platform.covered_by(self.coupon_platform.as_deref()))
        })
    }

    pub fn shared_coupon(&self) -> Option<&str> {
        self.coupon_code.as_deref().filter(|c| !c.is_empty())
    }

    /// `"CODE (percent 10)"`, or just the code when type/amount are missing.
    pub fn coupon_summary(&self) -> Option<String> {
        let code = self.shared_coupon()?;
        let kind = self.coupon_type.as_deref().unwrap_or("");
        let amount = self.coupon_amount.map(format_amount).unwrap_or_default();
        let detail = format!("{} {}", kind, amount);
        let detail = detail.trim();
        if detail.is_empty() {
            Some(code.to_string())
        } else {
            Some(format!("{} ({})", code, detail))
        }
    }

    /// Price a platform competes with under `policy`.
    pub fn effective_price(&self, platform: Platform, policy: BestPricePolicy) -> f64 {
        match policy {
            BestPricePolicy::ListPrice => self.price(platform),
            BestPricePolicy::WithDiscounts => self
                .discounted_price(platform)
                .unwrap_or_else(|| self.price(platform)),
        }
    }

    pub fn best_price(&self, policy: BestPricePolicy) -> f64 {
        self.effective_price(Platform::Amazon, policy)
            .min(self.effective_price(Platform::Flipkart, policy))
    }

    /// Whether `platform`'s price equals the best price. Both platforms
    /// qualify on a tie.
    pub fn is_best(&self, platform: Platform, policy: BestPricePolicy) -> bool {
        self.effective_price(platform, policy) == self.best_price(policy)
    }

    /// Identity key used by the comparison selection.
    pub fn key(&self) -> &str {
        &self.product_name
    }
}

/// One row of a `/api/compare` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub best_price: f64,
    #[serde(default)]
    pub best_platform: String,
    #[serde(default)]
    pub price_difference: f64,
    #[serde(default)]
    pub best_price_with_coupon: Option<f64>,
    #[serde(default)]
    pub best_platform_with_coupon: Option<String>,
}

impl ComparisonResult {
    /// Platform that is cheaper on list price; Flipkart wins ties, as the
    /// backend labels them.
    pub fn cheaper_platform(&self) -> Platform {
        if self.product.amazon_price < self.product.flipkart_price {
            Platform::Amazon
        } else {
            Platform::Flipkart
        }
    }
}

/// The two shapes `/api/compare` is known to answer with.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CompareResponse {
    Rows(Vec<ComparisonResult>),
    Wrapped {
        #[serde(default)]
        comparison: Vec<ComparisonResult>,
        #[serde(rename = "overallBest", default)]
        overall_best: Option<serde_json::Value>,
    },
}

/// A parsed comparison, rows in request order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    pub rows: Vec<ComparisonResult>,
    pub overall_best: Option<serde_json::Value>,
}

impl From<CompareResponse> for Comparison {
    fn from(resp: CompareResponse) -> Self {
        match resp {
            CompareResponse::Rows(rows) => Comparison {
                rows,
                overall_best: None,
            },
            CompareResponse::Wrapped {
                comparison,
                overall_best,
            } => Comparison {
                rows: comparison,
                overall_best: overall_best.filter(|v| !v.is_null()),
            },
        }
    }
}

impl Comparison {
    /// Reorder rows to follow `ids`. Rows whose id isn't listed keep their
    /// relative order at the end.
    pub fn ordered_by(mut self, ids: &[ProductId]) -> Self {
        self.rows.sort_by_key(|row| {
            ids.iter()
                .position(|id| *id == row.product.id)
                .unwrap_or(ids.len())
        });
        self
    }

    /// Product name of the overall winner, when the backend reported one.
    pub fn overall_best_name(&self) -> Option<String> {
        let best = self.overall_best.as_ref()?;
        best.get("productName")
            .or_else(|| best.get("name"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

/// Print a number in its shortest exact form, without a trailing `.0`.
pub fn format_amount(value: f64) -> String {
    value.to_string()
}

/// Currency formatting: thousands separators, at most two decimals.
pub fn format_price(symbol: &str, value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let fraction = match cents {
        0 => String::new(),
        c if c % 10 == 0 => format!(".{}", c / 10),
        c => format!(".{:02}", c),
    };

    format!(
        "{}{}{}{}",
        if negative { "-" } else { "" },
        symbol,
        grouped,
        fraction
    )
}
