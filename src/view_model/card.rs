use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::config::AppConfig;
use crate::images::product_image;
use crate::model::{format_price, Platform, Product, ProductId};
use crate::selection::Selection;

pub const BEST_PRICE_CLASS: &str = "best-price";
pub const HIGHER_PRICE_CLASS: &str = "higher-price";

/// One platform's price block on a card.
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct PriceCell {
    pub platform: Platform,
    pub price_text: String,
    /// Present when the platform has a coupon-discounted price; the list
    /// price is then shown struck through.
    pub discounted_text: Option<String>,
    pub is_best: bool,
    pub buy_url: Option<String>,
}

impl PriceCell {
    pub fn class(&self) -> &'static str {
        if self.is_best {
            BEST_PRICE_CLASS
        } else {
            HIGHER_PRICE_CLASS
        }
    }
}

#[derive(Debug, Clone, PartialEq, Hash)]
pub struct CouponBadge {
    pub css: String,
    pub text: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxState {
    pub checked: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    /// Selection key (the product name).
    pub key: String,
    pub name: String,
    pub brand: Option<String>,
    pub image: String,
    pub best_price: f64,
    pub best_price_text: String,
    pub prices: Vec<PriceCell>,
    pub badges: Vec<CouponBadge>,
    /// `"Amazon: CODE"` lines under the product name.
    pub coupon_lines: Vec<String>,
    pub compare: CheckboxState,
}

impl ProductCard {
    pub fn build(product: &Product, selection: &Selection, config: &AppConfig) -> Self {
        let policy = config.best_price_policy;
        let symbol = config.currency_symbol.as_str();
        let best_price = product.best_price(policy);

        let prices = Platform::ALL
            .iter()
            .map(|&platform| PriceCell {
                platform,
                price_text: format_price(symbol, product.price(platform)),
                discounted_text: product
                    .discounted_price(platform)
                    .map(|p| format_price(symbol, p)),
                is_best: product.is_best(platform, policy),
                buy_url: product.url(platform).map(str::to_string),
            })
            .collect();

        let mut badges = Vec::new();
        let own_coupons = [
            (Platform::Amazon, product.amazon_coupon.as_deref()),
            (Platform::Flipkart, product.flipkart_coupon.as_deref()),
        ];
        for (platform, coupon) in own_coupons {
            if let Some(code) = coupon.filter(|c| !c.is_empty()) {
                badges.push(CouponBadge {
                    css: format!("coupon-badge coupon-{}", platform.css()),
                    text: format!("{} Coupon", platform.label()),
                    title: code.to_string(),
                });
            }
        }
        if let Some(code) = product.shared_coupon() {
            badges.push(CouponBadge {
                css: "coupon-badge coupon-shared".to_string(),
                text: code.to_string(),
                title: product.coupon_summary().unwrap_or_else(|| code.to_string()),
            });
        }

        let coupon_lines = Platform::ALL
            .iter()
            .filter_map(|&platform| {
                product
                    .coupon(platform)
                    .map(|code| format!("{}: {}", platform.label(), code))
            })
            .collect();

        let key = product.key().to_string();
        let compare = CheckboxState {
            checked: selection.contains(&key),
            enabled: selection.can_toggle(&key),
        };

        Self {
            id: product.id,
            name: product.product_name.clone(),
            brand: product.brand.clone().filter(|b| !b.is_empty()),
            image: product_image(config, product),
            best_price,
            best_price_text: format_price(symbol, best_price),
            prices,
            badges,
            coupon_lines,
            compare,
            key,
        }
    }

    /// Key for keyed rendering: the product id plus a digest of everything
    /// the card shows, so a changed price, coupon or checkbox redraws it.
    pub fn render_key(&self) -> (ProductId, u64) {
        let mut hasher = DefaultHasher::new();
        self.name.hash(&mut hasher);
        self.brand.hash(&mut hasher);
        self.image.hash(&mut hasher);
        self.best_price_text.hash(&mut hasher);
        self.prices.hash(&mut hasher);
        self.badges.hash(&mut hasher);
        self.coupon_lines.hash(&mut hasher);
        self.compare.hash(&mut hasher);
        (self.id, hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BestPricePolicy;

    fn product(name: &str, amazon: f64, flipkart: f64) -> Product {
        Product {
            id: 1,
            product_name: name.to_string(),
            category: "Phones".to_string(),
            brand: Some("Acme".to_string()),
            amazon_price: amazon,
            flipkart_price: flipkart,
            amazon_url: Some("https://amazon.in/x".to_string()),
            flipkart_url: Some("https://flipkart.com/x".to_string()),
            ..Default::default()
        }
    }

    fn best_flags(card: &ProductCard) -> Vec<bool> {
        card.prices.iter().map(|c| c.is_best).collect()
    }

    #[test]
    fn test_mirrored_prices_flag_different_platforms() {
        let config = AppConfig::default();
        let sel = Selection::default();
        let a = ProductCard::build(&product("A", 999.0, 1099.0), &sel, &config);
        let b = ProductCard::build(&product("B", 1099.0, 999.0), &sel, &config);

        assert_eq!(a.best_price, 999.0);
        assert_eq!(b.best_price, 999.0);
        assert_eq!(best_flags(&a), vec![true, false]);
        assert_eq!(best_flags(&b), vec![false, true]);
        assert_eq!(a.prices[0].class(), BEST_PRICE_CLASS);
        assert_eq!(a.prices[1].class(), HIGHER_PRICE_CLASS);
    }

    #[test]
    fn test_tie_shows_both_as_best() {
        let card = ProductCard::build(
            &product("Tie", 750.0, 750.0),
            &Selection::default(),
            &AppConfig::default(),
        );
        assert_eq!(best_flags(&card), vec![true, true]);
    }

    #[test]
    fn test_price_text_uses_currency_symbol() {
        let config = AppConfig {
            currency_symbol: "$".to_string(),
            ..AppConfig::default()
        };
        let card = ProductCard::build(&product("A", 1299.0, 1349.5), &Selection::default(), &config);
        assert_eq!(card.best_price_text, "$1,299");
        assert_eq!(card.prices[1].price_text, "$1,349.5");
    }

    #[test]
    fn test_discount_shown_and_policy_respected() {
        let mut p = product("D", 1000.0, 980.0);
        p.amazon_discounted_price = Some(900.0);

        let list = ProductCard::build(&p, &Selection::default(), &AppConfig::default());
        assert_eq!(list.prices[0].discounted_text.as_deref(), Some("\u{20B9}900"));
        assert_eq!(best_flags(&list), vec![false, true]);

        let config = AppConfig {
            best_price_policy: BestPricePolicy::WithDiscounts,
            ..AppConfig::default()
        };
        let discounted = ProductCard::build(&p, &Selection::default(), &config);
        assert_eq!(discounted.best_price, 900.0);
        assert_eq!(best_flags(&discounted), vec![true, false]);
    }

    #[test]
    fn test_coupon_badges_and_lines() {
        let mut p = product("C", 10.0, 12.0);
        p.amazon_coupon = Some("AMZ10".to_string());
        p.coupon_code = Some("FLIP5".to_string());
        p.coupon_platform = Some("Flipkart".to_string());

        let card = ProductCard::build(&p, &Selection::default(), &AppConfig::default());
        let texts: Vec<_> = card.badges.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["Amazon Coupon", "FLIP5"]);
        assert_eq!(card.badges[0].title, "AMZ10");
        assert_eq!(card.coupon_lines, vec!["Amazon: AMZ10", "Flipkart: FLIP5"]);
    }

    #[test]
    fn test_no_coupons_no_badges() {
        let card = ProductCard::build(
            &product("Plain", 1.0, 2.0),
            &Selection::default(),
            &AppConfig::default(),
        );
        assert!(card.badges.is_empty());
        assert!(card.coupon_lines.is_empty());
    }

    #[test]
    fn test_checkbox_follows_selection() {
        let mut sel = Selection::default();
        for i in 0..4 {
            sel.add(product(&format!("S{}", i), 1.0, 1.0));
        }
        let config = AppConfig::default();

        let selected = ProductCard::build(&product("S1", 1.0, 1.0), &sel, &config);
        assert_eq!(
            selected.compare,
            CheckboxState {
                checked: true,
                enabled: true
            }
        );

        let other = ProductCard::build(&product("Other", 1.0, 1.0), &sel, &config);
        assert_eq!(
            other.compare,
            CheckboxState {
                checked: false,
                enabled: false
            }
        );
    }

    #[test]
    fn test_missing_url_and_brand() {
        let mut p = product("Bare", 5.0, 6.0);
        p.brand = Some(String::new());
        p.flipkart_url = None;
        let card = ProductCard::build(&p, &Selection::default(), &AppConfig::default());
        assert_eq!(card.brand, None);
        assert!(card.prices[0].buy_url.is_some());
        assert!(card.prices[1].buy_url.is_none());
    }
}
