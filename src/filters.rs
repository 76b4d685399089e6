use url::form_urlencoded;

use crate::model::format_amount;

pub const ALL_CATEGORIES: &str = "All";
pub const DEFAULT_SORT: &str = "name";

/// Sort keys understood by `/api/products`, with dropdown labels.
pub const SORT_OPTIONS: &[(&str, &str)] = &[
    ("name", "Name (A-Z)"),
    ("brand", "Brand"),
    ("amazon-low", "Amazon: Low to High"),
    ("amazon-high", "Amazon: High to Low"),
    ("flipkart-low", "Flipkart: Low to High"),
    ("flipkart-high", "Flipkart: High to Low"),
    ("price-diff", "Biggest Price Difference"),
];

/// Current filter selections. Setters store what the control reported;
/// only price bounds are parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: String,
    pub search: String,
    pub sort: String,
    pub brands: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort: DEFAULT_SORT.to_string(),
            brands: Vec::new(),
            min_price: None,
            max_price: None,
        }
    }
}

impl FilterState {
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_sort(&mut self, sort: impl Into<String>) {
        self.sort = sort.into();
    }

    /// Replace the brand selection, keeping first-seen order.
    pub fn set_brands<I, S>(&mut self, brands: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands.clear();
        for brand in brands {
            let brand = brand.into();
            if !self.brands.contains(&brand) {
                self.brands.push(brand);
            }
        }
    }

    pub fn set_min_price(&mut self, raw: &str) {
        self.min_price = parse_price_bound(raw);
    }

    pub fn set_max_price(&mut self, raw: &str) {
        self.max_price = parse_price_bound(raw);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Category to scope brand lookups to; `None` when showing everything.
    pub fn brand_scope(&self) -> Option<&str> {
        category_scope(&self.category)
    }

    /// Query parameters for `/api/products`. Fields at their default are
    /// left out; each selected brand gets its own `brands` pair.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(category) = self.brand_scope() {
            pairs.push(("category", category.to_string()));
        }
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if !self.sort.is_empty() && self.sort != DEFAULT_SORT {
            pairs.push(("sort", self.sort.clone()));
        }
        for brand in &self.brands {
            pairs.push(("brands", brand.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", format_amount(min)));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", format_amount(max)));
        }

        pairs
    }

    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

/// `None` for the "All" bucket (or an empty category), else the category.
pub fn category_scope(category: &str) -> Option<&str> {
    if category.is_empty() || category == ALL_CATEGORIES {
        None
    } else {
        Some(category)
    }
}

/// Parse a price input. Empty or non-numeric input means "no bound".
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_empty_query() {
        let filters = FilterState::default();
        assert!(filters.is_default());
        assert!(filters.query_pairs().is_empty());
        assert_eq!(filters.query_string(), "");
    }

    #[test]
    fn test_phones_sorted_by_price_under_cap() {
        let mut filters = FilterState::default();
        filters.set_category("Phones");
        filters.set_sort("price");
        filters.set_max_price("20000");
        assert_eq!(filters.query_string(), "category=Phones&sort=price&max_price=20000");
    }

    #[test]
    fn test_every_brand_is_its_own_pair() {
        let mut filters = FilterState::default();
        filters.set_brands(["Apple", "Samsung", "Apple"]);
        assert_eq!(filters.brands, vec!["Apple", "Samsung"]);

        let brands: Vec<_> = filters
            .query_pairs()
            .into_iter()
            .filter(|(k, _)| *k == "brands")
            .map(|(_, v)| v)
            .collect();
        assert_eq!(brands, vec!["Apple", "Samsung"]);
        assert_eq!(filters.query_string(), "brands=Apple&brands=Samsung");
    }

    #[test]
    fn test_non_default_fields_appear_exactly_once() {
        let mut filters = FilterState::default();
        filters.set_category("Laptops");
        filters.set_search("gaming laptop");
        filters.set_sort("amazon-low");
        filters.set_min_price("40000");
        filters.set_max_price("85000.5");

        let pairs = filters.query_pairs();
        for key in ["category", "search", "sort", "min_price", "max_price"] {
            assert_eq!(
                pairs.iter().filter(|(k, _)| *k == key).count(),
                1,
                "expected exactly one {} in {:?}",
                key,
                pairs
            );
        }
        assert_eq!(
            filters.query_string(),
            "category=Laptops&search=gaming+laptop&sort=amazon-low&min_price=40000&max_price=85000.5"
        );
    }

    #[test]
    fn test_non_numeric_price_unsets_bound() {
        let mut filters = FilterState::default();
        filters.set_min_price("500");
        assert_eq!(filters.min_price, Some(500.0));
        filters.set_min_price("abc");
        assert_eq!(filters.min_price, None);
        filters.set_max_price("   ");
        assert_eq!(filters.max_price, None);
        filters.set_max_price(" 1500 ");
        assert_eq!(filters.max_price, Some(1500.0));
    }

    #[test]
    fn test_clear_restores_defaults() {
        let mut filters = FilterState::default();
        filters.set_category("Headphones");
        filters.set_search("anc");
        filters.set_brands(["Sony"]);
        filters.set_min_price("100");
        filters.clear();
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn test_brand_scope() {
        let mut filters = FilterState::default();
        assert_eq!(filters.brand_scope(), None);
        filters.set_category("Phones");
        assert_eq!(filters.brand_scope(), Some("Phones"));
        filters.set_category("");
        assert_eq!(filters.brand_scope(), None);
    }

    #[test]
    fn test_large_price_bound_is_sent_unchanged() {
        let mut filters = FilterState::default();
        filters.set_max_price("1e20");
        assert_eq!(filters.max_price, Some(1e20));
        assert_eq!(filters.query_string(), "max_price=100000000000000000000");
    }

    #[test]
    fn test_explicit_default_sort_is_omitted() {
        let mut filters = FilterState::default();
        filters.set_sort("name");
        assert!(filters.query_pairs().is_empty());
    }
}
