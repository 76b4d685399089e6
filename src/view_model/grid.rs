use crate::config::AppConfig;
use crate::model::Product;
use crate::selection::Selection;

use super::card::ProductCard;

pub const NO_RESULTS_TITLE: &str = "No products found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your filters or search terms.";

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    NoResults,
    Cards(Vec<ProductCard>),
}

impl GridView {
    pub fn build(products: &[Product], selection: &Selection, config: &AppConfig) -> Self {
        if products.is_empty() {
            return GridView::NoResults;
        }
        GridView::Cards(
            products
                .iter()
                .map(|p| ProductCard::build(p, selection, config))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            GridView::NoResults => 0,
            GridView::Cards(cards) => cards.len(),
        }
    }
}

/// Heading above the grid.
pub fn results_label(count: usize) -> String {
    format!("{} {} Found", count, if count == 1 { "Product" } else { "Products" })
}
