//! Data-to-render-tree layer: everything the components display is
//! computed here, so it can be tested without a browser.

pub mod card;
pub mod comparison;
pub mod grid;

pub use card::{PriceCell, ProductCard};
pub use comparison::{ComparisonColumn, ComparisonTable, ComparisonView, ROW_LABELS};
pub use grid::{results_label, GridView, NO_RESULTS_HINT, NO_RESULTS_TITLE};
