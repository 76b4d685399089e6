//! Application context and its update step.
//!
//! `Storefront` is the whole UI state. Every user or network event is a
//! [`Msg`]; [`Storefront::update`] takes the context by value and hands back
//! the next context plus the [`Command`]s the shell must run. Nothing in here
//! touches the DOM or the network.

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::error::PulseError;
use crate::filters::FilterState;
use crate::model::{Comparison, Product, ProductId};
use crate::notice::{NoticeId, NoticeLevel, Notices};
use crate::selection::{AddOutcome, Selection, MAX_COMPARE};
use crate::view_model::{ComparisonView, GridView};

pub const LOAD_PRODUCTS_FAILED: &str = "Failed to load products. Please try again.";
pub const COMPARE_FAILED: &str = "Failed to compare products. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page mounted: load products, brands and categories.
    Init,

    SetCategory(String),
    SetSearch(String),
    /// Enter in the hero search box: overrides the primary search.
    HeroSearch(String),
    SetSort(String),
    SetBrands(Vec<String>),
    SetMinPrice(String),
    SetMaxPrice(String),
    ClearFilters,
    ApplyFilters,

    ProductsLoaded(Vec<Product>),
    ProductsFailed(PulseError),
    BrandsLoaded(Vec<String>),
    BrandsFailed(PulseError),
    CategoriesLoaded(Vec<String>),
    CategoriesFailed(PulseError),

    ToggleCompare { name: String, checked: bool },
    RemoveFromComparison(String),
    ClearComparison,
    RequestComparison,
    ComparisonLoaded(Comparison),
    ComparisonFailed(PulseError),
    CloseComparison,

    DismissNotice(NoticeId),
}

/// Side effects requested by `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchProducts(FilterState),
    FetchBrands(Option<String>),
    FetchCategories,
    Compare(Vec<ProductId>),
    /// Remove the notice after the configured display time.
    ScheduleDismiss(NoticeId),
    ScrollToProducts,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Storefront {
    pub filters: FilterState,
    pub selection: Selection,
    pub products: Vec<Product>,
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub loading: bool,
    pub comparing: bool,
    /// The open comparison modal, if any.
    pub comparison: Option<Comparison>,
    pub notices: Notices,
}

impl Storefront {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            categories: config.categories.clone(),
            ..Self::default()
        }
    }

    pub fn update(mut self, msg: Msg, config: &AppConfig) -> (Self, Vec<Command>) {
        debug!("update: {:?}", msg);
        let mut cmds = Vec::new();

        match msg {
            Msg::Init => {
                cmds.push(self.refresh());
                cmds.push(Command::FetchBrands(self.brand_scope()));
                cmds.push(Command::FetchCategories);
            }

            Msg::SetCategory(category) => {
                let changed = category != self.filters.category;
                self.filters.set_category(category);
                cmds.push(self.refresh());
                if changed {
                    cmds.push(Command::FetchBrands(self.brand_scope()));
                }
            }
            Msg::SetSearch(search) => {
                self.filters.set_search(search);
                cmds.push(self.refresh());
            }
            Msg::HeroSearch(search) => {
                self.filters.set_search(search);
                cmds.push(self.refresh());
                cmds.push(Command::ScrollToProducts);
            }
            Msg::SetSort(sort) => {
                self.filters.set_sort(sort);
                cmds.push(self.refresh());
            }
            Msg::SetBrands(brands) => {
                self.filters.set_brands(brands);
                cmds.push(self.refresh());
            }
            Msg::SetMinPrice(raw) => {
                self.filters.set_min_price(&raw);
                cmds.push(self.refresh());
            }
            Msg::SetMaxPrice(raw) => {
                self.filters.set_max_price(&raw);
                cmds.push(self.refresh());
            }
            Msg::ClearFilters => {
                let category_changed = self.brand_scope().is_some();
                self.filters.clear();
                cmds.push(self.refresh());
                if category_changed {
                    cmds.push(Command::FetchBrands(None));
                }
            }
            Msg::ApplyFilters => {
                cmds.push(self.refresh());
            }

            Msg::ProductsLoaded(products) => {
                self.loading = false;
                self.products = products;
            }
            Msg::ProductsFailed(err) => {
                warn!("Error loading products: {}", err);
                self.loading = false;
                let id = self.notices.push_error(&err, LOAD_PRODUCTS_FAILED);
                cmds.push(Command::ScheduleDismiss(id));
            }
            Msg::BrandsLoaded(brands) => {
                self.brands = brands;
            }
            Msg::BrandsFailed(err) => {
                warn!("Error loading brands: {}", err);
            }
            Msg::CategoriesLoaded(categories) => {
                self.categories = config.merge_categories(&categories);
            }
            Msg::CategoriesFailed(err) => {
                warn!("Error loading categories: {}", err);
            }

            Msg::ToggleCompare { name, checked } => {
                if checked {
                    self.add_to_comparison(&name, &mut cmds);
                } else {
                    self.selection.remove(&name);
                }
            }
            Msg::RemoveFromComparison(name) => {
                self.selection.remove(&name);
            }
            Msg::ClearComparison => {
                self.selection.clear();
            }
            Msg::RequestComparison => match self.selection.validate_for_compare() {
                Ok(ids) => {
                    self.comparing = true;
                    cmds.push(Command::Compare(ids));
                }
                Err(err) => {
                    let id = self.notices.push_error(&err, COMPARE_FAILED);
                    cmds.push(Command::ScheduleDismiss(id));
                }
            },
            Msg::ComparisonLoaded(comparison) => {
                self.comparing = false;
                self.comparison = Some(comparison);
            }
            Msg::ComparisonFailed(err) => {
                warn!("Error comparing products: {}", err);
                self.comparing = false;
                let id = self.notices.push_error(&err, COMPARE_FAILED);
                cmds.push(Command::ScheduleDismiss(id));
            }
            Msg::CloseComparison => {
                self.comparison = None;
            }

            Msg::DismissNotice(id) => {
                self.notices.dismiss(id);
            }
        }

        (self, cmds)
    }

    fn refresh(&mut self) -> Command {
        self.loading = true;
        Command::FetchProducts(self.filters.clone())
    }

    fn brand_scope(&self) -> Option<String> {
        self.filters.brand_scope().map(str::to_string)
    }

    fn add_to_comparison(&mut self, name: &str, cmds: &mut Vec<Command>) {
        let Some(product) = self.products.iter().find(|p| p.key() == name).cloned() else {
            warn!("Compare toggle for unknown product {:?}", name);
            return;
        };
        if self.selection.add(product) == AddOutcome::Full {
            let id = self.notices.push(
                NoticeLevel::Warning,
                format!("You can compare up to {} products at once.", MAX_COMPARE),
            );
            cmds.push(Command::ScheduleDismiss(id));
        }
    }

    pub fn grid(&self, config: &AppConfig) -> GridView {
        GridView::build(&self.products, &self.selection, config)
    }

    pub fn comparison_view(&self, config: &AppConfig) -> Option<ComparisonView> {
        self.comparison
            .as_ref()
            .map(|c| ComparisonView::build(c, config))
    }
}
