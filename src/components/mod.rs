pub mod category_bar;
pub mod compare_bar;
pub mod comparison_modal;
pub mod filter_panel;
pub mod hero_search;
pub mod navbar;
pub mod notice_stack;
pub mod product_card;
pub mod product_grid;
