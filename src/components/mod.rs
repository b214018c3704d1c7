//! UI Components
//!
//! Reusable Leptos components.

mod badge;
mod calculator;
mod catalog_status;
mod delete_confirm_button;
mod navigation;
pub(crate) mod price;
mod product_card;
mod product_form;
mod product_table;
mod rating;
mod sortable_grid;
mod toast;

pub use badge::{Badge, BadgeVariant};
pub use calculator::Calculator;
pub use catalog_status::CatalogStatus;
pub use delete_confirm_button::DeleteConfirmButton;
pub use navigation::Navigation;
pub use price::Price;
pub use product_card::ProductCard;
pub use product_form::{FormFields, ProductForm};
pub use product_table::ProductTable;
pub use rating::Rating;
pub use sortable_grid::SortableProductGrid;
pub use toast::ToastStack;
