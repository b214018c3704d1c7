//! Page Components
//!
//! One component per route.

mod admin;
mod calculator;
mod home;
mod not_found;

pub use admin::ProductAdmin;
pub use calculator::CalculatorPage;
pub use home::Home;
pub use not_found::NotFound;
