//! Pure transformations applied to loaded metrics before they are displayed.

mod dashboard;
pub mod formatters;
mod top_n;
mod year_range;

pub use dashboard::Dashboard;
pub use top_n::{TOP_N, top_n};
pub use year_range::{YearRange, filter_years};
