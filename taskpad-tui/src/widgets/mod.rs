//! Reusable widget components.

pub mod detail;
pub mod filter;

pub use detail::DetailPanel;
pub use filter::{FilterBar, FilterOption};
