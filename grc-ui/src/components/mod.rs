//! Reusable Dioxus RSX components for the risk register.

mod banner_display;
mod heatmap_grid;
mod level_filter_selector;
mod loading_spinner;
mod navbar;
mod risk_form;
mod risk_table;
mod summary_cards;

pub use banner_display::BannerDisplay;
pub use heatmap_grid::HeatmapGrid;
pub use level_filter_selector::LevelFilterSelector;
pub use loading_spinner::LoadingSpinner;
pub use navbar::Navbar;
pub use risk_form::RiskForm;
pub use risk_table::RiskTable;
pub use summary_cards::SummaryCards;
