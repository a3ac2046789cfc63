//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod chart;
pub mod loading;
pub mod nav;
pub mod spotlight;
pub mod stat_card;
pub mod toast;

pub use card::Card;
pub use chart::Chart;
pub use loading::{use_route_ready, CardSkeleton, ChartSkeleton, PageSkeleton};
pub use nav::{Nav, ThemeToggle};
pub use spotlight::SpotlightOverlay;
pub use stat_card::StatCard;
pub use toast::Toast;
