//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod game_history;
pub mod loading;
pub mod mode_stats;
pub mod nav;
pub mod pie_chart;
pub mod quiz_chart;
pub mod rating_card;
pub mod social_links;
pub mod toast;

pub use game_history::GameHistory;
pub use loading::{CardSkeleton, Loading};
pub use mode_stats::ModeStatsCharts;
pub use nav::Nav;
pub use pie_chart::PieChart;
pub use quiz_chart::DigiQuizChart;
pub use rating_card::RatingCard;
pub use social_links::SocialLinks;
pub use toast::Toast;
