//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod profile;
pub mod settings;

pub use home::Home;
pub use profile::Profile;
pub use settings::Settings;
