//! Pages
//!
//! Top-level page components for each route.

pub mod exercises;
pub mod home;
pub mod profile;
pub mod recommend;

pub use exercises::Exercises;
pub use home::Home;
pub use profile::Profile;
pub use recommend::Recommend;
