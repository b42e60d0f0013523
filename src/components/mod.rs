//! UI Components
//!
//! Reusable Leptos components for the GymRec pages.

pub mod exercise_card;
pub mod loading;
pub mod nav;
pub mod toast;

pub use exercise_card::ExerciseCard;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::Toast;
