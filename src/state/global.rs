//! Global Application State
//!
//! Domain records shared with the API plus reactive state managed through
//! Leptos signals.

use leptos::*;

use crate::api;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current color theme, toggled from the nav bar
    pub theme: RwSignal<Theme>,
    /// Filter option sets, fetched once and shared across pages
    pub filter_options: RwSignal<Option<FilterOptions>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Color theme applied as a class on the app root
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Icon shown on the toggle button (the theme you would switch to)
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

/// Exercise record from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Exercise {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub exercise_type: Option<String>,
    #[serde(default)]
    pub body_part: Option<String>,
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    /// Community rating on a 0-10 scale
    #[serde(default)]
    pub rating: Option<f64>,
    /// 0-1 score, present only on recommendation results
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

/// User profile from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
}

/// Fitness proficiency, used both as a user attribute and a preference field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved exercise reference, linked to a user
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Favorite {
    pub id: String,
    pub exercise_title: String,
}

/// A logged workout, linked to a user (no page renders these yet)
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub exercise_title: String,
    #[serde(default)]
    pub notes: String,
}

/// Distinct values available for each categorical field
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub body_parts: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Active filter selection for the exercise list. An empty string means
/// "no filter" and is omitted from the outgoing query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExerciseFilters {
    pub body_part: String,
    pub equipment: String,
    pub level: String,
    pub exercise_type: String,
}

/// Names one filter input, so updates go through a single typed reducer
/// instead of a string-keyed map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    BodyPart,
    Equipment,
    Level,
    ExerciseType,
}

impl ExerciseFilters {
    pub fn set(&mut self, field: FilterField, value: &str) {
        let slot = match field {
            FilterField::BodyPart => &mut self.body_part,
            FilterField::Equipment => &mut self.equipment,
            FilterField::Level => &mut self.level,
            FilterField::ExerciseType => &mut self.exercise_type,
        };
        *slot = value.to_string();
    }

    pub fn is_empty(&self) -> bool {
        self.body_part.is_empty()
            && self.equipment.is_empty()
            && self.level.is_empty()
            && self.exercise_type.is_empty()
    }
}

/// Remove a favorite from a local list by id. Removing an id that is not
/// present leaves the list unchanged.
pub fn remove_favorite_by_id(favorites: &mut Vec<Favorite>, favorite_id: &str) {
    favorites.retain(|favorite| favorite.id != favorite_id);
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        theme: create_rw_signal(Theme::default()),
        filter_options: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn toggle_theme(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }

    /// Fetch the filter option sets if they are not loaded yet. A failure
    /// is logged and leaves the selects empty rather than surfacing an error.
    pub fn ensure_filter_options(&self) {
        if self.filter_options.get_untracked().is_some() {
            return;
        }

        let slot = self.filter_options;
        spawn_local(async move {
            match api::fetch_filter_options().await {
                Ok(options) => slot.set(Some(options)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load filter options: {}", e).into(),
                    );
                }
            }
        });
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggles_back_and_forth() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_experience_level_parse() {
        assert_eq!(
            ExperienceLevel::parse("Intermediate"),
            Some(ExperienceLevel::Intermediate)
        );
        assert_eq!(ExperienceLevel::parse("pro"), None);
        assert_eq!(ExperienceLevel::parse(""), None);
    }

    #[test]
    fn test_experience_level_serializes_as_plain_string() {
        let json = serde_json::to_string(&ExperienceLevel::Expert).unwrap();
        assert_eq!(json, "\"Expert\"");

        let parsed: ExperienceLevel = serde_json::from_str("\"Beginner\"").unwrap();
        assert_eq!(parsed, ExperienceLevel::Beginner);
    }

    #[test]
    fn test_exercise_deserializes_type_field() {
        let exercise: Exercise = serde_json::from_value(serde_json::json!({
            "id": 42,
            "title": "Barbell Squat",
            "type": "Strength",
            "body_part": "Quadriceps",
            "rating": 9.3
        }))
        .unwrap();

        assert_eq!(exercise.exercise_type.as_deref(), Some("Strength"));
        assert_eq!(exercise.equipment, None);
        assert_eq!(exercise.similarity_score, None);
    }

    #[test]
    fn test_filters_reducer_sets_named_field() {
        let mut filters = ExerciseFilters::default();
        filters.set(FilterField::Equipment, "Dumbbell");
        filters.set(FilterField::Level, "Beginner");

        assert_eq!(filters.equipment, "Dumbbell");
        assert_eq!(filters.level, "Beginner");
        assert!(filters.body_part.is_empty());
        assert!(!filters.is_empty());

        filters.set(FilterField::Equipment, "");
        filters.set(FilterField::Level, "");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_remove_favorite_by_id() {
        let mut favorites = vec![
            Favorite {
                id: "a".to_string(),
                exercise_title: "Bench Press".to_string(),
            },
            Favorite {
                id: "b".to_string(),
                exercise_title: "Squat".to_string(),
            },
        ];

        remove_favorite_by_id(&mut favorites, "a");
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].id, "b");
    }

    #[test]
    fn test_remove_absent_favorite_leaves_list_unchanged() {
        let mut favorites = vec![Favorite {
            id: "a".to_string(),
            exercise_title: "Deadlift".to_string(),
        }];
        let before = favorites.clone();

        remove_favorite_by_id(&mut favorites, "missing");
        assert_eq!(favorites, before);
    }
}
