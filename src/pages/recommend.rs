//! Recommend Page
//!
//! Preference form that requests personalized exercise recommendations.

use leptos::*;

use crate::api;
use crate::api::client::RecommendationRequest;
use crate::api::query::non_empty;
use crate::components::{ExerciseCard, Loading};
use crate::state::global::{Exercise, GlobalState};

/// Result-count choices offered by the form
pub const LIMIT_CHOICES: [usize; 4] = [5, 10, 15, 20];

/// Default number of recommendations
pub const DEFAULT_LIMIT: usize = 10;

/// Preference form state. Empty strings mean "any" and are stripped from
/// the outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    pub body_part: String,
    pub equipment: String,
    pub level: String,
    pub exercise_type: String,
    pub limit: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            body_part: String::new(),
            equipment: String::new(),
            level: String::new(),
            exercise_type: String::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Names one form input for the typed reducer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceField {
    BodyPart,
    Equipment,
    Level,
    ExerciseType,
    Limit,
}

impl Preferences {
    pub fn set(&mut self, field: PreferenceField, value: &str) {
        match field {
            PreferenceField::BodyPart => self.body_part = value.to_string(),
            PreferenceField::Equipment => self.equipment = value.to_string(),
            PreferenceField::Level => self.level = value.to_string(),
            PreferenceField::ExerciseType => self.exercise_type = value.to_string(),
            PreferenceField::Limit => {
                // Only the fixed choices are accepted
                if let Ok(limit) = value.parse() {
                    if LIMIT_CHOICES.contains(&limit) {
                        self.limit = limit;
                    }
                }
            }
        }
    }

    /// Request body with empty fields omitted
    pub fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            body_part: non_empty(&self.body_part),
            equipment: non_empty(&self.equipment),
            level: non_empty(&self.level),
            exercise_type: non_empty(&self.exercise_type),
            limit: self.limit,
        }
    }
}

/// Recommendation page component
#[component]
pub fn Recommend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let preferences = create_rw_signal(Preferences::default());
    let (recommendations, set_recommendations) = create_signal(Vec::<Exercise>::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (searched, set_searched) = create_signal(false);

    state.ensure_filter_options();

    let preference_callback = move |field: PreferenceField| {
        Callback::new(move |value: String| {
            preferences.update(|current| current.set(field, &value));
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        set_loading.set(true);
        set_error.set(None);
        set_searched.set(true);

        let request = preferences.get_untracked().to_request();
        spawn_local(async move {
            match api::fetch_recommendations(&request).await {
                Ok(results) => set_recommendations.set(results),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Recommendation request failed: {}", e).into(),
                    );
                    // Keep any previous results on screen
                    set_error.set(Some(
                        "Failed to get recommendations. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    let on_clear = move |_: web_sys::MouseEvent| {
        preferences.set(Preferences::default());
        set_recommendations.set(Vec::new());
        set_searched.set(false);
        set_error.set(None);
    };

    let options = state.filter_options;
    let body_parts =
        Signal::derive(move || options.get().map(|o| o.body_parts).unwrap_or_default());
    let equipment = Signal::derive(move || options.get().map(|o| o.equipment).unwrap_or_default());
    let levels = Signal::derive(move || options.get().map(|o| o.levels).unwrap_or_default());
    let types = Signal::derive(move || options.get().map(|o| o.types).unwrap_or_default());

    view! {
        <div class="space-y-8">
            // Header
            <div class="text-center">
                <h1 class="text-3xl font-bold">"Get Personalized Recommendations"</h1>
                <p class="text-gray-400 mt-1">
                    "Tell us about your preferences and we'll recommend the perfect exercises for you"
                </p>
            </div>

            // Preference form
            <section class="bg-gray-800 rounded-xl p-6 max-w-2xl mx-auto">
                <h2 class="text-xl font-semibold mb-4">"Your Preferences"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <PreferenceSelect
                        label="Target Body Part"
                        placeholder="Any body part"
                        options=body_parts
                        value=Signal::derive(move || preferences.get().body_part)
                        on_change=preference_callback(PreferenceField::BodyPart)
                    />
                    <PreferenceSelect
                        label="Equipment Available"
                        placeholder="Any equipment"
                        options=equipment
                        value=Signal::derive(move || preferences.get().equipment)
                        on_change=preference_callback(PreferenceField::Equipment)
                    />
                    <PreferenceSelect
                        label="Experience Level"
                        placeholder="Any level"
                        options=levels
                        value=Signal::derive(move || preferences.get().level)
                        on_change=preference_callback(PreferenceField::Level)
                    />
                    <PreferenceSelect
                        label="Exercise Type"
                        placeholder="Any type"
                        options=types
                        value=Signal::derive(move || preferences.get().exercise_type)
                        on_change=preference_callback(PreferenceField::ExerciseType)
                    />

                    // Result count
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Number of Recommendations"</label>
                        <select
                            prop:value=move || preferences.get().limit.to_string()
                            on:change=move |ev| {
                                preferences.update(|current| {
                                    current.set(PreferenceField::Limit, &event_target_value(&ev));
                                });
                            }
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            {LIMIT_CHOICES.into_iter().map(|choice| view! {
                                <option value=choice.to_string()>
                                    {format!("{} exercises", choice)}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if loading.get() { "Finding exercises..." } else { "Get Recommendations" }}
                        </button>
                        <button
                            type="button"
                            on:click=on_clear
                            class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Clear"
                        </button>
                    </div>
                </form>
            </section>

            // Request failure notice
            {move || error.get().map(|message| view! {
                <div class="text-center text-red-400 py-4">
                    <p>{message}</p>
                </div>
            })}

            // Spinner while the request is in flight
            {move || loading.get().then(|| view! { <Loading /> })}

            // Results
            {move || {
                if !searched.get() || loading.get() {
                    return ().into_view();
                }

                let results = recommendations.get();
                view! {
                    <section class="space-y-4">
                        <div class="flex items-center justify-between">
                            <h2 class="text-xl font-semibold">"Recommended Exercises"</h2>
                            <span class="text-gray-400 text-sm">
                                {format!("{} exercises found", results.len())}
                            </span>
                        </div>

                        {if results.is_empty() {
                            view! {
                                <div class="text-center py-12">
                                    <div class="text-5xl mb-4">"🔍"</div>
                                    <p class="text-gray-400">"No exercises found matching your criteria."</p>
                                    <p class="text-gray-500 text-sm mt-1">"Try adjusting your filters."</p>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {results.into_iter().map(|exercise| view! {
                                        <ExerciseCard exercise=exercise show_similarity=true />
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }}
                    </section>
                }.into_view()
            }}
        </div>
    }
}

/// Labelled select bound to one preference field
#[component]
fn PreferenceSelect(
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">{placeholder}</option>
                {move || options.get().into_iter().map(|option| {
                    view! { <option value=option.clone()>{option}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(Preferences::default().limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_reducer_sets_named_field() {
        let mut preferences = Preferences::default();
        preferences.set(PreferenceField::BodyPart, "Chest");
        preferences.set(PreferenceField::Limit, "15");

        assert_eq!(preferences.body_part, "Chest");
        assert_eq!(preferences.limit, 15);
    }

    #[test]
    fn test_limit_outside_choices_is_rejected() {
        let mut preferences = Preferences::default();
        preferences.set(PreferenceField::Limit, "7");
        assert_eq!(preferences.limit, DEFAULT_LIMIT);

        preferences.set(PreferenceField::Limit, "not a number");
        assert_eq!(preferences.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_request_strips_empty_fields() {
        let mut preferences = Preferences::default();
        preferences.set(PreferenceField::Level, "Beginner");
        preferences.set(PreferenceField::Limit, "5");

        let body = serde_json::to_value(preferences.to_request()).unwrap();
        assert_eq!(body, serde_json::json!({"level": "Beginner", "limit": 5}));
    }

    #[test]
    fn test_request_keeps_selected_fields() {
        let mut preferences = Preferences::default();
        preferences.set(PreferenceField::BodyPart, "Chest");
        preferences.set(PreferenceField::Equipment, "Dumbbell");

        let request = preferences.to_request();
        assert_eq!(request.body_part.as_deref(), Some("Chest"));
        assert_eq!(request.equipment.as_deref(), Some("Dumbbell"));
        assert_eq!(request.level, None);
        assert_eq!(request.exercise_type, None);
    }
}
