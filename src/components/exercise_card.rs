//! Exercise Card Component
//!
//! Renders one exercise record: title, collapsible description, tag badges,
//! rating, and optionally the similarity score and a favorite toggle.

use leptos::*;

use crate::state::global::Exercise;

/// Descriptions longer than this many characters start out collapsed
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Whether a description is long enough to collapse
pub fn needs_truncation(text: &str) -> bool {
    text.chars().count() > DESCRIPTION_PREVIEW_CHARS
}

/// Collapsed form of a description. Text at or under the threshold is
/// returned unchanged.
pub fn truncate_description(text: &str) -> String {
    if !needs_truncation(text) {
        return text.to_string();
    }

    let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// Similarity score (0-1) as a whole-number percentage
pub fn similarity_percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}

/// Exercise card component
#[component]
pub fn ExerciseCard(
    exercise: Exercise,
    /// Show the similarity badge (recommendation results only)
    #[prop(default = false)]
    show_similarity: bool,
    /// Whether the exercise is in the viewer's favorites
    #[prop(optional, into)]
    is_favorite: MaybeSignal<bool>,
    /// Invoked with the exercise title; omitting it hides the toggle
    #[prop(optional_no_strip)]
    on_toggle_favorite: Option<Callback<String>>,
) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let description = exercise.description.clone().unwrap_or_default();
    let has_description = !description.is_empty();
    let expandable = needs_truncation(&description);
    let preview = truncate_description(&description);

    view! {
        <div class="exercise-card bg-gray-800 rounded-xl p-4 border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="flex items-start justify-between">
                <h3 class="font-semibold text-lg">{exercise.title.clone()}</h3>

                {on_toggle_favorite.map(|on_toggle| {
                    let title = exercise.title.clone();
                    let favorite = is_favorite.clone();
                    view! {
                        <button
                            class="favorite-toggle text-xl text-yellow-400 hover:text-yellow-300"
                            on:click=move |ev: web_sys::MouseEvent| {
                                // Keep the click from reaching the card
                                ev.stop_propagation();
                                on_toggle.call(title.clone());
                            }
                        >
                            {move || if favorite.get() { "★" } else { "☆" }}
                        </button>
                    }
                })}
            </div>

            {has_description.then(|| view! {
                <p class="text-gray-400 text-sm mt-2">
                    {move || if expanded.get() { description.clone() } else { preview.clone() }}
                </p>
            })}

            {expandable.then(|| view! {
                <button
                    class="text-primary-400 hover:text-primary-300 text-sm mt-1"
                    on:click=move |_| set_expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Show less" } else { "Show more" }}
                </button>
            })}

            <div class="exercise-meta flex flex-wrap gap-2 mt-3">
                {exercise.body_part.clone().map(|body_part| view! {
                    <span class="tag bg-blue-900 text-blue-200 text-xs px-2 py-0.5 rounded-full">{body_part}</span>
                })}
                {exercise.equipment.clone().map(|equipment| view! {
                    <span class="tag bg-green-900 text-green-200 text-xs px-2 py-0.5 rounded-full">{equipment}</span>
                })}
                {exercise.level.clone().map(|level| view! {
                    <span class="tag bg-purple-900 text-purple-200 text-xs px-2 py-0.5 rounded-full">{level}</span>
                })}
                {exercise.exercise_type.clone().map(|exercise_type| view! {
                    <span class="tag bg-gray-700 text-gray-300 text-xs px-2 py-0.5 rounded-full">{exercise_type}</span>
                })}

                {show_similarity
                    .then(|| exercise.similarity_score.map(|score| view! {
                        <span class="similarity-score bg-primary-600 text-white text-xs px-2 py-0.5 rounded-full">
                            {format!("🎯 {}% match", similarity_percent(score))}
                        </span>
                    }))
                    .flatten()}
            </div>

            {exercise.rating.map(|rating| view! {
                <div class="rating flex items-center space-x-1 mt-3">
                    <span>"⭐"</span>
                    <span class="rating-value font-semibold">{format!("{:.1}", rating)}</span>
                    <span class="text-gray-500 text-sm">"/ 10"</span>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_at_threshold_is_untouched() {
        let text = "x".repeat(100);
        assert!(!needs_truncation(&text));
        assert_eq!(truncate_description(&text), text);
    }

    #[test]
    fn test_description_over_threshold_is_truncated() {
        let text = "x".repeat(101);
        assert!(needs_truncation(&text));

        let preview = truncate_description(&text);
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // 100 multi-byte characters must not be cut
        let text = "é".repeat(100);
        assert!(!needs_truncation(&text));
        assert_eq!(truncate_description(&text), text);
    }

    #[test]
    fn test_similarity_rounds_to_nearest_percent() {
        assert_eq!(similarity_percent(0.876), 88);
        assert_eq!(similarity_percent(0.874), 87);
        assert_eq!(similarity_percent(0.5), 50);
        assert_eq!(similarity_percent(1.0), 100);
        assert_eq!(similarity_percent(0.0), 0);
    }
}
