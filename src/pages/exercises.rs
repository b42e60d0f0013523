//! Exercises Page
//!
//! Browse the exercise database with filters and pagination.

use leptos::*;

use crate::api;
use crate::components::{ExerciseCard, Loading};
use crate::state::global::{
    remove_favorite_by_id, Exercise, ExerciseFilters, Favorite, FilterField, GlobalState,
};
use crate::state::requests::RequestSequence;
use crate::state::session::Session;

/// Exercises shown per page
pub const PAGE_SIZE: usize = 12;

/// At most this many numbered page buttons are rendered
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Number of pages needed for `total` results
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// The window of page numbers to render: at most [`MAX_PAGE_BUTTONS`]
/// consecutive pages, anchored to the start or end near the boundaries and
/// centered on the current page otherwise.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return Vec::new();
    }

    let count = total_pages.min(MAX_PAGE_BUTTONS);
    let first = if total_pages <= MAX_PAGE_BUTTONS {
        1
    } else if current <= 3 {
        1
    } else if current >= total_pages - 2 {
        total_pages - 4
    } else {
        current - 2
    };

    (first..first + count).collect()
}

/// A filter edit always jumps back to the first page. Returns the page to
/// show next.
fn apply_filter(filters: &mut ExerciseFilters, field: FilterField, value: &str) -> usize {
    filters.set(field, value);
    1
}

/// Exercise browsing page
#[component]
pub fn Exercises() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");

    let filters = create_rw_signal(ExerciseFilters::default());
    let (page, set_page) = create_signal(1usize);
    let (exercises, set_exercises) = create_signal(Vec::<Exercise>::new());
    let (total, set_total) = create_signal(0usize);
    let (loading, set_loading) = create_signal(true);
    let (favorites, set_favorites) = create_signal(Vec::<Favorite>::new());
    let requests = RequestSequence::new();

    // Filter option sets are fetched once and shared across pages
    state.ensure_filter_options();

    // Load the viewer's favorites so cards can show the toggle state;
    // a failure just leaves the list empty.
    let viewer_id = session.user_id();
    if let Some(user_id) = viewer_id.clone() {
        spawn_local(async move {
            match api::fetch_favorites(&user_id).await {
                Ok(list) => set_favorites.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load favorites: {}", e).into());
                }
            }
        });
    }

    // Refetch whenever the page or the filter selection changes. Responses
    // superseded by a newer request are discarded.
    let fetch_requests = requests.clone();
    create_effect(move |_| {
        let current_page = page.get();
        let current_filters = filters.get();
        let token = fetch_requests.begin();
        let requests = fetch_requests.clone();

        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_exercises(current_page, PAGE_SIZE, &current_filters).await {
                Ok(response) => {
                    if requests.is_current(token) {
                        set_exercises.set(response.exercises);
                        set_total.set(response.total);
                        set_loading.set(false);
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load exercises: {}", e).into());
                    if requests.is_current(token) {
                        set_loading.set(false);
                    }
                }
            }
        });
    });

    let filter_callback = move |field: FilterField| {
        Callback::new(move |value: String| {
            batch(move || {
                filters.update(|current| {
                    set_page.set(apply_filter(current, field, &value));
                });
            });
        })
    };

    let clear_filters = move |_: web_sys::MouseEvent| {
        batch(move || {
            filters.set(ExerciseFilters::default());
            set_page.set(1);
        });
    };

    // Toggle is only offered to signed-in visitors
    let toggle_favorite = viewer_id.map(|user_id| {
        Callback::new(move |title: String| {
            let user_id = user_id.clone();
            let existing = favorites
                .get_untracked()
                .into_iter()
                .find(|favorite| favorite.exercise_title == title);

            spawn_local(async move {
                match existing {
                    Some(favorite) => match api::remove_favorite(&user_id, &favorite.id).await {
                        Ok(()) => {
                            set_favorites.update(|list| remove_favorite_by_id(list, &favorite.id));
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to remove favorite: {}", e).into(),
                            );
                        }
                    },
                    None => match api::add_favorite(&user_id, &title).await {
                        Ok(favorite) => set_favorites.update(|list| list.push(favorite)),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to add favorite: {}", e).into(),
                            );
                        }
                    },
                }
            });
        })
    });

    let options = state.filter_options;
    let body_parts =
        Signal::derive(move || options.get().map(|o| o.body_parts).unwrap_or_default());
    let equipment = Signal::derive(move || options.get().map(|o| o.equipment).unwrap_or_default());
    let levels = Signal::derive(move || options.get().map(|o| o.levels).unwrap_or_default());
    let types = Signal::derive(move || options.get().map(|o| o.types).unwrap_or_default());

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Browse All Exercises"</h1>
                <p class="text-gray-400 mt-1">"Explore our comprehensive database of gym exercises"</p>
            </div>

            // Filters
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="grid md:grid-cols-2 lg:grid-cols-5 gap-4 items-end">
                    <FilterSelect
                        label="Body Part"
                        placeholder="All body parts"
                        options=body_parts
                        value=Signal::derive(move || filters.get().body_part)
                        on_change=filter_callback(FilterField::BodyPart)
                    />
                    <FilterSelect
                        label="Equipment"
                        placeholder="All equipment"
                        options=equipment
                        value=Signal::derive(move || filters.get().equipment)
                        on_change=filter_callback(FilterField::Equipment)
                    />
                    <FilterSelect
                        label="Level"
                        placeholder="All levels"
                        options=levels
                        value=Signal::derive(move || filters.get().level)
                        on_change=filter_callback(FilterField::Level)
                    />
                    <FilterSelect
                        label="Type"
                        placeholder="All types"
                        options=types
                        value=Signal::derive(move || filters.get().exercise_type)
                        on_change=filter_callback(FilterField::ExerciseType)
                    />
                    <button
                        on:click=clear_filters
                        class="px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Clear Filters"
                    </button>
                </div>
            </section>

            // Results header
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"Exercises"</h2>
                <span class="text-gray-400 text-sm">
                    {move || format!("{} exercises found", total.get())}
                </span>
            </div>

            // Results
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if exercises.get().is_empty() {
                    view! {
                        <div class="text-center py-12">
                            <div class="text-5xl mb-4">"🏋️"</div>
                            <p class="text-gray-400 mb-4">"No exercises found matching your filters."</p>
                            <button
                                on:click=clear_filters
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            >
                                "Clear Filters"
                            </button>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                            {exercises.get().into_iter().map(|exercise| {
                                let title = exercise.title.clone();
                                let favorite = Signal::derive(move || {
                                    favorites.get().iter().any(|f| f.exercise_title == title)
                                });
                                view! {
                                    <ExerciseCard
                                        exercise=exercise
                                        is_favorite=favorite
                                        on_toggle_favorite=toggle_favorite
                                    />
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}

            // Pagination
            {move || {
                let pages = total_pages(total.get(), PAGE_SIZE);
                if loading.get() || pages <= 1 {
                    return ().into_view();
                }
                let current = page.get();

                view! {
                    <div class="pagination flex items-center justify-center space-x-2">
                        <button
                            disabled={current == 1}
                            on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                            class="px-3 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50 rounded-lg text-sm transition-colors"
                        >
                            "← Previous"
                        </button>

                        {page_window(current, pages).into_iter().map(|n| {
                            let class = if n == current {
                                "px-3 py-2 bg-primary-600 text-white rounded-lg text-sm"
                            } else {
                                "px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                            };
                            view! {
                                <button class=class on:click=move |_| set_page.set(n)>
                                    {n}
                                </button>
                            }
                        }).collect_view()}

                        <button
                            disabled={current == pages}
                            on:click=move |_| set_page.update(|p| *p = (*p + 1).min(pages))
                            class="px-3 py-2 bg-gray-700 hover:bg-gray-600 disabled:opacity-50 rounded-lg text-sm transition-colors"
                        >
                            "Next →"
                        </button>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Labelled select bound to one filter field
#[component]
fn FilterSelect(
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
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(12, PAGE_SIZE), 1);
        assert_eq!(total_pages(13, PAGE_SIZE), 2);
        assert_eq!(total_pages(100, PAGE_SIZE), 9);
    }

    #[test]
    fn test_window_shows_all_pages_when_few() {
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_anchors_to_the_start() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_anchors_to_the_end() {
        assert_eq!(page_window(8, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_centers_on_the_current_page() {
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_window_always_contains_current_page() {
        for total in 1..=20 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(window.len() <= MAX_PAGE_BUTTONS);
                assert!(
                    window.contains(&current),
                    "window {:?} misses page {} of {}",
                    window,
                    current,
                    total
                );
            }
        }
    }

    #[test]
    fn test_filter_edit_returns_to_first_page() {
        let mut filters = ExerciseFilters::default();
        let next_page = apply_filter(&mut filters, FilterField::BodyPart, "Chest");

        assert_eq!(next_page, 1);
        assert_eq!(filters.body_part, "Chest");
    }
}
