//! Profile Page
//!
//! Profile creation, favorites management, and logout. A stored user id
//! gates the logged-in view; without one the page shows the signup form.

use leptos::*;

use crate::api;
use crate::api::client::UserCreate;
use crate::components::Loading;
use crate::state::global::{
    remove_favorite_by_id, ExperienceLevel, Favorite, GlobalState, User,
};
use crate::state::session::Session;

/// Signup form state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub experience_level: ExperienceLevel,
}

/// Names one signup input for the typed reducer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    ExperienceLevel,
}

impl ProfileForm {
    pub fn set(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::Name => self.name = value.to_string(),
            ProfileField::Email => self.email = value.to_string(),
            ProfileField::ExperienceLevel => {
                // Unknown levels are ignored rather than stored
                if let Some(level) = ExperienceLevel::parse(value) {
                    self.experience_level = level;
                }
            }
        }
    }

    /// True when the required fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn to_request(&self) -> UserCreate {
        UserCreate {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            experience_level: self.experience_level,
        }
    }
}

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");

    let user = create_rw_signal(None::<User>);
    let favorites = create_rw_signal(Vec::<Favorite>::new());
    let (loading, set_loading) = create_signal(false);
    let form = create_rw_signal(ProfileForm::default());
    let (saving, set_saving) = create_signal(false);

    // Restore the session on mount, if a user id is stored
    if let Some(user_id) = session.user_id() {
        let session = session.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_user(&user_id).await {
                Ok(profile) => {
                    user.set(Some(profile));
                    match api::fetch_favorites(&user_id).await {
                        Ok(saved) => favorites.set(saved),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to load favorites: {}", e).into(),
                            );
                        }
                    }
                }
                Err(e) => {
                    // The stored id no longer resolves, drop it
                    web_sys::console::error_1(&format!("Failed to load profile: {}", e).into());
                    session.forget_user();
                }
            }
            set_loading.set(false);
        });
    }

    let form_callback = move |field: ProfileField| {
        Callback::new(move |value: String| {
            form.update(|current| current.set(field, &value));
        })
    };

    let on_create = {
        let state = state.clone();
        let session = session.clone();
        Callback::new(move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let current = form.get_untracked();
            if !current.is_complete() {
                state.show_error("Name and email are required");
                return;
            }

            set_saving.set(true);
            let request = current.to_request();
            let state = state.clone();
            let session = session.clone();
            spawn_local(async move {
                match api::create_user(&request).await {
                    Ok(profile) => {
                        session.remember_user(&profile.id);
                        user.set(Some(profile));

                        match api::fetch_favorites(&session.user_id().unwrap_or_default()).await {
                            Ok(saved) => favorites.set(saved),
                            Err(_) => favorites.set(Vec::new()),
                        }

                        state.show_success("Profile created!");
                    }
                    Err(e) => {
                        state.show_error(&format!("Failed to create profile: {}", e));
                    }
                }
                set_saving.set(false);
            });
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::new(move |_: web_sys::MouseEvent| {
            session.forget_user();
            user.set(None);
            favorites.set(Vec::new());
            form.set(ProfileForm::default());
        })
    };

    let on_remove_favorite = {
        let state = state.clone();
        Callback::new(move |favorite_id: String| {
            let Some(user_id) = user.get_untracked().map(|profile| profile.id) else {
                return;
            };

            let state = state.clone();
            spawn_local(async move {
                match api::remove_favorite(&user_id, &favorite_id).await {
                    Ok(()) => {
                        favorites.update(|saved| remove_favorite_by_id(saved, &favorite_id));
                    }
                    Err(e) => {
                        state.show_error(&format!("Failed to remove favorite: {}", e));
                    }
                }
            });
        })
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                match user.get() {
                    Some(profile) => view! {
                        <ProfileView
                            profile=profile
                            favorites=favorites
                            on_remove_favorite=on_remove_favorite
                            on_logout=on_logout
                        />
                    }
                    .into_view(),
                    None => view! {
                        <CreateProfile
                            form=form
                            form_callback=Callback::new(form_callback)
                            saving=saving
                            on_create=on_create
                        />
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}

/// Signup prompt and form, shown when no profile is loaded
#[component]
fn CreateProfile(
    form: RwSignal<ProfileForm>,
    form_callback: Callback<ProfileField, Callback<String>>,
    #[prop(into)] saving: Signal<bool>,
    on_create: Callback<web_sys::SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="text-center py-8">
                <div class="text-5xl mb-4">"👤"</div>
                <h1 class="text-3xl font-bold mb-2">"Create Your Profile"</h1>
                <p class="text-gray-400">
                    "Save your favorite exercises and track your progress"
                </p>
            </div>

            <form
                on:submit=move |ev| on_create.call(ev)
                class="bg-gray-800 rounded-xl p-6 space-y-4"
            >
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                    <input
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form_callback.call(ProfileField::Name).call(event_target_value(&ev))
                        placeholder="Your name"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form_callback.call(ProfileField::Email).call(event_target_value(&ev))
                        placeholder="you@example.com"
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Experience Level"</label>
                    <select
                        prop:value=move || form.get().experience_level.as_str()
                        on:change=move |ev| {
                            form_callback.call(ProfileField::ExperienceLevel).call(event_target_value(&ev))
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {ExperienceLevel::ALL.into_iter().map(|level| view! {
                            <option value=level.as_str()>{level.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <button
                    type="submit"
                    disabled=move || saving.get()
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if saving.get() { "Creating..." } else { "Create Profile" }}
                </button>
            </form>
        </div>
    }
}

/// Logged-in profile with the favorites list
#[component]
fn ProfileView(
    profile: User,
    #[prop(into)] favorites: Signal<Vec<Favorite>>,
    on_remove_favorite: Callback<String>,
    on_logout: Callback<web_sys::MouseEvent>,
) -> impl IntoView {
    let level = profile
        .experience_level
        .unwrap_or_default()
        .as_str();

    view! {
        <div class="space-y-8">
            // Profile header
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-4">
                        <div class="text-4xl">"👤"</div>
                        <div>
                            <h1 class="text-2xl font-bold">{profile.name.clone()}</h1>
                            <p class="text-gray-400 text-sm">{profile.email.clone()}</p>
                        </div>
                    </div>
                    <span class="px-3 py-1 bg-primary-600/20 text-primary-400 rounded-full text-sm">
                        {level}
                    </span>
                </div>
            </section>

            // Favorites
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"⭐ Favorite Exercises"</h2>

                {move || {
                    let saved = favorites.get();
                    if saved.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">
                                "No favorites yet. Browse exercises and star the ones you like."
                            </p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <ul class="space-y-2">
                                {saved.into_iter().map(|favorite| {
                                    let favorite_id = favorite.id.clone();
                                    view! {
                                        <li class="flex items-center justify-between bg-gray-700 rounded-lg px-4 py-3">
                                            <span>{favorite.exercise_title}</span>
                                            <button
                                                on:click=move |_| on_remove_favorite.call(favorite_id.clone())
                                                class="text-sm text-red-400 hover:text-red-300 transition-colors"
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </section>

            <div class="text-center">
                <button
                    on:click=move |ev| on_logout.call(ev)
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Logout"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_reducer_sets_named_field() {
        let mut form = ProfileForm::default();
        form.set(ProfileField::Name, "Jo");
        form.set(ProfileField::Email, "jo@example.com");
        form.set(ProfileField::ExperienceLevel, "Expert");

        assert_eq!(form.name, "Jo");
        assert_eq!(form.email, "jo@example.com");
        assert_eq!(form.experience_level, ExperienceLevel::Expert);
    }

    #[test]
    fn test_unknown_level_is_ignored() {
        let mut form = ProfileForm::default();
        form.set(ProfileField::ExperienceLevel, "Olympian");
        assert_eq!(form.experience_level, ExperienceLevel::Beginner);
    }

    #[test]
    fn test_is_complete_requires_name_and_email() {
        let mut form = ProfileForm::default();
        assert!(!form.is_complete());

        form.set(ProfileField::Name, "Jo");
        assert!(!form.is_complete());

        form.set(ProfileField::Email, "   ");
        assert!(!form.is_complete());

        form.set(ProfileField::Email, "jo@example.com");
        assert!(form.is_complete());
    }

    #[test]
    fn test_to_request_trims_whitespace() {
        let mut form = ProfileForm::default();
        form.set(ProfileField::Name, "  Jo ");
        form.set(ProfileField::Email, " jo@example.com ");

        let request = form.to_request();
        assert_eq!(request.name, "Jo");
        assert_eq!(request.email, "jo@example.com");
        assert_eq!(request.experience_level, ExperienceLevel::Beginner);
    }
}
