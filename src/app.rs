//! Application Root
//!
//! Router, global context, and the page chrome shared by every route.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Exercises, Home, Profile, Recommend};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::session::Session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_context(Session::browser());

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Router>
            <div class=move || {
                format!(
                    "app min-h-screen flex flex-col bg-gray-900 text-gray-100 {}",
                    state.theme.get().class_name()
                )
            }>
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/recommend" view=Recommend />
                        <Route path="/exercises" view=Exercises />
                        <Route path="/profile" view=Profile />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
                <Toast />
            </div>
        </Router>
    }
}

/// Page footer
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-700 py-4">
            <div class="container mx-auto px-4 text-center text-gray-500 text-sm">
                "© 2024 GymRec - Gym Exercise Recommendation System"
            </div>
        </footer>
    }
}

/// Fallback for unknown routes
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="text-6xl mb-4">"🤷"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
