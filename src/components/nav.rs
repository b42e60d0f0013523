//! Navigation Component
//!
//! Header navigation bar with brand, links, and the theme toggle.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let theme = state.theme;

    view! {
        <nav class="navbar bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"💪"</span>
                        <span class="text-xl font-bold text-white">"GymRec"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/recommend" label="Get Recommendations" />
                        <NavLink href="/exercises" label="Browse Exercises" />
                        <NavLink href="/profile" label="Profile" />
                    </div>

                    // Theme toggle
                    <button
                        class="theme-toggle px-3 py-2 rounded-lg hover:bg-gray-700 transition-colors"
                        on:click=move |_| state.toggle_theme()
                    >
                        {move || theme.get().toggle_icon()}
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
