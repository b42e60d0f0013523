//! Home Page
//!
//! Landing page with feature overview and calls to action.

use leptos::*;
use leptos_router::*;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-12">
            // Hero
            <section class="hero text-center py-12">
                <h1 class="text-4xl font-bold mb-4">"Find Your Perfect Workout"</h1>
                <p class="text-gray-400 max-w-2xl mx-auto mb-8">
                    "Get personalized gym exercise recommendations powered by machine learning. "
                    "Whether you're a beginner or expert, we'll help you find the right exercises for your goals."
                </p>
                <div class="flex items-center justify-center space-x-4">
                    <A
                        href="/recommend"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Get Recommendations →"
                    </A>
                    <A
                        href="/exercises"
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Browse Exercises"
                    </A>
                </div>
            </section>

            // Feature overview
            <section class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                <FeatureCard
                    icon="🎯"
                    title="Personalized Recommendations"
                    description="Our ML model analyzes your preferences and fitness level to suggest exercises tailored just for you."
                />
                <FeatureCard
                    icon="💪"
                    title="2500+ Exercises"
                    description="Access a comprehensive database of gym exercises covering all muscle groups, equipment types, and difficulty levels."
                />
                <FeatureCard
                    icon="📊"
                    title="Track Your Progress"
                    description="Save your favorite exercises and keep track of your workout history to monitor your fitness journey."
                />
                <FeatureCard
                    icon="🔍"
                    title="Advanced Filtering"
                    description="Filter exercises by body part, equipment, difficulty level, and exercise type to find exactly what you need."
                />
                <FeatureCard
                    icon="⭐"
                    title="Community Ratings"
                    description="See ratings from other users to help you choose the most effective exercises."
                />
                <FeatureCard
                    icon="🚀"
                    title="Quick Start"
                    description="No account needed to get started. Simply select your preferences and get instant recommendations."
                />
            </section>

            // Closing call to action
            <section class="text-center py-8">
                <h2 class="text-2xl font-semibold mb-2">"Ready to transform your workouts?"</h2>
                <p class="text-gray-400 mb-6">"Start getting personalized exercise recommendations in seconds."</p>
                <A
                    href="/recommend"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Start Now →"
                </A>
            </section>
        </div>
    }
}

/// Single feature blurb
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="font-semibold mb-2">{title}</h3>
            <p class="text-gray-400 text-sm">{description}</p>
        </div>
    }
}
