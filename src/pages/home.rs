//! Home Page
//!
//! Viewer snapshot and player lookup.

use leptos::*;
use leptos_router::*;

use crate::components::CardSkeleton;
use crate::state::global::{GameMode, GlobalState};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (lookup, set_lookup) = create_signal(String::new());
    let navigate = use_navigate();

    let on_lookup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = lookup.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        navigate(&format!("/u/{}", name), Default::default());
    };

    let viewer = state.viewer;

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Gambit"</h1>
                <p class="text-gray-400 mt-1">"Find a player or jump to your own profile"</p>
            </div>

            // Player lookup
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Find a player"</h2>

                <form on:submit=on_lookup class="flex space-x-2 max-w-md">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || lookup.get()
                        on:input=move |ev| set_lookup.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "View"
                    </button>
                </form>
            </section>

            // Viewer snapshot
            <section>
                <h2 class="text-lg font-semibold mb-4">"Your ratings"</h2>
                {move || {
                    match viewer.get() {
                        Some(me) => {
                            let username = me.username.clone();
                            view! {
                                <div class="space-y-4">
                                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                        {GameMode::ALL.into_iter().map(|mode| {
                                            let rating = me.ratings.get(mode);
                                            view! {
                                                <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                                                    <span class="text-gray-400 text-sm">{mode.label()}</span>
                                                    <div class="text-2xl font-bold mt-1">
                                                        {if rating > 0 { rating.to_string() } else { "—".to_string() }}
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>

                                    <A
                                        href=format!("/u/{}", username)
                                        class="inline-block px-4 py-2 bg-gray-700 hover:bg-gray-600
                                               rounded-lg text-sm font-medium transition-colors"
                                    >
                                        "Go to my profile"
                                    </A>
                                </div>
                            }.into_view()
                        }
                        None => view! {
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        }.into_view(),
                    }
                }}
            </section>
        </div>
    }
}
