//! Settings Page
//!
//! Account editing: identity fields, social links, avatar upload and the
//! API connection settings.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::Loading;
use crate::state::global::{GlobalState, SocialLink, UserProfile};

/// File extensions accepted for avatar upload
const ALLOWED_AVATAR_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Check an uploaded file's name and MIME type before conversion
pub fn allowed_image(file_name: &str, mime: &str) -> bool {
    if !mime.starts_with("image/") {
        return false;
    }

    file_name
        .rsplit('.')
        .next()
        .map(|ext| {
            let ext = ext.to_lowercase();
            ALLOWED_AVATAR_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The record as loaded; the save sends this back with edited fields
    let (profile, set_profile) = create_signal(None::<UserProfile>);

    let (name, set_name) = create_signal(String::new());
    let (country, set_country) = create_signal(String::new());
    let (bio, set_bio) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (avatar, set_avatar) = create_signal(None::<String>);
    let links = create_rw_signal(Vec::<SocialLink>::new());

    let (saving, set_saving) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);

    // Load the current user on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_me().await {
                Ok(me) => {
                    set_name.set(me.name.clone().unwrap_or_default());
                    set_country.set(me.country.clone().unwrap_or_default());
                    set_bio.set(me.bio.clone().unwrap_or_default());
                    set_email.set(me.email.clone().unwrap_or_default());
                    set_avatar.set(me.avatar.clone());
                    links.set(me.social_links.clone());
                    set_profile.set(Some(me));
                }
                Err(e) => {
                    set_form_error.set(Some(e));
                }
            }
        });
    });

    let state_for_save = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(base) = profile.get() else {
            return;
        };

        // Whole-record replacement: edited fields over the loaded base
        let updated = UserProfile {
            name: Some(name.get()).filter(|s| !s.is_empty()),
            country: Some(country.get()).filter(|s| !s.is_empty()),
            bio: Some(bio.get()).filter(|s| !s.is_empty()),
            email: Some(email.get()).filter(|s| !s.is_empty()),
            avatar: avatar.get(),
            social_links: links.get(),
            ..base
        };

        set_saving.set(true);
        set_form_error.set(None);

        let state_clone = state_for_save.clone();
        spawn_local(async move {
            match api::update_me(&updated).await {
                Ok(saved) => {
                    state_clone.viewer.set(Some(saved.clone()));
                    set_profile.set(Some(saved));
                    state_clone.show_success("Profile saved");
                }
                Err(e) => {
                    set_form_error.set(Some(e));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Edit your account details"</p>
            </div>

            {move || {
                if profile.get().is_none() && form_error.get().is_none() {
                    return view! { <Loading /> }.into_view();
                }

                view! {
                    <form on:submit=on_submit.clone() class="space-y-8">
                        // Identity
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Account"</h2>

                            <div class="space-y-4">
                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                                    <input
                                        type="text"
                                        disabled=true
                                        prop:value=move || {
                                            profile.get().map(|p| p.username).unwrap_or_default()
                                        }
                                        class="w-full max-w-md bg-gray-700 rounded-lg px-4 py-3
                                               text-gray-500 border border-gray-600"
                                    />
                                </div>

                                <TextField label="Display name" value=name set_value=set_name />
                                <TextField label="Country" value=country set_value=set_country />
                                <TextField label="Email" value=email set_value=set_email />

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Bio"</label>
                                    <textarea
                                        prop:value=move || bio.get()
                                        on:input=move |ev| set_bio.set(event_target_value(&ev))
                                        rows="3"
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>
                            </div>
                        </section>

                        // Avatar
                        <AvatarUpload avatar=avatar set_avatar=set_avatar />

                        // Social links
                        <SocialLinksEditor links=links />

                        // Save
                        <div class="space-y-3">
                            {move || {
                                form_error.get().map(|error| view! {
                                    <div class="bg-red-900/50 border border-red-700 text-red-300
                                                rounded-lg px-4 py-3 text-sm">
                                        {error}
                                    </div>
                                })
                            }}

                            <button
                                type="submit"
                                disabled=move || saving.get()
                                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                       rounded-lg font-semibold transition-colors"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save profile" }}
                            </button>
                        </div>
                    </form>
                }.into_view()
            }}

            // API Connection
            <ApiSettings />
        </div>
    }
}

/// Single-line text field bound to a signal pair
#[component]
fn TextField(
    label: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full max-w-md bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Avatar preview plus validated file upload
#[component]
fn AvatarUpload(
    avatar: ReadSignal<Option<String>>,
    set_avatar: WriteSignal<Option<String>>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_upload = state;
    let handle_file_upload = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                if !allowed_image(&file.name(), &file.type_()) {
                    state_for_upload.show_error("Avatar must be a PNG, JPG, GIF or WebP image");
                    return;
                }

                let file_reader = web_sys::FileReader::new().unwrap();

                let onload = {
                    let file_reader = file_reader.clone();
                    wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                        if let Ok(result) = file_reader.result() {
                            if let Some(data_url) = result.as_string() {
                                set_avatar.set(Some(data_url));
                            }
                        }
                    }) as Box<dyn FnMut(_)>)
                };

                file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();

                let _ = file_reader.read_as_data_url(&file);
            }
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Avatar"</h2>

            <div class="flex items-center gap-6">
                {move || {
                    match avatar.get() {
                        Some(url) if !url.is_empty() => view! {
                            <img src=url alt="avatar" class="w-20 h-20 rounded-full object-cover" />
                        }.into_view(),
                        _ => view! {
                            <div class="w-20 h-20 rounded-full bg-gray-700 flex items-center
                                        justify-center text-2xl text-gray-500">
                                "?"
                            </div>
                        }.into_view(),
                    }
                }}

                <div class="space-y-2">
                    <label
                        class="inline-flex items-center px-4 py-2 bg-gray-600 hover:bg-gray-500
                               rounded-lg cursor-pointer transition-colors"
                    >
                        <input
                            type="file"
                            accept="image/*"
                            class="hidden"
                            on:change=handle_file_upload
                        />
                        "Choose image"
                    </label>

                    {move || {
                        avatar.get().filter(|a| !a.is_empty()).map(|_| view! {
                            <button
                                type="button"
                                on:click=move |_| set_avatar.set(None)
                                class="block text-sm text-gray-400 hover:text-red-400 transition-colors"
                            >
                                "Remove avatar"
                            </button>
                        })
                    }}
                </div>
            </div>
        </section>
    }
}

/// Social link list editor: add, update and remove rows by index
#[component]
fn SocialLinksEditor(links: RwSignal<Vec<SocialLink>>) -> impl IntoView {
    let add_link = move |_| {
        links.update(|l| l.push(SocialLink::default()));
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Social Links"</h2>
                <button
                    type="button"
                    on:click=add_link
                    class="px-3 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg text-sm
                           font-medium transition-colors"
                >
                    "+ Add link"
                </button>
            </div>

            <div class="space-y-3">
                {move || {
                    let list = links.get();
                    if list.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">"No links yet"</p>
                        }.into_view();
                    }

                    list.into_iter().enumerate().map(|(idx, link)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <input
                                    type="text"
                                    placeholder="Label (optional)"
                                    prop:value=link.label.clone()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        links.update(|l| {
                                            if let Some(entry) = l.get_mut(idx) {
                                                entry.label = value;
                                            }
                                        });
                                    }
                                    class="w-40 bg-gray-700 rounded px-3 py-2 text-sm
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <input
                                    type="text"
                                    placeholder="https://..."
                                    prop:value=link.url.clone()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        links.update(|l| {
                                            if let Some(entry) = l.get_mut(idx) {
                                                entry.url = value;
                                            }
                                        });
                                    }
                                    class="flex-1 bg-gray-700 rounded px-3 py-2 text-sm
                                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                                />
                                <button
                                    type="button"
                                    on:click=move |_| links.update(|l| { l.remove(idx); })
                                    class="text-gray-400 hover:text-red-400 px-2 transition-colors"
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);

    let state_for_test = state.clone();
    let test_connection = move |_| {
        set_testing.set(true);

        let url = api_url.get();
        api::set_api_base(&url);

        let state_clone = state_for_test.clone();
        spawn_local(async move {
            match api::check_health().await {
                Ok(_) => {
                    state_clone.show_success("Connection successful!");
                }
                Err(e) => {
                    state_clone.show_error(&format!("Connection failed: {}", e));
                }
            }
            set_testing.set(false);
        });
    };

    let state_for_save = state;
    let save_url = move |_| {
        let url = api_url.get();
        api::set_api_base(&url);
        state_for_save.show_success("API URL saved");
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Gambit API URL"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="button"
                        on:click=test_connection
                        disabled=move || testing.get()
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if testing.get() { "Testing..." } else { "Test" }}
                    </button>
                    <button
                        type="button"
                        on:click=save_url
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_image_extensions() {
        assert!(allowed_image("me.png", "image/png"));
        assert!(allowed_image("me.JPEG", "image/jpeg"));
        assert!(allowed_image("photo.webp", "image/webp"));
    }

    #[test]
    fn test_rejects_wrong_extension() {
        assert!(!allowed_image("me.svg", "image/svg+xml"));
        assert!(!allowed_image("me.pdf", "application/pdf"));
        assert!(!allowed_image("noextension", "image/png"));
    }

    #[test]
    fn test_rejects_non_image_mime() {
        assert!(!allowed_image("evil.png", "text/html"));
    }
}
