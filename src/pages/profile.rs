//! Profile Page
//!
//! Public player profile: identity, ratings, statistics charts, social
//! links, recent games and the friend-relationship actions.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{
    DigiQuizChart, GameHistory, Loading, ModeStatsCharts, RatingCard, SocialLinks,
};
use crate::state::friends::{resolve_friend_state, FriendState};
use crate::state::global::{GameMode, GlobalState, UserProfile};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();

    let username = create_memo(move |_| {
        params.with(|p| p.get("username").cloned().unwrap_or_default())
    });

    let (account, set_account) = create_signal(None::<UserProfile>);
    let (load_error, set_load_error) = create_signal(None::<String>);
    let (friend_state, set_friend_state) = create_signal(FriendState::Checking);

    // Load the account and relationship on mount and whenever the route
    // points at a different player
    create_effect(move |_| {
        let name = username.get();
        if name.is_empty() {
            return;
        }

        set_account.set(None);
        set_load_error.set(None);
        set_friend_state.set(FriendState::Checking);

        spawn_local(async move {
            match api::fetch_account(&name).await {
                Ok(profile) => {
                    let target_id = profile.id.clone();
                    set_account.set(Some(profile));
                    set_friend_state.set(resolve_relation(&target_id).await);
                }
                Err(e) => {
                    set_load_error.set(Some(e));
                }
            }
        });
    });

    // True when the viewer is looking at their own profile
    let viewer = state.viewer;
    let is_self = create_memo(move |_| {
        viewer.get()
            .map(|v| v.username == username.get())
            .unwrap_or(false)
    });

    let stats = create_memo(move |_| {
        account.get().map(|a| a.stats).unwrap_or_default()
    });
    let quiz = create_memo(move |_| {
        account.get().map(|a| a.digi_quiz).unwrap_or_default()
    });
    let ratings = create_memo(move |_| {
        account.get().map(|a| a.ratings).unwrap_or_default()
    });
    let links = create_memo(move |_| {
        account.get().map(|a| a.social_links).unwrap_or_default()
    });

    view! {
        <div class="space-y-8">
            {move || {
                if let Some(error) = load_error.get() {
                    return view! {
                        <div class="flex flex-col items-center justify-center min-h-[40vh] text-center">
                            <div class="text-6xl mb-4">"♟️"</div>
                            <h1 class="text-2xl font-bold mb-2">"Player not found"</h1>
                            <p class="text-gray-400">{error}</p>
                        </div>
                    }.into_view();
                }

                match account.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(acct) => view! {
                        <ProfileHeader
                            account=acct
                            is_self=is_self
                            friend_state=friend_state
                            set_friend_state=set_friend_state
                        />
                    }.into_view(),
                }
            }}

            {move || {
                if account.get().is_none() {
                    return view! {}.into_view();
                }

                view! {
                    // Ratings
                    <section>
                        <h2 class="text-lg font-semibold mb-4">"Ratings"</h2>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            {GameMode::ALL.into_iter().map(|mode| {
                                view! {
                                    <RatingCard
                                        mode=mode
                                        rating=Signal::derive(move || ratings.get().get(mode))
                                    />
                                }
                            }).collect_view()}
                        </div>
                    </section>

                    // Win/draw/loss charts per mode
                    <section>
                        <h2 class="text-lg font-semibold mb-4">"Statistics"</h2>
                        <ModeStatsCharts stats=stats />
                    </section>

                    // Quiz chart and social links
                    <div class="grid md:grid-cols-2 gap-8">
                        <DigiQuizChart stats=quiz />

                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Links"</h2>
                            {move || {
                                if links.get().iter().all(|l| l.url.is_empty()) {
                                    view! {
                                        <p class="text-gray-400 text-sm">"No links shared"</p>
                                    }.into_view()
                                } else {
                                    view! { <SocialLinks links=links /> }.into_view()
                                }
                            }}
                        </section>
                    </div>

                    // Recent games
                    <GameHistory username=username />
                }.into_view()
            }}
        </div>
    }
}

/// Resolve the viewer's relationship to the target from fresh list fetches.
/// Any fetch failure degrades to no relation.
async fn resolve_relation(target_id: &str) -> FriendState {
    let friends = match api::fetch_friends().await {
        Ok(friends) => friends,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch friends: {}", e).into());
            return FriendState::None;
        }
    };

    let requests = match api::fetch_friend_requests().await {
        Ok(requests) => requests,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch friend requests: {}", e).into());
            return FriendState::None;
        }
    };

    resolve_friend_state(target_id, &friends, &requests.incoming, &requests.outgoing)
}

/// Profile header card: avatar, identity, presence and friend actions
#[component]
fn ProfileHeader(
    account: UserProfile,
    #[prop(into)]
    is_self: Signal<bool>,
    friend_state: ReadSignal<FriendState>,
    set_friend_state: WriteSignal<FriendState>,
) -> impl IntoView {
    let member_since = account.member_since
        .and_then(chrono::DateTime::from_timestamp_millis)
        .map(|dt| format!("Member since {}", dt.format("%B %Y")));

    let display_name = account.name.clone().unwrap_or_default();
    let initial = account.username.chars().next().unwrap_or('?')
        .to_uppercase()
        .to_string();

    let target_id = account.id.clone();
    let email = account.email.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex flex-col md:flex-row md:items-center gap-6">
                // Avatar
                {match account.avatar.clone() {
                    Some(url) if !url.is_empty() => view! {
                        <img src=url alt="avatar" class="w-24 h-24 rounded-full object-cover" />
                    }.into_view(),
                    _ => view! {
                        <div class="w-24 h-24 rounded-full bg-gray-700 flex items-center
                                    justify-center text-4xl font-bold text-gray-400">
                            {initial}
                        </div>
                    }.into_view(),
                }}

                // Identity
                <div class="flex-1">
                    <div class="flex items-center gap-3 flex-wrap">
                        <h1 class="text-3xl font-bold">{account.username.clone()}</h1>
                        <PresenceBadge online=account.online playing=account.playing />
                    </div>

                    {(!display_name.is_empty()).then(|| view! {
                        <p class="text-gray-300 mt-1">{display_name.clone()}</p>
                    })}

                    {account.country.clone().filter(|c| !c.is_empty()).map(|country| view! {
                        <p class="text-gray-400 text-sm mt-1">{country}</p>
                    })}

                    {account.bio.clone().filter(|b| !b.is_empty()).map(|bio| view! {
                        <p class="text-gray-300 mt-3">{bio}</p>
                    })}

                    {member_since.map(|text| view! {
                        <p class="text-gray-500 text-xs mt-3">{text}</p>
                    })}
                </div>

                // Actions
                <div>
                    {move || {
                        if is_self.get() {
                            view! {
                                <A
                                    href="/settings"
                                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                                           font-medium transition-colors"
                                >
                                    "Edit profile"
                                </A>
                            }.into_view()
                        } else {
                            view! {
                                <FriendActions
                                    target_id=target_id.clone()
                                    email=email.clone()
                                    friend_state=friend_state
                                    set_friend_state=set_friend_state
                                />
                            }.into_view()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Online / playing indicator
#[component]
fn PresenceBadge(online: bool, playing: bool) -> impl IntoView {
    let (label, class) = if playing {
        ("Playing", "bg-yellow-900 text-yellow-300")
    } else if online {
        ("Online", "bg-green-900 text-green-300")
    } else {
        ("Offline", "bg-gray-700 text-gray-400")
    };

    view! {
        <span class=format!("text-xs px-2 py-1 rounded-full {}", class)>
            {label}
        </span>
    }
}

/// Friend relationship button(s)
///
/// Each action issues one mutating call, then re-resolves the relationship
/// from fresh list fetches. Buttons are disabled while a call is in flight.
#[component]
fn FriendActions(
    target_id: String,
    email: Option<String>,
    friend_state: ReadSignal<FriendState>,
    set_friend_state: WriteSignal<FriendState>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (busy, set_busy) = create_signal(false);

    let target = store_value(target_id);
    let email = store_value(email);

    let state_for_respond = state.clone();
    let respond = move |request_id: String, accept: bool| {
        set_busy.set(true);

        let state_clone = state_for_respond.clone();
        let target_id = target.get_value();
        spawn_local(async move {
            match api::respond_friend_request(&request_id, accept).await {
                Ok(_) => {
                    if accept {
                        state_clone.show_success("Friend request accepted");
                    } else {
                        state_clone.show_success("Friend request declined");
                    }
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_friend_state.set(resolve_relation(&target_id).await);
            set_busy.set(false);
        });
    };

    let state_for_send = state;
    let send = move |_| {
        let Some(recipient) = email.get_value().filter(|e| !e.is_empty()) else {
            state_for_send.show_error("This player cannot receive friend requests");
            return;
        };

        set_busy.set(true);

        let state_clone = state_for_send.clone();
        let target_id = target.get_value();
        spawn_local(async move {
            match api::send_friend_request(&recipient).await {
                Ok(_) => {
                    state_clone.show_success("Friend request sent");
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_friend_state.set(resolve_relation(&target_id).await);
            set_busy.set(false);
        });
    };

    let respond_accept = respond.clone();
    let respond_decline = respond;

    view! {
        {move || {
            match friend_state.get() {
                FriendState::Checking => view! {
                    <button
                        disabled=true
                        class="px-4 py-2 bg-gray-700 text-gray-500 rounded-lg font-medium"
                    >
                        "..."
                    </button>
                }.into_view(),

                FriendState::Friends => view! {
                    <span class="px-4 py-2 bg-green-900 text-green-300 rounded-lg font-medium">
                        "✓ Friends"
                    </span>
                }.into_view(),

                FriendState::Outgoing => view! {
                    <button
                        disabled=true
                        class="px-4 py-2 bg-gray-700 text-gray-400 rounded-lg font-medium"
                    >
                        "Request sent"
                    </button>
                }.into_view(),

                FriendState::Incoming { request_id } => {
                    let accept_id = request_id.clone();
                    let decline_id = request_id;
                    let accept = respond_accept.clone();
                    let decline = respond_decline.clone();

                    view! {
                        <div class="flex space-x-2">
                            <button
                                on:click=move |_| accept(accept_id.clone(), true)
                                disabled=move || busy.get()
                                class="px-4 py-2 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                                       rounded-lg font-medium transition-colors"
                            >
                                "Accept"
                            </button>
                            <button
                                on:click=move |_| decline(decline_id.clone(), false)
                                disabled=move || busy.get()
                                class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                       rounded-lg font-medium transition-colors"
                            >
                                "Decline"
                            </button>
                        </div>
                    }.into_view()
                }

                FriendState::None => {
                    let send = send.clone();
                    view! {
                        <button
                            on:click=send
                            disabled=move || busy.get()
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            "Add Friend"
                        </button>
                    }.into_view()
                }
            }
        }}
    }
}
