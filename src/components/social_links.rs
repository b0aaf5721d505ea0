//! Social Links
//!
//! Platform icon lookup and a substring classifier for inferring the
//! platform from a URL when the label is absent.

use leptos::*;

use crate::state::global::SocialLink;

/// Get the icon URL for a platform label
pub fn platform_icon(label: &str) -> &'static str {
    match label {
        "twitter" => "https://cdn.simpleicons.org/x/9ca3af",
        "twitch" => "https://cdn.simpleicons.org/twitch/9ca3af",
        "youtube" => "https://cdn.simpleicons.org/youtube/9ca3af",
        "instagram" => "https://cdn.simpleicons.org/instagram/9ca3af",
        "facebook" => "https://cdn.simpleicons.org/facebook/9ca3af",
        "discord" => "https://cdn.simpleicons.org/discord/9ca3af",
        "github" => "https://cdn.simpleicons.org/github/9ca3af",
        _ => "https://cdn.simpleicons.org/internetexplorer/9ca3af",
    }
}

/// Infer a platform label from a URL by substring match
pub fn classify_url(url: &str) -> &'static str {
    if url.contains("twitter.com") || url.contains("x.com") {
        "twitter"
    } else if url.contains("twitch.tv") {
        "twitch"
    } else if url.contains("youtube.com") || url.contains("youtu.be") {
        "youtube"
    } else if url.contains("instagram.com") {
        "instagram"
    } else if url.contains("facebook.com") {
        "facebook"
    } else if url.contains("discord.gg") || url.contains("discord.com") {
        "discord"
    } else if url.contains("github.com") {
        "github"
    } else {
        "website"
    }
}

/// Display label for a link: its own label, or one inferred from the URL
pub fn link_label(link: &SocialLink) -> String {
    if link.label.is_empty() {
        classify_url(&link.url).to_string()
    } else {
        link.label.clone()
    }
}

/// Social link list for the profile page
#[component]
pub fn SocialLinks(
    #[prop(into)]
    links: Signal<Vec<SocialLink>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-3">
            {move || {
                links.get()
                    .into_iter()
                    .filter(|link| !link.url.is_empty())
                    .map(|link| {
                        let label = link_label(&link);
                        let icon = platform_icon(&label);
                        view! {
                            <a
                                href=link.url.clone()
                                target="_blank"
                                rel="noopener"
                                class="flex items-center space-x-2 px-3 py-2 bg-gray-700
                                       hover:bg-gray-600 rounded-lg text-sm transition-colors"
                            >
                                <img src=icon alt=label.clone() class="w-4 h-4" />
                                <span class="capitalize">{label}</span>
                            </a>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_platforms() {
        assert_eq!(classify_url("https://twitter.com/magnus"), "twitter");
        assert_eq!(classify_url("https://x.com/magnus"), "twitter");
        assert_eq!(classify_url("https://www.twitch.tv/gmhikaru"), "twitch");
        assert_eq!(classify_url("https://youtube.com/@agadmator"), "youtube");
        assert_eq!(classify_url("https://github.com/ornicar"), "github");
    }

    #[test]
    fn test_classify_unknown_is_website() {
        assert_eq!(classify_url("https://example.org/blog"), "website");
    }

    #[test]
    fn test_label_inferred_when_absent() {
        let link = SocialLink {
            label: String::new(),
            url: "https://twitch.tv/someone".to_string(),
        };
        assert_eq!(link_label(&link), "twitch");

        let labelled = SocialLink {
            label: "twitter".to_string(),
            url: "https://x.com/someone".to_string(),
        };
        assert_eq!(link_label(&labelled), "twitter");
    }
}
