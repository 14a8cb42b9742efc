use crate::search::PostCard;
use dioxus::prelude::*;

/// Where the server serves uploaded pictures
pub fn picture_url(api_base_url: &str, picture_name: &str) -> String {
    if picture_name.starts_with("http://") || picture_name.starts_with("https://") {
        picture_name.to_string()
    } else {
        format!(
            "{}/media/{}",
            api_base_url.trim_end_matches('/'),
            picture_name.trim_start_matches('/')
        )
    }
}

/// Card for a single post in the search results
#[component]
pub fn PostCardView(
    id: u64,
    title: String,
    category: String,
    #[props(!optional)] picture: Option<String>,
    #[props(!optional)] reward: Option<String>,
    status: String,
) -> Element {
    rsx! {
        div {
            class: "w-64 m-3 bg-white rounded-lg shadow-lg overflow-hidden",
            "data-post-id": "{id}",
            if let Some(src) = picture {
                img { src: "{src}", alt: "{title}", class: "w-full h-40 object-cover" }
            } else {
                div { class: "w-full h-40 bg-gray-200 flex items-center justify-center text-gray-400",
                    "No picture"
                }
            }
            div { class: "p-4",
                p { class: "text-xs uppercase tracking-wide text-gray-500", "{category}" }
                h3 { class: "text-lg font-semibold mb-2", "{title}" }
                div { class: "flex justify-between text-sm",
                    if let Some(reward) = reward {
                        span { class: "text-green-700", "Reward: {reward}" }
                    } else {
                        span { class: "text-gray-400", "No reward" }
                    }
                    span { class: "text-gray-600", "{status}" }
                }
            }
        }
    }
}

impl PostCard<'_> {
    pub fn to_element(&self, api_base_url: &str) -> Element {
        let id = self.id;
        rsx! {
            PostCardView {
                key: "{id}",
                id,
                title: self.title.to_string(),
                category: self.category.to_string(),
                picture: self.picture_name.map(|name| picture_url(api_base_url, name)),
                reward: self.reward.map(|r| r.to_string()),
                status: self.status.label().to_string(),
            }
        }
    }
}
