use crate::ui::Route;
use dioxus::prelude::*;
use tracing::debug;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}
