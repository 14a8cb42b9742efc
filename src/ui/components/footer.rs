use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "bg-gray-800 text-gray-400 text-sm text-center py-4",
            "Wanted · lost and found board"
        }
    }
}
