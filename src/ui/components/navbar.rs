use crate::ui::Route;
use dioxus::prelude::*;

use super::Footer;

/// Layout component with the navigation bar, page content and footer
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "flex flex-col min-h-screen",
            nav {
                id: "navbar",
                class: "bg-gray-800 text-white p-4 flex space-x-6",
                Link { to: Route::Home {}, class: "hover:text-blue-300 transition-colors", "Home" }
                Link {
                    to: Route::SearchPage {},
                    class: "hover:text-blue-300 transition-colors",
                    "Search"
                }
                Link {
                    to: Route::Dashboard {},
                    class: "hover:text-blue-300 transition-colors",
                    "Admin"
                }
            }
            main { class: "flex-grow", Outlet::<Route> {} }
            Footer {}
        }
    }
}
