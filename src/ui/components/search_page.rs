use crate::search::{render_results, QueryController, ResultView, SearchState, NO_RESULTS_LABEL};
use crate::ui::{use_app_context, RouterNavigator};
use dioxus::prelude::*;
use tracing::debug;

/// Search page for wanted posts
#[component]
pub fn SearchPage() -> Element {
    debug!("Component rendering");
    let app = use_app_context();
    let api_base_url = app.config.api_base_url.clone();
    let state = use_signal(SearchState::default);
    let controller = use_hook(|| {
        QueryController::new(app.transport(), RouterNavigator::current(), state)
    });

    // Unfiltered listing on mount. The search is issued from the task so the
    // state signal is not written during render.
    use_hook({
        let controller = controller.clone();
        move || {
            spawn(async move { controller.search().await });
        }
    });

    use_drop({
        let controller = controller.clone();
        move || controller.detach()
    });

    let snapshot = state.read();
    let error_message = snapshot.error_message().map(str::to_string);
    let results: Vec<Element> = render_results(snapshot.results())
        .map(|view| match view {
            ResultView::Card(card) => card.to_element(&api_base_url),
            ResultView::NoResults => rsx! {
                h3 { class: "text-lg sm:text-xl font-semibold mb-2", "{NO_RESULTS_LABEL}" }
            },
        })
        .collect();
    drop(snapshot);

    rsx! {
        div { class: "container mx-auto px-4 sm:px-6 lg:px-8 py-8",
            h2 { class: "text-2xl sm:text-3xl lg:text-4xl font-bold text-center mb-4",
                "Search for Wanted posts"
            }
            div { class: "flex items-center justify-center p-4",
                div { class: "relative",
                    input {
                        r#type: "text",
                        placeholder: "Search...",
                        class: "w-80 px-4 py-2 border rounded-lg shadow-sm focus:ring-2 focus:ring-blue-500 focus:outline-none",
                        oninput: {
                            let controller = controller.clone();
                            move |event: FormEvent| controller.set_term(event.value())
                        },
                        onkeydown: {
                            let controller = controller.clone();
                            move |event: KeyboardEvent| {
                                if event.key() == Key::Enter {
                                    spawn(controller.run_search());
                                }
                            }
                        },
                    }
                    button {
                        class: "absolute right-2 top-2 text-gray-500",
                        onclick: {
                            let controller = controller.clone();
                            move |_| {
                                spawn(controller.run_search());
                            }
                        },
                        "🔍"
                    }
                }
            }
            if let Some(error) = error_message {
                div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4 text-center",
                    "{error}"
                }
            }
            div { class: "flex flex-wrap justify-center", {results.into_iter()} }
        }
    }
}
