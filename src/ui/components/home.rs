use crate::config::use_config;
use crate::token_store::{remove_token, validate_and_store_token};
use crate::ui::{use_app_context, Route};
use dioxus::prelude::*;
use tracing::{info, warn};

/// Landing page: where authorization failures end up. Shows the server
/// configuration and lets the user sign in with an API token.
#[component]
pub fn Home() -> Element {
    let app = use_app_context();
    let config = use_config();
    let mut token_input = use_signal(String::new);
    let mut has_token = use_signal(|| app.http.has_token());
    let mut status = use_signal(|| None::<Result<String, String>>);
    let mut saving = use_signal(|| false);

    let save_token = {
        let app = app.clone();
        move |_: MouseEvent| {
            let token = token_input.read().trim().to_string();
            if token.is_empty() {
                status.set(Some(Err("Enter a token first".to_string())));
                return;
            }
            let app = app.clone();
            spawn(async move {
                saving.set(true);
                let result = validate_and_store_token(
                    &app.config.api_base_url,
                    token.clone(),
                    app.config.request_timeout,
                )
                .await;
                match result {
                    Ok(()) => {
                        info!("Signed in with new API token");
                        app.http.set_token(Some(token));
                        has_token.set(true);
                        token_input.set(String::new());
                        status.set(Some(Ok("Signed in".to_string())));
                    }
                    Err(e) => {
                        warn!("Could not save API token: {}", e);
                        status.set(Some(Err(e.to_string())));
                    }
                }
                saving.set(false);
            });
        }
    };

    let sign_out = {
        let app = app.clone();
        move |_: MouseEvent| {
            let app = app.clone();
            spawn(async move {
                if let Err(e) = remove_token().await {
                    warn!("Could not remove API token: {}", e);
                }
                app.http.set_token(None);
                has_token.set(false);
                status.set(Some(Ok("Signed out".to_string())));
            });
        }
    };

    rsx! {
        div { class: "max-w-4xl mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Wanted" }

            div { class: "bg-white rounded-lg shadow p-6 mb-6",
                h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Connection" }

                div { class: "space-y-4",
                    div { class: "border-b border-gray-200 pb-3",
                        div { class: "text-sm font-medium text-gray-500 mb-1", "API Server" }
                        div { class: "text-base text-gray-900", "{config.api_base_url}" }
                    }

                    div { class: "border-b border-gray-200 pb-3",
                        div { class: "text-sm font-medium text-gray-500 mb-1", "API Token" }
                        div { class: "text-base text-gray-900 flex items-center gap-2",
                            if has_token() {
                                "Configured"
                                span { class: "text-green-600", "✓" }
                                button {
                                    class: "ml-4 text-sm text-red-600 hover:underline",
                                    onclick: sign_out,
                                    "Sign out"
                                }
                            } else {
                                span { class: "text-gray-400 italic", "Not set" }
                            }
                        }
                    }

                    div { class: "pb-3 flex gap-2",
                        input {
                            r#type: "password",
                            class: "flex-1 p-2 border border-gray-300 rounded-lg",
                            placeholder: "Paste your API token",
                            value: "{token_input}",
                            oninput: move |event: FormEvent| token_input.set(event.value()),
                        }
                        button {
                            class: "bg-blue-500 text-white px-4 py-2 rounded-lg hover:bg-blue-600 disabled:opacity-50",
                            disabled: saving(),
                            onclick: save_token,
                            if saving() {
                                "Checking..."
                            } else {
                                "Sign in"
                            }
                        }
                    }

                    {
                        match status() {
                            Some(Ok(message)) => rsx! {
                                p { class: "text-green-700", "{message}" }
                            },
                            Some(Err(message)) => rsx! {
                                p { class: "text-red-700", "{message}" }
                            },
                            None => rsx! {},
                        }
                    }
                }
            }

            div { class: "flex justify-center space-x-4",
                Link {
                    to: Route::SearchPage {},
                    class: "bg-blue-500 text-white px-6 py-3 rounded-lg hover:bg-blue-600 transition-colors",
                    "Search Posts"
                }
                Link {
                    to: Route::Dashboard {},
                    class: "bg-gray-500 text-white px-6 py-3 rounded-lg hover:bg-gray-600 transition-colors",
                    "Admin Dashboard"
                }
            }
        }
    }
}
