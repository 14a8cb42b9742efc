use crate::api::{AdminClient, DashboardStats, Post, User};
use crate::ui::{use_app_context, RouterNavigator};
use dioxus::prelude::*;
use tracing::{debug, info};

/// Moderation action requested from one of the dashboard tables
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Moderation {
    BanUser(u64),
    UnbanUser(u64),
    BanPost(u64),
    UnbanPost(u64),
}

/// Admin dashboard page
#[component]
pub fn Dashboard() -> Element {
    debug!("Component rendering");
    let app = use_app_context();
    let client = use_hook(|| AdminClient::new(app.transport(), RouterNavigator::current()));
    let mut stats = use_signal(|| None::<DashboardStats>);
    let mut users = use_signal(Vec::<User>::new);
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut reload = use_signal(|| 0u32);

    use_effect({
        let client = client.clone();
        move || {
            // Re-run whenever a moderation action bumps the counter
            let generation = reload();
            let client = client.clone();
            spawn(async move {
                debug!("Loading dashboard (generation {})", generation);
                loading.set(true);

                let (stats_result, users_result, posts_result) = futures::join!(
                    client.fetch_dashboard_data(),
                    client.fetch_dashboard_users(),
                    client.fetch_dashboard_posts(),
                );

                let mut failures = Vec::new();
                match stats_result {
                    Ok(value) => stats.set(Some(value)),
                    Err(e) if !e.is_forbidden() => failures.push(format!("stats: {}", e)),
                    Err(_) => {}
                }
                match users_result {
                    Ok(value) => users.set(value),
                    Err(e) if !e.is_forbidden() => failures.push(format!("users: {}", e)),
                    Err(_) => {}
                }
                match posts_result {
                    Ok(value) => posts.set(value),
                    Err(e) if !e.is_forbidden() => failures.push(format!("posts: {}", e)),
                    Err(_) => {}
                }

                if failures.is_empty() {
                    error.set(None);
                } else {
                    error.set(Some(format!("Failed to load {}", failures.join("; "))));
                }
                loading.set(false);
            });
        }
    });

    let moderate = use_callback(move |action: Moderation| {
        let client = client.clone();
        spawn(async move {
            let result = match action {
                Moderation::BanUser(id) => client.ban_user(id).await,
                Moderation::UnbanUser(id) => client.unban_user(id).await,
                Moderation::BanPost(id) => client.ban_post(id).await,
                Moderation::UnbanPost(id) => client.unban_post(id).await,
            };
            match result {
                Ok(ack) => {
                    info!("{:?} done: {}", action, ack.message.unwrap_or_default());
                    *reload.write() += 1;
                }
                Err(e) if e.is_forbidden() => {}
                Err(e) => error.set(Some(format!("Action failed: {}", e))),
            }
        });
    });

    rsx! {
        div { class: "container mx-auto p-6",
            h1 { class: "text-3xl font-bold mb-6", "Admin Dashboard" }

            if let Some(err) = error() {
                div { class: "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4",
                    "{err}"
                }
            }

            if loading() && stats().is_none() {
                div { class: "flex justify-center items-center py-12",
                    div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500" }
                    p { class: "ml-4 text-gray-600", "Loading dashboard..." }
                }
            } else {
                if let Some(stats) = stats() {
                    StatsPanel { stats }
                }
                UsersTable { users: users(), on_action: moderate }
                PostsTable { posts: posts(), on_action: moderate }
            }
        }
    }
}

#[component]
fn StatsPanel(stats: DashboardStats) -> Element {
    let tiles = [
        ("Users", stats.total_users),
        ("Banned users", stats.banned_users),
        ("Posts", stats.total_posts),
        ("Active posts", stats.active_posts),
        ("Resolved posts", stats.resolved_posts),
        ("Banned posts", stats.banned_posts),
    ];

    rsx! {
        div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4 mb-8",
            for (label, value) in tiles {
                div { class: "bg-white rounded-lg shadow p-4 text-center",
                    div { class: "text-sm text-gray-500", "{label}" }
                    div { class: "text-2xl font-bold", "{value}" }
                }
            }
        }
    }
}

#[component]
fn UsersTable(users: Vec<User>, on_action: Callback<Moderation>) -> Element {
    rsx! {
        h2 { class: "text-xl font-semibold mb-2", "Users" }
        table { class: "w-full mb-8 bg-white rounded-lg shadow text-left",
            thead {
                tr { class: "bg-gray-50",
                    th { class: "px-4 py-2", "Username" }
                    th { class: "px-4 py-2", "Email" }
                    th { class: "px-4 py-2", "Status" }
                    th { class: "px-4 py-2", "Actions" }
                }
            }
            tbody { class: "divide-y divide-gray-200",
                for user in users {
                    tr { key: "{user.id}",
                        td { class: "px-4 py-2", "{user.username}" }
                        td { class: "px-4 py-2", "{user.email}" }
                        td { class: "px-4 py-2",
                            if user.is_active {
                                "Active"
                            } else {
                                "Banned"
                            }
                        }
                        td { class: "px-4 py-2",
                            if user.is_active {
                                button {
                                    class: "text-red-600 hover:underline",
                                    onclick: move |_| on_action.call(Moderation::BanUser(user.id)),
                                    "Ban"
                                }
                            } else {
                                button {
                                    class: "text-blue-600 hover:underline",
                                    onclick: move |_| on_action.call(Moderation::UnbanUser(user.id)),
                                    "Unban"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PostsTable(posts: Vec<Post>, on_action: Callback<Moderation>) -> Element {
    rsx! {
        h2 { class: "text-xl font-semibold mb-2", "Posts" }
        table { class: "w-full bg-white rounded-lg shadow text-left",
            thead {
                tr { class: "bg-gray-50",
                    th { class: "px-4 py-2", "Title" }
                    th { class: "px-4 py-2", "Category" }
                    th { class: "px-4 py-2", "Status" }
                    th { class: "px-4 py-2", "Actions" }
                }
            }
            tbody { class: "divide-y divide-gray-200",
                for post in posts {
                    tr { key: "{post.id}",
                        td { class: "px-4 py-2", "{post.title}" }
                        td { class: "px-4 py-2", "{post.category}" }
                        td { class: "px-4 py-2", {post.status.label()} }
                        td { class: "px-4 py-2",
                            if post.status == crate::api::PostStatus::Banned {
                                button {
                                    class: "text-blue-600 hover:underline",
                                    onclick: move |_| on_action.call(Moderation::UnbanPost(post.id)),
                                    "Unban"
                                }
                            } else {
                                button {
                                    class: "text-red-600 hover:underline",
                                    onclick: move |_| on_action.call(Moderation::BanPost(post.id)),
                                    "Ban"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
