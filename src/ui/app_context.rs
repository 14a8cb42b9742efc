use crate::api::{HttpTransport, Transport};
use crate::config;
use crate::navigation::Navigation;
use crate::search::{SearchState, SearchStore};
use crate::ui::Route;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use std::sync::Arc;
use tracing::warn;

/// Shared services handed to every component
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub http: Arc<HttpTransport>,
}

impl AppContext {
    pub fn transport(&self) -> Arc<dyn Transport> {
        self.http.clone()
    }
}

/// Hook to access the application context from components
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

/// Navigation backed by the router of the component that created it
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    /// Must be called from inside a component
    pub fn current() -> Self {
        Self {
            navigator: navigator(),
        }
    }
}

impl Navigation for RouterNavigator {
    fn navigate(&self, path: &str) {
        let route = route_for(path);
        if let Some(failure) = self.navigator.push(route) {
            warn!("Navigation to '{}' failed: {:?}", path, failure);
        }
    }
}

/// Route for a navigation path; unknown paths go home
pub fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| {
        warn!("Unknown route '{}', going home", path);
        Route::Home {}
    })
}

impl SearchStore for Signal<SearchState> {
    fn snapshot(&self) -> SearchState {
        self.peek().clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::LOGIN_PATH;

    #[test]
    fn test_login_path_resolves_to_home() {
        assert_eq!(route_for(LOGIN_PATH), Route::Home {});
    }

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(route_for("/search"), Route::SearchPage {});
        assert_eq!(route_for("/admin"), Route::Dashboard {});
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(route_for("/does/not/exist"), Route::Home {});
    }
}
