use super::state::{ResponseOrder, SearchOutcome, SearchState};
use crate::api::{fetch_json, handle_error, Method, Post, Transport};
use crate::navigation::Navigation;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Storage for the search page state.
///
/// The UI backs this with a reactive signal so updates re-render the page;
/// tests use [`SharedSearchState`].
pub trait SearchStore: Clone {
    fn snapshot(&self) -> SearchState;
    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R;
}

/// Plain shared store
#[derive(Clone, Default)]
pub struct SharedSearchState {
    inner: Arc<Mutex<SearchState>>,
}

impl SharedSearchState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStore for SharedSearchState {
    fn snapshot(&self) -> SearchState {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }
}

/// Owns the search term, results and error text, and runs searches.
#[derive(Clone)]
pub struct QueryController<S: SearchStore, N: Navigation + Clone> {
    transport: Arc<dyn Transport>,
    navigation: N,
    store: S,
    order: ResponseOrder,
    alive: Arc<AtomicBool>,
}

impl<S: SearchStore, N: Navigation + Clone> QueryController<S, N> {
    pub fn new(transport: Arc<dyn Transport>, navigation: N, store: S) -> Self {
        Self {
            transport,
            navigation,
            store,
            order: ResponseOrder::default(),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn with_response_order(mut self, order: ResponseOrder) -> Self {
        self.order = order;
        self
    }

    pub fn state(&self) -> SearchState {
        self.store.snapshot()
    }

    pub fn set_term(&self, value: impl Into<String>) {
        let value = value.into();
        self.store.update(|state| state.set_term(value));
    }

    /// Fire-and-forget search for the current term.
    ///
    /// The term is captured now; the returned future performs the request and
    /// applies the outcome. Each call issues its own request.
    pub fn run_search(&self) -> impl Future<Output = ()> + 'static
    where
        S: 'static,
        N: 'static,
    {
        let this = self.clone();
        let ticket = self.store.update(|state| state.issue());
        debug!("Issued search #{} for '{}'", ticket.id, ticket.term);

        async move {
            let path = ticket.path();
            let result: Result<Vec<Post>, _> =
                fetch_json(this.transport.as_ref(), Method::Get, &path).await;

            if !this.is_alive() {
                debug!("Discarding search #{}: view was torn down", ticket.id);
                return;
            }

            let outcome = match result {
                Ok(posts) => {
                    debug!("Search #{} returned {} post(s)", ticket.id, posts.len());
                    SearchOutcome::Found(posts)
                }
                Err(e) => SearchOutcome::Failed(handle_error(&e, &this.navigation).message),
            };

            let order = this.order;
            let applied = this
                .store
                .update(|state| state.resolve(&ticket, outcome, order));
            if !applied {
                debug!("Dropped stale response for search #{}", ticket.id);
            }
        }
    }

    /// Like [`run_search`](Self::run_search), but nothing happens until the
    /// future is first polled, including capturing the term.
    pub async fn search(&self)
    where
        S: 'static,
        N: 'static,
    {
        self.run_search().await
    }

    /// Mark the owning view as gone; responses arriving later are ignored.
    pub fn detach(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}
