//! Search page logic: the query controller that owns term, results and
//! error text, and the renderer that turns results into cards.

mod controller;
mod render;
mod state;

pub use controller::{QueryController, SearchStore, SharedSearchState};
pub use render::{render_results, PostCard, ResultView, NO_RESULTS_LABEL};
pub use state::{ResponseOrder, SearchOutcome, SearchState, SearchTicket};
