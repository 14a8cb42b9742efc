use crate::api::Post;

/// How responses from overlapping searches are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrder {
    /// Whichever response resolves last wins, regardless of when it was issued
    #[default]
    LastResolved,
    /// A response is dropped once a newer request's response has been applied
    LatestIssued,
}

/// Identifies one issued search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub id: u64,
    pub term: String,
}

impl SearchTicket {
    /// API path for this request. An empty term lists every active post.
    pub fn path(&self) -> String {
        format!("/api/search/{}", urlencoding::encode(&self.term))
    }
}

/// Result of one search request after the error handler has run
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<Post>),
    /// The request failed; carries the text to show, if any
    Failed(Option<String>),
}

/// State owned by the search page
///
/// Only the transitions below mutate it. A successful response replaces the
/// results and clears the error; a failure keeps the previous results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    term: String,
    results: Vec<Post>,
    error_message: String,
    next_ticket: u64,
    last_applied: Option<u64>,
}

impl SearchState {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn results(&self) -> &[Post] {
        &self.results
    }

    pub fn error_message(&self) -> Option<&str> {
        if self.error_message.is_empty() {
            None
        } else {
            Some(&self.error_message)
        }
    }

    /// Ticket of the most recently applied response
    pub fn last_applied(&self) -> Option<u64> {
        self.last_applied
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Start a request for the current term
    pub fn issue(&mut self) -> SearchTicket {
        let id = self.next_ticket;
        self.next_ticket += 1;
        SearchTicket {
            id,
            term: self.term.clone(),
        }
    }

    /// Apply a resolved request. Returns false when the policy drops it.
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        outcome: SearchOutcome,
        order: ResponseOrder,
    ) -> bool {
        if order == ResponseOrder::LatestIssued
            && self.last_applied.is_some_and(|applied| applied > ticket.id)
        {
            return false;
        }

        match outcome {
            SearchOutcome::Found(posts) => {
                self.results = posts;
                self.error_message.clear();
            }
            SearchOutcome::Failed(Some(message)) => self.error_message = message,
            SearchOutcome::Failed(None) => {}
        }
        self.last_applied = Some(ticket.id);
        true
    }
}
