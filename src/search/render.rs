use crate::api::{Post, PostStatus, Reward};

pub const NO_RESULTS_LABEL: &str = "No Posts Found";

/// Display data for a single post card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostCard<'a> {
    pub id: u64,
    pub picture_name: Option<&'a str>,
    pub category: &'a str,
    pub title: &'a str,
    pub reward: Option<&'a Reward>,
    pub status: &'a PostStatus,
}

impl<'a> From<&'a Post> for PostCard<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: post.id,
            picture_name: post.picture_name.as_deref(),
            category: &post.category,
            title: &post.title,
            reward: post.reward.as_ref(),
            status: &post.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a> {
    Card(PostCard<'a>),
    NoResults,
}

/// Project search results into what the page shows: one card per post in
/// order, or a single "no results" entry when there are none.
pub fn render_results(posts: &[Post]) -> impl Iterator<Item = ResultView<'_>> + '_ {
    let empty = posts.is_empty().then_some(ResultView::NoResults);
    posts
        .iter()
        .map(|post| ResultView::Card(PostCard::from(post)))
        .chain(empty)
}
