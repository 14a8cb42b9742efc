mod app;
mod dashboard;
mod footer;
mod home;
mod navbar;
mod post_card;
mod search_page;

pub use app::App;
pub use dashboard::Dashboard;
pub use footer::Footer;
pub use home::Home;
pub use navbar::Navbar;
pub use post_card::{picture_url, PostCardView};
pub use search_page::SearchPage;
