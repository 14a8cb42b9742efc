/// Path of the sign-in landing page that authorization failures redirect to
pub const LOGIN_PATH: &str = "/";

/// Capability to move the UI to another route.
///
/// Error handling issues navigation through this trait instead of touching
/// any global location, so redirects can be observed in tests.
pub trait Navigation {
    fn navigate(&self, path: &str);
}

impl<N: Navigation + ?Sized> Navigation for &N {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

impl<N: Navigation + ?Sized> Navigation for std::rc::Rc<N> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

impl<N: Navigation + ?Sized> Navigation for std::sync::Arc<N> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}
