//! Navigator Port - route changes after a flow completes.

/// Port for moving the user to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}
