// web_app/session.rs - Logged-in flag handed to the product manager
//
// The authentication service lives elsewhere; this page only needs to know
// whether the visitor is signed in. The handle is passed in explicitly.

/// Snapshot of the visitor's session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    logged_in: bool,
}

/// What the product manager does when it mounts
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountAction {
    /// Fetch the product list
    Load,
    /// Leave for the given path without fetching
    Redirect(String),
}

impl SessionState {
    pub fn new(logged_in: bool) -> Self {
        Self { logged_in }
    }

    pub fn logged_in() -> Self {
        Self::new(true)
    }

    pub fn anonymous() -> Self {
        Self::new(false)
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Decides whether the page may load or must redirect to `root_path`.
    pub fn mount_action(&self, root_path: &str) -> MountAction {
        if self.logged_in {
            MountAction::Load
        } else {
            tracing::info!("Session not authenticated, redirecting to {}", root_path);
            MountAction::Redirect(root_path.to_string())
        }
    }
}
