use crate::client::session::SessionStore;

/// Route category from the gate's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Requires an authenticated session (home, app views).
    Protected,
    /// Only meaningful while logged out (login, register).
    Public,
}

/// What the caller should do with the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
    RedirectToHome,
    Wait,
}

/// Route decision for the current session state.
///
/// While the stored token is still being read, both route kinds hold rather
/// than redirect, so a stored session never flashes through the login view
/// on startup.
pub fn decide(kind: RouteKind, session: &SessionStore) -> GateDecision {
    if session.is_loading() {
        return GateDecision::Wait;
    }
    match (kind, session.is_authenticated()) {
        (RouteKind::Protected, true) => GateDecision::Render,
        (RouteKind::Protected, false) => GateDecision::RedirectToLogin,
        (RouteKind::Public, true) => GateDecision::RedirectToHome,
        (RouteKind::Public, false) => GateDecision::Render,
    }
}
