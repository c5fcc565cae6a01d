//! The signed-in viewer, passed to every view as a Yew property.
//!
//! The role is parsed once when the session is built; views never read the raw
//! profile claim.

use crate::routing::{self, NavLink, Role, RoleActions, Route};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user_id: Option<String>,
    role: Option<Role>,
}

impl Session {
    /// Builds a session from the identity profile. An unknown claim is treated
    /// as no claim at all.
    pub fn from_profile(user_id: Option<String>, role_claim: Option<&str>) -> Self {
        Self {
            user_id: user_id.filter(|id| !id.trim().is_empty()),
            role: role_claim.and_then(|claim| claim.parse().ok()),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Returns `true` when the role actually changed. Setting the same role
    /// twice is a no-op.
    pub fn set_role(&mut self, role: Role) -> bool {
        if self.role == Some(role) {
            return false;
        }
        self.role = Some(role);
        true
    }

    /// Drops the role claim so the viewer is a student again. Returns `true`
    /// when there was a claim to drop.
    pub fn clear_role(&mut self) -> bool {
        self.role.take().is_some()
    }

    pub fn home(&self) -> Route {
        routing::home_destination(self.role)
    }

    pub fn nav_links(&self) -> &'static [NavLink] {
        routing::nav_links(self.role)
    }

    pub fn actions(&self) -> RoleActions {
        routing::permitted_actions(self.role)
    }

    pub fn can_access(&self, route: Route) -> bool {
        routing::can_access(self.role, route)
    }

    /// The route to actually render for `requested`: a signed-in admin landing
    /// on `/` is sent to their dashboard, and a guarded route the viewer may
    /// not open falls back to their home.
    pub fn resolve(&self, requested: Route) -> Route {
        match requested {
            Route::Home => self.home(),
            route if self.can_access(route) => route,
            _ => self.home(),
        }
    }
}
