use std::fmt;

/// Which side of the dashboard the operator is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Mode {
    /// Read-only user view; no admin traffic.
    #[default]
    User,
    /// Operator view; admin calls allowed once a key is present.
    Admin,
}

impl Mode {
    /// Label used by the mode switcher.
    pub fn label(self) -> &'static str {
        match self {
            Mode::User => "User",
            Mode::Admin => "Admin",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived gating predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessState {
    /// Current mode.
    pub mode: Mode,
    /// `mode == Admin && api_key != ""`.
    pub can_use_admin: bool,
    /// No auth token stored.
    pub view_locked: bool,
}

impl AccessState {
    /// Recomputes the gate from raw inputs.
    pub fn derive(mode: Mode, api_key: &str, auth_token: Option<&str>) -> Self {
        Self {
            mode,
            can_use_admin: mode == Mode::Admin && !api_key.is_empty(),
            view_locked: auth_token.is_none(),
        }
    }

    /// Top-level view to render.
    pub fn view(&self) -> AdminView {
        if self.view_locked {
            AdminView::Locked
        } else if self.mode == Mode::Admin {
            AdminView::AdminSurface
        } else {
            AdminView::UserModeCard
        }
    }
}

/// Edge of `can_use_admin` between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    /// false → true.
    Opened,
    /// true → false.
    Closed,
    /// No edge.
    Unchanged,
}

impl GateTransition {
    /// Compares two gate values.
    pub fn between(before: bool, after: bool) -> Self {
        match (before, after) {
            (false, true) => GateTransition::Opened,
            (true, false) => GateTransition::Closed,
            _ => GateTransition::Unchanged,
        }
    }
}

/// Which surface the admin page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    /// No auth token: placeholder with login/home links.
    Locked,
    /// Full admin dashboard.
    AdminSurface,
    /// Unlocked but in user mode.
    UserModeCard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_requires_admin_mode_and_key() {
        assert!(!AccessState::derive(Mode::User, "k", Some("t")).can_use_admin);
        assert!(!AccessState::derive(Mode::Admin, "", Some("t")).can_use_admin);
        assert!(AccessState::derive(Mode::Admin, "k", Some("t")).can_use_admin);
    }

    #[test]
    fn view_selection() {
        assert_eq!(AccessState::derive(Mode::Admin, "k", None).view(), AdminView::Locked);
        assert_eq!(AccessState::derive(Mode::Admin, "", Some("t")).view(), AdminView::AdminSurface);
        assert_eq!(AccessState::derive(Mode::User, "k", Some("t")).view(), AdminView::UserModeCard);
    }

    #[test]
    fn transitions() {
        assert_eq!(GateTransition::between(false, true), GateTransition::Opened);
        assert_eq!(GateTransition::between(true, false), GateTransition::Closed);
        assert_eq!(GateTransition::between(true, true), GateTransition::Unchanged);
    }
}
