//! Navigation-related state types.

use std::fmt;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    AddRestaurant,
    ManagerDashboard,
}

impl View {
    /// Return the route name of the view.
    ///
    pub fn route_name(&self) -> &'static str {
        match self {
            View::AddRestaurant => "addRestaurant",
            View::ManagerDashboard => "managerDashboard",
        }
    }

    /// Return the view registered under the route name.
    ///
    pub fn from_route(route: &str) -> Option<View> {
        match route {
            "addRestaurant" => Some(View::AddRestaurant),
            "managerDashboard" => Some(View::ManagerDashboard),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Specifying the outcome a notification reports.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Blocking message shown over the current view until dismissed.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
        }
    }

    pub fn failure(message: &str) -> Self {
        Notification {
            kind: NotificationKind::Failure,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_routes() {
        for view in [View::AddRestaurant, View::ManagerDashboard] {
            assert_eq!(View::from_route(view.route_name()), Some(view));
        }
        assert_eq!(View::from_route("unknown"), None);
        assert_eq!(View::ManagerDashboard.to_string(), "managerDashboard");
    }

    #[test]
    fn test_notification() {
        let notification = Notification::failure("Something went wrong.");
        assert_eq!(notification.kind, NotificationKind::Failure);
        assert_eq!(notification.message, "Something went wrong.");
        assert_eq!(Notification::success("ok").kind, NotificationKind::Success);
    }
}
