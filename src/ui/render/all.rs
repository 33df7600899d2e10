use super::{add_restaurant, dashboard, footer, log, notification, Frame};
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state. The notification, if any, is
/// drawn last so it covers the view beneath it.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(LOG_HEIGHT),
            Constraint::Length(1),
        ])
        .split(size);

    match state.current_view() {
        View::AddRestaurant => add_restaurant(frame, rows[0], state),
        View::ManagerDashboard => dashboard(frame, rows[0], state),
    }
    log(frame, rows[1], state);
    footer(frame, rows[2], state);

    if state.get_notification().is_some() {
        notification(frame, size, state);
    }
}
