use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::spinner;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const FORM_CONTROLS: &str = " Tab/↓: next, Shift+Tab/↑: previous, ←/→: change option, Enter: select, Ctrl+A: add hours, Ctrl+D: remove hours, Ctrl+S: submit, Ctrl+C: quit";
const DASHBOARD_CONTROLS: &str = " n: new restaurant, q: quit";
const NOTIFICATION_CONTROLS: &str = " Enter/Esc: dismiss";

/// Return the mode label and controls shown for the current state.
///
fn controls(state: &State) -> (&'static str, &'static str) {
    let mode = match state.current_view() {
        View::AddRestaurant => "FORM:",
        View::ManagerDashboard => "DASHBOARD:",
    };
    if state.get_notification().is_some() {
        (mode, NOTIFICATION_CONTROLS)
    } else {
        match state.current_view() {
            View::AddRestaurant => (mode, FORM_CONTROLS),
            View::ManagerDashboard => (mode, DASHBOARD_CONTROLS),
        }
    }
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let (mode, controls_text) = controls(state);
    let mode_bg = match state.current_view() {
        View::AddRestaurant => theme.footer_form.to_color(),
        View::ManagerDashboard => theme.footer_dashboard.to_color(),
    };

    let controls_content = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.background.to_color())
                .bg(mode_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls_text, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    // Show submission progress while a request is in flight, otherwise show version
    let right_content = if state.is_submitting() {
        Line::from(vec![Span::styled(
            format!("{} Submitting ", spinner::frame(state.get_spinner_index())),
            Style::default()
                .fg(theme.info.to_color())
                .add_modifier(Modifier::BOLD),
        )])
    } else {
        Line::from(vec![Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.primary.to_color()),
        )])
    };

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
