use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the manager dashboard listing the restaurants submitted this
/// session, newest first.
///
pub fn dashboard(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Manager Dashboard", styling::banner_style(theme)))
        .border_style(styling::normal_block_border_style(theme));

    let submitted = state.get_submitted();
    if submitted.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No restaurants submitted yet. Press n to add one.",
            styling::muted_text_style(theme),
        )))
        .block(block);
        frame.render_widget(hint, size);
        return;
    }

    let items: Vec<ListItem> = submitted
        .iter()
        .rev()
        .map(|restaurant| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16}", restaurant.restaurant_id),
                    styling::muted_text_style(theme),
                ),
                Span::styled(
                    restaurant.name.clone(),
                    styling::active_text_style(theme),
                ),
                Span::styled(
                    format!("  {}  {}", restaurant.cuisine_type.label(), restaurant.city),
                    styling::normal_text_style(theme),
                ),
                Span::styled(
                    format!("  {}", restaurant.created_at),
                    styling::muted_text_style(theme),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .block(block);
    frame.render_widget(list, size);
}
