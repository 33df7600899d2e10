use super::Frame;
use crate::restaurant::{FieldKey, SlotField, TextField};
use crate::state::{FormField, State};
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Paragraph,
    },
};
use std::ops::Range;

const FIELD_HEIGHT: u16 = 3;
const DESCRIPTION_HEIGHT: u16 = 5;

const TEXT_FIELDS_BEFORE_CUISINE: [TextField; 2] = [TextField::Name, TextField::Description];
const TEXT_FIELDS_AFTER_CUISINE: [TextField; 8] = [
    TextField::AddressLine1,
    TextField::AddressLine2,
    TextField::City,
    TextField::State,
    TextField::ZipCode,
    TextField::CostRating,
    TextField::Email,
    TextField::PhoneNumber,
];

/// One horizontal band of the form.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Text(TextField),
    Cuisine,
    Slot(usize),
    Actions,
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Text(TextField::Description) => DESCRIPTION_HEIGHT,
            _ => FIELD_HEIGHT,
        }
    }

    fn contains(&self, field: FormField) -> bool {
        match (self, field) {
            (Row::Text(row), FormField::Text(focused)) => *row == focused,
            (Row::Cuisine, FormField::Cuisine) => true,
            (Row::Slot(row), FormField::Slot { index, .. }) => *row == index,
            (Row::Actions, FormField::AddHours | FormField::Submit) => true,
            _ => false,
        }
    }
}

fn rows(slot_count: usize) -> Vec<Row> {
    let mut rows: Vec<Row> = TEXT_FIELDS_BEFORE_CUISINE.iter().map(|f| Row::Text(*f)).collect();
    rows.push(Row::Cuisine);
    rows.extend(TEXT_FIELDS_AFTER_CUISINE.iter().map(|f| Row::Text(*f)));
    rows.extend((0..slot_count).map(Row::Slot));
    rows.push(Row::Actions);
    rows
}

/// Return the rows that fit in the available height while keeping the
/// focused row visible, preferring to center it.
///
fn visible_range(heights: &[u16], focused: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let focused = focused.min(heights.len() - 1);
    let mut start = focused;
    let mut used = heights[focused];
    while start > 0 && used + heights[start - 1] <= available / 2 {
        start -= 1;
        used += heights[start];
    }
    let mut end = focused + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }
    start..end
}

/// Render the restaurant intake form.
///
pub fn add_restaurant(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let title = if state.is_submitting() {
        format!(
            "Add Restaurant {} submitting...",
            spinner::frame(state.get_spinner_index())
        )
    } else {
        "Add Restaurant".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, styling::banner_style(&theme)))
        .border_style(styling::normal_block_border_style(&theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let focused = state.get_focused_field();
    let rows = rows(state.get_draft().operating_hours.len());
    let heights: Vec<u16> = rows.iter().map(Row::height).collect();
    let focused_row = rows.iter().position(|r| r.contains(focused)).unwrap_or(0);
    let range = visible_range(&heights, focused_row, inner.height);

    let visible = &rows[range.clone()];
    let mut constraints: Vec<Constraint> = visible
        .iter()
        .map(|row| Constraint::Length(row.height()))
        .collect();
    constraints.push(Constraint::Min(0));
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, area) in visible.iter().zip(areas.iter()) {
        match *row {
            Row::Text(TextField::Description) => {
                render_description(frame, *area, state, &theme, focused)
            }
            Row::Text(field) => render_text_field(frame, *area, state, &theme, field, focused),
            Row::Cuisine => render_cuisine(frame, *area, state, &theme, focused),
            Row::Slot(index) => render_slot(frame, *area, state, &theme, index, focused),
            Row::Actions => render_actions(frame, *area, state, &theme, focused),
        }
    }
}

/// Build a field block, showing the field's validation message along the
/// bottom border.
///
fn field_block<'a>(
    theme: &Theme,
    label: String,
    error: Option<&str>,
    is_focused: bool,
) -> Block<'a> {
    let border_style = if is_focused {
        styling::active_block_border_style(theme)
    } else if error.is_some() {
        styling::error_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let title_style = if is_focused {
        styling::active_block_title_style().fg(theme.border_active.to_color())
    } else {
        styling::normal_text_style(theme)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(label, title_style))
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title(
            Title::from(Span::styled(
                message.to_string(),
                styling::error_text_style(theme),
            ))
            .position(Position::Bottom),
        );
    }
    block
}

fn error_for(state: &State, key: Option<FieldKey>) -> Option<String> {
    key.and_then(|k| state.get_error(&k).map(str::to_string))
}

fn render_text_field(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    theme: &Theme,
    field: TextField,
    focused: FormField,
) {
    let is_focused = focused == FormField::Text(field);
    let error = error_for(state, field.error_key());
    let block = field_block(theme, field.label().to_string(), error.as_deref(), is_focused);

    let value = state.get_draft().text(field);
    let line = if is_focused {
        Line::from(vec![
            Span::styled(value.to_string(), styling::active_text_style(theme)),
            Span::styled("█", styling::active_text_style(theme)),
        ])
    } else if value.is_empty() {
        Line::from(Span::styled(
            field.label().to_string(),
            styling::muted_text_style(theme),
        ))
    } else {
        Line::from(Span::styled(
            value.to_string(),
            styling::normal_text_style(theme),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), size);
}

fn render_description(
    frame: &mut Frame,
    size: Rect,
    state: &mut State,
    theme: &Theme,
    focused: FormField,
) {
    let field = TextField::Description;
    let is_focused = focused == FormField::Text(field);
    let error = error_for(state, field.error_key());
    let block = field_block(theme, field.label().to_string(), error.as_deref(), is_focused);

    let textarea = state.get_description_textarea();
    textarea.set_block(block);
    textarea.set_style(styling::normal_text_style(theme));
    if is_focused {
        textarea.set_cursor_style(styling::highlighted_style(theme));
    } else {
        textarea.set_cursor_style(styling::normal_text_style(theme));
    }
    frame.render_widget(textarea.widget(), size);
}

/// Return the option text, with arrows hinting at cycling when focused.
///
fn selection_line<'a>(theme: &Theme, value: Option<&str>, is_focused: bool) -> Line<'a> {
    let (text, style) = match value {
        Some(value) if is_focused => (format!("◂ {} ▸", value), styling::active_text_style(theme)),
        Some(value) => (value.to_string(), styling::normal_text_style(theme)),
        None if is_focused => ("◂ Select... ▸".to_string(), styling::active_text_style(theme)),
        None => ("Select...".to_string(), styling::muted_text_style(theme)),
    };
    Line::from(Span::styled(text, style))
}

fn render_cuisine(frame: &mut Frame, size: Rect, state: &State, theme: &Theme, focused: FormField) {
    let is_focused = focused == FormField::Cuisine;
    let block = field_block(theme, "Cuisine Type".to_string(), None, is_focused);
    let line = selection_line(
        theme,
        Some(state.get_draft().cuisine_type.label()),
        is_focused,
    );
    frame.render_widget(Paragraph::new(line).block(block), size);
}

fn render_slot(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    theme: &Theme,
    index: usize,
    focused: FormField,
) {
    let slot = match state.get_draft().operating_hours.get(index) {
        Some(slot) => slot.clone(),
        None => return,
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(size);

    let opening = slot.opening_time.map(|t| t.to_string());
    let closing = slot.closing_time.map(|t| t.to_string());
    let cells = [
        (
            SlotField::Day,
            format!("Hours #{} Day", index + 1),
            slot.day_of_week.map(|d| d.label().to_string()),
        ),
        (SlotField::Opening, "Opening Time".to_string(), opening),
        (SlotField::Closing, "Closing Time".to_string(), closing),
    ];

    for ((field, label, value), area) in cells.into_iter().zip(columns.iter()) {
        let is_focused = focused == FormField::Slot { index, field };
        let error = state.get_error(&FieldKey::slot(index, field));
        let block = field_block(theme, label, error, is_focused);
        let line = selection_line(theme, value.as_deref(), is_focused);
        frame.render_widget(Paragraph::new(line).block(block), *area);
    }
}

fn render_actions(frame: &mut Frame, size: Rect, state: &State, theme: &Theme, focused: FormField) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);

    let submit_label = if state.is_submitting() {
        format!("{} Submitting", spinner::frame(state.get_spinner_index()))
    } else {
        "Submit".to_string()
    };
    let buttons = [
        (FormField::AddHours, "+ Add Hours".to_string()),
        (FormField::Submit, submit_label),
    ];

    for ((field, label), area) in buttons.into_iter().zip(columns.iter()) {
        let is_focused = focused == field;
        let (style, border_style) = if is_focused {
            (
                styling::highlighted_style(theme),
                styling::active_block_border_style(theme),
            )
        } else {
            (
                styling::normal_text_style(theme),
                styling::normal_block_border_style(theme),
            )
        };
        let button = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(button, *area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_form_order() {
        let rows = rows(2);
        assert_eq!(rows.len(), 11 + 2 + 1);
        assert_eq!(rows[0], Row::Text(TextField::Name));
        assert_eq!(rows[2], Row::Cuisine);
        assert_eq!(rows[11], Row::Slot(0));
        assert_eq!(rows[13], Row::Actions);
    }

    #[test]
    fn test_every_form_field_has_a_row() {
        let rows = rows(3);
        for field in FormField::order(3) {
            assert!(
                rows.iter().any(|r| r.contains(field)),
                "no row for {:?}",
                field
            );
        }
    }

    #[test]
    fn test_visible_range_fits_everything() {
        let heights = [3, 5, 3, 3];
        assert_eq!(visible_range(&heights, 2, 100), 0..4);
    }

    #[test]
    fn test_visible_range_scrolls_to_focus() {
        let heights = [3; 10];
        let range = visible_range(&heights, 9, 12);
        assert_eq!(range, 6..10);

        let range = visible_range(&heights, 0, 12);
        assert_eq!(range, 0..4);

        let range = visible_range(&heights, 5, 12);
        assert!(range.contains(&5));
        assert_eq!(range.len(), 4);
    }

    #[test]
    fn test_visible_range_keeps_focus_when_too_small() {
        let heights = [3, 5, 3];
        assert_eq!(visible_range(&heights, 1, 2), 1..2);
        assert_eq!(visible_range(&[], 0, 10), 0..0);
    }
}
