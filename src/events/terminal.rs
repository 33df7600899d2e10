use crate::state::{State, StateError, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(state, event)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, event: KeyEvent) -> bool {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = event
    {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    if state.get_notification().is_some() {
        if matches!(event.code, KeyCode::Enter | KeyCode::Esc) {
            debug!("Processing dismiss notification event '{:?}'...", event);
            state.dismiss_notification();
        }
        return true;
    }

    match state.current_view() {
        View::ManagerDashboard => handle_dashboard_key(state, event),
        View::AddRestaurant => {
            if let Err(err) = handle_form_key(state, event) {
                warn!("Ignoring terminal event '{:?}': {}", event.code, err);
            }
            true
        }
    }
}

fn handle_dashboard_key(state: &mut State, event: KeyEvent) -> bool {
    match event {
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            debug!("Processing new restaurant event '{:?}'...", event);
            state.navigate(View::AddRestaurant);
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    true
}

fn handle_form_key(state: &mut State, event: KeyEvent) -> Result<(), StateError> {
    match event {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing submit event '{:?}'...", event);
            state.submit()?;
        }
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing add hours event '{:?}'...", event);
            state.add_slot()?;
        }
        KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing remove hours event '{:?}'...", event);
            state.remove_focused_slot()?;
        }
        KeyEvent {
            code: KeyCode::Tab | KeyCode::Down,
            ..
        } => {
            state.focus_next();
        }
        KeyEvent {
            code: KeyCode::BackTab | KeyCode::Up,
            ..
        } => {
            state.focus_prev();
        }
        KeyEvent {
            code: KeyCode::Right,
            ..
        } => state.cycle_selection(true)?,
        KeyEvent {
            code: KeyCode::Left, ..
        } => state.cycle_selection(false)?,
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => state.activate_focused_field()?,
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => {
            state.backspace();
        }
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } => {
            let focused = state.get_focused_field();
            if focused.is_selection() {
                debug!("Skipping processing of terminal event '{:?}'...", event);
            } else {
                state.input_char(c);
            }
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::{DayOfWeek, SlotField, TextField};
    use crate::state::{FormField, Notification, SUBMISSION_FAILED_MESSAGE};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            let modifiers = if c.is_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            assert!(handle_key(state, KeyEvent::new(KeyCode::Char(c), modifiers)));
        }
    }

    #[test]
    fn ctrl_c_exits_from_any_view() {
        let mut state = State::default();
        assert!(!handle_key(&mut state, ctrl('c')));
        state.navigate(View::ManagerDashboard);
        assert!(!handle_key(&mut state, ctrl('c')));
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut state = State::default();
        type_text(&mut state, "Pho Q");
        handle_key(&mut state, key(KeyCode::Backspace));
        assert_eq!(state.get_draft().name, "Pho ");

        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(
            state.get_focused_field(),
            FormField::Text(TextField::Description)
        );
        type_text(&mut state, "Broth");
        handle_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "Noodles");
        assert_eq!(state.get_draft().description, "Broth\nNoodles");
    }

    #[test]
    fn q_is_text_on_form() {
        let mut state = State::default();
        assert!(handle_key(&mut state, key(KeyCode::Char('q'))));
        assert_eq!(state.get_draft().name, "q");
    }

    #[test]
    fn arrows_cycle_selection_fields() {
        let mut state = State::default();
        state.set_focused_field(FormField::Slot {
            index: 0,
            field: SlotField::Day,
        });
        handle_key(&mut state, key(KeyCode::Right));
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(
            state.get_draft().operating_hours[0].day_of_week,
            Some(DayOfWeek::Tuesday)
        );
        handle_key(&mut state, key(KeyCode::Left));
        assert_eq!(
            state.get_draft().operating_hours[0].day_of_week,
            Some(DayOfWeek::Monday)
        );
        type_text(&mut state, "x");
        assert_eq!(
            state.get_draft().operating_hours[0].day_of_week,
            Some(DayOfWeek::Monday)
        );
    }

    #[test]
    fn typing_on_cuisine_is_ignored() {
        let mut state = State::default();
        state.set_focused_field(FormField::Cuisine);
        type_text(&mut state, "Thai");
        assert_eq!(*state.get_draft(), crate::restaurant::RestaurantDraft::new());
        assert_eq!(state.get_focused_field(), FormField::Cuisine);
    }

    #[test]
    fn backtab_wraps_to_submit() {
        let mut state = State::default();
        handle_key(&mut state, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(state.get_focused_field(), FormField::Submit);
        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.get_focused_field(), FormField::Text(TextField::Name));
    }

    #[test]
    fn add_and_remove_hours_rows() {
        let mut state = State::default();
        handle_key(&mut state, ctrl('a'));
        assert_eq!(state.get_draft().operating_hours.len(), 2);
        handle_key(&mut state, ctrl('d'));
        assert_eq!(state.get_draft().operating_hours.len(), 1);
        assert!(handle_key(&mut state, ctrl('d')));
        assert_eq!(state.get_draft().operating_hours.len(), 1);
    }

    #[test]
    fn submit_invalid_form_shows_errors() {
        let mut state = State::default();
        handle_key(&mut state, ctrl('s'));
        assert!(!state.get_errors().is_empty());
        assert_eq!(state.current_view(), View::AddRestaurant);
        assert!(!state.is_submitting());
    }

    #[test]
    fn notification_blocks_input_until_dismissed() {
        let mut state = State::default();
        state.fail_submission();
        type_text(&mut state, "abc");
        assert_eq!(state.get_draft().name, "");
        assert_eq!(
            state.get_notification(),
            Some(&Notification::failure(SUBMISSION_FAILED_MESSAGE))
        );
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(state.get_notification().is_none());
        type_text(&mut state, "abc");
        assert_eq!(state.get_draft().name, "abc");
    }

    #[test]
    fn dashboard_keys() {
        let mut state = State::default();
        state.navigate(View::ManagerDashboard);
        assert!(handle_key(&mut state, key(KeyCode::Char('x'))));
        assert!(handle_key(&mut state, key(KeyCode::Char('n'))));
        assert_eq!(state.current_view(), View::AddRestaurant);
        state.navigate(View::ManagerDashboard);
        assert!(!handle_key(&mut state, key(KeyCode::Char('q'))));
        assert!(!handle_key(&mut state, key(KeyCode::Esc)));
    }
}
