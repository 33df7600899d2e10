use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::restaurant::{
    validate, CuisineType, DayOfWeek, ErrorMap, FieldKey, OperatingHoursSlot, RestaurantDraft,
    RestaurantPayload, SlotField, TextField, TimeOfDay,
};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use chrono::{DateTime, Utc};
use log::*;
use ratatui::layout::Rect;
use tui_textarea::{CursorMove, TextArea};

use super::error::StateError;
use super::form::{cycle_optional, cycle_required, FormField, SubmittedRestaurant};
use super::navigation::{Notification, View};

pub const SUBMISSION_SUCCEEDED_MESSAGE: &str = "Restaurant submitted successfully!";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Something went wrong while submitting the form.";

const MAX_LOG_ENTRIES: usize = 1000;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    current_view: View,
    draft: RestaurantDraft,
    description_textarea: TextArea<'static>, // Mirrors draft.description
    errors: ErrorMap,
    focused_field: FormField,
    submitting: bool, // Whether a creation request is awaiting the API
    notification: Option<Notification>,
    submitted: Vec<SubmittedRestaurant>, // Restaurants created this session
    log_entries: Vec<String>,
    terminal_size: Rect,
    spinner_index: usize,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            current_view: View::AddRestaurant,
            draft: RestaurantDraft::new(),
            description_textarea: TextArea::default(),
            errors: ErrorMap::new(),
            focused_field: FormField::Text(TextField::Name),
            submitting: false,
            notification: None,
            submitted: vec![],
            log_entries: vec![],
            terminal_size: Rect::default(),
            spinner_index: 0,
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Replace the current view. Leaving or entering the form discards the
    /// draft, so the form always opens blank.
    ///
    pub fn navigate(&mut self, view: View) -> &mut Self {
        info!("Navigating to '{}'...", view.route_name());
        self.reset_form();
        self.current_view = view;
        self
    }

    fn reset_form(&mut self) {
        self.draft = RestaurantDraft::new();
        self.description_textarea = TextArea::default();
        self.errors = ErrorMap::new();
        self.focused_field = FormField::Text(TextField::Name);
        self.submitting = false;
    }

    fn ensure_form_open(&self) -> Result<(), StateError> {
        match self.current_view {
            View::AddRestaurant => Ok(()),
            view => Err(StateError::FormNotOpen(view.route_name().to_string())),
        }
    }

    /// Return the restaurant draft.
    ///
    pub fn get_draft(&self) -> &RestaurantDraft {
        &self.draft
    }

    /// Return the validation errors from the last submit attempt, minus the
    /// fields edited since.
    ///
    pub fn get_errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn get_error(&self, key: &FieldKey) -> Option<&str> {
        self.errors.get(key)
    }

    pub fn get_focused_field(&self) -> FormField {
        self.focused_field
    }

    pub fn set_focused_field(&mut self, field: FormField) -> &mut Self {
        self.focused_field = field;
        self
    }

    /// Move focus to the next form element.
    ///
    pub fn focus_next(&mut self) -> &mut Self {
        self.focused_field = self.focused_field.next(self.draft.operating_hours.len());
        self
    }

    /// Move focus to the previous form element.
    ///
    pub fn focus_prev(&mut self) -> &mut Self {
        self.focused_field = self.focused_field.prev(self.draft.operating_hours.len());
        self
    }

    /// Replace a text field's value.
    ///
    pub fn set_text(&mut self, field: TextField, value: &str) -> &mut Self {
        if field == TextField::Description {
            let mut textarea = TextArea::new(value.split('\n').map(str::to_string).collect());
            textarea.move_cursor(CursorMove::Bottom);
            textarea.move_cursor(CursorMove::End);
            self.description_textarea = textarea;
        }
        *self.draft.text_mut(field) = value.to_string();
        self.clear_text_error(field);
        self
    }

    /// Type a character into the focused text field.
    ///
    pub fn input_char(&mut self, c: char) -> &mut Self {
        if let FormField::Text(field) = self.focused_field {
            if field == TextField::Description {
                self.description_textarea.insert_char(c);
                self.sync_description();
            } else {
                self.draft.text_mut(field).push(c);
            }
            self.clear_text_error(field);
        }
        self
    }

    /// Start a new line in the description.
    ///
    pub fn insert_newline(&mut self) -> &mut Self {
        if self.focused_field == FormField::Text(TextField::Description) {
            self.description_textarea.insert_newline();
            self.sync_description();
            self.clear_text_error(TextField::Description);
        }
        self
    }

    /// Delete the character before the cursor in the focused text field.
    ///
    pub fn backspace(&mut self) -> &mut Self {
        if let FormField::Text(field) = self.focused_field {
            if field == TextField::Description {
                self.description_textarea.delete_char();
                self.sync_description();
            } else {
                self.draft.text_mut(field).pop();
            }
            self.clear_text_error(field);
        }
        self
    }

    fn sync_description(&mut self) {
        self.draft.description = self.description_textarea.lines().join("\n");
    }

    fn clear_text_error(&mut self, field: TextField) {
        if let Some(key) = field.error_key() {
            self.errors.clear_field(&key);
        }
    }

    /// Return the description editor for rendering.
    ///
    pub fn get_description_textarea(&mut self) -> &mut TextArea<'static> {
        &mut self.description_textarea
    }

    pub fn set_cuisine(&mut self, cuisine: CuisineType) -> &mut Self {
        self.draft.cuisine_type = cuisine;
        self
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut OperatingHoursSlot, StateError> {
        self.draft
            .operating_hours
            .get_mut(index)
            .ok_or(StateError::SlotNotFound { index })
    }

    pub fn set_slot_day(&mut self, index: usize, day: Option<DayOfWeek>) -> Result<(), StateError> {
        self.slot_mut(index)?.day_of_week = day;
        self.errors.clear_field(&FieldKey::slot(index, SlotField::Day));
        Ok(())
    }

    pub fn set_slot_opening(
        &mut self,
        index: usize,
        time: Option<TimeOfDay>,
    ) -> Result<(), StateError> {
        self.slot_mut(index)?.opening_time = time;
        self.errors.clear_field(&FieldKey::slot(index, SlotField::Opening));
        Ok(())
    }

    pub fn set_slot_closing(
        &mut self,
        index: usize,
        time: Option<TimeOfDay>,
    ) -> Result<(), StateError> {
        self.slot_mut(index)?.closing_time = time;
        self.errors.clear_field(&FieldKey::slot(index, SlotField::Closing));
        Ok(())
    }

    /// Step the focused selection field to its next or previous option.
    ///
    pub fn cycle_selection(&mut self, forward: bool) -> Result<(), StateError> {
        match self.focused_field {
            FormField::Cuisine => {
                let cuisine = cycle_required(&CuisineType::ALL, self.draft.cuisine_type, forward);
                self.set_cuisine(cuisine);
            }
            FormField::Slot { index, field } => {
                let slot = self
                    .draft
                    .operating_hours
                    .get(index)
                    .cloned()
                    .ok_or(StateError::SlotNotFound { index })?;
                match field {
                    SlotField::Day => {
                        let day = cycle_optional(&DayOfWeek::ALL, slot.day_of_week, forward);
                        self.set_slot_day(index, day)?;
                    }
                    SlotField::Opening => {
                        let time = cycle_optional(&TimeOfDay::options(), slot.opening_time, forward);
                        self.set_slot_opening(index, time)?;
                    }
                    SlotField::Closing => {
                        let time = cycle_optional(&TimeOfDay::options(), slot.closing_time, forward);
                        self.set_slot_closing(index, time)?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Append an empty operating hours slot and focus its day.
    ///
    pub fn add_slot(&mut self) -> Result<(), StateError> {
        self.ensure_form_open()?;
        self.draft.add_slot();
        let index = self.draft.operating_hours.len() - 1;
        self.focused_field = FormField::Slot {
            index,
            field: SlotField::Day,
        };
        debug!("Added operating hours slot {}.", index);
        Ok(())
    }

    /// Remove the slot at the index along with its errors. Errors and focus of
    /// later slots follow them to their new index.
    ///
    pub fn remove_slot(&mut self, index: usize) -> Result<OperatingHoursSlot, StateError> {
        self.ensure_form_open()?;
        if index >= self.draft.operating_hours.len() {
            return Err(StateError::SlotNotFound { index });
        }
        let removed = self
            .draft
            .remove_slot(index)
            .ok_or(StateError::LastSlotRemoval)?;
        self.errors.remove_slot(index);

        if let FormField::Slot {
            index: focused,
            field,
        } = self.focused_field
        {
            let remaining = self.draft.operating_hours.len();
            let focused = if focused > index {
                focused - 1
            } else {
                focused.min(remaining - 1)
            };
            self.focused_field = FormField::Slot {
                index: focused,
                field,
            };
        }
        debug!("Removed operating hours slot {}.", index);
        Ok(removed)
    }

    /// Remove the slot holding focus, if any.
    ///
    pub fn remove_focused_slot(&mut self) -> Result<(), StateError> {
        match self.focused_field {
            FormField::Slot { index, .. } => self.remove_slot(index).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Perform the Enter action of the focused element.
    ///
    pub fn activate_focused_field(&mut self) -> Result<(), StateError> {
        match self.focused_field {
            FormField::Text(TextField::Description) => {
                self.insert_newline();
            }
            FormField::Text(_) => {
                self.focus_next();
            }
            FormField::Cuisine | FormField::Slot { .. } => self.cycle_selection(true)?,
            FormField::AddHours => self.add_slot()?,
            FormField::Submit => self.submit()?,
        }
        Ok(())
    }

    /// Validate the draft and, if it is valid, mark a submission in flight and
    /// return the payload stamped with the submission instant. An invalid
    /// draft stores its errors, focuses the first one, and returns None.
    ///
    pub fn prepare_submission(
        &mut self,
        submitted_at: DateTime<Utc>,
    ) -> Result<Option<RestaurantPayload>, StateError> {
        self.ensure_form_open()?;
        if self.submitting {
            return Err(StateError::SubmissionInFlight);
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            let keys: Vec<String> = errors.iter().map(|(key, _)| key.to_string()).collect();
            warn!(
                "Restaurant form has {} validation error(s): {}",
                errors.len(),
                keys.join(", ")
            );
            if let Some((key, _)) = errors.iter().next() {
                self.focused_field = FormField::from_error_key(*key);
            }
            self.errors = errors;
            return Ok(None);
        }

        self.errors = errors;
        self.submitting = true;
        Ok(Some(RestaurantPayload::new(self.draft.clone(), submitted_at)))
    }

    /// Validate the draft and hand a valid payload to the network thread.
    ///
    pub fn submit(&mut self) -> Result<(), StateError> {
        if let Some(payload) = self.prepare_submission(Utc::now())? {
            info!(
                "Submitting restaurant '{}' (ID {})...",
                payload.restaurant.name, payload.restaurant_id
            );
            if !self.dispatch(NetworkEvent::CreateRestaurant { payload }) {
                self.fail_submission();
            }
        }
        Ok(())
    }

    /// Record the created restaurant and move to the dashboard.
    ///
    pub fn complete_submission(&mut self, payload: &RestaurantPayload) -> &mut Self {
        self.submitted.push(SubmittedRestaurant::from(payload));
        self.navigate(View::ManagerDashboard);
        self.notification = Some(Notification::success(SUBMISSION_SUCCEEDED_MESSAGE));
        self
    }

    /// Report a failed submission. The draft is left as it was for a retry.
    ///
    pub fn fail_submission(&mut self) -> &mut Self {
        self.submitting = false;
        self.notification = Some(Notification::failure(SUBMISSION_FAILED_MESSAGE));
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn get_notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) -> &mut Self {
        self.notification = None;
        self
    }

    /// Return the restaurants created during this session, oldest first.
    ///
    pub fn get_submitted(&self) -> &[SubmittedRestaurant] {
        &self.submitted
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Advance the spinner index, wrapping after the last frame.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Add a log entry, keeping only the most recent entries.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            let excess = self.log_entries.len() - MAX_LOG_ENTRIES;
            self.log_entries.drain(..excess);
        }
    }

    pub fn get_log_entries(&self) -> &[String] {
        &self.log_entries
    }

    /// Dispatches an asynchronous network event. Returns false if the event
    /// could not be handed to the network thread.
    ///
    pub fn dispatch(&self, event: NetworkEvent) -> bool {
        match &self.net_sender {
            Some(net_sender) => match net_sender.send(event) {
                Ok(()) => true,
                Err(err) => {
                    error!("Received error from network dispatch: {}", err);
                    false
                }
            },
            None => {
                error!("No network thread to dispatch to.");
                false
            }
        }
    }
}
