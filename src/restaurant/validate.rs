//! Draft validation.
//!
//! `validate` inspects a draft and returns an `ErrorMap` keyed by the field
//! each message belongs to. It never mutates the draft and returns the same
//! map for the same draft.

use super::{DayOfWeek, OperatingHoursSlot, RestaurantDraft, TimeOfDay};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Specifying the part of an operating hours slot an error belongs to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotField {
    Day,
    Opening,
    Closing,
}

impl SlotField {
    fn letter(&self) -> char {
        match self {
            SlotField::Day => 'd',
            SlotField::Opening => 'o',
            SlotField::Closing => 'c',
        }
    }
}

/// Specifying the field a validation message is attached to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Description,
    AddressLine1,
    City,
    State,
    ZipCode,
    CostRating,
    Email,
    PhoneNumber,
    Slot { index: usize, field: SlotField },
}

impl FieldKey {
    pub fn slot(index: usize, field: SlotField) -> Self {
        FieldKey::Slot { index, field }
    }
}

/// Renders the dotted field path, e.g. `email` or `oh.2.c`.
///
impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Name => f.write_str("name"),
            FieldKey::Description => f.write_str("description"),
            FieldKey::AddressLine1 => f.write_str("address_line1"),
            FieldKey::City => f.write_str("city"),
            FieldKey::State => f.write_str("state"),
            FieldKey::ZipCode => f.write_str("zip_code"),
            FieldKey::CostRating => f.write_str("cost_rating"),
            FieldKey::Email => f.write_str("email"),
            FieldKey::PhoneNumber => f.write_str("phone_number"),
            FieldKey::Slot { index, field } => write!(f, "oh.{}.{}", index, field.letter()),
        }
    }
}

/// Field-keyed validation messages. A missing key means the field is valid.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldKey, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a field, replacing any earlier message.
    ///
    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.errors.insert(key, message.into());
    }

    pub fn get(&self, key: &FieldKey) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &FieldKey) -> bool {
        self.errors.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &str)> {
        self.errors.iter().map(|(key, message)| (key, message.as_str()))
    }

    /// Drop the message for a field after the user edits it.
    ///
    pub fn clear_field(&mut self, key: &FieldKey) -> Option<String> {
        self.errors.remove(key)
    }

    /// Drop every message of a removed slot and shift messages of the slots
    /// after it down by one index, so they stay attached to the same slot.
    ///
    pub fn remove_slot(&mut self, removed: usize) {
        let errors = std::mem::take(&mut self.errors);
        self.errors = errors
            .into_iter()
            .filter_map(|(key, message)| match key {
                FieldKey::Slot { index, .. } if index == removed => None,
                FieldKey::Slot { index, field } if index > removed => {
                    Some((FieldKey::slot(index - 1, field), message))
                }
                key => Some((key, message)),
            })
            .collect();
    }
}

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("validation pattern must compile"))
}

fn cost_rating_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    pattern(&PATTERN, r"^[1-5]$")
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    pattern(&PATTERN, r"\S+@\S+\.\S+")
}

fn phone_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    pattern(&PATTERN, r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$")
}

/// Validate the draft and return every problem found, keyed by field.
///
pub fn validate(draft: &RestaurantDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check_required_fields(draft, &mut errors);
    check_cost_rating(&draft.cost_rating, &mut errors);
    check_email(&draft.email, &mut errors);
    check_phone_number(&draft.phone_number, &mut errors);
    check_slots(&draft.operating_hours, &mut errors);
    check_overlaps(&draft.operating_hours, &mut errors);
    errors
}

/// Return true if the draft has no validation errors.
///
pub fn is_valid(draft: &RestaurantDraft) -> bool {
    validate(draft).is_empty()
}

fn check_required_fields(draft: &RestaurantDraft, errors: &mut ErrorMap) {
    let required = [
        (&draft.name, FieldKey::Name, "Restaurant name is required."),
        (&draft.description, FieldKey::Description, "Description is required."),
        (&draft.address_line1, FieldKey::AddressLine1, "Address Line 1 is required."),
        (&draft.city, FieldKey::City, "City is required."),
        (&draft.state, FieldKey::State, "State is required."),
        (&draft.zip_code, FieldKey::ZipCode, "Zip code is required."),
    ];
    for (value, key, message) in required {
        if value.trim().is_empty() {
            errors.insert(key, message);
        }
    }
}

// Format checks run against the raw value; only the blank check trims.
fn check_cost_rating(value: &str, errors: &mut ErrorMap) {
    if value.trim().is_empty() {
        errors.insert(FieldKey::CostRating, "Cost rating is required.");
    } else if !cost_rating_pattern().is_match(value) {
        errors.insert(FieldKey::CostRating, "Cost rating must be between 1 and 5.");
    }
}

fn check_email(value: &str, errors: &mut ErrorMap) {
    if value.trim().is_empty() {
        errors.insert(FieldKey::Email, "Email is required.");
    } else if !email_pattern().is_match(value) {
        errors.insert(FieldKey::Email, "Invalid email format.");
    }
}

fn check_phone_number(value: &str, errors: &mut ErrorMap) {
    if value.trim().is_empty() {
        errors.insert(FieldKey::PhoneNumber, "Phone number is required.");
    } else if !phone_number_pattern().is_match(value) {
        errors.insert(
            FieldKey::PhoneNumber,
            "Phone number must be in the format 555-123-4567.",
        );
    }
}

fn check_slots(slots: &[OperatingHoursSlot], errors: &mut ErrorMap) {
    for (index, slot) in slots.iter().enumerate() {
        if slot.day_of_week.is_none() {
            errors.insert(FieldKey::slot(index, SlotField::Day), "Day is required.");
        }
        if slot.opening_time.is_none() {
            errors.insert(
                FieldKey::slot(index, SlotField::Opening),
                "Opening time is required.",
            );
        }
        if slot.closing_time.is_none() {
            errors.insert(
                FieldKey::slot(index, SlotField::Closing),
                "Closing time is required.",
            );
        }
        if let (Some(opening), Some(closing)) = (slot.opening_time, slot.closing_time) {
            if opening >= closing {
                errors.insert(
                    FieldKey::slot(index, SlotField::Opening),
                    "Must be before closing time.",
                );
            }
        }
    }
}

// Runs independently of `check_slots`: a complete slot with inverted times
// still takes part in overlap detection.
fn check_overlaps(slots: &[OperatingHoursSlot], errors: &mut ErrorMap) {
    let mut by_day: BTreeMap<DayOfWeek, Vec<(usize, TimeOfDay, TimeOfDay)>> = BTreeMap::new();
    for (index, slot) in slots.iter().enumerate() {
        if let Some((day, opening, closing)) = slot.complete() {
            by_day.entry(day).or_default().push((index, opening, closing));
        }
    }

    for (day, mut ranges) in by_day {
        ranges.sort_by_key(|&(_, opening, _)| opening);
        for pair in ranges.windows(2) {
            let (current, _, current_closing) = pair[0];
            let (next, next_opening, _) = pair[1];
            if current_closing > next_opening {
                errors.insert(
                    FieldKey::slot(current, SlotField::Closing),
                    format!("Overlaps another slot on {}.", day),
                );
                errors.insert(
                    FieldKey::slot(next, SlotField::Opening),
                    format!("Overlaps previous slot on {}.", day),
                );
            }
        }
    }
}
