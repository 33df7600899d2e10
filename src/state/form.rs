//! Form editing state types.
//!
//! This module contains the focusable fields of the restaurant form, the
//! option cycling used by its selection fields, and the summary kept for each
//! submitted restaurant.

use crate::restaurant::{CuisineType, FieldKey, RestaurantPayload, SlotField, TextField};

/// Specifying the focused element of the restaurant form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Text(TextField),
    Cuisine,
    Slot { index: usize, field: SlotField },
    AddHours,
    Submit,
}

const SLOT_FIELDS: [SlotField; 3] = [SlotField::Day, SlotField::Opening, SlotField::Closing];

impl FormField {
    /// Return every focusable element in display order.
    ///
    pub fn order(slot_count: usize) -> Vec<FormField> {
        let mut fields = vec![
            FormField::Text(TextField::Name),
            FormField::Text(TextField::Description),
            FormField::Cuisine,
            FormField::Text(TextField::AddressLine1),
            FormField::Text(TextField::AddressLine2),
            FormField::Text(TextField::City),
            FormField::Text(TextField::State),
            FormField::Text(TextField::ZipCode),
            FormField::Text(TextField::CostRating),
            FormField::Text(TextField::Email),
            FormField::Text(TextField::PhoneNumber),
        ];
        for index in 0..slot_count {
            for field in SLOT_FIELDS {
                fields.push(FormField::Slot { index, field });
            }
        }
        fields.push(FormField::AddHours);
        fields.push(FormField::Submit);
        fields
    }

    /// Return the element after this one, wrapping to the first.
    ///
    pub fn next(self, slot_count: usize) -> FormField {
        let order = FormField::order(slot_count);
        match order.iter().position(|f| *f == self) {
            Some(i) => order[(i + 1) % order.len()],
            None => order[0],
        }
    }

    /// Return the element before this one, wrapping to the last.
    ///
    pub fn prev(self, slot_count: usize) -> FormField {
        let order = FormField::order(slot_count);
        match order.iter().position(|f| *f == self) {
            Some(0) | None => order[order.len() - 1],
            Some(i) => order[i - 1],
        }
    }

    /// Return the validation key shown under this element, if any.
    ///
    pub fn error_key(&self) -> Option<FieldKey> {
        match self {
            FormField::Text(text) => text.error_key(),
            FormField::Slot { index, field } => Some(FieldKey::slot(*index, *field)),
            FormField::Cuisine | FormField::AddHours | FormField::Submit => None,
        }
    }

    /// Return the element that displays the message for the key.
    ///
    pub fn from_error_key(key: FieldKey) -> FormField {
        match key {
            FieldKey::Name => FormField::Text(TextField::Name),
            FieldKey::Description => FormField::Text(TextField::Description),
            FieldKey::AddressLine1 => FormField::Text(TextField::AddressLine1),
            FieldKey::City => FormField::Text(TextField::City),
            FieldKey::State => FormField::Text(TextField::State),
            FieldKey::ZipCode => FormField::Text(TextField::ZipCode),
            FieldKey::CostRating => FormField::Text(TextField::CostRating),
            FieldKey::Email => FormField::Text(TextField::Email),
            FieldKey::PhoneNumber => FormField::Text(TextField::PhoneNumber),
            FieldKey::Slot { index, field } => FormField::Slot { index, field },
        }
    }

    /// Whether the element picks from a fixed list instead of taking text.
    ///
    pub fn is_selection(&self) -> bool {
        matches!(self, FormField::Cuisine | FormField::Slot { .. })
    }
}

/// Step through options that always have a value.
///
pub fn cycle_required<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let position = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    options[next]
}

/// Step through options preceded by an unselected (None) position.
///
pub fn cycle_optional<T: Copy + PartialEq>(
    options: &[T],
    current: Option<T>,
    forward: bool,
) -> Option<T> {
    // Position 0 is None, position i + 1 is options[i].
    let len = options.len() + 1;
    let position = current
        .and_then(|value| options.iter().position(|o| *o == value))
        .map(|i| i + 1)
        .unwrap_or(0);
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    next.checked_sub(1).map(|i| options[i])
}

/// Summary of a restaurant submitted during this session.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SubmittedRestaurant {
    pub restaurant_id: i64,
    pub name: String,
    pub cuisine_type: CuisineType,
    pub city: String,
    pub created_at: String,
}

impl From<&RestaurantPayload> for SubmittedRestaurant {
    fn from(payload: &RestaurantPayload) -> Self {
        SubmittedRestaurant {
            restaurant_id: payload.restaurant_id,
            name: payload.restaurant.name.clone(),
            cuisine_type: payload.restaurant.cuisine_type,
            city: payload.restaurant.city.clone(),
            created_at: payload.created_at.clone(),
        }
    }
}
