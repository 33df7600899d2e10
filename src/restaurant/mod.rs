//! Restaurant listing domain module.
//!
//! This module contains everything the intake form knows about a restaurant:
//! - `RestaurantDraft`, the in-progress listing edited by the form
//! - Operating hours types (`DayOfWeek`, `TimeOfDay`, `OperatingHoursSlot`)
//! - The draft validator and its `ErrorMap`
//! - `RestaurantPayload`, the body sent to the creation endpoint

mod hours;
mod payload;
mod validate;

pub use hours::{DayOfWeek, OperatingHoursSlot, ParseTimeError, TimeOfDay};
pub use payload::RestaurantPayload;
pub use validate::{is_valid, validate, ErrorMap, FieldKey, SlotField};

use serde::Serialize;

/// Specifying the cuisine offered by a restaurant.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CuisineType {
    #[default]
    Italian,
    Chinese,
    Indian,
    Japanese,
    Mexican,
    French,
    American,
    Thai,
    Mediterranean,
    Other,
}

impl CuisineType {
    /// Every cuisine in the order the form offers them.
    pub const ALL: [CuisineType; 10] = [
        CuisineType::Italian,
        CuisineType::Chinese,
        CuisineType::Indian,
        CuisineType::Japanese,
        CuisineType::Mexican,
        CuisineType::French,
        CuisineType::American,
        CuisineType::Thai,
        CuisineType::Mediterranean,
        CuisineType::Other,
    ];

    /// Return the wire value of the cuisine.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Italian => "italian",
            CuisineType::Chinese => "chinese",
            CuisineType::Indian => "indian",
            CuisineType::Japanese => "japanese",
            CuisineType::Mexican => "mexican",
            CuisineType::French => "french",
            CuisineType::American => "american",
            CuisineType::Thai => "thai",
            CuisineType::Mediterranean => "mediterranean",
            CuisineType::Other => "other",
        }
    }

    /// Return the display label of the cuisine.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            CuisineType::Italian => "Italian",
            CuisineType::Chinese => "Chinese",
            CuisineType::Indian => "Indian",
            CuisineType::Japanese => "Japanese",
            CuisineType::Mexican => "Mexican",
            CuisineType::French => "French",
            CuisineType::American => "American",
            CuisineType::Thai => "Thai",
            CuisineType::Mediterranean => "Mediterranean",
            CuisineType::Other => "Other",
        }
    }
}

/// Specifying the free-text fields of a draft.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Description,
    AddressLine1,
    AddressLine2,
    City,
    State,
    ZipCode,
    CostRating,
    Email,
    PhoneNumber,
}

impl TextField {
    /// Return the error key validated for this field, if any. Address line 2
    /// is optional and never carries an error.
    ///
    pub fn error_key(&self) -> Option<FieldKey> {
        match self {
            TextField::Name => Some(FieldKey::Name),
            TextField::Description => Some(FieldKey::Description),
            TextField::AddressLine1 => Some(FieldKey::AddressLine1),
            TextField::AddressLine2 => None,
            TextField::City => Some(FieldKey::City),
            TextField::State => Some(FieldKey::State),
            TextField::ZipCode => Some(FieldKey::ZipCode),
            TextField::CostRating => Some(FieldKey::CostRating),
            TextField::Email => Some(FieldKey::Email),
            TextField::PhoneNumber => Some(FieldKey::PhoneNumber),
        }
    }

    /// Return the placeholder shown for the field.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            TextField::Name => "Restaurant Name",
            TextField::Description => "Description",
            TextField::AddressLine1 => "Address Line 1",
            TextField::AddressLine2 => "Address Line 2",
            TextField::City => "City",
            TextField::State => "State",
            TextField::ZipCode => "Zip Code",
            TextField::CostRating => "Cost Rating (1-5)",
            TextField::Email => "Email",
            TextField::PhoneNumber => "Phone Number (e.g. 555-123-4567)",
        }
    }
}

/// Defines the in-progress restaurant listing edited by the form.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantDraft {
    pub name: String,
    pub description: String,
    pub cuisine_type: CuisineType,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub cost_rating: String,
    pub email: String,
    pub phone_number: String,
    pub operating_hours: Vec<OperatingHoursSlot>,
}

/// A new draft starts blank with a single empty hours slot.
///
impl Default for RestaurantDraft {
    fn default() -> Self {
        RestaurantDraft {
            name: String::new(),
            description: String::new(),
            cuisine_type: CuisineType::default(),
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            cost_rating: String::new(),
            email: String::new(),
            phone_number: String::new(),
            operating_hours: vec![OperatingHoursSlot::default()],
        }
    }
}

impl RestaurantDraft {
    /// Return a new empty draft.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value of a text field.
    ///
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Description => &self.description,
            TextField::AddressLine1 => &self.address_line1,
            TextField::AddressLine2 => &self.address_line2,
            TextField::City => &self.city,
            TextField::State => &self.state,
            TextField::ZipCode => &self.zip_code,
            TextField::CostRating => &self.cost_rating,
            TextField::Email => &self.email,
            TextField::PhoneNumber => &self.phone_number,
        }
    }

    /// Return a mutable reference to a text field.
    ///
    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Description => &mut self.description,
            TextField::AddressLine1 => &mut self.address_line1,
            TextField::AddressLine2 => &mut self.address_line2,
            TextField::City => &mut self.city,
            TextField::State => &mut self.state,
            TextField::ZipCode => &mut self.zip_code,
            TextField::CostRating => &mut self.cost_rating,
            TextField::Email => &mut self.email,
            TextField::PhoneNumber => &mut self.phone_number,
        }
    }

    /// Append an empty operating hours slot.
    ///
    pub fn add_slot(&mut self) -> &mut Self {
        self.operating_hours.push(OperatingHoursSlot::default());
        self
    }

    /// Remove the slot at the index. The last remaining slot cannot be
    /// removed; returns the removed slot or None.
    ///
    pub fn remove_slot(&mut self, index: usize) -> Option<OperatingHoursSlot> {
        if self.operating_hours.len() <= 1 || index >= self.operating_hours.len() {
            return None;
        }
        Some(self.operating_hours.remove(index))
    }
}
