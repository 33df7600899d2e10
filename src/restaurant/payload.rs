use super::RestaurantDraft;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Defines the body posted to the restaurant creation endpoint: the draft's
/// fields plus a submission timestamp and a client-generated identifier.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RestaurantPayload {
    #[serde(flatten)]
    pub restaurant: RestaurantDraft,
    pub created_at: String,
    pub restaurant_id: i64,
}

impl RestaurantPayload {
    /// Stamp the draft with the submission instant. The identifier is the
    /// same instant in Unix milliseconds.
    ///
    pub fn new(restaurant: RestaurantDraft, submitted_at: DateTime<Utc>) -> Self {
        RestaurantPayload {
            restaurant,
            created_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            restaurant_id: submitted_at.timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::{DayOfWeek, OperatingHoursSlot, TimeOfDay};
    use chrono::TimeZone;

    #[test]
    fn stamps_timestamp_and_identifier() {
        let submitted_at = Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 5).unwrap();
        let payload = RestaurantPayload::new(RestaurantDraft::new(), submitted_at);
        assert_eq!(payload.created_at, "2024-05-17T14:30:05.000Z");
        assert_eq!(payload.restaurant_id, submitted_at.timestamp_millis());
    }

    #[test]
    fn serializes_draft_fields_at_top_level() {
        let mut draft = RestaurantDraft::new();
        draft.name = "Casa Oaxaca".to_string();
        draft.operating_hours = vec![OperatingHoursSlot::new(
            DayOfWeek::Saturday,
            TimeOfDay::new(10, 0).unwrap(),
            TimeOfDay::new(22, 30).unwrap(),
        )];
        let submitted_at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let value = serde_json::to_value(RestaurantPayload::new(draft, submitted_at)).unwrap();

        assert_eq!(value["name"], "Casa Oaxaca");
        assert_eq!(value["cuisine_type"], "italian");
        assert_eq!(value["address_line2"], "");
        assert_eq!(value["operating_hours"][0]["day_of_week"], "saturday");
        assert_eq!(value["operating_hours"][0]["closing_time"], "22:30");
        assert_eq!(value["created_at"], "2024-01-02T03:04:05.000Z");
        assert_eq!(value["restaurant_id"], submitted_at.timestamp_millis());
        assert!(value.get("restaurant").is_none());
    }
}
