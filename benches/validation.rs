//! Benchmarks for restaurant draft validation.
//!
//! These benchmarks measure the validator on a valid draft, a blank draft,
//! and a week of operating hours with overlapping slots.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use restaurant_intake::restaurant::{
    validate, DayOfWeek, OperatingHoursSlot, RestaurantDraft, TimeOfDay,
};

fn time(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).expect("time on the half-hour grid")
}

fn valid_draft() -> RestaurantDraft {
    RestaurantDraft {
        name: "Harbor Noodle House".to_string(),
        description: "Hand-pulled noodles and broths.".to_string(),
        address_line1: "12 Pier Street".to_string(),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip_code: "97209".to_string(),
        cost_rating: "2".to_string(),
        email: "hello@harbornoodle.example".to_string(),
        phone_number: "503-555-0107".to_string(),
        operating_hours: vec![OperatingHoursSlot::new(
            DayOfWeek::Monday,
            time(11, 0),
            time(22, 0),
        )],
        ..RestaurantDraft::default()
    }
}

fn busy_week_draft() -> RestaurantDraft {
    let mut draft = valid_draft();
    draft.operating_hours = DayOfWeek::ALL
        .iter()
        .flat_map(|day| {
            vec![
                OperatingHoursSlot::new(*day, time(17, 0), time(23, 0)),
                OperatingHoursSlot::new(*day, time(7, 0), time(11, 30)),
                OperatingHoursSlot::new(*day, time(11, 0), time(15, 0)),
                OperatingHoursSlot::new(*day, time(15, 0), time(17, 0)),
            ]
        })
        .collect();
    draft
}

fn bench_validate_valid(c: &mut Criterion) {
    let draft = valid_draft();
    c.bench_function("validate_valid_draft", |b| {
        b.iter(|| validate(black_box(&draft)))
    });
}

fn bench_validate_blank(c: &mut Criterion) {
    let draft = RestaurantDraft::new();
    c.bench_function("validate_blank_draft", |b| {
        b.iter(|| validate(black_box(&draft)))
    });
}

fn bench_validate_busy_week(c: &mut Criterion) {
    let draft = busy_week_draft();
    c.bench_function("validate_busy_week_overlaps", |b| {
        b.iter(|| validate(black_box(&draft)))
    });
}

criterion_group!(
    benches,
    bench_validate_valid,
    bench_validate_blank,
    bench_validate_busy_week
);
criterion_main!(benches);
