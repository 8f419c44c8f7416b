use chrono::{DateTime, TimeZone, Utc};
use slotbook_core::models::slot::Slot;
use uuid::{Uuid, uuid};

fn nov(day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, day, hour, minute, second)
        .single()
        .expect("seed timestamps are valid")
}

fn seed_slot(
    id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    booked_by: Option<&str>,
    created_at: DateTime<Utc>,
) -> Slot {
    Slot {
        id,
        start,
        end,
        booked_by: booked_by.map(str::to_string),
        created_at,
    }
}

/// The fixed set of slots a fresh server starts with.
pub fn seed_slots() -> Vec<Slot> {
    vec![
        seed_slot(
            uuid!("a1f3e8c2-3456-4b92-9c01-32e6ae91a101"),
            nov(25, 9, 0, 0),
            nov(25, 9, 30, 0),
            None,
            nov(20, 10, 2, 11),
        ),
        seed_slot(
            uuid!("c28dfc81-b333-4ff1-a21f-1f7e9bb4b219"),
            nov(25, 10, 0, 0),
            nov(25, 10, 30, 0),
            Some("sarah.jennings@example.com"),
            nov(20, 10, 5, 42),
        ),
        seed_slot(
            uuid!("e7af1bb4-1cd9-4476-8bb2-cf0998b2d35d"),
            nov(25, 11, 0, 0),
            nov(25, 11, 15, 0),
            None,
            nov(20, 10, 6, 12),
        ),
        seed_slot(
            uuid!("f91c4c88-5d55-41be-a49f-6bc0d5f89e71"),
            nov(25, 14, 0, 0),
            nov(25, 14, 30, 0),
            None,
            nov(20, 10, 7, 40),
        ),
        seed_slot(
            uuid!("8b7e1f13-ea93-4cd1-84ad-7a8303c1d512"),
            nov(25, 15, 0, 0),
            nov(25, 16, 0, 0),
            Some("kevin.donaldson@example.com"),
            nov(20, 10, 8, 3),
        ),
    ]
}
