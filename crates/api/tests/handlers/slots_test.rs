use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use fake::{Fake, faker::internet::en::SafeEmail};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotbook_core::models::slot::SlotResponse;
use uuid::Uuid;

use crate::test_utils::TestContext;

const BOOKED_SARAH: &str = "c28dfc81-b333-4ff1-a21f-1f7e9bb4b219";
const OPEN_QUARTER_HOUR: &str = "e7af1bb4-1cd9-4476-8bb2-cf0998b2d35d";
const OPEN_AFTERNOON: &str = "f91c4c88-5d55-41be-a49f-6bc0d5f89e71";
const BOOKED_KEVIN: &str = "8b7e1f13-ea93-4cd1-84ad-7a8303c1d512";

fn at(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

#[tokio::test]
async fn test_list_slots_sorted() {
    let ctx = TestContext::seeded();

    let response = ctx.server.get("/slots").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let content_type = response.header("content-type");
    assert_eq!(content_type.to_str().unwrap(), "application/json");

    let slots = response.json::<Vec<SlotResponse>>();
    assert_eq!(slots.len(), 5);
    assert!(slots.windows(2).all(|pair| pair[0].start <= pair[1].start));
}

#[tokio::test]
async fn test_list_slots_wire_format() {
    let ctx = TestContext::seeded();

    let slots = ctx.server.get("/slots").await.json::<Value>();

    assert_eq!(
        slots[1],
        json!({
            "id": BOOKED_SARAH,
            "start": "2025-11-25T10:00:00.000Z",
            "end": "2025-11-25T10:30:00.000Z",
            "booked": true,
            "bookedBy": "sarah.jennings@example.com",
        })
    );
    assert!(slots[0].get("bookedBy").is_none());
    assert!(slots[0].get("createdAt").is_none());
}

#[tokio::test]
async fn test_list_unbooked_slots() {
    let ctx = TestContext::seeded();

    let response = ctx
        .server
        .get("/slots")
        .add_query_param("booked", "false")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let slots = response.json::<Vec<SlotResponse>>();
    assert_eq!(slots.len(), 3);
    for slot in slots {
        assert!(!slot.booked);
        assert_eq!(slot.booked_by, None);
    }
}

#[tokio::test]
async fn test_list_slots_by_range() {
    let ctx = TestContext::seeded();

    let response = ctx
        .server
        .get("/slots")
        .add_query_param("from", "2025-11-25T10:00:00Z")
        .add_query_param("to", "2025-11-25T14:00:00Z")
        .await;

    let starts: Vec<_> = response
        .json::<Vec<SlotResponse>>()
        .into_iter()
        .map(|slot| slot.start)
        .collect();
    assert_eq!(
        starts,
        vec![
            at("2025-11-25T10:00:00Z"),
            at("2025-11-25T11:00:00Z"),
            at("2025-11-25T14:00:00Z"),
        ]
    );
}

#[tokio::test]
async fn test_create_slot() {
    let ctx = TestContext::seeded();

    let response = ctx
        .server
        .post("/slots")
        .json(&json!({
            "start": "2023-01-01T04:00:00.000Z",
            "end": "2023-01-01T06:00:00.000Z",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created = response.json::<SlotResponse>();
    assert_eq!(created.start, at("2023-01-01T04:00:00Z"));
    assert_eq!(created.end, at("2023-01-01T06:00:00Z"));
    assert!(!created.booked);

    let slots = ctx.server.get("/slots").await.json::<Vec<SlotResponse>>();
    assert_eq!(slots.len(), 6);
    assert_eq!(slots[0].id, created.id);
}

#[tokio::test]
async fn test_create_slot_rejections() {
    let ctx = TestContext::seeded();

    let inverted = ctx
        .server
        .post("/slots")
        .json(&json!({
            "start": "2023-01-01T04:00:00.000Z",
            "end": "2023-01-01T02:00:00.000Z",
        }))
        .await;
    assert_eq!(inverted.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(inverted.json::<Value>()["error"], json!("invalid_range"));

    let ten_minutes = ctx
        .server
        .post("/slots")
        .json(&json!({
            "start": "2023-01-01T04:00:00.000Z",
            "end": "2023-01-01T04:10:00.000Z",
        }))
        .await;
    assert_eq!(ten_minutes.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ten_minutes.json::<Value>(),
        json!({
            "error": "invalid_duration",
            "message": "Slot must be 15, 30, or 60 minutes",
        })
    );

    let overlapping = ctx
        .server
        .post("/slots")
        .json(&json!({
            "start": "2025-11-25T15:30:00.000Z",
            "end": "2025-11-25T16:30:00.000Z",
        }))
        .await;
    assert_eq!(overlapping.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(overlapping.json::<Value>()["error"], json!("overlap"));

    assert_eq!(ctx.state.store.read().await.len(), 5);
}

#[tokio::test]
async fn test_create_touching_slot() {
    let ctx = TestContext::seeded();

    let response = ctx
        .server
        .post("/slots")
        .json(&json!({
            "start": "2025-11-25T09:30:00.000Z",
            "end": "2025-11-25T10:00:00.000Z",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_book_slot() {
    let ctx = TestContext::seeded();
    let email: String = SafeEmail().fake();

    let response = ctx
        .server
        .post(&format!("/slots/{}/book", OPEN_QUARTER_HOUR))
        .json(&json!({ "email": &email }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let booked = response.json::<SlotResponse>();
    assert!(booked.booked);
    assert_eq!(booked.booked_by, Some(email));

    let again = ctx
        .server
        .post(&format!("/slots/{}/book", OPEN_QUARTER_HOUR))
        .json(&json!({ "email": "sarah.jennings@example.com" }))
        .await;
    assert_eq!(again.status_code(), StatusCode::CONFLICT);
}

#[test_log::test(tokio::test)]
async fn test_book_slot_rejections() {
    let ctx = TestContext::seeded();

    let missing = ctx
        .server
        .post("/slots/c28dfc81-b333-4ff1-a21f-1f7e9bb4b220/book")
        .json(&json!({ "email": "sarah.jennings@example.com" }))
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let taken = ctx
        .server
        .post(&format!("/slots/{}/book", BOOKED_SARAH))
        .json(&json!({ "email": "sarah.jennings@example.com" }))
        .await;
    assert_eq!(taken.status_code(), StatusCode::CONFLICT);
    assert_eq!(taken.json::<Value>()["error"], json!("already_booked"));

    let bad_email = ctx
        .server
        .post(&format!("/slots/{}/book", OPEN_QUARTER_HOUR))
        .json(&json!({ "email": "sarah" }))
        .await;
    assert_eq!(bad_email.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.json::<Value>()["error"], json!("invalid_email"));

    let id = Uuid::parse_str(OPEN_QUARTER_HOUR).unwrap();
    assert!(!ctx.state.store.read().await.get(id).unwrap().is_booked());
}

#[tokio::test]
async fn test_delete_slot() {
    let ctx = TestContext::seeded();

    let deleted = ctx
        .server
        .delete(&format!("/slots/{}", OPEN_AFTERNOON))
        .await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);
    assert!(deleted.text().is_empty());

    let again = ctx
        .server
        .delete(&format!("/slots/{}", OPEN_AFTERNOON))
        .await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);

    assert_eq!(ctx.state.store.read().await.len(), 4);
}

#[test_log::test(tokio::test)]
async fn test_delete_slot_rejections() {
    let ctx = TestContext::seeded();

    let missing = ctx
        .server
        .delete("/slots/e7af1bb4-1cd9-4476-8bb2-cf0998b2d399")
        .await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

    let booked = ctx
        .server
        .delete(&format!("/slots/{}", BOOKED_KEVIN))
        .await;
    assert_eq!(booked.status_code(), StatusCode::CONFLICT);

    let malformed = ctx.server.delete("/slots/not-a-uuid").await;
    assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);

    assert_eq!(ctx.state.store.read().await.len(), 5);
}

#[tokio::test]
async fn test_availability_requires_range() {
    let ctx = TestContext::seeded();

    let response = ctx
        .server
        .get("/slots/availability")
        .add_query_param("from", "2025-11-25T09:00:00Z")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "missing_range", "message": "Missing from or to" })
    );
}

#[tokio::test]
async fn test_availability_for_the_day() {
    let ctx = TestContext::seeded();

    let response = ctx
        .server
        .get("/slots/availability")
        .add_query_param("from", "2025-11-25T09:00:00Z")
        .add_query_param("to", "2025-11-25T17:00:00Z")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let windows = response.json::<Vec<SlotResponse>>();
    let starts: Vec<_> = windows.iter().map(|window| window.start).collect();
    assert_eq!(
        starts,
        vec![at("2025-11-25T09:00:00Z"), at("2025-11-25T14:00:00Z")]
    );
    assert!(windows.iter().all(|window| !window.booked && window.booked_by.is_none()));
}

#[tokio::test]
async fn test_availability_splits_created_hour() {
    let ctx = TestContext::empty();

    let created = ctx
        .server
        .post("/slots")
        .json(&json!({
            "start": "2026-03-02T13:00:00.000Z",
            "end": "2026-03-02T14:00:00.000Z",
        }))
        .await
        .json::<SlotResponse>();

    let windows = ctx
        .server
        .get("/slots/availability")
        .add_query_param("from", "2026-03-02T00:00:00Z")
        .add_query_param("to", "2026-03-03T00:00:00Z")
        .await
        .json::<Value>();

    assert_eq!(
        windows,
        json!([
            {
                "id": created.id,
                "start": "2026-03-02T13:00:00.000Z",
                "end": "2026-03-02T13:30:00.000Z",
                "booked": false,
            },
            {
                "id": created.id,
                "start": "2026-03-02T13:30:00.000Z",
                "end": "2026-03-02T14:00:00.000Z",
                "booked": false,
            },
        ])
    );
}
