use chrono::{DateTime, Utc};
use slotbook_core::{
    errors::{SlotError, SlotResult},
    models::slot::{CreateSlotRequest, Slot, SlotQuery, SlotResponse},
    rules,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::seed::seed_slots;

/// In-memory slot collection and the rules guarding it.
///
/// Slots are kept in insertion order. Every operation runs all of its checks
/// before touching the collection, so a rejected call leaves it unchanged.
#[derive(Debug, Clone, Default)]
pub struct SlotStore {
    slots: Vec<Slot>,
}

impl SlotStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the startup seed set.
    pub fn seeded() -> Self {
        Self::with_slots(seed_slots())
    }

    /// Creates a store from an existing set of slots, assumed valid.
    pub fn with_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// Lists slots matching the query, ordered by start time.
    pub fn list(&self, query: &SlotQuery) -> Vec<SlotResponse> {
        let mut slots: Vec<&Slot> = self
            .slots
            .iter()
            .filter(|slot| query.matches(slot))
            .collect();
        slots.sort_by_key(|slot| slot.start);

        slots.into_iter().map(SlotResponse::from).collect()
    }

    /// Expands unbooked slots inside `[from, to]` into 30-minute windows.
    ///
    /// Slots are taken in collection order and each one is sliced from its
    /// start. A slot whose length is not a multiple of 30 minutes yields no
    /// windows at all.
    pub fn available(&self, query: &SlotQuery) -> SlotResult<Vec<SlotResponse>> {
        let (Some(from), Some(to)) = (query.from, query.to) else {
            return Err(SlotError::MissingRange);
        };

        let window = rules::availability_window();
        let available = self
            .slots
            .iter()
            .filter(|slot| !slot.is_booked() && slot.is_within(from, to))
            .filter_map(|slot| {
                let windows = rules::split_into_windows(slot.start, slot.end, window)?;
                Some(windows.map(move |(start, end)| SlotResponse {
                    id: slot.id,
                    start,
                    end,
                    booked: slot.is_booked(),
                    booked_by: None,
                }))
            })
            .flatten()
            .collect();

        Ok(available)
    }

    /// Validates and appends a new unbooked slot, stamped with the current time.
    pub fn create(&mut self, request: &CreateSlotRequest) -> SlotResult<SlotResponse> {
        self.create_at(request, Utc::now())
    }

    /// Same as [`SlotStore::create`] with an explicit creation time.
    pub fn create_at(
        &mut self,
        request: &CreateSlotRequest,
        now: DateTime<Utc>,
    ) -> SlotResult<SlotResponse> {
        let (start, end) = (request.start, request.end);

        if start >= end {
            return Err(SlotError::InvalidRange);
        }

        if !rules::is_valid_duration(end - start) {
            return Err(SlotError::InvalidDuration);
        }

        if self.slots.iter().any(|existing| existing.overlaps(start, end)) {
            return Err(SlotError::Overlap);
        }

        let slot = Slot {
            id: self.fresh_id(),
            start,
            end,
            booked_by: None,
            created_at: now,
        };
        info!(slot_id = %slot.id, %start, %end, "Created slot");

        let response = SlotResponse::from(&slot);
        self.slots.push(slot);
        Ok(response)
    }

    /// Books an unbooked slot for `email`. Bookings are permanent.
    pub fn book(&mut self, id: Uuid, email: &str) -> SlotResult<SlotResponse> {
        if !rules::is_valid_email(email) {
            return Err(SlotError::InvalidEmail(email.to_string()));
        }

        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or(SlotError::NotFound(id))?;

        if slot.is_booked() {
            return Err(SlotError::AlreadyBooked(id));
        }

        slot.booked_by = Some(email.to_string());
        info!(slot_id = %id, "Booked slot");

        Ok(SlotResponse::from(&*slot))
    }

    /// Removes an unbooked slot.
    pub fn delete(&mut self, id: Uuid) -> SlotResult<()> {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.id == id)
            .ok_or(SlotError::NotFound(id))?;

        if self.slots[index].is_booked() {
            return Err(SlotError::AlreadyBooked(id));
        }

        self.slots.remove(index);
        info!(slot_id = %id, "Deleted slot");

        Ok(())
    }

    // Rerolls on a collision with a live slot.
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
            debug!(slot_id = %id, "Regenerating colliding slot id");
        }
    }
}
