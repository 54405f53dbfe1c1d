//! Event logging for bed-flow auditing.
//!
//! Every state change the daily transition engine makes is captured as an
//! [`Event`]. Patients are anonymous, so events refer to bed slots rather
//! than people. The log supports:
//! - Debugging (what happened to which bed on which day)
//! - Verifying the daily counters against individual promotions/blocks
//! - Analysis (stay-length histograms, ward turnover)
//!
//! # Event Types
//!
//! Events follow the order of the day's sub-steps:
//! - **IcuAdmission**: a free ICU bed is refilled from the arrival queue
//! - **Promotion**: an ICU patient moves to the ward (a surgery)
//! - **Blocked**: an ICU patient ready to move finds the ward full
//! - **WardDischarge**: a ward patient's stay runs out
//!
//! # Example
//!
//! ```rust
//! use bed_flow_core_rs::models::Event;
//!
//! let event = Event::Promotion {
//!     day: 4,
//!     icu_slot: 2,
//!     ward_slot: 0,
//!     ward_stay: 5,
//! };
//!
//! assert_eq!(event.day(), 4);
//! assert_eq!(event.event_type(), "Promotion");
//! ```

use crate::models::room::RoomKind;
use serde::{Deserialize, Serialize};

/// Simulation event capturing a bed state change.
///
/// All events carry the day on which they happened.
/// Events are logged in the order they occur within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A free ICU bed was filled with a new patient
    IcuAdmission { day: usize, slot: usize, stay: u32 },

    /// An ICU patient finished the ICU phase and moved to the ward
    Promotion {
        day: usize,
        icu_slot: usize,
        ward_slot: usize,
        ward_stay: u32,
    },

    /// An ICU patient finished the ICU phase but the ward was full
    Blocked { day: usize, icu_slot: usize },

    /// A ward patient's stay ended and the bed became free
    WardDischarge { day: usize, slot: usize },
}

impl Event {
    /// Day on which the event occurred
    pub fn day(&self) -> usize {
        match self {
            Event::IcuAdmission { day, .. } => *day,
            Event::Promotion { day, .. } => *day,
            Event::Blocked { day, .. } => *day,
            Event::WardDischarge { day, .. } => *day,
        }
    }

    /// Event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::IcuAdmission { .. } => "IcuAdmission",
            Event::Promotion { .. } => "Promotion",
            Event::Blocked { .. } => "Blocked",
            Event::WardDischarge { .. } => "WardDischarge",
        }
    }

    /// Whether the event touched a bed in `room`, and which slot
    pub fn slot_in(&self, room: RoomKind) -> Option<usize> {
        match (self, room) {
            (Event::IcuAdmission { slot, .. }, RoomKind::Icu) => Some(*slot),
            (Event::Promotion { icu_slot, .. }, RoomKind::Icu) => Some(*icu_slot),
            (Event::Promotion { ward_slot, .. }, RoomKind::Ward) => Some(*ward_slot),
            (Event::Blocked { icu_slot, .. }, RoomKind::Icu) => Some(*icu_slot),
            (Event::WardDischarge { slot, .. }, RoomKind::Ward) => Some(*slot),
            _ => None,
        }
    }
}

/// Event log for a single scenario run.
///
/// A thin wrapper around `Vec<Event>` with query helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events for a specific day
    pub fn events_on_day(&self, day: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.day() == day).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events touching one bed
    pub fn events_for_slot(&self, room: RoomKind, slot: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.slot_in(room) == Some(slot))
            .collect()
    }

    /// Count events of a type on a given day
    pub fn count_on_day(&self, day: usize, event_type: &str) -> usize {
        self.events
            .iter()
            .filter(|e| e.day() == day && e.event_type() == event_type)
            .count()
    }
}
