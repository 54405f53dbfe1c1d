//! Domain models for the bed-flow simulator

pub mod bed_pool;
pub mod counters;
pub mod event;
pub mod room;

// Re-exports
pub use bed_pool::{BedPool, BedPoolError, EMPTY_SLOT};
pub use counters::{cumulative_sum, CounterError, DailyCounters};
pub use event::{Event, EventLog};
pub use room::RoomKind;
