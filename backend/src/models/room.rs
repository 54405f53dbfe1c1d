//! Room categories
//!
//! Patients flow through two rooms in a fixed order: intensive care first,
//! then the general ward. The room kind selects a stay-length distribution
//! and labels bed-pool errors and events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room category a bed pool belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// Intensive care unit (upstream pool, always refilled)
    Icu,
    /// General ward (downstream pool, fed by ICU promotions)
    Ward,
}

impl RoomKind {
    /// Both rooms in patient-flow order
    pub const ALL: [RoomKind; 2] = [RoomKind::Icu, RoomKind::Ward];

    /// Short lowercase label used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Icu => "icu",
            RoomKind::Ward => "ward",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
