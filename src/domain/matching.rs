use serde::{Deserialize, Serialize};

/// A candidate pairing of a pending lost report with an available found
/// report in the same room.
///
/// One value is produced per (lost, found) pair, so a lost report appears
/// once for every available found report sharing its room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomMatch {
    pub reporter_name: String,
    pub item_name: String,
    pub room: String,
}
