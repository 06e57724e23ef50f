//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Sender of a chat message. The system instruction travels separately.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// The person asking for code
    User,
    /// The model answering
    Assistant,
}
