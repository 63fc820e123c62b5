use serde::Deserialize;

/// Static dropdown datum (`/api/nationality`, `/api/bloodGroup`,
/// `/api/MaritalStatus`, `/api/DisabilityStatus`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupItem {
    pub id: u32,
    pub label: String,
}
