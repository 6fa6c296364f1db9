//! Customer record.

use serde::{Deserialize, Serialize};

use super::{CustomerId, Region};

/// A customer of the store.
///
/// Customers are immutable once generated and live for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Short unique code; unique within a snapshot.
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub region: Region,
}
