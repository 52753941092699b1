use serde::{Deserialize, Serialize};

use crate::OrphanageId;

/// An image attached to an orphanage, referenced by its public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanageImage {
    pub url: String,
}

/// A full orphanage record as returned by the backend.
///
/// The edit page receives this through router history state rather than
/// fetching it; the dashboard fetches the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orphanage {
    pub id: OrphanageId,
    pub name: String,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Ordered; the gallery preserves this order.
    pub images: Vec<OrphanageImage>,
}
