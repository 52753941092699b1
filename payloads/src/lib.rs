use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

/// Database identifier of an orphanage record.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct OrphanageId(pub i64);

/// Soft limit on the "about" field, surfaced as a hint in the UI.
/// The backend does not enforce it.
pub const ABOUT_MAX_LEN: usize = 300;
