//! Client-local wire shapes.
//!
//! DESIGN
//! ======
//! Entities and request payloads come from the shared `model` crate. The only
//! type defined here is the session organizer, whose wire shape is owned by
//! the server's session service and never stored client-side beyond context.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in organizer as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}
