//! Domain factories for generating identifiers.

use uuid::Uuid;

use super::value_object::ClientId;

/// Factory for generating ClientId instances.
///
/// Encapsulates identifier generation, separating it from the value object
/// itself. UUID v4 is drawn from the OS random source, so collisions over a
/// process lifetime are negligible.
pub struct ClientIdFactory;

impl ClientIdFactory {
    /// Generate a new ClientId with a random UUID v4.
    pub fn generate() -> ClientId {
        ClientId::new(Uuid::new_v4())
    }
}
