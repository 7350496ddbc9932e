use serde::{Deserialize, Serialize};

use blueberry_core::SessionId;

use crate::Event;

/// Envelope for an event, containing session and ordering metadata.
///
/// Notes:
/// - `sequence_number` is 1-based and strictly increasing within a session.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    session_id: SessionId,

    /// Monotonically increasing position in the session journal.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(session_id: SessionId, sequence_number: u64, payload: E) -> Self {
        Self {
            session_id,
            sequence_number,
            payload,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}

impl<E: Event> EventEnvelope<E> {
    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}
