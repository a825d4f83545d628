//! WebSocket wire DTOs for the signaling protocol.
//!
//! Only the `join` command has server-side meaning. Every other message type
//! (offer, answer, ICE candidate, application extensions) is an opaque
//! payload relayed verbatim, which keeps the relay protocol-agnostic above
//! the join/leave layer.

use serde::{Deserialize, Serialize};

use crate::domain::RoomId;

/// Raw client frame as decoded from the wire.
///
/// `payload` is never interpreted; `room_id` only matters for `join`.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    pub r#type: String,
    #[serde(rename = "roomId", default)]
    pub room_id: Option<String>,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

/// Server-interpreted view of an inbound message: the closed set of commands
/// the relay acts on, plus a pass-through variant for everything else.
#[derive(Debug, Clone)]
pub enum ClientCommand {
    /// `{"type":"join","roomId":...}` with a non-empty room id
    Join { room_id: RoomId },
    /// Anything else: relay to the sender's room
    Relay {
        kind: String,
        payload: Option<serde_json::Value>,
    },
}

impl From<InboundMessage> for ClientCommand {
    fn from(mut msg: InboundMessage) -> Self {
        // A `join` without a usable room id is deliberately NOT a join; it
        // falls through to the relay path, matching the reference server's
        // falsy-roomId handling.
        if msg.r#type == "join"
            && let Some(raw) = msg.room_id.take()
            && let Ok(room_id) = RoomId::new(raw)
        {
            return ClientCommand::Join { room_id };
        }

        ClientCommand::Relay {
            kind: msg.r#type,
            payload: msg.payload,
        }
    }
}

/// Server-originated control messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlMessage {
    /// Acknowledgment, e.g. `joined:<roomId>`
    System { message: String },
    /// Protocol-order violation, e.g. `join room first`
    Error { message: String },
}

impl ControlMessage {
    /// Join acknowledgment for `room_id`.
    pub fn joined(room_id: &RoomId) -> Self {
        Self::System {
            message: format!("joined:{room_id}"),
        }
    }

    /// Reply for a relay attempted before any join.
    pub fn join_room_first() -> Self {
        Self::Error {
            message: "join room first".to_string(),
        }
    }
}

/// Outbound relay envelope: the sender's message stamped with its identity
/// and room. `senderId` and `roomId` come from server state, never from the
/// client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayEnvelope {
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    #[serde(rename = "roomId")]
    pub room_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: &str) -> ClientCommand {
        let inbound: InboundMessage = serde_json::from_str(raw).unwrap();
        ClientCommand::from(inbound)
    }

    #[test]
    fn test_join_command_parsed() {
        // when:
        let command = parse(r#"{"type":"join","roomId":"abc"}"#);

        // then:
        let ClientCommand::Join { room_id } = command else {
            panic!("expected a join command");
        };
        assert_eq!(room_id.as_str(), "abc");
    }

    #[test]
    fn test_join_without_room_id_falls_through_to_relay() {
        // when:
        let command = parse(r#"{"type":"join"}"#);

        // then: not a join, so a non-joined sender will get "join room first"
        assert!(matches!(command, ClientCommand::Relay { .. }));
    }

    #[test]
    fn test_join_with_empty_room_id_falls_through_to_relay() {
        // when:
        let command = parse(r#"{"type":"join","roomId":""}"#);

        // then:
        assert!(matches!(command, ClientCommand::Relay { .. }));
    }

    #[test]
    fn test_app_message_parsed_as_relay_with_payload() {
        // when:
        let command = parse(r#"{"type":"webrtc_offer","payload":{"sdp":"v=0"}}"#);

        // then:
        let ClientCommand::Relay { kind, payload } = command else {
            panic!("expected a relay command");
        };
        assert_eq!(kind, "webrtc_offer");
        assert_eq!(payload, Some(json!({"sdp": "v=0"})));
    }

    #[test]
    fn test_message_without_type_is_rejected_by_serde() {
        // when:
        let result = serde_json::from_str::<InboundMessage>(r#"{"payload":1}"#);

        // then: dropped at the parse step, like non-string types upstream
        assert!(result.is_err());
    }

    #[test]
    fn test_control_message_wire_shape() {
        // given:
        let room_id = RoomId::new("abc".to_string()).unwrap();

        // when:
        let ack = serde_json::to_value(ControlMessage::joined(&room_id)).unwrap();
        let err = serde_json::to_value(ControlMessage::join_room_first()).unwrap();

        // then:
        assert_eq!(ack, json!({"type": "system", "message": "joined:abc"}));
        assert_eq!(err, json!({"type": "error", "message": "join room first"}));
    }

    #[test]
    fn test_relay_envelope_wire_shape() {
        // given:
        let envelope = RelayEnvelope {
            r#type: "webrtc_offer".to_string(),
            payload: Some(json!({"sdp": "v=0"})),
            sender_id: "a2f1".to_string(),
            room_id: "abc".to_string(),
        };

        // when:
        let value = serde_json::to_value(&envelope).unwrap();

        // then: camelCase stamps as on the wire
        assert_eq!(
            value,
            json!({
                "type": "webrtc_offer",
                "payload": {"sdp": "v=0"},
                "senderId": "a2f1",
                "roomId": "abc"
            })
        );
    }

    #[test]
    fn test_relay_envelope_omits_absent_payload() {
        // given: the client sent no payload field
        let envelope = RelayEnvelope {
            r#type: "ping".to_string(),
            payload: None,
            sender_id: "a2f1".to_string(),
            room_id: "abc".to_string(),
        };

        // when:
        let value = serde_json::to_value(&envelope).unwrap();

        // then: payload is omitted, not null
        assert!(value.get("payload").is_none());
    }
}
