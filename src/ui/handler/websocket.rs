//! WebSocket connection handlers.
//!
//! Trust boundary: no authentication is performed here. Any client that can
//! reach the upgrade path may join any room it names; room identifiers are
//! agreed out-of-band with the matchmaking layer. This is a documented
//! property of the reference deployment, not an oversight.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ClientId, ClientIdFactory},
    infrastructure::dto::websocket::{
        ClientCommand, ControlMessage, InboundMessage, RelayEnvelope,
    },
    time::unix_timestamp_millis,
    ui::state::{AppState, KillSwitch, OutboundFrame, OutboundSender},
    usecase::{
        DisconnectClientUseCase, JoinRoomUseCase, RelayError, RelayMessageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // Fresh identity per accepted connection; never client-supplied
    let client_id = ClientIdFactory::generate();
    ws.on_upgrade(move |socket| handle_socket(socket, state, client_id))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, client_id: ClientId) {
    let (mut sink, mut stream) = socket.split();

    // Channel feeding this connection's write task; fan-out and the
    // heartbeat push frames here instead of touching the socket directly.
    // The kill switch bypasses the queue entirely so the liveness monitor
    // can terminate a wedged connection immediately.
    let (tx, mut rx) = mpsc::unbounded_channel::<OutboundFrame>();
    let kill = KillSwitch::new();
    state
        .registry
        .register(
            client_id.clone(),
            tx.clone(),
            kill.clone(),
            unix_timestamp_millis(),
        )
        .await;
    tracing::info!("Client '{}' connected", client_id);

    // Write task: drain queued frames onto the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            let result = match frame {
                OutboundFrame::Text(text) => sink.send(Message::Text(text.into())).await,
                OutboundFrame::Ping => sink.send(Message::Ping(Vec::new().into())).await,
            };
            if result.is_err() {
                break;
            }
        }
    });

    // Read task: parse and route everything the client sends
    let recv_state = state.clone();
    let recv_client_id = client_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = stream.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::debug!("WebSocket error for client '{}': {}", recv_client_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    dispatch_text(&recv_state, &recv_client_id, &tx, text.as_str()).await;
                }
                Message::Pong(_) => {
                    recv_state.registry.mark_alive(&recv_client_id).await;
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", recv_client_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other; the liveness
    // monitor's kill switch aborts both, dropping the socket halves like
    // the reference server's terminate()
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
        _ = kill.triggered() => {
            recv_task.abort();
            send_task.abort();
        }
    };

    // Teardown: leave the room (destroying it if emptied) and drop the entry
    let disconnect_usecase = DisconnectClientUseCase::new(state.registry.clone());
    match disconnect_usecase.execute(&client_id).await {
        Ok(summary) => {
            let session_ms = unix_timestamp_millis() - summary.connected_at;
            match summary.left_room {
                Some(room_id) => tracing::info!(
                    "Client '{}' disconnected from room '{}' after {}ms",
                    client_id,
                    room_id,
                    session_ms
                ),
                None => tracing::info!(
                    "Client '{}' disconnected after {}ms",
                    client_id,
                    session_ms
                ),
            }
        }
        Err(e) => {
            tracing::warn!("Failed to unregister client '{}': {}", client_id, e);
        }
    }
}

/// Route one text frame: parse, dispatch join, or fan out to the room.
async fn dispatch_text(
    state: &Arc<AppState>,
    client_id: &ClientId,
    reply: &OutboundSender,
    raw: &str,
) {
    // Malformed input is logged and dropped; the connection stays open
    let inbound = match serde_json::from_str::<InboundMessage>(raw) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Invalid JSON from client '{}': {}", client_id, e);
            return;
        }
    };

    match ClientCommand::from(inbound) {
        ClientCommand::Join { room_id } => {
            let join_usecase = JoinRoomUseCase::new(state.registry.clone());
            match join_usecase.execute(client_id, room_id).await {
                Ok(room_id) => {
                    let ack = serde_json::to_string(&ControlMessage::joined(&room_id)).unwrap();
                    if reply.send(OutboundFrame::Text(ack)).is_err() {
                        tracing::warn!("Failed to send join ack to client '{}'", client_id);
                    }
                }
                Err(e) => {
                    tracing::warn!("Join failed for client '{}': {}", client_id, e);
                }
            }
        }
        ClientCommand::Relay { kind, payload } => {
            let relay_usecase = RelayMessageUseCase::new(state.registry.clone());
            match relay_usecase.execute(client_id).await {
                Ok(plan) => {
                    let envelope = RelayEnvelope {
                        r#type: kind,
                        payload,
                        sender_id: client_id.to_string(),
                        room_id: plan.room_id.to_string(),
                    };
                    let json = serde_json::to_string(&envelope).unwrap();

                    // Best-effort, independent per recipient: a closed or
                    // broken sibling never blocks the others; its entry is
                    // reaped by its own close path or the liveness monitor
                    for recipient in plan.recipients {
                        if recipient
                            .sender
                            .send(OutboundFrame::Text(json.clone()))
                            .is_err()
                        {
                            tracing::warn!(
                                "Failed to deliver message to client '{}'",
                                recipient.id
                            );
                        }
                    }
                }
                Err(RelayError::NotInRoom) => {
                    let error =
                        serde_json::to_string(&ControlMessage::join_room_first()).unwrap();
                    if reply.send(OutboundFrame::Text(error)).is_err() {
                        tracing::warn!("Failed to send error reply to client '{}'", client_id);
                    }
                }
            }
        }
    }
}
