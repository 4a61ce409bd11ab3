//! Preview WebSocket.
//!
//! A client first receives a `state` event for the current snapshot, then a
//! `reload` event per committed state. A client that falls behind the
//! broadcast gets the current state again instead of the missed events, and
//! may ask for it at any time by sending the text `state`.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;

use super::manager::PreviewManager;
use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /ws/preview.
pub(crate) async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let preview = state.preview()?.clone();
    Ok(ws.on_upgrade(move |socket| forward(socket, preview)))
}

async fn forward(mut socket: WebSocket, preview: PreviewManager) {
    let mut reloads = preview.subscribe();

    let mut outgoing = encode(&preview.state_event());
    loop {
        if let Some(message) = outgoing.take()
            && socket.send(message).await.is_err()
        {
            break;
        }

        outgoing = tokio::select! {
            result = reloads.recv() => match result {
                Ok(event) => encode(&event),
                Err(RecvError::Closed) => break,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Preview client lagged, resending state");
                    encode(&preview.state_event())
                }
            },
            result = socket.recv() => match result {
                Some(Ok(Message::Close(_)) | Err(_)) | None => break,
                Some(Ok(message)) if wants_state(&message) => encode(&preview.state_event()),
                Some(Ok(_)) => None,
            },
        };
    }
}

fn encode(event: &impl Serialize) -> Option<Message> {
    match serde_json::to_string(event) {
        Ok(text) => Some(Message::Text(text.into())),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode preview event");
            None
        }
    }
}

/// Whether a client message asks for the current state.
fn wants_state(message: &Message) -> bool {
    matches!(message, Message::Text(text) if text.as_str().trim() == "state")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bx_site::{PageView, Snapshot};

    use crate::preview::manager::StateEvent;

    #[test]
    fn test_state_event_is_text_frame() {
        let snapshot: Snapshot = PageView::new().current();

        let message = encode(&StateEvent::from_snapshot(&snapshot)).unwrap();

        let Message::Text(text) = &message else {
            panic!("expected text frame, got {message:?}");
        };
        let json: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
        assert_eq!(json["type"], "state");
        assert_eq!(json["state"], "loading");
        assert_eq!(json["slug"], serde_json::Value::Null);
    }

    #[test]
    fn test_wants_state() {
        assert!(wants_state(&Message::Text("state".to_owned().into())));
        assert!(wants_state(&Message::Text(" state\n".to_owned().into())));
        assert!(!wants_state(&Message::Text("ping".to_owned().into())));
        assert!(!wants_state(&Message::Binary(b"state".to_vec().into())));
    }
}
