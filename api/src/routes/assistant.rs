//! Health assistant chat endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;

use mates_assistant::{ChatRole, ChatTurn};

use crate::models::{ApiResponse, ChatBody, ChatReply, ChatTurnBody};
use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new().route("/chat", post(chat))
}

/// Send the transcript to the assistant and return its next turn
#[utoipa::path(
    post,
    path = "/api/v1/assistant/chat",
    request_body = ChatBody,
    responses(
        (status = 200, description = "Assistant reply", body = ApiResponse<ChatReply>),
        (status = 502, description = "Generative backend failed")
    ),
    tag = "assistant"
)]
pub async fn chat(
    State(state): State<Arc<ApiState>>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ApiResponse<ChatReply>>, (StatusCode, Json<ApiResponse<()>>)> {
    let transcript: Vec<ChatTurn> = body.transcript.iter().map(to_turn).collect();

    let reply = state.assistant.reply(&transcript).await.map_err(|error| {
        (
            StatusCode::BAD_GATEWAY,
            Json(ApiResponse::error("assistant_error", &error.to_string())),
        )
    })?;

    Ok(Json(ApiResponse::success(ChatReply {
        role: role_name(reply.role).to_string(),
        text: reply.text().to_string(),
    })))
}

fn to_turn(body: &ChatTurnBody) -> ChatTurn {
    match body.role.as_str() {
        "model" => ChatTurn::model(body.text.clone()),
        _ => ChatTurn::user(body.text.clone()),
    }
}

fn role_name(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "model",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_defaults_to_user() {
        let turn = to_turn(&ChatTurnBody {
            role: "system".to_string(),
            text: "hello".to_string(),
        });
        assert_eq!(turn.role, ChatRole::User);
    }
}
