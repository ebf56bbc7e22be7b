use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::command;
use crate::engine::Engine;
use crate::render::{render, RenderTarget};

/// Shared web state. The mutex is the serialization boundary around each
/// request's classify -> generate -> apply -> save sequence; handlers never
/// hold it across an await.
pub struct AppState {
    pub engine: Mutex<Engine>,
}

const INDEX_HTML: &str = include_str!("index.html");

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/chat", post(chat))
        .route("/api/schema", get(get_schema))
        .route("/api/generate-code", post(generate_code))
        .route("/api/commands", post(run_command))
        .route("/api/save", post(save_schema))
        .with_state(state)
}

pub async fn serve(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
    let state = Arc::new(AppState { engine: Mutex::new(engine) });
    let app = router(state);
    let listener = TcpListener::bind((host, port)).await?;
    println!("corisa listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn error(status: StatusCode, msg: &str) -> Response {
    (status, Json(json!({ "error": msg }))).into_response()
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

async fn chat(State(state): State<Arc<AppState>>, Json(req): Json<ChatRequest>) -> Response {
    let message = req.message.trim().to_string();
    if message.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No message provided");
    }
    let mut engine = state.engine.lock();
    match engine.process_prompt(&message) {
        Ok(reply) => Json(reply).into_response(),
        Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}

async fn get_schema(State(state): State<Arc<AppState>>) -> Response {
    let engine = state.engine.lock();
    Json(engine.schema().clone()).into_response()
}

#[derive(Deserialize)]
struct GenerateCodeRequest {
    #[serde(default, rename = "type")]
    code_type: Option<String>,
}

async fn generate_code(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateCodeRequest>,
) -> Response {
    let code_type = req.code_type.unwrap_or_else(|| "all".into());
    let target = match code_type.as_str() {
        "all" => None,
        other => match RenderTarget::parse(other) {
            Some(t) => Some(t),
            None => return error(StatusCode::BAD_REQUEST, "Unknown code type"),
        },
    };
    let engine = state.engine.lock();
    let code = render(engine.schema(), target);
    Json(json!({ "type": "success", "code": code, "code_type": code_type })).into_response()
}

#[derive(Deserialize)]
struct CommandRequest {
    #[serde(default)]
    command: String,
}

async fn run_command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CommandRequest>,
) -> Response {
    let text = req.command.trim();
    if text.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No command provided");
    }
    match command::parse(text) {
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "type": "error", "message": "Unknown command" })),
        )
            .into_response(),
        Some(cmd) => {
            let mut engine = state.engine.lock();
            match engine.run_command(cmd) {
                Ok(result) => {
                    Json(json!({ "type": "success", "result": result })).into_response()
                }
                Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
            }
        }
    }
}

async fn save_schema(State(state): State<Arc<AppState>>) -> Response {
    let engine = state.engine.lock();
    match engine.save() {
        Ok(()) => {
            Json(json!({ "type": "success", "message": "Schema saved successfully!" }))
                .into_response()
        }
        Err(e) => error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
    }
}
