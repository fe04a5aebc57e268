//! Loopback HTTP/JSON bridge.

use crate::wire::{BAD_REQUEST, ErrorBody, MoveRequest};
use crate::{BridgeConfig, BridgeError};
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tictac_engine::{GameEngine, GameSnapshot, MoveError};
use tower::ServiceBuilder;
use tracing::{info, instrument, warn};

/// Shared handle to the process's one engine.
pub type SharedEngine = Arc<GameEngine>;

/// A rejected request, rendered as a JSON error body.
#[derive(Debug, derive_more::From)]
pub enum ApiError {
    /// The engine refused the move.
    Move(MoveError),
    /// The body was not a move request.
    BadBody(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Move(err) => {
                let status = match err {
                    MoveError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                    MoveError::CellOccupied(_) | MoveError::GameAlreadyOver => {
                        StatusCode::CONFLICT
                    }
                };
                (status, ErrorBody::from(&err))
            }
            ApiError::BadBody(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(BAD_REQUEST.to_string(), rejection.body_text()),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the API router around `engine`.
pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/api/game", get(current_state))
        .route("/api/game/new", post(new_game))
        .route("/api/game/move", post(submit_move))
        .route("/api/game/reset", post(reset))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(engine)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

#[instrument(skip_all)]
async fn current_state(State(engine): State<SharedEngine>) -> Json<GameSnapshot> {
    Json(engine.current_state())
}

#[instrument(skip_all)]
async fn new_game(State(engine): State<SharedEngine>) -> Json<GameSnapshot> {
    Json(engine.new_game())
}

#[instrument(skip_all)]
async fn reset(State(engine): State<SharedEngine>) -> Json<GameSnapshot> {
    Json(engine.reset())
}

#[instrument(skip_all, fields(index))]
async fn submit_move(
    State(engine): State<SharedEngine>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Malformed move body");
        rejection
    })?;
    tracing::Span::current().record("index", req.index);
    let snapshot = engine.submit_move(req.index)?;
    Ok(Json(snapshot))
}

/// Binds the configured address and serves until Ctrl+C.
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &BridgeConfig, engine: SharedEngine) -> Result<(), BridgeError> {
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "HTTP bridge ready");

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    info!("HTTP bridge stopped");
    Ok(())
}
