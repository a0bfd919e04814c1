use std::{net::SocketAddr, sync::Arc, time::Duration};

use actuator::{engine, CommandInterface, PositionStore};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use shared::protocol::{CoveringCommand, PositionResponse};
use tracing::{error, info};

mod config;
mod page;

use config::load_settings;

#[derive(Clone)]
struct AppState {
    store: Arc<PositionStore>,
    commands: CommandInterface,
    refresh_interval_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let store = PositionStore::new(settings.initial_position).map_err(|err| {
        error!(
            initial_position = settings.initial_position,
            "refusing to start with an out-of-range initial position"
        );
        err
    })?;
    let store = Arc::new(store);

    let commands = CommandInterface::new(store.clone());
    let engine = engine::start(
        store.clone(),
        Duration::from_millis(settings.tick_period_ms),
    );

    let state = AppState {
        store: store.clone(),
        commands,
        refresh_interval_ms: settings.tick_period_ms,
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "visualisation listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Future ticks stop here; an in-flight tick is allowed to finish.
    engine.stop().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/position", get(position))
        .route("/command", post(command))
        .fallback(not_found)
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(state.refresh_interval_ms))
}

async fn position(State(state): State<Arc<AppState>>) -> Json<PositionResponse> {
    Json(PositionResponse::from(state.store.snapshot()))
}

async fn command(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CoveringCommand>,
) -> StatusCode {
    state.commands.apply(req);
    StatusCode::NO_CONTENT
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn test_app(initial: u32) -> (Router, Arc<PositionStore>) {
        let store = Arc::new(PositionStore::new(initial).expect("store"));
        let commands = CommandInterface::new(store.clone());
        let app = build_router(Arc::new(AppState {
            store: store.clone(),
            commands,
            refresh_interval_ms: 1_000,
        }));
        (app, store)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn position_reports_the_committed_current_value() {
        let (app, _store) = test_app(4_200);
        let request = Request::get("/position").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "currentPositionLiftPercent100ths": 4200 })
        );
    }

    #[tokio::test]
    async fn command_sets_the_target_for_the_next_tick() {
        let (app, store) = test_app(0);
        let request = Request::post("/command")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"type":"down_or_close"}"#))
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(store.target().raw(), 10_000);

        // The command alone moves nothing; position changes only on a tick.
        engine::tick(&store);
        let request = Request::get("/position").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "currentPositionLiftPercent100ths": 1000 })
        );
    }

    #[tokio::test]
    async fn index_serves_the_visualisation_page() {
        let (app, _store) = test_app(0);
        let request = Request::get("/").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_paths_return_not_found() {
        let (app, _store) = test_app(0);
        let request = Request::get("/nope").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
