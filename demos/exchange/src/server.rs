//! Exchange server: axum transport around the core state machine.
//!
//! POST /exchange takes and returns the two-field JSON envelope. All of
//! the security-relevant work happens inside `Exchange::handle_wire`;
//! this layer only maps errors onto HTTP statuses.

use std::env;
use std::process;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use capsule_protocol::envelope::EnvelopeWire;
use capsule_protocol::{
    core::StatusHint,
    crypto::ReplayGuard,
    Engine, Exchange, ExchangeHandler, ExchangeKey, PayloadRecord,
};

/// Builds the server's reply record.
struct GreetingHandler;

impl ExchangeHandler for GreetingHandler {
    fn respond(&self, inbound: PayloadRecord) -> PayloadRecord {
        // Metadata only - the decrypted message text stays off the logs.
        println!(
            "exchange from {:?} at {} ({} bytes)",
            inbound.sender,
            inbound.timestamp,
            inbound.message.len()
        );

        PayloadRecord::new("Hello from the CAPSULE server!", unix_now(), "server-rs")
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

async fn exchange(
    State(exchange): State<Arc<Exchange<GreetingHandler>>>,
    Json(request): Json<EnvelopeWire>,
) -> Response {
    match exchange.handle_wire(&request) {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => {
            eprintln!("exchange rejected: {err}");
            let status = match err.status_hint() {
                StatusHint::BadRequest => StatusCode::BAD_REQUEST,
                StatusHint::Unauthorized => StatusCode::UNAUTHORIZED,
                StatusHint::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, err.client_message().to_string()).into_response()
        }
    }
}

/// Run the exchange server until interrupted.
pub async fn run(key: ExchangeKey) {
    let bind_addr = env::var("CAPSULE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let mut server = Exchange::new(Engine::new(key), GreetingHandler);
    if env::var("CAPSULE_REPLAY_GUARD").as_deref() == Ok("1") {
        server = server.with_replay_guard(ReplayGuard::new());
    }

    let app = Router::new()
        .route("/exchange", post(exchange))
        .with_state(Arc::new(server));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("failed to bind {bind_addr}: {e}");
            process::exit(1);
        });

    println!("capsule-exchange server listening on http://{bind_addr}");
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("server error: {e}");
        process::exit(1);
    }
}
