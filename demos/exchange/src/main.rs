//! CAPSULE Exchange Demo
//!
//! A runnable server/client pair for the single-round exchange, speaking
//! the JSON-over-HTTP transport the protocol was originally deployed on.
//!
//! Environment variables:
//! - CAPSULE_MODE: "server" or "client"
//! - CAPSULE_KEY: Base64-encoded 32-byte shared key (both; see `keygen`)
//! - CAPSULE_BIND_ADDR: Bind address (server only, default 0.0.0.0:3000)
//! - CAPSULE_REPLAY_GUARD: "1" to reject replayed nonces (server only)
//! - CAPSULE_SERVER_URL: Exchange endpoint (client only,
//!   default http://localhost:3000/exchange)
//! - CAPSULE_MESSAGE: Message text to send (client only)

use std::env;
use std::process;

use capsule_protocol::ExchangeKey;

mod client;
mod server;

/// Load the shared key from CAPSULE_KEY.
///
/// A missing or malformed key is a configuration defect: fail the process,
/// do not limp along.
fn key_from_env() -> ExchangeKey {
    let encoded = env::var("CAPSULE_KEY").unwrap_or_else(|_| {
        eprintln!("CAPSULE_KEY is not set; generate one with the keygen bin");
        process::exit(1);
    });
    ExchangeKey::from_base64(&encoded).unwrap_or_else(|e| {
        eprintln!("CAPSULE_KEY is invalid: {e}");
        process::exit(1);
    })
}

#[tokio::main]
async fn main() {
    match env::var("CAPSULE_MODE").as_deref() {
        Ok("server") => server::run(key_from_env()).await,
        Ok("client") => client::run(key_from_env()).await,
        Ok(other) => {
            eprintln!("CAPSULE_MODE must be \"server\" or \"client\", got {other:?}");
            process::exit(1);
        }
        Err(_) => {
            eprintln!("CAPSULE_MODE is not set (expected \"server\" or \"client\")");
            process::exit(1);
        }
    }
}
