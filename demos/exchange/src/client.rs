//! Exchange client: one sealed round trip over HTTP.

use std::env;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use capsule_protocol::envelope::EnvelopeWire;
use capsule_protocol::{Engine, ExchangeClient, ExchangeKey, PayloadRecord};

/// Perform one exchange round trip and print the reply.
pub async fn run(key: ExchangeKey) {
    let url = env::var("CAPSULE_SERVER_URL")
        .unwrap_or_else(|_| "http://localhost:3000/exchange".to_string());
    let message = env::var("CAPSULE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the CAPSULE client!".to_string());

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);

    let client = ExchangeClient::new(Engine::new(key));
    let record = PayloadRecord::new(message, timestamp, "client-rs");

    let request = client.seal_request_wire(&record).unwrap_or_else(|e| {
        eprintln!("failed to seal request: {e}");
        process::exit(1);
    });

    let response = reqwest::Client::new()
        .post(&url)
        .json(&request)
        .send()
        .await
        .unwrap_or_else(|e| {
            eprintln!("request to {url} failed: {e}");
            process::exit(1);
        });

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        eprintln!("server rejected the exchange: {status} {body}");
        process::exit(1);
    }

    let reply: EnvelopeWire = response.json().await.unwrap_or_else(|e| {
        eprintln!("malformed response envelope: {e}");
        process::exit(1);
    });

    let record = client.open_reply_wire(&reply).unwrap_or_else(|e| {
        eprintln!("failed to open reply: {e}");
        process::exit(1);
    });

    println!("server replied:");
    println!("  message:   {}", record.message);
    println!("  timestamp: {}", record.timestamp);
    println!("  sender:    {}", record.sender);
}
