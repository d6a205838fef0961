//! CAPSULE Key Generation Utility
//!
//! Generates a fresh 32-byte exchange key and prints it in base64, ready
//! to use as the CAPSULE_KEY environment variable.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p capsule-exchange --bin keygen
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use capsule_protocol::ExchangeKey;

fn main() {
    let key = ExchangeKey::generate();
    let encoded = STANDARD.encode(key.as_bytes());

    println!("Generated fresh exchange key (base64) - KEEP SECRET!");
    println!();
    println!("export CAPSULE_KEY={encoded}");
    println!();
    println!("# Terminal 1 - Start server:");
    println!("CAPSULE_MODE=server CAPSULE_KEY={encoded} cargo run -p capsule-exchange");
    println!();
    println!("# Terminal 2 - Run client:");
    println!("CAPSULE_MODE=client CAPSULE_KEY={encoded} cargo run -p capsule-exchange");
}
