use std::env;

use did_peer::DIDPeer;
use peer_did_common::KeyFormat;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    // First argument is the command executed, second is the DID, third the key format
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <did:peer> [jwk|base58|multibase]", args[0]);
        std::process::exit(1);
    }

    let format = match args.get(2).map(String::as_str) {
        None | Some("multibase") => KeyFormat::Multibase,
        Some("base58") => KeyFormat::Base58,
        Some("jwk") => KeyFormat::Jwk,
        Some(other) => {
            eprintln!("Unknown key format: {other}");
            std::process::exit(1);
        }
    };

    let document = match DIDPeer::resolve(&args[1], format) {
        Ok(doc) => doc,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };

    match serde_json::to_string_pretty(&document) {
        Ok(json) => println!("DID Document:\n{json}"),
        Err(e) => println!("Couldn't serialize DID Document: {e}"),
    }
}
