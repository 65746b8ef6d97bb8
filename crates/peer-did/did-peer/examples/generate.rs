//! Builds did:peer DIDs from existing public keys
//!
//! Keys are given as base58 encoded raw public keys, e.g.
//! `cargo run --example generate -- <ed25519> <x25519> https://mediator.example.com`
use std::env;

use did_peer::DIDPeer;
use peer_did_common::{
    AgreementKeyType, AuthenticationKeyType, KeyFormat, MaterialValue, VerificationMaterial,
    VerificationMaterialType, service::Service,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!(
            "Usage: {} <ed25519 public key (base58)> <x25519 public key (base58)> [DIDComm endpoint]",
            args[0]
        );
        std::process::exit(1);
    }

    let v_key = VerificationMaterial::from_value(
        VerificationMaterialType::Authentication(AuthenticationKeyType::Ed25519VerificationKey2018),
        MaterialValue::Base58(args[1].clone()),
    );
    let e_key = VerificationMaterial::from_value(
        VerificationMaterialType::Agreement(AgreementKeyType::X25519KeyAgreementKey2019),
        MaterialValue::Base58(args[2].clone()),
    );
    let services: Vec<Service> = args
        .get(3)
        .map(|endpoint| {
            Service::new("DIDCommMessaging", endpoint.as_str())
                .with_accept(vec!["didcomm/v2".to_string()])
        })
        .into_iter()
        .collect();

    let did_peer_0 = match DIDPeer::create_algo0(&v_key) {
        Ok(did) => did,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };
    println!("did:peer numalgo 0: {did_peer_0}");

    let did_peer_2 = match DIDPeer::create_algo2(&[e_key], &[v_key], &services) {
        Ok(did) => did,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };
    println!("did:peer numalgo 2: {did_peer_2}");
    println!();

    match DIDPeer::resolve(&did_peer_2.to_string(), KeyFormat::Jwk) {
        Ok(doc) => match serde_json::to_string_pretty(&doc) {
            Ok(json) => println!("Resolved DID Document:\n{json}"),
            Err(e) => println!("Couldn't serialize DID Document: {e}"),
        },
        Err(e) => println!("Error resolving {did_peer_2}: {e}"),
    }
}
