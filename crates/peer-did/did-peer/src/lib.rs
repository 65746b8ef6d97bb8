//! # DID Peer Method
//!
//! The `did:peer` method derives DIDs directly from public keys, without any registry.
//!
//! - numalgo 0 (`did:peer:0z6Mk...`) wraps a single inception key
//! - numalgo 2 (`did:peer:2.Ez6LS....Vz6Mk....S...`) inlines key agreement (E) and
//!   authentication (V) keys plus an optional compact service block (S)
//!
//! Example:
//! ```
//! use did_peer::DIDPeer;
//! use peer_did_common::{
//!     AgreementKeyType, AuthenticationKeyType, KeyFormat, VerificationMaterial,
//!     VerificationMaterialType, service::Service,
//! };
//!
//! let agreement = VerificationMaterial::from_key(
//!     VerificationMaterialType::Agreement(AgreementKeyType::X25519KeyAgreementKey2020),
//!     &[1u8; 32],
//! );
//! let authentication = VerificationMaterial::from_key(
//!     VerificationMaterialType::Authentication(AuthenticationKeyType::Ed25519VerificationKey2020),
//!     &[2u8; 32],
//! );
//! let service = Service::new("DIDCommMessaging", "https://mediator.example.com");
//!
//! let did = DIDPeer::create_algo2(&[agreement], &[authentication], &[service])
//!     .expect("Couldn't create did:peer");
//!
//! match DIDPeer::resolve(&did.to_string(), KeyFormat::Jwk) {
//!     Ok(doc) => println!("DID Document: {doc:#?}"),
//!     Err(e) => println!("Error: {e:?}"),
//! }
//! ```
//!

pub mod create;
pub mod ecnumbasis;
pub mod errors;
pub mod peer_did;
pub mod resolve;
pub mod service;

pub use errors::{DIDPeerError, EcnumbasisError};
pub use peer_did::{DID_PEER_PREFIX, PeerDID, PeerSegment};
pub use resolve::resolve_did_peer;
pub use service::{decode_services, encode_services};

/// did:peer method: builds identifiers with [`DIDPeer::create_algo0`] /
/// [`DIDPeer::create_algo2`] and resolves them with [`DIDPeer::resolve`]
pub struct DIDPeer;
