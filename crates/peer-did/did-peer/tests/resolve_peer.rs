use std::sync::Once;

use did_peer::{DIDPeer, DIDPeerError, PeerDID, ecnumbasis::material_type};
use peer_did_common::{
    KeyFormat, KeyType, PeerNumAlgo, VerificationMaterial, document::DocumentExt, service::Service,
};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

const FORMATS: [KeyFormat; 3] = [KeyFormat::Jwk, KeyFormat::Base58, KeyFormat::Multibase];
const KEY_TYPES: [KeyType; 2] = [KeyType::Ed25519, KeyType::X25519];

fn public_key(seed: u8) -> Vec<u8> {
    (0..32).map(|i| seed.wrapping_mul(31).wrapping_add(i)).collect()
}

#[test]
fn algo0_round_trip_every_table_entry() {
    init_tracing();

    for format in FORMATS {
        for key_type in KEY_TYPES {
            let key = public_key(format as u8 * 2 + key_type as u8);
            let material = VerificationMaterial::from_key(material_type(format, key_type), &key);
            let did = DIDPeer::create_algo0(&material).unwrap();
            assert_eq!(did.algo(), PeerNumAlgo::InceptionKey);

            let doc = DIDPeer::resolve(&did.to_string(), format).unwrap();
            assert_eq!(doc.verification_method.len(), 1);

            let vm = &doc.verification_method[0];
            assert_eq!(vm.type_, material.type_().method_type());
            assert_eq!(vm.material().unwrap(), material);
            assert_eq!(vm.get_public_key_bytes().unwrap(), key);
        }
    }
}

#[test]
fn zero_key_inception_did() {
    init_tracing();

    let material = VerificationMaterial::from_key(
        material_type(KeyFormat::Multibase, KeyType::Ed25519),
        &[0u8; 32],
    );
    let did = DIDPeer::create_algo0(&material).unwrap();
    assert!(did.method_id().starts_with("0z"));

    let did = format!("did:peer:{}", did.method_id());
    let doc = DIDPeer::resolve(&did, KeyFormat::Multibase).unwrap();
    assert_eq!(doc.verification_method.len(), 1);
    assert_eq!(doc.verification_method[0].controller.as_str(), did);
    assert!(doc.service.is_empty());
}

#[test]
fn empty_did_is_invalid() {
    init_tracing();

    assert!(matches!(
        DIDPeer::resolve("", KeyFormat::Multibase),
        Err(DIDPeerError::InvalidPeerDID(_))
    ));
}

#[test]
fn unsupported_identifiers() {
    init_tracing();

    for did in [
        "did:peer:1zQmZMygzYqNwU6Uhmewx5Xepf2VLp5S4HLSwwgf2aiKZuwa",
        "did:peer:4z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
        "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
        "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
    ] {
        assert!(
            matches!(
                DIDPeer::resolve(did, KeyFormat::Multibase),
                Err(DIDPeerError::InvalidPeerDID(_))
            ),
            "{did}"
        );
    }
}

#[test]
fn known_did_peer_0() {
    init_tracing();

    let did = "did:peer:0z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";
    let doc = DIDPeer::resolve(did, KeyFormat::Multibase).unwrap();

    let vm_id = format!("{did}#z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK");
    let vm = doc.get_verification_method(&vm_id).unwrap();
    assert_eq!(vm.type_, "Ed25519VerificationKey2020");
    assert!(doc.contains_authentication(&vm_id));

    // Resolving is the inverse of creating
    let created = DIDPeer::create_algo0(&vm.material().unwrap()).unwrap();
    assert_eq!(created.to_string(), did);
}

#[test]
fn algo2_round_trip_with_services() {
    init_tracing();

    let agreement: Vec<VerificationMaterial> = [1, 2]
        .iter()
        .map(|seed| {
            VerificationMaterial::from_key(
                material_type(KeyFormat::Jwk, KeyType::X25519),
                &public_key(*seed),
            )
        })
        .collect();
    let authentication = [VerificationMaterial::from_key(
        material_type(KeyFormat::Base58, KeyType::Ed25519),
        &public_key(3),
    )];
    let services = [
        Service::new("DIDCommMessaging", "https://mediator.example.com")
            .with_routing_keys(vec!["did:example:mediator#key-1".into()])
            .with_accept(vec!["didcomm/v2".into(), "didcomm/aip2;env=rfc587".into()]),
        Service::new("LinkedDomains", "https://example.com"),
        Service::new("DIDCommMessaging", "wss://mediator.example.com/ws"),
    ];

    let did = DIDPeer::create_algo2(&agreement, &authentication, &services).unwrap();
    let did_str = did.to_string();
    assert_eq!(did_str.parse::<PeerDID>().unwrap(), did);

    let doc = DIDPeer::resolve(&did_str, KeyFormat::Multibase).unwrap();

    assert_eq!(doc.verification_method.len(), 3);
    for (idx, key) in agreement.iter().chain(authentication.iter()).enumerate() {
        let id = format!("{did_str}#key-{}", idx + 1);
        let vm = doc.get_verification_method(&id).unwrap();
        assert_eq!(vm.get_public_key_bytes().unwrap(), key.decoded_key().unwrap());
        assert_eq!(vm.controller.as_str(), did_str);
    }
    assert_eq!(doc.find_key_agreement(None).len(), 2);
    assert!(doc.contains_authentication(&format!("{did_str}#key-3")));

    let fragments: Vec<&str> = doc
        .service
        .iter()
        .filter_map(|s| s.id.as_ref().and_then(|id| id.fragment()))
        .collect();
    assert_eq!(
        fragments,
        ["didcommmessaging-1", "didcommmessaging-2", "linkeddomains-1"]
    );

    let first = doc.find_service("didcommmessaging-1").unwrap();
    assert_eq!(first.service_endpoint, services[0].service_endpoint);
    assert_eq!(first.routing_keys, services[0].routing_keys);
    assert_eq!(first.accept, services[0].accept);

    let second = doc.find_service("didcommmessaging-2").unwrap();
    assert_eq!(second.service_endpoint, "wss://mediator.example.com/ws");
    assert_eq!(second.routing_keys, None);
}
