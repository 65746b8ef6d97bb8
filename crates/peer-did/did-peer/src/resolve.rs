//! Resolving a did:peer identifier into a DID Document

use peer_did_common::{
    Document, KeyFormat, VerificationMaterial, VerificationMaterialType,
    verification_method::{VerificationMethod, VerificationRelationship},
};
use tracing::{debug, warn};
use url::Url;

use crate::{
    DIDPeer, DIDPeerError, create::check_purpose, ecnumbasis,
    peer_did::{PeerDID, PeerSegment},
    service::decode_services,
};

impl DIDPeer {
    /// Resolves a did:peer DID into its DID Document
    ///
    /// `format` picks how public keys are published (`publicKeyJwk`,
    /// `publicKeyBase58` or `publicKeyMultibase`).
    ///
    /// numalgo 0 yields one verification method with the id `{did}#{ecnumbasis}`.
    /// numalgo 2 yields one verification method per key segment with ids `{did}#key-N`
    /// (N counting key segments from 1) and the services of the service segment.
    pub fn resolve(did: &str, format: KeyFormat) -> Result<Document, DIDPeerError> {
        if did.is_empty() {
            warn!("Can't resolve an empty DID");
            return Err(DIDPeerError::InvalidPeerDID("DID is empty".into()));
        }

        let peer_did: PeerDID = did.parse()?;
        let did_url = parse_url(did, did)?;
        let mut document = Document::new(did_url.clone());

        match &peer_did {
            PeerDID::InceptionKey { ecnumbasis } => {
                let (_, material) = ecnumbasis::decode(ecnumbasis, format)?;
                add_key(&mut document, &did_url, ecnumbasis, &material)?;
            }
            PeerDID::MultipleKeys { segments } => {
                let mut key_count = 0;
                for segment in segments {
                    match segment {
                        PeerSegment::Agreement(value) | PeerSegment::Authentication(value) => {
                            let (_, material) = ecnumbasis::decode(value, format)?;
                            check_purpose(&material, segment.purpose()).inspect_err(|e| {
                                warn!("Invalid key in ({did}): {e}");
                            })?;

                            key_count += 1;
                            let fragment = format!("key-{key_count}");
                            add_key(&mut document, &did_url, &fragment, &material)?;
                        }
                        PeerSegment::Service(_) => {
                            document.service = decode_services(did, &segment.to_string())?;
                        }
                    }
                }
            }
        }

        debug!(
            "resolved {did}: {} verification methods, {} services",
            document.verification_method.len(),
            document.service.len()
        );
        Ok(document)
    }
}

/// Adds a verification method with the id `{did}#{fragment}` and references it
/// from the relationships of its purpose
fn add_key(
    document: &mut Document,
    did: &Url,
    fragment: &str,
    material: &VerificationMaterial,
) -> Result<(), DIDPeerError> {
    let id = parse_url(&format!("{did}#{fragment}"), did.as_str())?;

    match material.type_() {
        VerificationMaterialType::Agreement(_) => {
            document
                .key_agreement
                .push(VerificationRelationship::Reference(id.clone()));
        }
        VerificationMaterialType::Authentication(_) => {
            document
                .authentication
                .push(VerificationRelationship::Reference(id.clone()));
            document
                .assertion_method
                .push(VerificationRelationship::Reference(id.clone()));
        }
    }

    document.add_context(material.type_().context());
    document
        .verification_method
        .push(VerificationMethod::from_material(id, did.clone(), material));
    Ok(())
}

fn parse_url(url: &str, did: &str) -> Result<Url, DIDPeerError> {
    Url::parse(url)
        .map_err(|e| DIDPeerError::InvalidPeerDID(format!("({did}) isn't a valid URL: {e}")))
}

/// Resolves a did:peer DID with keys published as multibase and returns the
/// DID Document as pretty printed JSON
pub fn resolve_did_peer(did: &str) -> Result<String, DIDPeerError> {
    let document = DIDPeer::resolve(did, KeyFormat::default())?;

    serde_json::to_string_pretty(&document).map_err(|e| {
        DIDPeerError::Encoding(format!(
            "Couldn't convert DID Document to JSON. Reason: {e}"
        ))
    })
}
