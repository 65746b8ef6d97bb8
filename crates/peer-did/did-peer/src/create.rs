//! Building did:peer identifiers from public keys and services

use peer_did_common::{
    PeerPurpose, VerificationMaterial, VerificationMaterialType, service::Service,
};
use tracing::debug;

use crate::{
    DIDPeer, DIDPeerError, ecnumbasis,
    peer_did::{PeerDID, PeerSegment},
    service::{SERVICE_PREFIX, encode_services},
};

impl DIDPeer {
    /// Creates a numalgo 0 did:peer from a single inception key
    ///
    /// ```
    /// use did_peer::DIDPeer;
    /// use peer_did_common::{AuthenticationKeyType, VerificationMaterial, VerificationMaterialType};
    ///
    /// let key = VerificationMaterial::from_key(
    ///     VerificationMaterialType::Authentication(AuthenticationKeyType::Ed25519VerificationKey2020),
    ///     &[0u8; 32],
    /// );
    /// let did = DIDPeer::create_algo0(&key).expect("Couldn't create did:peer");
    /// assert!(did.to_string().starts_with("did:peer:0z6Mk"));
    /// ```
    pub fn create_algo0(key: &VerificationMaterial) -> Result<PeerDID, DIDPeerError> {
        let ecnumbasis = ecnumbasis::encode(key)?;
        debug!("created did:peer:0{ecnumbasis}");

        Ok(PeerDID::InceptionKey { ecnumbasis })
    }

    /// Creates a numalgo 2 did:peer
    ///
    /// Segments are written agreement keys first, then authentication keys, then
    /// the service segment (omitted when `services` is empty). Order within each
    /// group is kept.
    pub fn create_algo2(
        agreement_keys: &[VerificationMaterial],
        authentication_keys: &[VerificationMaterial],
        services: &[Service],
    ) -> Result<PeerDID, DIDPeerError> {
        let mut segments = Vec::with_capacity(agreement_keys.len() + authentication_keys.len() + 1);

        for key in agreement_keys {
            check_purpose(key, PeerPurpose::Encryption)?;
            segments.push(PeerSegment::Agreement(ecnumbasis::encode(key)?));
        }
        for key in authentication_keys {
            check_purpose(key, PeerPurpose::Verification)?;
            segments.push(PeerSegment::Authentication(ecnumbasis::encode(key)?));
        }
        if let Some(service) = encode_services(services)? {
            let blob = service.strip_prefix(SERVICE_PREFIX).unwrap_or(&service);
            segments.push(PeerSegment::Service(blob.to_string()));
        }

        let did = PeerDID::MultipleKeys { segments };
        debug!(
            "created {did} ({} agreement, {} authentication, {} services)",
            agreement_keys.len(),
            authentication_keys.len(),
            services.len()
        );
        Ok(did)
    }
}

/// Key agreement must use X25519 and authentication Ed25519
pub(crate) fn check_purpose(
    key: &VerificationMaterial,
    purpose: PeerPurpose,
) -> Result<(), DIDPeerError> {
    let valid = matches!(
        (purpose, key.type_()),
        (PeerPurpose::Encryption, VerificationMaterialType::Agreement(_))
            | (PeerPurpose::Verification, VerificationMaterialType::Authentication(_))
    );

    if valid {
        Ok(())
    } else {
        Err(DIDPeerError::InvalidPeerDID(format!(
            "{} key can't be used for purpose '{}'",
            key.key_type(),
            purpose.to_char()
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        DIDPeer, DIDPeerError, EcnumbasisError, ecnumbasis::material_type, peer_did::PeerDID,
    };
    use peer_did_common::{KeyFormat, KeyType, VerificationMaterial, service::Service};

    fn key(key_type: KeyType, seed: u8) -> VerificationMaterial {
        VerificationMaterial::from_key(material_type(KeyFormat::Multibase, key_type), &[seed; 32])
    }

    #[test]
    fn algo0_zero_key() {
        let material = VerificationMaterial::from_key(
            material_type(KeyFormat::Multibase, KeyType::Ed25519),
            &[0u8; 32],
        );
        let did = DIDPeer::create_algo0(&material).unwrap();
        assert!(did.method_id().starts_with("0z"));
        assert!(did.to_string().starts_with("did:peer:0z6Mk"));
    }

    #[test]
    fn algo0_accepts_agreement_key() {
        let did = DIDPeer::create_algo0(&key(KeyType::X25519, 3)).unwrap();
        assert!(did.method_id().starts_with("0z6LS"));
    }

    #[test]
    fn algo0_propagates_key_size() {
        let material = VerificationMaterial::from_key(
            material_type(KeyFormat::Jwk, KeyType::Ed25519),
            &[0u8; 31],
        );
        assert_eq!(
            DIDPeer::create_algo0(&material).unwrap_err(),
            DIDPeerError::EcnumbasisCreation(EcnumbasisError::InvalidKeySize(31))
        );
    }

    #[test]
    fn algo2_segment_order() {
        let did = DIDPeer::create_algo2(
            &[key(KeyType::X25519, 1), key(KeyType::X25519, 2)],
            &[key(KeyType::Ed25519, 3)],
            &[Service::new("DIDCommMessaging", "https://example.com")],
        )
        .unwrap();

        let method_id = did.method_id();
        let codes: Vec<char> = method_id
            .split('.')
            .skip(1)
            .filter_map(|s| s.chars().next())
            .collect();
        assert_eq!(codes, ['E', 'E', 'V', 'S']);
        assert!(method_id.starts_with("2.Ez6LS"));

        // Parses back to the same value
        assert_eq!(did.to_string().parse::<PeerDID>().unwrap(), did);
    }

    #[test]
    fn algo2_without_anything() {
        let did = DIDPeer::create_algo2(&[], &[], &[]).unwrap();
        assert_eq!(did.to_string(), "did:peer:2");
    }

    #[test]
    fn algo2_without_services_has_no_service_segment() {
        let did = DIDPeer::create_algo2(&[], &[key(KeyType::Ed25519, 9)], &[]).unwrap();
        assert!(!did.method_id().contains(".S"));
        assert_eq!(did.method_id().matches('.').count(), 1);
    }

    #[test]
    fn algo2_rejects_wrong_purpose() {
        assert!(matches!(
            DIDPeer::create_algo2(&[key(KeyType::Ed25519, 1)], &[], &[]),
            Err(DIDPeerError::InvalidPeerDID(_))
        ));
        assert!(matches!(
            DIDPeer::create_algo2(&[], &[key(KeyType::X25519, 1)], &[]),
            Err(DIDPeerError::InvalidPeerDID(_))
        ));
    }

    #[test]
    fn algo2_fails_whole_on_bad_key() {
        let short = VerificationMaterial::from_key(
            material_type(KeyFormat::Base58, KeyType::Ed25519),
            &[1u8; 12],
        );
        assert_eq!(
            DIDPeer::create_algo2(&[key(KeyType::X25519, 1)], &[short], &[]).unwrap_err(),
            DIDPeerError::EcnumbasisCreation(EcnumbasisError::InvalidKeySize(12))
        );
    }
}
