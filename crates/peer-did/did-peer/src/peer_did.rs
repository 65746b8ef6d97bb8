//! did:peer identifier structure
//!
//! Only checks the shape of an identifier. Keys and services inside it are
//! decoded when the identifier is resolved.

use std::{fmt, str::FromStr};

use peer_did_common::{PeerNumAlgo, PeerPurpose};
use tracing::warn;

use crate::DIDPeerError;

pub const DID_PEER_PREFIX: &str = "did:peer:";

/// One dot-separated entry of a numalgo 2 identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerSegment {
    /// `E` + ecnumbasis
    Agreement(String),
    /// `V` + ecnumbasis
    Authentication(String),
    /// `S` + compact service block
    Service(String),
}

impl PeerSegment {
    pub fn purpose(&self) -> PeerPurpose {
        match self {
            PeerSegment::Agreement(_) => PeerPurpose::Encryption,
            PeerSegment::Authentication(_) => PeerPurpose::Verification,
            PeerSegment::Service(_) => PeerPurpose::Service,
        }
    }

    /// Value without the purpose code
    pub fn value(&self) -> &str {
        match self {
            PeerSegment::Agreement(value)
            | PeerSegment::Authentication(value)
            | PeerSegment::Service(value) => value,
        }
    }
}

impl FromStr for PeerSegment {
    type Err = DIDPeerError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let mut chars = segment.chars();
        let code = chars
            .next()
            .ok_or_else(|| DIDPeerError::InvalidPeerDID("empty did:peer:2 segment".into()))?;
        let value = chars.as_str();
        if value.is_empty() {
            return Err(DIDPeerError::InvalidPeerDID(format!(
                "did:peer:2 segment '{code}' has no value"
            )));
        }

        match PeerPurpose::from_char(code) {
            Some(PeerPurpose::Encryption) => Ok(PeerSegment::Agreement(value.to_string())),
            Some(PeerPurpose::Verification) => Ok(PeerSegment::Authentication(value.to_string())),
            Some(PeerPurpose::Service) => Ok(PeerSegment::Service(value.to_string())),
            None => Err(DIDPeerError::InvalidPeerDID(format!(
                "invalid did:peer:2 purpose code: '{code}'"
            ))),
        }
    }
}

impl fmt::Display for PeerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.purpose().to_char(), self.value())
    }
}

/// A parsed did:peer identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerDID {
    /// numalgo 0: a single inception key
    InceptionKey { ecnumbasis: String },
    /// numalgo 2: inline keys and at most one service segment
    MultipleKeys { segments: Vec<PeerSegment> },
}

impl PeerDID {
    pub fn algo(&self) -> PeerNumAlgo {
        match self {
            PeerDID::InceptionKey { .. } => PeerNumAlgo::InceptionKey,
            PeerDID::MultipleKeys { .. } => PeerNumAlgo::MultipleKeys,
        }
    }

    /// Method-specific id: everything after `did:peer:`
    pub fn method_id(&self) -> String {
        match self {
            PeerDID::InceptionKey { ecnumbasis } => format!("0{ecnumbasis}"),
            PeerDID::MultipleKeys { segments } => {
                let mut id = String::from("2");
                for segment in segments {
                    id.push('.');
                    id.push_str(&segment.to_string());
                }
                id
            }
        }
    }

    /// Parses a method-specific id (`0z6Mk...` or `2.Ez6LS...`)
    pub fn parse_method_id(method_id: &str) -> Result<Self, DIDPeerError> {
        let mut chars = method_id.chars();
        let algo_char = chars
            .next()
            .ok_or_else(|| DIDPeerError::InvalidPeerDID("empty method-specific id".into()))?;
        let rest = chars.as_str();

        let algo = PeerNumAlgo::from_char(algo_char).ok_or_else(|| {
            DIDPeerError::InvalidPeerDID(format!("unsupported numalgo: '{algo_char}'"))
        })?;

        match algo {
            PeerNumAlgo::InceptionKey => {
                if rest.is_empty() {
                    return Err(DIDPeerError::InvalidPeerDID(
                        "did:peer:0 has no inception key".into(),
                    ));
                }
                Ok(PeerDID::InceptionKey {
                    ecnumbasis: rest.to_string(),
                })
            }
            PeerNumAlgo::MultipleKeys => {
                if rest.is_empty() {
                    return Ok(PeerDID::MultipleKeys {
                        segments: Vec::new(),
                    });
                }
                let Some(rest) = rest.strip_prefix('.') else {
                    return Err(DIDPeerError::InvalidPeerDID(
                        "did:peer:2 must have format 2.<segments>".into(),
                    ));
                };

                let segments = rest
                    .split('.')
                    .map(PeerSegment::from_str)
                    .collect::<Result<Vec<_>, _>>()?;

                let services = segments
                    .iter()
                    .filter(|s| matches!(s, PeerSegment::Service(_)))
                    .count();
                if services > 1 {
                    return Err(DIDPeerError::InvalidPeerDID(format!(
                        "did:peer:2 allows one service segment, found {services}"
                    )));
                }

                Ok(PeerDID::MultipleKeys { segments })
            }
        }
    }
}

impl FromStr for PeerDID {
    type Err = DIDPeerError;

    fn from_str(did: &str) -> Result<Self, Self::Err> {
        let Some(method_id) = did.strip_prefix(DID_PEER_PREFIX) else {
            warn!("Not a did:peer DID: {did}");
            return Err(DIDPeerError::InvalidPeerDID(format!(
                "({did}) doesn't start with {DID_PEER_PREFIX}"
            )));
        };

        PeerDID::parse_method_id(method_id).inspect_err(|e| warn!("Invalid DID ({did}): {e}"))
    }
}

impl fmt::Display for PeerDID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DID_PEER_PREFIX}{}", self.method_id())
    }
}

#[cfg(test)]
mod tests {
    use super::{PeerDID, PeerSegment};
    use crate::DIDPeerError;
    use peer_did_common::{PeerNumAlgo, PeerPurpose};

    const DID_0: &str = "did:peer:0z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK";
    const DID_2: &str = "did:peer:2.Ez6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc.Vz6MkqRYqQiSgvZQdnBytw86Qbs2ZWUkGv22od935YF4s8M7V.SeyJzIjoiaHR0cHM6Ly9leGFtcGxlLmNvbSIsInQiOiJkbSJ9";

    #[test]
    fn parse_algo_0() {
        let did: PeerDID = DID_0.parse().unwrap();
        assert_eq!(did.algo(), PeerNumAlgo::InceptionKey);
        assert_eq!(
            did,
            PeerDID::InceptionKey {
                ecnumbasis: "z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK".into()
            }
        );
        assert_eq!(did.to_string(), DID_0);
    }

    #[test]
    fn parse_algo_2() {
        let did: PeerDID = DID_2.parse().unwrap();
        assert_eq!(did.algo(), PeerNumAlgo::MultipleKeys);

        let PeerDID::MultipleKeys { segments } = &did else {
            panic!("expected numalgo 2");
        };
        let purposes: Vec<PeerPurpose> = segments.iter().map(PeerSegment::purpose).collect();
        assert_eq!(
            purposes,
            [
                PeerPurpose::Encryption,
                PeerPurpose::Verification,
                PeerPurpose::Service
            ]
        );
        assert_eq!(
            segments[0].value(),
            "z6LSbysY2xFMRpGMhb7tFTLMpeuPRaqaWM1yECx2AtzE3KCc"
        );
        assert_eq!(did.to_string(), DID_2);
    }

    #[test]
    fn algo_2_without_segments() {
        let did: PeerDID = "did:peer:2".parse().unwrap();
        assert_eq!(did, PeerDID::MultipleKeys { segments: vec![] });
        assert_eq!(did.method_id(), "2");
    }

    #[test]
    fn rejects_malformed() {
        for did in [
            "",
            "did:peer:",
            "did:key:z6MkhaXgBZDvotDkL5257faiztiGiC2QtKLGpbnnEGta2doK",
            "did:peer:1zQmZMygzYqNwU6Uhmewx5Xepf2VLp5S4HLSwwgf2aiKZuwa",
            "did:peer:3zQm",
            "did:peer:0",
            "did:peer:2Ez6LS",
            "did:peer:2.",
            "did:peer:2.Ez6LS..Vz6Mk",
            "did:peer:2.V",
            "did:peer:2.Az6Mk",
            "did:peer:2.SeyJ9.SeyJ9",
        ] {
            assert!(
                matches!(did.parse::<PeerDID>(), Err(DIDPeerError::InvalidPeerDID(_))),
                "{did}"
            );
        }
    }

    #[test]
    fn segment_order_is_kept() {
        let did: PeerDID = "did:peer:2.Vz6Mk1.Ez6LS1".parse().unwrap();
        assert_eq!(did.method_id(), "2.Vz6Mk1.Ez6LS1");
    }
}
