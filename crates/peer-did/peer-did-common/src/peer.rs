//! did:peer specific tags
//!
//! See: https://identity.foundation/peer-did-method-spec/

use serde::{Deserialize, Serialize};

/// Peer DID algorithm number (numalgo)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerNumAlgo {
    /// Type 0: Inception key (wraps a did:key)
    InceptionKey = 0,
    /// Type 2: Multiple inline keys
    MultipleKeys = 2,
}

impl PeerNumAlgo {
    /// Parse numalgo from the first character of method-specific-id
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(PeerNumAlgo::InceptionKey),
            '2' => Some(PeerNumAlgo::MultipleKeys),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PeerNumAlgo::InceptionKey => '0',
            PeerNumAlgo::MultipleKeys => '2',
        }
    }
}

/// Purpose codes for did:peer type 2 entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerPurpose {
    /// Key agreement (encryption)
    Encryption,
    /// Authentication (verification)
    Verification,
    /// Service endpoint
    Service,
}

impl PeerPurpose {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'E' => Some(PeerPurpose::Encryption),
            'V' => Some(PeerPurpose::Verification),
            'S' => Some(PeerPurpose::Service),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PeerPurpose::Encryption => 'E',
            PeerPurpose::Verification => 'V',
            PeerPurpose::Service => 'S',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PeerNumAlgo, PeerPurpose};

    #[test]
    fn numalgo_chars() {
        assert_eq!(PeerNumAlgo::from_char('0'), Some(PeerNumAlgo::InceptionKey));
        assert_eq!(PeerNumAlgo::from_char('2'), Some(PeerNumAlgo::MultipleKeys));
        // Genesis documents (numalgo 1) are not supported
        assert_eq!(PeerNumAlgo::from_char('1'), None);
        assert_eq!(PeerNumAlgo::MultipleKeys.to_char(), '2');
    }

    #[test]
    fn purpose_chars() {
        for c in ['E', 'V', 'S'] {
            assert_eq!(PeerPurpose::from_char(c).map(PeerPurpose::to_char), Some(c));
        }
        assert_eq!(PeerPurpose::from_char('A'), None);
    }
}
