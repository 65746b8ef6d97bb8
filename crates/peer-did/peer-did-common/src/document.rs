//! Lookup helpers on [`Document`]

use crate::{
    Document,
    verification_method::{VerificationMethod, VerificationRelationship},
};

pub trait DocumentExt {
    /// Does this DID contain authentication verification_method with the given id?
    fn contains_authentication(&self, id: &str) -> bool;

    /// Does this DID contain a key agreement with the given id?
    fn contains_key_agreement(&self, id: &str) -> bool;

    /// find_key_agreement or return all
    /// Returns fully defined Vec of key_agreement id's
    fn find_key_agreement<'a>(&'a self, id: Option<&'a str>) -> Vec<&'a str>;

    /// Returns a DID Verification Method if found by ID
    fn get_verification_method(&self, id: &str) -> Option<&VerificationMethod>;
}

fn contains(relationships: &[VerificationRelationship], id: &str) -> bool {
    relationships.iter().any(|vm| vm.get_id() == id)
}

impl DocumentExt for Document {
    fn contains_authentication(&self, id: &str) -> bool {
        contains(&self.authentication, id)
    }

    fn contains_key_agreement(&self, id: &str) -> bool {
        contains(&self.key_agreement, id)
    }

    /// Finds a specific key_id or returns all key_agreement ID's
    fn find_key_agreement<'a>(&'a self, kid: Option<&'a str>) -> Vec<&'a str> {
        if let Some(kid) = kid {
            if self.contains_key_agreement(kid) {
                vec![kid]
            } else {
                vec![]
            }
        } else {
            self.key_agreement.iter().map(|ka| ka.get_id()).collect()
        }
    }

    fn get_verification_method(&self, id: &str) -> Option<&VerificationMethod> {
        self.verification_method
            .iter()
            .find(|vm| vm.id.as_str() == id)
    }
}
