//! https://www.w3.org/TR/cid-1.0/#services

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Document;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<Url>,

    #[serde(rename = "type")]
    pub type_: String,

    /// serviceEndpoint
    pub service_endpoint: String,

    /// `None` and `Some(vec![])` are different values and both survive a round trip
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub routing_keys: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub accept: Option<Vec<String>>,
}

impl Service {
    /// A service without an id, routing keys or accept list
    pub fn new(type_: impl Into<String>, service_endpoint: impl Into<String>) -> Self {
        Service {
            id: None,
            type_: type_.into(),
            service_endpoint: service_endpoint.into(),
            routing_keys: None,
            accept: None,
        }
    }

    pub fn with_routing_keys(mut self, routing_keys: Vec<String>) -> Self {
        self.routing_keys = Some(routing_keys);
        self
    }

    pub fn with_accept(mut self, accept: Vec<String>) -> Self {
        self.accept = Some(accept);
        self
    }
}

impl Document {
    /// Returns a refernce to the first service with the given id, if it exists
    /// id: the fragment text after the `#` in the full service id URL
    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.service.iter().find(|s| {
            if let Some(sid) = &s.id {
                sid.as_str().ends_with(&["#", id].concat())
            } else {
                false
            }
        })
    }
}
