/*!
 * DID Service specific methods for Peer DID
 *
 * Services are packed into a single `S` segment: compact JSON with the
 * abbreviated keys `s`, `r`, `a`, `t` (in that order), base64url without padding.
 * A single service is written as an object, several as an array.
 */

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use peer_did_common::service::Service;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::DIDPeerError;

pub(crate) const SERVICE_PREFIX: char = 'S';

/// Service type values and their abbreviations
const TYPE_ABBREVIATIONS: [(&str, &str); 1] = [("DIDCommMessaging", "dm")];

fn abbreviate(type_: &str) -> &str {
    TYPE_ABBREVIATIONS
        .iter()
        .find(|(long, _)| *long == type_)
        .map_or(type_, |(_, short)| short)
}

fn expand(type_: &str) -> &str {
    TYPE_ABBREVIATIONS
        .iter()
        .find(|(_, short)| *short == type_)
        .map_or(type_, |(long, _)| long)
}

/// DID Service structure in abbreviated format
///
/// Field declaration order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PeerDIDService {
    /// serviceEndpoint
    s: String,
    /// routingKeys
    #[serde(skip_serializing_if = "Option::is_none", default)]
    r: Option<Vec<String>>,
    /// accept
    #[serde(skip_serializing_if = "Option::is_none", default)]
    a: Option<Vec<String>>,
    /// type (abbreviated)
    t: String,
}

impl From<&Service> for PeerDIDService {
    fn from(service: &Service) -> Self {
        PeerDIDService {
            s: service.service_endpoint.clone(),
            r: service.routing_keys.clone(),
            a: service.accept.clone(),
            t: abbreviate(&service.type_).to_string(),
        }
    }
}

impl PeerDIDService {
    /// Expands into a full Service with the id `{did}#{type}-{index}`
    ///
    /// The id is a parsed URL, so characters not allowed in a fragment (spaces and
    /// the like) come out percent-encoded.
    fn into_service(self, did: &str, index: usize) -> Result<Service, DIDPeerError> {
        let type_ = expand(&self.t).to_string();
        let id = Url::parse(&format!("{did}#{}-{index}", type_.to_lowercase())).map_err(|e| {
            DIDPeerError::InvalidService(format!("Couldn't create service id for ({did}): {e}"))
        })?;

        Ok(Service {
            id: Some(id),
            type_,
            service_endpoint: self.s,
            routing_keys: self.r,
            accept: self.a,
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PeerDIDServices {
    One(PeerDIDService),
    Many(Vec<PeerDIDService>),
}

/// Encodes services into a service segment (`S...`)
///
/// Returns `None` when there are no services, so no segment is written.
pub fn encode_services(services: &[Service]) -> Result<Option<String>, DIDPeerError> {
    let block = match services {
        [] => return Ok(None),
        [service] => PeerDIDServices::One(service.into()),
        _ => PeerDIDServices::Many(services.iter().map(PeerDIDService::from).collect()),
    };

    let json = serde_json::to_string(&block)
        .map_err(|e| DIDPeerError::Encoding(format!("Couldn't serialize services: {e}")))?;

    Ok(Some(format!(
        "{SERVICE_PREFIX}{}",
        BASE64_URL_SAFE_NO_PAD.encode(json)
    )))
}

/// Decodes a service segment, with or without its `S` prefix
///
/// Ids are numbered per service type, starting at 1 for each type. The result is
/// grouped by type, groups ordered by the first appearance of their type.
pub fn decode_services(did: &str, encoded: &str) -> Result<Vec<Service>, DIDPeerError> {
    let encoded = encoded.strip_prefix(SERVICE_PREFIX).unwrap_or(encoded);

    let raw = BASE64_URL_SAFE_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .map_err(|e| {
            DIDPeerError::InvalidService(format!(
                "Failed to decode base64 string: ({encoded}) Reason: {e}"
            ))
        })?;
    let json = String::from_utf8(raw)
        .map_err(|e| DIDPeerError::InvalidService(format!("Service isn't valid UTF-8: {e}")))?;

    let services = serde_json::from_str::<PeerDIDServices>(&json).map_err(|e| {
        DIDPeerError::InvalidService(format!(
            "Failed to deserialize service: ({json}) Reason: {e}"
        ))
    })?;

    match services {
        PeerDIDServices::One(service) => Ok(vec![service.into_service(did, 1)?]),
        PeerDIDServices::Many(services) => {
            // Group on the expanded type, `dm` and `DIDCommMessaging` are the same type
            let mut groups: Vec<(String, Vec<PeerDIDService>)> = Vec::new();
            for service in services {
                let type_ = expand(&service.t).to_string();
                match groups.iter_mut().find(|(t, _)| *t == type_) {
                    Some((_, group)) => group.push(service),
                    None => groups.push((type_, vec![service])),
                }
            }

            groups
                .into_iter()
                .flat_map(|(_, group)| {
                    group
                        .into_iter()
                        .enumerate()
                        .map(|(idx, service)| service.into_service(did, idx + 1))
                })
                .collect()
        }
    }
}
