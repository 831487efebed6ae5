//! # Out-of-Band Invitations (RFC 0434)

use acapy_core::record;

use crate::attachment::AttachDecorator;

record! {
    /// A DID document service block embedded in an invitation.
    pub struct Service {
        required {
            id: String => "id",
            service_type: String => "type",
        }
        optional {
            did: Option<String> => "did",
            recipient_keys: Option<Vec<String>> => "recipientKeys",
            routing_keys: Option<Vec<String>> => "routingKeys",
            service_endpoint: Option<String> => "serviceEndpoint",
        }
    }
}

record! {
    /// Free-form service description. No declared fields; everything is
    /// carried as unknown keys.
    pub struct InvitationReceiveRequestService {
        required {}
        optional {}
    }
}

record! {
    /// Body of `POST /out-of-band/receive-invitation`.
    pub struct InvitationReceiveRequest {
        required {}
        optional {
            id: Option<String> => "@id",
            message_type: Option<String> => "@type",
            handshake_protocols: Option<Vec<String>> => "handshake_protocols",
            label: Option<String> => "label",
            attachments: Option<Vec<AttachDecorator>> => "request~attach",
            service: Option<InvitationReceiveRequestService> => "service",
            service_blocks: Option<Vec<Service>> => "service_blocks",
            service_dids: Option<Vec<String>> => "service_dids",
        }
    }
}
