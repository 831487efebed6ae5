//! # Connections (RFC 0160)
//!
//! Invitation creation and receipt, and the connection record the agent
//! keeps for each pairwise relationship.

use acapy_core::{record, wire_enum, Field, JsonObject};

wire_enum! {
    /// Whether the agent accepts connection requests on its own.
    pub enum ConnRecordAccept {
        Manual => "manual",
        Auto => "auto",
    }
}

wire_enum! {
    /// Role of the other party in the connection.
    pub enum ConnRecordTheirRole {
        Invitee => "invitee",
        Requester => "requester",
        Inviter => "inviter",
        Responder => "responder",
    }
}

wire_enum! {
    /// How many times an invitation may be used.
    pub enum ConnRecordInvitationMode {
        Once => "once",
        Multi => "multi",
        Static => "static",
    }
}

wire_enum! {
    /// Protocol used to establish the connection.
    pub enum ConnRecordConnectionProtocol {
        Connections => "connections/1.0",
        DidExchange => "didexchange/1.0",
    }
}

record! {
    /// Body of `POST /connections/create-invitation`.
    pub struct CreateInvitationRequest {
        required {}
        optional {
            mediation_id: Option<String> => "mediation_id",
            metadata: Option<JsonObject> => "metadata",
            my_label: Option<String> => "my_label",
            recipient_keys: Option<Vec<String>> => "recipient_keys",
            routing_keys: Option<Vec<String>> => "routing_keys",
            service_endpoint: Option<String> => "service_endpoint",
        }
    }
}

record! {
    /// A connection invitation message.
    pub struct ConnectionInvitation {
        required {}
        optional {
            id: Option<String> => "@id",
            message_type: Option<String> => "@type",
            did: Option<String> => "did",
            image_url: Field<String> => "imageUrl",
            label: Option<String> => "label",
            recipient_keys: Option<Vec<String>> => "recipientKeys",
            routing_keys: Option<Vec<String>> => "routingKeys",
            service_endpoint: Option<String> => "serviceEndpoint",
        }
    }
}

record! {
    /// Body of `POST /connections/receive-invitation`: the invitation as
    /// the inviter published it.
    pub struct ReceiveInvitationRequest {
        required {}
        optional {
            id: Option<String> => "@id",
            message_type: Option<String> => "@type",
            did: Option<String> => "did",
            image_url: Field<String> => "imageUrl",
            label: Option<String> => "label",
            recipient_keys: Option<Vec<String>> => "recipientKeys",
            routing_keys: Option<Vec<String>> => "routingKeys",
            service_endpoint: Option<String> => "serviceEndpoint",
        }
    }
}

/// Field-for-field move; unknown keys of the invitation are kept.
impl From<ConnectionInvitation> for ReceiveInvitationRequest {
    fn from(invitation: ConnectionInvitation) -> Self {
        let ConnectionInvitation {
            id,
            message_type,
            did,
            image_url,
            label,
            recipient_keys,
            routing_keys,
            service_endpoint,
            additional_properties,
        } = invitation;
        let mut request = Self::new();
        request.id = id;
        request.message_type = message_type;
        request.did = did;
        request.image_url = image_url;
        request.label = label;
        request.recipient_keys = recipient_keys;
        request.routing_keys = routing_keys;
        request.service_endpoint = service_endpoint;
        request.additional_properties = additional_properties;
        request
    }
}

record! {
    /// Response of `POST /connections/create-invitation`.
    pub struct InvitationResult {
        required {}
        optional {
            connection_id: Option<String> => "connection_id",
            invitation: Option<ConnectionInvitation> => "invitation",
            invitation_url: Option<String> => "invitation_url",
        }
    }
}

record! {
    /// The agent's record of one connection.
    pub struct ConnRecord {
        required {}
        optional {
            accept: Option<ConnRecordAccept> => "accept",
            alias: Option<String> => "alias",
            connection_id: Option<String> => "connection_id",
            connection_protocol: Option<ConnRecordConnectionProtocol> => "connection_protocol",
            created_at: Option<String> => "created_at",
            error_msg: Option<String> => "error_msg",
            inbound_connection_id: Option<String> => "inbound_connection_id",
            invitation_key: Option<String> => "invitation_key",
            invitation_mode: Option<ConnRecordInvitationMode> => "invitation_mode",
            invitation_msg_id: Option<String> => "invitation_msg_id",
            my_did: Option<String> => "my_did",
            request_id: Option<String> => "request_id",
            rfc23_state: Option<String> => "rfc23_state",
            routing_state: Option<String> => "routing_state",
            state: Option<String> => "state",
            their_did: Option<String> => "their_did",
            their_label: Option<String> => "their_label",
            their_public_did: Option<String> => "their_public_did",
            their_role: Option<ConnRecordTheirRole> => "their_role",
            updated_at: Option<String> => "updated_at",
        }
    }
}
