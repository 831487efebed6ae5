//! # Attachments
//!
//! The `~attach` decorator carried by DIDComm messages (`request~attach`
//! on out-of-band invitations, `offers~attach` and friends on credential
//! exchange messages). Payloads are opaque: base64, inline JSON, links or a
//! JWS envelope.

use acapy_core::{record, JsonObject};
use serde_json::Value;
use uuid::Uuid;

record! {
    /// Attachment content. Exactly which members are populated depends on
    /// the sender.
    pub struct AttachDecoratorData {
        required {}
        optional {
            base64: Option<String> => "base64",
            json: Option<Value> => "json",
            /// Detached JWS over the content.
            jws: Option<JsonObject> => "jws",
            links: Option<Vec<String>> => "links",
            sha256: Option<String> => "sha256",
        }
    }
}

record! {
    /// A single attachment.
    pub struct AttachDecorator {
        required {
            data: AttachDecoratorData => "data",
        }
        optional {
            id: Option<String> => "@id",
            byte_count: Option<i64> => "byte_count",
            description: Option<String> => "description",
            filename: Option<String> => "filename",
            lastmod_time: Option<String> => "lastmod_time",
            mime_type: Option<String> => "mime-type",
        }
    }
}

impl AttachDecorator {
    /// Wrap a JSON payload as an inline attachment with a fresh `@id`.
    pub fn from_json_payload(payload: impl Into<Value>) -> Self {
        let mut data = AttachDecoratorData::new();
        data.json = Some(payload.into());

        let mut attachment = Self::new(data);
        attachment.id = Some(Uuid::new_v4().to_string());
        attachment.mime_type = Some("application/json".to_string());
        attachment
    }

    /// The inline JSON payload, if this attachment carries one.
    pub fn json_payload(&self) -> Option<&Value> {
        self.data.json.as_ref()
    }
}
