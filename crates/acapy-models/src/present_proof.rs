//! # Present Proof v2.0 (RFC 0454)

use acapy_core::{record, union_field, Field, JsonObject};

use crate::indy::IndyProofRequest;

record! {
    /// DIF presentation exchange request. The presentation definition is
    /// carried opaquely.
    pub struct DIFProofRequest {
        required {
            presentation_definition: JsonObject => "presentation_definition",
        }
        optional {
            options: Option<JsonObject> => "options",
        }
    }
}

record! {
    /// Presentation request member selecting DIF presentation exchange.
    pub struct DifPresRequest {
        required {
            dif: DIFProofRequest => "dif",
        }
        optional {}
    }
}

record! {
    /// Presentation request member selecting an Indy proof request.
    pub struct IndyPresRequest {
        required {
            indy: IndyProofRequest => "indy",
        }
        optional {}
    }
}

union_field! {
    /// Presentation request in one attachment format.
    pub enum V20PresRequestByFormat {
        Dif(DifPresRequest) => ["dif"],
        Indy(IndyPresRequest) => ["indy"],
    }
}

record! {
    /// Body of `POST /present-proof-2.0/send-request`.
    pub struct V20PresSendRequestRequest {
        required {
            connection_id: String => "connection_id",
            presentation_request: V20PresRequestByFormat => "presentation_request",
        }
        optional {
            auto_verify: Option<bool> => "auto_verify",
            comment: Field<String> => "comment",
            trace: Option<bool> => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acapy_core::{CodecError, Record, TaggedUnion};
    use serde_json::json;

    #[test]
    fn dif_request_round_trips() {
        let raw = json!({
            "connection_id": "c-1",
            "comment": null,
            "presentation_request": {
                "dif": {
                    "options": {"challenge": "3fa85f64", "domain": "4jt78h47fh47"},
                    "presentation_definition": {
                        "id": "32f54163-7166-48f1-93d8-ff217bdb0653",
                        "input_descriptors": [{"id": "citizenship_input_1", "schema": []}]
                    }
                }
            }
        });
        let request = V20PresSendRequestRequest::from_value(raw.clone()).unwrap();
        assert_eq!(request.presentation_request.variant_name(), "Dif");
        assert!(request.comment.is_null());
        assert_eq!(request.to_value(), raw);
    }

    #[test]
    fn indy_request_dispatches() {
        let raw = json!({
            "connection_id": "c-1",
            "presentation_request": {
                "indy": {"requested_attributes": {}, "requested_predicates": {}}
            },
            "auto_verify": true
        });
        let request = V20PresSendRequestRequest::from_value(raw.clone()).unwrap();
        match &request.presentation_request {
            V20PresRequestByFormat::Indy(indy) => {
                assert!(indy.indy.requested_attributes.is_empty());
            }
            V20PresRequestByFormat::Dif(_) => panic!("expected the indy member"),
        }
        assert_eq!(request.to_value(), raw);
    }

    #[test]
    fn dif_takes_priority_over_indy() {
        let value = json!({
            "dif": {"presentation_definition": {}},
            "indy": {"requested_attributes": {}, "requested_predicates": {}}
        });
        let decoded: V20PresRequestByFormat = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.variant_name(), "Dif");
        // The losing member's key stays with the winner as an unknown key.
        match &decoded {
            V20PresRequestByFormat::Dif(dif) => assert!(dif.contains_property("indy")),
            V20PresRequestByFormat::Indy(_) => panic!("expected the dif member"),
        }
    }

    #[test]
    fn member_failure_is_not_retried_as_another_member() {
        let err = V20PresSendRequestRequest::from_value(json!({
            "connection_id": "c-1",
            "presentation_request": {"dif": {}, "indy": {"requested_attributes": {}, "requested_predicates": {}}}
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingRequiredField { key: "presentation_definition", ref path }
                if path == "/presentation_request/dif"
        ));
    }
}
