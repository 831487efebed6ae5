//! # Indy Proof Requests and Credentials
//!
//! Anoncreds proof-request structures and the credential summaries the
//! wallet returns when searching for credentials that satisfy a request.
//! Referent maps (`requested_attributes`, `requested_predicates`, `attrs`)
//! are string-keyed and ordered by key.

use std::collections::BTreeMap;

use acapy_core::{record, wire_enum, Field};

wire_enum! {
    /// Comparison of a predicate proof.
    pub enum IndyPredicateType {
        Lt => "<",
        Le => "<=",
        Ge => ">=",
        Gt => ">",
    }
}

/// One restriction: attribute name to required value (e.g.
/// `cred_def_id`, `schema_name`, `attr::<name>::value`).
pub type IndyRestriction = BTreeMap<String, String>;

record! {
    /// Non-revocation interval, in epoch seconds.
    pub struct IndyProofReqNonRevoked {
        required {}
        optional {
            from: Option<i64> => "from",
            to: Option<i64> => "to",
        }
    }
}

record! {
    /// A requested attribute, by single name or by a group of names.
    pub struct IndyProofReqAttrSpec {
        required {}
        optional {
            name: Option<String> => "name",
            names: Option<Vec<String>> => "names",
            non_revoked: Field<IndyProofReqNonRevoked> => "non_revoked",
            restrictions: Option<Vec<IndyRestriction>> => "restrictions",
        }
    }
}

record! {
    /// A requested predicate over an integer attribute.
    pub struct IndyProofReqPredSpec {
        required {
            name: String => "name",
            p_type: IndyPredicateType => "p_type",
            p_value: i64 => "p_value",
        }
        optional {
            non_revoked: Field<IndyProofReqNonRevoked> => "non_revoked",
            restrictions: Option<Vec<IndyRestriction>> => "restrictions",
        }
    }
}

record! {
    /// Indy proof request, with attribute and predicate referents keyed by name.
    pub struct IndyProofRequest {
        required {
            requested_attributes: BTreeMap<String, IndyProofReqAttrSpec> => "requested_attributes",
            requested_predicates: BTreeMap<String, IndyProofReqPredSpec> => "requested_predicates",
        }
        optional {
            name: Option<String> => "name",
            non_revoked: Field<IndyProofReqNonRevoked> => "non_revoked",
            nonce: Option<String> => "nonce",
            version: Option<String> => "version",
        }
    }
}

record! {
    /// A credential stored in the wallet.
    pub struct IndyCredInfo {
        required {}
        optional {
            attrs: Option<BTreeMap<String, String>> => "attrs",
            cred_def_id: Option<String> => "cred_def_id",
            cred_rev_id: Field<String> => "cred_rev_id",
            referent: Option<String> => "referent",
            rev_reg_id: Field<String> => "rev_reg_id",
            schema_id: Option<String> => "schema_id",
        }
    }
}

record! {
    /// A wallet credential matched against a proof request.
    pub struct IndyCredPrecis {
        required {}
        optional {
            cred_def_id: Option<String> => "cred_def_id",
            cred_info: Option<IndyCredInfo> => "cred_info",
            cred_rev: Option<String> => "cred_rev",
            interval: Option<IndyProofReqNonRevoked> => "interval",
            presentation_referents: Option<Vec<String>> => "presentation_referents",
            rev_reg_id: Option<String> => "rev_reg_id",
            schema_id: Option<String> => "schema_id",
        }
    }
}

record! {
    /// Response of `GET /credentials`.
    pub struct CredInfoList {
        required {}
        optional {
            results: Option<Vec<IndyCredInfo>> => "results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acapy_core::{CodecError, Record};
    use serde_json::json;

    fn proof_request() -> serde_json::Value {
        json!({
            "name": "Proof of Education",
            "version": "1.0",
            "nonce": "1234567890",
            "requested_attributes": {
                "0_name_uuid": {
                    "name": "name",
                    "restrictions": [{"schema_name": "degree schema"}]
                },
                "0_self_attested": {"names": ["email", "phone"], "non_revoked": null}
            },
            "requested_predicates": {
                "0_age_GE_uuid": {
                    "name": "age",
                    "p_type": ">=",
                    "p_value": 18,
                    "non_revoked": {"to": 1640995199}
                }
            }
        })
    }

    #[test]
    fn proof_request_round_trips() {
        let request = IndyProofRequest::from_value(proof_request()).unwrap();
        assert_eq!(request.requested_attributes.len(), 2);
        let group = &request.requested_attributes["0_self_attested"];
        assert!(group.non_revoked.is_null());
        let pred = &request.requested_predicates["0_age_GE_uuid"];
        assert_eq!(pred.p_type, IndyPredicateType::Ge);
        assert_eq!(pred.p_value, 18);
        assert_eq!(
            pred.non_revoked.value().and_then(|nr| nr.to),
            Some(1_640_995_199)
        );
        assert!(request.non_revoked.is_absent());
        assert_eq!(request.to_value(), proof_request());
    }

    #[test]
    fn bad_predicate_is_located_under_its_referent() {
        let mut raw = proof_request();
        raw["requested_predicates"]["0_age_GE_uuid"]["p_type"] = json!("==");
        let err = IndyProofRequest::from_value(raw).unwrap_err();
        match err {
            CodecError::MalformedElement { path, expected, .. } => {
                assert_eq!(path, "/requested_predicates/0_age_GE_uuid/p_type");
                assert_eq!(expected, "one of: <, <=, >=, >");
            }
            other => panic!("expected MalformedElement, got {other}"),
        }
    }

    #[test]
    fn restriction_values_must_be_strings() {
        let mut raw = proof_request();
        raw["requested_attributes"]["0_name_uuid"]["restrictions"][0]["schema_version"] = json!(1);
        let err = IndyProofRequest::from_value(raw).unwrap_err();
        assert_eq!(
            err.path(),
            Some("/requested_attributes/0_name_uuid/restrictions/0/schema_version")
        );
    }

    #[test]
    fn cred_precis_with_nullable_revocation() {
        let raw = json!({
            "cred_info": {
                "referent": "cred-1",
                "attrs": {"name": "Alice", "age": "30"},
                "schema_id": "WgWxqztrNooG92RXvxSTWv:2:degree schema:1.0",
                "cred_def_id": "WgWxqztrNooG92RXvxSTWv:3:CL:20:tag",
                "rev_reg_id": null,
                "cred_rev_id": null
            },
            "interval": {"from": 0, "to": 1640995199},
            "presentation_referents": ["0_name_uuid"]
        });
        let precis = IndyCredPrecis::from_value(raw.clone()).unwrap();
        let info = precis.cred_info.as_ref().unwrap();
        assert!(info.rev_reg_id.is_null());
        assert_eq!(
            info.attrs.as_ref().and_then(|a| a.get("age")).map(String::as_str),
            Some("30")
        );
        assert_eq!(precis.to_value(), raw);

        let list = CredInfoList::from_value(json!({"results": [raw["cred_info"].clone()]})).unwrap();
        assert_eq!(list.results.as_ref().map(Vec::len), Some(1));
    }
}
