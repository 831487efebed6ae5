//! # Issue Credential v2.0 (RFC 0453)
//!
//! Request bodies for offering, creating and sending credentials, and the
//! exchange records the agent keeps while a credential is in flight.
//!
//! ## Credential filters
//!
//! The `filter` of every request is a [`V20CredFilter`]: either an Indy
//! filter (selects a credential definition) or a JSON-LD proof detail (the
//! credential body plus proof options). Which one a value holds is decided
//! by the key it carries, `indy` before `ld_proof`.
//!
//! The LD-proof credential body is carried as an opaque JSON object. Only
//! the proof options are typed.

use acapy_core::{record, union_field, wire_enum, Field, JsonObject};

record! {
    /// One attribute of a credential preview.
    pub struct V20CredAttrSpec {
        required {
            name: String => "name",
            value: String => "value",
        }
        optional {
            /// MIME type of the value; `null` means the default (plain text).
            mime_type: Field<String> => "mime-type",
        }
    }
}

record! {
    /// The attribute list shown to the holder before issuance.
    pub struct V20CredPreview {
        required {
            attributes: Vec<V20CredAttrSpec> => "attributes",
        }
        optional {
            message_type: Option<String> => "@type",
        }
    }
}

impl V20CredPreview {
    /// Build a preview from `(name, value)` pairs, in order.
    pub fn from_attributes<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            attributes
                .into_iter()
                .map(|(name, value)| V20CredAttrSpec::new(name, value))
                .collect::<Vec<_>>(),
        )
    }

    /// Value of the named attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

record! {
    /// Indy credential definition selector.
    pub struct V20CredFilterIndy {
        required {}
        optional {
            cred_def_id: Option<String> => "cred_def_id",
            issuer_did: Option<String> => "issuer_did",
            schema_id: Option<String> => "schema_id",
            schema_issuer_did: Option<String> => "schema_issuer_did",
            schema_name: Option<String> => "schema_name",
            schema_version: Option<String> => "schema_version",
        }
    }
}

record! {
    /// Linked-data proof options.
    pub struct LDProofVCDetailOptions {
        required {
            proof_type: String => "proofType",
        }
        optional {
            challenge: Option<String> => "challenge",
            created: Option<String> => "created",
            credential_status: Option<JsonObject> => "credentialStatus",
            domain: Option<String> => "domain",
            proof_purpose: Option<String> => "proofPurpose",
        }
    }
}

record! {
    /// A W3C credential to be issued with a linked-data proof.
    pub struct LDProofVCDetail {
        required {
            credential: JsonObject => "credential",
            options: LDProofVCDetailOptions => "options",
        }
        optional {}
    }
}

record! {
    /// Filter member selecting Indy issuance.
    pub struct IndyCredFilter {
        required {
            indy: V20CredFilterIndy => "indy",
        }
        optional {}
    }
}

record! {
    /// Filter member selecting JSON-LD issuance.
    pub struct LdProofCredFilter {
        required {
            ld_proof: LDProofVCDetail => "ld_proof",
        }
        optional {}
    }
}

union_field! {
    /// Credential format filter of an issue-credential request.
    pub enum V20CredFilter {
        Indy(IndyCredFilter) => ["indy"],
        LdProof(LdProofCredFilter) => ["ld_proof"],
    }
}

impl From<V20CredFilterIndy> for V20CredFilter {
    fn from(indy: V20CredFilterIndy) -> Self {
        Self::Indy(IndyCredFilter::new(indy))
    }
}

impl From<LDProofVCDetail> for V20CredFilter {
    fn from(detail: LDProofVCDetail) -> Self {
        Self::LdProof(LdProofCredFilter::new(detail))
    }
}

record! {
    /// Body of `POST /issue-credential-2.0/send-offer`.
    pub struct V20CredOfferRequest {
        required {
            connection_id: String => "connection_id",
            credential_preview: V20CredPreview => "credential_preview",
            filter: V20CredFilter => "filter",
        }
        optional {
            auto_issue: Option<bool> => "auto_issue",
            auto_remove: Option<bool> => "auto_remove",
            comment: Field<String> => "comment",
            trace: Option<bool> => "trace",
        }
    }
}

record! {
    /// Body of `POST /issue-credential-2.0/create`.
    pub struct V20CredCreate {
        required {
            credential_preview: V20CredPreview => "credential_preview",
            filter: V20CredFilter => "filter",
        }
        optional {
            auto_remove: Option<bool> => "auto_remove",
            comment: Field<String> => "comment",
            trace: Option<bool> => "trace",
        }
    }
}

record! {
    /// Body of `POST /issue-credential-2.0/send`: offer, issue and store in
    /// one automated exchange.
    pub struct V20CredSendRequest {
        required {
            connection_id: String => "connection_id",
            filter: V20CredFilter => "filter",
        }
        optional {
            auto_remove: Option<bool> => "auto_remove",
            comment: Field<String> => "comment",
            credential_preview: Option<V20CredPreview> => "credential_preview",
            trace: Option<bool> => "trace",
        }
    }
}

wire_enum! {
    /// Side of the exchange this agent plays.
    pub enum V20CredExRecordRole {
        Issuer => "issuer",
        Holder => "holder",
    }
}

wire_enum! {
    /// Whether this agent or its peer started the exchange.
    pub enum V20CredExRecordInitiator {
        SelfInitiated => "self",
        External => "external",
    }
}

record! {
    /// Format-independent credential exchange record.
    ///
    /// The protocol messages (`cred_offer`, `cred_issue` and so on) are kept
    /// as opaque objects.
    pub struct V20CredExRecord {
        required {}
        optional {
            auto_issue: Option<bool> => "auto_issue",
            auto_offer: Option<bool> => "auto_offer",
            auto_remove: Option<bool> => "auto_remove",
            by_format: Option<JsonObject> => "by_format",
            conn_id: Option<String> => "conn_id",
            created_at: Option<String> => "created_at",
            cred_ex_id: Option<String> => "cred_ex_id",
            cred_issue: Option<JsonObject> => "cred_issue",
            cred_offer: Option<JsonObject> => "cred_offer",
            cred_preview: Option<V20CredPreview> => "cred_preview",
            cred_proposal: Option<JsonObject> => "cred_proposal",
            cred_request: Option<JsonObject> => "cred_request",
            error_msg: Option<String> => "error_msg",
            initiator: Option<V20CredExRecordInitiator> => "initiator",
            parent_thread_id: Option<String> => "parent_thread_id",
            role: Option<V20CredExRecordRole> => "role",
            state: Option<String> => "state",
            thread_id: Option<String> => "thread_id",
            trace: Option<bool> => "trace",
            updated_at: Option<String> => "updated_at",
        }
    }
}

record! {
    /// Indy-specific detail of a credential exchange.
    pub struct V20CredExRecordIndy {
        required {}
        optional {
            created_at: Option<String> => "created_at",
            cred_ex_id: Option<String> => "cred_ex_id",
            cred_ex_indy_id: Option<String> => "cred_ex_indy_id",
            cred_id_stored: Option<String> => "cred_id_stored",
            cred_request_metadata: Option<JsonObject> => "cred_request_metadata",
            cred_rev_id: Option<String> => "cred_rev_id",
            rev_reg_id: Option<String> => "rev_reg_id",
            state: Option<String> => "state",
            updated_at: Option<String> => "updated_at",
        }
    }
}

record! {
    /// JSON-LD-specific detail of a credential exchange.
    pub struct V20CredExRecordLDProof {
        required {}
        optional {
            created_at: Option<String> => "created_at",
            cred_ex_id: Option<String> => "cred_ex_id",
            cred_ex_ld_proof_id: Option<String> => "cred_ex_ld_proof_id",
            cred_id_stored: Option<String> => "cred_id_stored",
            state: Option<String> => "state",
            updated_at: Option<String> => "updated_at",
        }
    }
}

record! {
    /// DIF-specific detail of a credential exchange.
    pub struct V20CredExRecordDIF {
        required {}
        optional {
            created_at: Option<String> => "created_at",
            cred_ex_dif_id: Option<String> => "cred_ex_dif_id",
            cred_ex_id: Option<String> => "cred_ex_id",
            item: Option<String> => "item",
            state: Option<String> => "state",
            updated_at: Option<String> => "updated_at",
        }
    }
}

record! {
    /// A credential exchange record with its per-format details.
    pub struct V20CredExRecordDetail {
        required {}
        optional {
            cred_ex_record: Option<V20CredExRecord> => "cred_ex_record",
            dif: Option<V20CredExRecordDIF> => "dif",
            indy: Option<V20CredExRecordIndy> => "indy",
            ld_proof: Option<V20CredExRecordLDProof> => "ld_proof",
        }
    }
}

record! {
    /// Response of `GET /issue-credential-2.0/records`.
    pub struct V20CredExRecordListResult {
        required {}
        optional {
            results: Option<Vec<V20CredExRecordDetail>> => "results",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acapy_core::{CodecError, Record, TaggedUnion};
    use serde_json::{json, Value};

    fn ld_proof_request() -> Value {
        json!({
            "connection_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "auto_remove": false,
            "comment": "nothing",
            "filter": {
                "ld_proof": {
                    "credential": {
                        "@context": [
                            "https://www.w3.org/2018/credentials/v1",
                            "https://www.w3.org/2018/credentials/examples/v1"
                        ],
                        "type": ["VerifiableCredential", "UniversityDegreeCredential"],
                        "issuer": "did:key:z6MkgKA7yrw5kYSiDuQFcye4bMaJpcfHFry3Bx45pdWh3s8i",
                        "issuanceDate": "2021-04-12",
                        "credentialSubject": {
                            "degree": {
                                "type": "BachelorDegree",
                                "name": "Bachelor of Science and Arts"
                            }
                        }
                    },
                    "options": {"proofType": "Ed25519Signature2018"}
                }
            }
        })
    }

    #[test]
    fn send_request_dispatches_ld_proof() {
        let request = V20CredSendRequest::from_value(ld_proof_request()).unwrap();
        assert_eq!(request.auto_remove, Some(false));
        assert_eq!(request.comment.value().map(String::as_str), Some("nothing"));
        match &request.filter {
            V20CredFilter::LdProof(f) => {
                assert_eq!(f.ld_proof.options.proof_type, "Ed25519Signature2018");
                assert!(f.ld_proof.credential.contains_key("credentialSubject"));
            }
            V20CredFilter::Indy(_) => panic!("expected the ld_proof member"),
        }
        assert_eq!(request.to_value(), ld_proof_request());
    }

    #[test]
    fn missing_proof_type_is_located() {
        let mut raw = ld_proof_request();
        raw["filter"]["ld_proof"]["options"] = json!({"proofPurpose": "assertionMethod"});
        let err = V20CredSendRequest::from_value(raw).unwrap_err();
        match err {
            CodecError::MissingRequiredField { path, key } => {
                assert_eq!(key, "proofType");
                assert_eq!(path, "/filter/ld_proof/options");
            }
            other => panic!("expected MissingRequiredField, got {other}"),
        }
    }

    #[test]
    fn filter_without_known_format_is_unresolved() {
        let err = V20CredSendRequest::from_value(json!({
            "connection_id": "c",
            "filter": {"dif": {}}
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnresolvedUnion { union: "V20CredFilter", ref path, .. } if path == "/filter"
        ));
    }

    #[test]
    fn filter_conversions() {
        let mut indy = V20CredFilterIndy::new();
        indy.cred_def_id = Some("WgWxqztrNooG92RXvxSTWv:3:CL:20:tag".into());
        let filter = V20CredFilter::from(indy);
        assert_eq!(filter.variant_name(), "Indy");

        let mut options = LDProofVCDetailOptions::new("BbsBlsSignature2020");
        options.proof_purpose = Some("assertionMethod".into());
        let detail = LDProofVCDetail::new(JsonObject::new(), options);
        let filter = V20CredFilter::from(detail);
        assert_eq!(filter.variant_name(), "LdProof");

        let request = V20CredSendRequest::new("c-1", filter);
        assert_eq!(
            request.to_value(),
            json!({
                "connection_id": "c-1",
                "filter": {"ld_proof": {
                    "credential": {},
                    "options": {"proofType": "BbsBlsSignature2020", "proofPurpose": "assertionMethod"}
                }}
            })
        );
    }

    #[test]
    fn preview_from_attributes() {
        let preview = V20CredPreview::from_attributes([("name", "Alice"), ("age", "30")]);
        assert_eq!(preview.attribute("age"), Some("30"));
        assert_eq!(preview.attribute("email"), None);
        assert_eq!(
            preview.to_value(),
            json!({"attributes": [
                {"name": "name", "value": "Alice"},
                {"name": "age", "value": "30"}
            ]})
        );
    }

    #[test]
    fn attr_mime_type_three_states() {
        let raw = json!({"attributes": [
            {"name": "a", "value": "1"},
            {"name": "b", "value": "2", "mime-type": null},
            {"name": "c", "value": "3", "mime-type": "image/png"}
        ]});
        let preview = V20CredPreview::from_value(raw.clone()).unwrap();
        assert!(preview.attributes[0].mime_type.is_absent());
        assert!(preview.attributes[1].mime_type.is_null());
        assert_eq!(
            preview.attributes[2].mime_type,
            Field::Present("image/png".to_string())
        );
        assert_eq!(preview.to_value(), raw);
    }

    #[test]
    fn offer_request_requires_preview() {
        let err = V20CredOfferRequest::from_value(json!({
            "connection_id": "c",
            "filter": {"indy": {}}
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CodecError::MissingRequiredField { key: "credential_preview", .. }
        ));
    }

    #[test]
    fn create_keeps_null_comment() {
        let raw = json!({
            "credential_preview": {"attributes": []},
            "filter": {"indy": {"schema_name": "degree"}},
            "comment": null
        });
        let create = V20CredCreate::from_value(raw.clone()).unwrap();
        assert!(create.comment.is_null());
        assert!(create.credential_preview.attributes.is_empty());
        assert_eq!(create.to_value(), raw);
    }

    #[test]
    fn exchange_record_list_round_trips() {
        let raw = json!({"results": [{
            "cred_ex_record": {
                "cred_ex_id": "x1",
                "role": "issuer",
                "initiator": "self",
                "state": "done",
                "by_format": {"cred_offer": {"ld_proof": {}}},
                "cred_preview": {"@type": "issue-credential/2.0/credential-preview", "attributes": []}
            },
            "ld_proof": {"cred_ex_ld_proof_id": "l1", "cred_ex_id": "x1", "state": "done"},
            "indy": {"cred_request_metadata": {"master_secret_blinding_data": {}}}
        }]});
        let list = V20CredExRecordListResult::from_value(raw.clone()).unwrap();
        let detail = &list.results.as_ref().unwrap()[0];
        let record = detail.cred_ex_record.as_ref().unwrap();
        assert_eq!(record.role, Some(V20CredExRecordRole::Issuer));
        assert_eq!(record.initiator, Some(V20CredExRecordInitiator::SelfInitiated));
        assert!(detail.dif.is_none());
        assert_eq!(list.to_value(), raw);
    }

    #[test]
    fn serde_path_matches_codec() {
        let request: V20CredSendRequest = serde_json::from_value(ld_proof_request()).unwrap();
        assert_eq!(serde_json::to_value(&request).unwrap(), ld_proof_request());
    }
}
