//! # W3C Credential Queries

use std::collections::BTreeMap;

use acapy_core::record;

record! {
    /// Body of `POST /credentials/w3c`. Every filter is optional; an empty
    /// request lists all W3C credentials in the wallet.
    pub struct W3CCredentialsListRequest {
        required {}
        optional {
            contexts: Option<Vec<String>> => "contexts",
            given_id: Option<String> => "given_id",
            issuer_id: Option<String> => "issuer_id",
            max_results: Option<i64> => "max_results",
            proof_types: Option<Vec<String>> => "proof_types",
            schema_ids: Option<Vec<String>> => "schema_ids",
            subject_ids: Option<Vec<String>> => "subject_ids",
            tag_query: Option<BTreeMap<String, String>> => "tag_query",
            types: Option<Vec<String>> => "types",
        }
    }
}
