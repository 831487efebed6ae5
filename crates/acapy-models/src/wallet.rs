//! # Wallet DIDs

use acapy_core::record;
use acapy_core::wire_enum;

wire_enum! {
    /// DID method used by `POST /wallet/did/create`.
    pub enum DIDCreateMethod {
        Key => "key",
        Sov => "sov",
    }
}

wire_enum! {
    /// Key algorithm backing a DID.
    pub enum KeyType {
        Ed25519 => "ed25519",
        Bls12381G2 => "bls12381g2",
    }
}

wire_enum! {
    /// Whether a DID is public, posted to the ledger, or wallet-local.
    pub enum DIDPosture {
        Public => "public",
        Posted => "posted",
        WalletOnly => "wallet_only",
    }
}

record! {
    /// Key options for a new DID.
    pub struct DIDCreateOptions {
        required {
            key_type: KeyType => "key_type",
        }
        optional {}
    }
}

record! {
    /// Body of `POST /wallet/did/create`.
    pub struct DIDCreate {
        required {}
        optional {
            method: Option<DIDCreateMethod> => "method",
            options: Option<DIDCreateOptions> => "options",
        }
    }
}

impl DIDCreate {
    /// Request for a new DID of the given method with the method's default
    /// key type.
    pub fn with_method(method: DIDCreateMethod) -> Self {
        let mut request = Self::new();
        request.method = Some(method);
        request
    }
}

record! {
    /// A DID held in the wallet.
    pub struct DID {
        required {}
        optional {
            did: Option<String> => "did",
            key_type: Option<KeyType> => "key_type",
            method: Option<DIDCreateMethod> => "method",
            posture: Option<DIDPosture> => "posture",
            verkey: Option<String> => "verkey",
        }
    }
}

record! {
    /// Response of the wallet DID endpoints.
    pub struct DIDResult {
        required {}
        optional {
            result: Option<DID> => "result",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acapy_core::Record;
    use serde_json::json;

    #[test]
    fn create_with_method_encodes_only_method() {
        let request = DIDCreate::with_method(DIDCreateMethod::Key);
        assert_eq!(request.to_value(), json!({"method": "key"}));
    }

    #[test]
    fn create_with_options() {
        let mut request = DIDCreate::with_method(DIDCreateMethod::Key);
        request.options = Some(DIDCreateOptions::new(KeyType::Bls12381G2));
        assert_eq!(
            request.to_value(),
            json!({"method": "key", "options": {"key_type": "bls12381g2"}})
        );
    }

    #[test]
    fn did_result_decodes() {
        let raw = json!({
            "result": {
                "did": "did:key:z6MkgKA7yrw5kYSiDuQFcye4bMaJpcfHFry3Bx45pdWh3s8i",
                "verkey": "2yAeWgp8Pfw7HrYQ6AXsvLkzPqWDEWCdFSW8zMjqKLuC",
                "posture": "wallet_only",
                "key_type": "ed25519",
                "method": "key"
            }
        });
        let result = DIDResult::from_value(raw.clone()).unwrap();
        let did = result.result.as_ref().unwrap();
        assert_eq!(did.posture, Some(DIDPosture::WalletOnly));
        assert_eq!(did.key_type, Some(KeyType::Ed25519));
        assert_eq!(result.to_value(), raw);
    }

    #[test]
    fn enum_values_are_listed() {
        assert_eq!(DIDCreateMethod::VALUES, &["key", "sov"]);
        assert_eq!("sov".parse::<DIDCreateMethod>().unwrap(), DIDCreateMethod::Sov);
        assert!("web".parse::<DIDCreateMethod>().is_err());
    }
}
