//! # Entity Registry
//!
//! A static index of every record and tagged union in this crate, so tools
//! can look an entity up by name, print its schema, and push raw JSON
//! through its codec without knowing the Rust type at compile time.

use acapy_core::{CodecError, Record, RecordSchema, TaggedUnion, UnionSchema};
use serde_json::Value;

use crate::attachment::*;
use crate::connection::*;
use crate::indy::*;
use crate::issue_credential::*;
use crate::out_of_band::*;
use crate::present_proof::*;
use crate::w3c::*;
use crate::wallet::*;

/// Result of decoding a value through an entity's codec.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The record encoded again.
    pub encoded: Value,
    /// Keys the schema does not declare, in input order.
    pub additional_keys: Vec<String>,
}

impl Decoded {
    /// Returns `true` if re-encoding reproduced `input` exactly.
    pub fn round_trips(&self, input: &Value) -> bool {
        &self.encoded == input
    }
}

/// One registered record type.
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    /// API area the entity belongs to (the module name).
    pub group: &'static str,
    /// Declared fields.
    pub schema: &'static RecordSchema,
    decode: fn(Value) -> Result<Decoded, CodecError>,
}

impl Entity {
    /// Entity type name.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    /// Decode `value` as this entity and encode it back.
    pub fn decode(&self, value: Value) -> Result<Decoded, CodecError> {
        (self.decode)(value)
    }
}

fn decode_as<R: Record>(value: Value) -> Result<Decoded, CodecError> {
    let record = R::from_value(value)?;
    Ok(Decoded {
        encoded: record.to_value(),
        additional_keys: record.additional_keys().into_iter().map(String::from).collect(),
    })
}

macro_rules! entities {
    ($( $group:literal => [ $( $ty:ty ),+ $(,)? ] ),+ $(,)?) => {
        &[ $( $( Entity {
            group: $group,
            schema: <$ty as Record>::SCHEMA,
            decode: decode_as::<$ty>,
        }, )+ )+ ]
    };
}

/// Every record type, grouped by API area.
pub static ENTITIES: &[Entity] = entities! {
    "attachment" => [AttachDecorator, AttachDecoratorData],
    "connection" => [
        CreateInvitationRequest,
        ConnectionInvitation,
        ReceiveInvitationRequest,
        InvitationResult,
        ConnRecord,
    ],
    "out_of_band" => [InvitationReceiveRequest, InvitationReceiveRequestService, Service],
    "wallet" => [DIDCreate, DIDCreateOptions, DID, DIDResult],
    "issue_credential" => [
        V20CredAttrSpec,
        V20CredPreview,
        V20CredFilterIndy,
        LDProofVCDetailOptions,
        LDProofVCDetail,
        IndyCredFilter,
        LdProofCredFilter,
        V20CredOfferRequest,
        V20CredCreate,
        V20CredSendRequest,
        V20CredExRecord,
        V20CredExRecordIndy,
        V20CredExRecordLDProof,
        V20CredExRecordDIF,
        V20CredExRecordDetail,
        V20CredExRecordListResult,
    ],
    "indy" => [
        IndyProofReqNonRevoked,
        IndyProofReqAttrSpec,
        IndyProofReqPredSpec,
        IndyProofRequest,
        IndyCredInfo,
        IndyCredPrecis,
        CredInfoList,
    ],
    "present_proof" => [
        DIFProofRequest,
        DifPresRequest,
        IndyPresRequest,
        V20PresSendRequestRequest,
    ],
    "w3c" => [W3CCredentialsListRequest],
};

/// Every tagged union, with its members in priority order.
pub static UNIONS: &[&UnionSchema] = &[
    <V20CredFilter as TaggedUnion>::SCHEMA,
    <V20PresRequestByFormat as TaggedUnion>::SCHEMA,
];

/// Look up a record type by name.
pub fn entity(name: &str) -> Option<&'static Entity> {
    ENTITIES.iter().find(|e| e.name() == name)
}

/// Look up a tagged union by name.
pub fn union(name: &str) -> Option<&'static UnionSchema> {
    UNIONS.iter().copied().find(|u| u.name == name)
}
