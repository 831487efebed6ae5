//! # acapy-models — ACA-Py Admin API Entities
//!
//! Typed records for the request and response bodies of the ACA-Py admin
//! API, declared with the `acapy-core` macros. Each record decodes from and
//! encodes to a JSON object, keeps unknown keys, and distinguishes absent
//! from `null` where the API allows `null`.
//!
//! ## Modules
//!
//! | Module | API area |
//! |---|---|
//! | [`attachment`] | `~attach` decorator |
//! | [`connection`] | `/connections` |
//! | [`out_of_band`] | `/out-of-band` |
//! | [`wallet`] | `/wallet/did` |
//! | [`issue_credential`] | `/issue-credential-2.0` |
//! | [`indy`] | Indy proof requests and wallet credentials |
//! | [`present_proof`] | `/present-proof-2.0` |
//! | [`w3c`] | `/credentials/w3c` |
//! | [`registry`] | lookup of every entity by name |
//!
//! ## Crate Policy
//!
//! - Entities are declarations only. Codec behavior lives in `acapy-core`.
//! - Protocol payloads (credentials, presentation definitions, attachment
//!   content) stay opaque JSON.
//! - Timestamps are carried as the strings the agent sends.

pub mod attachment;
pub mod connection;
pub mod indy;
pub mod issue_credential;
pub mod out_of_band;
pub mod present_proof;
pub mod registry;
pub mod w3c;
pub mod wallet;

pub use acapy_core::{CodecError, Field, JsonObject, PropertyError, Record, TaggedUnion};

pub use attachment::{AttachDecorator, AttachDecoratorData};
pub use connection::{
    ConnRecord, ConnRecordAccept, ConnRecordConnectionProtocol, ConnRecordInvitationMode,
    ConnRecordTheirRole, ConnectionInvitation, CreateInvitationRequest, InvitationResult,
    ReceiveInvitationRequest,
};
pub use indy::{
    CredInfoList, IndyCredInfo, IndyCredPrecis, IndyPredicateType, IndyProofReqAttrSpec,
    IndyProofReqNonRevoked, IndyProofReqPredSpec, IndyProofRequest, IndyRestriction,
};
pub use issue_credential::{
    IndyCredFilter, LDProofVCDetail, LDProofVCDetailOptions, LdProofCredFilter, V20CredAttrSpec,
    V20CredCreate, V20CredExRecord, V20CredExRecordDIF, V20CredExRecordDetail,
    V20CredExRecordIndy, V20CredExRecordInitiator, V20CredExRecordLDProof,
    V20CredExRecordListResult, V20CredExRecordRole, V20CredFilter, V20CredFilterIndy,
    V20CredOfferRequest, V20CredPreview, V20CredSendRequest,
};
pub use out_of_band::{InvitationReceiveRequest, InvitationReceiveRequestService, Service};
pub use present_proof::{
    DIFProofRequest, DifPresRequest, IndyPresRequest, V20PresRequestByFormat,
    V20PresSendRequestRequest,
};
pub use registry::{Decoded, Entity, ENTITIES, UNIONS};
pub use w3c::W3CCredentialsListRequest;
pub use wallet::{DIDCreate, DIDCreateMethod, DIDCreateOptions, DIDPosture, DIDResult, KeyType, DID};
