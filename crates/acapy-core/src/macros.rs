//! # Declarative Registration
//!
//! Three macros turn a field list into a complete codec:
//!
//! - [`record!`](crate::record!): a struct with required fields, optional
//!   fields and a passthrough map, plus its [`Record`](crate::Record),
//!   [`WireValue`](crate::WireValue) and serde implementations and its
//!   static [`RecordSchema`](crate::RecordSchema).
//! - [`union_field!`](crate::union_field!): an enum over record types
//!   selected by signature keys, in declared priority order.
//! - [`wire_enum!`](crate::wire_enum!): a closed string enumeration.
//!
//! Optional fields are written with their slot type: `Option<T>` when the
//! key may be missing but never `null`, [`Field<T>`](crate::Field) when
//! `null` is meaningful.
//!
//! ```
//! use acapy_core::{record, Field, Record};
//!
//! record! {
//!     /// A labelled thing.
//!     pub struct Thing {
//!         required {
//!             id: String => "@id",
//!         }
//!         optional {
//!             tags: Option<Vec<String>> => "tags",
//!             comment: Field<String> => "comment",
//!         }
//!     }
//! }
//!
//! let raw = serde_json::json!({"@id": "t1", "comment": null, "extra": 1});
//! let thing = Thing::from_value(raw.clone()).unwrap();
//! assert_eq!(thing.id, "t1");
//! assert!(thing.comment.is_null());
//! assert_eq!(thing.additional_keys(), vec!["extra"]);
//! assert_eq!(thing.to_value(), raw);
//! ```

/// Declare a record type. See the [module documentation](crate::macros).
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty => $rkey:literal ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty => $okey:literal ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $(#[$rmeta])* pub $rfield: $rty, )*
            $( $(#[$ometa])* pub $ofield: $oty, )*
            additional_properties: $crate::AdditionalProperties,
        }

        impl $name {
            /// Create a record from its required fields; optional fields start absent.
            #[allow(clippy::new_without_default, clippy::too_many_arguments)]
            pub fn new($( $rfield: impl ::core::convert::Into<$rty> ),*) -> Self {
                Self {
                    $( $rfield: $rfield.into(), )*
                    $( $ofield: ::core::default::Default::default(), )*
                    additional_properties: $crate::AdditionalProperties::new(),
                }
            }
        }

        impl $crate::Record for $name {
            const SCHEMA: &'static $crate::RecordSchema = &$crate::RecordSchema {
                name: ::core::stringify!($name),
                fields: &[
                    $(
                        $crate::FieldSpec {
                            name: ::core::stringify!($rfield),
                            wire_key: $rkey,
                            presence: $crate::Presence::Required,
                            kind: <$rty as $crate::WireValue>::kind,
                        },
                    )*
                    $(
                        $crate::FieldSpec {
                            name: ::core::stringify!($ofield),
                            wire_key: $okey,
                            presence: <$oty as $crate::OptionalSlot>::PRESENCE,
                            kind: <<$oty as $crate::OptionalSlot>::Value as $crate::WireValue>::kind,
                        },
                    )*
                ],
            };

            #[allow(unused_mut)]
            fn decode_owned(
                mut object: $crate::JsonObject,
            ) -> ::core::result::Result<Self, $crate::CodecError> {
                $( let $rfield = $crate::record::take_required::<$rty>(&mut object, $rkey)?; )*
                $( let $ofield = $crate::record::take_optional::<$oty>(&mut object, $okey)?; )*
                $crate::__private::tracing::trace!(
                    record = ::core::stringify!($name),
                    additional = object.len(),
                    "decoded record"
                );
                ::core::result::Result::Ok(Self {
                    $( $rfield, )*
                    $( $ofield, )*
                    additional_properties: $crate::AdditionalProperties::from(object),
                })
            }

            #[allow(unused_mut)]
            fn encode(&self) -> $crate::JsonObject {
                let mut object = self.additional_properties.as_object().clone();
                $( $crate::record::put_required(&mut object, $rkey, &self.$rfield); )*
                $( $crate::record::put_optional(&mut object, $okey, &self.$ofield); )*
                object
            }

            fn additional_properties(&self) -> &$crate::AdditionalProperties {
                &self.additional_properties
            }

            fn set_property(
                &mut self,
                key: impl ::core::convert::Into<::std::string::String>,
                value: impl ::core::convert::Into<$crate::__private::serde_json::Value>,
            ) -> ::core::result::Result<
                ::core::option::Option<$crate::__private::serde_json::Value>,
                $crate::PropertyError,
            > {
                $crate::record::set_passthrough(
                    <Self as $crate::Record>::SCHEMA,
                    &mut self.additional_properties,
                    key.into(),
                    value.into(),
                )
            }

            fn remove_property(
                &mut self,
                key: &str,
            ) -> ::core::result::Result<$crate::__private::serde_json::Value, $crate::PropertyError> {
                $crate::record::remove_passthrough(&mut self.additional_properties, key)
            }
        }

        impl $crate::WireValue for $name {
            fn kind() -> $crate::WireKind {
                $crate::WireKind::Record {
                    name: ::core::stringify!($name),
                }
            }

            fn decode_wire(
                value: $crate::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::CodecError> {
                $crate::record::decode_nested(value)
            }

            fn encode_wire(&self) -> $crate::__private::serde_json::Value {
                $crate::__private::serde_json::Value::Object($crate::Record::encode(self))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::record::serialize_wire(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::record::deserialize_wire(deserializer)
            }
        }
    };
}

/// Declare a tagged union over record types. See the
/// [module documentation](crate::macros).
///
/// Members are listed highest priority first, each with the keys that must
/// all be present for a value to select it.
#[macro_export]
macro_rules! union_field {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident ( $member:ty ) => [ $( $sig:literal ),+ $(,)? ]
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($member), )+
        }

        impl $crate::TaggedUnion for $name {
            const SCHEMA: &'static $crate::UnionSchema = &$crate::UnionSchema {
                name: ::core::stringify!($name),
                members: &[
                    $(
                        $crate::UnionMember {
                            variant: ::core::stringify!($variant),
                            record: <$member as $crate::Record>::SCHEMA,
                            signature: &[ $( $sig ),+ ],
                        },
                    )+
                ],
            };

            fn variant_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => ::core::stringify!($variant), )+
                }
            }
        }

        impl $crate::WireValue for $name {
            fn kind() -> $crate::WireKind {
                $crate::WireKind::Union {
                    name: ::core::stringify!($name),
                }
            }

            fn decode_wire(
                value: $crate::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::CodecError> {
                let schema = <Self as $crate::TaggedUnion>::SCHEMA;
                let object = $crate::record::expect_object(value)?;
                let selected = match schema.resolve(&object) {
                    ::core::option::Option::Some(member) => member.variant,
                    ::core::option::Option::None => {
                        return ::core::result::Result::Err($crate::record::unresolved_union(schema));
                    }
                };
                $(
                    if selected == ::core::stringify!($variant) {
                        return <$member as $crate::Record>::decode_owned(object).map(Self::$variant);
                    }
                )+
                ::core::result::Result::Err($crate::record::unresolved_union(schema))
            }

            fn encode_wire(&self) -> $crate::__private::serde_json::Value {
                match self {
                    $(
                        Self::$variant(member) => $crate::__private::serde_json::Value::Object(
                            $crate::Record::encode(member),
                        ),
                    )+
                }
            }
        }

        $(
            impl ::core::convert::From<$member> for $name {
                fn from(member: $member) -> Self {
                    Self::$variant(member)
                }
            }
        )+

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::record::serialize_wire(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::record::deserialize_wire(deserializer)
            }
        }
    };
}

/// Declare a closed string enumeration. Unknown strings fail to decode.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every accepted wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[ $( $wire ),+ ];

            /// The wire value of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::CodecError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    $( $wire => ::core::result::Result::Ok(Self::$variant), )+
                    other => ::core::result::Result::Err(
                        $crate::CodecError::unknown_variant(Self::VALUES, other),
                    ),
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::WireValue for $name {
            fn kind() -> $crate::WireKind {
                $crate::WireKind::Enum {
                    name: ::core::stringify!($name),
                }
            }

            fn decode_wire(
                value: $crate::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, $crate::CodecError> {
                match value {
                    $crate::__private::serde_json::Value::String(s) => s.parse(),
                    other => ::core::result::Result::Err($crate::CodecError::malformed("string", &other)),
                }
            }

            fn encode_wire(&self) -> $crate::__private::serde_json::Value {
                $crate::__private::serde_json::Value::String(self.as_str().to_string())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::record::deserialize_wire(deserializer)
            }
        }
    };
}
