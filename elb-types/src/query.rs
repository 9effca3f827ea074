//! This module turns request values into the flat name/value parameters of the
//! [AWS Query protocol](https://docs.aws.amazon.com/elasticloadbalancing/2012-06-01/APIReference/Welcome.html),
//! which a transport then sends as a form-encoded body.
//!
//! The value types know nothing about the wire; any `Serialize` struct can be encoded here.
use serde::{
    ser::{
        Impossible, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple,
        SerializeTupleStruct,
    },
    Serialize, Serializer,
};
use tracing::{debug, trace};

mod error;
#[doc(inline)]
pub use error::QueryError;

/// The Elastic Load Balancing API version sent with every request.
pub const API_VERSION: &str = "2012-06-01";

/// A request for one Elastic Load Balancing operation.
pub trait AwsRequest: Serialize {
    /// The operation name, sent as the `Action` parameter.
    const ACTION: &'static str;

    /// Checks that every member the operation requires is present.
    ///
    /// This only looks for absent values; ranges and formats are left to the service.
    fn validate(&self) -> Result<(), QueryError> {
        Ok(())
    }
}

/// Encoded Query protocol parameters, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Returns the value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Unwraps the parameter list.
    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }

    /// Renders the parameters as an `application/x-www-form-urlencoded` request body.
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Encodes a request as the complete parameter list of a Query call: `Action`, `Version`, then the
/// request's own members.
///
/// The request is validated first, so a missing required member never reaches the wire.
pub fn to_query_params<R: AwsRequest>(request: &R) -> Result<QueryParams, QueryError> {
    if let Err(err) = request.validate() {
        debug!(action = R::ACTION, %err, "Rejected request before encoding");
        return Err(err);
    }
    let mut params = vec![
        ("Action".to_owned(), R::ACTION.to_owned()),
        ("Version".to_owned(), API_VERSION.to_owned()),
    ];
    encode_into(request, &mut params)?;
    trace!(
        action = R::ACTION,
        params = params.len(),
        "Encoded query request"
    );
    Ok(QueryParams(params))
}

/// Encodes the members of any serializable struct, without `Action` or `Version`.
///
/// # Encoding
///
/// * Nested struct members are joined with `.`, e.g. `HealthCheck.Target`.
/// * `Option::None` members are omitted entirely.
/// * Integers are written in decimal, bools as `true`/`false`, unit enum variants as their name.
/// * Sequences become `Name.member.1`, `Name.member.2`, ...; an empty sequence is sent as `Name=`.
/// * Maps become `Name.entry.N.key` and `Name.entry.N.value`.
/// * Byte strings, `()` and enum variants carrying data are rejected.
pub fn to_query_members<T: Serialize + ?Sized>(value: &T) -> Result<QueryParams, QueryError> {
    let mut params = Vec::new();
    encode_into(value, &mut params)?;
    Ok(QueryParams(params))
}

fn encode_into<T: Serialize + ?Sized>(
    value: &T,
    params: &mut Vec<(String, String)>,
) -> Result<(), QueryError> {
    value.serialize(QuerySerializer {
        name: String::new(),
        params,
    })
}

fn member_name(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

// Every value is serialized under the dotted name of the member that holds it.
// An empty name means we are at the top level, where only a struct is meaningful.
struct QuerySerializer<'a> {
    name: String,
    params: &'a mut Vec<(String, String)>,
}

impl QuerySerializer<'_> {
    fn push(self, value: String) -> Result<(), QueryError> {
        if self.name.is_empty() {
            return Err(QueryError::TopLevelNotStruct);
        }
        self.params.push((self.name, value));
        Ok(())
    }
}

impl<'a> Serializer for QuerySerializer<'a> {
    type Ok = ();
    type Error = QueryError;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }

    // Numbers are written in their decimal form.

    fn serialize_i8(self, v: i8) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_i16(self, v: i16) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_i32(self, v: i32) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_i64(self, v: i64) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_i128(self, v: i128) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_u8(self, v: u8) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_u16(self, v: u16) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_u32(self, v: u32) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_u64(self, v: u64) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_u128(self, v: u128) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_f32(self, v: f32) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_f64(self, v: f64) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_string())
    }
    fn serialize_str(self, v: &str) -> Result<Self::Ok, Self::Error> {
        self.push(v.to_owned())
    }

    // The protocol has no binary or unit representation.

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Self::Error> {
        Err(QueryError::UnsupportedTypeBytes)
    }
    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Err(QueryError::UnsupportedTypeUnit)
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Self::Error> {
        Err(QueryError::UnsupportedTypeUnit)
    }

    // Fields containing None are omitted from the containing struct, list or map.
    // A top-level None has no members at all.

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        if self.name.is_empty() {
            return Err(QueryError::TopLevelNotStruct);
        }
        Ok(())
    }

    // Newtypes, including Option::Some, are transparent.

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }
    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        value.serialize(self)
    }

    // Enumerations are sent as their variant name.

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        self.serialize_str(variant)
    }
    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error> {
        Err(QueryError::UnsupportedTypeVariant(variant))
    }
    type SerializeTupleVariant = Impossible<(), QueryError>;
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(QueryError::UnsupportedTypeVariant(variant))
    }
    type SerializeStructVariant = Impossible<(), QueryError>;
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(QueryError::UnsupportedTypeVariant(variant))
    }

    // Arrays, tuples, and tuple structs are treated identically.

    type SerializeSeq = SeqSerializer<'a>;
    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        if self.name.is_empty() {
            return Err(QueryError::TopLevelNotStruct);
        }
        Ok(SeqSerializer {
            name: self.name,
            params: self.params,
            count: 0,
        })
    }
    type SerializeTuple = SeqSerializer<'a>;
    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        self.serialize_seq(Some(len))
    }
    type SerializeTupleStruct = SeqSerializer<'a>;
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        self.serialize_seq(Some(len))
    }

    type SerializeMap = MapSerializer<'a>;
    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        if self.name.is_empty() {
            return Err(QueryError::TopLevelNotStruct);
        }
        Ok(MapSerializer {
            name: self.name,
            params: self.params,
            count: 0,
            key: Vec::new(),
        })
    }
    type SerializeStruct = StructSerializer<'a>;
    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(StructSerializer {
            prefix: self.name,
            params: &mut *self.params,
        })
    }
}

struct StructSerializer<'a> {
    prefix: String,
    params: &'a mut Vec<(String, String)>,
}

// Struct members are emitted in declaration order under `prefix.Member`.

impl SerializeStruct for StructSerializer<'_> {
    type Ok = ();
    type Error = QueryError;
    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Self::Error> {
        value.serialize(QuerySerializer {
            name: member_name(&self.prefix, key),
            params: &mut *self.params,
        })
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }
}

struct SeqSerializer<'a> {
    name: String,
    params: &'a mut Vec<(String, String)>,
    count: usize,
}

// List elements are numbered from 1. Elements that encode to nothing do not consume an index.

impl SerializeSeq for SeqSerializer<'_> {
    type Ok = ();
    type Error = QueryError;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        let before = self.params.len();
        value.serialize(QuerySerializer {
            name: format!("{}.member.{}", self.name, self.count + 1),
            params: &mut *self.params,
        })?;
        if self.params.len() != before {
            self.count += 1;
        }
        Ok(())
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        if self.count == 0 {
            self.params.push((self.name, String::new()));
        }
        Ok(())
    }
}

impl SerializeTuple for SeqSerializer<'_> {
    type Ok = ();
    type Error = QueryError;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        SerializeSeq::serialize_element(self, value)
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SeqSerializer<'_> {
    type Ok = ();
    type Error = QueryError;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        SerializeSeq::serialize_element(self, value)
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        SerializeSeq::end(self)
    }
}

struct MapSerializer<'a> {
    name: String,
    params: &'a mut Vec<(String, String)>,
    count: usize,
    key: Vec<(String, String)>,
}

// An entry is only written once its value has produced parameters, so a `None` value drops the
// whole entry without consuming an index.

impl SerializeMap for MapSerializer<'_> {
    type Ok = ();
    type Error = QueryError;
    // This implementation naïvely assumes serialize_key is called before serialize_value, with no checks.
    // SerializeMap's documentation states that such a case is 'allowed to panic or produce bogus results.'
    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Self::Error> {
        self.key.clear();
        key.serialize(QuerySerializer {
            name: format!("{}.entry.{}.key", self.name, self.count + 1),
            params: &mut self.key,
        })?;
        if self.key.is_empty() {
            return Err(QueryError::KeyWasNone);
        }
        Ok(())
    }
    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Self::Error> {
        let mut entry = Vec::new();
        value.serialize(QuerySerializer {
            name: format!("{}.entry.{}.value", self.name, self.count + 1),
            params: &mut entry,
        })?;
        let key = std::mem::take(&mut self.key);
        if !entry.is_empty() {
            self.params.extend(key);
            self.params.extend(entry);
            self.count += 1;
        }
        Ok(())
    }
    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }
}
