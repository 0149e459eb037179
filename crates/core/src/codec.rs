// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON encoding of labels.
//!
//! A label serializes as `{"key": .., "value": .., "source": ..}` with `value`
//! omitted when empty. It deserializes from that object or from the short
//! string form `[source:]key[=value]`.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LabelError;
use crate::label::Label;
use crate::parse::parse_label;

/// Object form as it appears on the wire.
#[derive(Serialize)]
struct LabelObject<'a> {
    key: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    value: &'a str,
    source: &'a str,
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LabelObject {
            key: &self.key,
            value: &self.value,
            source: &self.source,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LabelVisitor)
    }
}

struct LabelVisitor;

impl<'de> Visitor<'de> for LabelVisitor {
    type Value = Label;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a label object or a `[source:]key[=value]` string")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Label, E> {
        if s.is_empty() {
            return Err(E::custom(LabelError::EmptyShortForm(s.to_string())));
        }
        Ok(parse_label(s))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Label, A::Error> {
        let obj = LabelFields::deserialize(de::value::MapAccessDeserializer::new(map))?;
        if obj.key.is_empty() {
            return Err(de::Error::custom("invalid label: object does not contain label key"));
        }
        Ok(Label { key: obj.key, value: obj.value, source: obj.source })
    }
}

/// Decoding side of [`LabelObject`]; every field may be absent.
#[derive(Deserialize)]
struct LabelFields {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    source: String,
}

/// Two-stage decode: object form, then short string form.
pub(crate) fn decode_label(data: &[u8]) -> Result<Label, LabelError> {
    if data.is_empty() {
        return Err(LabelError::EmptyData);
    }

    let object_err = match decode_object(data) {
        Ok(obj) if obj.key.is_empty() => {
            return Err(LabelError::MissingKey(String::from_utf8_lossy(data).into_owned()));
        }
        Ok(obj) => return Ok(Label { key: obj.key, value: obj.value, source: obj.source }),
        Err(e) => e,
    };

    match serde_json::from_slice::<String>(data) {
        Ok(s) if s.is_empty() => {
            Err(LabelError::EmptyShortForm(String::from_utf8_lossy(data).into_owned()))
        }
        Ok(s) => Ok(parse_label(&s)),
        Err(string_err) => Err(LabelError::Decode { object: object_err, string: string_err }),
    }
}

/// Object stage of [`decode_label`]. Only a JSON object is accepted; the
/// derived struct decoder alone would also take an array of fields.
fn decode_object(data: &[u8]) -> Result<LabelFields, serde_json::Error> {
    use serde_json::Value;

    let unexpected = match serde_json::from_slice::<Value>(data)? {
        Value::Object(map) => return serde_json::from_value(Value::Object(map)),
        Value::Array(_) => de::Unexpected::Seq,
        Value::String(_) => de::Unexpected::Other("string"),
        Value::Number(_) => de::Unexpected::Other("number"),
        Value::Bool(b) => de::Unexpected::Bool(b),
        Value::Null => de::Unexpected::Unit,
    };
    Err(de::Error::invalid_type(unexpected, &"a label object"))
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
