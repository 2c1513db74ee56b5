//! The opaque boundary to the generative-AI SDK.
//!
//! [`generate`](crate::generate::generate) finishes by handing the
//! assembled document to [`json_schema`], which wraps it in an
//! [`SdkSchema<T>`] — a typed handle pairing the plain JSON-Schema value
//! with the phantom output type carried over from the node tree.  The
//! engine never inspects the handle; providers serialize it straight into
//! request payloads (`response_format`, tool parameter blocks, …), and the
//! `T` tells the caller what to deserialize the model's answer into.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::node::Typed;

/// Opaque, typed schema handle returned by the converter.
pub struct SdkSchema<T> {
    value: Value,
    _output: PhantomData<fn() -> T>,
}

/// Wrap a complete JSON-Schema document into a typed handle.
///
/// Like its SDK counterpart this is an unchecked assertion: the caller (in
/// practice, [`generate`](crate::generate::generate)) vouches that values
/// matching `value` deserialize into `T`.
pub fn json_schema<T>(value: Value) -> SdkSchema<T> {
    SdkSchema {
        value,
        _output: PhantomData,
    }
}

impl<T> SdkSchema<T> {
    /// Borrow the underlying JSON-Schema document.
    pub fn json(&self) -> &Value {
        &self.value
    }

    /// Consume the handle, yielding the document.
    pub fn into_json(self) -> Value {
        self.value
    }
}

impl<T> Clone for SdkSchema<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _output: PhantomData,
        }
    }
}

impl<T> fmt::Debug for SdkSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkSchema").field("json", &self.value).finish()
    }
}

/// Serializes as the bare document, so the handle can be embedded directly
/// in a provider request body.
impl<T> Serialize for SdkSchema<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<T> Typed for SdkSchema<T> {
    type Output = T;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{fields, generate, number, string};

    #[test]
    fn handle_serializes_as_the_bare_document() {
        let doc = generate(fields! { name: string(), age: number() }).unwrap();
        let via_handle = serde_json::to_string(&doc).unwrap();
        let via_value = serde_json::to_string(doc.json()).unwrap();
        assert_eq!(via_handle, via_value);
    }

    #[test]
    fn serialized_key_order_is_stable() {
        let doc = generate(fields! { name: string(), age: number() }).unwrap();
        assert_eq!(
            serde_json::to_string(&doc).unwrap(),
            "{\"type\":\"object\",\
             \"properties\":{\"name\":{\"type\":\"string\"},\"age\":{\"type\":\"number\"}},\
             \"required\":[\"name\",\"age\"],\
             \"additionalProperties\":false}"
        );
    }
}
