//! The five primitive leaves and the `enum` modifier.
//!
//! Each leaf lowers to `{"type": "<name>"}` and nothing else.  The four
//! value-bearing primitives are [`marker::Enumerable`] and expose
//! [`enum_values`](Schema::enum_values); [`null`] is not — there is nothing
//! meaningful to enumerate.

use serde_json::Value;

use crate::node::{marker, NodeKind, PrimitiveType, Schema};

/// `{"type": "string"}`, inferred as [`String`].
pub fn string() -> Schema<String, marker::Enumerable> {
    Schema::from_kind(NodeKind::Primitive(PrimitiveType::String))
}

/// `{"type": "number"}`, inferred as [`f64`].
pub fn number() -> Schema<f64, marker::Enumerable> {
    Schema::from_kind(NodeKind::Primitive(PrimitiveType::Number))
}

/// `{"type": "boolean"}`, inferred as [`bool`].
pub fn boolean() -> Schema<bool, marker::Enumerable> {
    Schema::from_kind(NodeKind::Primitive(PrimitiveType::Boolean))
}

/// `{"type": "integer"}`, inferred as [`i64`].
pub fn integer() -> Schema<i64, marker::Enumerable> {
    Schema::from_kind(NodeKind::Primitive(PrimitiveType::Integer))
}

/// `{"type": "null"}`, inferred as `()`.
pub fn null() -> Schema<(), marker::Any> {
    Schema::from_kind(NodeKind::Primitive(PrimitiveType::Null))
}

impl<T: Into<Value>> Schema<T, marker::Enumerable> {
    /// Restrict the schema to an explicit list of literal values.
    ///
    /// The values are emitted verbatim into an `enum` keyword, after the
    /// base fragment's `type`.  Because the items must convert into the
    /// node's own `T`, a mismatched literal (say, a number on a string
    /// node) is a compile error rather than a silently wrong document.
    ///
    /// ```
    /// use forma_core::{string, generate};
    /// use serde_json::json;
    ///
    /// let doc = generate(string().enum_values(["red", "blue"]))?;
    /// assert_eq!(doc.json()["enum"], json!(["red", "blue"]));
    /// # Ok::<(), forma_core::FormaError>(())
    /// ```
    pub fn enum_values<I>(self, values: I) -> Schema<T, marker::Any>
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        let values = values
            .into_iter()
            .map(|v| {
                let literal: T = v.into();
                literal.into()
            })
            .collect::<Vec<Value>>();
        Schema::from_kind(NodeKind::Enum {
            base: Box::new(self.kind),
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{boolean, generate, integer, null, number, string};

    #[test]
    fn leaves_lower_to_bare_type_keywords() {
        assert_eq!(generate(string()).unwrap().json(), &json!({"type": "string"}));
        assert_eq!(generate(number()).unwrap().json(), &json!({"type": "number"}));
        assert_eq!(generate(boolean()).unwrap().json(), &json!({"type": "boolean"}));
        assert_eq!(generate(integer()).unwrap().json(), &json!({"type": "integer"}));
        assert_eq!(generate(null()).unwrap().json(), &json!({"type": "null"}));
    }

    #[test]
    fn enum_values_are_emitted_verbatim_in_order() {
        let doc = generate(string().enum_values(["foo", "bar"])).unwrap();
        assert_eq!(doc.json(), &json!({"type": "string", "enum": ["foo", "bar"]}));

        let doc = generate(number().enum_values([1.0, 2.0, 3.0])).unwrap();
        assert_eq!(doc.json(), &json!({"type": "number", "enum": [1.0, 2.0, 3.0]}));
    }

    #[test]
    fn enum_then_or_null_then_describe_stacks() {
        let doc = generate(
            string()
                .enum_values(["red", "blue"])
                .or_null()
                .describe("Nullable color enum"),
        )
        .unwrap();
        assert_eq!(
            doc.json(),
            &json!({
                "type": ["string", "null"],
                "enum": ["red", "blue"],
                "description": "Nullable color enum",
            })
        );
    }
}
