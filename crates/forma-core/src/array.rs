//! Homogeneous arrays.

use crate::node::{marker, NodeKind, Schema};

/// `{"type": "array", "items": <item schema>}`, inferred as `Vec<T>`.
///
/// ```
/// use forma_core::{array, string, generate};
/// use serde_json::json;
///
/// let doc = generate(array(string()))?;
/// assert_eq!(doc.json(), &json!({"type": "array", "items": {"type": "string"}}));
/// # Ok::<(), forma_core::FormaError>(())
/// ```
pub fn array<T, K>(item: Schema<T, K>) -> Schema<Vec<T>, marker::Any> {
    Schema::from_kind(NodeKind::Array(Box::new(item.into_kind())))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{array, fields, generate, number, object, string};

    #[test]
    fn array_of_object_nests_the_item_fragment() {
        let doc = generate(array(object(fields! { name: string(), age: number() }))).unwrap();
        assert_eq!(
            doc.json(),
            &json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "age": {"type": "number"},
                    },
                    "required": ["name", "age"],
                    "additionalProperties": false,
                },
            })
        );
    }

    #[test]
    fn array_takes_modifiers_like_any_node() {
        let doc = generate(array(number()).describe("Array of numbers")).unwrap();
        assert_eq!(
            doc.json(),
            &json!({
                "type": "array",
                "items": {"type": "number"},
                "description": "Array of numbers",
            })
        );
    }
}
