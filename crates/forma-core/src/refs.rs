//! Named definitions: plain references and self-referential schemas.
//!
//! Three constructs share one mental model — a named slot in the final
//! `$defs` table:
//!
//! * [`reference`] is pure indirection.  It lowers to
//!   `{"$ref": "#/$defs/<name>"}` and never writes the table; something
//!   else must register the name.
//! * [`recursion`] builds a self-referential definition: the builder
//!   closure receives a `reference(name)` placeholder standing in for the
//!   schema itself, so lowering the body terminates, and the lowered body
//!   is registered under `name`.
//! * [`Schema::into_ref`](crate::Schema::into_ref) registers an
//!   already-built node for sharing, with no self-referential capability.

use std::sync::Arc;

use crate::node::{marker, NodeKind, RecursionBody, Schema};

/// A `$ref` to a definition registered elsewhere in the same document.
///
/// The phantom type is whatever the caller asserts the target describes —
/// turbofish it (`reference::<Node>("node")`) or let inference pick it up.
pub fn reference<T>(name: impl Into<String>) -> Schema<T, marker::Any> {
    Schema::from_kind(NodeKind::Ref(name.into()))
}

/// A self-referential schema registered under `name`.
///
/// `build` is invoked at *lowering* time with a [`reference`] placeholder;
/// recursive occurrences in the body become `$ref`s, the lowered body is
/// stored in `$defs`, and every call site of the node lowers to the same
/// `$ref`.  Lowering the same node repeatedly re-registers an identical
/// body, which the definitions table accepts.
///
/// ```
/// use forma_core::{recursion, object, array, string, fields, generate};
///
/// let tree = recursion::<serde_json::Value, _, _>("node", |node| {
///     object(fields! {
///         value: string(),
///         children: array(node),
///     })
/// });
///
/// let doc = generate(tree)?;
/// assert_eq!(doc.json()["$ref"], "#/$defs/node");
/// assert_eq!(
///     doc.json()["$defs"]["node"]["properties"]["children"]["items"]["$ref"],
///     "#/$defs/node",
/// );
/// # Ok::<(), forma_core::FormaError>(())
/// ```
pub fn recursion<T, K2, F>(name: impl Into<String>, build: F) -> Schema<T, marker::Any>
where
    T: 'static,
    K2: 'static,
    F: Fn(Schema<T, marker::Any>) -> Schema<T, K2> + Send + Sync + 'static,
{
    let name = name.into();
    let body = RecursionBody(Arc::new(move |def_name: &str| {
        build(reference(def_name)).into_kind()
    }));
    Schema::from_kind(NodeKind::Recursion { name, body })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::{array, fields, generate, object, recursion, reference, string, FormaError};

    /// Collect every `$ref` string anywhere in a document.
    fn collect_refs(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    if key == "$ref" {
                        if let Value::String(target) = child {
                            out.push(target.clone());
                        }
                    }
                    collect_refs(child, out);
                }
            }
            Value::Array(items) => {
                for item in items {
                    collect_refs(item, out);
                }
            }
            _ => {}
        }
    }

    #[test]
    fn reference_lowers_without_registering() {
        let doc = generate(reference::<()>("ghost")).unwrap();
        // No `$defs` table at all: reference never writes it.
        assert_eq!(doc.json(), &json!({"$ref": "#/$defs/ghost"}));
    }

    #[test]
    fn recursive_document_is_a_closed_graph() {
        let tree = recursion::<Value, _, _>("node", |node| {
            object(fields! {
                value: string(),
                children: array(node),
            })
        });
        let doc = generate(tree).unwrap();

        assert!(doc.json()["$defs"]["node"].is_object());

        let mut refs = Vec::new();
        collect_refs(doc.json(), &mut refs);
        assert!(!refs.is_empty());
        for target in refs {
            assert_eq!(target, "#/$defs/node");
        }
    }

    #[test]
    fn relowering_the_same_recursion_node_is_idempotent() {
        let tree = recursion::<Value, _, _>("item", |item| {
            object(fields! { next: array(item) })
        });
        // The same node used twice in one document registers once.
        let doc = generate(object(fields! { left: tree.clone(), right: tree })).unwrap();
        let defs = doc.json()["$defs"].as_object().unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(doc.json()["properties"]["left"], json!({"$ref": "#/$defs/item"}));
        assert_eq!(doc.json()["properties"]["right"], json!({"$ref": "#/$defs/item"}));
    }

    #[test]
    fn shared_into_ref_node_produces_a_single_definition() {
        let address = object(fields! { city: string(), zip: string() }).into_ref("Address");
        let doc = generate(object(fields! {
            home: address.clone(),
            work: address,
        }))
        .unwrap();

        let defs = doc.json()["$defs"].as_object().unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(doc.json()["properties"]["home"], json!({"$ref": "#/$defs/Address"}));
        assert_eq!(doc.json()["properties"]["work"], json!({"$ref": "#/$defs/Address"}));
    }

    #[test]
    fn conflicting_bodies_under_one_name_fail() {
        let first = string().into_ref("Shared");
        let second = object(fields! { a: string() }).into_ref("Shared");
        let err = generate(object(fields! { x: first, y: second })).unwrap_err();
        assert_eq!(
            err,
            FormaError::DefinitionConflict {
                name: "Shared".into()
            }
        );
    }
}
