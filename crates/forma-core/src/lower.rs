//! The lowering pass: one depth-first, left-to-right walk that turns a node
//! tree into a plain JSON-Schema fragment, registering named definitions in
//! the shared per-document context as it goes.
//!
//! Key order inside a fragment is insertion order (`serde_json` is built
//! with `preserve_order`), and the pass always inserts in the same
//! sequence, so serialised documents are byte-stable across runs — a
//! contract downstream tooling snapshots against.

use serde_json::{Map, Value};

use crate::error::{FormaError, Result};
use crate::node::NodeKind;
use crate::object::{Field, Fields};
use crate::union::is_simple_member;

/// A plain JSON-Schema fragment: data only, no node behaviour.
pub type Fragment = Map<String, Value>;

/// Per-document lowering context: the definitions table that `$ref`s
/// resolve against.  Created fresh for every [`generate`](crate::generate)
/// call and never outlives it.
#[derive(Debug, Default)]
pub struct LowerCtx {
    defs: Fragment,
}

impl LowerCtx {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register `fragment` under `name`.
    ///
    /// Registering the same body again is a no-op — the same recursion or
    /// shared-ref node is legitimately lowered once per call site.  A
    /// *different* body under an existing name is a naming bug and fails.
    pub(crate) fn register(&mut self, name: &str, fragment: Fragment) -> Result<()> {
        match self.defs.get(name) {
            None => {
                self.defs.insert(name.to_owned(), Value::Object(fragment));
                Ok(())
            }
            Some(existing) if existing.as_object() == Some(&fragment) => Ok(()),
            Some(_) => Err(FormaError::DefinitionConflict {
                name: name.to_owned(),
            }),
        }
    }

    pub(crate) fn into_defs(self) -> Fragment {
        self.defs
    }
}

fn ref_target(name: &str) -> Value {
    Value::String(format!("#/$defs/{name}"))
}

fn ref_fragment(name: &str) -> Fragment {
    let mut fragment = Fragment::new();
    fragment.insert("$ref".to_owned(), ref_target(name));
    fragment
}

/// Lower a field mapping into a closed object fragment, recursing into
/// nested groups.  Emits keys in the fixed `type` / `properties` /
/// `required` / `additionalProperties` order.
pub(crate) fn lower_fields(fields: &Fields, ctx: &mut LowerCtx) -> Result<Fragment> {
    let mut properties = Fragment::new();
    let mut required = Vec::with_capacity(fields.entries.len());

    for (name, field) in &fields.entries {
        let lowered = match field {
            Field::Node(kind) => kind.lower(ctx)?,
            Field::Group(nested) => lower_fields(nested, ctx)?,
        };
        properties.insert(name.clone(), Value::Object(lowered));
        required.push(Value::String(name.clone()));
    }

    Ok(object_fragment(properties, required))
}

fn object_fragment(properties: Fragment, required: Vec<Value>) -> Fragment {
    let mut fragment = Fragment::new();
    fragment.insert("type".to_owned(), Value::String("object".to_owned()));
    fragment.insert("properties".to_owned(), Value::Object(properties));
    fragment.insert("required".to_owned(), Value::Array(required));
    fragment.insert("additionalProperties".to_owned(), Value::Bool(false));
    fragment
}

impl NodeKind {
    /// Produce this node's fragment, lowering children depth-first and
    /// registering named definitions as a side effect.
    pub(crate) fn lower(&self, ctx: &mut LowerCtx) -> Result<Fragment> {
        match self {
            NodeKind::Primitive(primitive) => {
                let mut fragment = Fragment::new();
                fragment.insert(
                    "type".to_owned(),
                    Value::String(primitive.as_str().to_owned()),
                );
                Ok(fragment)
            }

            NodeKind::PrimitiveList(types) => {
                let names = types
                    .iter()
                    .map(|t| Value::String(t.as_str().to_owned()))
                    .collect();
                let mut fragment = Fragment::new();
                fragment.insert("type".to_owned(), Value::Array(names));
                Ok(fragment)
            }

            NodeKind::Describe { base, text } => {
                let mut fragment = base.lower(ctx)?;
                // Insert-or-overwrite: last `describe` wins, the key keeps
                // its original position if it already existed.
                fragment.insert("description".to_owned(), Value::String(text.clone()));
                Ok(fragment)
            }

            NodeKind::OrNull(base) => {
                let mut fragment = base.lower(ctx)?;
                let widened = match fragment.get("type") {
                    Some(Value::String(name)) => {
                        let mut names = vec![name.clone()];
                        if name != "null" {
                            names.push("null".to_owned());
                        }
                        names
                    }
                    Some(Value::Array(existing)) => {
                        let mut names: Vec<String> = Vec::with_capacity(existing.len() + 1);
                        for entry in existing {
                            match entry {
                                Value::String(name) if !names.contains(name) => {
                                    names.push(name.clone());
                                }
                                Value::String(_) => {}
                                _ => return Err(FormaError::NullableWithoutType),
                            }
                        }
                        if !names.iter().any(|n| n == "null") {
                            names.push("null".to_owned());
                        }
                        names
                    }
                    _ => return Err(FormaError::NullableWithoutType),
                };
                fragment.insert(
                    "type".to_owned(),
                    Value::Array(widened.into_iter().map(Value::String).collect()),
                );
                Ok(fragment)
            }

            NodeKind::Enum { base, values } => {
                let mut fragment = base.lower(ctx)?;
                fragment.insert("enum".to_owned(), Value::Array(values.clone()));
                Ok(fragment)
            }

            NodeKind::Object(fields) => lower_fields(fields, ctx),

            NodeKind::Array(item) => {
                let mut fragment = Fragment::new();
                fragment.insert("type".to_owned(), Value::String("array".to_owned()));
                fragment.insert("items".to_owned(), Value::Object(item.lower(ctx)?));
                Ok(fragment)
            }

            NodeKind::Union(members) => {
                let lowered = members
                    .iter()
                    .map(|member| member.lower(ctx))
                    .collect::<Result<Vec<Fragment>>>()?;

                if lowered.iter().all(is_simple_member) {
                    // Collapse to a single `type` array: member types
                    // flattened left-to-right, duplicates kept.
                    let mut names = Vec::new();
                    for member in &lowered {
                        match member.get("type") {
                            Some(Value::Array(entries)) => names.extend(entries.iter().cloned()),
                            Some(single) => names.push(single.clone()),
                            None => {}
                        }
                    }
                    let mut fragment = Fragment::new();
                    fragment.insert("type".to_owned(), Value::Array(names));
                    Ok(fragment)
                } else {
                    let mut fragment = Fragment::new();
                    fragment.insert(
                        "anyOf".to_owned(),
                        Value::Array(lowered.into_iter().map(Value::Object).collect()),
                    );
                    Ok(fragment)
                }
            }

            NodeKind::Merge(parts) => {
                let mut properties = Fragment::new();
                let mut required = Vec::new();

                for part in parts {
                    let fragment = part.lower(ctx)?;
                    if fragment.get("type") != Some(&Value::String("object".to_owned())) {
                        return Err(FormaError::MergeExpectsObjects);
                    }
                    if let Some(Value::Object(part_properties)) = fragment.get("properties") {
                        for (key, schema) in part_properties {
                            // Later part wins the value; the key keeps its
                            // first-seen position.
                            properties.insert(key.clone(), schema.clone());
                        }
                    }
                    if let Some(Value::Array(part_required)) = fragment.get("required") {
                        required.extend(part_required.iter().cloned());
                    }
                }

                Ok(object_fragment(properties, required))
            }

            NodeKind::Pick { base, keys } => {
                let source = base.lower(ctx)?;
                let mut properties = Fragment::new();
                let mut required = Vec::new();

                if let Some(Value::Object(source_properties)) = source.get("properties") {
                    for key in keys {
                        if let Some(schema) = source_properties.get(key) {
                            properties.insert(key.clone(), schema.clone());
                            required.push(Value::String(key.clone()));
                        }
                    }
                }

                Ok(object_fragment(properties, required))
            }

            NodeKind::Omit { base, keys } => {
                let source = base.lower(ctx)?;
                let mut properties = Fragment::new();
                let mut required = Vec::new();

                if let Some(Value::Object(source_properties)) = source.get("properties") {
                    for (key, schema) in source_properties {
                        if !keys.contains(key) {
                            properties.insert(key.clone(), schema.clone());
                            required.push(Value::String(key.clone()));
                        }
                    }
                }

                Ok(object_fragment(properties, required))
            }

            NodeKind::Ref(name) => Ok(ref_fragment(name)),

            NodeKind::AsRef { name, base } => {
                let fragment = base.lower(ctx)?;
                ctx.register(name, fragment)?;
                Ok(ref_fragment(name))
            }

            NodeKind::Recursion { name, body } => {
                let built = (body.0)(name);
                let fragment = built.lower(ctx)?;
                ctx.register(name, fragment)?;
                Ok(ref_fragment(name))
            }
        }
    }
}
