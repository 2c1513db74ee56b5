//! Unions and the simplification rule.
//!
//! A union lowers to `anyOf` in declaration order *unless* every member is
//! "simple" — no `description`, no `anyOf`, no `enum`, and a `type` made
//! (recursively) of the five primitive names only — in which case the whole
//! union collapses to a single `{"type": [..]}` array.  The collapse is a
//! cosmetic/size optimisation with no effect on the inferred output type.

use serde_json::Value;

use crate::lower::Fragment;
use crate::node::{marker, NodeKind, PrimitiveType, Schema};

/// Union of an ordered list of already-erased members.  Most call sites
/// want the [`any_of!`](crate::any_of) macro or [`Schema::or`] instead,
/// which erase for you.
pub fn union<I>(members: I) -> Schema<Value, marker::Any>
where
    I: IntoIterator<Item = Schema<Value, marker::Any>>,
{
    Schema::from_kind(NodeKind::Union(
        members.into_iter().map(Schema::into_kind).collect(),
    ))
}

/// Variadic union sugar; members are erased with
/// [`untyped`](crate::Schema::untyped) automatically.
///
/// ```
/// use forma_core::{any_of, string, number, generate};
/// use serde_json::json;
///
/// let doc = generate(any_of![string(), number()])?;
/// assert_eq!(doc.json(), &json!({"type": ["string", "number"]}));
/// # Ok::<(), forma_core::FormaError>(())
/// ```
#[macro_export]
macro_rules! any_of {
    ($($member:expr),+ $(,)?) => {
        $crate::union::union([$($member.untyped()),+])
    };
}

/// A literal list of primitive type names, lowered directly to
/// `{"type": [..]}` with no per-member fragments.
///
/// Already in simplified form by construction, so the node statically
/// supports neither `or_null` nor `enum_values`.
pub fn primitive_union<I>(types: I) -> Schema<Value, marker::TypeList>
where
    I: IntoIterator<Item = PrimitiveType>,
{
    Schema::from_kind(NodeKind::PrimitiveList(types.into_iter().collect()))
}

/// A member fragment blocks simplification as soon as it carries anything
/// beyond a primitive `type`.
pub(crate) fn is_simple_member(fragment: &Fragment) -> bool {
    if fragment.contains_key("description")
        || fragment.contains_key("anyOf")
        || fragment.contains_key("enum")
    {
        return false;
    }
    fragment.get("type").is_some_and(is_primitive_type_value)
}

fn is_primitive_type_value(value: &Value) -> bool {
    match value {
        Value::String(name) => PrimitiveType::is_name(name),
        Value::Array(names) => names.iter().all(is_primitive_type_value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::node::PrimitiveType;
    use crate::{boolean, fields, generate, number, object, primitive_union, string};

    #[test]
    fn all_primitive_members_collapse_to_a_type_array() {
        let doc = generate(any_of![string(), number()]).unwrap();
        assert_eq!(doc.json(), &json!({"type": ["string", "number"]}));
    }

    #[test]
    fn nested_nullables_flatten_in_declaration_order() {
        let doc = generate(any_of![string().or_null(), number()]).unwrap();
        assert_eq!(doc.json(), &json!({"type": ["string", "null", "number"]}));
    }

    #[test]
    fn duplicates_are_kept_as_encountered() {
        let doc = generate(any_of![string(), string()]).unwrap();
        assert_eq!(doc.json(), &json!({"type": ["string", "string"]}));
    }

    #[test]
    fn a_description_on_any_member_forces_any_of() {
        let doc = generate(any_of![string(), number().describe("x")]).unwrap();
        assert_eq!(
            doc.json(),
            &json!({
                "anyOf": [
                    {"type": "string"},
                    {"type": "number", "description": "x"},
                ],
            })
        );
    }

    #[test]
    fn a_description_on_the_union_result_keeps_simplification() {
        // Only member descriptions block collapsing; describing the union
        // itself annotates the already-simplified fragment.
        let doc = generate(any_of![string(), number()].describe("either")).unwrap();
        assert_eq!(
            doc.json(),
            &json!({"type": ["string", "number"], "description": "either"})
        );
    }

    #[test]
    fn an_enum_member_forces_any_of() {
        let doc = generate(any_of![string(), number().enum_values([1.0, 2.0, 3.0])]).unwrap();
        assert_eq!(
            doc.json(),
            &json!({
                "anyOf": [
                    {"type": "string"},
                    {"type": "number", "enum": [1.0, 2.0, 3.0]},
                ],
            })
        );
    }

    #[test]
    fn a_non_primitive_member_forces_any_of() {
        let doc = generate(any_of![string(), object(fields! { name: string() })]).unwrap();
        assert_eq!(
            doc.json(),
            &json!({
                "anyOf": [
                    {"type": "string"},
                    {
                        "type": "object",
                        "properties": {"name": {"type": "string"}},
                        "required": ["name"],
                        "additionalProperties": false,
                    },
                ],
            })
        );
    }

    #[test]
    fn or_is_sugar_for_a_two_member_union() {
        let via_or = generate(string().or(boolean())).unwrap();
        let via_macro = generate(any_of![string(), boolean()]).unwrap();
        assert_eq!(via_or.json(), via_macro.json());
    }

    #[test]
    fn primitive_union_emits_the_names_in_given_order() {
        let doc = generate(primitive_union([
            PrimitiveType::String,
            PrimitiveType::Number,
            PrimitiveType::Boolean,
            PrimitiveType::Integer,
        ]))
        .unwrap();
        assert_eq!(
            doc.json(),
            &json!({"type": ["string", "number", "boolean", "integer"]})
        );
    }

    #[test]
    fn primitive_union_still_takes_describe() {
        let doc = generate(
            primitive_union([PrimitiveType::String, PrimitiveType::Number])
                .describe("Primitive union schema"),
        )
        .unwrap();
        assert_eq!(
            doc.json(),
            &json!({
                "type": ["string", "number"],
                "description": "Primitive union schema",
            })
        );
    }
}
