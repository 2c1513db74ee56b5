//! The document assembler: the single entry point that turns a node tree
//! (or a bare field mapping) into a finished JSON-Schema document and hands
//! it to the opaque SDK converter.

use serde_json::Value;

use crate::error::Result;
use crate::lower::{lower_fields, Fragment, LowerCtx};
use crate::node::Schema;
use crate::object::Fields;
use crate::sdk::{json_schema, SdkSchema};

mod sealed {
    pub trait Sealed {}
    impl<T, K> Sealed for crate::node::Schema<T, K> {}
    impl Sealed for crate::object::Fields {}
}

/// Inputs accepted by [`generate`]: any schema node, or a plain [`Fields`]
/// mapping as sugar for "an object with these fields, all required, no
/// extra properties".
pub trait IntoRootSchema: sealed::Sealed {
    /// The data type the resulting document describes.
    type Output;

    fn lower_root(self, ctx: &mut LowerCtx) -> Result<Fragment>;
}

impl<T, K> IntoRootSchema for Schema<T, K> {
    type Output = T;

    fn lower_root(self, ctx: &mut LowerCtx) -> Result<Fragment> {
        self.kind.lower(ctx)
    }
}

impl IntoRootSchema for Fields {
    type Output = Value;

    fn lower_root(self, ctx: &mut LowerCtx) -> Result<Fragment> {
        lower_fields(&self, ctx)
    }
}

/// Assemble a complete JSON-Schema document from `input` and hand it to the
/// SDK converter, returning the typed handle unchanged.
///
/// One fresh definitions table is allocated per call; after the root is
/// lowered, the accumulated table is attached as `$defs` — only here, and
/// only when non-empty.  Node lowering never attaches `$defs` itself.
///
/// ```
/// use forma_core::{generate, fields, string, number};
/// use serde_json::json;
///
/// // A bare mapping is sugar for a closed object schema.
/// let doc = generate(fields! { name: string(), age: number() })?;
/// assert_eq!(
///     doc.json(),
///     &json!({
///         "type": "object",
///         "properties": {
///             "name": {"type": "string"},
///             "age": {"type": "number"},
///         },
///         "required": ["name", "age"],
///         "additionalProperties": false,
///     }),
/// );
/// # Ok::<(), forma_core::FormaError>(())
/// ```
pub fn generate<S: IntoRootSchema>(input: S) -> Result<SdkSchema<S::Output>> {
    let mut ctx = LowerCtx::new();
    let mut root = input.lower_root(&mut ctx)?;

    let defs = ctx.into_defs();
    if !defs.is_empty() {
        root.insert("$defs".to_owned(), Value::Object(defs));
    }

    Ok(json_schema(Value::Object(root)))
}
