//! # `forma-core` — typed JSON-Schema combinators
//!
//! A small combinator engine that builds **draft-07 JSON Schema** documents
//! for structured-output contracts (tool-call arguments, structured
//! completions) while statically inferring the data type each schema
//! describes.  The runtime document and the compile-time type come from the
//! same expression, so they cannot drift apart.
//!
//! The crate is three cooperating layers:
//!
//! | Layer | Module | What it does |
//! |-------|--------|--------------|
//! | Nodes | [`node`], [`primitive`], [`object`], [`array`], [`union`], [`refs`] | immutable schema values with chainable modifiers |
//! | Lowering | [`lower`] | the depth-first pass from node tree to fragment, with the per-document `$defs` table |
//! | Assembly | [`generate`], [`sdk`] | the one-call entry point and the opaque typed handle |
//!
//! ## Quick example
//!
//! ```
//! use forma_core::{generate, fields, object, array, string, number, any_of};
//!
//! let doc = generate(object(fields! {
//!     title: string().describe("Short summary"),
//!     score: number().or_null(),
//!     tags: array(any_of![string(), number()]),
//! }))?;
//!
//! assert_eq!(doc.json()["required"], serde_json::json!(["title", "score", "tags"]));
//! assert_eq!(doc.json()["properties"]["tags"]["items"]["type"],
//!            serde_json::json!(["string", "number"]));
//! # Ok::<(), forma_core::FormaError>(())
//! ```
//!
//! ## Guarantees worth knowing
//!
//! * **Byte-stable output** — fragments are insertion-ordered maps
//!   (`serde_json` with `preserve_order`) and the lowering pass always
//!   inserts keys in the same sequence, so serialised documents are safe to
//!   snapshot.
//! * **Every declared field is required** — `required` always equals the
//!   property list in declaration order; there is no optional-field
//!   concept, and object fragments are closed
//!   (`additionalProperties: false`).
//! * **Pure lowering** — no I/O, no async, no global state.  The only
//!   mutation is the per-call definitions table, so concurrent `generate`
//!   calls need no locking.

pub mod array;
pub mod error;
pub mod generate;
pub mod lower;
pub mod node;
pub mod object;
pub mod primitive;
pub mod refs;
pub mod sdk;
pub mod union;

pub use array::array;
pub use error::{FormaError, Result};
pub use generate::{generate, IntoRootSchema};
pub use node::{marker, PrimitiveType, Schema, Typed};
pub use object::{object, Fields};
pub use primitive::{boolean, integer, null, number, string};
pub use refs::{recursion, reference};
pub use sdk::{json_schema, SdkSchema};
pub use union::{primitive_union, union};
