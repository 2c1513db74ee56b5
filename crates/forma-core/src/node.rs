//! The schema **node** layer: immutable values describing one JSON-Schema
//! fragment each, plus the compile-time tags that make the whole library
//! worth using.
//!
//! A [`Schema<T, K>`] carries three things:
//!
//! * a private [`NodeKind`] — an explicit sum-type discriminant describing
//!   *what* the node is (primitive, object, union, reference, …),
//! * a phantom type `T` — the Rust shape the schema describes.  It never
//!   materialises at runtime; it only flows into the
//!   [`SdkSchema<T>`](crate::sdk::SdkSchema) handle returned by
//!   [`generate`](crate::generate::generate),
//! * a capability marker `K` — typestate that decides which modifiers are
//!   available.  `enum_values` exists only on [`marker::Enumerable`] nodes,
//!   `merge`/`pick`/`omit` only on [`marker::Object`] nodes, and
//!   [`marker::TypeList`] nodes (from
//!   [`primitive_union`](crate::union::primitive_union)) expose neither
//!   `or_null` nor `enum_values`.
//!
//! Every modifier **consumes** the receiver and returns a new node wrapping
//! the old one.  Nodes are plain values: clone them freely, share them
//! between parents, re-lower them as often as you like — the only mutable
//! state anywhere is the per-document definitions table threaded through
//! lowering (see [`crate::lower`]).

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use crate::object::Fields;

/// Capability markers and the sealed traits gating modifier availability.
pub mod marker {
    mod sealed {
        pub trait Sealed {}
        impl Sealed for super::Any {}
        impl Sealed for super::Enumerable {}
        impl Sealed for super::Object {}
        impl Sealed for super::TypeList {}
    }

    /// Default marker: a plain node with the universal modifiers.
    #[derive(Debug, Clone, Copy)]
    pub struct Any;

    /// Primitive leaves that additionally support
    /// [`enum_values`](crate::Schema::enum_values).
    #[derive(Debug, Clone, Copy)]
    pub struct Enumerable;

    /// Object-shaped nodes that additionally support the object algebra
    /// ([`merge`](crate::Schema::merge), [`pick`](crate::Schema::pick),
    /// [`omit`](crate::Schema::omit)).
    #[derive(Debug, Clone, Copy)]
    pub struct Object;

    /// Result of [`primitive_union`](crate::union::primitive_union): already
    /// in simplified form, so neither `or_null` nor `enum_values` apply.
    #[derive(Debug, Clone, Copy)]
    pub struct TypeList;

    /// Markers whose nodes may be widened with
    /// [`or_null`](crate::Schema::or_null).  Deliberately *not* implemented
    /// for [`TypeList`].
    pub trait Nullable: sealed::Sealed {}
    impl Nullable for Any {}
    impl Nullable for Enumerable {}
    impl Nullable for Object {}
}

/// The five primitive JSON-Schema type names understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    String,
    Number,
    Boolean,
    Integer,
    Null,
}

impl PrimitiveType {
    /// The canonical lowercase keyword emitted into `type`.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Null => "null",
        }
    }

    pub(crate) fn is_name(name: &str) -> bool {
        matches!(name, "string" | "number" | "boolean" | "integer" | "null")
    }
}

/// Recursion body: a closure that, given the definition name, rebuilds the
/// node tree with a `$ref` placeholder standing in for the recursive
/// occurrences.  Held behind an `Arc` so nodes stay cheap to clone.
#[derive(Clone)]
pub(crate) struct RecursionBody(pub(crate) Arc<dyn Fn(&str) -> NodeKind + Send + Sync>);

impl fmt::Debug for RecursionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecursionBody").finish_non_exhaustive()
    }
}

/// Explicit discriminant for every node shape.  Lowering is a single
/// exhaustive `match` over this enum in [`crate::lower`].
#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Primitive(PrimitiveType),
    PrimitiveList(Vec<PrimitiveType>),
    Describe {
        base: Box<NodeKind>,
        text: String,
    },
    OrNull(Box<NodeKind>),
    Enum {
        base: Box<NodeKind>,
        values: Vec<Value>,
    },
    Object(Fields),
    Array(Box<NodeKind>),
    Union(Vec<NodeKind>),
    Merge(Vec<NodeKind>),
    Pick {
        base: Box<NodeKind>,
        keys: Vec<String>,
    },
    Omit {
        base: Box<NodeKind>,
        keys: Vec<String>,
    },
    Ref(String),
    AsRef {
        name: String,
        base: Box<NodeKind>,
    },
    Recursion {
        name: String,
        body: RecursionBody,
    },
}

/// An immutable schema node tagged with the data type `T` it describes and
/// a capability marker `K`.
///
/// ```
/// use forma_core::{string, number, object, fields, generate};
///
/// let person = object(fields! {
///     name: string().describe("Full name"),
///     age: number(),
/// });
///
/// let handle = generate(person)?;
/// assert_eq!(handle.json()["required"][0], "name");
/// # Ok::<(), forma_core::FormaError>(())
/// ```
pub struct Schema<T, K = marker::Any> {
    pub(crate) kind: NodeKind,
    _tag: PhantomData<fn() -> (T, K)>,
}

impl<T, K> Clone for Schema<T, K> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            _tag: PhantomData,
        }
    }
}

impl<T, K> fmt::Debug for Schema<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema").field("kind", &self.kind).finish()
    }
}

impl<T, K> Schema<T, K> {
    pub(crate) fn from_kind(kind: NodeKind) -> Self {
        Self {
            kind,
            _tag: PhantomData,
        }
    }

    pub(crate) fn into_kind(self) -> NodeKind {
        self.kind
    }

    /// Attach (or replace) the `description` keyword.
    ///
    /// Re-applying `describe` *replaces* the previous text, it never
    /// appends:
    ///
    /// ```
    /// use forma_core::{string, generate};
    ///
    /// let doc = generate(string().describe("First").describe("Second"))?;
    /// assert_eq!(doc.json()["description"], "Second");
    /// # Ok::<(), forma_core::FormaError>(())
    /// ```
    pub fn describe(self, text: impl Into<String>) -> Self {
        Self::from_kind(NodeKind::Describe {
            base: Box::new(self.kind),
            text: text.into(),
        })
    }

    /// Register this node's lowered fragment under `name` in the document's
    /// `$defs` table and lower every call site to `{"$ref": "#/$defs/name"}`.
    ///
    /// Reusing one `into_ref`-wrapped node (by cloning it) at several call
    /// sites is the supported idiom for a single shared definition.
    pub fn into_ref(self, name: impl Into<String>) -> Schema<T, marker::Any> {
        Schema::from_kind(NodeKind::AsRef {
            name: name.into(),
            base: Box::new(self.kind),
        })
    }

    /// Two-member union of `self` and `other`; sugar for
    /// [`any_of!`](crate::any_of).
    pub fn or<U, K2>(self, other: Schema<U, K2>) -> Schema<Value, marker::Any> {
        Schema::from_kind(NodeKind::Union(vec![self.kind, other.into_kind()]))
    }

    /// Erase the compile-time tags, keeping the node itself.  Needed when
    /// collecting heterogeneously typed members for
    /// [`union`](crate::union::union).
    pub fn untyped(self) -> Schema<Value, marker::Any> {
        Schema::from_kind(self.kind)
    }

    /// Re-tag the node with a different output type.
    ///
    /// This is an *unchecked assertion*, the same seam the SDK's
    /// `json_schema` converter exposes: the caller promises that values
    /// matching the schema deserialize into `U`.  Typically used to bind an
    /// [`object`](crate::object::object) node to a concrete serde struct.
    pub fn typed<U>(self) -> Schema<U, K> {
        Schema::from_kind(self.kind)
    }
}

impl<T, K: marker::Nullable> Schema<T, K> {
    /// Widen the schema with `"null"`.
    ///
    /// Lowering normalises the fragment's `type` to a set, unions in
    /// `"null"` and re-emits the array in first-seen order, so the
    /// operation is idempotent.  Fragments without a `type` keyword
    /// (unions lowered to `anyOf`, `$ref` nodes) are rejected with
    /// [`FormaError::NullableWithoutType`](crate::FormaError).
    pub fn or_null(self) -> Schema<Option<T>, K> {
        Schema::from_kind(NodeKind::OrNull(Box::new(self.kind)))
    }
}

/// Type-level mapping from a schema value to the data shape it describes.
///
/// Implemented both for [`Schema<T, K>`] and for the opaque
/// [`SdkSchema<T>`](crate::sdk::SdkSchema) handle, and the two always agree
/// for any node — the soundness property the library exists to guarantee.
pub trait Typed {
    type Output;
}

impl<T, K> Typed for Schema<T, K> {
    type Output = T;
}
