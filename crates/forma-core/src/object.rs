//! Object schemas: the field-mapping sugar, the [`object`] constructor and
//! the object algebra (`merge` / `pick` / `omit`).
//!
//! Field declaration order is load-bearing: `properties` iterates in
//! insertion order and `required` lists every declared field in that same
//! order (there is no optional-field concept — structured-output endpoints
//! want every property required).

use serde_json::Value;

use crate::node::{marker, NodeKind, Schema};

/// An ordered mapping from field name to schema, accepted wherever an
/// object node is expected.  Nested groups denote inline nested objects.
///
/// Usually built with the [`fields!`](crate::fields) macro; the builder
/// methods below are the macro-free spelling:
///
/// ```
/// use forma_core::{object, string, number, Fields};
///
/// let person = object(
///     Fields::new()
///         .field("name", string())
///         .field("age", number()),
/// );
/// # let _ = person;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fields {
    pub(crate) entries: Vec<(String, Field)>,
}

#[derive(Debug, Clone)]
pub(crate) enum Field {
    Node(NodeKind),
    Group(Fields),
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field holding a schema node.
    pub fn field<T, K>(mut self, name: impl Into<String>, schema: Schema<T, K>) -> Self {
        self.entries.push((name.into(), Field::Node(schema.into_kind())));
        self
    }

    /// Append an inline nested object described by its own field mapping.
    pub fn group(mut self, name: impl Into<String>, fields: Fields) -> Self {
        self.entries.push((name.into(), Field::Group(fields)));
        self
    }
}

/// Declare a [`Fields`] mapping with object-literal syntax.  Nested braces
/// declare inline nested objects; keys may be identifiers or string
/// literals.
///
/// ```
/// use forma_core::{fields, string, number, object, generate};
///
/// let schema = object(fields! {
///     name: string(),
///     address: {
///         city: string(),
///         zip: string(),
///     },
///     "kebab-cased": number(),
/// });
/// let doc = generate(schema)?;
/// assert_eq!(doc.json()["properties"]["address"]["type"], "object");
/// # Ok::<(), forma_core::FormaError>(())
/// ```
#[macro_export]
macro_rules! fields {
    () => { $crate::object::Fields::new() };
    ($($body:tt)+) => { $crate::__fields_internal!(@build $crate::object::Fields::new(); $($body)+) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fields_internal {
    (@build $acc:expr; ) => { $acc };
    (@build $acc:expr; $name:ident : { $($inner:tt)* } $(, $($rest:tt)*)? ) => {
        $crate::__fields_internal!(
            @build $acc.group(stringify!($name), $crate::fields!($($inner)*));
            $($($rest)*)?
        )
    };
    (@build $acc:expr; $name:literal : { $($inner:tt)* } $(, $($rest:tt)*)? ) => {
        $crate::__fields_internal!(
            @build $acc.group($name, $crate::fields!($($inner)*));
            $($($rest)*)?
        )
    };
    (@build $acc:expr; $name:ident : $schema:expr $(, $($rest:tt)*)? ) => {
        $crate::__fields_internal!(
            @build $acc.field(stringify!($name), $schema);
            $($($rest)*)?
        )
    };
    (@build $acc:expr; $name:literal : $schema:expr $(, $($rest:tt)*)? ) => {
        $crate::__fields_internal!(
            @build $acc.field($name, $schema);
            $($($rest)*)?
        )
    };
}

/// Build an object node from a field mapping.
///
/// Lowers to `{"type": "object", "properties": …, "required": [every key,
/// declaration order], "additionalProperties": false}`.  The phantom output
/// type is [`Value`]; bind a concrete serde struct with
/// [`typed`](Schema::typed) when you have one.
pub fn object(fields: Fields) -> Schema<Value, marker::Object> {
    Schema::from_kind(NodeKind::Object(fields))
}

impl<T> Schema<T, marker::Object> {
    /// Combine two object schemas into one.
    ///
    /// Properties are unioned with the *later* schema winning on a name
    /// collision; `required` lists are concatenated in argument order
    /// (collisions may therefore appear twice — plain concatenation, no
    /// dedup).  Chain the call for wider merges:
    /// `a.merge(b).merge(c)`.
    ///
    /// Every part must lower to an object fragment; anything else (a
    /// `$ref`, a union, a nulled object) fails with
    /// [`FormaError::MergeExpectsObjects`](crate::FormaError).
    pub fn merge<U, K2>(self, other: Schema<U, K2>) -> Schema<Value, marker::Object> {
        Schema::from_kind(NodeKind::Merge(vec![self.kind, other.into_kind()]))
    }

    /// Keep only the named properties, in the *requested* order.
    ///
    /// Unknown names are silently skipped — not an error.  `required` is
    /// exactly the filtered, requested-order list.
    pub fn pick<I>(self, keys: I) -> Schema<Value, marker::Object>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Schema::from_kind(NodeKind::Pick {
            base: Box::new(self.kind),
            keys: keys.into_iter().map(Into::into).collect(),
        })
    }

    /// Drop the named properties, keeping the *source's* original order for
    /// the rest.  Names that do not match anything are silently ignored.
    pub fn omit<I>(self, keys: I) -> Schema<Value, marker::Object>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Schema::from_kind(NodeKind::Omit {
            base: Box::new(self.kind),
            keys: keys.into_iter().map(Into::into).collect(),
        })
    }
}
