//! Unified error type exposed by **`forma-core`**.
//!
//! Every failure the engine can produce is a *usage* error detected while
//! lowering a node tree: there is no I/O, nothing transient and nothing to
//! retry.  Errors surface synchronously from [`crate::generate`] (or from a
//! doc-level lowering helper) before any schema handle is produced — a
//! document is either fully assembled or the call fails.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FormaError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormaError {
    /// `merge` was given a part that does not lower to an object fragment
    /// (e.g. a `$ref` or a union).  Merging only makes sense between object
    /// schemas, so this fails fast instead of producing a half-document.
    #[error("merge only accepts object schemas")]
    MergeExpectsObjects,

    /// `or_null` needs a fragment with a `type` keyword to widen.  Fragments
    /// built from `anyOf` or `$ref` carry no `type`, so nullability cannot
    /// be expressed by rewriting it.
    #[error("or_null requires a schema fragment with a `type` keyword")]
    NullableWithoutType,

    /// The same definition name was registered twice with *different*
    /// bodies within one document.  Re-registering an identical body is
    /// fine (the same recursive node may be lowered many times); two
    /// distinct bodies under one name is a naming bug.
    #[error("definition `{name}` was registered twice with different bodies")]
    DefinitionConflict { name: String },
}
