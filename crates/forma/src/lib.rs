//! # `forma` – typed JSON-Schema combinators for structured LLM output
//!
//! Build **draft-07 JSON Schema** documents from a small combinator DSL
//! while the compiler tracks the data type each schema describes.  The
//! schema you ship to a provider and the type you deserialize its answer
//! into come from the same expression, so they can never drift apart.
//!
//! | Concern | Where it lives |
//! |---------------------------|------------------------------------------------|
//! | Node constructors         | [`string`], [`number`], [`boolean`], [`integer`], [`null`], [`object`], [`array`], [`union`], [`primitive_union`], [`reference`], [`recursion`] |
//! | Chainable modifiers       | [`Schema::describe`], [`Schema::or_null`], [`Schema::enum_values`](forma_core::Schema), [`Schema::into_ref`], [`Schema::or`], `merge`/`pick`/`omit` on object nodes |
//! | Declaration sugar         | [`fields!`], [`any_of!`]                        |
//! | Document assembly         | [`generate`] (one `$defs` table per call)       |
//! | SDK boundary              | [`json_schema`], [`SdkSchema`]                  |
//!
//! ## Design philosophy
//!
//! * **No procedural macros** – `fields!` and `any_of!` are ordinary
//!   declarative macros; everything else is plain functions and methods.
//! * **Values, not registries** – schema nodes are immutable values you
//!   clone and compose; the only mutable state is the per-call `$defs`
//!   table inside [`generate`].
//! * **Byte-stable documents** – key and property order is deterministic
//!   and snapshot-safe.
//!
//! ## Quick example
//!
//! ```
//! use forma::{generate, fields, object, array, string, number};
//!
//! let weather_args = generate(object(fields! {
//!     location: string().describe("City and country, e.g. `Lisbon, Portugal`"),
//!     days: number().describe("Forecast horizon in days"),
//!     units: string().enum_values(["metric", "imperial"]).or_null(),
//! }))?;
//!
//! // Ship `weather_args` with a tool definition; the handle serializes as
//! // the bare schema document.
//! println!("{}", serde_json::to_string_pretty(weather_args.json()).unwrap());
//! # Ok::<(), forma::FormaError>(())
//! ```
//!
//! See `examples/structured_output.rs` and `examples/recursive_schema.rs`
//! for runnable programs.

pub use forma_core::*;
