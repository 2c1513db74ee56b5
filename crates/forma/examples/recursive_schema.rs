//! A self-referential schema: a comment thread where every comment carries
//! a list of replies of the same shape, expressed with `recursion` and a
//! shared `$defs` entry.
//!
//! ```sh
//! cargo run --example recursive_schema
//! ```

use forma::{array, fields, generate, object, recursion, string};
use serde_json::Value;

fn main() -> anyhow::Result<()> {
    let comment = recursion::<Value, _, _>("Comment", |comment| {
        object(fields! {
            author: string(),
            body: string(),
            replies: array(comment),
        })
    });

    let handle = generate(object(fields! {
        thread_id: string(),
        comments: array(comment),
    }))?;

    println!("{}", serde_json::to_string_pretty(handle.json())?);
    Ok(())
}
