//! Build the argument schema for a weather tool call and print the exact
//! document a provider would receive.
//!
//! ```sh
//! cargo run --example structured_output
//! ```

use forma::{any_of, array, boolean, fields, generate, number, object, string};

fn main() -> anyhow::Result<()> {
    let forecast = object(fields! {
        location: string().describe("City and country, e.g. `Lisbon, Portugal`"),
        days: number().describe("Forecast horizon in days"),
        units: string().enum_values(["metric", "imperial"]).or_null(),
        extras: {
            include_wind: boolean(),
            include_humidity: boolean(),
        },
        notes: array(any_of![string(), number()]),
    });

    let handle = generate(forecast)?;
    println!("{}", serde_json::to_string_pretty(handle.json())?);
    Ok(())
}
