//! Provider schema generator
//!
//! Prints the schema of the provider block and of every resource and data
//! source as JSON.
//!
//! Usage: cargo run --bin schemagen > schema.json

use strimzi_crd_provider::provider::Provider;

fn main() -> anyhow::Result<()> {
    let schema = Provider::new().schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
