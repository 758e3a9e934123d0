//! sample command - Print the loaded dataset as JSON
//!
//! The output round-trips through `--data`, so a generated dataset can
//! be captured once and replayed in later runs or tests.

use anyhow::Result;

use crate::engine::Registry;
use crate::sample;

/// Print every folder in the registry as pretty-printed JSON.
pub fn sample(registry: &Registry) -> Result<()> {
    println!("{}", sample::to_json(&registry.all_folders())?);
    Ok(())
}
