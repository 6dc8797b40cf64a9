use std::process::Command;

use anyhow::{Context, Result};

const DOMAIN_FEATURE_SETS: &[&[&str]] = &[
    &[], // default
    &["ts-gen"],
];

/// Check that `fleetbook-domain` compiles with and without optional features.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} fleetbook-domain feature sets...", DOMAIN_FEATURE_SETS.len());

    for (index, features) in DOMAIN_FEATURE_SETS.iter().enumerate() {
        let joined = features.join(",");
        let label = if features.is_empty() { "default".to_string() } else { joined.clone() };

        println!(
            "\n[{}/{}] cargo check -p fleetbook-domain{}",
            index + 1,
            DOMAIN_FEATURE_SETS.len(),
            if features.is_empty() { String::new() } else { format!(" --features {joined}") }
        );

        let mut command = Command::new("cargo");
        command.args(["check", "-p", "fleetbook-domain"]);
        if !features.is_empty() {
            command.arg("--features").arg(&joined);
        }

        let status =
            command.status().with_context(|| format!("Failed to run cargo check for '{label}'"))?;
        if !status.success() {
            anyhow::bail!("Feature set '{label}' failed to compile");
        }

        println!("✅ Features '{label}' compiled successfully");
    }

    Ok(())
}
