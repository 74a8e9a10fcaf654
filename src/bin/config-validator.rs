//! # Channel Configuration Validator
//!
//! A command-line utility that runs the channel validators over a JSON
//! configuration document and prints every diagnostic found.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin config-validator config.json
//! cargo run --bin config-validator config.json registry.json
//! ```
//!
//! Without a registry file the built-in channel catalog is used. Values equal
//! to `"(known after apply)"` are treated as unknown and skipped.
//!
//! ## Output Example
//!
//! ```text
//! Validating configuration: config.json
//! Error: Invalid Fields at channels[0].definition: Invalid fields for channel type SLACK: token. Allowed fields: channel, iconEmoji, url, username
//! Error: Invalid Attribute Value at channels[1].ownerId: Attribute channels[1].ownerId value must be a cuid, got: "c123"
//!
//! 2 errors in 2 channels
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: No errors
//! - `1`: Errors were reported or the input could not be loaded
//!
//! Set `RUST_LOG=debug` for validation pass logging.

use provider_validators::config::ConfigValue;
use provider_validators::fields::DiscriminatorRegistry;
use provider_validators::validators::ChannelConfigValidator;
use std::env;
use std::fs;
use std::path::Path;
use std::process;
use std::sync::Arc;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [registry.json]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} channels.json", args[0]);
        eprintln!("  {} channels.json custom-registry.json", args[0]);
        process::exit(1);
    }

    let registry = match args.get(2) {
        Some(path) => DiscriminatorRegistry::from_file(path),
        None => DiscriminatorRegistry::builtin(),
    };
    let registry = match registry {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("❌ Failed to load registry: {}", e);
            process::exit(1);
        }
    };

    let path = Path::new(&args[1]);
    println!("Validating configuration: {}", path.display());

    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let validator = ChannelConfigValidator::new(Arc::new(registry));
    let diagnostics = validator.validate(&config);

    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    let channel_count = config
        .as_object()
        .and_then(|obj| obj.get("channels"))
        .and_then(ConfigValue::as_list)
        .map_or(0, <[ConfigValue]>::len);

    if diagnostics.has_error() {
        println!(
            "\n{} errors in {} channels",
            diagnostics.error_count(),
            channel_count
        );
        process::exit(1);
    }

    println!("✓ {} channels are valid", channel_count);
}

fn load_config(path: &Path) -> Result<ConfigValue, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;
    if !json.is_object() {
        return Err("configuration root must be a JSON object".into());
    }
    Ok(ConfigValue::from_json(&json))
}
