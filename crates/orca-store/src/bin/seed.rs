//! # Seed Data Generator
//!
//! Populates a store with the starter collections for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p orca-store --bin seed
//!
//! # Specify database path
//! cargo run -p orca-store --bin seed -- --db ./data/orca.db
//!
//! # Overwrite an already-seeded database
//! cargo run -p orca-store --bin seed -- --fresh
//! ```
//!
//! ## What Gets Written
//! The five collections a fresh install starts from:
//! - `settings`     - Default pricing settings
//! - `services`     - The six starter services (outlet, switch, shower, ...)
//! - `materials`    - The five starter materials with full stock
//! - `history`      - Empty quote history
//! - `user-profile` - Sample letterhead profile

use std::env;

use orca_core::{catalog, RateSettings, UserProfile};
use orca_store::{migrations, Store, StoreConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet by default; RUST_LOG=debug shows the store internals
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./orca_dev.db");
    let mut fresh = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--fresh" | "-f" => {
                fresh = true;
            }
            "--help" | "-h" => {
                println!("Orca Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./orca_dev.db)");
                println!("  -f, --fresh        Overwrite existing collections with starter data");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("⚡ Orca Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = StoreConfig::new(&db_path);
    let store = Store::new(config).await?;

    let (total, applied) = migrations::migration_status(store.pool()).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied ({}/{})", applied, total);

    // Check existing collections
    let repo = store.collections();
    let existing = repo.list_names().await?;
    if !existing.is_empty() && !fresh {
        println!("⚠ Database already has {} collections", existing.len());
        println!("  Skipping seed to avoid clobbering real data.");
        println!("  Re-run with --fresh to overwrite.");
        return Ok(());
    }

    // Write the starter collections
    println!();
    println!("Writing starter collections...");

    repo.save_settings(&RateSettings::default()).await?;
    println!("  ✓ settings");

    let services = catalog::starter_services();
    repo.save_services(&services).await?;
    println!("  ✓ services ({} entries)", services.len());

    let materials = catalog::starter_materials();
    repo.save_materials(&materials).await?;
    println!("  ✓ materials ({} entries)", materials.len());

    repo.save_history(&[]).await?;
    println!("  ✓ history (empty)");

    repo.save_profile(&UserProfile::default()).await?;
    println!("  ✓ user-profile");

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
