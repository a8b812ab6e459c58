//! # Seed Data Generator
//!
//! Populates the database with sample pets for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 pets (default)
//! cargo run -p petstore-db --bin seed
//!
//! # Generate custom amount into a specific file
//! cargo run -p petstore-db --bin seed -- --count 500 --db ../database/database.db
//! ```
//!
//! Names cycle through a fixed list with a numeric suffix once the list is
//! exhausted; statuses rotate available → pending → sold.

use std::env;

use petstore_core::{NewPet, PetStatus};
use petstore_db::{Database, DbConfig, PetRepository};

const NAMES: &[&str] = &[
    "Rex", "Bella", "Max", "Luna", "Charlie", "Lucy", "Cooper", "Daisy", "Milo", "Bailey",
    "Buddy", "Sadie", "Rocky", "Molly", "Bear", "Lola", "Tucker", "Zoe", "Duke", "Stella",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("../database/database.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Petstore Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of pets to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ../database/database.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Petstore Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!("Pets:     {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let pets = db.pets();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = pets.count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} pets", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for n in 0..count {
        let new_pet = generate_pet(n);
        if let Err(e) = pets.add(new_pet.clone()).await {
            eprintln!("Failed to insert {}: {}", new_pet.name, e);
            continue;
        }
        generated += 1;
    }

    println!();
    println!("✓ Generated {} pets in {:?}", generated, start.elapsed());

    for status in PetStatus::ALL {
        let n = pets.list(Some(status)).await?.len();
        println!("  {:<10} {}", status, n);
    }

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Generates the n-th sample pet.
fn generate_pet(n: usize) -> NewPet {
    let base = NAMES[n % NAMES.len()];
    let round = n / NAMES.len();
    let name = if round == 0 {
        base.to_string()
    } else {
        format!("{} {}", base, round + 1)
    };

    NewPet::new(name).with_status(PetStatus::ALL[n % PetStatus::ALL.len()])
}
