//! # Seed Data Generator
//!
//! Populates the database with a realistic market day of purchases for
//! development of the history screen and the sales report.
//!
//! ## Usage
//! ```bash
//! # Generate 200 purchases (default)
//! cargo run -p feira-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p feira-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p feira-db --bin seed -- --db ./data/feira.db
//! ```
//!
//! ## Generated Purchases
//! Typical school-fair fare (pastel, caldo de cana, churros...) spread
//! across cash, card and Pix, with cash purchases carrying a plausible
//! tendered amount so change shows up in receipts.

use chrono::{Duration, Utc};
use std::env;
use uuid::Uuid;

use feira_core::{LineItem, PaymentMethod, Purchase};
use feira_db::{Database, DbConfig};

/// Stall menu: (name, price in centavos, promo price when on offer)
const MENU: &[(&str, i64, Option<i64>)] = &[
    ("Pastel de carne", 800, None),
    ("Pastel de queijo", 800, None),
    ("Caldo de cana", 600, Some(500)),
    ("Churros", 700, None),
    ("Milho cozido", 500, None),
    ("Cachorro-quente", 900, None),
    ("Refrigerante lata", 500, None),
    ("Agua mineral", 300, None),
    ("Bolo de pote", 1000, Some(800)),
    ("Pipoca doce", 400, None),
];

const OPERATORS: &[&str] = &["Maria", "Joao", "Ana"];

const METHODS: &[PaymentMethod] = &[
    PaymentMethod::Cash,
    PaymentMethod::Card,
    PaymentMethod::Pix,
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./feira_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
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
                println!("Feira POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of purchases to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./feira_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Feira POS Seed Data Generator");
    println!("=============================");
    println!("Database:  {}", db_path);
    println!("Purchases: {}", count);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected, migrations applied");

    let existing = db.purchases().count().await?;
    if existing > 0 {
        println!("Database already has {} purchases", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    println!("Generating purchases...");

    let start = std::time::Instant::now();
    let day_start = Utc::now() - Duration::hours(8);

    let mut generated = 0;
    for seed in 0..count {
        let purchase = generate_purchase(seed, day_start);
        if let Err(e) = db.purchases().insert(&purchase).await {
            eprintln!("Failed to insert purchase {}: {}", purchase.id, e);
            continue;
        }
        generated += 1;

        if generated % 50 == 0 {
            println!("  Generated {} purchases...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("Generated {} purchases in {:?}", generated, elapsed);

    let total = db.purchases().count().await?;
    println!("Database now holds {} purchases", total);
    println!("Seed complete!");

    Ok(())
}

/// Generates a single purchase with deterministic pseudo-random content.
fn generate_purchase(seed: usize, day_start: chrono::DateTime<Utc>) -> Purchase {
    let method = METHODS[seed % METHODS.len()];
    let operator = OPERATORS[seed % OPERATORS.len()];

    // 1-3 line items per purchase
    let item_count = 1 + (seed * 7) % 3;
    let items: Vec<LineItem> = (0..item_count)
        .map(|n| {
            let (name, price, promo) = MENU[(seed * 13 + n * 5) % MENU.len()];
            let quantity = 1 + ((seed + n) % 3) as i64;
            match promo {
                Some(promo_price) => LineItem {
                    name: name.to_string(),
                    quantity,
                    unit_price_cents: promo_price,
                    original_price_cents: Some(price),
                },
                None => LineItem {
                    name: name.to_string(),
                    quantity,
                    unit_price_cents: price,
                    original_price_cents: None,
                },
            }
        })
        .collect();

    let total: i64 = items.iter().map(LineItem::line_total_cents).sum();

    // Cash customers hand over the next round 5-real note
    let tendered_cents = match method {
        PaymentMethod::Cash => Some(((total / 500) + 1) * 500),
        _ => None,
    };

    Purchase {
        id: Uuid::new_v4().to_string(),
        operator: operator.to_string(),
        method,
        tendered_cents,
        items,
        created_at: day_start + Duration::seconds((seed * 137) as i64),
    }
}
