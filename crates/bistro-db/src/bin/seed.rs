//! # Seed Data Generator
//!
//! Populates the store with a demo menu for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./bistro_dev.db
//! cargo run -p bistro-db --bin seed
//!
//! # Specify database path
//! cargo run -p bistro-db --bin seed -- --db ./data/bistro.db
//! ```
//!
//! Categories get fixed ids so the dishes can point at them. Seeding is
//! skipped when the store already has foods.

use std::env;

use bistro_core::{Category, Food, Money};
use bistro_db::{Collection, Database, DbConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// (id, name, description)
///
/// Category 1 is "All": the category screen lists every dish under it.
const CATEGORIES: &[(i64, &str, &str)] = &[
    (1, "All", "Everything on the menu"),
    (2, "Breakfast", "Warm plates to start the day"),
    (3, "Grills", "Charcoal-grilled meats and skewers"),
    (4, "Mezze", "Small plates for sharing"),
    (5, "Desserts", "Pastries and sweets"),
    (6, "Drinks", "Fresh juices and hot drinks"),
];

/// (category_id, name, price_cents, rating, description)
const FOODS: &[(i64, &str, i64, f64, &str)] = &[
    (2, "Shakshuka", 899, 4.7, "Eggs poached in spiced tomato sauce"),
    (2, "Foul Medames", 699, 4.4, "Slow-cooked fava beans with olive oil"),
    (2, "Manakish Za'atar", 499, 4.6, "Flatbread with thyme and sesame"),
    (3, "Chicken Shawarma", 1099, 4.8, "Marinated chicken, garlic sauce, pickles"),
    (3, "Kofta Skewers", 1299, 4.5, "Minced lamb with parsley and onion"),
    (3, "Mixed Grill", 1899, 4.6, "Shish tawook, kofta and lamb chops"),
    (4, "Hummus", 550, 4.9, "Chickpeas blended with tahini and lemon"),
    (4, "Falafel Plate", 850, 4.5, "Chickpea fritters with tahini"),
    (4, "Fattoush", 650, 4.3, "Crisp bread salad with sumac"),
    (5, "Knafeh", 750, 4.9, "Cheese pastry soaked in syrup"),
    (5, "Baklava", 600, 4.6, "Layered filo with pistachio"),
    (6, "Mint Lemonade", 350, 4.7, "Blended lemon and fresh mint"),
    (6, "Arabic Coffee", 299, 4.4, "Cardamom coffee"),
];

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./bistro_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bistro Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./bistro_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(arg = other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    info!(path = %db_path, "Seeding database");
    let db = Database::new(DbConfig::new(&db_path)).await?;

    let existing = db.count(Collection::Foods).await?;
    if existing > 0 {
        warn!(existing, "Database already has foods; delete the file to regenerate");
        return Ok(());
    }

    for (id, name, description) in CATEGORIES {
        let category = Category {
            id: *id,
            name: name.to_string(),
            description: description.to_string(),
            image_url: format!("https://img.bistro.test/categories/{}.jpg", id),
        };
        if let Err(e) = db.categories().insert(&category).await {
            error!(name, error = %e, "Failed to insert category");
        }
    }

    let mut inserted = 0;
    for (index, (category_id, name, cents, rating, description)) in FOODS.iter().enumerate() {
        let food = Food {
            id: index as i64 + 1,
            name: name.to_string(),
            description: description.to_string(),
            image_url: format!("https://img.bistro.test/foods/{}.jpg", index + 1),
            price: Some(Money::from_cents(*cents)),
            rating: Some(*rating),
            nutritional_info: None,
            category_id: Some(*category_id),
        };
        match db.foods().insert(&food).await {
            Ok(_) => inserted += 1,
            Err(e) => error!(name, error = %e, "Failed to insert food"),
        }
    }

    for collection in Collection::ALL {
        info!(collection = %collection, count = db.count(collection).await?, "Collection size");
    }
    info!(inserted, "Seed complete");

    Ok(())
}
