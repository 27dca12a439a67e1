//! # Catalog Showcase
//!
//! Narrated walkthrough of the catalog: loads configuration and the catalog
//! document, prints listings and per-category statistics, demonstrates the
//! resolve merge and an order snapshot, and finishes with registry totals.
//!
//! ## Usage
//! ```bash
//! # Default config resolution + data/products.json
//! cargo run -p lavka-data --bin showcase
//!
//! # Point at another catalog document
//! LAVKA_CATALOG_PATH=./catalogs/shop.json cargo run -p lavka-data --bin showcase
//!
//! # Verbose logging
//! RUST_LOG=debug cargo run -p lavka-data --bin showcase
//! ```

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lavka_core::{Money, Order, Product, ProductInfo, Registry, Resolved};
use lavka_data::{load_catalog, CatalogConfig, DataResult, TracingObserver};

fn main() {
    if let Err(err) = run() {
        eprintln!("Ошибка: {err}");
        std::process::exit(1);
    }
}

fn run() -> DataResult<()> {
    // Initialize tracing (RUST_LOG controls verbosity, info by default)
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Запуск каталога «Лавка»");

    // Load configuration: defaults ← file ← environment
    let config = CatalogConfig::load_or_default();
    info!(catalog = %config.catalog.path.display(), "Конфигурация загружена");

    // Every entity announces itself through the tracing observer
    let registry = Registry::with_observer(TracingObserver);
    let catalog = load_catalog(&config.catalog.path, &registry)?;

    // Listings and per-category statistics
    for category in &catalog {
        println!("\n=== {category} ===");
        println!("{}", category.listing_with(&config.display));
        println!(
            "Средняя цена: {} {}",
            category.average_price(),
            config.display.currency_suffix
        );
        println!(
            "Всего единиц: {} {}",
            category.total_quantity(),
            config.display.unit_suffix
        );
    }

    // Resolve: merging a delivery into existing stock
    if let Some(category) = catalog.first() {
        let mut stock = category.products().to_vec();
        if let Some(first) = stock.first() {
            let incoming = ProductInfo::new(
                first.name(),
                first.description(),
                85000.0,
                3,
            );
            println!("\n--- Слияние поставки ---");
            println!("Поставка: {} x{}", incoming.name, incoming.quantity);

            match Product::resolve(&incoming, &mut stock)? {
                Resolved::Updated(updated) => {
                    println!("Обновлён существующий товар: {}", updated.summary());
                }
                Resolved::Created(created) => {
                    println!("Создан новый товар: {}", created.summary());
                }
            }
        }
    }

    // Specialized kinds render an extra attribute line
    let smartphone = Product::smartphone(
        "iPhone 13",
        "Смартфон от Apple",
        Money::from_kopecks(8_000_000),
        5,
        "A15 Bionic",
        "iPhone 13",
        128,
        "Черный",
    )?;
    println!("\n--- Специализированные виды ---");
    println!("{smartphone}");
    if let Some(details) = smartphone.details() {
        println!("{details}");
    }

    // Orders freeze the price at creation time
    let order = Order::new(&smartphone, 2)?;
    println!("\n--- Заказ ---");
    println!("{order}");

    // Registry totals across the whole run
    println!("\n--- Итоги ---");
    println!("Категорий создано: {}", registry.categories_created());
    println!("Продуктов добавлено: {}", registry.products_added());

    Ok(())
}
