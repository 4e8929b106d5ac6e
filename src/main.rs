mod config;
mod database;
mod models;
mod seeds;
mod utils;

use dotenv::dotenv;

use config::SeedConfig;
use seeds::Seeder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Carrega variáveis de ambiente
    dotenv().ok();

    // Inicializa o logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SeedConfig::from_env();

    log::info!("🌱 Starting MongoDB seeder...");
    log::info!("📊 Database: {} ({})", config.database, config::redact_uri(&config.uri));

    let db = database::MongoDB::new(&config.uri, &config.database)
        .await
        .map_err(|e| {
            log::error!("❌ Failed to connect to MongoDB: {}", e);
            e
        })?;

    log::info!("✅ MongoDB connected successfully");

    // Sem retry nem limpeza: o primeiro erro encerra o processo
    let report = Seeder::new(&db).run().await.map_err(|e| {
        if e.is_duplicate_key() {
            log::error!("❌ Seed data already present in '{}': {}", db.name(), e);
        } else {
            log::error!("❌ Seeding failed: {}", e);
        }
        e
    })?;

    println!("{}", report);

    Ok(())
}
