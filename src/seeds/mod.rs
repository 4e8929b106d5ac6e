mod orders_seed;
mod products_seed;
mod users_seed;

pub use orders_seed::*;
pub use products_seed::*;
pub use users_seed::*;

use std::collections::BTreeMap;
use std::fmt;

use mongodb::bson::{DateTime, Document};
use serde::Serialize;

use crate::database::{default_indexes, DocumentStore};
use crate::models::Order;
use crate::utils::AppError;

pub const USERS: &str = "users";
pub const PRODUCTS: &str = "products";
pub const ORDERS: &str = "orders";

/// Contagem final de cada collection e os índices presentes nelas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub products: u64,
    pub orders: u64,
    pub indexes: BTreeMap<&'static str, Vec<String>>,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== MongoDB Initialization Complete ===")?;
        writeln!(f, "Created collections: {}, {}, {}", USERS, PRODUCTS, ORDERS)?;
        writeln!(f, "Inserted sample data and created indexes")?;
        writeln!(f, "Users count: {}", self.users)?;
        writeln!(f, "Products count: {}", self.products)?;
        write!(f, "Orders count: {}", self.orders)
    }
}

/// Totais divergentes são gravados mesmo assim; só fica o aviso no log
fn warn_on_total_mismatch(orders: &[Order]) -> usize {
    let mut mismatches = 0;
    for order in orders.iter().filter(|o| !o.total_matches_items()) {
        log::warn!(
            "⚠️  {}: totalAmount {:.2} differs from items subtotal {:.2}",
            order.order_id,
            order.total_amount,
            order.items_subtotal()
        );
        mismatches += 1;
    }
    mismatches
}

fn to_documents<T: Serialize>(items: &[T]) -> Result<Vec<Document>, AppError> {
    items
        .iter()
        .map(|item| mongodb::bson::to_document(item).map_err(AppError::from))
        .collect()
}

/// Carga inicial: três inserts em lote, seis índices e a contagem final.
/// Pensado para rodar uma vez contra um banco vazio; qualquer erro aborta
/// a execução sem desfazer o que já foi gravado.
pub struct Seeder<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> Seeder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn run(&self) -> Result<SeedReport, AppError> {
        let now = DateTime::now();

        self.insert(USERS, to_documents(&seed_users(now))?).await?;
        self.insert(PRODUCTS, to_documents(&seed_products(now))?).await?;
        let orders = seed_orders()?;
        warn_on_total_mismatch(&orders);
        self.insert(ORDERS, to_documents(&orders)?).await?;

        self.create_indexes().await?;

        self.report().await
    }

    async fn insert(&self, collection: &str, documents: Vec<Document>) -> Result<usize, AppError> {
        log::info!("📥 Inserting {} documents into {}...", documents.len(), collection);

        match self.store.insert_many(collection, documents).await {
            Ok(inserted) => {
                log::info!("   ✅ Inserted {} documents into {}", inserted, collection);
                Ok(inserted)
            }
            Err(e) => {
                log::error!("   ❌ Failed to insert into {}: {}", collection, e);
                Err(e)
            }
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        log::info!("🔧 Creating database indexes...");

        for index in default_indexes() {
            let fields = index.fields().join(", ");
            match self.store.create_index(index.collection, &index).await {
                Ok(name) => log::info!("   ✅ Index created: {}({}) as {}", index.collection, fields, name),
                Err(e) => {
                    log::error!("   ❌ Failed to create index {}({}): {}", index.collection, fields, e);
                    return Err(e);
                }
            }
        }

        log::info!("✅ Database indexes ready");
        Ok(())
    }

    pub async fn report(&self) -> Result<SeedReport, AppError> {
        let mut indexes = BTreeMap::new();
        for collection in [USERS, PRODUCTS, ORDERS] {
            let names = self.store.list_index_names(collection).await?;
            log::info!("📋 {} indexes: {}", collection, names.join(", "));
            indexes.insert(collection, names);
        }

        Ok(SeedReport {
            users: self.store.count_documents(USERS).await?,
            products: self.store.count_documents(PRODUCTS).await?,
            orders: self.store.count_documents(ORDERS).await?,
            indexes,
        })
    }
}
