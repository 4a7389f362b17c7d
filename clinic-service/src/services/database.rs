use crate::models::{Record, Resource};
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

/// Shared handle on the document store. Built once at startup and cloned
/// into every handler; never mutated afterwards.
#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client initialized");
        Ok(Self { client, db })
    }

    /// The driver connects lazily, so this ping is the first real
    /// round-trip. Startup runs it before binding the listener.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn records(&self, resource: Resource) -> Collection<Record> {
        self.db.collection(resource.collection_name())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
