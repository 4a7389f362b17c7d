use crate::config::ClinicConfig;
use crate::handlers;
use crate::models::Resource;
use crate::services::MongoDb;
use axum::{
    routing::{get, put},
    Extension, Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: ClinicConfig,
    pub db: MongoDb,
}

/// The full HTTP surface. All three resources mount the same four generic
/// handlers; the `Extension` layer tells them which collection they serve.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/patients", resource_routes(Resource::Patients))
        .nest("/api/doctors", resource_routes(Resource::Doctors))
        .nest("/api/appointments", resource_routes(Resource::Appointments))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn resource_routes(resource: Resource) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_records).post(handlers::create_record),
        )
        .route(
            "/:id",
            put(handlers::update_record).delete(handlers::delete_record),
        )
        .layer(Extension(resource))
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ClinicConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database).await?;

        // Fail fast: never start listening against an unreachable store.
        db.health_check().await?;

        let state = AppState {
            config: config.clone(),
            db,
        };

        let app = api_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
