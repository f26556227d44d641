//! HTTP server for the catalog API

use super::handlers::{self, Resource};
use super::{docs, ApiError};
use crate::clients::ProductClient;
use crate::framework::ActorClient;
use crate::lifecycle::CatalogSystem;
use crate::model::{Brand, Category, Movie, Product, User};
use axum::routing::get;
use axum::Router;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The six CRUD routes of one collection, bound to its client.
fn resource_routes<T, C>(client: C) -> Router
where
    T: Resource,
    T::Id: FromStr,
    T::Create: DeserializeOwned,
    T::Update: DeserializeOwned,
    C: ActorClient<T> + Clone + 'static,
    ApiError: From<C::Error>,
{
    Router::new()
        .route(
            "/",
            get(handlers::list::<T, C>).post(handlers::create::<T, C>),
        )
        .route(
            "/{id}",
            get(handlers::get_one::<T, C>)
                .put(handlers::update::<T, C>)
                .patch(handlers::patch::<T, C>)
                .delete(handlers::delete::<T, C>),
        )
        .with_state(client)
}

fn product_routes(client: ProductClient) -> Router {
    Router::new()
        .route("/category/{category_id}", get(handlers::products_by_category))
        .route("/brand/{brand_id}", get(handlers::products_by_brand))
        .with_state(client.clone())
        .merge(resource_routes::<Product, _>(client))
}

/// Creates the application router over the system's clients.
///
/// The router holds client clones; it must be dropped before [`CatalogSystem::shutdown`]
/// can complete.
pub fn create_app(system: &CatalogSystem) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .nest(
            "/brands",
            resource_routes::<Brand, _>(system.brand_client.clone()),
        )
        .nest(
            "/categories",
            resource_routes::<Category, _>(system.category_client.clone()),
        )
        .nest("/products", product_routes(system.product_client.clone()))
        .nest(
            "/users",
            resource_routes::<User, _>(system.user_client.clone()),
        )
        .nest(
            "/movies",
            resource_routes::<Movie, _>(system.movie_client.clone()),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on `addr` until `shutdown` resolves.
pub async fn start_server(
    addr: SocketAddr,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", listener.local_addr()?);
    info!("OpenAPI document at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
