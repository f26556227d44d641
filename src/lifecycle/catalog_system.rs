use crate::clients::{BrandClient, CategoryClient, MovieClient, ProductClient, UserClient};
use crate::config::{ActorConfig, StorageConfig};
use crate::framework::{open_backend, ActorClient, Backend, BackendError, MemoryBackend};
use crate::model::{Brand, Category, Movie, Product, User};
use crate::product_actor::ProductContext;
use crate::{brand_actor, category_actor, movie_actor, product_actor, user_actor};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The storage behind each collection, opened before any actor starts.
pub struct Backends {
    pub brands: Box<dyn Backend<Brand>>,
    pub categories: Box<dyn Backend<Category>>,
    pub products: Box<dyn Backend<Product>>,
    pub users: Box<dyn Backend<User>>,
    pub movies: Box<dyn Backend<Movie>>,
}

impl Backends {
    /// Empty in-memory collections.
    pub fn memory() -> Self {
        Self {
            brands: Box::new(MemoryBackend::<Brand>::new()),
            categories: Box::new(MemoryBackend::<Category>::new()),
            products: Box::new(MemoryBackend::<Product>::new()),
            users: Box::new(MemoryBackend::<User>::new()),
            movies: Box::new(MemoryBackend::<Movie>::new()),
        }
    }

    /// Opens every collection with the configured backend.
    pub fn open(config: &StorageConfig) -> Result<Self, BackendError> {
        let dir = config.data_dir.as_path();
        Ok(Self {
            brands: open_backend(config.backend, dir, "brands")?,
            categories: open_backend(config.backend, dir, "categories")?,
            products: open_backend(config.backend, dir, "products")?,
            users: open_backend(config.backend, dir, "users")?,
            movies: open_backend(config.backend, dir, "movies")?,
        })
    }
}

/// The runtime orchestrator for the catalog.
///
/// `CatalogSystem` owns one actor per collection and hands out their clients. It is
/// responsible for:
/// - **Dependency wiring**: the product actor gets the brand and category clients as its
///   context; the brand and category clients get the product client for delete checks
/// - **Lifecycle management**: spawning the actors and shutting them down
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&ActorConfig::default());
///
/// let tools = system.category_client.create(CategoryCreate::named("Tools")).await?;
/// let acme = system.brand_client.create(BrandCreate::named("Acme")).await?;
/// system.product_client
///     .create(ProductCreate::new("Hammer", 9.99, tools.id, acme.id))
///     .await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    pub brand_client: BrandClient,
    pub category_client: CategoryClient,
    pub product_client: ProductClient,
    pub user_client: UserClient,
    pub movie_client: MovieClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl CatalogSystem {
    /// Starts the system over empty in-memory collections.
    pub fn new(actors: &ActorConfig) -> Self {
        Self::with_backends(actors, Backends::memory())
    }

    /// Opens the configured storage and starts the system over it.
    pub fn start(storage: &StorageConfig, actors: &ActorConfig) -> Result<Self, BackendError> {
        info!(backend = %storage.backend, data_dir = %storage.data_dir.display(), "Opening storage");
        Ok(Self::with_backends(actors, Backends::open(storage)?))
    }

    /// Spawns one actor per collection and wires them together. Must run inside a Tokio
    /// runtime.
    pub fn with_backends(actors: &ActorConfig, backends: Backends) -> Self {
        let mailbox = actors.mailbox_size;

        // 1. Create actors. Products first: the brand and category clients need its client.
        let (product_actor, product_client) = product_actor::new(mailbox, backends.products);
        let (brand_actor, brand_client) =
            brand_actor::new(mailbox, backends.brands, product_client.clone());
        let (category_actor, category_client) =
            category_actor::new(mailbox, backends.categories, product_client.clone());
        let (user_actor, user_client) = user_actor::new(mailbox, backends.users);
        let (movie_actor, movie_client) = movie_actor::new(mailbox, backends.movies);

        // 2. Start actors with injected context. Only products depend on other actors.
        let product_context = ProductContext {
            brands: brand_client.inner().clone(),
            categories: category_client.inner().clone(),
        };
        let handles = vec![
            tokio::spawn(brand_actor.run(())),
            tokio::spawn(category_actor.run(())),
            tokio::spawn(product_actor.run(product_context)),
            tokio::spawn(user_actor.run(())),
            tokio::spawn(movie_actor.run(())),
        ];

        Self {
            brand_client,
            category_client,
            product_client,
            user_client,
            movie_client,
            handles,
        }
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the clients closes the mailboxes; each actor drains and exits. The product
    /// actor releases its brand and category clients when it exits, which lets those two
    /// actors finish. Clones handed out elsewhere (e.g. to the HTTP router) must be dropped
    /// first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down catalog...");

        drop(self.brand_client);
        drop(self.category_client);
        drop(self.product_client);
        drop(self.user_client);
        drop(self.movie_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
