//! Startup data.
//!
//! Fixtures go through the same clients as API traffic, so every generated record passes
//! the regular validation and reference checks. Collections that already hold records
//! (a reopened JSON snapshot) are left alone.

use crate::config::FixtureConfig;
use crate::framework::ActorClient;
use crate::lifecycle::CatalogSystem;
use crate::model::{
    BrandCreate, BrandId, CategoryCreate, CategoryId, MovieCreate, ProductCreate, UserCreate,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Errors raised while loading startup data.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to seed {collection}: {message}")]
    Seed {
        collection: &'static str,
        message: String,
    },
}

fn seed_error<E: std::fmt::Display>(collection: &'static str) -> impl Fn(E) -> FixtureError {
    move |e| FixtureError::Seed {
        collection,
        message: e.to_string(),
    }
}

/// How many records of each kind were created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub brands: usize,
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    pub movies: usize,
}

const MOVIES: [(&str, u32, &str); 5] = [
    ("Tron", 2010, "Sci-fi"),
    ("Matrix", 1999, "Sci-fi"),
    ("Titanic", 1997, "Romance"),
    ("Avatar", 2009, "Sci-fi"),
    ("Inception", 2010, "Sci-fi"),
];

const COMPANY_PREFIXES: [&str; 12] = [
    "Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne", "Hooli", "Vandelay", "Soylent",
    "Tyrell", "Cyberdyne", "Wonka",
];
const COMPANY_SUFFIXES: [&str; 6] = ["Inc", "Group", "Labs", "Industries", "and Sons", "LLC"];
const CATCH_PHRASES: [&str; 6] = [
    "Quality you can trust",
    "Built for every day",
    "Innovation at scale",
    "Crafted with care",
    "Tomorrow, delivered",
    "Simply better",
];
const DEPARTMENTS: [&str; 12] = [
    "Tools", "Garden", "Electronics", "Books", "Toys", "Sports", "Home", "Outdoors", "Music",
    "Beauty", "Automotive", "Grocery",
];
const ADJECTIVES: [&str; 8] = [
    "Ergonomic", "Rustic", "Sleek", "Handcrafted", "Practical", "Refined", "Small", "Gorgeous",
];
const MATERIALS: [&str; 6] = ["Steel", "Wooden", "Cotton", "Granite", "Plastic", "Rubber"];
const NOUNS: [&str; 10] = [
    "Chair", "Hammer", "Table", "Lamp", "Shoes", "Gloves", "Keyboard", "Bottle", "Jacket", "Bag",
];
const FIRST_NAMES: [&str; 10] = [
    "Ana", "Bruno", "Carla", "Diego", "Elena", "Felipe", "Gina", "Hugo", "Irene", "Jorge",
];
const LAST_NAMES: [&str; 8] = [
    "Garcia", "Lopez", "Martinez", "Rossi", "Smith", "Tanaka", "Novak", "Silva",
];
const MAIL_DOMAINS: [&str; 3] = ["example.com", "example.org", "example.net"];

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Seeds the movie collection with the classic titles when it is empty.
pub async fn seed_movies(system: &CatalogSystem) -> Result<usize, FixtureError> {
    let movies = &system.movie_client;
    if !movies.list().await.map_err(seed_error("movies"))?.is_empty() {
        return Ok(0);
    }
    for (title, year, category) in MOVIES {
        movies
            .create(MovieCreate::new(title, year, category))
            .await
            .map_err(seed_error("movies"))?;
    }
    Ok(MOVIES.len())
}

/// Generates brands, categories, products and users per `config`.
///
/// Skipped entirely when fixtures are disabled or any catalog collection already has data.
pub async fn seed_catalog(
    system: &CatalogSystem,
    config: &FixtureConfig,
) -> Result<SeedReport, FixtureError> {
    let mut report = SeedReport::default();
    if !config.enabled {
        info!("Fixtures disabled");
        return Ok(report);
    }
    let populated = !system.brand_client.list().await.map_err(seed_error("brands"))?.is_empty()
        || !system.category_client.list().await.map_err(seed_error("categories"))?.is_empty()
        || !system.product_client.list().await.map_err(seed_error("products"))?.is_empty()
        || !system.user_client.list().await.map_err(seed_error("users"))?.is_empty();
    if populated {
        info!("Catalog already populated, skipping fixtures");
        return Ok(report);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut brand_ids: Vec<BrandId> = Vec::with_capacity(config.brands);
    for _ in 0..config.brands {
        let params = BrandCreate {
            brand_name: Some(format!(
                "{} {}",
                pick(&mut rng, &COMPANY_PREFIXES),
                pick(&mut rng, &COMPANY_SUFFIXES)
            )),
            description: Some(pick(&mut rng, &CATCH_PHRASES).to_string()),
            active: Some(rng.random_bool(0.5)),
        };
        let brand = system
            .brand_client
            .create(params)
            .await
            .map_err(seed_error("brands"))?;
        brand_ids.push(brand.id);
    }
    report.brands = brand_ids.len();

    let mut category_ids: Vec<CategoryId> = Vec::with_capacity(config.categories);
    for _ in 0..config.categories {
        let department = pick(&mut rng, &DEPARTMENTS);
        let params = CategoryCreate {
            category_name: Some(department.to_string()),
            description: Some(format!("Everything for {}", department.to_lowercase())),
            active: Some(rng.random_bool(0.5)),
        };
        let category = system
            .category_client
            .create(params)
            .await
            .map_err(seed_error("categories"))?;
        category_ids.push(category.id);
    }
    report.categories = category_ids.len();

    if !brand_ids.is_empty() && !category_ids.is_empty() {
        for i in 0..config.products {
            let noun = pick(&mut rng, &NOUNS);
            let name = format!(
                "{} {} {}",
                pick(&mut rng, &ADJECTIVES),
                pick(&mut rng, &MATERIALS),
                noun
            );
            let params = ProductCreate {
                description: Some(format!("A {} for everyday use", noun.to_lowercase())),
                image: Some(format!("https://picsum.photos/seed/product{}/640/480", i + 1)),
                stock: Some(rng.random_range(0..=100)),
                ..ProductCreate::new(
                    name,
                    f64::from(rng.random_range(100u32..=100_000)) / 100.0,
                    category_ids[rng.random_range(0..category_ids.len())],
                    brand_ids[rng.random_range(0..brand_ids.len())],
                )
            };
            system
                .product_client
                .create(params)
                .await
                .map_err(seed_error("products"))?;
            report.products += 1;
        }
    }

    for i in 0..config.users {
        let first = pick(&mut rng, &FIRST_NAMES);
        let last = pick(&mut rng, &LAST_NAMES);
        // the running index keeps emails unique
        let email = format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.to_lowercase(),
            i + 1,
            pick(&mut rng, &MAIL_DOMAINS)
        );
        let params = UserCreate {
            username: Some(format!("{}{}", first.to_lowercase(), rng.random_range(10..1000))),
            password: Some(format!("pw-{:08x}", rng.random::<u32>())),
            active: Some(rng.random_bool(0.5)),
            ..UserCreate::new(format!("{} {}", first, last), email)
        };
        system
            .user_client
            .create(params)
            .await
            .map_err(seed_error("users"))?;
        report.users += 1;
    }

    Ok(report)
}

/// Loads all startup data: movies always, the catalog per `config`.
pub async fn seed_all(
    system: &CatalogSystem,
    config: &FixtureConfig,
) -> Result<SeedReport, FixtureError> {
    let mut report = seed_catalog(system, config).await?;
    report.movies = seed_movies(system).await?;
    info!(
        brands = report.brands,
        categories = report.categories,
        products = report.products,
        users = report.users,
        movies = report.movies,
        "Startup data loaded"
    );
    Ok(report)
}
