//! Movie catalog: REST API over movies, directors and genres.

pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use filter::MovieFilter;
pub use migration::ensure_tables;
pub use model::{Director, Field, Genre, Movie, MovieFields, MoviePatch, NewDirector, NewGenre};
pub use routes::{app, catalog_routes, common_routes, docs_routes, ApiDoc};
pub use seed::{apply_seed, load_seed, Seed, SeedReport};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryStore, PgStore, Store};
