//! Persistence layer: row models, Postgres queries and the [`store::Store`]
//! interface the GraphQL resolvers are written against.

pub mod db;
pub mod error;
pub mod models;
pub mod repos;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{DynStore, MemoryStore, PgStore, Store};
