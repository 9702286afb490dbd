pub mod memory;
pub mod serialization;
pub mod traits;

#[cfg(feature = "db")]
pub mod database;

pub use memory::InMemoryStore;
pub use serialization::Serialization;
pub use traits::*;

#[cfg(feature = "db")]
pub use database::DatabaseStore;
