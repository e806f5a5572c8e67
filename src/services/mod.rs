// Service exports
pub mod matching;
pub mod store;

pub use matching::{MatchError, MatchingService};
pub use store::{Dataset, InMemoryStore, ProfileStore, StoreError};
