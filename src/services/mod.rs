// Service exports
pub mod channel;
pub mod memory;
pub mod postgres;
pub mod store;

pub use channel::HttpChannelClient;
pub use memory::InMemoryStore;
pub use postgres::{PostgresStore, StatusColumn};
pub use store::{ChannelError, ChannelService, MatchStore, StoreError, UserStore};
