pub mod hashmap_message_store;
pub mod hashmap_user_store;
pub mod postgres_message_store;
pub mod postgres_user_store;
pub mod timeout_store;

pub use hashmap_message_store::HashMapMessageStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_message_store::PostgresMessageStore;
pub use postgres_user_store::PostgresUserStore;
pub use timeout_store::{TimeoutMessageStore, TimeoutUserStore};
