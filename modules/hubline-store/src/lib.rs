pub mod memory;
pub mod selector;
pub mod store;
pub mod testutil;

pub use memory::MemoryStore;
pub use selector::{Condition, Selector};
pub use store::{DataStore, FindOptions, SortOrder};
