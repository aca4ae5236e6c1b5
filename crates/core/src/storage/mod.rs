mod error;
pub mod identity;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::KeyValueStore;
pub use types::{
    DatabaseIdentity, Record, StoreManifest, DEFAULT_DESCRIPTION, DEFAULT_ESTIMATED_SIZE,
    TABLE_NAME,
};
