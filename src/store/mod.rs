pub mod buckets;
pub mod connection;

pub use buckets::{next_record_id, BucketKey};
pub use connection::{init_store, Database};
