pub mod bucket_collection;
pub mod distance_table;

pub use bucket_collection::BucketCollection;
pub use distance_table::DistanceTable;
