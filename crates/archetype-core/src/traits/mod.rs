mod result_storage;

pub use result_storage::IResultStorage;
