pub mod batcher;
pub mod error;
pub mod executor;
pub mod magento_api_client;
pub mod payload;
pub mod progress_tracker;
pub mod selector;
