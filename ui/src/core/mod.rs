pub mod animate;
pub mod config;
pub mod format;
pub mod loader;
pub mod snapshot;
pub mod timing;
