pub mod config;
pub mod error;
pub mod logging;

pub mod downloader;
pub mod entry;
pub mod fetch;
pub mod http;
pub mod merge;
pub mod observer;
pub mod persist;
pub mod pipeline;
pub mod resize;
pub mod url_model;

pub use entry::BackgroundEntry;
pub use error::{Error, FetchError, ParseError};
