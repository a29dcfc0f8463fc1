pub mod config;
pub mod logging;

pub mod batch;
pub mod downloader;
pub mod folder;
pub mod resolver;
pub mod sheet;
