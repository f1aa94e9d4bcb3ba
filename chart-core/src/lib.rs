#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod list;
pub mod model;
pub mod repo;
pub mod repo_factory;
pub mod repo_fs;
pub mod service;

// Re-exports: stable API surface
pub use domain::{BaseNumber, Chart, LineIndex};
pub use error::{ChartError, Result};
pub use repo::{ChartRepo, OpenParams};
pub use repo_factory::{Backend, open_repo};
pub use service::ChartService;
