// chart_core/src/repo.rs
use crate::domain::{BaseNumber, Chart};
use crate::error::Result;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct OpenParams {
    /// Directory holding `chart-<base>.txt` files.
    pub dir: PathBuf,
}

impl Default for OpenParams {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Persistence for chart files.
///
/// `save` never overwrites: an existing file is reported as
/// [`crate::error::ChartError::AlreadyExists`] and left untouched. The existence
/// probe and the write are not atomic against other processes.
pub trait ChartRepo: Send + Sync {
    fn path_for(&self, base: BaseNumber) -> PathBuf;

    fn save(&self, base: BaseNumber, chart: &Chart) -> Result<()>;

    /// Lines of the stored chart; empty when no file exists.
    fn read(&self, base: BaseNumber) -> Result<Vec<String>>;

    fn exists(&self, base: BaseNumber) -> bool;

    /// Returns whether a file was removed.
    fn delete(&self, base: BaseNumber) -> bool;

    /// Bases with a chart file on disk, ascending.
    fn list(&self) -> Result<Vec<BaseNumber>>;
}
