use crate::error::Result;
use crate::repo::{ChartRepo, OpenParams};
use crate::repo_fs::FsChartRepo;

pub enum Backend {
    Fs,
}

pub fn open_repo(backend: Backend, p: OpenParams) -> Result<Box<dyn ChartRepo>> {
    match backend {
        Backend::Fs => Ok(Box::new(FsChartRepo::new(p)?)),
    }
}
