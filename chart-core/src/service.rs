//! Validation and orchestration over the model and a [`ChartRepo`].
//!
//! Out-of-range numbers are rejected here with `false`, an empty list or
//! `None`; they never reach the store and are never reported as errors.

use tracing::info;

use crate::domain::{BaseNumber, LineIndex};
use crate::error::Result;
use crate::model::generate_lines;
use crate::repo::ChartRepo;

pub struct ChartService {
    repo: Box<dyn ChartRepo>,
}

impl ChartService {
    pub fn new(repo: Box<dyn ChartRepo>) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &dyn ChartRepo {
        self.repo.as_ref()
    }

    /// Generate and persist the chart for `base`.
    ///
    /// `Ok(false)` for an out-of-range base. An existing file surfaces as
    /// [`crate::error::ChartError::AlreadyExists`]; it is never replaced here.
    pub fn generate_chart(&self, base: i64) -> Result<bool> {
        let Some(base) = BaseNumber::new(base) else {
            return Ok(false);
        };
        let chart = generate_lines(base);
        self.repo.save(base, &chart).inspect_err(|e| {
            if e.is_already_exists() {
                info!("Chart already exists: {e}");
            }
        })?;
        Ok(true)
    }

    /// Confirmed-overwrite flow: drop any existing file, then generate.
    ///
    /// A non-file entry (e.g. a directory) at the chart path is not deleted, so
    /// this still fails with [`crate::error::ChartError::AlreadyExists`].
    pub fn regenerate_chart(&self, base: i64) -> Result<bool> {
        if BaseNumber::new(base).is_none() {
            return Ok(false);
        }
        self.delete_chart(base);
        self.generate_chart(base)
    }

    pub fn delete_chart(&self, base: i64) -> bool {
        BaseNumber::new(base).is_some_and(|b| self.repo.delete(b))
    }

    pub fn chart_exists(&self, base: i64) -> bool {
        BaseNumber::new(base).is_some_and(|b| self.repo.exists(b))
    }

    pub fn read_chart(&self, base: i64) -> Result<Vec<String>> {
        match BaseNumber::new(base) {
            Some(b) => self.repo.read(b),
            None => Ok(Vec::new()),
        }
    }

    pub fn read_chart_line(&self, base: i64, index: i64) -> Result<Option<String>> {
        let (Some(base), Some(index)) = (BaseNumber::new(base), LineIndex::new(index)) else {
            return Ok(None);
        };
        let mut lines = self.repo.read(base)?;
        if lines.len() > index.offset() {
            Ok(Some(lines.swap_remove(index.offset())))
        } else {
            Ok(None)
        }
    }

    pub fn list_charts(&self) -> Result<Vec<BaseNumber>> {
        self.repo.list()
    }
}
