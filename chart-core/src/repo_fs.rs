use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::domain::{BaseNumber, Chart};
use crate::error::{ChartError, Result};
use crate::repo::{ChartRepo, OpenParams};

const FILE_PREFIX: &str = "chart-";
const FILE_EXTENSION: &str = ".txt";

pub fn file_name(base: BaseNumber) -> String {
    format!("{FILE_PREFIX}{base}{FILE_EXTENSION}")
}

/// Inverse of [`file_name`]; `None` for anything that is not `chart-<1..10>.txt`.
pub fn parse_file_name(name: &str) -> Option<BaseNumber> {
    let digits = name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_EXTENSION)?;
    // reject "+3", "03" and the like so names round-trip exactly
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BaseNumber::new(digits.parse().ok()?)
}

pub struct FsChartRepo {
    dir: PathBuf,
}

impl FsChartRepo {
    pub fn new(params: OpenParams) -> Result<Self> {
        if params.dir.exists() && !params.dir.is_dir() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} is not a directory", params.dir.display()),
            )
            .into());
        }
        Ok(Self { dir: params.dir })
    }
}

fn write_lines<W: Write>(mut w: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(w, "{line}")?;
    }
    w.flush()
}

impl ChartRepo for FsChartRepo {
    fn path_for(&self, base: BaseNumber) -> PathBuf {
        self.dir.join(file_name(base))
    }

    fn save(&self, base: BaseNumber, chart: &Chart) -> Result<()> {
        debug_assert_eq!(base, chart.base());
        let path = self.path_for(base);

        if path.exists() {
            warn!("File already exists: {}", path.display());
            return Err(ChartError::AlreadyExists(path));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // create_new closes the gap between the probe above and the open
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!("File already exists: {}", path.display());
                return Err(ChartError::AlreadyExists(path));
            }
            Err(e) => {
                error!("Error creating the file {}: {e}", path.display());
                return Err(e.into());
            }
        };

        if let Err(e) = write_lines(BufWriter::new(file), chart.lines()) {
            error!("Error writing the file {}: {e}", path.display());
            return Err(e.into());
        }
        info!("Generated file: {}", path.display());
        Ok(())
    }

    fn read(&self, base: BaseNumber) -> Result<Vec<String>> {
        let path = self.path_for(base);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("File not found: {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                error!("Error reading file {}: {e}", path.display());
                return Err(e.into());
            }
        };

        let lines = BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| {
                error!("Error reading file {}: {e}", path.display());
                e
            })?;
        info!("Successfully read file: {}", path.display());
        Ok(lines)
    }

    fn exists(&self, base: BaseNumber) -> bool {
        self.path_for(base).is_file()
    }

    fn delete(&self, base: BaseNumber) -> bool {
        let path = self.path_for(base);
        if !path.is_file() {
            return false;
        }
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("File deleted: {}", path.display());
                true
            }
            Err(e) => {
                warn!("Could not delete file {}: {e}", path.display());
                false
            }
        }
    }

    fn list(&self) -> Result<Vec<BaseNumber>> {
        crate::list::list(&self.dir)
    }
}
