use crate::domain::BaseNumber;
use crate::error::Result;
use crate::repo_fs::parse_file_name;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Scan `dir` for chart files. A missing directory lists as empty.
pub fn list(dir: &Path) -> Result<Vec<BaseNumber>> {
    let entries = match fs::read_dir(dir) {
        Ok(it) => it,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut bases = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(base) = entry.file_name().to_str().and_then(parse_file_name) {
            bases.push(base);
        }
    }
    bases.sort();
    Ok(bases)
}
