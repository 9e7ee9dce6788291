// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::csv::write_rows;
use crate::store::DataSet;

/// Create/truncate `path` and write the whole data set, header first.
/// Parent directories are created as needed.
pub fn write_dataset(path: &Path, data: &DataSet, sep: char) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_rows(&mut out, data.headers.as_deref(), &data.rows, sep)?;
    out.flush()?;
    if data.is_empty() {
        logd!("Wrote header only to {}", path.display());
    } else {
        logd!("Wrote {} rows to {}", data.len(), path.display());
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
