//! Output writing: stdout or atomic file write.
//!
//! File output goes through a `.part` temp file renamed into place, so the
//! destination is created/overwritten only when the full list was written and
//! synced. A failed run leaves no partial file behind.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Temporary file suffix used before atomic rename.
const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `links.txt` -> `links.txt.part`).
fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write one URL per line to `dest`, or to stdout when `dest` is `None`.
pub fn write_links(dest: Option<&Path>, links: &[String]) -> Result<(), ScanError> {
    match dest {
        Some(path) => write_file(path, links).map_err(|source| ScanError::Write {
            path: path.display().to_string(),
            source,
        }),
        None => write_stdout(links).map_err(|source| ScanError::Write {
            path: "stdout".to_string(),
            source,
        }),
    }
}

fn write_stdout(links: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for link in links {
        writeln!(out, "{}", link)?;
    }
    out.flush()
}

fn write_file(final_path: &Path, links: &[String]) -> io::Result<()> {
    if let Some(parent) = final_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tp = temp_path(final_path);
    let result = write_temp_and_rename(&tp, final_path, links);
    if result.is_err() {
        let _ = fs::remove_file(&tp);
    }
    result
}

fn write_temp_and_rename(tp: &Path, final_path: &Path, links: &[String]) -> io::Result<()> {
    let file = fs::File::create(tp)?;
    let mut writer = BufWriter::new(file);
    for link in links {
        writeln!(writer, "{}", link)?;
    }
    writer.flush()?;
    writer.into_inner()?.sync_all()?;
    fs::rename(tp, final_path)
}
