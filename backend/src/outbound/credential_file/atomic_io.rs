//! Atomic file replacement.
//!
//! Contents are written to a hidden temporary file beside the target, synced,
//! then renamed over the target. Readers see either the old file or the new
//! one, never a partial write.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::StoreError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the temporary file cannot be written, synced,
/// or renamed. The temporary file is removed on failure.
pub(super) fn write_atomic(dir: &Dir, file_name: &str, contents: &str) -> Result<(), StoreError> {
    let tmp_name = temp_name_for(file_name);

    write_to_temp_file(dir, &tmp_name, contents)?;
    if let Err(err) = rename_over_target(dir, &tmp_name, file_name) {
        discard(dir, &tmp_name);
        return Err(StoreError::io(format!("failed to replace {file_name}: {err}")));
    }
    sync_directory(dir);

    Ok(())
}

#[cfg(test)]
pub(super) fn is_temp_name(name: &str, file_name: &str) -> bool {
    name.strip_prefix('.')
        .and_then(|rest| rest.strip_prefix(file_name))
        .is_some_and(|rest| rest.starts_with(".tmp."))
}

fn temp_name_for(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(".{file_name}.tmp.{}.{nanos}.{counter}", std::process::id())
}

fn write_to_temp_file(dir: &Dir, tmp_name: &str, contents: &str) -> Result<(), StoreError> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| StoreError::io(format!("failed to create {tmp_name}: {err}")))?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        discard(dir, tmp_name);
        return Err(StoreError::io(format!("failed to write {tmp_name}: {err}")));
    }

    Ok(())
}

#[cfg(windows)]
fn rename_over_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_over_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn discard(dir: &Dir, tmp_name: &str) {
    if dir.remove_file(tmp_name).is_err() {
        // Nothing further to do; a stale temp file never shadows the target.
    }
}

fn sync_directory(dir: &Dir) {
    // Best effort: some platforms cannot fsync a directory handle.
    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Ignore sync failures.
    }
}
