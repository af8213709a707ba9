use crate::storage::get_storage_path;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Opens the log file next to the vocabulary database. Absorbed storage
/// problems (corrupt slot contents, unreadable medium) end up here instead of
/// surfacing to the caller.
pub fn init() {
    let default = get_storage_path().with_file_name("vocab.log");
    init_at(&default);
}

pub fn init_at(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let mut logger = LOGGER.lock().unwrap();
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
        {
            *logger = Some(file);
        }
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_mut() {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(logger, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_writes_to_chosen_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("vocab.log");

        init_at(&log_path);
        log("corrupt slot discarded");

        // A second init must not reopen or truncate.
        init_at(&log_path);
        log("second message");
    }

    #[test]
    fn test_log_without_init_is_silent() {
        log("nobody listening");
    }
}
