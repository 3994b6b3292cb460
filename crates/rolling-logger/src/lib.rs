//! Rolling Logger
//!
//! File logger for desktop apps. Events go through `tracing` (the `log` facade is
//! bridged), are written to `<dir>/<app>.log`, rotated by size, and the most recent
//! lines are kept in memory for diagnostics.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Rotate once the active file would grow past this size
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Active file plus rotated generations
pub const DEFAULT_KEEP_FILES: usize = 3;
/// Lines retained in memory
pub const DEFAULT_BUFFER_LINES: usize = 200;

static LOGGER: OnceLock<Arc<Mutex<RollingFile>>> = OnceLock::new();

/// Size-rotated log file with a circular buffer of recent lines
pub struct RollingFile {
    path: PathBuf,
    max_bytes: u64,
    keep_files: usize,
    file: File,
    written: u64,
    recent: VecDeque<String>,
    capacity: usize,
}

impl RollingFile {
    pub fn open(
        dir: &Path,
        app_name: &str,
        max_bytes: u64,
        keep_files: usize,
        capacity: usize,
    ) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            keep_files: keep_files.max(1),
            file,
            written,
            recent: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotated_path(&self, generation: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", generation));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let oldest = self.keep_files - 1;
        if oldest == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }
        let _ = fs::remove_file(self.rotated_path(oldest));
        for generation in (1..oldest).rev() {
            let from = self.rotated_path(generation);
            if from.exists() {
                fs::rename(&from, self.rotated_path(generation + 1))?;
            }
        }
        fs::rename(&self.path, self.rotated_path(1))?;
        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, buf: &[u8]) {
        if self.capacity == 0 {
            return;
        }
        for line in String::from_utf8_lossy(buf).lines() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            if self.recent.len() == self.capacity {
                self.recent.pop_front();
            }
            self.recent.push_back(line.to_string());
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.recent.iter().cloned().collect()
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        self.remember(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Writer handed to the subscriber for each event
struct SharedWriter(Arc<Mutex<RollingFile>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

/// Install the global subscriber writing to `<log_dir>/<app_name>.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let rolling = RollingFile::open(
        &log_dir,
        app_name,
        DEFAULT_MAX_BYTES,
        DEFAULT_KEEP_FILES,
        DEFAULT_BUFFER_LINES,
    )
    .map_err(|e| format!("Failed to open log file: {}", e))?;
    let shared = Arc::new(Mutex::new(rolling));
    LOGGER
        .set(shared.clone())
        .map_err(|_| "Logger already initialized".to_string())?;

    let writer = shared.clone();
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || SharedWriter(writer.clone()))
        .try_init()
        .map_err(|e| format!("Failed to install subscriber: {}", e))?;

    tracing::info!(
        started_at = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "{} logger ready",
        app_name
    );
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    LOGGER
        .get()
        .map(|_| ())
        .ok_or_else(|| "Logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|shared| shared.lock().ok().map(|file| file.recent_lines()))
        .unwrap_or_default()
}
