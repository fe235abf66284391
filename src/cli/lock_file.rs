//! Lock file rejecting concurrent record invocations
//!
//! The use case guards against concurrent requests inside one process;
//! this extends the same policy across processes, since each CLI
//! invocation is its own process.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process;

/// Default lock file location
const DEFAULT_LOCK_PATH: &str = "/tmp/voice-comments-record.lock";

/// PID-based lock held for the duration of a recording
pub struct RecordLock {
    path: PathBuf,
    held: bool,
}

impl RecordLock {
    /// Create a lock manager with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOCK_PATH),
            held: false,
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            held: false,
        }
    }

    /// Get the lock file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Check whether another process is currently recording
    pub fn is_recording(&self) -> Option<u32> {
        if !self.path.exists() {
            return None;
        }

        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return None,
        };

        let mut contents = String::new();
        if file.read_to_string(&mut contents).is_err() {
            return None;
        }

        let pid: u32 = match contents.trim().parse() {
            Ok(p) => p,
            Err(_) => {
                // Unreadable content means a stale or corrupt lock
                let _ = fs::remove_file(&self.path);
                return None;
            }
        };

        if Self::process_alive(pid) {
            Some(pid)
        } else {
            // Stale lock from a crashed recording
            let _ = fs::remove_file(&self.path);
            None
        }
    }

    #[cfg(unix)]
    fn process_alive(pid: u32) -> bool {
        use nix::sys::signal::kill;
        use nix::unistd::Pid;

        // Signal 0 checks for existence without delivering anything
        match kill(Pid::from_raw(pid as i32), None) {
            Ok(_) => true,
            Err(nix::errno::Errno::ESRCH) => false,
            Err(_) => true,
        }
    }

    #[cfg(not(unix))]
    fn process_alive(_pid: u32) -> bool {
        // No cheap liveness check; treat the lock as held
        true
    }

    /// Acquire the lock (fails if another recording is running)
    pub fn acquire(&mut self) -> Result<(), RecordLockError> {
        if let Some(pid) = self.is_recording() {
            return Err(RecordLockError::AlreadyRecording(pid));
        }

        let mut file = File::create(&self.path).map_err(|e| {
            RecordLockError::WriteFailed(format!("Failed to create lock file: {}", e))
        })?;

        write!(file, "{}", process::id())
            .map_err(|e| RecordLockError::WriteFailed(format!("Failed to write PID: {}", e)))?;

        self.held = true;
        Ok(())
    }

    /// Release the lock
    pub fn release(&mut self) -> Result<(), RecordLockError> {
        if self.held && self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                RecordLockError::RemoveFailed(format!("Failed to remove lock file: {}", e))
            })?;
        }
        self.held = false;
        Ok(())
    }
}

impl Default for RecordLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RecordLock {
    fn drop(&mut self) {
        // Best-effort cleanup; never removes a lock another process holds
        let _ = self.release();
    }
}

/// Lock file errors
#[derive(Debug, thiserror::Error)]
pub enum RecordLockError {
    #[error("A recording is already in progress (PID: {0})")]
    AlreadyRecording(u32),

    #[error("{0}")]
    WriteFailed(String),

    #[error("{0}")]
    RemoveFailed(String),
}
