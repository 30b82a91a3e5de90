//! PID file for the running daemon.
//!
//! The named pipe is the primary liveness check; the PID file lets the
//! CLI clean up after a daemon that died without removing it, and kill a
//! daemon that stopped answering on the pipe.

use std::fs;
use std::path::PathBuf;

use crate::WindowResult;

/// `%LOCALAPPDATA%\veil`, created on demand.
fn data_dir() -> WindowResult<PathBuf> {
    let base =
        std::env::var("LOCALAPPDATA").map_err(|_| "LOCALAPPDATA environment variable not set")?;
    let dir = PathBuf::from(base).join("veil");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn pid_path() -> WindowResult<PathBuf> {
    Ok(data_dir()?.join("veil.pid"))
}

/// Records the current process as the daemon.
pub fn write_pid_file() -> WindowResult<()> {
    fs::write(pid_path()?, std::process::id().to_string())?;
    Ok(())
}

/// Reads the daemon PID, or `None` when no PID file exists.
pub fn read_pid_file() -> WindowResult<Option<u32>> {
    let path = pid_path()?;
    if !path.exists() {
        return Ok(None);
    }
    parse_pid(&fs::read_to_string(&path)?).map(Some)
}

pub fn remove_pid_file() -> WindowResult<()> {
    let path = pid_path()?;
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

fn parse_pid(contents: &str) -> WindowResult<u32> {
    Ok(contents
        .trim()
        .parse()
        .map_err(|e| format!("invalid PID file contents: {e}"))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pid_trims_whitespace() {
        assert_eq!(parse_pid("1234\r\n").unwrap(), 1234);
    }

    #[test]
    fn parse_pid_rejects_garbage() {
        assert!(parse_pid("not-a-pid").is_err());
    }
}
