//! CLI-to-daemon IPC over a named pipe, one JSON line each way.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::os::windows::io::FromRawHandle;

use serde::Serialize;
use serde::de::DeserializeOwned;
use veil_core::WindowResult;
use veil_core::ipc::{Command, PIPE_NAME, Response};
use windows::Win32::Foundation::{
    CloseHandle, DUPLICATE_SAME_ACCESS, DuplicateHandle, HANDLE, INVALID_HANDLE_VALUE,
};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_NONE, FlushFileBuffers, OPEN_EXISTING, PIPE_ACCESS_DUPLEX,
};
use windows::Win32::System::Pipes::{
    ConnectNamedPipe, CreateNamedPipeW, DisconnectNamedPipe, PIPE_READMODE_BYTE, PIPE_TYPE_BYTE,
    PIPE_UNLIMITED_INSTANCES, PIPE_WAIT, WaitNamedPipeW,
};
use windows::Win32::System::Threading::GetCurrentProcess;
use windows::core::HSTRING;

const GENERIC_READ_WRITE: u32 = 0x80000000 | 0x40000000;
const PIPE_BUFFER_SIZE: u32 = 512;

/// A pipe handle closed on drop.
struct OwnedPipe(HANDLE);

impl Drop for OwnedPipe {
    fn drop(&mut self) {
        // SAFETY: the guard owns the handle exclusively.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// One server-side pipe instance. Handles a single request, then is
/// dropped and replaced by a fresh instance.
pub struct PipeServer {
    pipe: OwnedPipe,
}

impl PipeServer {
    /// Creates the pipe instance without waiting for a client.
    pub fn create() -> WindowResult<Self> {
        let name = HSTRING::from(PIPE_NAME);
        // SAFETY: all parameters are valid; failure is reported as
        // INVALID_HANDLE_VALUE.
        let handle = unsafe {
            CreateNamedPipeW(
                &name,
                PIPE_ACCESS_DUPLEX,
                PIPE_TYPE_BYTE | PIPE_READMODE_BYTE | PIPE_WAIT,
                PIPE_UNLIMITED_INSTANCES,
                PIPE_BUFFER_SIZE,
                PIPE_BUFFER_SIZE,
                0,
                None,
            )
        };
        if handle == INVALID_HANDLE_VALUE {
            return Err("Failed to create named pipe".into());
        }
        Ok(Self {
            pipe: OwnedPipe(handle),
        })
    }

    /// Blocks until a client connects, then reads its command.
    pub fn accept_command(&self) -> WindowResult<Command> {
        // SAFETY: blocks until a client connects to this instance.
        unsafe { ConnectNamedPipe(self.pipe.0, None)? };
        read_message(self.pipe.0)
    }

    /// Writes the reply and disconnects the client.
    pub fn send_response(&self, response: &Response) -> WindowResult<()> {
        write_message(self.pipe.0, response)?;
        // SAFETY: waits until the client has read everything; a
        // disconnect before that would drop the unread reply.
        unsafe {
            let _ = FlushFileBuffers(self.pipe.0);
            DisconnectNamedPipe(self.pipe.0)?;
        }
        Ok(())
    }
}

/// Sends one command to the daemon and waits for its reply.
pub fn send_command(command: &Command) -> WindowResult<Response> {
    let name = HSTRING::from(PIPE_NAME);
    // SAFETY: opens the existing pipe as a client; the guard closes it.
    let handle = unsafe {
        CreateFileW(
            &name,
            GENERIC_READ_WRITE,
            FILE_SHARE_NONE,
            None,
            OPEN_EXISTING,
            Default::default(),
            None,
        )?
    };
    let pipe = OwnedPipe(handle);

    write_message(pipe.0, command)?;
    read_message(pipe.0)
}

/// Whether the daemon's pipe exists.
///
/// `WaitNamedPipeW` with a 1 ms timeout checks for the pipe without
/// using up the waiting server instance.
pub fn is_daemon_running() -> bool {
    let name = HSTRING::from(PIPE_NAME);
    // SAFETY: a pure existence check.
    unsafe { WaitNamedPipeW(&name, 1).as_bool() }
}

fn write_message(handle: HANDLE, message: &impl Serialize) -> WindowResult<()> {
    let mut writer = duplicate_as_file(handle)?;
    writer.write_all(encode_line(message)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn read_message<T: DeserializeOwned>(handle: HANDLE) -> WindowResult<T> {
    let mut reader = BufReader::new(duplicate_as_file(handle)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    decode_line(&line)
}

fn encode_line(message: &impl Serialize) -> WindowResult<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}

fn decode_line<T: DeserializeOwned>(line: &str) -> WindowResult<T> {
    let line = line.trim();
    if line.is_empty() {
        return Err("connection closed without a message".into());
    }
    Ok(serde_json::from_str(line)?)
}

/// Wraps a duplicate of `handle` as a `File`, so the `File` and the
/// original can be closed independently.
fn duplicate_as_file(handle: HANDLE) -> WindowResult<File> {
    let mut dup = HANDLE::default();
    // SAFETY: the duplicate is owned by the returned File.
    unsafe {
        DuplicateHandle(
            GetCurrentProcess(),
            handle,
            GetCurrentProcess(),
            &mut dup,
            0,
            false,
            DUPLICATE_SAME_ACCESS,
        )?;
        Ok(File::from_raw_handle(dup.0))
    }
}
