pub mod action;
pub mod autostart;
pub mod banner;
pub mod daemon;
pub mod init;
pub mod start;
pub mod status;
pub mod stop;

/// Prints `Error: <message>` and exits with status 1.
pub fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
