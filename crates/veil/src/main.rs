mod commands;

use clap::{Parser, Subcommand};

use veil_core::Action;

#[derive(Parser)]
#[command(
    name = "veil",
    version,
    about = "Per-window transparency, borderless and ghost mode for Windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration files
    Init,
    /// Start the Veil daemon
    Start,
    /// Stop the daemon and restore every modified window
    Stop,
    /// Show whether the daemon is running and how many windows it modified
    Status,
    /// Apply an action to the foreground window
    Action {
        #[command(subcommand)]
        action: ActionCommands,
    },
    /// Manage starting Veil on logon
    Autostart {
        #[command(subcommand)]
        command: AutostartCommands,
    },
    /// Run the daemon (internal, not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum ActionCommands {
    /// Make the window more opaque by one step
    OpacityUp,
    /// Make the window more transparent by one step
    OpacityDown,
    /// Strip or restore the window frame
    ToggleBorderless,
    /// Fade the window while the pointer is near it
    ToggleGhostMode,
    /// Restore every modified window
    ResetAll,
}

#[derive(Subcommand)]
enum AutostartCommands {
    /// Start Veil when you log on
    Enable,
    /// Stop starting Veil on logon
    Disable,
    /// Show whether autostart is enabled
    Status,
}

impl From<ActionCommands> for Action {
    fn from(command: ActionCommands) -> Self {
        match command {
            ActionCommands::OpacityUp => Action::OpacityUp,
            ActionCommands::OpacityDown => Action::OpacityDown,
            ActionCommands::ToggleBorderless => Action::ToggleBorderless,
            ActionCommands::ToggleGhostMode => Action::ToggleGhostMode,
            ActionCommands::ResetAll => Action::ResetAll,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::Daemon => commands::daemon::execute(),
        Commands::Action { action } => commands::action::execute(action.into()),
        Commands::Autostart { command } => match command {
            AutostartCommands::Enable => commands::autostart::enable(),
            AutostartCommands::Disable => commands::autostart::disable(),
            AutostartCommands::Status => commands::autostart::status(),
        },
    }
}
