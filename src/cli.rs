// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Flags mirror the classic lsdvol tool.

use clap::Parser;

#[derive(Parser)]
#[command(name = "lsdvol")]
#[command(about = "Lists volumes in use by a Docker container")]
#[command(version)]
#[command(after_help = "If no ID or NAME is specified, the program is assumed to \
be executed from within a container and the container ID will be autodetected.")]
pub struct Cli {
    /// Container ID or name
    pub container: Option<String>,

    /// Path to socket for Docker
    #[arg(long = "docker-socket", default_value = lsdvol::config::DEFAULT_SOCKET)]
    pub socket: String,

    /// Output in detailed format
    #[arg(short = 'l')]
    pub long: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
