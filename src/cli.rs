use clap::Parser;

/// Quill stdin-driven text utility.
///
/// The command protocol itself arrives on stdin (a command code, then a
/// text block); the command line only carries knobs around it.
#[derive(Parser)]
#[command(name = "quill", version, about = "Stdin-driven text processing utility")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
