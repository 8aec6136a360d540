use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordsvc", version)]
#[command(about = "Word document editing tools over the Model Context Protocol", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory document names are resolved against (default: current directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub documents_dir: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve MCP over stdin/stdout until input closes (the default)
    Serve,

    /// List the available tools
    Tools,

    /// Invoke a single tool and print its output
    Call {
        /// Tool name (see `wordsvc tools`)
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, value_name = "JSON")]
        args: Option<String>,
    },
}
