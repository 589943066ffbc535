//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::config::{RawDemoSettings, RawSettings, RenderStyle};

/// Grow and print a tree with a cursor-based zipper
#[derive(Parser, Debug)]
#[command(name = "rszipper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demo loop and print the resulting tree
    Demo(DemoArgs),

    /// Inspect settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Flags overriding the configured demo settings
#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// Number of loop iterations
    #[arg(short = 'n', long)]
    pub iterations: Option<u32>,

    /// Step back on every N-th iteration
    #[arg(long)]
    pub reset_every: Option<u32>,

    /// Steps taken back on a reset iteration
    #[arg(long)]
    pub reset_depth: Option<u32>,

    /// Value of the root node
    #[arg(long, allow_negative_numbers = true)]
    pub root_value: Option<i64>,

    /// Output style
    #[arg(short, long, value_enum)]
    pub style: Option<RenderStyle>,
}

impl From<&DemoArgs> for RawSettings {
    fn from(args: &DemoArgs) -> Self {
        RawSettings {
            style: args.style,
            demo: RawDemoSettings {
                iterations: args.iterations,
                reset_every: args.reset_every,
                reset_depth: args.reset_depth,
                root_value: args.root_value,
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective settings as TOML
    Show,
    /// Print the path of the global config file
    Path,
}
