use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::application::services::DemoService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands, DemoArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, RawSettings, RenderStyle, Settings};
use crate::domain::{TreeNodeConvert, Zipper};

/// Dispatch the parsed command line; regular output goes to `out`.
pub fn execute_command<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let config_file = cli.config.as_deref();
    match &cli.command {
        Commands::Demo(args) => _demo(config_file, args, out),
        Commands::Config { command } => match command {
            ConfigCommands::Show => _config_show(config_file, out),
            ConfigCommands::Path => _config_path(out),
        },
    }
}

#[instrument(skip(out))]
fn _demo<W: Write>(config_file: Option<&Path>, args: &DemoArgs, out: &mut W) -> CliResult<()> {
    let settings = Settings::load(config_file)?.merge_with(&RawSettings::from(args));
    debug!("settings: {:?}", settings);
    let service = DemoService::new(settings.demo.clone())?;

    if settings.demo.reset_exceeds_chain() {
        output::warning(&format!(
            "reset depth {} exceeds the chain built between resets ({}); the first reset will fail",
            settings.demo.reset_depth,
            settings.demo.reset_every - 1
        ));
    }

    let outcome = service.run();
    // navigation errors are reported, the tree is printed regardless
    if let Some(failure) = &outcome.failure {
        output::error(&format!("iteration {}: {}", failure.iteration, failure.error));
    }

    render(&outcome.zipper, settings.style, out)
}

fn render<W: Write>(zipper: &Zipper<i64>, style: RenderStyle, out: &mut W) -> CliResult<()> {
    match style {
        RenderStyle::Indent => zipper.print_tree(out),
        RenderStyle::Tree => write!(out, "{}", zipper.to_tree_string()),
    }
    .map_err(|e| CliError::io("write tree", e))
}

#[instrument(skip(out))]
fn _config_show<W: Write>(config_file: Option<&Path>, out: &mut W) -> CliResult<()> {
    let settings = Settings::load(config_file)?;
    let text = settings.to_toml()?;
    write!(out, "{}", text).map_err(|e| CliError::io("write settings", e))
}

fn _config_path<W: Write>(out: &mut W) -> CliResult<()> {
    let path = global_config_path().ok_or_else(|| ApplicationError::Config {
        message: "cannot determine config directory".into(),
    })?;
    writeln!(out, "{}", path.display()).map_err(|e| CliError::io("write path", e))
}
