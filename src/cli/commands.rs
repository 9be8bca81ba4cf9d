//! Command dispatch

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::errors::AstViewResult;
use crate::outline::{outline, pretty_json};
use crate::render::{DiagramRenderer, SvgCanvas};
use crate::source::{JsonSource, TreeSource};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render {
            file,
            output,
            width,
            height,
        }) => render(file, output.as_deref(), *width, *height),
        Some(Commands::Json { file }) => json_view(file),
        Some(Commands::Tree { file }) => tree_view(file),
        Some(Commands::Config) => show_config(),
        Some(Commands::Info) => info(),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn read_input(file: &Path) -> AstViewResult<String> {
    if file == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}

#[instrument]
fn render(
    file: &Path,
    output_path: Option<&Path>,
    width: Option<f64>,
    height: Option<f64>,
) -> CliResult<()> {
    let input = read_input(file)?;
    let root = JsonSource.supply(&input)?;

    let mut settings = Settings::load()?;
    if let Some(w) = width {
        settings.canvas.width = w;
    }
    if let Some(h) = height {
        settings.canvas.height = h;
    }
    if settings.canvas.width <= 0.0 || settings.canvas.height <= 0.0 {
        return Err(CliError::InvalidArgs(
            "canvas dimensions must be positive".to_string(),
        ));
    }
    debug!("canvas: {:?}", settings.canvas);

    let mut canvas = SvgCanvas::new(
        settings.canvas,
        settings.palette.clone(),
        settings.font_size,
    );
    let mut renderer =
        DiagramRenderer::new(&mut canvas, settings.box_spec, settings.font_size);
    settings.layout_context().layout(&root, &mut renderer);

    let svg = canvas.finish();
    match output_path {
        Some(path) => {
            fs::write(path, svg).map_err(crate::errors::AstViewError::Io)?;
            output::action("wrote", &path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

#[instrument]
fn json_view(file: &Path) -> CliResult<()> {
    let input = read_input(file)?;
    println!("{}", pretty_json(&input)?);
    Ok(())
}

#[instrument]
fn tree_view(file: &Path) -> CliResult<()> {
    let input = read_input(file)?;
    let root = JsonSource.supply(&input)?;
    println!("{}", outline(&root));
    Ok(())
}

fn show_config() -> CliResult<()> {
    let settings = Settings::load()?;
    print!("{}", toml::to_string_pretty(&settings)?);
    Ok(())
}

fn info() -> CliResult<()> {
    if let Some(author) = Cli::command().get_author() {
        println!("AUTHOR: {}", author);
    }
    if let Some(version) = Cli::command().get_version() {
        println!("VERSION: {}", version);
    }
    Ok(())
}
