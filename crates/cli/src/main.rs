use crate::{
    commands::{Commands, InputArgs},
    error::CliError,
    output::ValidationReport,
};
use clap::Parser;
use filter_engine::{Bindings, CompilerOptions, FilterCompiler};
use query_syntax::Expression;
use std::io::Read;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "filterc",
    version = "0.1.0",
    about = "Search filter compiler"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { input, output } => {
            let (compiler, expr) = load_input(&input)?;
            let filter = compiler.build(&expr)?;
            output::emit(&output::to_json(&filter)?, output.as_deref())?;
        }
        Commands::Validate { input, output } => {
            info!("Validating expression: {}", input.expr);

            let (compiler, expr) = load_input(&input)?;
            let report = ValidationReport::from_result(&compiler.validate(&expr));
            output::emit(&output::to_json(&report)?, output.as_deref())?;
        }
        Commands::Options => {
            println!("{}", output::to_json(&CompilerOptions::default())?);
        }
    }

    Ok(())
}

fn load_input(input: &InputArgs) -> Result<(FilterCompiler, Expression), CliError> {
    let source = if input.expr == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&input.expr)?
    };
    let expr: Expression = serde_json::from_str(&source)?;

    let (document, others) = input.bindings.split_first().ok_or(CliError::NoBindings)?;
    let bindings = others
        .iter()
        .fold(Bindings::new(document.as_str()), |bindings, name| {
            bindings.with_variable(name.as_str())
        });

    let options = match &input.options {
        Some(path) => CompilerOptions::from_file(path)?,
        None => CompilerOptions::default(),
    };
    info!(
        "Compiling with variables [{}]",
        bindings.names().collect::<Vec<_>>().join(", ")
    );

    Ok((FilterCompiler::with_options(bindings, options)?, expr))
}
