//! sparkgen - PySpark code generator.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use sparkgen::{AnthropicClient, CodeGenerator, Credential, SparkgenResult, init_logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.log_format, "warn");

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> SparkgenResult<ExitCode> {
    match &cli.command {
        Commands::Prompt => {
            cli::handle_prompt_command(&mut std::io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate { instructions } => {
            let generator = build_generator(&cli)?;
            cli::handle_generate_command(&generator, instructions.clone()).await
        }
        Commands::Interactive => {
            let generator = build_generator(&cli)?;
            cli::handle_interactive_command(&generator).await
        }
    }
}

fn build_generator(cli: &Cli) -> SparkgenResult<CodeGenerator<AnthropicClient>> {
    let config = cli.app_config()?;
    tracing::info!(
        model = %config.model(),
        max_tokens = config.max_tokens(),
        "Configuration resolved"
    );

    let client = AnthropicClient::new(config.anthropic_config()?)?;
    let credential = cli.api_key.clone().map(Credential::new).unwrap_or_default();
    Ok(CodeGenerator::new(client, credential).with_settings(config.generation_settings()?))
}
