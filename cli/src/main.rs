//! CLI entrypoint for llm-trivia
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trivia_application::{
    GenerateTriviaInput, GenerateTriviaUseCase, GenerationParams, NoProgress, PlayTriviaUseCase,
    ProgressIndicator,
};
use trivia_domain::{Model, TriviaTopic};
use trivia_infrastructure::{
    ConfigLoader, FileConfig, OpenAiGateway, OpenAiSettings, load_dotenv, resolve_api_key,
};
use trivia_presentation::{Cli, ConsoleFormatter, SpinnerProgress, TerminalQuiz};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps log lines off the spinner and the quiz
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("Starting llm-trivia");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatter = ConsoleFormatter::new(!cli.no_color);
            eprintln!("{}", formatter.error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // .env may carry LLM_TRIVIA_* overrides as well as the API key
    load_dotenv();

    // === Configuration ===
    let config = load_config(cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        print!("{}", ConfigLoader::render(&config));
        return Ok(());
    }

    config.validate().context("Invalid configuration")?;

    let api_key = resolve_api_key(cli.api_key.as_deref(), &config.openai)?;

    let model_name = cli.model.as_deref().unwrap_or(&config.openai.model);
    let Ok(model) = model_name.parse::<Model>();
    let params = GenerationParams::default()
        .with_model(model)
        .with_question_count(cli.question_count().unwrap_or(config.game.question_count));

    let colorize = config.output.color && !cli.no_color;
    let mut quiz = TerminalQuiz::stdio(colorize);

    // === Topic ===
    let topic_input = match &cli.topic {
        Some(topic) => topic.clone(),
        None => quiz
            .ask_topic()
            .context("Failed to read topic")?
            .unwrap_or_default(),
    };
    let topic = TriviaTopic::from_input(&topic_input, &config.game.default_topic);

    // === Dependency Injection ===
    let gateway = Arc::new(
        OpenAiGateway::new(OpenAiSettings::from(&config.openai), api_key)
            .context("Failed to set up the OpenAI client")?,
    );

    let progress: Box<dyn ProgressIndicator> = if cli.quiet || !config.output.progress {
        Box::new(NoProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };

    let trivia = GenerateTriviaUseCase::new(gateway)
        .execute(GenerateTriviaInput::new(topic, params), progress.as_ref())
        .await
        .context("Failed to generate trivia questions")?;

    PlayTriviaUseCase::new()
        .execute(&trivia, &mut quiz)
        .context("Game aborted")?;

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))
}
