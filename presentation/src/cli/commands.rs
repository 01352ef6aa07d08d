//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;
use trivia_domain::MAX_QUESTION_COUNT;

/// CLI arguments for llm-trivia
#[derive(Parser, Debug)]
#[command(name = "llm-trivia")]
#[command(author, version, about = "Trivia night with questions written by an LLM")]
#[command(long_about = r#"
llm-trivia asks an OpenAI-compatible model for a set of trivia questions on a
topic of your choice, then quizzes you one question at a time.

Answers are forgiving: small typos and partial answers are accepted, while
numeric answers (years, counts) must match exactly.

The API key is taken from (in priority order):
1. --api-key <KEY>
2. openai.api_key in a config file
3. The OPENAI_API_KEY environment variable (or a .env file)

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./trivia.toml       Project-level config
3. ~/.config/llm-trivia/config.toml   Global config

Example:
  llm-trivia
  llm-trivia --topic "space exploration" -n 10
  llm-trivia --model gpt-4o --no-color
"#)]
pub struct Cli {
    /// OpenAI API key (overrides config and environment)
    #[arg(long, alias = "apiKey", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Trivia topic (skips the interactive topic prompt)
    #[arg(short, long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Number of questions to generate
    #[arg(
        short = 'n',
        long = "questions",
        value_name = "COUNT",
        value_parser = clap::value_parser!(u32).range(1..=MAX_QUESTION_COUNT as i64)
    )]
    pub questions: Option<u32>,

    /// Completion model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Question count from the command line, if given.
    pub fn question_count(&self) -> Option<usize> {
        self.questions.map(|n| n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["llm-trivia"]).unwrap();
        assert!(cli.api_key.is_none());
        assert!(cli.topic.is_none());
        assert!(cli.question_count().is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.no_color);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "llm-trivia",
            "--api-key",
            "sk-test",
            "-t",
            "volcanoes",
            "-n",
            "5",
            "-m",
            "gpt-4o",
            "-vv",
            "-q",
            "--no-color",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cli.topic.as_deref(), Some("volcanoes"));
        assert_eq!(cli.question_count(), Some(5));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_camel_case_api_key_alias() {
        let cli = Cli::try_parse_from(["llm-trivia", "--apiKey", "sk-alias"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("sk-alias"));
    }

    #[test]
    fn test_question_count_range() {
        assert!(Cli::try_parse_from(["llm-trivia", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["llm-trivia", "-n", "51"]).is_err());
        assert!(Cli::try_parse_from(["llm-trivia", "-n", "50"]).is_ok());
    }
}
