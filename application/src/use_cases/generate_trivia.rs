//! Generate Trivia use case.
//!
//! Asks the completion API for a trivia set about a topic while a progress
//! indicator runs, then parses the reply into a [`TriviaSet`].
//!
//! The indicator is stopped as soon as the request returns, whether it
//! succeeded or not, and before the reply is parsed, so nothing else writes
//! to the terminal while it is still rendering.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressIndicator;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use trivia_domain::{
    DomainError, TriviaPromptTemplate, TriviaSet, TriviaTopic, parse_trivia_response,
};

/// Message shown while the completion request is in flight.
pub const GENERATING_MESSAGE: &str = "Generating trivia questions...";

/// Errors that can occur while generating a trivia set.
#[derive(Error, Debug)]
pub enum GenerateTriviaError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the [`GenerateTriviaUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateTriviaInput {
    pub topic: TriviaTopic,
    pub params: GenerationParams,
}

impl GenerateTriviaInput {
    pub fn new(topic: TriviaTopic, params: GenerationParams) -> Self {
        Self { topic, params }
    }
}

/// Use case for generating a trivia set.
pub struct GenerateTriviaUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl GenerateTriviaUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Generate a trivia set, showing `progress` while the request runs.
    pub async fn execute(
        &self,
        input: GenerateTriviaInput,
        progress: &dyn ProgressIndicator,
    ) -> Result<TriviaSet, GenerateTriviaError> {
        let count = TriviaPromptTemplate::validate_count(input.params.question_count)?;
        let prompt = TriviaPromptTemplate::generation_prompt(&input.topic, count);

        info!(
            "Generating {} trivia questions about '{}' with {}",
            count, input.topic, input.params.model
        );

        let active = progress.start(GENERATING_MESSAGE);
        let response = self.gateway.complete(&input.params.model, &prompt).await;
        active.stop().await;

        let content = response?;
        debug!("Completion returned {} bytes", content.len());

        let trivia = parse_trivia_response(&content)?;
        if trivia.len() != count {
            warn!(
                "Requested {} questions but received {}",
                count,
                trivia.len()
            );
        }

        info!("Generated {} trivia questions", trivia.len());
        Ok(trivia)
    }
}
