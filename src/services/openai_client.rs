use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};

use crate::error::AnswerError;

const MODEL: &str = "gpt-4o-mini";
const MAX_COMPLETION_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
}

impl Default for OpenaiClient {
    fn default() -> Self {
        // Reads OPENAI_API_KEY from the environment.
        OpenaiClient {
            client: Client::new(),
        }
    }
}

impl OpenaiClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
        }
    }

    pub async fn get_answer(&self, prompt: &str) -> Result<String, AnswerError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .max_tokens(MAX_COMPLETION_TOKENS)
            .temperature(TEMPERATURE)
            .build()?;

        let response = self.client.chat().create(request).await?;
        log::info!("Openai response: {:?}", response);

        let answer = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        match answer.is_empty() {
            true => Err(AnswerError::EmptyCompletion),
            false => Ok(answer),
        }
    }
}
