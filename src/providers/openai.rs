use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::prompt::Turn;

const OPENAI_API_BASE: &str
  = "https://api.openai.com/v1";

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<Turn>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: Turn
  , pub finish_reason: Option<String>
}

// ===== OpenAI Client =====

/// Thin chat-completions client
///
/// One request, one response. Retry and degradation policy live
/// with the caller, not here.
pub struct OpenAiClient
{   api_key: String
  , http_client: reqwest::Client
}

impl OpenAiClient
{   /// Create a new client owning its HTTP connection pool
    pub fn new(api_key: String) -> Self
    {   debug!("Creating OpenAiClient");
        OpenAiClient
        {   api_key
          , http_client: reqwest::Client::new()
        }
    }
}

impl crate::resolver::CompletionGateway for OpenAiClient
{   async fn complete(
      &self
    , turns: &[Turn]
    , params: &GenerationConfig
    ) -> Result<String, GenerationError>
    {   if turns.is_empty()
        {   error!("Refusing to send an empty turn sequence");
            return Err(GenerationError::InvalidRequest(
              "turn sequence is empty".to_string()
            ));
        }

        debug!("Requesting completion from: {}", params.model);
        let request = ChatRequest
        {   model: params.model.clone()
          , messages: turns.to_vec()
          , temperature: Some(params.temperature)
          , max_tokens: Some(params.max_tokens)
        };

        trace!("OpenAI request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", OPENAI_API_BASE))
          .header("Authorization", format!("Bearer {}", self.api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            GenerationError::Http(e.to_string())
          })?;

        let status = response.status();
        trace!("OpenAI response status: {}", status);

        if status.as_u16() == 429
        {   error!("OpenAI rate limit exceeded");
            return Err(GenerationError::RateLimited);
        }

        if status.as_u16() == 401 || status.as_u16() == 403
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenAI auth error: {}", error_text);
            return Err(GenerationError::Auth(error_text));
        }

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("OpenAI API error: {}", error_text);
            return Err(GenerationError::Api(
              format!("OpenAI error: {}", error_text)
            ));
        }

        let chat_response: ChatResponse
          = response.json().await.map_err(|e| {
              error!("Parse error: {}", e);
              GenerationError::Parse(e.to_string())
            })?;

        chat_response.choices.first()
          .map(|c| c.message.content.trim().to_string())
          .ok_or_else(|| {
            error!("No choices in response");
            GenerationError::NoChoicesInResponse
          })
    }
}
