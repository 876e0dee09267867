//! genai -> OpenAI chat-completion response adaptation.
//!
//! Result files persist the OpenAI wire shape regardless of which provider
//! genai routed the request to, so the aggregation stage (and any external
//! tooling) always reads `choices[0].message.content`.

use async_openai::types::chat::{
    ChatChoice, ChatCompletionResponseMessage, CompletionUsage, CreateChatCompletionResponse,
    FinishReason,
};
use genai::chat::ChatResponse;

/// Converts a genai chat response into the OpenAI wire shape.
pub fn adapt_chat_response(resp: ChatResponse, model: &str) -> CreateChatCompletionResponse {
    let content = resp.first_text().unwrap_or_default().to_string();
    completion_from_text(model, &content)
}

/// Builds an OpenAI-shaped completion around plain assistant text.
pub fn completion_from_text(model: &str, content: &str) -> CreateChatCompletionResponse {
    let message_value = serde_json::json!({
        "role": "assistant",
        "content": if content.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::Value::String(content.to_string())
        },
    });

    let message: ChatCompletionResponseMessage =
        serde_json::from_value(message_value).expect("constructed OpenAI message is valid");

    let response_value = serde_json::json!({
        "id": format!("chatcmpl-{}", uuid::Uuid::new_v4()),
        "object": "chat.completion",
        "created": chrono::Utc::now().timestamp() as u32,
        "model": model,
        "choices": vec![ChatChoice {
            index: 0,
            message,
            finish_reason: Some(FinishReason::Stop),
            logprobs: None,
        }],
        "usage": Some(CompletionUsage {
            prompt_tokens: 0,
            completion_tokens: 0,
            total_tokens: 0,
            prompt_tokens_details: None,
            completion_tokens_details: None,
        }),
    });

    serde_json::from_value(response_value).expect("constructed OpenAI response is valid")
}
