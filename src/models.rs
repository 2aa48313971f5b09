//! Wire models for the chat endpoint

use serde::{Deserialize, Serialize};

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentKind {
    Currency,
    News,
}

//
// ================= Request =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Only the first turn is answered; later turns are ignored.
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

//
// ================= Response =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentBlock {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContextInfo {
    #[serde(rename = "type")]
    pub kind: EnrichmentKind,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub content: Vec<ContentBlock>,
    /// Serialized as explicit `null` when no enrichment was applied.
    pub context_info: Option<ContextInfo>,
}

impl ChatResponse {
    pub fn new(text: String, context_info: Option<ContextInfo>) -> Self {
        Self {
            content: vec![ContentBlock { text }],
            context_info,
        }
    }
}
