//! Prompt assembly for LLM workflows
//!
//! Builds the system and user messages for the `ask`, `import` and `review`
//! commands. Nothing here talks to a model; a prompt can be printed as text or
//! serialized as a chat-completions request body and piped to any client.

use serde::Serialize;

use crate::error::ToolsResult;

/// Model named in request bodies unless overridden
pub const DEFAULT_MODEL: &str = "gpt-4o";

const ADVISOR_SYSTEM: &str =
    "You are a helpful financial assistant reviewing a user's personal finances.";

const IMPORTER_SYSTEM: &str =
    "You are a financial assistant that converts raw transactions into hledger journal entries.";

/// A system message plus a user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// One message of a chat-completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// A chat-completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

impl ChatPrompt {
    /// Request body for `model`
    pub fn to_request<'a>(&'a self, model: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system,
                },
                ChatMessage {
                    role: "user",
                    content: &self.user,
                },
            ],
        }
    }

    /// Request body for `model` as pretty-printed JSON
    pub fn to_json(&self, model: &str) -> ToolsResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_request(model))?)
    }

    /// Both messages framed for reading in a terminal
    pub fn to_text(&self) -> String {
        format!(
            "----- System -----\n{}\n\n----- User -----\n{}\n----- End of prompt -----\n",
            self.system, self.user
        )
    }
}

/// Prompt for a free-form question about the balance sheet
pub fn ask_prompt(balance_sheet: &str, context: &str, question: &str) -> ChatPrompt {
    ChatPrompt {
        system: ADVISOR_SYSTEM.to_string(),
        user: format!(
            "Here is my balance sheet:\n\n{}\n\nContext:\n{}\n\nQuestion:\n{}",
            balance_sheet, context, question
        ),
    }
}

/// Prompt asking for feedback on overall financial health
pub fn review_prompt(balance_sheet: &str, context: &str) -> ChatPrompt {
    ChatPrompt {
        system: ADVISOR_SYSTEM.to_string(),
        user: format!(
            "Here is my balance sheet:\n\n{}\n\nContext:\n{}\n\n\
             Review my financial health. Point out strengths, risks and \
             concrete next steps.",
            balance_sheet, context
        ),
    }
}

/// Prompt converting raw source data into journal entries
///
/// `journal` is the full journal text when the user opted to include it.
pub fn import_prompt(
    accounts: &[String],
    source: &str,
    context: &str,
    journal: Option<&str>,
) -> ChatPrompt {
    let journal = journal
        .map(|j| format!("\nHere is my full journal for context:\n\n{}", j))
        .unwrap_or_default();

    ChatPrompt {
        system: IMPORTER_SYSTEM.to_string(),
        user: format!(
            "Here are the account names available:\n\n{}\n\n\
             Here is the source data (e.g., CSV or JSON):\n\n{}\n\n\
             Context:\n{}{}\n\n\
             Generate valid hledger journal transactions using only the accounts above.\n\n\
             IMPORTANT:\n\
             - Do NOT explain anything.\n\
             - Do NOT include any prose or formatting.\n\
             - Output ONLY valid hledger journal entries.\n",
            accounts.join("\n"),
            source,
            context,
            journal
        ),
    }
}
