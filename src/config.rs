//! Calm AI Help configuration management

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main Calm AI Help configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalmHelpConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Chat responder configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

impl CalmHelpConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = allow any)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory of static site files to serve alongside the API
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            static_dir: None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory for record files and summary indexes
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let base = dirs_next::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calmhelp");

        Self {
            data_dir: base.join("data"),
        }
    }
}

/// Chat responder configuration
///
/// The rule table is plain data so deployments can extend or replace the
/// scripted answers without touching dispatch logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Ordered rule table; the first rule whose any keyword matches wins
    #[serde(default = "default_chat_rules")]
    pub rules: Vec<ChatRule>,

    /// Answer returned when no rule matches
    #[serde(default = "default_chat_fallback")]
    pub fallback: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            rules: default_chat_rules(),
            fallback: default_chat_fallback(),
        }
    }
}

/// A single keyword-group rule in the chat table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRule {
    /// Substrings that trigger this rule (matched case-insensitively)
    pub keywords: Vec<String>,

    /// Canned answer returned on a match
    pub answer: String,
}

/// Default scripted answers used when no live AI backend is configured
pub fn default_chat_rules() -> Vec<ChatRule> {
    vec![
        ChatRule {
            keywords: vec!["what is ai".to_string(), "what ai".to_string()],
            answer: "AI (Artificial Intelligence) is like having a very smart assistant \
                     that can help you with tasks, answer questions, and learn from \
                     information. Think of it as a computer program that can understand \
                     what you say or type, and respond in a helpful way.\n\nFor example, \
                     when you ask Siri or Alexa a question, that's AI! It's technology \
                     designed to make your life easier."
                .to_string(),
        },
        ChatRule {
            keywords: vec!["help me".to_string(), "daily life".to_string()],
            answer: "AI can help you in many ways:\n\n\u{2022} Control smart home devices \
                     with your voice\n\u{2022} Make video calls to family\n\u{2022} Set \
                     reminders and manage your schedule\n\u{2022} Get weather updates and \
                     news\n\u{2022} Answer questions instantly\n\nWould you like to learn \
                     more about any of these?"
                .to_string(),
        },
    ]
}

/// Default fallback directing the user to a human contact channel
pub fn default_chat_fallback() -> String {
    "That's a great question! For personalized help, I recommend taking our \
     assessment or contacting Cliff directly at calmaihelp@gmail.com. He can \
     provide hands-on assistance tailored to your needs."
        .to_string()
}
