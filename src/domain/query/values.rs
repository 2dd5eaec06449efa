//! Value objects for the question flow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Media-type filter sent alongside a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    All,
    Text,
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::All => "all",
            MediaType::Text => "text",
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MediaType::All),
            "text" => Ok(MediaType::Text),
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            other => Err(ValidationError::invalid_format(
                "mediaType",
                format!("Unknown media type '{}'", other),
            )),
        }
    }
}

/// Answer returned for a question. Any subset of the parts may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<String>,
    /// Video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// One renderable part of an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerBlock {
    Text(String),
    Visual(String),
    Video(String),
}

impl QueryAnswer {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_visual(mut self, url: impl Into<String>) -> Self {
        self.visual = Some(url.into());
        self
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video = Some(url.into());
        self
    }

    /// Text part, if present and non-blank.
    pub fn text_part(&self) -> Option<&str> {
        present(&self.text)
    }

    /// Blocks to render, in text, visual, video order. Blank parts are absent.
    pub fn blocks(&self) -> Vec<AnswerBlock> {
        let mut blocks = Vec::with_capacity(3);
        if let Some(text) = present(&self.text) {
            blocks.push(AnswerBlock::Text(text.to_string()));
        }
        if let Some(url) = present(&self.visual) {
            blocks.push(AnswerBlock::Visual(url.to_string()));
        }
        if let Some(url) = present(&self.video) {
            blocks.push(AnswerBlock::Video(url.to_string()));
        }
        blocks
    }

    /// True when no part would render.
    pub fn is_empty(&self) -> bool {
        self.blocks().is_empty()
    }
}

fn present(part: &Option<String>) -> Option<&str> {
    part.as_deref().filter(|s| !s.trim().is_empty())
}
