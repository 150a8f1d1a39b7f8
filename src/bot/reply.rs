//! Outbound replies

use crate::render::RenderedChart;

/// How the reply text should be interpreted by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyFormat {
    #[default]
    Plain,
    Markdown,
}

/// One outbound message: text, optionally with an image attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: ReplyFormat,
    /// When present, `text` is the image caption
    pub image: Option<RenderedChart>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Plain,
            image: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Markdown,
            image: None,
        }
    }

    pub fn with_image(text: impl Into<String>, image: RenderedChart) -> Self {
        Self {
            text: text.into(),
            format: ReplyFormat::Plain,
            image: Some(image),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
