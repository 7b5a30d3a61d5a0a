//! Release notifications for chat webhooks.
//!
//! Slack and Google Chat payloads are independent pure builders over the same
//! [`ReleaseData`]; [`PayloadFormat`] only picks which one runs.

mod chat;
mod data;
mod mention;
mod slack;
mod webhook;

pub use chat::{
    Button, ButtonList, CARD_ID, Card, CardHeader, CardWithId, ChatPayload, DecoratedText,
    OnClick, OpenLink, Section, TextParagraph, Widget, build_chat_card_payload, reference_buttons,
};
pub use data::{
    NOT_AVAILABLE, NotificationContext, Platform, ReleaseData, ReleaseSet, VersionSummary,
    assemble_release_data,
};
pub use mention::{Mention, mention_text, parse_mentions};
pub use slack::{SlackPayload, build_slack_payload};
pub use webhook::deliver;

use crate::error::Result;

/// Target webhook format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// Slack workflow variables
    Slack,
    /// Google Chat card
    GoogleChat,
}

impl PayloadFormat {
    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            PayloadFormat::Slack => "Slack",
            PayloadFormat::GoogleChat => "Google Chat",
        }
    }

    /// Build this format's payload as JSON
    pub fn build(self, data: &ReleaseData) -> Result<serde_json::Value> {
        let value = match self {
            PayloadFormat::Slack => serde_json::to_value(build_slack_payload(data))?,
            PayloadFormat::GoogleChat => serde_json::to_value(build_chat_card_payload(data))?,
        };
        Ok(value)
    }
}
