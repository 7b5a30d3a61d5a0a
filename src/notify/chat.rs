//! Google Chat `cardsV2` payload.

use super::data::{Platform, ReleaseData};
use super::mention::mention_text;
use crate::firebase::Release;
use serde::Serialize;

/// Card id used for the release card
pub const CARD_ID: &str = "release-card";

/// Platforms in button order
const BUTTON_PLATFORMS: [Platform; 2] = [Platform::Ios, Platform::Android];

/// Top-level Chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    /// Mention line, present only when at least one mention was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Cards attached to the message
    #[serde(rename = "cardsV2")]
    pub cards_v2: Vec<CardWithId>,
}

/// Card plus its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardWithId {
    /// Card id
    pub card_id: String,
    /// Card body
    pub card: Card,
}

/// Card body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Title block
    pub header: CardHeader,
    /// Sections, in display order
    pub sections: Vec<Section>,
}

/// Card title block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardHeader {
    /// Title line
    pub title: String,
    /// Subtitle line
    pub subtitle: String,
}

/// Titled group of widgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section title
    pub header: String,
    /// Widgets in the section
    pub widgets: Vec<Widget>,
}

/// Card widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Widget {
    /// Labeled text row
    DecoratedText(DecoratedText),
    /// Row of link buttons
    ButtonList(ButtonList),
    /// Free text
    TextParagraph(TextParagraph),
}

/// Labeled text row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedText {
    /// Label above the text
    pub top_label: String,
    /// Row text
    pub text: String,
}

/// Row of buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonList {
    /// Buttons, in display order
    pub buttons: Vec<Button>,
}

/// Paragraph of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextParagraph {
    /// Paragraph text
    pub text: String,
}

/// Link button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    /// Button label
    pub text: String,
    /// Click action
    pub on_click: OnClick,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct OnClick {
    pub open_link: OpenLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct OpenLink {
    pub url: String,
}

impl Button {
    /// Button opening `url`
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_click: OnClick {
                open_link: OpenLink { url: url.into() },
            },
        }
    }
}

fn link_or_empty(url: &Option<String>) -> String {
    url.clone().unwrap_or_default()
}

/// Console, install and download buttons for one release
fn platform_buttons(platform: Platform, release: &Release) -> [Button; 3] {
    let label = platform.label();
    [
        Button::link(
            format!("🔗 {label} Release"),
            link_or_empty(&release.firebase_console_uri),
        ),
        Button::link(format!("📲 Install {label}"), link_or_empty(&release.testing_uri)),
        Button::link(
            format!("⬇️ Download {label}"),
            link_or_empty(&release.binary_download_uri),
        ),
    ]
}

/// Buttons for every platform that has a release, iOS first
pub fn reference_buttons(data: &ReleaseData) -> Vec<Button> {
    BUTTON_PLATFORMS
        .iter()
        .filter_map(|&platform| {
            data.releases
                .get(platform)
                .map(|release| platform_buttons(platform, release))
        })
        .flatten()
        .collect()
}

/// Build the Google Chat card payload.
pub fn build_chat_card_payload(data: &ReleaseData) -> ChatPayload {
    let mut sections = vec![
        Section {
            header: "Release".to_string(),
            widgets: vec![
                Widget::DecoratedText(DecoratedText {
                    top_label: "Commit".to_string(),
                    text: data.commit.clone(),
                }),
                Widget::DecoratedText(DecoratedText {
                    top_label: "Build by".to_string(),
                    text: data.build_user.clone(),
                }),
            ],
        },
        Section {
            header: "References".to_string(),
            widgets: vec![Widget::ButtonList(ButtonList {
                buttons: reference_buttons(data),
            })],
        },
    ];

    if !data.release_note.is_empty() {
        sections.push(Section {
            header: "Release note".to_string(),
            widgets: vec![Widget::TextParagraph(TextParagraph {
                text: data.release_note.clone(),
            })],
        });
    }

    let card = Card {
        header: CardHeader {
            title: format!(
                "📦 {} ({})",
                data.summary.version_name, data.summary.version_code
            ),
            subtitle: format!(
                "Branch: {} • Environment: {}",
                data.branch, data.environment
            ),
        },
        sections,
    };

    ChatPayload {
        text: mention_text(data.mentions.as_deref()),
        cards_v2: vec![CardWithId {
            card_id: CARD_ID.to_string(),
            card,
        }],
    }
}
