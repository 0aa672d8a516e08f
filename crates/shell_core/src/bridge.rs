use serde::Deserialize;

/// Wire shape of a message posted by the loaded page. Unknown fields are
/// ignored; unknown `type` values are dropped.
#[derive(Debug, Deserialize)]
struct RawPageMessage {
    #[serde(rename = "type")]
    kind: String,
    url: Option<String>,
    #[serde(rename = "canGoBack")]
    can_go_back: Option<bool>,
}

/// A recognized page-to-shell message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMessage {
    /// Navigation-state report from the injected bridge script.
    NavState { can_go_back: bool },
    /// Download request emitted by the page.
    Download { url: String },
}

/// Parses one raw message from the page channel. Returns `None` for
/// malformed JSON, unknown markers, or messages missing their payload.
pub fn parse_page_message(raw: &str) -> Option<PageMessage> {
    let message: RawPageMessage = serde_json::from_str(raw).ok()?;
    match message.kind.as_str() {
        "navstate" => Some(PageMessage::NavState {
            can_go_back: message.can_go_back?,
        }),
        "download" => {
            let url = message.url?;
            if url.is_empty() {
                return None;
            }
            Some(PageMessage::Download { url })
        }
        _ => None,
    }
}
