//! User-facing labels and the media filter of the composer.
//!
//! The component takes this struct as a prop. `Deserialize` is derived for
//! hosts that keep their UI strings in JSON (a translation bundle, say) and
//! build the config from it. Every field has a default, so a partial object
//! such as `{"placeholder": "Say something"}` fills the rest from
//! [`ComposerConfig::default`].

use serde::Deserialize;

use crate::model::attachment::AttachmentPhase;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ComposerConfig {
    /// Placeholder shown in the empty text field.
    pub placeholder: String,
    /// `accept` filter handed to the file-selection surface.
    pub accept: String,
    /// Aria label of the attachment control while nothing is staged.
    pub attach_label: String,
    /// Aria label of the attachment control while a preview is staged.
    pub cancel_label: String,
    /// Aria label of the send control.
    pub send_label: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type a message...".to_string(),
            accept: "image/*".to_string(),
            attach_label: "Upload image".to_string(),
            cancel_label: "Cancel image".to_string(),
            send_label: "Send message".to_string(),
        }
    }
}

impl ComposerConfig {
    pub fn attachment_label(&self, phase: AttachmentPhase) -> &str {
        match phase {
            AttachmentPhase::Idle => &self.attach_label,
            AttachmentPhase::Staged => &self.cancel_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ComposerConfig =
            serde_json::from_str(r#"{"placeholder": "Escribe un mensaje..."}"#).unwrap();
        assert_eq!(config.placeholder, "Escribe un mensaje...");
        assert_eq!(config.accept, "image/*");
        assert_eq!(config.send_label, "Send message");
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: ComposerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ComposerConfig::default());
    }

    #[test]
    fn test_attachment_label_follows_phase() {
        let config = ComposerConfig::default();
        assert_eq!(config.attachment_label(AttachmentPhase::Idle), "Upload image");
        assert_eq!(config.attachment_label(AttachmentPhase::Staged), "Cancel image");
    }
}
