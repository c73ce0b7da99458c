//! Defines the properties for the `MessageInputComponent`.

use common::config::ComposerConfig;
use yew::prelude::*;

/// Properties for the `MessageInputComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct MessageInputProps {
    /// Invoked once per successful submission with the trimmed draft text.
    ///
    /// The staged image, if any, is never part of the payload.
    pub on_send: Callback<String>,

    /// Labels, placeholder and the `accept` filter of the file picker.
    /// Defaults reproduce the stock English wording and `image/*`.
    #[prop_or_default]
    pub config: ComposerConfig,
}
