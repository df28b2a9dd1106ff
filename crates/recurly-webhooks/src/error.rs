//! Webhook error types.

/// Errors from decoding a webhook notification.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The root tag is not a known notification for the selected schema.
    #[error("unknown notification: {name}")]
    UnknownNotification {
        /// The root tag, exactly as received.
        name: String,
    },

    /// The document has no root element.
    #[error("notification has no root element")]
    MissingRoot,

    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The root tag is known but the payload does not match its shape.
    #[error("decode error: {0}")]
    Decode(#[from] quick_xml::DeError),
}
