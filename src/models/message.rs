//! Message models from the ActiveCampaign API.

use serde::Deserialize;

/// One entry of the message list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Message {
    /// Message ID.
    pub id: String,

    /// Internal name of the message.
    pub name: String,

    /// ID of the user who owns the message.
    pub userid: String,
}

/// Full details of a single message.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MessageDetails {
    /// Message ID.
    pub id: String,

    /// Subject line.
    pub subject: String,

    /// Sender display name.
    pub fromname: String,

    /// Sender email address.
    pub fromemail: String,

    /// Plain-text body.
    pub text: String,
}
