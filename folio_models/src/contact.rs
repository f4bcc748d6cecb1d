use nutype::nutype;

/// A contact form submission. The field types only bound the length; whether
/// the fields are non-empty is checked by the relay so that an empty field
/// produces a failure [`RelayResult`] instead of a type error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: SenderName,
    pub email: SenderEmail,
    pub message: MessageContent,
}

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SenderName(String);

/// The address the submitter typed into the form. It is rendered into the
/// notification body and never used as an envelope sender, so it is not
/// parsed as a mail address.
#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SenderEmail(String);

#[nutype(
    validate(len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct MessageContent(String);

/// Outcome of one relay invocation. Every code path through the relay
/// produces exactly one of these; errors never cross the boundary raw.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RelayResult {
    pub success: bool,
    pub message: String,
}

impl RelayResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
