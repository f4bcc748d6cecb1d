use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(value: EmailAddress) -> Self {
        Self(lettre::message::Mailbox {
            name: None,
            email: value.0,
        })
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_address() {
        let address: EmailAddress = "contact@example.com".parse().unwrap();
        assert_eq!(address.as_str(), "contact@example.com");
    }

    #[test]
    fn parse_mailbox_with_name() {
        let mailbox: EmailAddressWithName = "Jane Doe <jane@example.com>".parse().unwrap();
        assert_eq!(mailbox.0.name.as_deref(), Some("Jane Doe"));
        assert_eq!(AsRef::<str>::as_ref(&mailbox.0.email), "jane@example.com");
    }

    #[test]
    fn address_into_mailbox() {
        let address: EmailAddress = "contact@example.com".parse().unwrap();
        let mailbox = EmailAddressWithName::from(address);
        assert_eq!(mailbox.0.name, None);
    }
}
