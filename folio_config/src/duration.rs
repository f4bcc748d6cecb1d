use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Duration config value parsed from strings like `"30s"` or `"1d 2h 3m 4s"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

#[derive(Debug, Error)]
#[error("Invalid duration")]
pub struct ParseDurationError;

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = std::time::Duration::ZERO;
        for part in s.split_whitespace() {
            let (value, factor) = if let Some(value) = part.strip_suffix('s') {
                (value, 1)
            } else if let Some(value) = part.strip_suffix('m') {
                (value, 60)
            } else if let Some(value) = part.strip_suffix('h') {
                (value, 60 * 60)
            } else if let Some(value) = part.strip_suffix('d') {
                (value, 24 * 60 * 60)
            } else {
                return Err(ParseDurationError);
            };
            let value = value.parse::<u64>().map_err(|_| ParseDurationError)?;
            out += std::time::Duration::from_secs(value * factor);
        }
        Ok(Self(out))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13)),
            ("42m", Some(42 * 60)),
            ("7h", Some(7 * 60 * 60)),
            ("20d", Some(20 * 24 * 60 * 60)),
            ("", Some(0)),
            ("1d 2h 3m 4s", Some(((24 + 2) * 60 + 3) * 60 + 4)),
            ("xyz", None),
            ("7dd", None),
            ("s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input.clone())
                .ok()
                .map(|x| x.0.as_secs());
            assert_eq!(output, expected, "{input:?}");
        }
    }
}
