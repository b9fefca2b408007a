use serde::Deserialize;

use crate::error::Result;

pub const ENV_PREFIX: &str = "CREDSET_";

/// Credential overrides taken from the process environment, so real
/// values never have to live in a file (e.g. `CREDSET_THINGSPEAK_TOKEN`).
/// Highest merge priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvOverrides {
    pub thingspeak_token: Option<String>,
    pub thingspeak_channel: Option<u64>,
    pub blynk_token: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    pub fn from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(iter)?)
    }

    pub fn is_empty(&self) -> bool {
        self.thingspeak_token.is_none()
            && self.thingspeak_channel.is_none()
            && self.blynk_token.is_none()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_iter_should_pick_up_prefixed_vars_only() {
        let env = EnvOverrides::from_iter([
            ("CREDSET_THINGSPEAK_TOKEN".to_owned(), "0123456789ABCDEF".to_owned()),
            ("CREDSET_THINGSPEAK_CHANNEL".to_owned(), "42".to_owned()),
            ("UNRELATED_VAR".to_owned(), "x".to_owned()),
        ])
        .unwrap();

        assert_eq!(env.thingspeak_token.as_deref(), Some("0123456789ABCDEF"));
        assert_eq!(env.thingspeak_channel, Some(42));
        assert_eq!(env.blynk_token, None);
    }

    #[test]
    fn empty_env_should_yield_no_overrides() {
        let env = EnvOverrides::from_iter(std::iter::empty()).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn non_numeric_channel_should_error() {
        let result = EnvOverrides::from_iter([(
            "CREDSET_THINGSPEAK_CHANNEL".to_owned(),
            "not-a-number".to_owned(),
        )]);
        assert!(result.is_err());
    }
}
