use std::collections::{HashMap, HashSet};

use crate::config::CredFile;
use crate::env::EnvOverrides;
use crate::error::{Error, Result};
use crate::model::{self, FieldMeta, Value, BLYNK_TOKEN, THINGSPEAK_CHANNEL, THINGSPEAK_TOKEN};

/// Complete, immutable mapping from qualified credential name to value.
///
/// Always total over the known field registry: every known name resolves,
/// and unconfigured entries carry their documented placeholder. There is
/// no mutation after construction, so shared reads need no synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    values: HashMap<String, Value>,
}

impl CredentialSet {
    /// The pristine template set, every entry at its placeholder.
    pub fn placeholder() -> Self {
        let values = model::known_fields()
            .iter()
            .map(|f| (f.qualified_name(), f.placeholder()))
            .collect();
        Self { values }
    }

    /// Build from explicit (name, value) pairs over placeholder defaults.
    /// Names outside the closed registry and duplicate names are rejected.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let mut set = Self::placeholder();
        let mut seen = HashSet::new();
        for (name, value) in entries {
            let name = name.into();
            if model::find_field(&name).is_none() {
                return Err(Error::UnknownCredential { name });
            }
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateName { name });
            }
            set.values.insert(name, value);
        }
        Ok(set)
    }

    /// Merge precedence: placeholder defaults < credentials file < env.
    pub fn merged(file: Option<&CredFile>, env: Option<&EnvOverrides>) -> Self {
        let mut set = Self::placeholder();
        if let Some(file) = file {
            set.apply_file(file);
        }
        if let Some(env) = env {
            set.apply_env(env);
        }
        set
    }

    fn apply_file(&mut self, file: &CredFile) {
        if let Some(ts) = &file.thingspeak {
            self.values
                .insert(THINGSPEAK_TOKEN.to_owned(), Value::Text(ts.token.clone()));
            self.values
                .insert(THINGSPEAK_CHANNEL.to_owned(), Value::Number(ts.channel));
        }
        if let Some(blynk) = &file.blynk {
            self.values
                .insert(BLYNK_TOKEN.to_owned(), Value::Text(blynk.token.clone()));
        }
    }

    fn apply_env(&mut self, env: &EnvOverrides) {
        if let Some(token) = &env.thingspeak_token {
            self.values
                .insert(THINGSPEAK_TOKEN.to_owned(), Value::Text(token.clone()));
        }
        if let Some(channel) = env.thingspeak_channel {
            self.values
                .insert(THINGSPEAK_CHANNEL.to_owned(), Value::Number(channel));
        }
        if let Some(token) = &env.blynk_token {
            self.values
                .insert(BLYNK_TOKEN.to_owned(), Value::Text(token.clone()));
        }
    }

    pub fn resolve(&self, name: &str) -> Result<&Value> {
        self.values.get(name).ok_or_else(|| Error::UnknownCredential {
            name: name.to_owned(),
        })
    }

    /// `resolve`, failing fast when the value is still the documented
    /// placeholder. Consumers should call this before any network use so
    /// an unconfigured credential surfaces at startup, by name.
    pub fn require(&self, name: &str) -> Result<&Value> {
        let field = model::find_field(name).ok_or_else(|| Error::UnknownCredential {
            name: name.to_owned(),
        })?;
        let value = self.resolve(name)?;
        if field.is_placeholder(value) {
            return Err(Error::MissingCredential {
                name: name.to_owned(),
                env_var: field.env_var(),
            });
        }
        Ok(value)
    }

    /// Entries in registry order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldMeta, &Value)> {
        model::known_fields().iter().map(move |f| {
            let value = self
                .values
                .get(&f.qualified_name())
                .expect("set is total over the registry");
            (f, value)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ThingSpeakSection;
    use crate::model::PLACEHOLDER_TOKEN;
    use maplit::hashmap;

    #[test]
    fn placeholder_set_should_resolve_every_known_name() {
        let set = CredentialSet::placeholder();
        for field in model::known_fields() {
            let value = set.resolve(&field.qualified_name()).unwrap();
            assert_eq!(*value, field.placeholder());
        }
    }

    #[test]
    fn resolve_should_reject_unknown_name() {
        let set = CredentialSet::placeholder();
        assert!(matches!(
            set.resolve("thingspeak.api_key"),
            Err(Error::UnknownCredential { .. })
        ));
    }

    #[test]
    fn resolve_should_return_identical_value_every_time() {
        let set = CredentialSet::from_entries([(THINGSPEAK_TOKEN, Value::text("0123456789ABCDEF"))])
            .unwrap();
        let first = set.resolve(THINGSPEAK_TOKEN).unwrap().clone();
        for _ in 0..3 {
            assert_eq!(*set.resolve(THINGSPEAK_TOKEN).unwrap(), first);
        }
    }

    #[test]
    fn from_entries_should_reject_duplicate_name() {
        let result = CredentialSet::from_entries([
            (BLYNK_TOKEN, Value::text("a")),
            (BLYNK_TOKEN, Value::text("b")),
        ]);
        assert!(matches!(result, Err(Error::DuplicateName { .. })));
    }

    #[test]
    fn from_entries_should_reject_unknown_name() {
        let result = CredentialSet::from_entries([("blynk.channel", Value::Number(1))]);
        assert!(matches!(result, Err(Error::UnknownCredential { .. })));
    }

    #[test]
    fn require_should_fail_on_placeholder_naming_the_credential() {
        let set = CredentialSet::placeholder();
        match set.require(BLYNK_TOKEN).unwrap_err() {
            Error::MissingCredential { name, env_var } => {
                assert_eq!(name, BLYNK_TOKEN);
                assert_eq!(env_var, "CREDSET_BLYNK_TOKEN");
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn require_should_pass_on_substituted_value() {
        let set = CredentialSet::from_entries([(BLYNK_TOKEN, Value::text("XYZ789"))]).unwrap();
        assert_eq!(*set.require(BLYNK_TOKEN).unwrap(), Value::text("XYZ789"));
    }

    #[test]
    fn merged_should_apply_full_file() {
        let file = CredFile::from_toml(
            r#"
[thingspeak]
token = "ABC123"
channel = 42

[blynk]
token = "XYZ789"
"#,
        )
        .unwrap();
        let set = CredentialSet::merged(Some(&file), None);

        let expected = hashmap! {
            THINGSPEAK_TOKEN => Value::text("ABC123"),
            THINGSPEAK_CHANNEL => Value::Number(42),
            BLYNK_TOKEN => Value::text("XYZ789"),
        };
        for (name, value) in expected {
            assert_eq!(set.resolve(name).unwrap(), &value);
        }
    }

    #[test]
    fn merge_precedence_should_be_env_over_file_over_placeholder() {
        let file = CredFile {
            source_file: None,
            thingspeak: Some(ThingSpeakSection {
                token: "FILETOKEN0123456".to_owned(),
                channel: 7,
            }),
            blynk: None,
        };
        let env = EnvOverrides {
            thingspeak_token: Some("ENVTOKEN".to_owned()),
            ..Default::default()
        };

        let set = CredentialSet::merged(Some(&file), Some(&env));
        assert_eq!(*set.resolve(THINGSPEAK_TOKEN).unwrap(), Value::text("ENVTOKEN"));
        assert_eq!(*set.resolve(THINGSPEAK_CHANNEL).unwrap(), Value::Number(7));
        assert_eq!(*set.resolve(BLYNK_TOKEN).unwrap(), Value::text(PLACEHOLDER_TOKEN));
    }

    #[test]
    fn entries_should_follow_registry_order() {
        let set = CredentialSet::placeholder();
        let names: Vec<_> = set.entries().map(|(f, _)| f.qualified_name()).collect();
        assert_eq!(names, vec![THINGSPEAK_TOKEN, THINGSPEAK_CHANNEL, BLYNK_TOKEN]);
    }
}
