use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Short field name within a service section.
/// e.g. "token", "channel"
pub type FieldName = &'static str;

/// Qualified credential names, as referenced by `CredentialSet::resolve`.
pub const THINGSPEAK_TOKEN: &str = "thingspeak.token";
pub const THINGSPEAK_CHANNEL: &str = "thingspeak.channel";
pub const BLYNK_TOKEN: &str = "blynk.token";

/// Stand-in values documented as requiring substitution before real use.
pub const PLACEHOLDER_TOKEN: &str = "MyToken";
pub const PLACEHOLDER_CHANNEL: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Service {
    ThingSpeak,
    Blynk,
}

impl Service {
    pub const fn lowercase(&self) -> &'static str {
        use Service::*;
        match self {
            ThingSpeak => "thingspeak",
            Blynk => "blynk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Secret text token. Prompted for like a password, masked on display.
    Token,
    /// Plain numeric identifier.
    Channel,
}

/// A credential value: a text token or a numeric identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(u64),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Static descriptor of one known credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    pub service: Service,
    pub name: FieldName,
    pub kind: FieldKind,
}

impl FieldMeta {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.service.lowercase(), self.name)
    }

    pub fn placeholder(&self) -> Value {
        use FieldKind::*;
        match self.kind {
            Token => Value::Text(PLACEHOLDER_TOKEN.to_owned()),
            Channel => Value::Number(PLACEHOLDER_CHANNEL),
        }
    }

    pub fn is_placeholder(&self, value: &Value) -> bool {
        *value == self.placeholder()
    }

    /// Environment variable that overrides this field.
    /// e.g. "CREDSET_THINGSPEAK_TOKEN"
    pub fn env_var(&self) -> String {
        format!(
            "CREDSET_{}_{}",
            self.service.lowercase().to_uppercase(),
            self.name.to_uppercase()
        )
    }

    pub const fn is_secret(&self) -> bool {
        matches!(self.kind, FieldKind::Token)
    }
}

/// The closed registry of known credential fields, in display order.
pub const KNOWN_FIELDS: [FieldMeta; 3] = [
    FieldMeta {
        service: Service::ThingSpeak,
        name: "token",
        kind: FieldKind::Token,
    },
    FieldMeta {
        service: Service::ThingSpeak,
        name: "channel",
        kind: FieldKind::Channel,
    },
    FieldMeta {
        service: Service::Blynk,
        name: "token",
        kind: FieldKind::Token,
    },
];

pub fn known_fields() -> &'static [FieldMeta] {
    &KNOWN_FIELDS
}

static FIELD_INDEX: Lazy<HashMap<String, &'static FieldMeta>> = Lazy::new(|| {
    KNOWN_FIELDS
        .iter()
        .map(|f| (f.qualified_name(), f))
        .collect()
});

pub fn find_field(qualified_name: &str) -> Option<&'static FieldMeta> {
    FIELD_INDEX.get(qualified_name).copied()
}

pub fn service_fields(service: Service) -> impl Iterator<Item = &'static FieldMeta> {
    KNOWN_FIELDS.iter().filter(move |f| f.service == service)
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn qualified_names_should_be_unique() {
        let mut names: Vec<_> = known_fields().iter().map(FieldMeta::qualified_name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), known_fields().len());
    }

    #[test]
    fn name_constants_should_match_registry() {
        let names: Vec<_> = known_fields().iter().map(FieldMeta::qualified_name).collect();
        assert_eq!(names, vec![THINGSPEAK_TOKEN, THINGSPEAK_CHANNEL, BLYNK_TOKEN]);
    }

    #[test]
    fn every_service_should_have_fields() {
        for service in Service::iter() {
            assert!(service_fields(service).count() > 0, "{} has no fields", service);
        }
    }

    #[test]
    fn find_field_should_only_resolve_known_names() {
        let f = find_field(THINGSPEAK_CHANNEL).unwrap();
        assert_eq!(f.service, Service::ThingSpeak);
        assert_eq!(f.kind, FieldKind::Channel);

        assert!(find_field("thingspeak.api_key").is_none());
        assert!(find_field("token").is_none());
    }

    #[test]
    fn env_var_names() {
        assert_eq!(
            find_field(THINGSPEAK_TOKEN).unwrap().env_var(),
            "CREDSET_THINGSPEAK_TOKEN"
        );
        assert_eq!(find_field(BLYNK_TOKEN).unwrap().env_var(), "CREDSET_BLYNK_TOKEN");
    }

    #[test]
    fn placeholder_detection() {
        let token = find_field(THINGSPEAK_TOKEN).unwrap();
        assert!(token.is_placeholder(&Value::text(PLACEHOLDER_TOKEN)));
        assert!(!token.is_placeholder(&Value::text("ABC123")));

        let channel = find_field(THINGSPEAK_CHANNEL).unwrap();
        assert!(channel.is_placeholder(&Value::Number(0)));
        assert!(!channel.is_placeholder(&Value::Number(42)));
    }
}
