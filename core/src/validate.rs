use lazy_regex::{lazy_regex, Lazy, Regex};
use serde::Serialize;

use crate::model::{FieldKind, Service, Value};
use crate::set::CredentialSet;

// ThingSpeak write API keys are 16 uppercase alphanumerics;
// Blynk auth tokens are 32 alphanumerics.
static RE_THINGSPEAK_TOKEN: Lazy<Regex> = lazy_regex!(r"^[A-Z0-9]{16}$");
static RE_BLYNK_TOKEN: Lazy<Regex> = lazy_regex!(r"^[0-9A-Za-z_-]{32}$");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Entry still carries its documented placeholder.
    Unconfigured,
    /// Substituted token does not look like a real key for its service.
    MalformedToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub name: String,
    pub kind: FindingKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn unconfigured(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.kind == FindingKind::Unconfigured)
    }

    pub fn num_unconfigured(&self) -> usize {
        self.unconfigured().count()
    }

    pub fn is_fully_configured(&self) -> bool {
        self.num_unconfigured() == 0
    }
}

fn token_looks_valid(service: Service, token: &str) -> bool {
    use Service::*;
    match service {
        ThingSpeak => RE_THINGSPEAK_TOKEN.is_match(token),
        Blynk => RE_BLYNK_TOKEN.is_match(token),
    }
}

/// Placeholder-detection pass over a credential set.
///
/// Definition time accepts placeholders as syntactically valid; this pass
/// is how real use rejects them before any connection is attempted.
pub fn validate(set: &CredentialSet) -> Report {
    let mut findings = Vec::new();

    for (field, value) in set.entries() {
        if field.is_placeholder(value) {
            findings.push(Finding {
                name: field.qualified_name(),
                kind: FindingKind::Unconfigured,
            });
            continue;
        }
        if let (FieldKind::Token, Value::Text(token)) = (field.kind, value) {
            if !token_looks_valid(field.service, token) {
                findings.push(Finding {
                    name: field.qualified_name(),
                    kind: FindingKind::MalformedToken,
                });
            }
        }
    }

    Report { findings }
}
