use colored::{Color, Colorize};

use crate::model::{FieldMeta, Value};
use crate::set::CredentialSet;
use crate::validate::{FindingKind, Report};

#[macro_export]
macro_rules! print_success {
    ($fmt:literal, $($e:tt)*) => {
        use ::colored::Colorize as _;
        println!("{}", format!($fmt, $($e)*).green())
    }
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for FindingKind {
    fn color(&self) -> Color {
        use FindingKind::*;
        match self {
            Unconfigured => Color::BrightYellow,
            MalformedToken => Color::BrightRed,
        }
    }
}

/// Mask a secret for display, keeping enough of the tail to identify it.
pub fn mask_secret(s: &str) -> String {
    let n = s.chars().count();
    if n <= 4 {
        return "****".to_owned();
    }
    let tail: String = s.chars().skip(n - 4).collect();
    format!("{}{}", "*".repeat(n - 4), tail)
}

pub fn display_value(field: &FieldMeta, value: &Value, reveal: bool) -> String {
    match value {
        Value::Text(s) if field.is_secret() && !reveal && !field.is_placeholder(value) => {
            mask_secret(s)
        }
        _ => value.to_string(),
    }
}

pub fn finding_icon(kind: FindingKind) -> String {
    format!(" {} ", kind)
        .on_color(kind.color())
        .black()
        .bold()
        .to_string()
}

pub fn print_report(report: &Report) {
    if report.findings.is_empty() {
        println!("{}", "All credentials configured ✨".green());
        return;
    }
    for finding in &report.findings {
        println!("{} {}", finding_icon(finding.kind), finding.name);
    }
}

pub fn print_entries(set: &CredentialSet, reveal: bool) {
    let width = crate::model::known_fields()
        .iter()
        .map(|f| f.qualified_name().len())
        .max()
        .unwrap_or(0);

    for (field, value) in set.entries() {
        let name = format!("{:width$}", field.qualified_name(), width = width);
        let shown = display_value(field, value, reveal);
        if field.is_placeholder(value) {
            println!("{}  {}", name.bold(), shown.yellow().dimmed());
        } else {
            println!("{}  {}", name.bold(), shown.green());
        }
    }
}

/// Entries as a JSON object, secrets masked unless `reveal`.
pub fn entries_json(set: &CredentialSet, reveal: bool) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (field, value) in set.entries() {
        let shown = match value {
            Value::Text(s) if field.is_secret() && !reveal && !field.is_placeholder(value) => {
                serde_json::Value::String(mask_secret(s))
            }
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => serde_json::Value::Number((*n).into()),
        };
        map.insert(field.qualified_name(), shown);
    }
    serde_json::Value::Object(map)
}
