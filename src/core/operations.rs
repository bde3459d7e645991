use crate::domain::ports::OperationSource;
use crate::utils::error::{ReproError, Result};
use crate::utils::text::{kebab_to_pascal, levenshtein, lower_first, pascal_to_kebab};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const MAX_OPERATION_SUGGESTIONS: usize = 20;
const MAX_SIMILAR_OPERATIONS: usize = 3;
const OPERATION_PREVIEW: usize = 5;

fn kebab_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").expect("kebab pattern is valid"))
}

fn command_export_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"/commands/([A-Z][a-zA-Z0-9]+Command)").expect("command pattern is valid")
    })
}

pub fn is_valid_operation_format(operation: &str) -> bool {
    kebab_regex().is_match(operation)
}

/// Without a discovered list only the format can be checked.
pub fn is_valid_operation(operation: &str, available: &[String]) -> bool {
    if available.is_empty() {
        return is_valid_operation_format(operation);
    }
    available.iter().any(|op| op == operation)
}

/// Every operation containing `input`, case-insensitively.
pub fn filter_operations<'a>(input: &str, available: &'a [String]) -> Vec<&'a str> {
    let lower = input.to_lowercase();
    available
        .iter()
        .filter(|op| op.to_lowercase().contains(&lower))
        .map(String::as_str)
        .collect()
}

pub fn operation_suggestions<'a>(input: &str, available: &'a [String]) -> Vec<&'a str> {
    let mut matches = filter_operations(input, available);
    matches.truncate(MAX_OPERATION_SUGGESTIONS);
    matches
}

pub fn operation_error_message(operation: &str, available: &[String]) -> String {
    if !is_valid_operation_format(operation) {
        return "Operation must be in kebab-case format (e.g., list-buckets, get-object)"
            .to_string();
    }

    if available.is_empty() {
        return "Could not validate operation. Please ensure the operation name is correct."
            .to_string();
    }

    let similar: Vec<&str> = available
        .iter()
        .filter(|op| levenshtein(operation, op) <= 2)
        .take(MAX_SIMILAR_OPERATIONS)
        .map(String::as_str)
        .collect();

    if !similar.is_empty() {
        return format!("Operation not found. Did you mean: {}?", similar.join(", "));
    }

    let preview: Vec<&str> = available
        .iter()
        .take(OPERATION_PREVIEW)
        .map(String::as_str)
        .collect();
    format!("Operation not found. Available operations: {}...", preview.join(", "))
}

/// `ListBucketsCommand` -> `list-buckets`
pub fn command_to_operation(command: &str) -> String {
    pascal_to_kebab(command.strip_suffix("Command").unwrap_or(command))
}

/// Collects command names from the keys of a package.json `exports` map.
pub fn operations_from_exports(exports: &serde_json::Value) -> BTreeSet<String> {
    let mut operations = BTreeSet::new();
    if let serde_json::Value::Object(map) = exports {
        for key in map.keys() {
            if let Some(caps) = command_export_regex().captures(key) {
                operations.insert(command_to_operation(&caps[1]));
            }
        }
    }
    operations
}

/// Command name from a file such as `ListBucketsCommand.js`.
pub fn operation_from_command_file(file_name: &str, allow_mjs: bool) -> Option<String> {
    let stem = file_name.strip_suffix(".js").or_else(|| {
        if allow_mjs {
            file_name.strip_suffix(".mjs")
        } else {
            None
        }
    })?;
    if stem.ends_with("Command") && stem.len() > "Command".len() {
        Some(command_to_operation(stem))
    } else {
        None
    }
}

/// Asks `source` for the package's operations. Failures are logged and
/// turn into an empty list, which makes validation fall back to format checks.
pub async fn discover_operations(source: &dyn OperationSource, package: &str) -> Vec<String> {
    tracing::info!("🔎 Looking up operations for {} via {}", package, source.name());
    match source.fetch_operations(package).await {
        Ok(operations) => {
            let unique: BTreeSet<String> = operations.into_iter().collect();
            tracing::info!("Found {} operations", unique.len());
            unique.into_iter().collect()
        }
        Err(e) => {
            tracing::warn!("Could not fetch operations: {}", e);
            Vec::new()
        }
    }
}

/// An SDK operation, stored kebab-case. Accepts `ListBuckets`, `listBuckets`
/// and `list-buckets`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationName(String);

impl OperationName {
    pub fn kebab(&self) -> &str {
        &self.0
    }

    pub fn pascal(&self) -> String {
        kebab_to_pascal(&self.0)
    }

    /// Java SDK method name.
    pub fn camel(&self) -> String {
        lower_first(&self.pascal())
    }

    /// JavaScript v3 command class.
    pub fn command(&self) -> String {
        format!("{}Command", self.pascal())
    }

    pub fn check_against(&self, available: &[String]) -> Result<()> {
        if is_valid_operation(&self.0, available) {
            Ok(())
        } else {
            Err(ReproError::validation(
                "operation",
                operation_error_message(&self.0, available),
            ))
        }
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal())
    }
}

impl FromStr for OperationName {
    type Err = ReproError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ReproError::validation("operation", "Operation is required"));
        }

        let kebab = if trimmed.contains('-') {
            trimmed.to_string()
        } else {
            pascal_to_kebab(trimmed)
        };

        if !is_valid_operation_format(&kebab) {
            return Err(ReproError::validation(
                "operation",
                operation_error_message(&kebab, &[]),
            ));
        }

        Ok(OperationName(kebab))
    }
}
