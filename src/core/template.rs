//! Literal `{{name}}` substitution for the bundled project templates.

use crate::utils::error::{ReproError, Result};
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z][A-Za-z0-9_-]*)\}\}").expect("placeholder pattern is valid")
    })
}

/// Template variables. Names are case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
    values: HashMap<String, String>,
}

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Replaces every known placeholder; unknown ones are left as they are.
pub fn render(template: &str, vars: &TemplateVars) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct placeholder names left in `text`, in order of first appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(text) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Like [`render`], but fails when any placeholder survives.
pub fn render_strict(template_name: &str, template: &str, vars: &TemplateVars) -> Result<String> {
    let rendered = render(template, vars);
    let leftover = unresolved_placeholders(&rendered);
    if !leftover.is_empty() {
        return Err(ReproError::TemplateError {
            template: template_name.to_string(),
            placeholders: leftover,
        });
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_case_sensitive() {
        let vars = TemplateVars::new()
            .set("service", "dynamodb")
            .set("Service", "DynamoDb");
        let out = render(
            "import software.amazon.awssdk.services.{{service}}.{{Service}}Client;",
            &vars,
        );
        assert_eq!(out, "import software.amazon.awssdk.services.dynamodb.DynamoDbClient;");
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let vars = TemplateVars::new().set("Operation", "ListBuckets");
        let out = render("{{Operation}}Request {{Operation}}Response", &vars);
        assert_eq!(out, "ListBucketsRequest ListBucketsResponse");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let vars = TemplateVars::new().set("service", "s3");
        let out = render("{{service}} {{region}}", &vars);
        assert_eq!(out, "s3 {{region}}");
        assert_eq!(unresolved_placeholders(&out), vec!["region".to_string()]);
    }

    #[test]
    fn test_non_placeholder_braces_are_untouched() {
        let vars = TemplateVars::new();
        let js = "const input = {}; style={{ flex: 1 }} ${value}";
        assert_eq!(render(js, &vars), js);
        assert!(unresolved_placeholders(js).is_empty());
    }

    #[test]
    fn test_render_strict_reports_leftovers() {
        let vars = TemplateVars::new().set("a", "1");
        let err = render_strict("t", "{{a}} {{b}} {{c}} {{b}}", &vars).unwrap_err();
        match err {
            ReproError::TemplateError { placeholders, .. } => {
                assert_eq!(placeholders, vec!["b".to_string(), "c".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(render_strict("t", "{{a}}", &vars).unwrap(), "1");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let vars = TemplateVars::new().set("a", "{{b}}").set("b", "x");
        assert_eq!(render("{{a}}", &vars), "{{b}}");
    }
}
