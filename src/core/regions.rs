use crate::utils::error::{ReproError, Result};
use crate::utils::text::levenshtein;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Region codes and their console display names.
pub const AWS_REGIONS: [(&str, &str); 32] = [
    // US
    ("us-east-1", "US East (N. Virginia)"),
    ("us-east-2", "US East (Ohio)"),
    ("us-west-1", "US West (N. California)"),
    ("us-west-2", "US West (Oregon)"),
    // Africa
    ("af-south-1", "Africa (Cape Town)"),
    // Asia Pacific
    ("ap-east-1", "Asia Pacific (Hong Kong)"),
    ("ap-south-1", "Asia Pacific (Mumbai)"),
    ("ap-south-2", "Asia Pacific (Hyderabad)"),
    ("ap-northeast-1", "Asia Pacific (Tokyo)"),
    ("ap-northeast-2", "Asia Pacific (Seoul)"),
    ("ap-northeast-3", "Asia Pacific (Osaka)"),
    ("ap-southeast-1", "Asia Pacific (Singapore)"),
    ("ap-southeast-2", "Asia Pacific (Sydney)"),
    ("ap-southeast-3", "Asia Pacific (Jakarta)"),
    ("ap-southeast-4", "Asia Pacific (Melbourne)"),
    // Canada
    ("ca-central-1", "Canada (Central)"),
    ("ca-west-1", "Canada (Calgary)"),
    // Europe
    ("eu-central-1", "Europe (Frankfurt)"),
    ("eu-central-2", "Europe (Zurich)"),
    ("eu-west-1", "Europe (Ireland)"),
    ("eu-west-2", "Europe (London)"),
    ("eu-west-3", "Europe (Paris)"),
    ("eu-south-1", "Europe (Milan)"),
    ("eu-south-2", "Europe (Spain)"),
    ("eu-north-1", "Europe (Stockholm)"),
    // Middle East
    ("me-south-1", "Middle East (Bahrain)"),
    ("me-central-1", "Middle East (UAE)"),
    // South America
    ("sa-east-1", "South America (São Paulo)"),
    // GovCloud
    ("us-gov-east-1", "AWS GovCloud (US-East)"),
    ("us-gov-west-1", "AWS GovCloud (US-West)"),
    // China，需要獨立帳號
    ("cn-north-1", "China (Beijing)"),
    ("cn-northwest-1", "China (Ningxia)"),
];

pub const DEFAULT_SIMILARITY_DISTANCE: usize = 2;
const MAX_SIMILAR_REGIONS: usize = 5;

pub fn region_codes() -> impl Iterator<Item = &'static str> {
    AWS_REGIONS.iter().map(|(code, _)| *code)
}

pub fn is_valid_region(region: &str) -> bool {
    let lower = region.to_lowercase();
    region_codes().any(|code| code == lower)
}

pub fn display_name(region: &str) -> &str {
    AWS_REGIONS
        .iter()
        .find(|(code, _)| *code == region)
        .map(|(_, name)| *name)
        .unwrap_or(region)
}

/// Catalogue codes within `1..=max_distance` edits of `region`, at most five.
pub fn find_similar_regions(region: &str, max_distance: usize) -> Vec<&'static str> {
    let lower = region.to_lowercase();
    region_codes()
        .filter(|code| {
            let distance = levenshtein(&lower, code);
            distance > 0 && distance <= max_distance
        })
        .take(MAX_SIMILAR_REGIONS)
        .collect()
}

pub fn region_suggestions(input: &str) -> Vec<&'static str> {
    if input.is_empty() {
        return region_codes().collect();
    }
    let lower = input.to_lowercase();
    region_codes().filter(|code| code.contains(&lower)).collect()
}

fn format_regexes() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(
                r"^[a-z]{2,3}-(north|south|east|west|central|northeast|northwest|southeast|southwest)-\d+$",
            )
            .expect("region pattern is valid"),
            Regex::new(r"^us-gov-(east|west)-\d+$").expect("govcloud pattern is valid"),
            Regex::new(r"^cn-(north|northwest)-\d+$").expect("china pattern is valid"),
        ]
    })
}

pub fn is_valid_region_format(region: &str) -> bool {
    format_regexes().iter().any(|re| re.is_match(region))
}

/// Explains why `region` was rejected, with suggestions when we have some.
pub fn region_error_message(region: &str) -> String {
    let lower = region.to_lowercase();

    // 先檢查底線，否則格式檢查會先把它擋掉
    if lower.contains('_') {
        let corrected = lower.replace('_', "-");
        if is_valid_region(&corrected) {
            return format!(
                "Invalid format. Did you mean: {}? (use hyphens, not underscores)",
                corrected
            );
        }
    }

    if !is_valid_region_format(&lower) {
        return "Invalid region format. AWS regions follow the pattern: prefix-direction-number (e.g., us-west-2, eu-central-1)".to_string();
    }

    let similar = find_similar_regions(&lower, DEFAULT_SIMILARITY_DISTANCE);
    if !similar.is_empty() {
        let suggestions = similar
            .iter()
            .map(|code| format!("{} ({})", code, display_name(code)))
            .collect::<Vec<_>>()
            .join(", ");
        return format!("Region not found. Did you mean: {}?", suggestions);
    }

    "Region not found. Use format: prefix-direction-number (e.g., us-west-2, eu-central-1)"
        .to_string()
}

/// `US_WEST_1` -> `us-west-1`
pub fn java_region_to_standard(region: &str) -> String {
    region.to_lowercase().replace('_', "-")
}

/// `us-west-1` -> `US_WEST_1`
pub fn standard_region_to_java(region: &str) -> String {
    region.to_uppercase().replace('-', "_")
}

/// A catalogue region, stored in the standard `us-west-1` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AwsRegion(String);

impl AwsRegion {
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Constant name on `software.amazon.awssdk.regions.Region`.
    pub fn java_constant(&self) -> String {
        standard_region_to_java(&self.0)
    }

    pub fn display_name(&self) -> &str {
        display_name(&self.0)
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AwsRegion {
    type Err = ReproError;

    /// Accepts both `us-west-1` and the Java style `US_WEST_1`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ReproError::validation("region", "Region is required"));
        }

        let is_java_style = trimmed.contains('_')
            && trimmed
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        let candidate = if is_java_style {
            java_region_to_standard(trimmed)
        } else {
            trimmed.to_lowercase()
        };

        if is_valid_region(&candidate) {
            Ok(AwsRegion(candidate))
        } else {
            Err(ReproError::validation("region", region_error_message(&candidate)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_region() {
        assert!(is_valid_region("us-west-2"));
        assert!(is_valid_region("US-WEST-2"));
        assert!(is_valid_region("cn-northwest-1"));
        assert!(!is_valid_region("us-west-9"));
        assert_eq!(AWS_REGIONS.len(), 32);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("eu-central-2"), "Europe (Zurich)");
        assert_eq!(display_name("xx-nowhere-1"), "xx-nowhere-1");
    }

    #[test]
    fn test_find_similar_regions() {
        let similar = find_similar_regions("us-wset-2", 2);
        assert!(similar.contains(&"us-west-2"));
        assert!(similar.len() <= 5);
        // 完全相同不算相似
        assert!(!find_similar_regions("us-west-2", 2).contains(&"us-west-2"));
    }

    #[test]
    fn test_region_suggestions() {
        assert_eq!(region_suggestions("").len(), 32);
        let eu = region_suggestions("EU-");
        assert_eq!(eu.len(), 8);
        assert!(eu.iter().all(|code| code.starts_with("eu-")));
        assert_eq!(region_suggestions("gov"), vec!["us-gov-east-1", "us-gov-west-1"]);
    }

    #[test]
    fn test_is_valid_region_format() {
        assert!(is_valid_region_format("us-west-2"));
        assert!(is_valid_region_format("ap-southeast-4"));
        assert!(is_valid_region_format("us-gov-east-1"));
        assert!(is_valid_region_format("cn-northwest-1"));
        assert!(is_valid_region_format("zz-west-9"));
        assert!(!is_valid_region_format("uswest2"));
        assert!(!is_valid_region_format("us-up-1"));
    }

    #[test]
    fn test_region_error_message() {
        assert!(region_error_message("uswest2").starts_with("Invalid region format"));
        assert_eq!(
            region_error_message("us_west_2"),
            "Invalid format. Did you mean: us-west-2? (use hyphens, not underscores)"
        );
        let msg = region_error_message("us-west-3");
        assert!(msg.starts_with("Region not found. Did you mean:"));
        assert!(msg.contains("us-west-2 (US West (Oregon))"));
        assert_eq!(
            region_error_message("zz-central-42"),
            "Region not found. Use format: prefix-direction-number (e.g., us-west-2, eu-central-1)"
        );
    }

    #[test]
    fn test_java_conversions() {
        assert_eq!(java_region_to_standard("US_WEST_1"), "us-west-1");
        assert_eq!(standard_region_to_java("us-gov-west-1"), "US_GOV_WEST_1");
    }

    #[test]
    fn test_parse_region() {
        let region: AwsRegion = "US_WEST_1".parse().unwrap();
        assert_eq!(region.code(), "us-west-1");
        assert_eq!(region.java_constant(), "US_WEST_1");

        let region: AwsRegion = " EU-West-1 ".parse().unwrap();
        assert_eq!(region.code(), "eu-west-1");
        assert_eq!(region.display_name(), "Europe (Ireland)");

        assert!("".parse::<AwsRegion>().is_err());
        assert!("us-west-9".parse::<AwsRegion>().is_err());
        assert!("us_west_1".parse::<AwsRegion>().is_err());
    }

    #[test]
    fn test_java_style_typo_gets_suggestions() {
        let err = "US_WEST_9".parse::<AwsRegion>().unwrap_err();
        let message = err.user_friendly_message();
        assert!(message.starts_with("Region not found. Did you mean:"), "{}", message);
        assert!(message.contains("us-west-1 (US West (N. California))"));
        assert!(message.contains("us-west-2 (US West (Oregon))"));
    }
}
