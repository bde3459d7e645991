use crate::utils::error::{ReproError, Result};
use std::fmt;
use std::str::FromStr;

/// Services the scaffolder knows how to wire up in both SDKs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AwsService {
    S3,
    DynamoDb,
    Ec2,
    Iam,
    Lambda,
}

impl AwsService {
    pub const ALL: [AwsService; 5] = [
        AwsService::S3,
        AwsService::DynamoDb,
        AwsService::Ec2,
        AwsService::Iam,
        AwsService::Lambda,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            AwsService::S3 => "S3",
            AwsService::DynamoDb => "DynamoDB",
            AwsService::Ec2 => "EC2",
            AwsService::Iam => "IAM",
            AwsService::Lambda => "Lambda",
        }
    }

    /// Java SDK v2 package segment and Maven artifact id.
    pub fn java_package(&self) -> &'static str {
        match self {
            AwsService::S3 => "s3",
            AwsService::DynamoDb => "dynamodb",
            AwsService::Ec2 => "ec2",
            AwsService::Iam => "iam",
            AwsService::Lambda => "lambda",
        }
    }

    /// Prefix of the Java client class, e.g. `DynamoDb` for `DynamoDbClient`.
    pub fn java_client_prefix(&self) -> &'static str {
        match self {
            AwsService::S3 => "S3",
            AwsService::DynamoDb => "DynamoDb",
            AwsService::Ec2 => "Ec2",
            AwsService::Iam => "Iam",
            AwsService::Lambda => "Lambda",
        }
    }

    pub fn js_package(&self) -> String {
        format!("@aws-sdk/client-{}", self.java_package())
    }

    pub fn js_client(&self) -> String {
        format!("{}Client", self.title())
    }

    /// IAM action namespace, e.g. `dynamodb` in `dynamodb:ListTables`.
    pub fn iam_prefix(&self) -> &'static str {
        self.java_package()
    }
}

impl fmt::Display for AwsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for AwsService {
    type Err = ReproError;

    /// Accepts the title, the Java segment or the JS package name.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted.strip_prefix("@aws-sdk/client-").unwrap_or(&wanted);

        AwsService::ALL
            .into_iter()
            .find(|svc| svc.java_package() == wanted || svc.title().to_lowercase() == wanted)
            .ok_or_else(|| {
                ReproError::validation(
                    "service",
                    format!(
                        "Unsupported service '{}'. Supported services: {}",
                        s,
                        AwsService::ALL
                            .iter()
                            .map(|svc| svc.title())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_accepts_all_spellings() {
        assert_eq!("S3".parse::<AwsService>().unwrap(), AwsService::S3);
        assert_eq!("dynamodb".parse::<AwsService>().unwrap(), AwsService::DynamoDb);
        assert_eq!("DynamoDB".parse::<AwsService>().unwrap(), AwsService::DynamoDb);
        assert_eq!(
            "@aws-sdk/client-lambda".parse::<AwsService>().unwrap(),
            AwsService::Lambda
        );
        assert!("sqs".parse::<AwsService>().is_err());
    }

    #[test]
    fn test_client_names() {
        assert_eq!(AwsService::DynamoDb.js_client(), "DynamoDBClient");
        assert_eq!(AwsService::DynamoDb.java_client_prefix(), "DynamoDb");
        assert_eq!(AwsService::Iam.js_client(), "IAMClient");
        assert_eq!(AwsService::Ec2.js_package(), "@aws-sdk/client-ec2");
    }
}
