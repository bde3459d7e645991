use super::js_template_vars;
use crate::core::template::render_strict;
use crate::core::{GeneratedProject, ProjectAnswers, ProjectGenerator, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::json;

const INDEX_JS: &str = include_str!("../../templates/node/index.js");

pub struct NodeGenerator;

impl NodeGenerator {
    pub fn package_json(answers: &ProjectAnswers) -> serde_json::Value {
        let mut dependencies = serde_json::Map::new();
        dependencies.insert(answers.service.js_package(), json!("latest"));
        dependencies.insert("@aws-sdk/credential-provider-node".to_string(), json!("latest"));
        dependencies.insert("dotenv".to_string(), json!("^16.0.0"));

        json!({
            "name": answers.package_name(),
            "version": "1.0.0",
            "description": format!("AWS SDK for JavaScript v3 project for {}", answers.service.js_package()),
            "type": "module",
            "main": "index.js",
            "dependencies": dependencies,
            "scripts": {
                "start": "node -r dotenv/config index.js"
            }
        })
    }
}

#[async_trait]
impl ProjectGenerator for NodeGenerator {
    async fn generate<S: Storage>(
        &self,
        answers: &ProjectAnswers,
        storage: &S,
    ) -> Result<GeneratedProject> {
        let mut project = GeneratedProject::default();

        let index = render_strict("index.js", INDEX_JS, &js_template_vars(answers))?;
        storage.write_file("index.js", index.as_bytes()).await?;
        project.add_file("index.js");

        let pkg = serde_json::to_string_pretty(&Self::package_json(answers))?;
        storage.write_file("package.json", pkg.as_bytes()).await?;
        project.add_file("package.json");

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::domain::model::{JsEnvironment, SdkLanguage};
    use crate::domain::services::AwsService;

    fn answers() -> ProjectAnswers {
        ProjectAnswers {
            project_name: "My Node Repro".to_string(),
            sdk: SdkLanguage::JavaScript,
            environment: Some(JsEnvironment::Node),
            service: AwsService::DynamoDb,
            operation: "list-tables".parse().unwrap(),
            region: "ap-southeast-2".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_index_uses_selected_client() {
        let storage = MemoryStorage::new();
        NodeGenerator.generate(&answers(), &storage).await.unwrap();

        let index = storage.file_text("index.js").unwrap();
        assert!(index.contains(
            "import { DynamoDBClient, ListTablesCommand } from '@aws-sdk/client-dynamodb';"
        ));
        assert!(index.contains("new DynamoDBClient({ region: 'ap-southeast-2' })"));
        assert!(index.contains("console.log('Success:', response);"));
        assert!(!index.contains("S3Client"));
    }

    #[tokio::test]
    async fn test_package_json() {
        let storage = MemoryStorage::new();
        NodeGenerator.generate(&answers(), &storage).await.unwrap();

        let pkg: serde_json::Value =
            serde_json::from_str(&storage.file_text("package.json").unwrap()).unwrap();
        assert_eq!(pkg["name"], "my-node-repro");
        assert_eq!(pkg["type"], "module");
        assert_eq!(pkg["dependencies"]["@aws-sdk/client-dynamodb"], "latest");
        assert_eq!(pkg["dependencies"]["@aws-sdk/credential-provider-node"], "latest");
        assert_eq!(pkg["dependencies"]["dotenv"], "^16.0.0");
        assert_eq!(pkg["scripts"]["start"], "node -r dotenv/config index.js");
    }
}
