use crate::core::template::{render_strict, TemplateVars};
use crate::core::{GeneratedProject, ProjectAnswers, ProjectGenerator, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_AWS_SDK_VERSION: &str = "2.20.136";

const MAIN_JAVA: &str = include_str!("../../templates/java/Main.java");
const POM_XML: &str = include_str!("../../templates/java/pom.xml");
const README: &str = include_str!("../../templates/java/README.md");
const GITIGNORE: &str = include_str!("../../templates/java/gitignore");

const MAIN_DIR: &str = "src/main/java/com/aws/repro";
const TEST_DIR: &str = "src/test/java/com/aws/repro";
const RESOURCES_DIR: &str = "src/main/resources";

/// Maven project around a single `Main.java`.
pub struct JavaGenerator {
    aws_sdk_version: String,
}

impl JavaGenerator {
    pub fn new(aws_sdk_version: impl Into<String>) -> Self {
        Self {
            aws_sdk_version: aws_sdk_version.into(),
        }
    }

    pub fn template_vars(&self, answers: &ProjectAnswers) -> TemplateVars {
        TemplateVars::new()
            .set("service", answers.service.java_package())
            .set("Service", answers.service.java_client_prefix())
            .set("operation", answers.operation.camel())
            .set("Operation", answers.operation.pascal())
            .set("region", answers.region.java_constant())
            .set("aws-sdk-version", self.aws_sdk_version.as_str())
    }
}

impl Default for JavaGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_AWS_SDK_VERSION)
    }
}

#[async_trait]
impl ProjectGenerator for JavaGenerator {
    async fn generate<S: Storage>(
        &self,
        answers: &ProjectAnswers,
        storage: &S,
    ) -> Result<GeneratedProject> {
        let mut project = GeneratedProject::default();
        let vars = self.template_vars(answers);

        for dir in [MAIN_DIR, TEST_DIR, RESOURCES_DIR] {
            storage.create_dir(dir).await?;
            project.add_directory(dir);
        }

        let main_path = format!("{}/Main.java", MAIN_DIR);
        let main_java = render_strict("Main.java", MAIN_JAVA, &vars)?;
        storage.write_file(&main_path, main_java.as_bytes()).await?;
        project.add_file(&main_path);

        let pom = render_strict("pom.xml", POM_XML, &vars)?;
        storage.write_file("pom.xml", pom.as_bytes()).await?;
        project.add_file("pom.xml");

        // README 顯示標準區域代碼，不是 Java 常數
        let readme_vars = vars.set("region", answers.region.code());
        let readme = render_strict("README.md", README, &readme_vars)?;
        storage.write_file("README.md", readme.as_bytes()).await?;
        project.add_file("README.md");

        storage.write_file(".gitignore", GITIGNORE.as_bytes()).await?;
        project.add_file(".gitignore");

        tracing::debug!("Java project files: {:?}", project.files);
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::domain::model::SdkLanguage;
    use crate::domain::services::AwsService;

    fn answers(service: AwsService, operation: &str, region: &str) -> ProjectAnswers {
        ProjectAnswers {
            project_name: "java-repro".to_string(),
            sdk: SdkLanguage::Java,
            environment: None,
            service,
            operation: operation.parse().unwrap(),
            region: region.parse().unwrap(),
        }
    }

    #[test]
    fn test_main_java_shape() {
        let storage = MemoryStorage::new();
        let generator = JavaGenerator::default();
        let project = tokio_test::block_on(
            generator.generate(&answers(AwsService::DynamoDb, "ListTables", "eu-west-1"), &storage),
        )
        .unwrap();

        let main = storage
            .file_text("src/main/java/com/aws/repro/Main.java")
            .unwrap();
        assert!(main.starts_with("package com.aws.repro;"));
        assert!(main.contains("import software.amazon.awssdk.services.dynamodb.DynamoDbClient;"));
        assert!(main.contains(
            "import software.amazon.awssdk.services.dynamodb.model.ListTablesRequest;"
        ));
        assert!(main.contains(".region(Region.EU_WEST_1)"));
        assert!(main.contains("ListTablesResponse response = client.listTables(request);"));
        assert!(main.contains("System.out.println(\"Operation successful:\");"));
        assert!(main.contains("e.printStackTrace();"));
        assert!(main.contains("System.exit(1);"));
        assert!(!main.contains("{{"));

        assert_eq!(
            project.directories,
            vec![
                "src/main/java/com/aws/repro",
                "src/test/java/com/aws/repro",
                "src/main/resources"
            ]
        );
        assert_eq!(storage.directories().len(), 3);
    }

    #[test]
    fn test_pom_and_support_files() {
        let storage = MemoryStorage::new();
        let generator = JavaGenerator::new("2.25.0");
        tokio_test::block_on(
            generator.generate(&answers(AwsService::Lambda, "invoke", "us-west-1"), &storage),
        )
        .unwrap();

        let pom = storage.file_text("pom.xml").unwrap();
        assert!(pom.contains("<version>2.25.0</version>"));
        assert!(pom.contains("<artifactId>lambda</artifactId>"));
        assert!(pom.contains("<mainClass>com.aws.repro.Main</mainClass>"));

        let readme = storage.file_text("README.md").unwrap();
        assert!(readme.contains("`invoke`"));
        assert!(readme.contains("`us-west-1`"));

        assert_eq!(
            storage.file_text(".gitignore").unwrap(),
            "target/\n.classpath\n.project\n.settings/\nbin/\n"
        );
        assert_eq!(
            storage.file_paths(),
            vec![
                ".gitignore",
                "README.md",
                "pom.xml",
                "src/main/java/com/aws/repro/Main.java"
            ]
        );
    }
}
