use super::js_template_vars;
use crate::core::template::render_strict;
use crate::core::{GeneratedProject, ProjectAnswers, ProjectGenerator, Storage};
use crate::utils::error::Result;
use crate::utils::text::escape_html;
use async_trait::async_trait;
use serde_json::json;

const INDEX_JS: &str = include_str!("../../templates/browser/index.js");
const INDEX_HTML: &str = include_str!("../../templates/browser/index.html");
const COGNITO_SETUP: &str = include_str!("../../templates/browser/COGNITO_SETUP.md");

/// Vite app that signs requests with Cognito identity-pool credentials.
pub struct BrowserGenerator;

impl BrowserGenerator {
    pub fn package_json(answers: &ProjectAnswers) -> serde_json::Value {
        let mut dependencies = serde_json::Map::new();
        dependencies.insert(answers.service.js_package(), json!("^3.535.0"));
        dependencies.insert(
            "@aws-sdk/credential-provider-cognito-identity".to_string(),
            json!("^3.535.0"),
        );

        json!({
            "name": answers.package_name(),
            "version": "1.0.0",
            "private": true,
            "type": "module",
            "scripts": {
                "start": "vite --open",
                "build": "vite build"
            },
            "devDependencies": {
                "vite": "^4.4.0"
            },
            "dependencies": dependencies
        })
    }
}

#[async_trait]
impl ProjectGenerator for BrowserGenerator {
    async fn generate<S: Storage>(
        &self,
        answers: &ProjectAnswers,
        storage: &S,
    ) -> Result<GeneratedProject> {
        let mut project = GeneratedProject::default();
        let vars =
            js_template_vars(answers).set("projectTitle", escape_html(&answers.project_name));

        let rendered = [
            ("index.js", render_strict("index.js", INDEX_JS, &vars)?),
            ("index.html", render_strict("index.html", INDEX_HTML, &vars)?),
            (
                "COGNITO_SETUP.md",
                render_strict("COGNITO_SETUP.md", COGNITO_SETUP, &vars)?,
            ),
            (
                "package.json",
                serde_json::to_string_pretty(&Self::package_json(answers))?,
            ),
        ];

        for (path, contents) in rendered {
            storage.write_file(path, contents.as_bytes()).await?;
            project.add_file(path);
        }

        Ok(project)
    }
}
