use crate::core::operations::operations_from_exports;
use crate::domain::ports::OperationSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Reads the `exports` map of the latest published manifest. No install.
#[derive(Debug, Clone)]
pub struct RegistryOperationSource {
    registry_url: String,
    client: Client,
}

impl RegistryOperationSource {
    pub fn new(registry_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            registry_url: registry_url.into(),
            client,
        })
    }

    pub fn manifest_url(&self, package: &str) -> String {
        format!("{}/{}/latest", self.registry_url.trim_end_matches('/'), package)
    }
}

#[async_trait]
impl OperationSource for RegistryOperationSource {
    fn name(&self) -> &'static str {
        "registry"
    }

    async fn fetch_operations(&self, package: &str) -> Result<Vec<String>> {
        let url = self.manifest_url(package);
        tracing::debug!("Fetching manifest: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Registry response status: {}", response.status());

        let manifest: serde_json::Value = response.error_for_status()?.json().await?;
        let operations = manifest
            .get("exports")
            .map(operations_from_exports)
            .unwrap_or_default();

        Ok(operations.into_iter().collect())
    }
}

/// Used when discovery is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOperationSource;

#[async_trait]
impl OperationSource for NoOperationSource {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn fetch_operations(&self, _package: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_url() {
        let source =
            RegistryOperationSource::new("https://registry.npmjs.org/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            source.manifest_url("@aws-sdk/client-s3"),
            "https://registry.npmjs.org/@aws-sdk/client-s3/latest"
        );
    }
}
