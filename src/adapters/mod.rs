// Adapters layer: concrete implementations for external systems (disk, npm, registry, npx).

pub mod initializer;
pub mod npm;
pub mod registry;
pub mod storage;

pub use initializer::NpxReactNativeInitializer;
pub use npm::NpmOperationSource;
pub use registry::{NoOperationSource, RegistryOperationSource};
pub use storage::{LocalStorage, MemoryStorage};

use crate::config::toml_config::{JavaScriptConfig, OperationsSourceKind};
use crate::domain::ports::OperationSource;
use crate::utils::error::Result;
use std::time::Duration;

pub fn operation_source(
    kind: OperationsSourceKind,
    javascript: &JavaScriptConfig,
) -> Result<Box<dyn OperationSource>> {
    let timeout = Duration::from_secs(javascript.lookup_timeout_seconds);
    let source: Box<dyn OperationSource> = match kind {
        OperationsSourceKind::Npm => Box::new(NpmOperationSource::new(timeout)),
        OperationsSourceKind::Registry => Box::new(RegistryOperationSource::new(
            javascript.registry_url.clone(),
            timeout,
        )?),
        OperationsSourceKind::None => Box::new(NoOperationSource),
    };
    tracing::debug!("Operation source: {}", source.name());
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_source_by_kind() {
        let javascript = JavaScriptConfig::default();
        for (kind, name) in [
            (OperationsSourceKind::Npm, "npm"),
            (OperationsSourceKind::Registry, "registry"),
            (OperationsSourceKind::None, "none"),
        ] {
            assert_eq!(operation_source(kind, &javascript).unwrap().name(), name);
        }
    }
}
