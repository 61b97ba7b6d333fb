use protogen_schema::ProjectConfig;

use crate::naming::NamingRules;

/// Settings shared by every generation pass.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Namespace declaring the runtime base types.
    pub runtime_namespace: String,
    /// Identifier rewrite pipeline.
    pub naming: NamingRules,
}

impl GeneratorOptions {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            runtime_namespace: config.generator.runtime_namespace.clone(),
            naming: NamingRules::new(&config.rewrite.namespace),
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from_config(&ProjectConfig::default())
    }
}
