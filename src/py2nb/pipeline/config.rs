//! Processing configurations
//!
//! A configuration names how far down the token pipeline to run and whether to stop at
//! tokens or render a script.

use std::collections::HashMap;

/// A named configuration specifying transformation stages and target
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub name: String,
    pub description: String,
    pub pipeline_spec: PipelineSpec,
    pub target: TargetSpec,
}

/// How many token stages to run. Each variant includes the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineSpec {
    /// Tokenizer output only
    Raw,

    /// Docstrings and `#%%` separators converted to cell markers
    Cells,

    /// Cell markers plus filler newlines for skipped lines
    Filled,
}

/// What to produce from the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSpec {
    /// Stop at tokens
    Tokens,

    /// Render tokens back to text and empty whitespace-only lines
    Script,
}

/// Registry of processing configurations
pub struct ConfigRegistry {
    configs: HashMap<String, ProcessingConfig>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a configuration, replacing any with the same name
    pub fn register(&mut self, config: ProcessingConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    pub fn get(&self, name: &str) -> Option<&ProcessingConfig> {
        self.configs.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// List all configurations (sorted by name)
    pub fn list_all(&self) -> Vec<&ProcessingConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    /// Create registry with the standard configurations
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(ProcessingConfig {
            name: "notebook".into(),
            description: "Convert to the notebook python script format".into(),
            pipeline_spec: PipelineSpec::Filled,
            target: TargetSpec::Script,
        });

        // Token-only configurations (for debugging)
        registry.register(ProcessingConfig {
            name: "tokens-raw".into(),
            description: "Raw tokens from the tokenizer".into(),
            pipeline_spec: PipelineSpec::Raw,
            target: TargetSpec::Tokens,
        });

        registry.register(ProcessingConfig {
            name: "tokens-cells".into(),
            description: "Tokens with docstrings and separators as cell markers".into(),
            pipeline_spec: PipelineSpec::Cells,
            target: TargetSpec::Tokens,
        });

        registry.register(ProcessingConfig {
            name: "tokens-filled".into(),
            description: "Cell marker tokens with skipped lines filled".into(),
            pipeline_spec: PipelineSpec::Filled,
            target: TargetSpec::Tokens,
        });

        registry
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = ConfigRegistry::new();
        assert!(registry.list_all().is_empty());
    }

    #[test]
    fn test_registry_register_replaces() {
        let mut registry = ConfigRegistry::new();
        for description in ["first", "second"] {
            registry.register(ProcessingConfig {
                name: "test".into(),
                description: description.into(),
                pipeline_spec: PipelineSpec::Raw,
                target: TargetSpec::Tokens,
            });
        }

        assert_eq!(registry.list_all().len(), 1);
        assert_eq!(registry.get("test").unwrap().description, "second");
    }

    #[test]
    fn test_registry_defaults() {
        let registry = ConfigRegistry::with_defaults();
        let notebook = registry.get("notebook").unwrap();
        assert_eq!(notebook.pipeline_spec, PipelineSpec::Filled);
        assert_eq!(notebook.target, TargetSpec::Script);

        assert!(registry.has("tokens-raw"));
        assert!(registry.has("tokens-cells"));
        assert!(registry.has("tokens-filled"));
        assert!(!registry.has("nonexistent"));
    }

    #[test]
    fn test_registry_list_all_sorted() {
        let registry = ConfigRegistry::with_defaults();
        let configs = registry.list_all();
        let names: Vec<_> = configs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["notebook", "tokens-cells", "tokens-filled", "tokens-raw"]
        );
    }
}
