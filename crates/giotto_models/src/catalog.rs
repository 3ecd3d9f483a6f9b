//! Static catalog of logical model identifiers.

use derive_builder::Builder;
use derive_getters::Getters;
use giotto_core::{CUSTOM_MODEL_ID, GenerationParams};
use serde::Serialize;

/// Identifier resolved when a requested model is absent from the catalog.
pub const DEFAULT_MODEL_ID: &str = "chatbot";

/// Catalog entry mapping a logical model identifier to its upstream path.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct ModelDescriptor {
    /// Logical identifier clients submit
    id: String,
    /// Human-readable name
    label: String,
    /// Path under the upstream's model namespace
    upstream_path: String,
    /// Whether the model is an analysis tool rather than a generator
    #[builder(default)]
    is_tool: bool,
    /// Parameters applied when a request omits its own
    #[builder(default)]
    default_params: GenerationParams,
}

impl ModelDescriptor {
    /// Creates a new builder for `ModelDescriptor`.
    pub fn builder() -> ModelDescriptorBuilder {
        ModelDescriptorBuilder::default()
    }
}

/// Immutable table of model descriptors, built once at startup.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    descriptors: Vec<ModelDescriptor>,
}

impl ModelCatalog {
    /// Build the catalog of supported models.
    pub fn new() -> Self {
        let descriptors = vec![
            entry("deepseek-coder", "DeepSeek Coder", "deepseek-ai/deepseek-coder-6.7b-instruct", false),
            entry("codellama", "CodeLlama 7B", "codellama/CodeLlama-7b-hf", false),
            entry("autocoder", "Replit Code", "replit/replit-code-v1-3b", false),
            entry("codestral-22b", "Codestral 22B", "mistralai/Codestral-22B-v0.1", false),
            entry("codeqwen-7b", "CodeQwen 7B", "Qwen/CodeQwen1.5-7B-Chat", false),
            entry("python-reviewer", "Python Code Reviewer", "elsanns/xwin-lm-7b-python-code-review", true),
            entry("code-review-chains", "Code Reviewer", "microsoft/CodeReviewer", true),
            entry("llama-cpp-agent", "Code Agent", "abacusai/Llama-2-70b-chat-hf", true),
            entry(DEFAULT_MODEL_ID, "Mistral 7B", "mistralai/Mistral-7B-Instruct-v0.2", false),
        ];
        Self { descriptors }
    }

    /// Every descriptor in the catalog.
    pub fn descriptors(&self) -> &[ModelDescriptor] {
        &self.descriptors
    }

    /// Resolve a logical identifier to a descriptor.
    ///
    /// The "custom" identifier takes its upstream path from the caller;
    /// any other identifier missing from the table degrades to the
    /// default descriptor rather than failing the request.
    pub fn resolve(&self, model_id: &str, custom_path: Option<&str>) -> ModelDescriptor {
        if model_id == CUSTOM_MODEL_ID {
            if let Some(path) = custom_path.filter(|p| !p.trim().is_empty()) {
                return entry(CUSTOM_MODEL_ID, "Custom Model", path.trim(), false);
            }
        }
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.id() == model_id)
            .cloned()
            .unwrap_or_else(|| self.default_descriptor())
    }

    fn default_descriptor(&self) -> ModelDescriptor {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.id() == DEFAULT_MODEL_ID)
            .cloned()
            .expect("Catalog contains the default descriptor")
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn entry(id: &str, label: &str, upstream_path: &str, is_tool: bool) -> ModelDescriptor {
    ModelDescriptor::builder()
        .id(id)
        .label(label)
        .upstream_path(upstream_path)
        .is_tool(is_tool)
        .build()
        .expect("Valid ModelDescriptor")
}
