//! Model descriptor and the built-in model table

use serde::{Deserialize, Serialize};

/// Connection parameters for one selectable backend model (Value Object)
///
/// `label` is the human-readable name shown for selection; `credential_key`
/// names the environment variable holding the API key; `endpoint_url` is an
/// OpenAI-compatible base URL; `model_id` is the identifier the endpoint
/// understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub label: String,
    pub credential_key: String,
    pub endpoint_url: String,
    pub model_id: String,
}

impl ModelDescriptor {
    pub fn new(
        label: impl Into<String>,
        credential_key: impl Into<String>,
        endpoint_url: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            credential_key: credential_key.into(),
            endpoint_url: endpoint_url.into(),
            model_id: model_id.into(),
        }
    }

    /// The built-in model pool, in listing order.
    pub fn builtin() -> Vec<ModelDescriptor> {
        vec![
            ModelDescriptor::new(
                "DeepSeek-Chat",
                "DEEPSEEK_API_KEY",
                "https://api.deepseek.com",
                "deepseek-chat",
            ),
            ModelDescriptor::new(
                "Qwen-Plus",
                "DASHSCOPE_API_KEY",
                "https://dashscope.aliyuncs.com/compatible-mode/v1",
                "qwen-plus",
            ),
            ModelDescriptor::new(
                "Qwen-Turbo",
                "DASHSCOPE_API_KEY",
                "https://dashscope.aliyuncs.com/compatible-mode/v1",
                "qwen-turbo",
            ),
            ModelDescriptor::new(
                "Kimi-K2-Turbo-Preview",
                "MOONSHOT_API_KEY",
                "https://api.moonshot.cn/v1",
                "kimi-k2-turbo-preview",
            ),
            ModelDescriptor::new(
                "GLM-4.6",
                "ZHIPU_API_KEY",
                "https://open.bigmodel.cn/api/paas/v4/",
                "glm-4.6",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_labels_are_unique() {
        let table = ModelDescriptor::builtin();
        let mut labels: Vec<_> = table.iter().map(|d| d.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), table.len());
    }

    #[test]
    fn test_qwen_variants_share_a_credential_key() {
        let table = ModelDescriptor::builtin();
        let keys: Vec<_> = table
            .iter()
            .filter(|d| d.label.starts_with("Qwen"))
            .map(|d| d.credential_key.as_str())
            .collect();
        assert_eq!(keys, vec!["DASHSCOPE_API_KEY", "DASHSCOPE_API_KEY"]);
    }
}
