pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Environment variable holding the API key; empty when none is needed.
    pub env_var: &'static str,
    pub base_url: &'static str,
    pub models: &'static [ModelInfo],
}

pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub recommended: bool,
}

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "openai",
        name: "OpenAI",
        env_var: "OPENAI_API_KEY",
        base_url: "https://api.openai.com/v1",
        models: &[
            ModelInfo { id: "gpt-4", label: "GPT-4", recommended: true },
            ModelInfo { id: "gpt-4o", label: "GPT-4o", recommended: false },
            ModelInfo { id: "gpt-4o-mini", label: "GPT-4o Mini", recommended: false },
            ModelInfo { id: "gpt-3.5-turbo", label: "GPT-3.5 Turbo", recommended: false },
        ],
    },
    ProviderInfo {
        id: "local",
        name: "Local / Ollama",
        env_var: "",
        base_url: "http://localhost:11434/v1",
        models: &[
            ModelInfo { id: "qwen2.5-coder:1.5b", label: "Qwen 2.5 Coder 1.5B", recommended: true },
        ],
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

pub fn get_default_model(provider_id: &str) -> &'static str {
    if let Some(provider) = get_provider(provider_id) {
        provider.models.iter()
            .find(|m| m.recommended)
            .map(|m| m.id)
            .unwrap_or(provider.models[0].id)
    } else {
        "gpt-4"
    }
}
