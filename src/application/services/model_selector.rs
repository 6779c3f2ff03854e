use crate::application::ports::LlmClient;

const FAST_TIER_MARKER: &str = "flash";
const CAPABLE_TIER_MARKER: &str = "pro";
const MODEL_NAME_PREFIX: &str = "models/";

/// Picks the model to use as primary: the first generation-capable model of
/// the fast tier, else the last of the high-capability tier, else `default_model`.
/// The fallback model is never picked, so a failed primary always has
/// somewhere else to go. Listing failures fall back to `default_model`.
pub async fn select_model<L>(llm_client: &L, default_model: &str, fallback_model: &str) -> String
where
    L: LlmClient + ?Sized,
{
    let models = match llm_client.list_models().await {
        Ok(models) => models,
        Err(e) => {
            tracing::warn!(error = %e, default_model, "Model listing failed, using default");
            return default_model.to_string();
        }
    };

    let mut capable = None;
    for model in models.iter().filter(|m| m.supports_generation) {
        if same_model(&model.name, fallback_model) {
            tracing::debug!(model = %model.name, "Skipping fallback model");
            continue;
        }
        if model.name.contains(FAST_TIER_MARKER) {
            tracing::info!(model = %model.name, "Selected fast-tier model");
            return model.name.clone();
        }
        if model.name.contains(CAPABLE_TIER_MARKER) {
            capable = Some(model.name.clone());
        }
    }

    let selected = capable.unwrap_or_else(|| default_model.to_string());
    if same_model(&selected, fallback_model) {
        tracing::warn!(model = %selected, "Primary and fallback models are the same");
    }
    tracing::info!(model = %selected, "Selected model");
    selected
}

/// Listings and configuration disagree on the `models/` prefix.
fn same_model(a: &str, b: &str) -> bool {
    a.trim_start_matches(MODEL_NAME_PREFIX) == b.trim_start_matches(MODEL_NAME_PREFIX)
}
