use sqlpath_config::SqlPathConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SqlPathConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SqlPathConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.manifests.is_configured()
        && env_keys
            .iter()
            .any(|key| key.starts_with("SQLPATH_MANIFESTS") && !key.starts_with("SQLPATH_MANIFESTS__"))
    {
        warnings.push(
            "manifest config appears default while SQLPATH_MANIFESTS* env vars exist. Use double underscores (example: SQLPATH_MANIFESTS__DIR)."
                .to_string(),
        );
    }

    warnings
}
