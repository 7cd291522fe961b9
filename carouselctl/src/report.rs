use carousel_config::CarouselOptionsSource;
use carousel_core::CarouselOptions;
use serde_json::{Value, json};

/// JSON view of loaded options: where they came from, the raw values and
/// what they normalize to.
pub fn options_report(
    options: CarouselOptions,
    source: &CarouselOptionsSource,
) -> anyhow::Result<Value> {
    let raw = serde_json::to_value(&options)?;
    let (config, _) = options.normalize()?;
    Ok(json!({
        "source": source.to_string(),
        "options": raw,
        "resolved": config,
    }))
}
