/*!
 * Unit tests for configuration loading and validation.
 */

use std::str::FromStr;

use babelgate::app_config::{Config, GlossaryStrategy};

use crate::common;

#[test]
fn test_configFromFile_validJson_shouldLoadOverrides() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{
            "openai": { "api_key": "sk-test", "text_model": "gpt-4.1-mini" },
            "translation": { "glossary_strategy": "substitute_then_translate" }
        }"#,
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();

    assert_eq!(config.openai.api_key, "sk-test");
    assert_eq!(config.openai.text_model, "gpt-4.1-mini");
    assert_eq!(
        config.translation.glossary_strategy,
        GlossaryStrategy::SubstituteThenTranslate
    );
    // Untouched sections keep their defaults
    assert_eq!(config.translation.max_chunk_chars, 10_000);
    assert_eq!(config.rekognition.region, "us-east-1");
}

#[test]
fn test_configFromFile_malformedJson_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        "{ not json",
    )
    .unwrap();

    assert!(Config::from_file(&config_path).is_err());
}

#[test]
fn test_configValidate_zeroChunkBudget_shouldFail() {
    let mut config = Config::default();
    config.translation.max_chunk_chars = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_configValidate_outOfRangeTemperature_shouldFail() {
    let mut config = Config::default();
    config.translation.temperature = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_glossaryStrategy_displayParse_shouldRoundTrip() {
    for strategy in [
        GlossaryStrategy::ChunkedGlossary,
        GlossaryStrategy::SubstituteThenTranslate,
    ] {
        let parsed = GlossaryStrategy::from_str(&strategy.to_string()).unwrap();
        assert_eq!(parsed, strategy);
    }
}

#[test]
fn test_configSerialize_shouldRoundTripThroughJson() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let reloaded: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded.openai.vision_model, config.openai.vision_model);
    assert_eq!(reloaded.anthropic.model, config.anthropic.model);
    assert_eq!(
        reloaded.translation.glossary_strategy,
        config.translation.glossary_strategy
    );
}
