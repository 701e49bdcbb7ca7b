use super::{
    AutoSpeak, CenterMode, FALLBACK_LANGUAGE, SettingsRecord, ZenMode, coerce_seed, locale,
};

#[test]
fn static_defaults() {
    let record = SettingsRecord::default();

    assert_eq!(record.preferred_language, FALLBACK_LANGUAGE);
    assert_eq!(record.center_mode, CenterMode::Wide);
    assert!(!record.render_markdown);
    assert!(!record.show_purpose_finder);
    assert!(!record.show_system_messages);
    assert_eq!(record.zen_mode, ZenMode::Clean);

    assert_eq!(record.api_key, "");
    assert_eq!(record.api_host, "");
    assert_eq!(record.api_organization_id, "");
    assert_eq!(record.model_temperature, 0.5);
    assert_eq!(record.model_max_response_tokens, 1024);

    assert_eq!(record.eleven_labs_api_key, "");
    assert_eq!(record.eleven_labs_voice_id, "");
    assert_eq!(record.eleven_labs_auto_speak, AutoSpeak::FirstLine);

    assert_eq!(record.prodia_api_key, "");
    assert_eq!(record.prodia_model_id, "");
    assert_eq!(record.prodia_negative_prompt, "");
    assert_eq!(record.prodia_steps, 25);
    assert_eq!(record.prodia_cfg_scale, 7.0);
    assert_eq!(record.prodia_seed, None);

    assert_eq!(record.google_api_key, "");
    assert_eq!(record.cse_id, "");
}

#[test]
fn initial_applies_locale_and_legacy_tiers() {
    let record = SettingsRecord::initial(
        Some("de-DE".to_string()),
        Some("sk-legacy".to_string()),
    );

    assert_eq!(record.preferred_language, "de-DE");
    assert_eq!(record.api_key, "sk-legacy");
    // Everything else stays static
    assert_eq!(record.center_mode, CenterMode::Wide);
    assert_eq!(record.prodia_steps, 25);
}

#[test]
fn initial_falls_back_to_static_defaults() {
    let record = SettingsRecord::initial(None, None);
    assert_eq!(record, SettingsRecord::default());
}

#[test]
fn seed_coercion_table() {
    assert_eq!(coerce_seed(""), None);
    assert_eq!(coerce_seed("-1"), None);
    assert_eq!(coerce_seed("42"), Some(42));
    assert_eq!(coerce_seed("abc"), None);
    assert_eq!(coerce_seed("  7 "), Some(7));
    assert_eq!(coerce_seed("4.2"), None);
    assert_eq!(coerce_seed("-2"), Some(-2));
}

#[test]
fn locale_normalization_table() {
    assert_eq!(locale::normalize("en_US.UTF-8"), Some("en-US".to_string()));
    assert_eq!(locale::normalize("de_DE@euro"), Some("de-DE".to_string()));
    assert_eq!(locale::normalize("fr-FR"), Some("fr-FR".to_string()));
    assert_eq!(locale::normalize("ja_JP"), Some("ja-JP".to_string()));
    assert_eq!(locale::normalize("C"), None);
    assert_eq!(locale::normalize("C.UTF-8"), None);
    assert_eq!(locale::normalize("POSIX"), None);
    assert_eq!(locale::normalize(""), None);
}

#[test]
fn enums_serialize_to_persisted_literals() {
    assert_eq!(
        serde_json::to_string(&CenterMode::Narrow).unwrap(),
        "\"narrow\""
    );
    assert_eq!(serde_json::to_string(&CenterMode::Wide).unwrap(), "\"wide\"");
    assert_eq!(serde_json::to_string(&CenterMode::Full).unwrap(), "\"full\"");
    assert_eq!(serde_json::to_string(&ZenMode::Clean).unwrap(), "\"clean\"");
    assert_eq!(
        serde_json::to_string(&ZenMode::Cleaner).unwrap(),
        "\"cleaner\""
    );
    assert_eq!(serde_json::to_string(&AutoSpeak::Off).unwrap(), "\"off\"");
    assert_eq!(
        serde_json::to_string(&AutoSpeak::FirstLine).unwrap(),
        "\"firstLine\""
    );
}

#[test]
fn record_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(SettingsRecord::default()).unwrap();
    let map = value.as_object().unwrap();

    for key in [
        "preferredLanguage",
        "centerMode",
        "renderMarkdown",
        "showPurposeFinder",
        "showSystemMessages",
        "zenMode",
        "apiKey",
        "apiHost",
        "apiOrganizationId",
        "modelTemperature",
        "modelMaxResponseTokens",
        "elevenLabsApiKey",
        "elevenLabsVoiceId",
        "elevenLabsAutoSpeak",
        "prodiaApiKey",
        "prodiaModelId",
        "prodiaNegativePrompt",
        "prodiaSteps",
        "prodiaCfgScale",
        "prodiaSeed",
        "googleApiKey",
        "cseId",
    ] {
        assert!(map.contains_key(key), "missing persisted key {key}");
    }
}

#[test]
fn partial_snapshot_fills_missing_fields_with_defaults() {
    let record: SettingsRecord =
        serde_json::from_str(r#"{"centerMode": "full", "prodiaSteps": 50}"#).unwrap();

    assert_eq!(record.center_mode, CenterMode::Full);
    assert_eq!(record.prodia_steps, 50);
    assert_eq!(record.preferred_language, FALLBACK_LANGUAGE);
    assert_eq!(record.model_max_response_tokens, 1024);
}
