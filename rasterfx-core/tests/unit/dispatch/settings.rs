use super::*;

#[test]
fn empty_document_yields_defaults() {
    let s = FilterSettings::from_json("{}").unwrap();
    assert_eq!(s, FilterSettings::default());
    assert_eq!(s.channel_policy, ChannelPolicy::Clamp);
    assert!(!s.parallel);
    assert_eq!(s.threads, None);
}

#[test]
fn fields_are_read() {
    let s = FilterSettings::from_json(
        r#"{ "channel_policy": "wrap", "parallel": true, "threads": 2 }"#,
    )
    .unwrap();
    assert_eq!(s.channel_policy, ChannelPolicy::Wrap);
    assert!(s.parallel);
    assert_eq!(s.threads, Some(2));
}

#[test]
fn invalid_documents_are_settings_errors() {
    for doc in [
        r#"{ "threads": 0 }"#,
        r#"{ "channel_policy": "saturate" }"#,
        r#"{ "paralel": true }"#,
        "not json",
    ] {
        let err = FilterSettings::from_json(doc).unwrap_err();
        assert!(matches!(err, RasterFxError::Settings(_)), "{doc} -> {err}");
    }
}

#[test]
fn missing_file_is_wrapped_with_path() {
    let err = FilterSettings::from_path(Path::new("target/does-not-exist/settings.json"))
        .unwrap_err();
    assert!(matches!(err, RasterFxError::Other(_)));
    assert!(err.to_string().contains("settings.json"));
}
