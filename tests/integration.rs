// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config, ToastConfig};
use iced_toast::error::UsageError;
use iced_toast::i18n::I18n;
use iced_toast::locale_patch::{self, REQUIRED_ACTION_KEYS};
use iced_toast::ui::toast::{Category, Effect, Phase, ToastMessage, ToastProvider, ToastRequest};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn phase(provider: &ToastProvider) -> Phase {
    provider
        .controller()
        .map(|controller| controller.phase())
        .unwrap_or_default()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}

#[test]
fn toast_timings_come_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    fs::write(
        &config_path,
        "[toast]\ndefault_duration_ms = 1000\ntransition_ms = 100\n",
    )
    .expect("Failed to write config");

    let config = config::load_from_path(&config_path).expect("Failed to load config");
    let mut provider = ToastProvider::new(&config.toast);
    let dispatcher = provider.dispatcher();

    dispatcher.success("Saved").expect("provider alive");
    assert_eq!(provider.state().request().duration(), ms(1000));

    let t0 = Instant::now();
    provider.sync(t0);
    provider.sync(t0 + ms(100));
    assert_eq!(phase(&provider), Phase::Visible);

    provider.sync(t0 + ms(1000));
    assert_eq!(phase(&provider), Phase::Exiting);
    assert_eq!(provider.sync(t0 + ms(1100)), Some(Effect::Hidden));
}

#[test]
fn full_lifecycle_emits_hidden_exactly_once() {
    let mut provider = ToastProvider::default();
    let dispatcher = provider.dispatcher();
    let t0 = Instant::now();

    dispatcher
        .show_toast(ToastRequest::new("Voice updated").with_category(Category::Success))
        .expect("provider alive");
    let state = dispatcher.state().expect("provider alive");
    assert!(state.is_requested());
    assert_eq!(state.request().message(), "Voice updated");
    assert_eq!(state.request().duration(), ms(3000));

    let mut effects = Vec::new();
    for step in (0..=4000).step_by(16) {
        effects.extend(provider.handle_message(&ToastMessage::Frame(t0 + ms(step)), t0 + ms(step)));
    }

    assert_eq!(effects, vec![Effect::Hidden]);
    assert_eq!(phase(&provider), Phase::Hidden);
    let state = provider.state();
    assert!(!state.is_requested());
    assert!(!state.is_rendered());
}

#[test]
fn close_tap_cancels_auto_dismiss() {
    let mut provider = ToastProvider::default();
    let dispatcher = provider.dispatcher();
    let t0 = Instant::now();

    dispatcher.error("Error selecting voice").expect("provider alive");
    provider.sync(t0);
    provider.handle_message(&ToastMessage::Close, t0 + ms(500));
    assert!(!provider.controller().is_some_and(|c| c.has_pending_timer()));

    assert_eq!(provider.sync(t0 + ms(800)), Some(Effect::Hidden));
    for step in [3000, 3500, 10_000] {
        assert_eq!(provider.sync(t0 + ms(step)), None);
    }
}

#[test]
fn hide_when_idle_is_a_no_op() {
    let mut provider = ToastProvider::default();
    let dispatcher = provider.dispatcher();

    dispatcher.hide_toast().expect("provider alive");
    dispatcher.hide_toast().expect("provider alive");

    assert_eq!(provider.sync(Instant::now()), None);
    assert_eq!(phase(&provider), Phase::Hidden);
}

#[test]
fn request_during_exit_is_shown_afterwards() {
    let mut provider = ToastProvider::default();
    let dispatcher = provider.dispatcher();
    let t0 = Instant::now();

    dispatcher.info("first").expect("provider alive");
    provider.sync(t0);
    dispatcher.hide_toast().expect("provider alive");
    provider.sync(t0 + ms(400));
    assert_eq!(phase(&provider), Phase::Exiting);

    dispatcher.info("second").expect("provider alive");
    assert_eq!(provider.sync(t0 + ms(700)), Some(Effect::Hidden));
    assert_eq!(phase(&provider), Phase::Entering);
    assert_eq!(
        provider.controller().and_then(|c| c.request()).map(|r| r.message()),
        Some("second")
    );
}

#[test]
fn dropping_provider_detaches_dispatchers() {
    let provider = ToastProvider::new(&ToastConfig::default());
    let dispatcher = provider.dispatcher();
    dispatcher.success("ok").expect("provider alive");

    drop(provider);

    assert_eq!(dispatcher.success("late"), Err(UsageError::ProviderDropped));
    assert_eq!(dispatcher.hide_toast(), Err(UsageError::ProviderDropped));
}

#[test]
fn unmount_with_pending_timer_is_silent() {
    let mut provider = ToastProvider::default();
    let dispatcher = provider.dispatcher();
    let t0 = Instant::now();

    dispatcher.success("bye").expect("provider alive");
    provider.sync(t0);
    provider.unmount();

    for step in [3000, 3300, 5000] {
        assert_eq!(provider.sync(t0 + ms(step)), None);
    }
    assert!(!provider.state().is_rendered());
}

fn copy_dir(from: &Path, to: &Path) {
    for entry in fs::read_dir(from).expect("readable dir") {
        let path = entry.expect("dir entry").path();
        if let Some(name) = path.file_name() {
            fs::copy(&path, to.join(name)).expect("copy locale");
        }
    }
}

#[test]
fn bundled_locales_are_already_complete() {
    let dir = tempdir().expect("Failed to create temporary directory");
    copy_dir(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/locales"),
        dir.path(),
    );

    let report = locale_patch::patch_directory(dir.path(), false).expect("listable dir");

    assert!(report.scanned >= 3);
    assert_eq!(report.updated, 0);
    assert_eq!(report.failed, 0);
}

#[test]
fn patch_run_over_mixed_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let es = dir.path().join("es.json");
    let broken = dir.path().join("broken.json");
    let empty = dir.path().join("de.json");
    fs::write(&es, r#"{"voice": {"actions": {"success": "Ya existe"}}}"#).unwrap();
    fs::write(&broken, r#"{"voice": "#).unwrap();
    fs::write(&empty, "{}").unwrap();

    let first = locale_patch::patch_directory(dir.path(), false).expect("listable dir");
    assert_eq!(first.scanned, 3);
    assert_eq!(first.updated, 2);
    assert_eq!(first.failed, 1);

    let patched: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&es).unwrap()).unwrap();
    assert_eq!(patched["voice"]["actions"]["success"], "Ya existe");
    for (key, text) in REQUIRED_ACTION_KEYS.iter().skip(1) {
        assert_eq!(patched["voice"]["actions"][*key], *text);
    }
    assert_eq!(fs::read_to_string(&broken).unwrap(), r#"{"voice": "#);

    let snapshot = fs::read(&es).unwrap();
    let second = locale_patch::patch_directory(dir.path(), false).expect("listable dir");
    assert_eq!(second.updated, 0);
    assert_eq!(second.unchanged, 2);
    assert_eq!(fs::read(&es).unwrap(), snapshot);
}
