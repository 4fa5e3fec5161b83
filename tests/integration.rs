// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::i18n::fluent::I18n;
use iced_folio::mail::{self, QuoteRequest};
use iced_folio::ui::contact_form::{self, SUBMIT_LATENCY};
use iced_folio::ui::notifications::{notification, Presenter, Severity, Toast};
use iced_folio::ui::theming::ThemeMode;
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        reduce_motion: Some(false),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        reduce_motion: Some(false),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_lang_overrides_config() {
    let config = Config {
        language: Some("fr".to_string()),
        reduce_motion: Some(false),
        theme_mode: ThemeMode::System,
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn both_locales_cover_the_notification_keys() {
    for lang in ["en-US", "fr"] {
        let config = Config {
            language: Some(lang.to_string()),
            reduce_motion: Some(false),
            theme_mode: ThemeMode::System,
        };
        let i18n = I18n::new(None, &config);
        for key in [
            "notification-contact-missing",
            "notification-contact-invalid-email",
            "notification-contact-success",
            "quote-missing-title",
            "copy-manual-title",
        ] {
            assert!(
                !i18n.tr(key).starts_with("MISSING:"),
                "{lang} is missing {key}"
            );
        }
    }
}

#[test]
fn contact_flow_submits_then_clears_and_notifies() {
    let t0 = Instant::now();
    let mut presenter = Presenter::new();
    let mut form = contact_form::State::default();
    form.name = "Sam".into();
    form.email = "sam@example.com".into();
    form.message = "Hello!".into();

    // Submit: the form enters its pending state with no toast yet.
    let event = contact_form::update(&mut form, contact_form::Message::Submit, t0);
    assert!(matches!(event, contact_form::Event::None));
    assert!(form.is_submitting());
    assert!(!presenter.has_toast());

    // The simulated latency elapses and the completion event feeds the
    // presenter, exactly as the update loop wires it.
    let event = contact_form::tick(&mut form, t0 + SUBMIT_LATENCY);
    match event {
        contact_form::Event::Notify {
            severity,
            message_key,
        } => {
            assert_eq!(severity, Severity::Success);
            presenter.notify(Toast::new(severity, message_key, t0 + SUBMIT_LATENCY));
        }
        other => panic!("expected a success notification, got {other:?}"),
    }

    assert!(!form.is_submitting());
    assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    assert_eq!(
        presenter.current().map(|toast| toast.message_key()),
        Some("notification-contact-success")
    );
}

#[test]
fn rejected_submission_emits_exactly_one_error_toast() {
    let t0 = Instant::now();
    let mut presenter = Presenter::new();
    let mut form = contact_form::State::default();

    let event = contact_form::update(&mut form, contact_form::Message::Submit, t0);
    if let contact_form::Event::Notify {
        severity,
        message_key,
    } = event
    {
        presenter.notify(Toast::new(severity, message_key, t0));
    }

    assert!(!form.is_submitting());
    let toast = presenter.current().expect("one toast attached");
    assert_eq!(toast.severity(), Severity::Error);

    // No further tick produces another toast for the same rejection.
    let event = contact_form::tick(&mut form, t0 + SUBMIT_LATENCY);
    assert!(matches!(event, contact_form::Event::None));
}

#[test]
fn overlapping_toasts_resolve_to_the_last_message() {
    let t0 = Instant::now();
    let mut presenter = Presenter::new();

    presenter.notify(Toast::error("notification-contact-missing", t0));
    presenter.notify(Toast::success("notification-contact-success", t0));

    let live = presenter.current().expect("exactly one toast");
    assert_eq!(live.message_key(), "notification-contact-success");

    // The evicted toast's expiry deadline passing changes nothing.
    presenter.tick(t0 + notification::DISPLAY_DURATION / 2);
    assert_eq!(
        presenter.current().map(|toast| toast.message_key()),
        Some("notification-contact-success")
    );
}

#[test]
fn quote_request_round_trips_through_the_mailto_uri() {
    let request = QuoteRequest {
        name: "Jo".into(),
        email: "jo@x.com".into(),
        service: "Web".into(),
        timeline: "2w".into(),
        description: "site".into(),
    };
    let uri = request.to_mailto();

    assert!(uri.starts_with(&format!("mailto:{}?subject=", mail::RECIPIENT)));

    let subject = uri
        .split("subject=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .expect("subject component");
    let decoded = percent_decode(subject);
    assert_eq!(decoded, "Website Development Quote Request - Jo");
}

fn percent_decode(value: &str) -> String {
    let mut bytes = value.bytes();
    let mut out = Vec::new();
    while let Some(byte) = bytes.next() {
        if byte == b'%' {
            let hi = bytes.next().expect("hex digit");
            let lo = bytes.next().expect("hex digit");
            let hex = [hi, lo];
            let hex = std::str::from_utf8(&hex).expect("ascii");
            out.push(u8::from_str_radix(hex, 16).expect("valid escape"));
        } else {
            out.push(byte);
        }
    }
    String::from_utf8(out).expect("valid utf-8")
}
