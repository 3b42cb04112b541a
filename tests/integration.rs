// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_toasts::config::{
    self, Config, NotificationsConfig, VerificationConfig, CONFIG_LOAD_WARNING,
};
use iced_toasts::toast::ToastSettings;
use iced_toasts::verification::ResendCooldown;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn saved_settings_drive_toast_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        notifications: NotificationsConfig {
            duration_ms: Some(5000),
            margin: Some(6.0),
            base_offset: Some(24.0),
            enter_delay_ms: Some(50),
            exit_transition_ms: Some(250),
        },
        verification: VerificationConfig::default(),
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let settings = ToastSettings::from(&loaded.notifications);
    assert_eq!(settings.default_duration, Duration::from_secs(5));
    assert_eq!(settings.enter_delay, Duration::from_millis(50));
    assert_eq!(settings.exit_transition, Duration::from_millis(250));
    assert_abs_diff_eq!(settings.margin, 6.0);
    assert_abs_diff_eq!(settings.base_offset, 24.0);
}

#[test]
fn corrupt_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "duration_ms = = 3").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
}

#[test]
fn verification_cooldowns_come_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[verification]\nresend_cooldown_secs = 30\nfailed_verification_cooldown_secs = 3\n",
    )
    .expect("write");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let total = loaded.verification.resend_cooldown_secs();
    let mut cooldown = ResendCooldown::with_initial(
        total,
        loaded.verification.failed_verification_cooldown_secs(),
    );

    assert_eq!(total, 30);
    for _ in 0..2 {
        assert!(!cooldown.tick());
    }
    assert!(cooldown.tick());
    cooldown.restart();
    assert_eq!(cooldown.remaining(), 30);
}
