//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::domain::recording::Duration;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "duration" => config.duration = Some(value.to_string()),
        "sample_rate" => {
            config.sample_rate =
                Some(value.parse().map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a sample rate in Hz".to_string(),
                })?)
        }
        "notes_dir" => config.notes_dir = Some(value.to_string()),
        "assume_yes" => {
            config.assume_yes =
                Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be 'true' or 'false'".to_string(),
                })?)
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "duration" => config.duration,
        "sample_rate" => config.sample_rate.map(|v| v.to_string()),
        "notes_dir" => config.notes_dir,
        "assume_yes" => config.assume_yes.map(|b| b.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.info(&format!("{} is not set", key)),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "duration",
        config.duration.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "sample_rate",
        &config
            .sample_rate
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "notes_dir",
        config.notes_dir.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "assume_yes",
        &config
            .assume_yes
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a value before it is written
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "duration" => {
            value
                .parse::<Duration>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "sample_rate" => {
            let rate: u32 = value.parse().map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be a sample rate in Hz".to_string(),
            })?;
            if rate == 0 {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Sample rate must be greater than zero".to_string(),
                });
            }
        }
        "notes_dir" => {
            if value.is_empty() || value.contains(['/', '\\']) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a plain directory name".to_string(),
                });
            }
        }
        "assume_yes" => {
            parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
        }
        _ => {}
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    fn store_in(dir: &tempfile::TempDir) -> XdgConfigStore {
        XdgConfigStore::with_path(dir.path().join("config.toml"))
    }

    #[tokio::test]
    async fn set_and_get_duration() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "duration".to_string(),
                value: "30s".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.duration, Some("30s".to_string()));
    }

    #[tokio::test]
    async fn set_rejects_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let presenter = Presenter::new();

        let err = handle_config_command(
            ConfigAction::Set {
                key: "bogus".to_string(),
                value: "1".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn set_rejects_invalid_duration() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let presenter = Presenter::new();

        let err = handle_config_command(
            ConfigAction::Set {
                key: "duration".to_string(),
                value: "banana".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn set_rejects_zero_sample_rate() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let presenter = Presenter::new();

        let err = handle_config_command(
            ConfigAction::Set {
                key: "sample_rate".to_string(),
                value: "0".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn set_rejects_nested_notes_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let presenter = Presenter::new();

        let err = handle_config_command(
            ConfigAction::Set {
                key: "notes_dir".to_string(),
                value: "a/b".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
