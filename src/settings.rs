use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;

use crate::{
    clipboard::DEFAULT_CLEAR_AFTER,
    error::{Error, Result},
    password_generator::{self, Configuration},
};

/// Everything that can be set in the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub generator: Configuration,
    /// How long a copied password stays in the clipboard, `None` keeps it there.
    pub clear_clipboard_after: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            generator: Configuration::default(),
            clear_clipboard_after: Some(DEFAULT_CLEAR_AFTER),
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

fn xdg_config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Resolves where the settings file lives, `$XDG_CONFIG_HOME/passgen/settings.toml` or
/// `$HOME/.config/passgen/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_home = match xdg_config_home {
        Some(p) => p.clone(),
        None => match home {
            Some(h) => h.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };

    Ok(config_home.join("passgen").join("settings.toml"))
}

fn defaults(settings: &mut config::Config) -> Result<()> {
    let default = Settings::default();
    settings.set_default("generator.length", default.generator.length as i64)?;
    settings.set_default("generator.uppercase", default.generator.use_upper)?;
    settings.set_default("generator.lowercase", default.generator.use_lower)?;
    settings.set_default("generator.digits", default.generator.use_digits)?;
    settings.set_default("generator.special", default.generator.use_special)?;
    settings.set_default(
        "clipboard.clear_after_seconds",
        DEFAULT_CLEAR_AFTER.as_secs() as i64,
    )?;
    Ok(())
}

fn from_config(settings: &config::Config) -> Result<Settings> {
    let length = settings.get_int("generator.length")?;
    if length <= 0 {
        return Err(Error::InvalidLength(length));
    }

    let clear_after = settings.get_int("clipboard.clear_after_seconds")?;
    let clear_clipboard_after = if clear_after > 0 {
        Some(Duration::from_secs(clear_after as u64))
    } else {
        None
    };

    Ok(Settings {
        generator: Configuration {
            length: password_generator::clamp_length(length),
            use_upper: settings.get_bool("generator.uppercase")?,
            use_lower: settings.get_bool("generator.lowercase")?,
            use_digits: settings.get_bool("generator.digits")?,
            use_special: settings.get_bool("generator.special")?,
        },
        clear_clipboard_after,
    })
}

/// Reads the settings, layering the built in defaults, the settings file and `PASSGEN_`
/// environment variables. Returns the settings and the path of the settings file.
pub fn read_config(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<(Settings, PathBuf)> {
    let config_file = xdg_config_file_location(home, xdg_config_home)?;

    let mut settings = config::Config::default();
    defaults(&mut settings)?;
    settings.merge(config::File::from(config_file.clone()).required(false))?;
    settings.merge(config::Environment::with_prefix("PASSGEN").separator("__"))?;

    debug!("read settings from {}", config_file.display());

    Ok((from_config(&settings)?, config_file))
}

/// Reads the settings of the current user.
pub fn read_user_config() -> Result<(Settings, PathBuf)> {
    read_config(&home_dir(), &xdg_config_home())
}

/// Writes `settings` to `config_file`, creating the directory if needed.
pub fn save_config(config_file: &Path, settings: &Settings) -> Result<()> {
    let mut generator = toml::value::Table::new();
    generator.insert(
        "length".to_owned(),
        toml::Value::Integer(settings.generator.length as i64),
    );
    generator.insert(
        "uppercase".to_owned(),
        toml::Value::Boolean(settings.generator.use_upper),
    );
    generator.insert(
        "lowercase".to_owned(),
        toml::Value::Boolean(settings.generator.use_lower),
    );
    generator.insert(
        "digits".to_owned(),
        toml::Value::Boolean(settings.generator.use_digits),
    );
    generator.insert(
        "special".to_owned(),
        toml::Value::Boolean(settings.generator.use_special),
    );

    let mut clipboard = toml::value::Table::new();
    clipboard.insert(
        "clear_after_seconds".to_owned(),
        toml::Value::Integer(
            settings
                .clear_clipboard_after
                .map_or(0, |d| d.as_secs() as i64),
        ),
    );

    let mut root = toml::value::Table::new();
    root.insert("generator".to_owned(), toml::Value::Table(generator));
    root.insert("clipboard".to_owned(), toml::Value::Table(clipboard));

    let content = toml::to_string_pretty(&toml::Value::Table(root))?;

    if let Some(parent) = config_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_file, content)?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
