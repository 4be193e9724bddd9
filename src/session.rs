use log::{info, warn};

use crate::{
    clipboard::Clipboard,
    error::{Error, Result},
    notify::Notifier,
    password_generator::{self, CharClass, Configuration, GeneratedPassword, RandomIndex},
};

pub const GENERATED_MESSAGE: &str = "Password generated successfully!";
pub const COPIED_MESSAGE: &str = "Password copied to clipboard!";

/// Copies `current` to the clipboard.
///
/// Fails with `Error::NoPassword` without touching the clipboard when nothing has been generated.
pub fn copy<C: Clipboard + ?Sized>(
    current: Option<&GeneratedPassword>,
    clipboard: &mut C,
) -> Result<()> {
    let password = current.ok_or(Error::NoPassword)?;
    clipboard.write_text(password.as_str())
}

/// The state of one running generator frontend.
#[derive(Debug, Default)]
pub struct Session {
    config: Configuration,
    password: Option<GeneratedPassword>,
}

impl Session {
    pub fn new(config: Configuration) -> Session {
        Session {
            config,
            password: None,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// The most recently generated password, if any.
    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    /// Sets the password length, clamped to the range the frontends allow.
    pub fn set_length(&mut self, length: i64) -> usize {
        self.config.length = password_generator::clamp_length(length);
        self.config.length
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        self.config.set_enabled(class, enabled);
    }

    /// Flips a class toggle and returns the new state.
    pub fn toggle_class(&mut self, class: CharClass) -> bool {
        let enabled = !self.config.is_enabled(class);
        self.config.set_enabled(class, enabled);
        enabled
    }

    /// Generates a new password from the current configuration and stores it.
    ///
    /// On failure the previous password is kept and an error notification is emitted.
    pub fn request_generate<R, N>(
        &mut self,
        rng: &mut R,
        notifier: &mut N,
    ) -> Result<&GeneratedPassword>
    where
        R: RandomIndex + ?Sized,
        N: Notifier + ?Sized,
    {
        match password_generator::generate(&self.config, rng) {
            Ok(password) => {
                notifier.success(GENERATED_MESSAGE);
                Ok(&*self.password.insert(password))
            }
            Err(err) => {
                notifier.error(&format!("{err}"));
                Err(err)
            }
        }
    }

    /// Copies the current password to `clipboard`.
    ///
    /// Without a generated password this is a silent no-op returning `Error::NoPassword`.
    pub fn request_copy<C, N>(&self, clipboard: &mut C, notifier: &mut N) -> Result<()>
    where
        C: Clipboard + ?Sized,
        N: Notifier + ?Sized,
    {
        match copy(self.password.as_ref(), clipboard) {
            Ok(()) => {
                info!("copied password to clipboard");
                notifier.info(COPIED_MESSAGE);
                Ok(())
            }
            Err(Error::NoPassword) => Err(Error::NoPassword),
            Err(err) => {
                warn!("clipboard write failed: {err}");
                notifier.error(&format!("Failed to copy password to clipboard: {err}"));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod session_tests;
