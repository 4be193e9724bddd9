use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, warn};
use zeroize::Zeroizing;

use crate::error::Result;

/// The default time a copied password stays in the system clipboard.
pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_secs(40);

/// Somewhere a password can be copied to.
pub trait Clipboard {
    fn write_text(&mut self, value: &str) -> Result<()>;
}

/// Plain text access to a clipboard, what clearing a copied password needs.
pub trait ClipboardText {
    fn get_text(&mut self) -> Result<String>;
    fn set_text(&mut self, text: String) -> Result<()>;
}

impl ClipboardText for arboard::Clipboard {
    fn get_text(&mut self) -> Result<String> {
        Ok(arboard::Clipboard::get_text(self)?)
    }

    fn set_text(&mut self, text: String) -> Result<()> {
        Ok(arboard::Clipboard::set_text(self, text)?)
    }
}

/// Empties the clipboard if it still holds `copied`, returns whether it was cleared.
pub fn clear_if_unchanged<C: ClipboardText + ?Sized>(ctx: &mut C, copied: &str) -> Result<bool> {
    let current = Zeroizing::new(ctx.get_text()?);
    if current.as_str() != copied {
        return Ok(false);
    }
    ctx.set_text(String::new())?;
    Ok(true)
}

/// The operating system clipboard.
///
/// The platform handle is kept open after the first copy, on some platforms the contents are
/// lost once it's dropped. When `clear_after` is set, a background thread empties the
/// clipboard after that delay, but only if it still holds the copied password.
#[derive(Default)]
pub struct SystemClipboard {
    clear_after: Option<Duration>,
    ctx: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("clear_after", &self.clear_after)
            .field("open", &self.ctx.is_some())
            .finish()
    }
}

impl SystemClipboard {
    pub fn new(clear_after: Option<Duration>) -> Self {
        SystemClipboard {
            clear_after,
            ctx: None,
        }
    }

    pub fn clear_after(&self) -> Option<Duration> {
        self.clear_after
    }

    /// Starts the thread that clears `value` from the clipboard, if clearing is enabled.
    pub fn schedule_clear(&self, value: &str) -> Option<JoinHandle<()>> {
        self.clear_after
            .map(|delay| clear_later(delay, Zeroizing::new(value.to_owned())))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, value: &str) -> Result<()> {
        if self.ctx.is_none() {
            self.ctx = Some(arboard::Clipboard::new()?);
        }
        if let Some(ctx) = &mut self.ctx {
            ctx.set_text(value.to_owned())?;
        }

        self.schedule_clear(value);

        Ok(())
    }
}

fn clear_later(delay: Duration, copied: Zeroizing<String>) -> JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(delay);
        let res = arboard::Clipboard::new()
            .map_err(Into::into)
            .and_then(|mut ctx| clear_if_unchanged(&mut ctx, &copied));

        match res {
            Ok(true) => debug!("cleared copied password from clipboard"),
            Ok(false) => debug!("clipboard changed since copy, leaving it alone"),
            Err(err) => warn!("unable to clear clipboard: {err}"),
        }
    })
}

#[cfg(test)]
#[path = "tests/clipboard.rs"]
mod clipboard_tests;
