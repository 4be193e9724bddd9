use std::process;

use clap::Parser;
use passgen::{
    clipboard::SystemClipboard,
    notify::{Level, Notification, Notifier},
    password_generator::CharClass,
    session::Session,
    settings,
};

/// Generate random passwords from the command line.
///
/// Defaults are read from the passgen settings file.
#[derive(Parser, Debug)]
#[command(name = "passgen", version, about)]
struct Args {
    /// Password length, clamped to 4..=20
    #[arg(short, long)]
    length: Option<i64>,

    /// Don't use uppercase letters
    #[arg(long)]
    no_upper: bool,

    /// Don't use lowercase letters
    #[arg(long)]
    no_lower: bool,

    /// Don't use digits
    #[arg(long)]
    no_digits: bool,

    /// Don't use special characters
    #[arg(long)]
    no_special: bool,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Copy the last generated password to the clipboard
    #[arg(long)]
    copy: bool,
}

/// Prints errors to stderr, everything else goes to the log.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            Level::Error => eprintln!("{}", notification.message),
            Level::Success | Level::Info => log::info!("{}", notification.message),
        }
    }
}

/// The text to print when copying failed, `None` when the notifier already reported it.
fn copy_failure(err: &passgen::Error) -> Option<String> {
    match err {
        // request_copy stays quiet about a missing password
        passgen::Error::NoPassword => Some(format!("Nothing to copy: {err}")),
        _ => None,
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let settings = match settings::read_user_config() {
        Ok((settings, _)) => settings,
        Err(err) => {
            eprintln!("Error reading settings: {err}");
            process::exit(1);
        }
    };

    let mut session = Session::new(settings.generator.clone());
    if let Some(length) = args.length {
        if length <= 0 {
            eprintln!("{}", passgen::Error::InvalidLength(length));
            process::exit(1);
        }
        session.set_length(length);
    }
    for (disabled, class) in [
        (args.no_upper, CharClass::Upper),
        (args.no_lower, CharClass::Lower),
        (args.no_digits, CharClass::Digits),
        (args.no_special, CharClass::Special),
    ] {
        if disabled {
            session.set_class(class, false);
        }
    }

    let mut notifier = StderrNotifier;
    let mut rng = rand::thread_rng();
    for _ in 0..args.count {
        match session.request_generate(&mut rng, &mut notifier) {
            Ok(password) => println!("{}", password.as_str()),
            Err(_) => process::exit(1),
        }
    }

    if args.copy {
        let mut clipboard = SystemClipboard::new(settings.clear_clipboard_after);
        if let Err(err) = session.request_copy(&mut clipboard, &mut notifier) {
            if let Some(message) = copy_failure(&err) {
                eprintln!("{message}");
            }
            process::exit(1);
        }
        // the clipboard contents and the clearing thread die with the process
        if let Some(delay) = clipboard.clear_after() {
            eprintln!("Copied to clipboard, clearing in {} seconds", delay.as_secs());
            std::thread::sleep(delay);
        }
    }
}
