/*  Passgen - a simple password generator
    Copyright (C) 2019 Joakim Lundborg, Alexander Kjäll

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{
    path::PathBuf,
    process,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use cursive::{
    event::{Event, Key},
    menu::MenuTree,
    traits::*,
    views::{
        Button, Checkbox, Dialog, DummyView, HideableView, LinearLayout, SliderView, TextView,
    },
    Cursive,
};
use passgen::{
    clipboard::{Clipboard, SystemClipboard},
    password_generator::{CharClass, MAX_LENGTH, MIN_LENGTH},
    session::Session,
    settings::{self, Settings},
};

mod helpers;

/// Everything the frontend callbacks share.
pub struct App {
    session: Session,
    clipboard: Box<dyn Clipboard>,
    clear_clipboard_after: Option<Duration>,
    settings_path: Option<PathBuf>,
}

impl App {
    pub fn new(
        session: Session,
        clipboard: Box<dyn Clipboard>,
        clear_clipboard_after: Option<Duration>,
        settings_path: Option<PathBuf>,
    ) -> App {
        App {
            session,
            clipboard,
            clear_clipboard_after,
            settings_path,
        }
    }
}

pub type AppType = Arc<Mutex<App>>;

fn lock(app: &AppType) -> passgen::Result<MutexGuard<'_, App>> {
    Ok(app.lock()?)
}

fn checkbox_name(class: CharClass) -> &'static str {
    match class {
        CharClass::Upper => "use_upper",
        CharClass::Lower => "use_lower",
        CharClass::Digits => "use_digits",
        CharClass::Special => "use_special",
    }
}

fn length_changed(ui: &mut Cursive, app: &AppType, position: usize) {
    let length = match lock(app) {
        Ok(mut app) => app.session.set_length((position + MIN_LENGTH) as i64),
        Err(err) => return helpers::errorbox(ui, &err),
    };

    ui.call_on_name("length_value", |l: &mut TextView| {
        l.set_content(format!("{length}"));
    });
}

fn class_changed(ui: &mut Cursive, app: &AppType, class: CharClass, checked: bool) {
    match lock(app) {
        Ok(mut app) => app.session.set_class(class, checked),
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn generate(ui: &mut Cursive, app: &AppType) {
    let mut app = match lock(app) {
        Ok(app) => app,
        Err(err) => return helpers::errorbox(ui, &err),
    };

    let mut notifier = helpers::UiNotifier::new(ui);
    let password = app
        .session
        .request_generate(&mut rand::thread_rng(), &mut notifier)
        .map(|p| p.as_str().to_owned());
    drop(app);

    if let Ok(password) = password {
        // the row stays hidden until there's something to copy
        ui.call_on_name("password_row", |l: &mut HideableView<LinearLayout>| {
            l.set_visible(true);
        });
        ui.call_on_name("password", |l: &mut TextView| {
            l.set_content(password);
        });
    }
}

fn copy(ui: &mut Cursive, app: &AppType) {
    let mut guard = match lock(app) {
        Ok(app) => app,
        Err(err) => return helpers::errorbox(ui, &err),
    };
    let app = &mut *guard;

    let mut notifier = helpers::UiNotifier::new(ui);
    // failures already went through the notifier, a missing password is a no-op
    let _ = app.session.request_copy(&mut *app.clipboard, &mut notifier);
}

fn save_settings(ui: &mut Cursive, app: &AppType) {
    let res = || -> passgen::Result<PathBuf> {
        let app = lock(app)?;
        let path = app
            .settings_path
            .clone()
            .ok_or(passgen::Error::Generic("no settings file location"))?;
        settings::save_config(
            &path,
            &Settings {
                generator: app.session.configuration().clone(),
                clear_clipboard_after: app.clear_clipboard_after,
            },
        )?;
        Ok(path)
    }();

    match res {
        Ok(path) => helpers::set_status(ui, &format!("Saved settings to {}", path.display())),
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn build_layout(app: &AppType) -> passgen::Result<LinearLayout> {
    let config = lock(app)?.session.configuration().clone();

    let slider = SliderView::horizontal(MAX_LENGTH - MIN_LENGTH + 1)
        .value(config.length.saturating_sub(MIN_LENGTH))
        .on_change({
            let app = app.clone();
            move |ui: &mut Cursive, position| length_changed(ui, &app, position)
        });

    let mut classes = LinearLayout::vertical();
    for class in CharClass::ALL {
        let mut checkbox = Checkbox::new();
        checkbox.set_checked(config.is_enabled(class));
        let checkbox = checkbox
            .on_change({
                let app = app.clone();
                move |ui: &mut Cursive, checked| class_changed(ui, &app, class, checked)
            })
            .with_name(checkbox_name(class));

        classes.add_child(
            LinearLayout::horizontal()
                .child(checkbox)
                .child(TextView::new(format!(" {}", class.label()))),
        );
    }

    let password_row = HideableView::new(
        LinearLayout::horizontal()
            .child(TextView::new("").with_name("password").full_width())
            .child(Button::new("Copy", {
                let app = app.clone();
                move |ui: &mut Cursive| copy(ui, &app)
            })),
    )
    .hidden()
    .with_name("password_row");

    let generator = LinearLayout::vertical()
        .child(TextView::new("Password Length"))
        .child(
            LinearLayout::horizontal()
                .child(slider)
                .child(TextView::new(format!("{}", config.length)).with_name("length_value")),
        )
        .child(DummyView)
        .child(classes)
        .child(DummyView)
        .child(Button::new("Generate Password", {
            let app = app.clone();
            move |ui: &mut Cursive| generate(ui, &app)
        }))
        .child(DummyView)
        .child(password_row);

    Ok(LinearLayout::vertical()
        .child(Dialog::around(generator.fixed_width(48)).title("Password Generator"))
        .child(
            LinearLayout::horizontal()
                .child(TextView::new("F1: Menu | "))
                .child(TextView::new("").with_name("status_bar"))
                .full_width(),
        ))
}

fn help() {
    println!("passgen-cursive {}", env!("CARGO_PKG_VERSION"));
    println!("A password generator for the terminal\n");
    println!("Usage: passgen-cursive [-h|--help]\n");
    println!("Keyboard shortcuts:");
    println!("  Control + g : generate a new password");
    println!("  Control + y : copy the password to the clipboard");
    println!("  F1          : open the menu");
    println!("  Escape      : quit\n");
    println!("Settings are read from $XDG_CONFIG_HOME/passgen/settings.toml.");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 => {
            if args[1] == "-h" || args[1] == "--help" {
                help();
                process::exit(0);
            } else {
                eprintln!("Unknown argument, usage: passgen-cursive [-h|--help]");
                process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown argument, usage: passgen-cursive [-h|--help]");
            process::exit(1);
        }
    }

    let (settings, settings_path) = match settings::read_user_config() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    };

    let app: AppType = Arc::new(Mutex::new(App::new(
        Session::new(settings.generator),
        Box::new(SystemClipboard::new(settings.clear_clipboard_after)),
        settings.clear_clipboard_after,
        Some(settings_path),
    )));

    let layout = match build_layout(&app) {
        Ok(l) => l,
        Err(err) => {
            eprintln!("Error {err}");
            process::exit(1);
        }
    };

    let mut ui = cursive::default();

    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        log::warn!("unable to load theme: {:?}", err);
    }

    ui.add_global_callback(Event::CtrlChar('g'), {
        let app = app.clone();
        move |ui: &mut Cursive| generate(ui, &app)
    });
    ui.add_global_callback(Event::CtrlChar('y'), {
        let app = app.clone();
        move |ui: &mut Cursive| copy(ui, &app)
    });
    ui.add_global_callback(Key::Esc, |s| s.quit());

    ui.add_layer(layout);

    ui.menubar().add_subtree(
        "Operations",
        MenuTree::new()
            .leaf("Generate (ctrl-g)", {
                let app = app.clone();
                move |ui: &mut Cursive| generate(ui, &app)
            })
            .leaf("Copy (ctrl-y)", {
                let app = app.clone();
                move |ui: &mut Cursive| copy(ui, &app)
            })
            .delimiter()
            .leaf("Save settings", {
                let app = app.clone();
                move |ui: &mut Cursive| save_settings(ui, &app)
            })
            .delimiter()
            .leaf("Quit (esc)", |s| s.quit()),
    );

    ui.add_global_callback(Key::F1, |s| s.select_menubar());

    ui.run();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
