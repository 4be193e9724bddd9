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

use cursive::{
    event::Key,
    views::{Dialog, OnEventView, TextView},
    Cursive,
};
use passgen::notify::{Level, Notification, Notifier};

/// Displays an error in a cursive dialog
pub fn errorbox(ui: &mut Cursive, err: &passgen::Error) {
    show_error(ui, &format!("{err}"));
}

fn show_error(ui: &mut Cursive, text: &str) {
    let d = Dialog::around(TextView::new(text))
        .dismiss_button("Ok")
        .title("Error");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn set_status(ui: &mut Cursive, text: &str) {
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(text);
    });
}

/// Shows session notifications: errors in a dialog, everything else in the status bar.
pub struct UiNotifier<'a> {
    ui: &'a mut Cursive,
}

impl<'a> UiNotifier<'a> {
    pub fn new(ui: &'a mut Cursive) -> Self {
        UiNotifier { ui }
    }
}

impl Notifier for UiNotifier<'_> {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            Level::Error => {
                set_status(self.ui, "");
                show_error(self.ui, &notification.message);
            }
            Level::Success | Level::Info => set_status(self.ui, &notification.message),
        }
    }
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
