use cursive::{view::Nameable, views::TextView};
use passgen::notify::Notifier;

use crate::helpers::{errorbox, set_status, UiNotifier};

fn status(siv: &mut cursive::Cursive) -> String {
    siv.find_name::<TextView>("status_bar")
        .unwrap()
        .get_content()
        .source()
        .to_owned()
}

#[test]
fn set_status_text() {
    let mut siv = cursive::default();
    siv.add_layer(TextView::new("").with_name("status_bar"));

    set_status(&mut siv, "unit test content");

    assert_eq!("unit test content", status(&mut siv));
}

#[test]
fn notifier_info_goes_to_status_bar() {
    let mut siv = cursive::default();
    siv.add_layer(TextView::new("").with_name("status_bar"));

    UiNotifier::new(&mut siv).info("Password copied to clipboard!");

    assert_eq!("Password copied to clipboard!", status(&mut siv));
    assert_eq!(1, siv.screen().len());
}

#[test]
fn notifier_error_opens_dialog() {
    let mut siv = cursive::default();
    siv.add_layer(TextView::new("old").with_name("status_bar"));

    UiNotifier::new(&mut siv).error("Please select at least one character type.");

    assert_eq!("", status(&mut siv));
    assert_eq!(2, siv.screen().len());
}

#[test]
fn errorbox_adds_layer() {
    let mut siv = cursive::default();
    siv.add_layer(TextView::new(""));

    errorbox(&mut siv, &passgen::Error::EmptyPool);

    assert_eq!(2, siv.screen().len());
}
