use crate::{
    notify::{Level, MemoryNotifier, Notification},
    password_generator::{CharClass, Configuration},
    session::{copy, Session, COPIED_MESSAGE, GENERATED_MESSAGE},
    test_helpers::{FailingClipboard, RecordingClipboard, Sequence},
    Error,
};

fn all_disabled(session: &mut Session) {
    for class in CharClass::ALL {
        session.set_class(class, false);
    }
}

#[test]
fn new_session_has_no_password() {
    let session = Session::default();

    assert!(session.password().is_none());
    assert_eq!(&Configuration::default(), session.configuration());
}

#[test]
fn set_length_clamps() {
    let mut session = Session::default();

    assert_eq!(4, session.set_length(1));
    assert_eq!(20, session.set_length(21));
    assert_eq!(12, session.set_length(12));
    assert_eq!(12, session.configuration().length);
}

#[test]
fn toggle_class_flips() {
    let mut session = Session::default();

    assert!(!session.toggle_class(CharClass::Special));
    assert!(!session.configuration().use_special);
    assert!(session.toggle_class(CharClass::Special));
    assert!(session.configuration().use_special);
}

#[test]
fn request_generate_stores_and_notifies() {
    let mut session = Session::default();
    let mut notifier = MemoryNotifier::new();

    let pass = session
        .request_generate(&mut Sequence::new(&[0, 1, 2]), &mut notifier)
        .unwrap()
        .clone();

    assert_eq!("ABCABC", pass.as_str());
    assert_eq!(Some(&pass), session.password());
    assert_eq!(
        vec![Notification {
            level: Level::Success,
            message: GENERATED_MESSAGE.to_owned(),
        }],
        notifier.notifications
    );
}

#[test]
fn request_generate_overwrites_previous_password() {
    let mut session = Session::default();
    let mut notifier = MemoryNotifier::new();

    session
        .request_generate(&mut Sequence::new(&[0]), &mut notifier)
        .unwrap();
    session
        .request_generate(&mut Sequence::new(&[1]), &mut notifier)
        .unwrap();

    assert_eq!("BBBBBB", session.password().unwrap().as_str());
    assert_eq!(2, notifier.notifications.len());
}

#[test]
fn request_generate_empty_pool_keeps_previous_password() {
    let mut session = Session::default();
    let mut notifier = MemoryNotifier::new();

    session
        .request_generate(&mut Sequence::new(&[3]), &mut notifier)
        .unwrap();
    all_disabled(&mut session);

    let res = session.request_generate(&mut Sequence::new(&[0]), &mut notifier);

    assert!(matches!(res, Err(Error::EmptyPool)));
    assert_eq!("DDDDDD", session.password().unwrap().as_str());
    assert_eq!(
        Some(&Notification {
            level: Level::Error,
            message: "Please select at least one character type.".to_owned(),
        }),
        notifier.last()
    );
}

#[test]
fn request_generate_empty_pool_without_previous_password() {
    let mut session = Session::default();
    let mut notifier = MemoryNotifier::new();
    all_disabled(&mut session);

    let res = session.request_generate(&mut rand::thread_rng(), &mut notifier);

    assert!(res.is_err());
    assert!(session.password().is_none());
    assert_eq!(1, notifier.notifications.len());
}

#[test]
fn request_generate_picks_up_configuration_changes() {
    let mut session = Session::default();
    let mut notifier = MemoryNotifier::new();

    session.set_length(10);
    session.set_class(CharClass::Upper, false);
    session.set_class(CharClass::Lower, false);
    session.set_class(CharClass::Special, false);

    let pass = session
        .request_generate(&mut rand::thread_rng(), &mut notifier)
        .unwrap();

    assert_eq!(10, pass.len());
    assert!(pass.as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn copy_without_password() {
    let mut clipboard = RecordingClipboard::default();

    let res = copy(None, &mut clipboard);

    assert!(matches!(res, Err(Error::NoPassword)));
    assert!(clipboard.written.is_empty());
}

#[test]
fn request_copy_without_password_is_silent() {
    let session = Session::default();
    let mut clipboard = RecordingClipboard::default();
    let mut notifier = MemoryNotifier::new();

    let res = session.request_copy(&mut clipboard, &mut notifier);

    assert!(matches!(res, Err(Error::NoPassword)));
    assert!(clipboard.written.is_empty());
    assert!(notifier.notifications.is_empty());
}

#[test]
fn request_copy_writes_current_password() {
    let mut session = Session::default();
    let mut clipboard = RecordingClipboard::default();
    let mut notifier = MemoryNotifier::new();

    session
        .request_generate(&mut Sequence::new(&[5, 30, 60]), &mut notifier)
        .unwrap();
    session.request_copy(&mut clipboard, &mut notifier).unwrap();

    assert_eq!(vec!["Fe8Fe8".to_owned()], clipboard.written);
    assert_eq!(
        Some(&Notification {
            level: Level::Info,
            message: COPIED_MESSAGE.to_owned(),
        }),
        notifier.last()
    );
}

#[test]
fn request_copy_clipboard_failure_notifies() {
    let mut session = Session::default();
    let mut notifier = MemoryNotifier::new();

    session
        .request_generate(&mut Sequence::new(&[0]), &mut notifier)
        .unwrap();
    let res = session.request_copy(&mut FailingClipboard, &mut notifier);

    assert!(matches!(res, Err(Error::Clipboard(_))));
    let last = notifier.last().unwrap();
    assert_eq!(Level::Error, last.level);
    assert!(last
        .message
        .starts_with("Failed to copy password to clipboard: "));
    assert_eq!("AAAAAA", session.password().unwrap().as_str());
}
