use exquizzite::models::{Notifier, SessionView};
use exquizzite::{Grade, OrderMode, StudyEvent, StudySession, load_deck};
use std::fs;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingNotifier {
    events: Vec<StudyEvent>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, event: StudyEvent) {
        self.events.push(event);
    }
}

fn forward(session: &mut StudySession, notifier: &mut RecordingNotifier) {
    for event in session.take_events() {
        notifier.notify(event);
    }
}

#[test]
fn test_study_csv_deck_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("math.csv");
    fs::write(&path, "2+2?,4\ncap of FR?,Paris\n").unwrap();

    let deck = load_deck(&path).unwrap();
    let mut session = StudySession::with_seed(1);
    let mut notifier = RecordingNotifier::default();
    session.set_ordered(Some(1));
    session.load_deck(deck);
    forward(&mut session, &mut notifier);

    assert_eq!(session.order_mode(), OrderMode::Ordered);
    assert_eq!(SessionView::from_session(&session).display.as_str(), "2+2?");

    session.reveal().unwrap();
    assert_eq!(SessionView::from_session(&session).display.as_str(), "4");
    session.grade(Grade::Correct).unwrap();
    forward(&mut session, &mut notifier);

    session.reveal().unwrap();
    session.grade(Grade::Incorrect).unwrap();
    forward(&mut session, &mut notifier);

    let view = SessionView::from_session(&session);
    assert_eq!(view.stats, "Correct: 1 | Incorrect: 1");
    assert_eq!(view.progress, "Progress: 2 / 2");
    assert!(session.is_complete());
    assert_eq!(
        notifier.events,
        vec![
            StudyEvent::CardCorrect,
            StudyEvent::CardIncorrect,
            StudyEvent::SessionComplete
        ]
    );
}

#[test]
fn test_failed_load_leaves_session_alone() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.tsv");
    fs::write(&good, "a\t1\nb\t2\nc\t3\n").unwrap();

    let mut session = StudySession::with_seed(2);
    session.load_deck(load_deck(&good).unwrap());
    session.reveal().unwrap();
    session.grade(Grade::Incorrect).unwrap();
    let card = session.current_card().cloned();
    let queue = session.queue().clone();

    let missing = dir.path().join("missing.tsv");
    if let Ok(deck) = load_deck(&missing) {
        session.load_deck(deck);
    }

    assert_eq!(session.current_card().cloned(), card);
    assert_eq!(session.queue(), &queue);
    assert_eq!(session.incorrect_count(), 1);
    assert_eq!(session.deck().map(|d| d.name.as_str()), Some("good"));
}

#[test]
fn test_file_without_usable_rows_ends_session_immediately() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "just a note\nnothing to study\n").unwrap();

    let mut session = StudySession::with_seed(3);
    session.load_deck(load_deck(&path).unwrap());

    assert!(session.is_complete());
    assert_eq!(session.take_events(), vec![StudyEvent::SessionComplete]);
    assert!(!SessionView::from_session(&session).can_reveal);
}
