//! Events raised by the study session once a transition has committed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyEvent {
    CardCorrect,
    CardIncorrect,
    /// The queue ran dry: there is no card left to show.
    SessionComplete,
}

/// Receives study events, e.g. to play an audio cue.
pub trait Notifier {
    fn notify(&mut self, event: StudyEvent);
}
