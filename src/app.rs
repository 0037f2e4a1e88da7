//! Main application UI and state management.
//! Forwards button clicks and key presses to the study session and renders its view.

use crate::error::AppError;
use crate::import::load_deck;
use crate::models::{Grade, Notifier, SessionView, StudySession};
use crate::settings::{Preferences, PreferencesStore, Theme};
use crate::sound::SoundBoard;
use eframe::egui;
use egui::{FontId, RichText, TextStyle};
use std::path::Path;

pub const FONT_SIZE: f32 = 16.0;

/// Numeric prompts opened by the mode and jump buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NumberPrompt {
    OrderedStart,
    JumpTo,
}

impl NumberPrompt {
    fn title(self) -> &'static str {
        match self {
            NumberPrompt::OrderedStart => "Starting question",
            NumberPrompt::JumpTo => "Jump to question",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NumberPrompt::OrderedStart => "Number of the question to start from (1-based):",
            NumberPrompt::JumpTo => "Question number (1-based):",
        }
    }
}

/// User actions collected while drawing and applied afterwards
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Reveal,
    Next,
    Grade(Grade),
    PickFile,
    LoadLastFile,
    Shuffle,
    AskOrdered,
    AskJump,
    CycleTheme,
    ToggleSound,
}

/// Parses a 1-based question number typed by the user.
pub fn parse_question_number(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

/// Main application state
pub struct FlashcardApp {
    session: StudySession,
    prefs: Preferences,
    prefs_store: PreferencesStore,
    sounds: SoundBoard,

    prompt: Option<NumberPrompt>,
    prompt_input: String,
    error_message: Option<String>,
    applied_theme: Option<Theme>,
}

impl eframe::App for FlashcardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.prefs.theme) {
            ctx.set_visuals(self.prefs.theme.visuals());
            self.applied_theme = Some(self.prefs.theme);
        }

        let view = SessionView::from_session(&self.session);
        let mut actions = Vec::new();

        if self.prompt.is_none() && self.error_message.is_none() {
            self.collect_key_actions(ctx, &view, &mut actions);
        }

        self.render_main_screen(ctx, &view, &mut actions);
        self.render_prompt(ctx);
        self.render_error(ctx);

        // Execute deferred actions
        for action in actions {
            self.apply(action);
        }
    }
}

impl FlashcardApp {
    /// Creates the application with preferences read from `prefs_store`
    pub fn new(prefs_store: PreferencesStore, mut sounds: SoundBoard) -> Self {
        let prefs = prefs_store.load();
        sounds.set_enabled(prefs.sound_on);
        tracing::info!(
            "Preferences loaded: theme {}, sound {}",
            prefs.theme.name(),
            if prefs.sound_on { "on" } else { "off" }
        );
        Self {
            session: StudySession::new(),
            prefs,
            prefs_store,
            sounds,
            prompt: None,
            prompt_input: String::new(),
            error_message: None,
            applied_theme: None,
        }
    }

    pub fn session(&self) -> &StudySession {
        &self.session
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Loads a deck file. On failure the current session is left untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<(), AppError> {
        let deck = load_deck(path)?;
        self.session.load_deck(deck);
        self.prefs.set_last_path(path);
        self.save_preferences();
        self.dispatch_events();
        Ok(())
    }

    /// Reopens the deck recorded in preferences, if it still exists.
    pub fn load_last_file(&mut self) -> Result<(), AppError> {
        match self.prefs.last_path() {
            Some(path) if path.exists() => self.load_file(&path),
            _ => {
                tracing::info!("No valid saved path.");
                Ok(())
            }
        }
    }

    pub fn reveal(&mut self) {
        if let Err(e) = self.session.reveal() {
            tracing::debug!("Reveal ignored: {}", e);
        }
    }

    pub fn next_card(&mut self) {
        self.session.advance();
        self.dispatch_events();
    }

    pub fn grade(&mut self, grade: Grade) {
        if let Err(e) = self.session.grade(grade) {
            tracing::debug!("Grade ignored: {}", e);
        }
        self.dispatch_events();
    }

    pub fn set_shuffle_mode(&mut self) {
        self.session.set_shuffled();
        self.dispatch_events();
    }

    /// Ordered mode from the typed start; anything unparsable starts at the first card.
    pub fn set_ordered_mode(&mut self, input: &str) {
        self.session.set_ordered(parse_question_number(input));
        self.dispatch_events();
    }

    pub fn jump_to_question(&mut self, input: &str) {
        self.session.jump_to(parse_question_number(input));
        self.dispatch_events();
    }

    pub fn toggle_sound(&mut self) {
        let on = self.prefs.toggle_sound();
        self.sounds.set_enabled(on);
        self.save_preferences();
    }

    pub fn switch_theme(&mut self) {
        let theme = self.prefs.cycle_theme();
        tracing::debug!("Switched theme to {}", theme.name());
        self.save_preferences();
    }

    fn save_preferences(&self) {
        if let Err(e) = self.prefs_store.save(&self.prefs) {
            tracing::warn!("{}", e);
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.session.take_events() {
            self.sounds.notify(event);
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Reveal => self.reveal(),
            Action::Next => self.next_card(),
            Action::Grade(grade) => self.grade(grade),
            Action::PickFile => self.handle_pick_file(),
            Action::LoadLastFile => {
                if let Err(e) = self.load_last_file() {
                    self.report_error(e);
                }
            }
            Action::Shuffle => self.set_shuffle_mode(),
            Action::AskOrdered => self.open_prompt(NumberPrompt::OrderedStart),
            Action::AskJump => self.open_prompt(NumberPrompt::JumpTo),
            Action::CycleTheme => self.switch_theme(),
            Action::ToggleSound => self.toggle_sound(),
        }
    }

    fn report_error(&mut self, error: AppError) {
        tracing::error!("{}", error);
        self.error_message = Some(error.to_string());
    }

    fn open_prompt(&mut self, prompt: NumberPrompt) {
        self.prompt = Some(prompt);
        self.prompt_input.clear();
    }

    /// Opens the file dialog and loads the chosen deck
    fn handle_pick_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TSV Files", &["tsv"])
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            if let Err(e) = self.load_file(&path) {
                self.report_error(e);
            }
        }
    }

    fn collect_key_actions(&self, ctx: &egui::Context, view: &SessionView, actions: &mut Vec<Action>) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Enter) && view.can_reveal {
                actions.push(Action::Reveal);
            }
            if i.key_pressed(egui::Key::ArrowRight) && view.can_grade {
                actions.push(Action::Grade(Grade::Correct));
            }
            if i.key_pressed(egui::Key::ArrowLeft) && view.can_grade {
                actions.push(Action::Grade(Grade::Incorrect));
            }
            if i.key_pressed(egui::Key::Space) && view.can_advance {
                actions.push(Action::Next);
            }
        });
    }

    /// Renders the card display, the control rows and the stats
    fn render_main_screen(&self, ctx: &egui::Context, view: &SessionView, actions: &mut Vec<Action>) {
        let colors = self.prefs.theme.colors();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none()
                .fill(colors.label_bg)
                .stroke(egui::Stroke::new(3.0, colors.bg))
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_min_height(250.0);
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(view.display.as_str())
                            .font(FontId::monospace(FONT_SIZE))
                            .color(colors.label_fg),
                    );
                });

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.add_enabled(view.can_reveal, egui::Button::new("Show Answer")).clicked() {
                    actions.push(Action::Reveal);
                }
                if ui.add_enabled(view.can_advance, egui::Button::new("Next")).clicked() {
                    actions.push(Action::Next);
                }
                if ui.add_enabled(view.can_grade, egui::Button::new("Correct")).clicked() {
                    actions.push(Action::Grade(Grade::Correct));
                }
                if ui.add_enabled(view.can_grade, egui::Button::new("Incorrect")).clicked() {
                    actions.push(Action::Grade(Grade::Incorrect));
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Load Flashcards").clicked() {
                    actions.push(Action::PickFile);
                }
                if ui.button("Open Last File").clicked() {
                    actions.push(Action::LoadLastFile);
                }
                if ui.button("Shuffle Mode").clicked() {
                    actions.push(Action::Shuffle);
                }
                if ui.button("Ordered Mode").clicked() {
                    actions.push(Action::AskOrdered);
                }
                if ui.add_enabled(view.can_jump, egui::Button::new("Jump to Question")).clicked() {
                    actions.push(Action::AskJump);
                }
            });

            ui.horizontal(|ui| {
                if ui.button(format!("Theme: {}", self.prefs.theme.name())).clicked() {
                    actions.push(Action::CycleTheme);
                }
                let sound_label = if self.prefs.sound_on { "Sound: ON" } else { "Sound: OFF" };
                if ui.button(sound_label).clicked() {
                    actions.push(Action::ToggleSound);
                }
            });

            ui.add_space(10.0);
            ui.label(&view.stats);
            ui.label(&view.progress);
            ui.label(&view.mode);
        });
    }

    fn render_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.prompt else {
            return;
        };
        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new(prompt.title())
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(prompt.label());
                let response = ui.text_edit_singleline(&mut self.prompt_input);
                response.request_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if !submitted && !cancelled {
            return;
        }
        self.prompt = None;
        let input = std::mem::take(&mut self.prompt_input);
        match (prompt, submitted) {
            (NumberPrompt::OrderedStart, true) => self.set_ordered_mode(&input),
            // A cancelled start prompt still switches mode, from the first card
            (NumberPrompt::OrderedStart, false) => self.set_ordered_mode(""),
            (NumberPrompt::JumpTo, true) => self.jump_to_question(&input),
            (NumberPrompt::JumpTo, false) => {}
        }
    }

    fn render_error(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.error_message else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.error_message = None;
        }
    }
}

/// Monospace text everywhere, like an old terminal
pub fn configure_fonts(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        for text_style in [TextStyle::Body, TextStyle::Button, TextStyle::Small] {
            style.text_styles.insert(text_style, FontId::monospace(FONT_SIZE));
        }
        style.text_styles.insert(TextStyle::Heading, FontId::monospace(FONT_SIZE + 4.0));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DisplayText;
    use std::fs;
    use tempfile::TempDir;

    fn quiet_app(dir: &TempDir) -> FlashcardApp {
        let store = PreferencesStore::new(dir.path().join("settings.json"));
        FlashcardApp::new(store, SoundBoard::new(dir.path().join("sounds"), false))
    }

    fn write_deck(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_question_number() {
        assert_eq!(parse_question_number("3"), Some(3));
        assert_eq!(parse_question_number(" 12 "), Some(12));
        assert_eq!(parse_question_number(""), None);
        assert_eq!(parse_question_number("abc"), None);
        assert_eq!(parse_question_number("-1"), None);
    }

    #[test]
    fn test_load_file_records_last_path() {
        let dir = TempDir::new().unwrap();
        let path = write_deck(&dir, "words.tsv", "a\t1\nb\t2\n");
        let mut app = quiet_app(&dir);

        app.load_file(&path).unwrap();
        assert_eq!(app.session().deck_len(), 2);
        assert_eq!(app.preferences().last_path(), Some(path.clone()));

        let saved = PreferencesStore::new(dir.path().join("settings.json")).load();
        assert_eq!(saved.last_path(), Some(path));
    }

    #[test]
    fn test_failed_reload_keeps_session() {
        let dir = TempDir::new().unwrap();
        let path = write_deck(&dir, "words.csv", "a,1\nb,2\nc,3\n");
        let mut app = quiet_app(&dir);
        app.set_ordered_mode("1");
        app.load_file(&path).unwrap();
        app.reveal();
        app.grade(Grade::Correct);

        let before_card = app.session().current_card().cloned();
        let before_queue: Vec<_> = app.session().queue().iter().cloned().collect();

        let result = app.load_file(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(AppError::FileAccess { .. })));

        assert_eq!(app.session().current_card().cloned(), before_card);
        assert_eq!(app.session().queue().iter().cloned().collect::<Vec<_>>(), before_queue);
        assert_eq!(app.session().correct_count(), 1);
        assert_eq!(app.preferences().last_path(), Some(path));
    }

    #[test]
    fn test_load_last_file() {
        let dir = TempDir::new().unwrap();
        let path = write_deck(&dir, "last.tsv", "q\ta\n");
        {
            let mut app = quiet_app(&dir);
            app.load_file(&path).unwrap();
        }

        let mut app = quiet_app(&dir);
        assert!(!app.session().has_deck());
        app.load_last_file().unwrap();
        assert_eq!(app.session().deck_len(), 1);
    }

    #[test]
    fn test_load_last_file_without_saved_path() {
        let dir = TempDir::new().unwrap();
        let mut app = quiet_app(&dir);

        app.load_last_file().unwrap();
        assert!(!app.session().has_deck());
    }

    #[test]
    fn test_toggle_sound_and_theme_are_saved() {
        let dir = TempDir::new().unwrap();
        let mut app = quiet_app(&dir);

        app.toggle_sound();
        app.switch_theme();

        let saved = PreferencesStore::new(dir.path().join("settings.json")).load();
        assert!(!saved.sound_on);
        assert_eq!(saved.theme, Theme::Monochrome);
        assert!(!app.sounds.is_enabled());
    }

    #[test]
    fn test_ordered_mode_with_bad_input_starts_at_first_card() {
        let dir = TempDir::new().unwrap();
        let path = write_deck(&dir, "deck.tsv", "q1\ta1\nq2\ta2\nq3\ta3\n");
        let mut app = quiet_app(&dir);
        app.load_file(&path).unwrap();

        app.set_ordered_mode("three");
        assert_eq!(app.session().start_index(), 0);
        assert_eq!(
            SessionView::from_session(app.session()).display,
            DisplayText::Front("q1".into())
        );

        app.jump_to_question("3");
        assert_eq!(app.session().current_card().unwrap().front, "q3");

        app.jump_to_question("nope");
        assert_eq!(app.session().current_card().unwrap().front, "q3");
    }

    #[test]
    fn test_grade_before_reveal_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_deck(&dir, "deck.tsv", "q1\ta1\n");
        let mut app = quiet_app(&dir);
        app.load_file(&path).unwrap();

        app.grade(Grade::Correct);
        assert_eq!(app.session().correct_count(), 0);
        assert!(app.session().current_card().is_some());
    }
}
