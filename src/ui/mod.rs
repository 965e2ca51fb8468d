//! Terminal presentation.
//!
//! [`TerminalSurface`] is the presentation surface for the command-line
//! front end. It receives the current [`DisplayMode`] from the preferences
//! engine and renders text accordingly:
//!
//! - easy read selects the simplified wording and adds spacing
//! - large text renders headings in capitals and adds spacing
//! - high contrast swaps in a restricted palette
//! - reduce motion suppresses the narration activity indicator
//!
//! Colors are only emitted when stdout is a terminal and `NO_COLOR` is unset.

pub mod theme;

pub use theme::{Theme, ThemeVariant};

use crate::accessibility::{DisplayMode, Motion, PaletteMode, PresentationSurface, TypeScale};
use crate::config::ThemeMode;
use crate::models::{Text, TextRegister};
use crate::progress::Progress;
use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// Frames of the narration activity indicator.
const ACTIVITY_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Width of rendered progress bars, in cells.
const PROGRESS_WIDTH: usize = 20;

/// The terminal as a presentation surface.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    base: Theme,
    theme: Theme,
    mode: DisplayMode,
    styled: bool,
}

impl TerminalSurface {
    /// Surface for stdout with the configured theme.
    #[must_use]
    pub fn new(theme_mode: ThemeMode) -> Self {
        let styled = std::io::stdout().is_tty() && std::env::var_os("NO_COLOR").is_none();
        Self::with_theme(Theme::for_mode(theme_mode), styled)
    }

    /// Surface with an explicit theme.
    #[must_use]
    pub fn with_theme(base: Theme, styled: bool) -> Self {
        Self {
            base,
            theme: base,
            mode: DisplayMode::default(),
            styled,
        }
    }

    /// Unstyled surface (no escape codes).
    #[must_use]
    pub fn plain() -> Self {
        Self::with_theme(Theme::dark(), false)
    }

    /// Currently applied mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Active theme (the high-contrast theme while that mode is on).
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Active wording register.
    #[must_use]
    pub const fn register(&self) -> TextRegister {
        self.mode.register
    }

    /// Picks the wording for the active register.
    #[must_use]
    pub fn text<'a>(&self, text: &'a Text) -> &'a str {
        text.get(self.mode.register)
    }

    /// Picks between two literal wordings.
    #[must_use]
    pub const fn pick<'a>(&self, standard: &'a str, easy_read: &'a str) -> &'a str {
        match self.mode.register {
            TextRegister::Standard => standard,
            TextRegister::EasyRead => easy_read,
        }
    }

    /// Whether output should be spaced out.
    #[must_use]
    pub fn spacious(&self) -> bool {
        self.mode.type_scale == TypeScale::Large || self.mode.register == TextRegister::EasyRead
    }

    /// Blank separator between list entries: empty, or a newline when spacious.
    #[must_use]
    pub fn gap(&self) -> &'static str {
        if self.spacious() {
            "\n"
        } else {
            ""
        }
    }

    /// A section heading.
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        let text = if self.mode.type_scale == TypeScale::Large {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        self.paint(&text, self.theme.primary, true)
    }

    /// Body text; bold when large text is on.
    #[must_use]
    pub fn body(&self, text: &str) -> String {
        self.paint(text, self.theme.text, self.mode.type_scale == TypeScale::Large)
    }

    /// A field label.
    #[must_use]
    pub fn label(&self, text: &str) -> String {
        self.paint(text, self.theme.text_secondary, false)
    }

    /// De-emphasised text.
    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.theme.text_muted, false)
    }

    /// Highlighted text.
    #[must_use]
    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.theme.accent, true)
    }

    /// A success message.
    #[must_use]
    pub fn success(&self, text: &str) -> String {
        self.paint(text, self.theme.success, false)
    }

    /// A warning.
    #[must_use]
    pub fn warning(&self, text: &str) -> String {
        self.paint(text, self.theme.warning, true)
    }

    /// Check box for a checklist item.
    #[must_use]
    pub fn checkbox(&self, done: bool) -> String {
        if done {
            self.paint("[x]", self.theme.success, true)
        } else {
            self.paint("[ ]", self.theme.text_muted, false)
        }
    }

    /// Textual progress bar, e.g. `[#####---------------] 1/4 (25%)`.
    #[must_use]
    pub fn progress_bar(&self, progress: Progress) -> String {
        let filled = if progress.total == 0 {
            0
        } else {
            progress.completed * PROGRESS_WIDTH / progress.total
        };
        let bar = format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(PROGRESS_WIDTH - filled)
        );
        format!(
            "{} {}/{} ({}%)",
            self.paint(&bar, self.theme.success, false),
            progress.completed,
            progress.total,
            progress.percent()
        )
    }

    /// Activity indicator frame for narration, or `None` with reduced motion.
    #[must_use]
    pub fn activity_frame(&self, tick: usize) -> Option<&'static str> {
        match self.mode.motion {
            Motion::Full => Some(ACTIVITY_FRAMES[tick % ACTIVITY_FRAMES.len()]),
            Motion::Reduced => None,
        }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.styled {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

impl PresentationSurface for TerminalSurface {
    fn apply(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.theme = match mode.palette {
            PaletteMode::Standard => self.base,
            PaletteMode::HighContrast => Theme::high_contrast(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::{AccessibilitySettings, SettingsPatch};

    fn mode(patch: &SettingsPatch) -> DisplayMode {
        DisplayMode::from(&AccessibilitySettings::default().merged(patch))
    }

    #[test]
    fn test_register_selects_wording() {
        let mut surface = TerminalSurface::plain();
        let text = Text::new("Paediatrics", "Doctors for Children");
        assert_eq!(surface.text(&text), "Paediatrics");

        surface.apply(mode(&SettingsPatch::easy_read(true)));
        assert_eq!(surface.text(&text), "Doctors for Children");
        assert_eq!(surface.pick("Export Backup", "Save a Copy"), "Save a Copy");
    }

    #[test]
    fn test_large_text_uppercases_headings() {
        let mut surface = TerminalSurface::plain();
        assert_eq!(surface.heading("Services"), "Services");

        surface.apply(mode(&SettingsPatch {
            large_text: Some(true),
            ..SettingsPatch::default()
        }));
        assert_eq!(surface.heading("Services"), "SERVICES");
        assert_eq!(surface.gap(), "\n");
    }

    #[test]
    fn test_high_contrast_swaps_theme_and_reverts() {
        let mut surface = TerminalSurface::with_theme(Theme::light(), false);
        surface.apply(mode(&SettingsPatch {
            high_contrast: Some(true),
            ..SettingsPatch::default()
        }));
        assert_eq!(surface.theme().variant(), ThemeVariant::HighContrast);

        surface.apply(mode(&SettingsPatch::default()));
        assert_eq!(*surface.theme(), Theme::light());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut once = TerminalSurface::plain();
        let target = mode(&SettingsPatch {
            reduce_motion: Some(true),
            easy_read: Some(true),
            ..SettingsPatch::default()
        });
        once.apply(target);
        let mut twice = once.clone();
        twice.apply(target);
        assert_eq!(once.mode(), twice.mode());
        assert_eq!(once.theme(), twice.theme());
    }

    #[test]
    fn test_reduce_motion_hides_activity() {
        let mut surface = TerminalSurface::plain();
        assert_eq!(surface.activity_frame(1), Some("/"));
        surface.apply(mode(&SettingsPatch {
            reduce_motion: Some(true),
            ..SettingsPatch::default()
        }));
        assert_eq!(surface.activity_frame(1), None);
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let surface = TerminalSurface::plain();
        assert!(!surface.heading("Title").contains('\x1b'));
        assert_eq!(surface.checkbox(true), "[x]");
    }

    #[test]
    fn test_styled_output_has_escape_codes() {
        let surface = TerminalSurface::with_theme(Theme::dark(), true);
        assert!(surface.heading("Title").contains('\x1b'));
    }

    #[test]
    fn test_progress_bar() {
        let surface = TerminalSurface::plain();
        let bar = surface.progress_bar(Progress {
            completed: 1,
            total: 4,
        });
        assert_eq!(bar, "[#####---------------] 1/4 (25%)");

        let empty = surface.progress_bar(Progress {
            completed: 0,
            total: 0,
        });
        assert!(empty.ends_with("0/0 (0%)"));
    }
}
