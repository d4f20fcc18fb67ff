//! On-screen settings editor. Works on a draft copy; nothing is stored until
//! the draft is handed back to [`crate::kiosk::Kiosk::save_settings`].

use crate::settings::{AppSettings, ClockFormat, NavDockMode, Theme, TransitionEffect};

const DURATION_STEPS: [f64; 8] = [5.0, 8.0, 10.0, 12.0, 15.0, 20.0, 30.0, 60.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorRow {
    Theme,
    SlideDuration,
    Transition,
    DockMode,
    ClockFormat,
    ShowDate,
    ShowTicker,
    ProgressBar,
    Shuffle,
    HideCursor,
    Particles,
    BlurEffects,
    HeroCta,
}

impl EditorRow {
    pub const ALL: [EditorRow; 13] = [
        Self::Theme,
        Self::SlideDuration,
        Self::Transition,
        Self::DockMode,
        Self::ClockFormat,
        Self::ShowDate,
        Self::ShowTicker,
        Self::ProgressBar,
        Self::Shuffle,
        Self::HideCursor,
        Self::Particles,
        Self::BlurEffects,
        Self::HeroCta,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::SlideDuration => "Slide duration",
            Self::Transition => "Transition",
            Self::DockMode => "Navigation dock",
            Self::ClockFormat => "Clock format",
            Self::ShowDate => "Show date",
            Self::ShowTicker => "Show ticker",
            Self::ProgressBar => "Progress bar",
            Self::Shuffle => "Shuffle slides",
            Self::HideCursor => "Hide cursor",
            Self::Particles => "Particles",
            Self::BlurEffects => "Glass panels",
            Self::HeroCta => "Hero call to action",
        }
    }

    pub fn value(&self, s: &AppSettings) -> String {
        let on_off = |b: bool| if b { "On" } else { "Off" }.to_string();
        match self {
            Self::Theme => s.theme.display_name().to_string(),
            Self::SlideDuration => format!("{}s", s.slide_duration),
            Self::Transition => format!("{:?}", s.transition_effect),
            Self::DockMode => format!("{:?}", s.nav_dock_mode),
            Self::ClockFormat => match s.clock_format {
                ClockFormat::TwelveHour => "12h".to_string(),
                ClockFormat::TwentyFourHour => "24h".to_string(),
            },
            Self::ShowDate => on_off(s.show_date),
            Self::ShowTicker => on_off(s.show_ticker),
            Self::ProgressBar => on_off(s.show_progress_bar),
            Self::Shuffle => on_off(s.slide_shuffle),
            Self::HideCursor => on_off(s.hide_cursor),
            Self::Particles => on_off(s.enable_particles),
            Self::BlurEffects => on_off(s.enable_blur_effects),
            Self::HeroCta => on_off(s.show_hero_cta),
        }
    }

    /// Moves the row's value to the next option.
    pub fn advance(&self, s: &mut AppSettings) {
        match self {
            Self::Theme => {
                s.theme = match s.theme {
                    Theme::Wood => Theme::Galaxy,
                    Theme::Galaxy => Theme::Nebula,
                    Theme::Nebula => Theme::Flow,
                    Theme::Flow => Theme::Custom,
                    Theme::Custom => Theme::Wood,
                }
            }
            Self::SlideDuration => {
                s.slide_duration = DURATION_STEPS
                    .iter()
                    .copied()
                    .find(|step| *step > s.slide_duration)
                    .unwrap_or(DURATION_STEPS[0]);
            }
            Self::Transition => {
                s.transition_effect = match s.transition_effect {
                    TransitionEffect::Fade => TransitionEffect::Slide,
                    TransitionEffect::Slide => TransitionEffect::Zoom,
                    TransitionEffect::Zoom => TransitionEffect::Fade,
                }
            }
            Self::DockMode => {
                s.nav_dock_mode = match s.nav_dock_mode {
                    NavDockMode::Auto => NavDockMode::Visible,
                    NavDockMode::Visible => NavDockMode::Hidden,
                    NavDockMode::Hidden => NavDockMode::Auto,
                }
            }
            Self::ClockFormat => {
                s.clock_format = match s.clock_format {
                    ClockFormat::TwelveHour => ClockFormat::TwentyFourHour,
                    ClockFormat::TwentyFourHour => ClockFormat::TwelveHour,
                }
            }
            Self::ShowDate => s.show_date = !s.show_date,
            Self::ShowTicker => s.show_ticker = !s.show_ticker,
            Self::ProgressBar => s.show_progress_bar = !s.show_progress_bar,
            Self::Shuffle => s.slide_shuffle = !s.slide_shuffle,
            Self::HideCursor => s.hide_cursor = !s.hide_cursor,
            Self::Particles => s.enable_particles = !s.enable_particles,
            Self::BlurEffects => s.enable_blur_effects = !s.enable_blur_effects,
            Self::HeroCta => s.show_hero_cta = !s.show_hero_cta,
        }
    }
}

pub struct SettingsEditor {
    draft: AppSettings,
    selected: usize,
}

impl SettingsEditor {
    pub fn new(current: &AppSettings) -> Self {
        Self { draft: current.clone(), selected: 0 }
    }

    pub fn draft(&self) -> &AppSettings {
        &self.draft
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % EditorRow::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + EditorRow::ALL.len() - 1) % EditorRow::ALL.len();
    }

    pub fn activate(&mut self, index: usize) {
        if let Some(row) = EditorRow::ALL.get(index) {
            self.selected = index;
            row.advance(&mut self.draft);
        }
    }

    pub fn activate_selected(&mut self) {
        self.activate(self.selected);
    }

    /// Factory defaults, still unsaved.
    pub fn reset(&mut self) {
        self.draft = AppSettings::default();
    }

    pub fn into_draft(self) -> AppSettings {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_isolated_until_taken() {
        let current = AppSettings::default();
        let mut editor = SettingsEditor::new(&current);
        editor.activate(EditorRow::ALL.iter().position(|r| *r == EditorRow::Shuffle).unwrap());
        assert!(editor.draft().slide_shuffle);
        assert!(!current.slide_shuffle);
        assert!(editor.into_draft().slide_shuffle);
    }

    #[test]
    fn durations_cycle_through_steps() {
        let mut s = AppSettings::default();
        EditorRow::SlideDuration.advance(&mut s);
        assert_eq!(s.slide_duration, 15.0);
        s.slide_duration = 60.0;
        EditorRow::SlideDuration.advance(&mut s);
        assert_eq!(s.slide_duration, 5.0);
        s.slide_duration = 11.0;
        EditorRow::SlideDuration.advance(&mut s);
        assert_eq!(s.slide_duration, 12.0);
    }

    #[test]
    fn theme_cycle_wraps() {
        let mut s = AppSettings::default();
        for _ in 0..5 {
            EditorRow::Theme.advance(&mut s);
        }
        assert_eq!(s.theme, Theme::Wood);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut editor = SettingsEditor::new(&AppSettings::default());
        editor.select_previous();
        assert_eq!(editor.selected(), EditorRow::ALL.len() - 1);
        editor.select_next();
        assert_eq!(editor.selected(), 0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut current = AppSettings::default();
        current.theme = Theme::Flow;
        let mut editor = SettingsEditor::new(&current);
        editor.reset();
        assert_eq!(editor.draft(), &AppSettings::default());
    }

    #[test]
    fn values_render_for_every_row() {
        let s = AppSettings::default();
        assert_eq!(EditorRow::SlideDuration.value(&s), "12s");
        assert_eq!(EditorRow::ClockFormat.value(&s), "12h");
        assert_eq!(EditorRow::Theme.value(&s), "Executive Wood");
        assert_eq!(EditorRow::HeroCta.value(&s), "Off");
    }
}
