use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::assistant::Assistant;
use crate::clock::Clock;
use crate::constants::MENU_TARGET;
use crate::error::Result;
use crate::gemini::ChatBackend;
use crate::rotation::SlideRotation;
use crate::settings::{AppSettings, SettingsStore};
use crate::slides::{ActiveSlide, active_slides};

/// Everything the display shows, independent of how it is drawn.
pub struct Kiosk {
    store: SettingsStore,
    slides: Vec<ActiveSlide>,
    rotation: SlideRotation,
    assistant: Assistant,
    backend: Arc<dyn ChatBackend>,
    clock: Clock,
    pub show_menu: bool,
    pub show_assistant: bool,
}

impl Kiosk {
    pub fn new(store: SettingsStore, backend: Arc<dyn ChatBackend>, now: Instant) -> Self {
        let settings = store.settings();
        let slides = active_slides(settings);
        let rotation = SlideRotation::new(
            slides.len(),
            settings.slide_duration(),
            settings.slide_shuffle,
            now,
        );
        info!("{} of the catalog slides enabled", slides.len());
        Self {
            store,
            slides,
            rotation,
            assistant: Assistant::new(),
            backend,
            clock: Clock::new(now),
            show_menu: false,
            show_assistant: false,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        self.store.settings()
    }

    pub fn slides(&self) -> &[ActiveSlide] {
        &self.slides
    }

    pub fn current_slide(&self) -> Option<&ActiveSlide> {
        self.slides.get(self.rotation.index())
    }

    pub fn rotation(&self) -> &SlideRotation {
        &self.rotation
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn assistant_mut(&mut self) -> &mut Assistant {
        &mut self.assistant
    }

    /// Per-frame housekeeping. Returns true when the current slide changed.
    pub fn update<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        self.clock.update(now);
        self.assistant.poll();
        self.rotation.update(now, rng)
    }

    pub fn next<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        self.rotation.next(now, rng);
    }

    pub fn previous<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        self.rotation.previous(now, rng);
    }

    pub fn toggle_play(&mut self, now: Instant) {
        self.rotation.toggle_play(now);
    }

    /// `MENU` opens the services menu; an enabled id is shown and rotation
    /// pauses; anything else is ignored.
    pub fn jump_to_service(&mut self, id: &str) -> bool {
        if id == MENU_TARGET {
            self.show_menu = true;
            return true;
        }
        match self.slides.iter().position(|s| s.id() == id) {
            Some(index) => {
                self.show_menu = false;
                self.rotation.jump_to(index)
            }
            None => {
                debug!("Ignoring jump to '{}', not an active slide", id);
                false
            }
        }
    }

    pub fn submit_question(&mut self) -> bool {
        self.assistant.submit(&self.backend)
    }

    /// Persists new settings and recomputes the slide list right away.
    pub fn save_settings(&mut self, settings: AppSettings, now: Instant) -> Result<()> {
        self.store.save(settings)?;
        self.apply_settings(now);
        Ok(())
    }

    pub fn reload_settings(&mut self, now: Instant) {
        self.store.reload();
        self.apply_settings(now);
        info!("Settings reloaded from {}", self.store.path().display());
    }

    pub fn toggle_shuffle(&mut self, now: Instant) -> Result<()> {
        let mut settings = self.settings().clone();
        settings.slide_shuffle = !settings.slide_shuffle;
        self.save_settings(settings, now)
    }

    fn apply_settings(&mut self, now: Instant) {
        let settings = self.store.settings();
        let slides = active_slides(settings);
        let duration = settings.slide_duration();
        let shuffle = settings.slide_shuffle;

        let same_set = slides.len() == self.slides.len()
            && slides.iter().zip(&self.slides).all(|(a, b)| a.id() == b.id());
        self.slides = slides;

        if same_set && duration == self.rotation.duration() {
            self.rotation.set_shuffle(shuffle);
        } else {
            self.rotation.reconfigure(self.slides.len(), duration, shuffle, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KioskError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;
    use tempfile::TempDir;

    struct Offline;

    impl ChatBackend for Offline {
        fn send(&self, _text: &str) -> Result<String> {
            Err(KioskError::Chat("offline".to_string()))
        }
    }

    fn kiosk_with(settings: AppSettings) -> (TempDir, Kiosk, Instant) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::open(dir.path().join("settings.json"));
        store.save(settings).unwrap();
        let now = Instant::now();
        let kiosk = Kiosk::new(store, Arc::new(Offline), now);
        (dir, kiosk, now)
    }

    #[test]
    fn hero_only_scenario() {
        let mut settings = AppSettings::default();
        settings.enabled_services = vec!["hero".to_string()];
        let (_dir, mut kiosk, now) = kiosk_with(settings);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(kiosk.slides().len(), 1);
        kiosk.next(now, &mut rng);
        assert_eq!(kiosk.rotation().index(), 0);

        assert!(!kiosk.jump_to_service("golden-visa"));
        assert!(kiosk.rotation().is_playing());
        assert_eq!(kiosk.current_slide().unwrap().id(), "hero");
    }

    #[test]
    fn jump_pauses_and_menu_target_opens_menu() {
        let (_dir, mut kiosk, _) = kiosk_with(AppSettings::default());

        assert!(kiosk.jump_to_service(MENU_TARGET));
        assert!(kiosk.show_menu);
        assert!(kiosk.rotation().is_playing());

        assert!(kiosk.jump_to_service("customs"));
        assert!(!kiosk.show_menu);
        assert!(!kiosk.rotation().is_playing());
        assert_eq!(kiosk.current_slide().unwrap().id(), "customs");
    }

    #[test]
    fn no_slides_enabled() {
        let mut settings = AppSettings::default();
        settings.enabled_services.clear();
        let (_dir, mut kiosk, now) = kiosk_with(settings);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(kiosk.current_slide().is_none());
        assert!(!kiosk.update(now + Duration::from_secs(60), &mut rng));
    }

    #[test]
    fn saving_a_new_slide_set_restarts_rotation() {
        let (_dir, mut kiosk, now) = kiosk_with(AppSettings::default());
        let mut rng = StdRng::seed_from_u64(1);
        kiosk.next(now, &mut rng);
        kiosk.next(now, &mut rng);
        assert_eq!(kiosk.rotation().index(), 2);

        let mut settings = kiosk.settings().clone();
        settings.toggle_service("hero").unwrap();
        kiosk.save_settings(settings, now).unwrap();

        assert_eq!(kiosk.rotation().index(), 0);
        assert_eq!(kiosk.slides().len(), 21);
        assert_eq!(kiosk.current_slide().unwrap().id(), "golden-visa");
    }

    #[test]
    fn saving_a_new_duration_restarts_rotation() {
        let (_dir, mut kiosk, now) = kiosk_with(AppSettings::default());
        let mut rng = StdRng::seed_from_u64(1);
        kiosk.next(now, &mut rng);
        let later = now + Duration::from_secs(6);
        kiosk.update(later, &mut rng);
        assert_eq!(kiosk.rotation().index(), 1);
        assert!(kiosk.rotation().progress() > 0.4);

        let mut settings = kiosk.settings().clone();
        settings.slide_duration = 8.0;
        kiosk.save_settings(settings, later).unwrap();

        assert_eq!(kiosk.rotation().index(), 0);
        assert_eq!(kiosk.rotation().progress(), 0.0);
        assert_eq!(kiosk.rotation().duration(), Duration::from_secs(8));
        assert!(kiosk.rotation().is_playing());
    }

    #[test]
    fn override_save_is_visible_immediately() {
        let (_dir, mut kiosk, now) = kiosk_with(AppSettings::default());
        let mut settings = kiosk.settings().clone();
        settings
            .set_background_override("hero", "https://cdn.example/hero.jpg")
            .unwrap();
        kiosk.save_settings(settings, now).unwrap();
        assert_eq!(
            kiosk.slides()[0].background.as_deref(),
            Some("https://cdn.example/hero.jpg")
        );
    }

    #[test]
    fn toggling_shuffle_keeps_position_and_persists() {
        let (dir, mut kiosk, now) = kiosk_with(AppSettings::default());
        let mut rng = StdRng::seed_from_u64(1);
        kiosk.next(now, &mut rng);
        kiosk.toggle_shuffle(now).unwrap();

        assert!(kiosk.rotation().is_shuffle());
        assert_eq!(kiosk.rotation().index(), 1);
        let stored = SettingsStore::open(dir.path().join("settings.json"));
        assert!(stored.settings().slide_shuffle);
    }
}
