use crate::audio::AudioEngine;
use crate::core::{
    AudioSettings, DistanceModel, KeyState, PanningModel, RoomPreset, SceneSnapshot, SoundType,
    SpatialScene,
};
use crate::error::AudioError;
use crate::hud::AudioStatus;
use web_sys as web;

/// Everything the page mutates: scene, held keys, control-surface settings
/// and (once the user has started it) the audio graph.
pub struct App {
    pub scene: SpatialScene,
    pub keys: KeyState,
    pub settings: AudioSettings,
    audio: Option<AudioEngine>,
    audio_failed: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            scene: SpatialScene::default(),
            keys: KeyState::default(),
            settings: AudioSettings::default(),
            audio: None,
            audio_failed: false,
        }
    }

    /// Build the graph on the first user gesture. Later calls only resume.
    pub fn ensure_audio(&mut self) -> Result<(), AudioError> {
        if let Some(audio) = &self.audio {
            audio.resume();
            return Ok(());
        }
        match AudioEngine::new(&self.settings, &self.scene.snapshot()) {
            Ok(audio) => {
                audio.resume();
                self.audio = Some(audio);
                self.audio_failed = false;
                Ok(())
            }
            Err(e) => {
                self.audio_failed = true;
                Err(e)
            }
        }
    }

    pub fn audio_context(&self) -> Option<web::AudioContext> {
        self.audio.as_ref().map(|a| a.context())
    }

    pub fn status(&self) -> AudioStatus {
        if self.audio_failed {
            AudioStatus::Unavailable
        } else if self.scene.playing() {
            AudioStatus::On
        } else {
            AudioStatus::Off
        }
    }

    /// One animation frame: integrate keys, push the result into the graph.
    pub fn tick(&mut self) -> SceneSnapshot {
        let snapshot = self.scene.step(&self.keys);
        if let Some(audio) = self.audio.as_mut() {
            audio.apply_snapshot(&snapshot);
        }
        snapshot
    }

    pub fn reset_position(&mut self) -> SceneSnapshot {
        let snapshot = self.scene.reset();
        if let Some(audio) = self.audio.as_mut() {
            audio.apply_snapshot(&snapshot);
        }
        snapshot
    }

    pub fn toggle_playback(&mut self) {
        if self.scene.playing() {
            self.stop();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        let Some(audio) = self.audio.as_mut() else {
            return;
        };
        let started = audio.start_source(&self.settings);
        self.scene.set_playing(started);
        log::info!(
            "[audio] play sound={} started={}",
            self.settings.sound.name(),
            started
        );
    }

    pub fn stop(&mut self) {
        if let Some(audio) = self.audio.as_mut() {
            audio.stop_source();
        }
        self.scene.set_playing(false);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.settings.volume = volume.clamp(0.0, 1.0);
        if let Some(audio) = &self.audio {
            audio.set_volume(self.settings.volume);
        }
    }

    pub fn set_frequency(&mut self, frequency_hz: f32) {
        self.settings.frequency_hz = frequency_hz;
        if let Some(audio) = &self.audio {
            audio.set_frequency(frequency_hz);
        }
    }

    pub fn set_sound_type(&mut self, sound: SoundType) {
        self.settings.sound = sound;
        if self.scene.playing() {
            self.play();
        }
    }

    pub fn set_panning_model(&mut self, model: PanningModel) {
        self.settings.panning = model;
        if let Some(audio) = &self.audio {
            audio.set_panning_model(model);
        }
    }

    pub fn set_distance_model(&mut self, model: DistanceModel) {
        self.settings.distance = model;
        if let Some(audio) = &self.audio {
            audio.set_distance_model(model);
        }
    }

    pub fn set_reverb_enabled(&mut self, enabled: bool) {
        self.scene.set_reverb_enabled(enabled);
    }

    pub fn set_reverb_amount(&mut self, amount: f32) {
        self.scene.set_reverb_amount(amount);
    }

    pub fn set_air_absorption_enabled(&mut self, enabled: bool) {
        self.scene.set_air_absorption_enabled(enabled);
    }

    /// Regenerates the reverb kernel synchronously. Before the graph exists the
    /// choice is kept and used for its first kernel.
    pub fn set_room(&mut self, room: RoomPreset) -> Result<(), AudioError> {
        self.settings.room = Some(room);
        match self.audio.as_mut() {
            Some(audio) => audio.set_room(room.shape()),
            None => Ok(()),
        }
    }

    /// Install a decoded sample, switch to it and restart playback if needed.
    pub fn install_custom_sample(&mut self, buffer: web::AudioBuffer) {
        let Some(audio) = self.audio.as_mut() else {
            return;
        };
        audio.set_custom_sample(buffer);
        self.settings.sound = SoundType::Custom;
        if self.scene.playing() {
            self.play();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
