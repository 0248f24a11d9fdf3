use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::audio::SoundPool;
use crate::config::KitSettings;
use crate::kit::{
    AnimatorState, EntranceAnimator, IndicatorBoard, KeyCode, KeyOutcome, KeyPressPlayer,
    KitDefinition, KitRegistry, TimerAction, TimerQueue,
};
use crate::traits::audio::AudioBackend;
use crate::traits::input::InputProvider;

/// Owns the kit state and routes load, key-down and timer events to the
/// two behaviors. Driven once per frame by the host loop.
pub struct DrumKitController<A: AudioBackend> {
    registry: KitRegistry,
    board: IndicatorBoard,
    sounds: SoundPool<A>,
    player: KeyPressPlayer,
    animator: EntranceAnimator,
    timers: TimerQueue<TimerAction>,
    settings: KitSettings,
    loaded: bool,
    input_enabled: bool,
}

impl<A: AudioBackend> DrumKitController<A> {
    /// Validate the kit, build the registry and load every sample.
    pub fn new(kit: &KitDefinition, settings: KitSettings, backend: A) -> Result<Self> {
        let (mut registry, board) =
            KitRegistry::build(kit, settings.mapping_policy).context("Invalid kit definition")?;
        let mut sounds = SoundPool::new(backend);
        let loaded = registry.load_sounds(&mut sounds, settings.volume);
        info!(
            "Kit ready: {} pads, {}/{} samples loaded",
            board.len(),
            loaded,
            registry.sound_count()
        );
        let mut keys: Vec<String> = registry.key_codes().map(|k| k.label()).collect();
        keys.sort();
        debug!("Mapped keys: {}", keys.join(" "));

        Ok(Self {
            registry,
            board,
            sounds,
            player: KeyPressPlayer::new(settings.highlight_ms),
            animator: EntranceAnimator::new(settings.reveal_step_ms),
            timers: TimerQueue::new(),
            settings,
            loaded: false,
            input_enabled: false,
        })
    }

    /// The load event: start the entrance animation and arm key handling.
    pub fn on_load(&mut self, now_ms: u64) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.animator.start(now_ms, &mut self.board, &mut self.timers);

        match self
            .settings
            .input_delay
            .delay_ms(self.board.len(), self.settings.reveal_step_ms)
        {
            Some(delay) => {
                debug!("Key handling starts in {} ms", delay);
                self.timers
                    .schedule(now_ms + delay, TimerAction::EnableInput);
            }
            None => self.input_enabled = true,
        }
    }

    /// Dispatch a key-down. Keys are ignored until input is enabled.
    pub fn on_key_down(&mut self, key_code: KeyCode, now_ms: u64) -> KeyOutcome {
        if !self.input_enabled {
            return KeyOutcome::Ignored;
        }
        self.player.on_key_down(
            key_code,
            now_ms,
            &self.registry,
            &mut self.board,
            &mut self.sounds,
            &mut self.timers,
        )
    }

    /// Fire every timer due at `now_ms`, including ones scheduled by timers
    /// fired in this call.
    pub fn tick(&mut self, now_ms: u64) {
        while let Some((timer, deadline, action)) = self.timers.pop_due(now_ms) {
            match action {
                TimerAction::ClearHighlight(indicator) => {
                    self.player.on_clear(timer, indicator, &mut self.board);
                }
                TimerAction::Reveal(index) => {
                    self.animator
                        .on_timer(timer, index, deadline, &mut self.board, &mut self.timers);
                }
                TimerAction::EnableInput => {
                    debug!("Key handling enabled");
                    self.input_enabled = true;
                }
            }
        }
    }

    /// One frame: fire due timers, then dispatch the frame's key-downs in order.
    pub fn update<I: InputProvider + ?Sized>(&mut self, input: &mut I, now_ms: u64) {
        self.tick(now_ms);
        for event in input.poll_events(now_ms) {
            self.on_key_down(event.key_code, now_ms);
        }
    }

    /// One host frame. Returns `false` once the host asked to quit, after
    /// tearing the kit down.
    pub fn frame<I: InputProvider + ?Sized>(&mut self, input: &mut I, now_ms: u64) -> bool {
        self.update(input, now_ms);
        if input.quit_requested() {
            self.teardown();
            return false;
        }
        true
    }

    /// Cancel every pending timer and release the audio backend.
    pub fn teardown(&mut self) {
        self.animator.cancel(&mut self.timers);
        self.player.cancel_all(&mut self.board, &mut self.timers);
        self.timers.clear();
        self.input_enabled = false;
        if let Err(e) = self.sounds.dispose() {
            warn!("Failed to release audio: {:#}", e);
        }
    }

    pub fn board(&self) -> &IndicatorBoard {
        &self.board
    }

    pub fn registry(&self) -> &KitRegistry {
        &self.registry
    }

    pub fn sounds(&self) -> &SoundPool<A> {
        &self.sounds
    }

    pub fn settings(&self) -> &KitSettings {
        &self.settings
    }

    pub fn animator_state(&self) -> AnimatorState {
        self.animator.state()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
