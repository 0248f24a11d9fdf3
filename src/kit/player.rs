use std::collections::HashMap;

use tracing::{trace, warn};

use super::{IndicatorBoard, IndicatorId, KeyCode, KitRegistry, TimerAction, TimerId, TimerQueue};
use crate::audio::SoundPool;
use crate::traits::audio::AudioBackend;

/// Result of a single key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No sound is bound to the key.
    Ignored,
    /// The sound was (re)started; `indicator` is the pad that was highlighted.
    Played { indicator: Option<IndicatorId> },
}

/// Plays the bound sample from the start and pulses the pad.
#[derive(Debug)]
pub struct KeyPressPlayer {
    highlight_ms: u64,
    /// Pending clear timer per pad.
    pending_clears: HashMap<IndicatorId, TimerId>,
}

impl KeyPressPlayer {
    pub fn new(highlight_ms: u64) -> Self {
        Self {
            highlight_ms,
            pending_clears: HashMap::new(),
        }
    }

    pub fn highlight_ms(&self) -> u64 {
        self.highlight_ms
    }

    pub fn on_key_down<A: AudioBackend>(
        &mut self,
        key_code: KeyCode,
        now_ms: u64,
        registry: &KitRegistry,
        board: &mut IndicatorBoard,
        sounds: &mut SoundPool<A>,
        timers: &mut TimerQueue<TimerAction>,
    ) -> KeyOutcome {
        let Some(entry) = registry.lookup(key_code) else {
            return KeyOutcome::Ignored;
        };
        let Some(slot) = entry.sound.as_ref() else {
            return KeyOutcome::Ignored;
        };

        match slot.sound {
            Some(id) => {
                if let Err(e) = sounds.restart(id) {
                    warn!("Failed to play {}: {:#}", slot.path.display(), e);
                }
            }
            None => trace!("Key {} has no loaded sample", key_code),
        }

        let Some(indicator_id) = entry.indicator else {
            return KeyOutcome::Played { indicator: None };
        };
        let Some(indicator) = board.get_mut(indicator_id) else {
            return KeyOutcome::Played { indicator: None };
        };
        indicator.highlight();

        if let Some(previous) = self.pending_clears.remove(&indicator_id) {
            timers.cancel(previous);
        }
        let timer = timers.schedule(
            now_ms + self.highlight_ms,
            TimerAction::ClearHighlight(indicator_id),
        );
        self.pending_clears.insert(indicator_id, timer);

        KeyOutcome::Played {
            indicator: Some(indicator_id),
        }
    }

    /// Handle a fired clear timer.
    pub fn on_clear(&mut self, timer: TimerId, indicator_id: IndicatorId, board: &mut IndicatorBoard) {
        if self.pending_clears.get(&indicator_id) == Some(&timer) {
            self.pending_clears.remove(&indicator_id);
        }
        if let Some(indicator) = board.get_mut(indicator_id) {
            indicator.clear_highlight();
        }
    }

    pub fn pending_clear(&self, indicator_id: IndicatorId) -> Option<TimerId> {
        self.pending_clears.get(&indicator_id).copied()
    }

    /// Cancel every pending clear and drop the highlights they would have removed.
    pub fn cancel_all(&mut self, board: &mut IndicatorBoard, timers: &mut TimerQueue<TimerAction>) {
        for (indicator_id, timer) in self.pending_clears.drain() {
            timers.cancel(timer);
            if let Some(indicator) = board.get_mut(indicator_id) {
                indicator.clear_highlight();
            }
        }
    }
}
