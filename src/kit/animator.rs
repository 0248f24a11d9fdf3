use tracing::debug;

use super::{IndicatorBoard, IndicatorId, TimerAction, TimerId, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// Waiting for the load event.
    Idle,
    /// The pad at `next` is revealed when `timer` fires.
    Running { next: usize, timer: TimerId },
    /// Every pad is visible.
    Finished,
    /// Torn down before the sequence completed.
    Cancelled,
}

/// Reveals pads left to right, one every `step_ms`, starting at load.
#[derive(Debug)]
pub struct EntranceAnimator {
    step_ms: u64,
    state: AnimatorState,
}

impl EntranceAnimator {
    pub fn new(step_ms: u64) -> Self {
        Self {
            step_ms,
            state: AnimatorState::Idle,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn step_ms(&self) -> u64 {
        self.step_ms
    }

    /// Time from load until the last of `pad_count` pads is revealed and its
    /// step has elapsed.
    pub fn total_duration_ms(pad_count: usize, step_ms: u64) -> u64 {
        pad_count as u64 * step_ms
    }

    /// Reveal the first pad and schedule the rest. Only the first call has an effect.
    pub fn start(
        &mut self,
        now_ms: u64,
        board: &mut IndicatorBoard,
        timers: &mut TimerQueue<TimerAction>,
    ) -> Option<IndicatorId> {
        if self.state != AnimatorState::Idle {
            return None;
        }
        debug!("Entrance animation started for {} pads", board.len());
        self.reveal(0, now_ms, board, timers)
    }

    /// Handle a fired reveal timer. `deadline_ms` is the time the step was due,
    /// so a late frame does not push the following steps back.
    pub fn on_timer(
        &mut self,
        timer: TimerId,
        index: usize,
        deadline_ms: u64,
        board: &mut IndicatorBoard,
        timers: &mut TimerQueue<TimerAction>,
    ) -> Option<IndicatorId> {
        match self.state {
            AnimatorState::Running { next, timer: pending } if pending == timer && next == index => {
                self.reveal(index, deadline_ms, board, timers)
            }
            _ => None,
        }
    }

    /// Cancel the pending reveal, if any.
    pub fn cancel(&mut self, timers: &mut TimerQueue<TimerAction>) {
        if let AnimatorState::Running { timer, .. } = self.state {
            timers.cancel(timer);
            self.state = AnimatorState::Cancelled;
        }
    }

    fn reveal(
        &mut self,
        index: usize,
        at_ms: u64,
        board: &mut IndicatorBoard,
        timers: &mut TimerQueue<TimerAction>,
    ) -> Option<IndicatorId> {
        let id = IndicatorId(index);
        let Some(indicator) = board.get_mut(id) else {
            self.state = AnimatorState::Finished;
            return None;
        };
        indicator.reveal(at_ms);

        let next = index + 1;
        self.state = if next < board.len() {
            let timer = timers.schedule(at_ms + self.step_ms, TimerAction::Reveal(next));
            AnimatorState::Running { next, timer }
        } else {
            debug!("Entrance animation finished");
            AnimatorState::Finished
        };
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::{Indicator, KeyCode, PadSpec};
    use proptest::prelude::*;

    fn board(count: usize) -> IndicatorBoard {
        let mut board = IndicatorBoard::new();
        for i in 0..count {
            board.push(Indicator::new(&PadSpec {
                key_code: KeyCode(65 + i as u32),
                label: None,
                name: format!("pad{i}"),
            }));
        }
        board
    }

    /// Fire reveal timers until `now_ms`, returning revealed indices.
    fn run_until(
        animator: &mut EntranceAnimator,
        now_ms: u64,
        board: &mut IndicatorBoard,
        timers: &mut TimerQueue<TimerAction>,
    ) -> Vec<usize> {
        let mut revealed = Vec::new();
        while let Some((timer, deadline, action)) = timers.pop_due(now_ms) {
            if let TimerAction::Reveal(index) = action {
                if let Some(id) = animator.on_timer(timer, index, deadline, board, timers) {
                    revealed.push(id.0);
                }
            }
        }
        revealed
    }

    #[test]
    fn reveals_in_sequence() {
        let mut board = board(3);
        let mut timers = TimerQueue::new();
        let mut animator = EntranceAnimator::new(100);

        assert_eq!(animator.start(0, &mut board, &mut timers), Some(IndicatorId(0)));
        assert_eq!(board.visible_count(), 1);

        assert!(run_until(&mut animator, 99, &mut board, &mut timers).is_empty());
        assert_eq!(run_until(&mut animator, 100, &mut board, &mut timers), vec![1]);
        assert_eq!(run_until(&mut animator, 250, &mut board, &mut timers), vec![2]);
        assert_eq!(animator.state(), AnimatorState::Finished);
        assert!(timers.is_empty());

        let times: Vec<_> = board.iter().map(|(_, i)| i.visible_since_ms()).collect();
        assert_eq!(times, vec![Some(0), Some(100), Some(200)]);
    }

    #[test]
    fn late_frame_catches_up_without_drift() {
        let mut board = board(4);
        let mut timers = TimerQueue::new();
        let mut animator = EntranceAnimator::new(100);
        animator.start(0, &mut board, &mut timers);

        assert_eq!(run_until(&mut animator, 320, &mut board, &mut timers), vec![1, 2, 3]);
        let times: Vec<_> = board.iter().map(|(_, i)| i.visible_since_ms()).collect();
        assert_eq!(times, vec![Some(0), Some(100), Some(200), Some(300)]);
    }

    #[test]
    fn empty_board_finishes_immediately() {
        let mut board = board(0);
        let mut timers = TimerQueue::new();
        let mut animator = EntranceAnimator::new(100);
        assert_eq!(animator.start(0, &mut board, &mut timers), None);
        assert_eq!(animator.state(), AnimatorState::Finished);
        assert!(timers.is_empty());
    }

    #[test]
    fn start_only_once() {
        let mut board = board(2);
        let mut timers = TimerQueue::new();
        let mut animator = EntranceAnimator::new(100);
        animator.start(0, &mut board, &mut timers);
        assert_eq!(animator.start(50, &mut board, &mut timers), None);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn cancel_stops_the_sequence() {
        let mut board = board(3);
        let mut timers = TimerQueue::new();
        let mut animator = EntranceAnimator::new(100);
        animator.start(0, &mut board, &mut timers);
        animator.cancel(&mut timers);

        assert_eq!(animator.state(), AnimatorState::Cancelled);
        assert!(timers.is_empty());
        assert!(run_until(&mut animator, 1000, &mut board, &mut timers).is_empty());
        assert_eq!(board.visible_count(), 1);
    }

    #[test]
    fn total_duration() {
        assert_eq!(EntranceAnimator::total_duration_ms(9, 100), 900);
        assert_eq!(EntranceAnimator::total_duration_ms(0, 100), 0);
    }

    proptest! {
        #[test]
        fn pad_i_visible_at_i_steps(count in 0usize..20, step in 1u64..200, frame in 1u64..50) {
            let mut board = board(count);
            let mut timers = TimerQueue::new();
            let mut animator = EntranceAnimator::new(step);
            animator.start(0, &mut board, &mut timers);

            let mut now = 0;
            while !timers.is_empty() {
                now += frame;
                run_until(&mut animator, now, &mut board, &mut timers);
            }

            prop_assert_eq!(board.visible_count(), count);
            for (id, indicator) in board.iter() {
                prop_assert_eq!(indicator.visible_since_ms(), Some(id.0 as u64 * step));
            }
        }
    }
}
