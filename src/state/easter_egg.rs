//! Reveal state for the hidden terminal overlay

use dioxus::core::Task;
use std::future::Future;
use std::time::Duration;

/// How long the terminal stays on screen after the code is entered
pub const REVEAL_DURATION: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Idle,
    Revealed,
}

/// Whether the terminal overlay is currently shown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EasterEgg {
    phase: RevealPhase,
    reveals: u32,
}

impl EasterEgg {
    pub fn new() -> Self {
        Self::default()
    }

    /// idle -> revealed. Re-entering while already revealed keeps it revealed.
    pub fn reveal(&mut self) {
        self.phase = RevealPhase::Revealed;
        self.reveals += 1;
    }

    /// revealed -> idle
    pub fn expire(&mut self) {
        self.phase = RevealPhase::Idle;
    }

    pub fn is_active(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Number of reveals in this session; also keys the overlay so its typing animation restarts
    pub fn reveals(&self) -> u32 {
        self.reveals
    }
}

/// Waits out the reveal window, then runs `expire`.
/// Generic over the timer so it runs on the UI runtime and under a paused test clock alike.
pub async fn hold_reveal<S, F>(sleep: S, expire: impl FnOnce())
    where S: FnOnce(Duration) -> F, F: Future<Output = ()>
{
    sleep(REVEAL_DURATION).await;
    expire();
}

/// Handle to the pending revert task
#[derive(Default)]
pub struct RevealTimer {
    pending: Option<Task>,
}

impl RevealTimer {
    /// Keeps the handle of the newest revert task.
    /// An older task keeps running: its window started earlier and still closes on time.
    pub fn track(&mut self, task: Task) {
        self.pending = Some(task);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Stops the revert task, if any. Only used when the page goes away.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{ Arc, Mutex };

    #[test]
    fn starts_idle() {
        let egg = EasterEgg::new();
        assert!(!egg.is_active());
        assert_eq!(egg.phase, RevealPhase::Idle);
        assert_eq!(egg.reveals(), 0);
    }

    #[test]
    fn reveal_then_expire_returns_to_idle() {
        let mut egg = EasterEgg::new();
        egg.reveal();
        assert!(egg.is_active());
        assert_eq!(egg.phase, RevealPhase::Revealed);
        egg.expire();
        assert!(!egg.is_active());
        assert_eq!(egg.reveals(), 1);
    }

    #[test]
    fn second_reveal_is_counted() {
        let mut egg = EasterEgg::new();
        egg.reveal();
        egg.expire();
        egg.reveal();
        assert!(egg.is_active());
        assert_eq!(egg.reveals(), 2);
    }

    #[test]
    fn empty_timer_cancel_is_a_no_op() {
        let mut timer = RevealTimer::default();
        assert!(!timer.is_pending());
        timer.cancel();
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_reverts_after_exactly_six_seconds() {
        let egg = Arc::new(Mutex::new(EasterEgg::new()));
        egg.lock().unwrap().reveal();

        let shared = egg.clone();
        let revert = tokio::spawn(
            hold_reveal(tokio::time::sleep, move || shared.lock().unwrap().expire())
        );

        tokio::time::sleep(Duration::from_millis(5999)).await;
        assert!(egg.lock().unwrap().is_active());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!egg.lock().unwrap().is_active());

        revert.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn hold_reveal_sleeps_for_reveal_duration() {
        let start = tokio::time::Instant::now();
        let mut expired = false;
        hold_reveal(tokio::time::sleep, || {
            expired = true;
        }).await;
        assert!(expired);
        assert!(start.elapsed() >= REVEAL_DURATION);
        assert!(start.elapsed() < REVEAL_DURATION + Duration::from_millis(5));
    }
}
