use crate::libs::window_listener::{ use_window_listener, KEY_PAYLOAD };
use crate::state::easter_egg::{ hold_reveal, EasterEgg, RevealTimer, REVEAL_DURATION };
use crate::state::konami::KeySequenceBuffer;
use crate::utils::delay::Delay;
use crate::debug_print;
use dioxus::prelude::*;

/// Feeds one key press into the session and reveals the terminal on a match.
/// Returns `true` when the caller should schedule the revert.
pub fn handle_key(
    sequence: &mut KeySequenceBuffer,
    easter_egg: &mut EasterEgg,
    key: impl Into<String>
) -> bool {
    if !sequence.push(key) {
        return false;
    }
    easter_egg.reveal();
    true
}

/// Watches every key pressed on the page and reveals the terminal when the code is typed.
///
/// The buffer, reveal flag and timer belong to the calling component: mounting it starts a
/// fresh session, unmounting it removes the key listener and cancels a pending revert.
pub fn use_konami_reveal() -> Signal<EasterEgg> {
    let mut sequence = use_signal(KeySequenceBuffer::new);
    let mut easter_egg = use_signal(EasterEgg::new);
    let mut reveal_timer = use_signal(RevealTimer::default);

    let on_key = use_callback(move |key: String| {
        let matched = handle_key(&mut sequence.write(), &mut easter_egg.write(), key);
        if !matched {
            return;
        }

        debug_print!(
            "🎉 Secret sequence entered (reveal #{}), showing terminal for {}ms",
            easter_egg.peek().reveals(),
            REVEAL_DURATION.as_millis()
        );

        let task = spawn(async move {
            hold_reveal(Delay::for_duration, move || {
                easter_egg.write().expire();
                debug_print!("🙈 Terminal hidden again");
            }).await;
        });
        reveal_timer.write().track(task);
    });

    use_window_listener("keydown", KEY_PAYLOAD, on_key);

    use_drop(move || {
        if let Ok(mut timer) = reveal_timer.try_write() {
            if timer.is_pending() {
                debug_print!("⏹️ Cancelling pending terminal revert");
            }
            timer.cancel();
        }
    });

    easter_egg
}
