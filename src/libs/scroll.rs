use crate::libs::window_listener::{ use_window_listener, SCROLL_PAYLOAD };
use crate::utils::motion::ScrollMetrics;
use dioxus::prelude::*;

/// Page scroll progress in `[0, 1]`, updated while the calling component is mounted
pub fn use_scroll_progress() -> Signal<f64> {
    let mut progress = use_signal(|| 0.0_f64);

    let on_scroll = use_callback(move |metrics: ScrollMetrics| {
        let next = metrics.progress();
        if *progress.peek() != next {
            progress.set(next);
        }
    });

    use_window_listener("scroll", SCROLL_PAYLOAD, on_scroll);

    progress
}

/// Marks `[data-reveal]` elements with `in-view` the first time they enter the viewport
const REVEAL_ON_SCROLL_SCRIPT: &str = r#"
  const pending = document.querySelectorAll("[data-reveal]:not(.in-view)");
  if ("IntersectionObserver" in window) {
      const observer = new IntersectionObserver((entries) => {
          for (const entry of entries) {
              if (entry.isIntersecting) {
                  entry.target.classList.add("in-view");
                  observer.unobserve(entry.target);
              }
          }
      }, { rootMargin: "-100px 0px" });
      pending.forEach((element) => observer.observe(element));
  } else {
      pending.forEach((element) => element.classList.add("in-view"));
  }
"#;

/// Animates the sections of the calling page into view once each
pub fn use_reveal_on_scroll() {
    use_effect(move || {
        let _ = document::eval(REVEAL_ON_SCROLL_SCRIPT);
    });
}
