use crate::libs::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
      main { class: "page not-found",
        h1 { class: "hero-title gradient-text", "<404 />" }
        p { class: "text-muted", "Nothing lives at {path}" }
        Link { to: Route::Home {}, class: "btn-primary", "Back home" }
      }
    }
}
