use crate::components::header::Header;
use crate::libs::routes::Route;
use dioxus::prelude::*;

pub fn app() -> Element {
    rsx! {
      // prettier-ignore
      Header {}

      Router::<Route> {}
    }
}
