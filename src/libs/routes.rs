use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn Layout() -> Element {
    rsx! {
      div { class: "min-h-screen page-background",
        // Outlet for nested routes
        Outlet::<Route> {}
      }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
      crate::components::pages::HomePage {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
      crate::components::pages::NotFoundPage { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn root_path_is_the_portfolio() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
        assert_eq!(Route::Home {}.to_string(), "/");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            Route::from_str("/blog/2024").ok(),
            Some(Route::NotFound { segments: vec!["blog".to_string(), "2024".to_string()] })
        );
    }
}
