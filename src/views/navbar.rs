use crate::theme;
use dioxus::prelude::*;
use crate:: {
    routes::Route,
};
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    // Restore the persisted theme once the document is mounted. The
    // toggle label is written by the controller, not by rsx, so the
    // indicator always reflects the flag actually present on the body.
    use_effect(|| theme::apply_saved_theme());

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar",
                div {
                    id: "navbar",
                    class: "navbar-inner",
                    div {
                        class: "navbar-links",
                        Link {
                            class: "navbar-link",
                            to: Route::Home,
                            "Home"
                        }
                    }
                    button {
                        id: theme::CONTROL_ID,
                        class: "mode-toggle-button",
                        onclick: move |_| theme::toggle_theme(),
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
