use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container",
            h1 {
                class: "page-title",
                "Student Achievement Portal"
            }
            p {
                class: "page-subtitle",
                "Browse recorded achievements, and use the toggle in the navigation bar to switch between light and dark mode."
            }
        }
    }
}
