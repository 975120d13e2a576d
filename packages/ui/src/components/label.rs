use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: html_for,
            class: "label {class}",
            {children}
        }
    }
}
