use dioxus::prelude::*;

/// Text input that flags itself when `invalid` is set.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] invalid: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onblur: EventHandler<FocusEvent>,
) -> Element {
    let input_type = r#type;
    let state = if invalid { "input input--invalid" } else { "input" };
    let aria_invalid = if invalid { "true" } else { "false" };

    rsx! {
        input {
            id: id,
            name: name,
            r#type: input_type,
            placeholder: placeholder,
            value: value,
            disabled: disabled,
            class: "{state} {class}",
            "aria-invalid": aria_invalid,
            oninput: move |evt| oninput.call(evt),
            onblur: move |evt| onblur.call(evt),
        }
    }
}
