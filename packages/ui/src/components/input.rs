use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "form-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// A labelled text input with its validation message underneath.
#[component]
pub fn Input(
    id: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    value: String,
    #[props(default)] required: bool,
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type.clone();
    let class = if error.is_some() {
        "form-input invalid"
    } else {
        "form-input"
    };

    rsx! {
        div {
            class: "form-field",
            Label { html_for: id.clone(), "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                class: class,
                r#type: input_type,
                value: "{value}",
                required: required,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = error {
                span { class: "form-error", "{message}" }
            }
        }
    }
}
