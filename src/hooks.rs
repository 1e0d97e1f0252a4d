use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for one calculator text field.
#[derive(Clone, PartialEq)]
pub struct FieldInput {
    /// The current text content of the input field.
    pub text: String,
    /// Inline error shown under the field, if its last calculation failed to parse it.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the internal text state.
    pub on_text_input: Callback<InputEvent>,
    /// Replace the text programmatically (presets, URL load, reset).
    pub set_text: Callback<String>,
    pub set_error: Callback<Option<String>>,
}

/// Custom hook to manage the text and error state of a field.
#[hook]
pub fn use_field_input() -> FieldInput {
    let text_state_handle: UseStateHandle<String> = use_state(String::new);
    let error_state_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let set_text = {
        let text_setter = text_state_handle.clone();
        Callback::from(move |text: String| text_setter.set(text))
    };

    let set_error = {
        let error_setter = error_state_handle.clone();
        Callback::from(move |error: Option<String>| error_setter.set(error))
    };

    FieldInput {
        text: (*text_state_handle).clone(),
        error: (*error_state_handle).clone(),
        on_text_input,
        set_text,
        set_error,
    }
}
