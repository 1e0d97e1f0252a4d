//! Pure Yew view components for the pace calculator UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use pace_calculator::config::DISTANCE_PRESETS;
use pace_calculator::{CalcError, Calculation};
use yew::prelude::*;

/// Renders the result panel for the last calculation attempt.
///
/// Displays either the derived value with its label, or the message
/// explaining why nothing was calculated.
pub fn render_result(outcome: &Option<Result<Calculation, CalcError>>) -> Html {
    let Some(outcome) = outcome else {
        return html! {};
    };

    match outcome {
        Ok(calc) => html! {
            <div class="result">
                <strong>{ format!("{}:", calc.solved.field().label()) }</strong>
                { format!(" {}", calc.solved.display()) }
            </div>
        },
        Err(CalcError::NeedExactlyTwo { .. }) => html! {
            <div class="result result-error">
                { "Please enter any " }<strong>{ "two" }</strong>{ " values to calculate the third." }
            </div>
        },
        Err(err) => html! {
            <div class="result result-error">{ err.to_string() }</div>
        },
    }
}

/// Text input with label and inline validation error.
#[derive(Properties, PartialEq)]
pub struct FieldRowProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub placeholder: AttrValue,
    pub text: String,
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
    pub onkeydown: Callback<KeyboardEvent>,
}

#[function_component(FieldRow)]
pub fn field_row(props: &FieldRowProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.to_string() }</label>
            <input
                type="text"
                id={props.id.clone()}
                value={props.text.clone()}
                placeholder={props.placeholder.clone()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                oninput={props.oninput.clone()}
                onkeydown={props.onkeydown.clone()}
            />
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Horizontal bar whose filled width grows as the pace gets faster.
#[derive(Properties, PartialEq)]
pub struct PaceGaugeProps {
    pub fill: f64,
}

#[function_component(PaceGauge)]
pub fn pace_gauge(props: &PaceGaugeProps) -> Html {
    html! {
        <div class="pace-gauge">
            <div class="gauge-track">
                <div class="gauge-fill" style={format!("width: {:.1}%", props.fill)}></div>
            </div>
            <div class="gauge-labels">
                <span>{ "Slower" }</span>
                <span>{ "Faster" }</span>
            </div>
        </div>
    }
}

/// Buttons that write a common race distance into the distance field.
#[derive(Properties, PartialEq)]
pub struct DistancePresetsProps {
    pub on_select: Callback<String>,
}

#[function_component(DistancePresets)]
pub fn distance_presets(props: &DistancePresetsProps) -> Html {
    html! {
        <div class="distance-presets">
            { DISTANCE_PRESETS.iter().map(|&(label, value)| {
                let on_select = props.on_select.clone();
                html! {
                    <button class="btn-secondary small"
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(value.to_string()))}
                    >
                        { label }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HelpPanelProps {
    pub visible: bool,
}

#[function_component(HelpPanel)]
pub fn help_panel(props: &HelpPanelProps) -> Html {
    if !props.visible {
        return html! {};
    }
    html! {
        <div class="help-content">
            <p>{ "Fill in any two fields and press Calculate (or Enter) to get the third." }</p>
            <ul>
                <li><strong>{ "Distance: " }</strong>{ "10, 10km, 10k, 10 kilometres, 10000m, 1500 meter, .5" }</li>
                <li><strong>{ "Time: " }</strong>{ "1:30:00, 45:30, 1h30m45s, 5m, or plain seconds like 90" }</li>
                <li><strong>{ "Pace: " }</strong>{ "per kilometer, same formats as time, e.g. 5:00 or 4m45s" }</li>
            </ul>
            <p>{ "After a calculation the page URL holds your inputs, so you can share or bookmark it." }</p>
        </div>
    }
}
