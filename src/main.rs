//! Main module for the pace calculator application using Yew.
//! Wires UI components, field hooks, and side-effect logic.

use log::warn;
use pace_calculator::config::*;
use pace_calculator::gauge::GaugeScale;
use pace_calculator::{
    calculate_and_notify, logger, CalcError, Calculation, CalculationSink, CalculatorConfig,
    Field, Inputs, ShareState,
};
use yew::prelude::*;

mod browser;
mod components;
mod hooks;

use components::{render_result, DistancePresets, FieldRow, HelpPanel, PaceGauge};
use hooks::{use_field_input, FieldInput};

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Sends calculation side effects to the gauge state and the browser URL.
struct PageSink {
    scale: GaugeScale,
    gauge_fill: UseStateHandle<Option<f64>>,
}

impl CalculationSink for PageSink {
    fn publish_pace(&mut self, pace_s_per_km: f64) {
        self.gauge_fill.set(Some(self.scale.fill(pace_s_per_km)));
    }

    fn publish_share(&mut self, state: &ShareState) {
        if let Err(e) = browser::push_share_state(state) {
            warn!("Could not update page URL: {:?}", e);
        }
    }
}

/// Enter in a field triggers a calculation
fn enter_key_callback(calculate: &Callback<Option<Inputs>>) -> Callback<KeyboardEvent> {
    let calculate = calculate.clone();
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            calculate.emit(None);
        }
    })
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let config = CalculatorConfig::default();
    let distance = use_field_input();
    let time = use_field_input();
    let pace = use_field_input();

    let outcome = use_state(|| None::<Result<Calculation, CalcError>>);
    let gauge_fill = use_state(|| None::<f64>);
    let help_visible = use_state(|| false);

    // Reads the current field text unless the caller supplies inputs directly
    let calculate = {
        let distance = distance.clone();
        let time = time.clone();
        let pace = pace.clone();
        let outcome = outcome.clone();
        let gauge_fill = gauge_fill.clone();
        Callback::from(move |inputs_override: Option<Inputs>| {
            let inputs = inputs_override
                .unwrap_or_else(|| Inputs::new(&distance.text, &time.text, &pace.text));
            let mut sink = PageSink {
                scale: config.gauge,
                gauge_fill: gauge_fill.clone(),
            };
            let result = calculate_and_notify(&inputs, &config, &mut sink);

            let invalid = result
                .as_ref()
                .err()
                .map(CalcError::invalid_fields)
                .unwrap_or_default();
            let fields = [(Field::Distance, &distance), (Field::Time, &time), (Field::Pace, &pace)];
            for (field, input) in fields {
                input
                    .set_error
                    .emit(invalid.contains(&field).then(|| MSG_INVALID_FIELD.to_string()));
            }
            outcome.set(Some(result));
        })
    };

    // Fill fields from the URL on mount and calculate if a pair was shared
    {
        let set_distance = distance.set_text.clone();
        let set_time = time.set_text.clone();
        let set_pace = pace.set_text.clone();
        let calculate = calculate.clone();
        use_effect_with((), move |_| {
            let state = browser::read_share_state();
            for (value, setter) in [
                (&state.distance, &set_distance),
                (&state.time, &set_time),
                (&state.pace, &set_pace),
            ] {
                if let Some(text) = value {
                    setter.emit(text.clone());
                }
            }
            if state.should_autorun() {
                calculate.emit(Some(state.to_inputs()));
            }
            || ()
        });
    }

    let reset = {
        let fields: [FieldInput; 3] = [distance.clone(), time.clone(), pace.clone()];
        let outcome = outcome.clone();
        let gauge_fill = gauge_fill.clone();
        Callback::from(move |_: MouseEvent| {
            for field in &fields {
                field.set_text.emit(String::new());
                field.set_error.emit(None);
            }
            outcome.set(None);
            gauge_fill.set(None);
        })
    };

    let toggle_help = {
        let help_visible = help_visible.clone();
        Callback::from(move |_: MouseEvent| help_visible.set(!*help_visible))
    };

    html! {
        <div class="container">
            <h1>{ "Pace Calculator" }</h1>

            <FieldRow
                id="distance"
                label="Distance"
                placeholder={PLACEHOLDER_DISTANCE}
                text={distance.text.clone()}
                error={distance.error.clone()}
                oninput={distance.on_text_input.clone()}
                onkeydown={enter_key_callback(&calculate)}
            />
            <DistancePresets on_select={distance.set_text.clone()} />

            <FieldRow
                id="time"
                label="Time"
                placeholder={PLACEHOLDER_TIME}
                text={time.text.clone()}
                error={time.error.clone()}
                oninput={time.on_text_input.clone()}
                onkeydown={enter_key_callback(&calculate)}
            />

            <FieldRow
                id="pace"
                label="Pace (per km)"
                placeholder={PLACEHOLDER_PACE}
                text={pace.text.clone()}
                error={pace.error.clone()}
                oninput={pace.on_text_input.clone()}
                onkeydown={enter_key_callback(&calculate)}
            />

            <div class="button-row">
                <button class="btn-primary" onclick={calculate.reform(|_: MouseEvent| None)}>
                    { "Calculate" }
                </button>
                <button class="btn-secondary" onclick={reset}>{ "Reset" }</button>
                <button class="btn-secondary"
                    aria-expanded={(*help_visible).to_string()}
                    onclick={toggle_help}
                >
                    { "Help" }
                </button>
            </div>

            <div class="results-area">
                { render_result(&outcome) }
                if let Some(fill) = *gauge_fill {
                    <PaceGauge {fill} />
                }
            </div>

            <HelpPanel visible={*help_visible} />
        </div>
    }
}

/// Entry point: installs logging and initializes the Yew renderer.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    // A logger can only be installed once; keep the existing one if present
    let _ = logger::init(DEFAULT_LOG_LEVEL);
    yew::Renderer::<Main>::new().render();
}
