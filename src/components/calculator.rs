//! Calculator Component
//!
//! Keypad widget; every operation is one request to the arithmetic service.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_api::{CalculatorApi, Operation};

use crate::context::AppContext;
use crate::keypad::{Calculation, Keypad};

#[derive(Clone, Copy)]
enum Key {
    Digit(char),
    Decimal,
    Clear,
    Negate,
    Percent,
    Op(Operation),
    Equals,
}

/// Key caps, row by row
const LAYOUT: [Key; 19] = [
    Key::Clear, Key::Negate, Key::Percent, Key::Op(Operation::Divide),
    Key::Digit('7'), Key::Digit('8'), Key::Digit('9'), Key::Op(Operation::Multiply),
    Key::Digit('4'), Key::Digit('5'), Key::Digit('6'), Key::Op(Operation::Minus),
    Key::Digit('1'), Key::Digit('2'), Key::Digit('3'), Key::Op(Operation::Add),
    Key::Digit('0'), Key::Decimal, Key::Equals,
];

impl Key {
    fn label(self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Decimal => ".".to_string(),
            Key::Clear => "C".to_string(),
            Key::Negate => "±".to_string(),
            Key::Percent => "%".to_string(),
            Key::Op(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
        }
    }

    fn class(self) -> &'static str {
        match self {
            Key::Digit('0') => "calc-key number wide",
            Key::Digit(_) | Key::Decimal => "calc-key number",
            Key::Clear | Key::Negate | Key::Percent => "calc-key function",
            Key::Op(_) | Key::Equals => "calc-key operator",
        }
    }
}

#[component]
pub fn Calculator() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let api = StoredValue::new_local(CalculatorApi::new(ctx.api_config()));

    let keypad = RwSignal::new(Keypad::default());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let run = move |calculation: Calculation| {
        let Some(api) = api.try_get_value() else { return };
        set_loading.set(true);
        spawn_local(async move {
            match api.calculate(calculation.op, calculation.a, calculation.b).await {
                Ok(result) => {
                    let _ = keypad.try_update(|k| k.apply_result(&calculation, result));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "calculation failed");
                    let _ = set_error.try_set(Some(err.to_string()));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    let press = move |key: Key| {
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        let calculation = match key {
            Key::Digit(d) => { keypad.update(|k| k.input_digit(d)); None }
            Key::Decimal => { keypad.update(|k| k.input_decimal()); None }
            Key::Clear => { keypad.update(|k| k.clear()); None }
            Key::Negate => { keypad.update(|k| k.negate()); None }
            Key::Percent => { keypad.update(|k| k.percent()); None }
            Key::Op(op) => keypad.try_update(|k| k.press_operator(op)).flatten(),
            Key::Equals => keypad.with_untracked(|k| k.equals()),
        };
        if let Some(calculation) = calculation {
            run(calculation);
        }
    };

    let display = move || {
        if loading.get() {
            "...".to_string()
        } else {
            keypad.with(|k| k.display().to_string())
        }
    };
    let display_class = move || keypad.with(|k| match k.display().len() {
        0..=8 => "calc-display-value",
        9..=12 => "calc-display-value medium",
        _ => "calc-display-value small",
    });

    view! {
        <div class="calculator">
            <div class="calc-display">
                {move || error.get().map(|message| view! { <div class="calc-error">{message}</div> })}
                <div class=display_class>{display}</div>
            </div>
            <div class="calc-keys">
                {LAYOUT.into_iter().map(|key| view! {
                    <button type="button" class=key.class() on:click=move |_| press(key)>
                        {key.label()}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
