//! Calculator page component

use leptos::prelude::*;

use crate::components::Calculator;

#[component]
pub fn CalculatorPage() -> impl IntoView {
    view! {
        <div class="page calculator-page">
            <h1>"Calculator"</h1>
            <Calculator />
        </div>
    }
}
