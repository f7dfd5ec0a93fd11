use dioxus::prelude::*;

use crate::{
    domain::{format_usd, AppState, CostEstimate, Destination, PriceInputError, ShippingMethod},
    ui::components::decor::{BrushAccent, PageHero, ShojiCard},
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let inputs = state.with(|st| st.calculator.clone());
    let breakdown = inputs.breakdown();

    rsx! {
        PageHero {
            kanji: "費用計算",
            title: "Cost Calculator",
            intro: "Estimate the total cost of importing your dream car from Japan. Get a detailed breakdown of all fees and charges.",
        }

        section { class: "section",
            div { class: "container grid grid-2",
                ShojiCard {
                    h2 { class: "card-heading", "Enter Details" }

                    label { class: "field-label", r#for: "vehicle-price", "Vehicle Price (USD)" }
                    input {
                        id: "vehicle-price",
                        class: "field-input",
                        r#type: "number",
                        min: "0",
                        step: "any",
                        placeholder: "25000",
                        value: "{inputs.price_input}",
                        oninput: move |evt| state.with_mut(|st| st.calculator.price_input = evt.value()),
                    }

                    label { class: "field-label", r#for: "destination", "Destination Country" }
                    select {
                        id: "destination",
                        class: "field-input",
                        onchange: move |evt| {
                            if let Some(destination) = Destination::from_key(&evt.value()) {
                                state.with_mut(|st| st.calculator.destination = destination);
                            }
                        },
                        for destination in Destination::ALL {
                            option {
                                value: destination.key(),
                                selected: destination == inputs.destination,
                                "{destination.name()}"
                            }
                        }
                    }

                    label { class: "field-label", r#for: "shipping", "Shipping Method" }
                    select {
                        id: "shipping",
                        class: "field-input",
                        onchange: move |evt| {
                            if let Some(shipping) = ShippingMethod::from_key(&evt.value()) {
                                state.with_mut(|st| st.calculator.shipping = shipping);
                            }
                        },
                        for shipping in ShippingMethod::ALL {
                            option {
                                value: shipping.key(),
                                selected: shipping == inputs.shipping,
                                "{shipping.name()} ({format_usd(shipping.base_cost())})"
                            }
                        }
                    }
                }

                ShojiCard {
                    h2 { class: "card-heading", "Cost Breakdown" }
                    {render_breakdown(breakdown)}
                }
            }
            BrushAccent { kanji: "計算" }
        }
    }
}

fn render_breakdown(breakdown: Result<CostEstimate, PriceInputError>) -> Element {
    match breakdown {
        Ok(estimate) => {
            let total = format_usd(estimate.total);
            let rows = estimate
                .line_items()
                .into_iter()
                .map(|item| (item.label, format_usd(item.amount)))
                .collect::<Vec<_>>();

            rsx! {
                dl { class: "breakdown",
                    for (label, amount) in rows {
                        div { class: "breakdown-row",
                            dt { class: "muted", "{label}" }
                            dd { "{amount}" }
                        }
                    }
                    div { class: "breakdown-row breakdown-total",
                        dt { "Total Estimated Cost" }
                        dd { "{total}" }
                    }
                }
                p { class: "muted small disclaimer",
                    "This is an estimate only. Actual costs may vary based on vehicle specifics, exchange rates, and current regulations. Contact us for a detailed quote."
                }
            }
        }
        Err(PriceInputError::Empty) => rsx! {
            div { class: "empty-state",
                span { class: "empty-icon", "🧮" }
                p { class: "muted", "{PriceInputError::Empty}" }
            }
        },
        Err(err) => rsx! {
            p { class: "field-error", "⚠ {err}" }
        },
    }
}
