//! Static plan comparison page.

use leptos::prelude::*;
use leptos_router::components::A;

struct Plan {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price: "$0",
        blurb: "Try natural-language SQL on your own schema.",
        features: &["10 queries per day*", "Table and chart views", "Saved chat history"],
        highlighted: false,
    },
    Plan {
        name: "Pro",
        price: "$19 / month",
        blurb: "For analysts who query every day.",
        features: &["Unlimited queries", "All models", "Database discovery", "Priority responses"],
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        price: "Contact us",
        blurb: "Teams with shared databases and compliance needs.",
        features: &["Everything in Pro", "Dedicated support**", "Custom integrations**"],
        highlighted: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing-page">
            <header class="pricing-page__title">
                <h1>"SQL " <span class="pricing-page__accent">"Chat"</span> " plans"</h1>
                <p>"Choose the plan that fits your SQL analysis needs"</p>
            </header>
            <div class="pricing-page__plans">
                {PLANS
                    .iter()
                    .map(|plan| {
                        view! {
                            <section class="plan" class:plan--highlighted=plan.highlighted>
                                <h2 class="plan__name">{plan.name}</h2>
                                <p class="plan__price">{plan.price}</p>
                                <p class="plan__blurb">{plan.blurb}</p>
                                <ul class="plan__features">
                                    {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="pricing-page__notes">
                <p>"*Free users are limited to 10 queries per day, refreshed daily."</p>
                <p>"**Enterprise plans include dedicated support and custom integrations."</p>
            </div>
            <A href="/chat">"Back to chat"</A>
        </div>
    }
}
