use serde_json::json;
use yew::prelude::*;
use yew_router::components::Link;

use crate::analytics;
use crate::components::cost_calculator::CostCalculator;
use crate::components::social_proof::SocialProof;
use crate::pages::coupons;
use crate::pages::services::SERVICES;
use crate::promo::banner::PromoOffer;
use crate::promo::offer::Variant;
use crate::seo::{local_business, JsonLd, OFFICE_PHONE, OFFICE_PHONE_HREF};
use crate::Route;

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Rachel M.",
        "Tacoma",
        "Water heater died Sunday morning, new one running by 3pm. Quote on the phone matched the invoice to the dollar.",
    ),
    (
        "Steve K.",
        "Puyallup",
        "Third plumber we called was the first one to actually put a camera down the line before quoting. Saved us from a $9k dig we didn't need.",
    ),
    (
        "Ana L.",
        "Bellevue",
        "Tech showed up in the window, wore boot covers, explained everything. The coupon from the website came right off the bill.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_call_click = Callback::from(move |_: MouseEvent| {
        analytics::track_event("call_click", json!({ "placement": "hero" }));
    });

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page { color: #222; }
                    .home-hero {
                        background: linear-gradient(135deg, #0d47a1 0%, #1565c0 60%, #1e88e5 100%);
                        color: #fff; padding: 96px 20px 72px; text-align: center;
                    }
                    .home-hero h1 { font-size: 42px; margin: 0 0 12px 0; }
                    .home-hero p { font-size: 20px; opacity: 0.9; max-width: 620px; margin: 0 auto 28px; }
                    .hero-call {
                        display: inline-block; background: #e65100; color: #fff;
                        padding: 16px 32px; border-radius: 8px; font-size: 20px;
                        font-weight: bold; text-decoration: none;
                    }
                    .hero-badges { margin-top: 28px; display: flex; gap: 24px; justify-content: center; flex-wrap: wrap; }
                    .hero-badges span { font-size: 14px; opacity: 0.85; }
                    .home-section { max-width: 1080px; margin: 0 auto; padding: 56px 20px; }
                    .home-section h2 { font-size: 30px; }
                    .home-services { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 18px; }
                    .home-service-card {
                        background: #fff; border-radius: 12px; padding: 20px;
                        box-shadow: 0 4px 14px rgba(0,0,0,0.08);
                    }
                    .home-service-card h3 { margin-top: 0; }
                    .home-service-card a { color: #1565c0; font-weight: bold; text-decoration: none; }
                    .testimonials { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 18px; }
                    .testimonial {
                        background: #f7f9fc; border-left: 4px solid #1565c0;
                        border-radius: 8px; padding: 18px; font-style: italic;
                    }
                    .testimonial footer { font-style: normal; font-weight: bold; margin-top: 10px; }
                    .calculator-section { background: #eef3f8; }
                "#}
            </style>
            <JsonLd data={local_business()} />

            <section class="home-hero">
                <h1>{"Plumbing done right, across the Puget Sound"}</h1>
                <p>{"Licensed, bonded and insured. Same-day service for drains, water heaters and leaks - with flat-rate quotes before the work starts."}</p>
                <a class="hero-call" href={OFFICE_PHONE_HREF} onclick={on_call_click}>
                    { format!("Call {}", OFFICE_PHONE) }
                </a>
                <div class="hero-badges">
                    <span>{"★ 4.9 on Google (1,200+ reviews)"}</span>
                    <span>{"24/7 emergency dispatch"}</span>
                    <span>{"WA license #CASCAPL892JD"}</span>
                </div>
            </section>

            <section class="home-section">
                <PromoOffer
                    offer={coupons::drain_special()}
                    variant={Variant::Hero}
                    hide_if_expired={true}
                    include_structured_data={true}
                />
            </section>

            <section class="home-section">
                <h2>{"What we fix"}</h2>
                <div class="home-services">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <div class="home-service-card">
                                <h3>{ service.name }</h3>
                                <p>{ service.tagline }</p>
                                <Link<Route> to={Route::Service { slug: service.slug.to_string() }}>
                                    {"Learn more →"}
                                </Link<Route>>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="home-section calculator-section">
                <h2>{"Ballpark your job"}</h2>
                <CostCalculator />
            </section>

            <section class="home-section">
                <h2>{"Neighbors who'd call us again"}</h2>
                <div class="testimonials">
                    {
                        for TESTIMONIALS.iter().map(|(name, city, quote)| html! {
                            <blockquote class="testimonial">
                                { *quote }
                                <footer>{ format!("{} — {}", name, city) }</footer>
                            </blockquote>
                        })
                    }
                </div>
            </section>

            <SocialProof />
        </div>
    }
}
