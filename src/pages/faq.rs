use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

use crate::seo::{faq_page, JsonLd};

/// One table drives both the accordion and the FAQPage structured data.
pub const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "Do you charge for estimates?",
        "No. Estimates are free and we quote a flat rate before any work starts, so the number you approve is the number on the invoice.",
    ),
    (
        "Are you licensed and insured?",
        "Yes - licensed, bonded and insured in Washington state, license #CASCAPL892JD. Every tech on the truck is background-checked.",
    ),
    (
        "How fast can you get here in an emergency?",
        "A live dispatcher answers 24/7 and the on-call truck typically reaches Tacoma, Puyallup and Federal Way within an hour. Seattle and the Eastside depend on traffic, but we'll give you an honest window on the phone.",
    ),
    (
        "Do you work on older homes?",
        "Constantly. Pre-1980 houses around the Sound still run galvanized supply lines and cast-iron drains, and that's most of our repipe and drain work. We'll tell you what can wait and what can't.",
    ),
    (
        "What payment do you take?",
        "Card, check, and financing on larger jobs like repipes and sewer replacements. Coupons from the website come off the invoice - just mention the code when booking.",
    ),
    (
        "Is the website coupon code really honored?",
        "Yes. Copy the code from the coupon, give it to the dispatcher or paste it into the request form, and the office applies it before the tech arrives.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <style>
                {r#"
                    .faq-page { max-width: 800px; margin: 0 auto; padding: 48px 20px; }
                    .faq-item { border-bottom: 1px solid #e0e0e0; }
                    .faq-question {
                        width: 100%; display: flex; justify-content: space-between;
                        background: none; border: none; cursor: pointer;
                        padding: 18px 4px; font-size: 17px; text-align: left;
                    }
                    .faq-item .faq-answer { display: none; padding: 0 4px 18px; color: #444; }
                    .faq-item.open .faq-answer { display: block; }
                    .toggle-icon { color: #1565c0; font-size: 20px; }
                "#}
            </style>
            <JsonLd data={faq_page(FAQ_ITEMS)} />
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Straight answers before you ever pick up the phone"}</p>
            </section>
            <section class="faq-section">
                {
                    for FAQ_ITEMS.iter().map(|(question, answer)| html! {
                        <FaqItem question={question.to_string()}>
                            <p>{ *answer }</p>
                        </FaqItem>
                    })
                }
            </section>
        </div>
    }
}
