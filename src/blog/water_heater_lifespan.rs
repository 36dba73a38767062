use yew::prelude::*;

use crate::pages::coupons;
use crate::promo::banner::PromoOffer;
use crate::promo::offer::Variant;
use crate::seo::{blog_posting, JsonLd, SITE_URL};

#[function_component(WaterHeaterLifespan)]
pub fn water_heater_lifespan() -> Html {
    let schema = blog_posting(
        "How Long Should a Water Heater Actually Last?",
        "What decides whether a tank lasts eight years or eighteen, and the ten-minute annual check that buys you years.",
        &format!("{}/blog/water-heater-lifespan", SITE_URL),
        "2026-03-03",
    );

    html! {
        <article class="blog-article">
            <style>
                {r#"
                    .blog-article { max-width: 720px; margin: 0 auto; padding: 48px 20px; line-height: 1.7; }
                    .blog-article h1 { line-height: 1.3; }
                    .blog-article .published { color: #888; font-size: 13px; }
                "#}
            </style>
            <JsonLd data={schema} />
            <h1>{"How Long Should a Water Heater Actually Last?"}</h1>
            <span class="published">{"March 3, 2026 · Cascade Plumbing"}</span>

            <p>{"The warranty sticker says six years. Your neighbor swears theirs ran for twenty. Both are telling the truth, and the difference usually comes down to one sacrificial part most homeowners have never heard of."}</p>

            <h2>{"The anode rod is the whole game"}</h2>
            <p>{"Inside every tank heater hangs a magnesium or aluminum rod whose only job is to corrode so the tank doesn't. Once the rod is eaten through, the water starts working on the steel tank itself, and from that point the heater is on borrowed time. Rods last three to five years in our water; a replacement is a fraction of the cost of a new heater."}</p>

            <h2>{"The ten-minute annual check"}</h2>
            <p>{"Once a year: drain a couple gallons from the bottom valve to flush sediment, lift the pressure-relief lever until it spits and confirm it reseats, and look at the fittings on top for the white crust that means a slow leak. Rumbling or popping sounds mean sediment is boiling under the burner - that's recoverable if you catch it early."}</p>

            <h2>{"When replacement is the honest answer"}</h2>
            <p>{"Water pooling under the tank, rust in the hot water only, or a tank past year twelve that's never had a rod change - at that point repair money is better spent on the new unit. We'll quote the repair and the replacement side by side and let you do the math."}</p>

            <PromoOffer
                offer={coupons::water_heater_tuneup()}
                variant={Variant::Compact}
                hide_if_expired={true}
            />
        </article>
    }
}
