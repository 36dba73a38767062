use yew::prelude::*;

use crate::pages::coupons;
use crate::promo::banner::PromoOffer;
use crate::promo::offer::Variant;
use crate::seo::{blog_posting, JsonLd, SITE_URL};

#[function_component(WinterPipeCare)]
pub fn winter_pipe_care() -> Html {
    let schema = blog_posting(
        "Getting Puget Sound Pipes Through a Cold Snap",
        "Three cheap preparations before the next arctic blast, and the one thing to never do to a frozen pipe.",
        &format!("{}/blog/winter-pipe-care", SITE_URL),
        "2026-01-12",
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
            <h1>{"Getting Puget Sound Pipes Through a Cold Snap"}</h1>
            <span class="published">{"January 12, 2026 · Cascade Plumbing"}</span>

            <p>{"Western Washington winters are mild right up until the week they aren't. When an arctic front parks over the Sound, our phones ring from Everett to Olympia with the same call: a pipe froze overnight, then let go when it thawed. Nearly every one of those calls was preventable for less than twenty dollars."}</p>

            <h2>{"Do these three things before the freeze"}</h2>
            <p>{"First, disconnect garden hoses. A connected hose traps water in the hose bib, and that's the single most common freeze break we repair. Second, find your main shutoff now - usually in the garage, crawlspace, or at the meter by the curb - and make sure it actually turns. Third, on nights forecast below 25°F, open the cabinet doors under sinks on exterior walls and let a pencil-width stream run from the farthest faucet. Moving water buys a surprising amount of margin."}</p>

            <h2>{"If a pipe freezes anyway"}</h2>
            <p>{"Open the faucet it feeds, then warm the pipe gradually - a hair dryer, a heating pad, towels soaked in warm water. What we need you to never do is put an open flame on it. Every winter we see charred joists over a pipe someone thawed with a torch, and a burst pipe is a much cheaper problem than a house fire."}</p>

            <p>{"If the pipe has already split, shut the water off at the main and call. A burst supply line moves hundreds of gallons an hour, and the damage clock is running the moment it thaws."}</p>

            <PromoOffer
                offer={coupons::senior_discount()}
                variant={Variant::Compact}
            />
        </article>
    }
}
