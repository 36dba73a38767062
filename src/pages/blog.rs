use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

pub struct ArticleCard {
    pub route: Route,
    pub title: &'static str,
    pub teaser: &'static str,
    pub published: &'static str,
}

pub fn articles() -> Vec<ArticleCard> {
    vec![
        ArticleCard {
            route: Route::WinterPipeCare,
            title: "Getting Puget Sound Pipes Through a Cold Snap",
            teaser: "Our winters are mild until they aren't. The three cheap things to do before the next arctic blast, and the one thing to never do to a frozen pipe.",
            published: "January 12, 2026",
        },
        ArticleCard {
            route: Route::WaterHeaterLifespan,
            title: "How Long Should a Water Heater Actually Last?",
            teaser: "The sticker says six years, the neighbor's lasted twenty. What actually decides it, and the ten-minute annual check that buys you years.",
            published: "March 3, 2026",
        },
    ]
}

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="blog-page">
            <style>
                {r#"
                    .blog-page { max-width: 800px; margin: 0 auto; padding: 48px 20px; }
                    .blog-card {
                        background: #fff; border-radius: 12px; padding: 24px;
                        box-shadow: 0 4px 14px rgba(0,0,0,0.08); margin-bottom: 20px;
                    }
                    .blog-card h2 { margin-top: 0; }
                    .blog-card .published { color: #888; font-size: 13px; }
                    .blog-card a { color: #1565c0; font-weight: bold; text-decoration: none; }
                "#}
            </style>
            <h1>{"From the Truck"}</h1>
            <p>{"Notes from our techs on keeping your plumbing boring."}</p>
            {
                for articles().into_iter().map(|article| html! {
                    <div class="blog-card">
                        <h2>{ article.title }</h2>
                        <span class="published">{ article.published }</span>
                        <p>{ article.teaser }</p>
                        <Link<Route> to={article.route}>{"Read →"}</Link<Route>>
                    </div>
                })
            }
        </div>
    }
}
