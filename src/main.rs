use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use serde_json::json;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod analytics;
mod config;
mod seo;
mod promo {
    pub mod offer;
    pub mod banner;
}
mod components {
    pub mod booking;
    pub mod chatbot;
    pub mod contact_form;
    pub mod cost_calculator;
    pub mod social_proof;
}
mod pages {
    pub mod blog;
    pub mod contact;
    pub mod coupons;
    pub mod faq;
    pub mod home;
    pub mod locations;
    pub mod services;
}
mod blog {
    pub mod water_heater_lifespan;
    pub mod winter_pipe_care;
}

use blog::water_heater_lifespan::WaterHeaterLifespan;
use blog::winter_pipe_care::WinterPipeCare;
use components::chatbot::Chatbot;
use pages::{
    blog::Blog,
    contact::Contact,
    coupons::Coupons,
    faq::Faq,
    home::Home,
    locations::ServiceAreas,
    services::{ServiceDetail, Services},
};
use seo::{OFFICE_PHONE, OFFICE_PHONE_HREF};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    Service { slug: String },
    #[at("/service-areas")]
    ServiceAreas,
    #[at("/coupons")]
    Coupons,
    #[at("/blog")]
    Blog,
    #[at("/blog/winter-pipe-care")]
    WinterPipeCare,
    #[at("/blog/water-heater-lifespan")]
    WaterHeaterLifespan,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Service { slug } => {
            info!("Rendering Service detail page");
            html! { <ServiceDetail slug={slug} /> }
        }
        Route::ServiceAreas => {
            info!("Rendering Service Areas page");
            html! { <ServiceAreas /> }
        }
        Route::Coupons => {
            info!("Rendering Coupons page");
            html! { <Coupons /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::WinterPipeCare => {
            info!("Rendering winter pipe care article");
            html! { <WinterPipeCare /> }
        }
        Route::WaterHeaterLifespan => {
            info!("Rendering water heater article");
            html! { <WaterHeaterLifespan /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            html! {
                <div class="not-found">
                    <h1>{"That page went down the drain"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let scroll_callback = Closure::wrap(Box::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(scroll_y > 40.0);
                                }
                            }
                        }
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );

                    Box::new(move || {
                        if let Some(window) = web_sys::window() {
                            let _ = window.remove_event_listener_with_callback(
                                "scroll",
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let on_call_click = Callback::from(move |_: MouseEvent| {
        analytics::track_event("call_click", json!({ "placement": "nav" }));
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Cascade Plumbing"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::ServiceAreas} classes="nav-link">
                            {"Service Areas"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Coupons} classes="nav-link">
                            {"Coupons"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Faq} classes="nav-link">
                            {"FAQ"}
                        </Link<Route>>
                    </div>
                    <a class="nav-call-button" href={OFFICE_PHONE_HREF} onclick={on_call_click}>
                        { OFFICE_PHONE }
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <strong>{"Cascade Plumbing"}</strong>
                    <p>{"4012 S Pine St, Tacoma, WA 98409"}</p>
                    <p>{ OFFICE_PHONE }</p>
                    <p>{"WA license #CASCAPL892JD · Licensed, bonded, insured"}</p>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::ServiceAreas}>{"Service Areas"}</Link<Route>>
                    <Link<Route> to={Route::Coupons}>{"Coupons"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
            </div>
            <p class="footer-copy">{"© 2026 Cascade Plumbing. Serving the Puget Sound since 1998."}</p>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background: #fafafa; }
                    .top-nav {
                        position: sticky; top: 0; z-index: 100;
                        background: rgba(255,255,255,0.95); transition: box-shadow 0.2s ease;
                    }
                    .top-nav.scrolled { box-shadow: 0 2px 12px rgba(0,0,0,0.12); }
                    .nav-content {
                        max-width: 1080px; margin: 0 auto; padding: 14px 20px;
                        display: flex; align-items: center; justify-content: space-between;
                    }
                    .nav-logo { font-size: 20px; font-weight: bold; color: #0d47a1; text-decoration: none; }
                    .nav-right { display: flex; align-items: center; gap: 20px; }
                    .nav-link { color: #333; text-decoration: none; }
                    .nav-link:hover { color: #1565c0; }
                    .nav-call-button {
                        background: #e65100; color: #fff; padding: 8px 16px;
                        border-radius: 6px; text-decoration: none; font-weight: bold;
                    }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 22px; height: 3px; background: #333; margin: 4px 0; }
                    @media (max-width: 820px) {
                        .burger-menu { display: block; }
                        .nav-right {
                            display: none; position: absolute; top: 56px; left: 0; right: 0;
                            background: #fff; flex-direction: column; padding: 20px;
                            box-shadow: 0 8px 16px rgba(0,0,0,0.15);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                    }
                    .site-footer { background: #0d2137; color: #cfd8dc; margin-top: 64px; padding: 40px 20px 20px; }
                    .footer-content {
                        max-width: 1080px; margin: 0 auto; display: flex;
                        justify-content: space-between; gap: 32px; flex-wrap: wrap;
                    }
                    .footer-links { display: flex; flex-direction: column; gap: 8px; }
                    .footer-links a { color: #90caf9; text-decoration: none; }
                    .footer-copy { text-align: center; margin-top: 32px; font-size: 13px; opacity: 0.7; }
                    .not-found { max-width: 800px; margin: 0 auto; padding: 96px 20px; text-align: center; }

                    .promo-banner { border-radius: 12px; padding: 24px; position: relative; }
                    .promo-hero {
                        background: linear-gradient(120deg, #e65100, #f57c00); color: #fff;
                        text-align: center; padding: 36px;
                    }
                    .promo-inline { background: #fff3e0; border: 2px dashed #e65100; }
                    .promo-compact { background: #fff; box-shadow: 0 4px 14px rgba(0,0,0,0.08); padding: 16px; }
                    .promo-light { background: #fafafa; border: 1px solid #e0e0e0; }
                    .promo-banner.promo-expired { filter: grayscale(1); opacity: 0.65; }
                    .promo-discount { font-size: 26px; font-weight: 900; letter-spacing: 1px; }
                    .promo-title { margin: 8px 0 4px; }
                    .promo-description { margin: 0 0 10px; }
                    .promo-expiry { display: inline-block; font-size: 13px; font-weight: bold; margin-bottom: 10px; }
                    .promo-hero .promo-expiry { background: rgba(0,0,0,0.2); padding: 4px 10px; border-radius: 12px; }
                    .promo-expiry-over { color: #b71c1c; }
                    .promo-code-box { display: flex; align-items: center; gap: 10px; margin-bottom: 12px; }
                    .promo-code {
                        background: rgba(0,0,0,0.08); padding: 6px 12px; border-radius: 6px;
                        font-size: 16px; letter-spacing: 2px;
                    }
                    .promo-copy-button {
                        border: none; background: #1565c0; color: #fff; padding: 6px 14px;
                        border-radius: 6px; cursor: pointer;
                    }
                    .promo-cta {
                        display: inline-block; background: #1565c0; color: #fff;
                        padding: 10px 22px; border-radius: 6px; text-decoration: none; font-weight: bold;
                    }
                    .promo-hero .promo-cta { background: #fff; color: #e65100; }
                    .promo-cta-disabled { background: #9e9e9e; color: #eee; cursor: not-allowed; }
                "#}
            </style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <Chatbot />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
