use yew::prelude::*;
use yew_router::components::Link;

use crate::pages::coupons;
use crate::promo::banner::PromoOffer;
use crate::promo::offer::Variant;
use crate::seo::{service_schema, JsonLd, SITE_URL};
use crate::Route;

pub struct Service {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
    pub price_note: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "drain-cleaning",
        name: "Drain Cleaning",
        tagline: "Slow drains and full backups cleared same-day.",
        description: "Kitchen sinks, tubs, floor drains and mainlines. We cable or hydro-jet depending on what the line needs, and every mainline job includes a free camera pass so you can see the pipe for yourself.",
        bullets: &[
            "Same-day service in most of our coverage area",
            "Free camera inspection with mainline cleaning",
            "Upfront flat-rate pricing before we start",
        ],
        price_note: "From $189",
    },
    Service {
        slug: "water-heater",
        name: "Water Heaters",
        tagline: "Repair, replacement, and tankless conversions.",
        description: "No hot water, rusty water, rumbling tank, or a heater past its tenth birthday - we diagnose honestly and quote both the repair and the replacement so you can pick. We install tank and tankless, gas and electric.",
        bullets: &[
            "Most replacements done the same day",
            "Tank and tankless options quoted side by side",
            "Old unit hauled away and permits handled",
        ],
        price_note: "Replacements from $1,450",
    },
    Service {
        slug: "leak-repair",
        name: "Leak Detection & Repair",
        tagline: "Find it without tearing your house apart.",
        description: "Electronic leak detection pinpoints the problem behind walls and under slabs before anyone picks up a saw. Most leaks are located and repaired in a single visit.",
        bullets: &[
            "Electronic and acoustic detection gear",
            "Slab leak experience across the Sound",
            "Insurance-ready documentation",
        ],
        price_note: "Detection from $250",
    },
    Service {
        slug: "repipe",
        name: "Whole-Home Repipe",
        tagline: "Retire the galvanized pipe for good.",
        description: "Pre-1980 homes around Puget Sound often still run galvanized steel that's rusting shut. We repipe in PEX or copper, usually in two to three days, patch-ready walls included.",
        bullets: &[
            "PEX or copper, your call",
            "Two-to-three-day typical turnaround",
            "Lifetime workmanship warranty",
        ],
        price_note: "From $4,800",
    },
    Service {
        slug: "sewer-line",
        name: "Sewer Line Repair",
        tagline: "Camera-first diagnosis, trenchless where possible.",
        description: "Roots, bellies and breaks diagnosed on camera before any digging. Trenchless lining and pipe bursting save most yards; when excavation is unavoidable we say so up front.",
        bullets: &[
            "Camera inspection with recorded footage",
            "Trenchless options quoted first",
            "City-permit handling included",
        ],
        price_note: "Repairs from $2,200",
    },
    Service {
        slug: "emergency",
        name: "Emergency Plumbing",
        tagline: "24/7 dispatch for the bad nights.",
        description: "Burst pipes, failed water heaters flooding the garage, sewage backing into the tub. A live dispatcher answers around the clock and the on-call truck rolls with parts for the common disasters.",
        bullets: &[
            "Live dispatcher, not a voicemail tree",
            "Trucks stocked for burst-pipe and backup calls",
            "After-hours rates quoted on the phone",
        ],
        price_note: "Call for dispatch",
    },
];

pub fn find_service(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.slug == slug)
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <style>
                {r#"
                    .services-page { max-width: 1080px; margin: 0 auto; padding: 48px 20px; }
                    .services-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px; }
                    .service-card {
                        background: #fff; border-radius: 12px; padding: 24px;
                        box-shadow: 0 4px 16px rgba(0,0,0,0.08);
                        display: flex; flex-direction: column;
                    }
                    .service-card h3 { margin-top: 0; }
                    .service-card .price-note { color: #e65100; font-weight: bold; margin-top: auto; }
                    .service-card a { color: #1565c0; text-decoration: none; font-weight: bold; }
                "#}
            </style>
            <h1>{"Plumbing Services"}</h1>
            <p>{"Licensed, bonded and insured across the Puget Sound. WA license #CASCAPL892JD."}</p>
            <div class="services-grid">
                {
                    for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <h3>{ service.name }</h3>
                            <p>{ service.tagline }</p>
                            <span class="price-note">{ service.price_note }</span>
                            <Link<Route> to={Route::Service { slug: service.slug.to_string() }}>
                                {"Details →"}
                            </Link<Route>>
                        </div>
                    })
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = find_service(&props.slug) else {
        return html! {
            <div class="service-detail service-missing">
                <h1>{"We don't offer that one"}</h1>
                <p>{"The page you followed doesn't match a service we provide."}</p>
                <Link<Route> to={Route::Services}>{"See all services"}</Link<Route>>
            </div>
        };
    };

    let page_url = format!("{}/services/{}", SITE_URL, service.slug);
    let schema = service_schema(service.name, service.tagline, &page_url);

    html! {
        <div class="service-detail">
            <style>
                {r#"
                    .service-detail { max-width: 800px; margin: 0 auto; padding: 48px 20px; }
                    .service-detail ul { padding-left: 20px; }
                    .service-detail li { margin-bottom: 6px; }
                    .service-price { color: #e65100; font-weight: bold; font-size: 18px; }
                "#}
            </style>
            <JsonLd data={schema} />
            <h1>{ service.name }</h1>
            <p class="service-price">{ service.price_note }</p>
            <p>{ service.description }</p>
            <ul>
                { for service.bullets.iter().map(|bullet| html! { <li>{ *bullet }</li> }) }
            </ul>
            {
                // Drain work carries the running special; other trades don't.
                if service.slug == "drain-cleaning" {
                    html! {
                        <PromoOffer
                            offer={coupons::drain_special()}
                            variant={Variant::Inline}
                            hide_if_expired={true}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <p>
                <Link<Route> to={Route::Contact}>{"Request a callback →"}</Link<Route>>
            </p>
        </div>
    }
}
