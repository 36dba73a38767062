use yew::prelude::*;
use yew_router::components::Link;

use crate::seo::{local_business, JsonLd};
use crate::Route;

struct ServiceArea {
    slug: &'static str,
    city: &'static str,
    blurb: &'static str,
    common_calls: &'static [&'static str],
}

const SERVICE_AREAS: &[ServiceArea] = &[
    ServiceArea {
        slug: "tacoma",
        city: "Tacoma",
        blurb: "Home base. Our shop is on S Pine St, so Tacoma calls usually get the fastest windows - North End craftsman homes keep our repipe crews busy with original galvanized supply lines.",
        common_calls: &["Galvanized repipes", "Sewer root intrusion", "Water heater swaps"],
    },
    ServiceArea {
        slug: "seattle",
        city: "Seattle",
        blurb: "From Ballard to Rainier Valley. Older sewer laterals under mature street trees mean camera inspections are the right first move for most Seattle drain calls.",
        common_calls: &["Sewer camera inspections", "Trenchless lining", "Tankless conversions"],
    },
    ServiceArea {
        slug: "bellevue",
        city: "Bellevue",
        blurb: "Eastside service most weekdays. Slab leaks in 70s-era ramblers and remodel rough-ins are the bulk of our Bellevue work.",
        common_calls: &["Slab leak detection", "Remodel rough-in", "Fixture upgrades"],
    },
    ServiceArea {
        slug: "everett",
        city: "Everett",
        blurb: "North Sound coverage with same-week scheduling. Hard water is tougher on tanks up here; anode checks save a lot of Everett water heaters.",
        common_calls: &["Water heater repair", "Drain cleaning", "Pressure regulators"],
    },
    ServiceArea {
        slug: "olympia",
        city: "Olympia",
        blurb: "South Sound calls batched through the week. Septic-adjacent plumbing and well-pressure questions come up often; we handle the house side and coordinate with the septic folks.",
        common_calls: &["Mainline backups", "Well pressure tanks", "Leak repair"],
    },
    ServiceArea {
        slug: "puyallup",
        city: "Puyallup",
        blurb: "Quick hop from the shop. New-construction warranty work and garbage disposal calls dominate the Puyallup board.",
        common_calls: &["Disposal replacement", "Warranty punch lists", "Hose bib repair"],
    },
];

#[function_component(ServiceAreas)]
pub fn service_areas() -> Html {
    html! {
        <div class="areas-page">
            <style>
                {r#"
                    .areas-page { max-width: 900px; margin: 0 auto; padding: 48px 20px; }
                    .area-nav { display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 32px; }
                    .area-nav a { color: #1565c0; text-decoration: none; font-weight: bold; }
                    .area-block { margin-bottom: 40px; }
                    .area-block h2 { border-bottom: 2px solid #1565c0; padding-bottom: 6px; }
                    .area-tags { display: flex; gap: 8px; flex-wrap: wrap; }
                    .area-tags span {
                        background: #e3f2fd; color: #0d47a1; border-radius: 12px;
                        padding: 4px 12px; font-size: 13px;
                    }
                "#}
            </style>
            <JsonLd data={local_business()} />
            <h1>{"Where we work"}</h1>
            <p>{"Dispatching from Tacoma, seven days a week. If you're near one of these cities, you're in the coverage area."}</p>
            <nav class="area-nav">
                {
                    for SERVICE_AREAS.iter().map(|area| html! {
                        <a href={format!("#{}", area.slug)}>{ area.city }</a>
                    })
                }
            </nav>
            {
                for SERVICE_AREAS.iter().map(|area| html! {
                    <div class="area-block" id={area.slug}>
                        <h2>{ format!("Plumber in {}", area.city) }</h2>
                        <p>{ area.blurb }</p>
                        <div class="area-tags">
                            { for area.common_calls.iter().map(|call| html! { <span>{ *call }</span> }) }
                        </div>
                    </div>
                })
            }
            <p>
                {"Not listed? "}
                <Link<Route> to={Route::Contact}>{"Ask us"}</Link<Route>>
                {" - we regularly take jobs in the smaller towns between these."}
            </p>
        </div>
    }
}
