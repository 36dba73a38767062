use yew::prelude::*;

use crate::promo::banner::PromoOffer;
use crate::promo::offer::{Offer, Variant};

// Offers are plain page-level configuration, rebuilt on every render. The
// banner derives all time-dependent state itself; dates here are just data.

pub fn drain_special() -> Offer {
    Offer {
        title: "$75 Off Mainline Drain Cleaning".to_string(),
        discount: "$75 OFF".to_string(),
        description: "Any mainline drain cleaning, any time slot, camera inspection included.".to_string(),
        cta_text: "Claim this offer".to_string(),
        cta_link: "/contact".to_string(),
        code: Some("DRAIN75".to_string()),
        valid_from: Some("2026-07-01T00:00:00-07:00".to_string()),
        expires_at: Some("2026-09-30T23:59:59-07:00".to_string()),
        offer_id: Some("drain-75-summer".to_string()),
        category: Some("drain-cleaning".to_string()),
    }
}

pub fn water_heater_tuneup() -> Offer {
    Offer {
        title: "Free Water Heater Health Check".to_string(),
        discount: "FREE".to_string(),
        description: "Anode rod, relief valve and sediment check with any other scheduled service.".to_string(),
        cta_text: "Add it to my visit".to_string(),
        cta_link: "/contact".to_string(),
        code: None,
        valid_from: None,
        expires_at: Some("2026-08-31T23:59:59-07:00".to_string()),
        offer_id: Some("wh-checkup".to_string()),
        category: Some("water-heater".to_string()),
    }
}

pub fn senior_discount() -> Offer {
    Offer {
        title: "10% Senior & Military Discount".to_string(),
        discount: "10% OFF".to_string(),
        description: "Year-round, on labor, for seniors, active duty and veterans. Just mention it when booking.".to_string(),
        cta_text: "Book a visit".to_string(),
        cta_link: "/contact".to_string(),
        code: None,
        valid_from: None,
        expires_at: None,
        offer_id: Some("senior-military-10".to_string()),
        category: Some("general".to_string()),
    }
}

pub fn spring_repipe_special() -> Offer {
    Offer {
        title: "$200 Off Whole-Home Repipe".to_string(),
        discount: "$200 OFF".to_string(),
        description: "Spring repipe special on any PEX or copper whole-home repipe.".to_string(),
        cta_text: "Get a repipe quote".to_string(),
        cta_link: "/contact".to_string(),
        code: Some("REPIPE200".to_string()),
        valid_from: Some("2026-03-01T00:00:00-08:00".to_string()),
        expires_at: Some("2026-05-31T23:59:59-07:00".to_string()),
        offer_id: Some("repipe-200-spring".to_string()),
        category: Some("repipe".to_string()),
    }
}

#[function_component(Coupons)]
pub fn coupons() -> Html {
    html! {
        <div class="coupons-page">
            <style>
                {r#"
                    .coupons-page { max-width: 800px; margin: 0 auto; padding: 48px 20px; }
                    .coupons-page > p { color: #555; }
                    .coupons-list { display: flex; flex-direction: column; gap: 20px; margin-top: 24px; }
                "#}
            </style>
            <h1>{"Current Specials"}</h1>
            <p>{"One coupon per visit. Mention the code when booking, or copy it and paste it into the request form."}</p>
            <div class="coupons-list">
                <PromoOffer
                    offer={drain_special()}
                    variant={Variant::Inline}
                    include_structured_data={true}
                />
                <PromoOffer
                    offer={water_heater_tuneup()}
                    variant={Variant::Compact}
                />
                <PromoOffer
                    offer={senior_discount()}
                    variant={Variant::Light}
                />
                // Ended specials stay listed for a while so the page doesn't
                // feel like a bait-and-switch; the banner renders them dark.
                <PromoOffer
                    offer={spring_repipe_special()}
                    variant={Variant::Compact}
                    show_expired={true}
                />
            </div>
        </div>
    }
}
