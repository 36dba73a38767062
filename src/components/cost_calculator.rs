use serde_json::json;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::analytics;

#[derive(PartialEq)]
pub struct ServiceRate {
    pub slug: &'static str,
    pub name: &'static str,
    pub low: u32,
    pub high: u32,
}

/// Baseline price book, standard weekday scheduling, newer construction.
pub const RATES: &[ServiceRate] = &[
    ServiceRate { slug: "drain-cleaning", name: "Drain Cleaning", low: 189, high: 460 },
    ServiceRate { slug: "water-heater", name: "Water Heater Replacement", low: 1450, high: 3800 },
    ServiceRate { slug: "leak-repair", name: "Leak Detection & Repair", low: 250, high: 1200 },
    ServiceRate { slug: "repipe", name: "Whole-Home Repipe", low: 4800, high: 14500 },
    ServiceRate { slug: "sewer-line", name: "Sewer Line Repair", low: 2200, high: 9800 },
    ServiceRate { slug: "fixture", name: "Fixture Install", low: 150, high: 520 },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Urgency {
    Standard,
    SameDay,
    Emergency,
}

impl Urgency {
    pub fn from_value(value: &str) -> Urgency {
        match value {
            "same-day" => Urgency::SameDay,
            "emergency" => Urgency::Emergency,
            _ => Urgency::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Standard => "standard",
            Urgency::SameDay => "same-day",
            Urgency::Emergency => "emergency",
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            Urgency::Standard => 1.0,
            Urgency::SameDay => 1.35,
            Urgency::Emergency => 1.75,
        }
    }
}

const OLDER_HOME_MULTIPLIER: f64 = 1.2;

pub fn find_rate(slug: &str) -> Option<&'static ServiceRate> {
    RATES.iter().find(|rate| rate.slug == slug)
}

/// Ballpark range in whole dollars. Pre-1980 homes get a surcharge for
/// galvanized supply lines and cast-iron drains.
pub fn estimate(rate: &ServiceRate, urgency: Urgency, older_home: bool) -> (u32, u32) {
    let factor = urgency.multiplier() * if older_home { OLDER_HOME_MULTIPLIER } else { 1.0 };
    let low = (rate.low as f64 * factor).round() as u32;
    let high = (rate.high as f64 * factor).round() as u32;
    (low, high)
}

#[function_component(CostCalculator)]
pub fn cost_calculator() -> Html {
    let service = use_state(|| RATES[0].slug.to_string());
    let urgency = use_state(|| Urgency::Standard);
    let older_home = use_state(|| false);
    let result = use_state(|| None::<(u32, u32)>);

    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };

    let on_urgency = {
        let urgency = urgency.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            urgency.set(Urgency::from_value(&select.value()));
        })
    };

    let on_older_home = {
        let older_home = older_home.clone();
        Callback::from(move |_: Event| {
            older_home.set(!*older_home);
        })
    };

    let on_calculate = {
        let service = service.clone();
        let urgency = urgency.clone();
        let older_home = older_home.clone();
        let result = result.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(rate) = find_rate(&service) {
                let (low, high) = estimate(rate, *urgency, *older_home);
                result.set(Some((low, high)));
                analytics::track_event(
                    "calculator_estimate",
                    json!({
                        "service": rate.slug,
                        "urgency": urgency.as_str(),
                        "olderHome": *older_home,
                        "low": low,
                        "high": high,
                    }),
                );
            }
        })
    };

    html! {
        <div class="cost-calculator">
            <style>
                {r#"
                    .cost-calculator {
                        background: #fff; border-radius: 12px; padding: 24px;
                        box-shadow: 0 4px 16px rgba(0,0,0,0.08); max-width: 480px;
                    }
                    .cost-calculator h3 { margin-top: 0; }
                    .calc-row { margin-bottom: 14px; display: flex; flex-direction: column; gap: 4px; }
                    .calc-row select { padding: 8px; border-radius: 6px; border: 1px solid #ccc; }
                    .calc-check { display: flex; align-items: center; gap: 8px; }
                    .calc-button {
                        background: #1565c0; color: #fff; border: none; cursor: pointer;
                        padding: 10px 20px; border-radius: 6px; font-size: 16px;
                    }
                    .calc-result { margin-top: 16px; padding: 14px; background: #e8f5e9; border-radius: 8px; }
                    .calc-result strong { font-size: 20px; }
                    .calc-disclaimer { font-size: 12px; color: #777; margin-top: 8px; }
                "#}
            </style>
            <h3>{"What will it cost?"}</h3>
            <div class="calc-row">
                <label>{"Service"}</label>
                <select onchange={on_service}>
                    { for RATES.iter().map(|rate| html! {
                        <option value={rate.slug} selected={*service == rate.slug}>{ rate.name }</option>
                    }) }
                </select>
            </div>
            <div class="calc-row">
                <label>{"Scheduling"}</label>
                <select onchange={on_urgency}>
                    <option value="standard" selected={*urgency == Urgency::Standard}>{"Standard (next available)"}</option>
                    <option value="same-day" selected={*urgency == Urgency::SameDay}>{"Same-day"}</option>
                    <option value="emergency" selected={*urgency == Urgency::Emergency}>{"Emergency / after hours"}</option>
                </select>
            </div>
            <div class="calc-row calc-check">
                <input type="checkbox" id="older-home" checked={*older_home} onchange={on_older_home} />
                <label for="older-home">{"Home built before 1980"}</label>
            </div>
            <button class="calc-button" onclick={on_calculate}>{"Get estimate"}</button>
            {
                if let Some((low, high)) = *result {
                    html! {
                        <div class="calc-result">
                            <strong>{ format!("${} - ${}", low, high) }</strong>
                            <p class="calc-disclaimer">
                                {"Ballpark only. Every job gets a firm flat-rate quote on site before work starts."}
                            </p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_newer_home_is_the_base_rate() {
        let rate = find_rate("drain-cleaning").unwrap();
        assert_eq!(estimate(rate, Urgency::Standard, false), (189, 460));
    }

    #[test]
    fn emergency_multiplier_applies() {
        let rate = find_rate("drain-cleaning").unwrap();
        // 189 * 1.75 = 330.75 -> 331, 460 * 1.75 = 805
        assert_eq!(estimate(rate, Urgency::Emergency, false), (331, 805));
    }

    #[test]
    fn multipliers_compound_for_older_homes() {
        let rate = find_rate("fixture").unwrap();
        // 150 * 1.35 * 1.2 = 243, 520 * 1.35 * 1.2 = 842.4 -> 842
        assert_eq!(estimate(rate, Urgency::SameDay, true), (243, 842));
    }

    #[test]
    fn unknown_service_has_no_rate() {
        assert!(find_rate("crawlspace-spelunking").is_none());
    }

    #[test]
    fn unknown_urgency_value_reads_standard() {
        assert_eq!(Urgency::from_value("whenever"), Urgency::Standard);
    }
}
