use gloo_console::log;
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::json;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics;
use crate::config;
use crate::seo::{OFFICE_PHONE, OFFICE_PHONE_HREF};

#[derive(Serialize)]
struct LeadRequest {
    name: String,
    phone: String,
    email: String,
    service: String,
    message: String,
    source: &'static str,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let email = use_state(String::new);
    let service = use_state(|| "drain-cleaning".to_string());
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let email = email.clone();
        let service = service.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if (*name).trim().is_empty() || (*phone).trim().is_empty() {
                error.set(Some("Please give us a name and a phone number so we can reach you.".to_string()));
                return;
            }

            let lead = LeadRequest {
                name: (*name).clone(),
                phone: (*phone).clone(),
                email: (*email).clone(),
                service: (*service).clone(),
                message: (*message).clone(),
                source: "website-contact-form",
            };
            let service_slug = (*service).clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            let error = error.clone();

            submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let request = Request::post(&format!("{}/api/leads", config::get_api_url()))
                    .header("Content-Type", "application/json")
                    .json(&lead);
                let request = match request {
                    Ok(request) => request,
                    Err(e) => {
                        log!("Failed to build lead request:", e.to_string());
                        submitting.set(false);
                        error.set(Some("Something went wrong on our end. Please call us instead.".to_string()));
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) if response.ok() => {
                        submitting.set(false);
                        submitted.set(true);
                        analytics::track_event("lead_submitted", json!({ "service": service_slug }));
                    }
                    Ok(response) => {
                        log!("Lead submit failed with status:", response.status());
                        submitting.set(false);
                        error.set(Some("We couldn't send your request. Please try again or call us.".to_string()));
                    }
                    Err(e) => {
                        log!("Lead submit network error:", e.to_string());
                        submitting.set(false);
                        error.set(Some("We couldn't reach the scheduling system. Please call us.".to_string()));
                    }
                }
            });
        })
    };

    if *submitted {
        return html! {
            <div class="contact-form contact-form-done">
                <h3>{"Request received!"}</h3>
                <p>{"A dispatcher will call you back within 30 minutes during business hours."}</p>
            </div>
        };
    }

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <style>
                {r#"
                    .contact-form { display: flex; flex-direction: column; gap: 12px; max-width: 480px; }
                    .contact-form input, .contact-form select, .contact-form textarea {
                        padding: 10px; border: 1px solid #ccc; border-radius: 6px; font-size: 15px;
                    }
                    .contact-form textarea { min-height: 90px; resize: vertical; }
                    .contact-submit {
                        background: #e65100; color: #fff; border: none; cursor: pointer;
                        padding: 12px; border-radius: 6px; font-size: 16px; font-weight: bold;
                    }
                    .contact-submit:disabled { opacity: 0.6; cursor: wait; }
                    .contact-error {
                        background: #fdecea; color: #b71c1c; padding: 12px; border-radius: 6px;
                    }
                    .contact-form-done { padding: 24px; background: #e8f5e9; border-radius: 8px; }
                "#}
            </style>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! {
                        <div class="contact-error">
                            { error_message }
                            {" "}
                            <a href={OFFICE_PHONE_HREF}>{ OFFICE_PHONE }</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <input
                type="text"
                placeholder="Your name"
                value={(*name).clone()}
                oninput={let name = name.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="tel"
                placeholder="Phone number"
                value={(*phone).clone()}
                oninput={let phone = phone.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    phone.set(input.value());
                }}
            />
            <input
                type="email"
                placeholder="Email (optional)"
                value={(*email).clone()}
                oninput={let email = email.clone(); move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <select onchange={let service = service.clone(); move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                service.set(select.value());
            }}>
                <option value="drain-cleaning">{"Drain cleaning"}</option>
                <option value="water-heater">{"Water heater"}</option>
                <option value="leak-repair">{"Leak repair"}</option>
                <option value="repipe">{"Repiping"}</option>
                <option value="sewer-line">{"Sewer line"}</option>
                <option value="emergency">{"Emergency - something is flooding"}</option>
            </select>
            <textarea
                placeholder="Tell us what's going on (optional)"
                value={(*message).clone()}
                oninput={let message = message.clone(); move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(input.value());
                }}
            />
            <button class="contact-submit" type="submit" disabled={*submitting}>
                { if *submitting { "Sending..." } else { "Request a callback" } }
            </button>
        </form>
    }
}
