use yew::prelude::*;

use crate::components::booking::BookingGrid;
use crate::components::contact_form::ContactForm;
use crate::seo::{local_business, JsonLd, OFFICE_PHONE, OFFICE_PHONE_HREF};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <style>
                {r#"
                    .contact-page { max-width: 1080px; margin: 0 auto; padding: 48px 20px; }
                    .contact-columns { display: flex; gap: 48px; flex-wrap: wrap; }
                    .contact-columns > div { flex: 1; min-width: 320px; }
                    .contact-nap { background: #f7f9fc; border-radius: 12px; padding: 24px; margin-bottom: 32px; }
                    .contact-nap a { color: #1565c0; font-weight: bold; text-decoration: none; }
                "#}
            </style>
            <JsonLd data={local_business()} />
            <h1>{"Get us out there"}</h1>
            <div class="contact-nap">
                <p><strong>{"Cascade Plumbing"}</strong>{" · 4012 S Pine St, Tacoma, WA 98409"}</p>
                <p>
                    <a href={OFFICE_PHONE_HREF}>{ OFFICE_PHONE }</a>
                    {" · Mon-Fri 7am-7pm · Sat 8am-5pm · Emergencies 24/7"}
                </p>
            </div>
            <div class="contact-columns">
                <div>
                    <h2>{"Pick a window"}</h2>
                    <p>{"Choose a time that suits you and we'll confirm on the callback."}</p>
                    <BookingGrid />
                </div>
                <div>
                    <h2>{"Request a callback"}</h2>
                    <ContactForm />
                </div>
            </div>
        </div>
    }
}
