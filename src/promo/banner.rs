use chrono::Utc;
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    UrlSearchParams,
};
use yew::prelude::*;

use crate::analytics;
use crate::promo::offer::{
    compute_label, is_expired, offer_json_ld, resolve_variant, should_render, tracking_payload,
    within_refresh_window, Offer, Variant, REFRESH_TICK_MS,
};
use crate::seo::JsonLd;

const IMPRESSION_THRESHOLD: f64 = 0.35;
const COPIED_RESET_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct PromoOfferProps {
    pub offer: Offer,
    #[prop_or(Variant::Inline)]
    pub variant: Variant,
    #[prop_or(false)]
    pub hide_if_expired: bool,
    #[prop_or(false)]
    pub show_expired: bool,
    #[prop_or(false)]
    pub include_structured_data: bool,
    #[prop_or_default]
    pub on_copy: Option<Callback<String>>,
}

/// Manual A/B override, read once per mount. A `?promoVariant=` value that
/// doesn't name a real variant is ignored upstream in `resolve_variant`.
fn query_variant_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get("promoVariant")
}

#[function_component(PromoOffer)]
pub fn promo_offer(props: &PromoOfferProps) -> Html {
    let root_ref = use_node_ref();
    let expired = use_state(|| is_expired(props.offer.expires_at.as_deref(), Utc::now()));
    let label = use_state(|| compute_label(props.offer.expires_at.as_deref(), Utc::now()));
    let copied = use_state(|| false);
    let variant_handle = use_state(|| resolve_variant(props.variant, query_variant_override().as_deref()));
    let variant = *variant_handle;

    // One-shot latches and the copy-reset timer, owned by this instance.
    let impression_sent = use_mut_ref(|| false);
    let expired_tracked = use_mut_ref(|| false);
    let copy_reset = use_mut_ref(|| None::<Timeout>);

    // Label refresh. Only scheduled when expiry is inside the 48h window at
    // mount; ticks every minute, fires the one expired-transition event, and
    // stops itself once the offer goes dark. Torn down on unmount.
    {
        let expired = expired.clone();
        let label = label.clone();
        let expired_tracked = expired_tracked.clone();
        let offer = props.offer.clone();
        use_effect_with_deps(
            move |expires_at: &Option<String>| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let cleanup_handle = interval_handle.clone();

                let now = Utc::now();
                if !is_expired(expires_at.as_deref(), now)
                    && within_refresh_window(expires_at.as_deref(), now)
                {
                    let expires = expires_at.clone();
                    let ticker = interval_handle.clone();
                    let interval = Interval::new(REFRESH_TICK_MS, move || {
                        let now = Utc::now();
                        label.set(compute_label(expires.as_deref(), now));
                        if is_expired(expires.as_deref(), now) && !*expired_tracked.borrow() {
                            *expired_tracked.borrow_mut() = true;
                            expired.set(true);
                            analytics::track_expired(tracking_payload(&offer, variant, None));
                            // Deferred so the interval isn't dropped from
                            // inside its own callback.
                            let ticker = ticker.clone();
                            spawn_local(async move {
                                if let Some(interval) = ticker.borrow_mut().take() {
                                    drop(interval);
                                }
                            });
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    if let Some(interval) = cleanup_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            props.offer.expires_at.clone(),
        );
    }

    // Impression tracking. Observes the banner root at the 35% threshold,
    // fires at most once, never for an already-expired offer, and the
    // observer is disconnected the moment it has done its job.
    {
        let impression_sent = impression_sent.clone();
        let offer = props.offer.clone();
        let root_ref = root_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut live: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = root_ref.cast::<web_sys::Element>() {
                    let expires = offer.expires_at.clone();
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if !entry.is_intersecting()
                                    || entry.intersection_ratio() < IMPRESSION_THRESHOLD
                                {
                                    continue;
                                }
                                if *impression_sent.borrow() {
                                    continue;
                                }
                                if is_expired(expires.as_deref(), Utc::now()) {
                                    observer.disconnect();
                                    return;
                                }
                                *impression_sent.borrow_mut() = true;
                                analytics::track_impression(tracking_payload(&offer, variant, None));
                                observer.disconnect();
                                return;
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(IMPRESSION_THRESHOLD));
                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        observer.observe(&element);
                        live = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, _callback)) = live {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let onclick_cta = {
        let offer = props.offer.clone();
        let expired = expired.clone();
        Callback::from(move |_: MouseEvent| {
            // The expired CTA renders as a non-interactive span, so this
            // guard is unreachable in practice; keep it anyway.
            if *expired {
                return;
            }
            analytics::track_click(tracking_payload(&offer, variant, None));
        })
    };

    let onclick_copy = {
        let offer = props.offer.clone();
        let copied = copied.clone();
        let copy_reset = copy_reset.clone();
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(code) = offer.code.clone() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&code);
            let offer = offer.clone();
            let copied = copied.clone();
            let copy_reset = copy_reset.clone();
            let on_copy = on_copy.clone();
            spawn_local(async move {
                // A rejected clipboard write changes nothing: no flag, no
                // event, no error surfaced.
                if JsFuture::from(promise).await.is_err() {
                    return;
                }
                copied.set(true);
                analytics::track_copy(tracking_payload(&offer, variant, None));
                if let Some(on_copy) = &on_copy {
                    on_copy.emit(code.clone());
                }
                let reset = {
                    let copied = copied.clone();
                    Timeout::new(COPIED_RESET_MS, move || copied.set(false))
                };
                // Replacing a pending timeout cancels it, so a re-copy
                // restarts the 2s window instead of stacking resets.
                *copy_reset.borrow_mut() = Some(reset);
            });
        })
    };

    if !should_render(*expired, props.hide_if_expired, props.show_expired) {
        return html! {};
    }

    let structured_data = if props.include_structured_data && !*expired {
        let page_url = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        offer_json_ld(&props.offer, &page_url, Utc::now())
    } else {
        None
    };

    let container_class = classes!(
        "promo-banner",
        variant.css_class(),
        (*expired).then_some("promo-expired")
    );

    html! {
        <>
            {
                if let Some(node) = structured_data {
                    html! { <JsonLd data={node} /> }
                } else {
                    html! {}
                }
            }
            <div ref={root_ref} class={container_class}>
                <div class="promo-content">
                    <span class="promo-discount">{ &props.offer.discount }</span>
                    <h3 class="promo-title">{ &props.offer.title }</h3>
                    <p class="promo-description">{ &props.offer.description }</p>
                    {
                        if let Some(text) = (*label).clone() {
                            html! {
                                <span class={classes!("promo-expiry", (*expired).then_some("promo-expiry-over"))}>
                                    { text }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        match &props.offer.code {
                            Some(code) if !*expired => html! {
                                <div class="promo-code-box">
                                    <code class="promo-code">{ code }</code>
                                    <button class="promo-copy-button" onclick={onclick_copy}>
                                        { if *copied { "Copied!" } else { "Copy code" } }
                                    </button>
                                </div>
                            },
                            _ => html! {},
                        }
                    }
                    {
                        if *expired {
                            html! {
                                <span class="promo-cta promo-cta-disabled" aria-disabled="true">
                                    { "Offer ended" }
                                </span>
                            }
                        } else {
                            html! {
                                <a class="promo-cta" href={props.offer.cta_link.clone()} onclick={onclick_cta}>
                                    { &props.offer.cta_text }
                                </a>
                            }
                        }
                    }
                </div>
            </div>
        </>
    }
}
