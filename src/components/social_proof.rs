use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::js_sys;
use yew::prelude::*;

const RECENT_JOBS: &[(&str, &str, &str)] = &[
    ("Maria", "Tacoma", "a mainline drain cleaning"),
    ("Dave", "Puyallup", "a water heater replacement"),
    ("Priya", "Bellevue", "a kitchen leak repair"),
    ("Tom", "Everett", "a sewer camera inspection"),
    ("Linda", "Olympia", "a fixture install"),
    ("Marcus", "Seattle", "an emergency burst-pipe repair"),
    ("Elena", "Tacoma", "a whole-home repipe estimate"),
    ("Greg", "Federal Way", "a garbage disposal swap"),
];

const ROTATE_MS: u32 = 12_000;
const VISIBLE_MS: u32 = 6_000;

/// Rotating "recently booked" toast. One interval picks a random blurb, one
/// timeout hides it again; both die with the component.
#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    let visible = use_state(|| None::<usize>);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let hide_handle: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let hide_cleanup = hide_handle.clone();

                let interval = Interval::new(ROTATE_MS, move || {
                    let pick = (js_sys::Math::random() * RECENT_JOBS.len() as f64) as usize;
                    let pick = pick.min(RECENT_JOBS.len() - 1);
                    visible.set(Some(pick));

                    let hide = {
                        let visible = visible.clone();
                        Timeout::new(VISIBLE_MS, move || visible.set(None))
                    };
                    *hide_handle.borrow_mut() = Some(hide);
                });

                move || {
                    drop(interval);
                    if let Some(hide) = hide_cleanup.borrow_mut().take() {
                        drop(hide);
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="social-proof">
            <style>
                {r#"
                    .social-proof-toast {
                        position: fixed; bottom: 24px; left: 24px; z-index: 80;
                        background: #fff; border-radius: 10px; padding: 12px 18px;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.2);
                        font-size: 14px; max-width: 280px;
                        animation: proofSlide 0.4s ease-out;
                    }
                    @keyframes proofSlide {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            {
                if let Some(index) = *visible {
                    let (name, city, service) = RECENT_JOBS[index];
                    html! {
                        <div class="social-proof-toast">
                            { format!("{} in {} just booked {}.", name, city, service) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
