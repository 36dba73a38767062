use serde_json::json;
use yew::prelude::*;
use yew_router::components::Link;

use crate::analytics;
use crate::Route;

struct DaySlots {
    day: &'static str,
    windows: &'static [&'static str],
}

// Demo availability; the office confirms the actual slot on the callback.
const WEEK: &[DaySlots] = &[
    DaySlots { day: "Mon", windows: &["8-10am", "12-2pm", "3-5pm"] },
    DaySlots { day: "Tue", windows: &["8-10am", "10-12pm"] },
    DaySlots { day: "Wed", windows: &["12-2pm", "3-5pm"] },
    DaySlots { day: "Thu", windows: &["8-10am", "10-12pm", "3-5pm"] },
    DaySlots { day: "Fri", windows: &["8-10am", "12-2pm"] },
    DaySlots { day: "Sat", windows: &["9-11am"] },
];

#[function_component(BookingGrid)]
pub fn booking_grid() -> Html {
    let selected = use_state(|| None::<(usize, usize)>);

    html! {
        <div class="booking-grid">
            <style>
                {r#"
                    .booking-grid { max-width: 640px; }
                    .booking-days { display: flex; gap: 12px; flex-wrap: wrap; }
                    .booking-day { flex: 1; min-width: 88px; }
                    .booking-day h4 { text-align: center; margin: 0 0 8px 0; }
                    .booking-slot {
                        display: block; width: 100%; margin-bottom: 6px; padding: 8px 4px;
                        border: 1px solid #1565c0; border-radius: 6px; background: #fff;
                        color: #1565c0; cursor: pointer; font-size: 13px;
                    }
                    .booking-slot.chosen { background: #1565c0; color: #fff; }
                    .booking-confirm { margin-top: 16px; padding: 14px; background: #e3f2fd; border-radius: 8px; }
                "#}
            </style>
            <div class="booking-days">
                {
                    for WEEK.iter().enumerate().map(|(day_index, day)| html! {
                        <div class="booking-day">
                            <h4>{ day.day }</h4>
                            {
                                for day.windows.iter().enumerate().map(|(slot_index, window)| {
                                    let chosen = *selected == Some((day_index, slot_index));
                                    let onclick = {
                                        let selected = selected.clone();
                                        let day = day.day;
                                        let window = *window;
                                        Callback::from(move |_: MouseEvent| {
                                            selected.set(Some((day_index, slot_index)));
                                            analytics::track_event(
                                                "booking_slot_selected",
                                                json!({ "day": day, "window": window }),
                                            );
                                        })
                                    };
                                    html! {
                                        <button
                                            class={classes!("booking-slot", chosen.then_some("chosen"))}
                                            onclick={onclick}
                                        >
                                            { window }
                                        </button>
                                    }
                                })
                            }
                        </div>
                    })
                }
            </div>
            {
                if let Some((day_index, slot_index)) = *selected {
                    let day = &WEEK[day_index];
                    html! {
                        <div class="booking-confirm">
                            <p>
                                { format!("{} {} works for us. Send your details and we'll lock it in.", day.day, day.windows[slot_index]) }
                            </p>
                            <Link<Route> to={Route::Contact} classes="booking-confirm-link">
                                {"Finish booking →"}
                            </Link<Route>>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
