use serde_json::json;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analytics;

pub struct KbEntry {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Everything the widget knows. Substring keyword matching against the
/// lowercased visitor message; the entry with the most keyword hits wins.
pub const KNOWLEDGE_BASE: &[KbEntry] = &[
    KbEntry {
        topic: "emergency",
        keywords: &["emergency", "urgent", "flooding", "burst", "right now", "asap"],
        reply: "We run 24/7 emergency service across the Puget Sound area. Call (253) 555-0198 and pick option 1 - a dispatcher will route the on-call tech to you.",
    },
    KbEntry {
        topic: "hours",
        keywords: &["hours", "open", "closed", "weekend", "saturday", "sunday"],
        reply: "Office hours are 7am-7pm weekdays and 8am-5pm Saturdays. Emergency dispatch is available around the clock.",
    },
    KbEntry {
        topic: "pricing",
        keywords: &["price", "cost", "estimate", "quote", "how much", "rate"],
        reply: "Estimates are free and we quote flat-rate before any work starts. The cost calculator on our home page gives a ballpark range for common jobs.",
    },
    KbEntry {
        topic: "drain",
        keywords: &["drain", "clog", "clogged", "backup", "slow", "snake"],
        reply: "We clear kitchen, bathroom and mainline drains, usually same-day. Mainline cleaning starts at $189 and we camera-inspect at no charge while we're there.",
    },
    KbEntry {
        topic: "water-heater",
        keywords: &["water heater", "hot water", "tankless", "no hot"],
        reply: "We repair and replace tank and tankless water heaters. If yours is leaking from the tank itself, replacement is usually the honest answer - we can give you options over the phone.",
    },
    KbEntry {
        topic: "leak",
        keywords: &["leak", "leaking", "drip", "dripping", "water bill"],
        reply: "Unexplained water bill jumps usually mean a hidden leak. We do electronic leak detection and repair - most leaks are found and fixed in one visit.",
    },
    KbEntry {
        topic: "sewer",
        keywords: &["sewer", "septic", "smell", "roots", "camera"],
        reply: "We run camera inspections and handle sewer line repair and trenchless replacement. Root intrusion is common in older Tacoma and Seattle neighborhoods.",
    },
    KbEntry {
        topic: "service-area",
        keywords: &["area", "serve", "located", "where", "tacoma", "seattle", "bellevue", "everett", "olympia"],
        reply: "We cover Tacoma, Seattle, Bellevue, Everett, Olympia, Puyallup and the surrounding Puget Sound communities.",
    },
    KbEntry {
        topic: "coupons",
        keywords: &["coupon", "discount", "deal", "promo", "special", "offer"],
        reply: "Current specials are on our Coupons page - mention the promo code when you book and the office will apply it to your invoice.",
    },
    KbEntry {
        topic: "booking",
        keywords: &["book", "schedule", "appointment", "come out", "visit"],
        reply: "You can pick a time window on the Contact page, or call the office and we'll get you on the board. Same-day slots are usually available.",
    },
];

pub const FALLBACK_REPLY: &str = "I didn't catch that one - I'm best with questions about drains, water heaters, leaks, pricing and scheduling. For anything else, call the office at (253) 555-0198.";

/// Best-scoring entry, first wins on ties, `None` when nothing matches.
pub fn best_reply(message: &str) -> Option<&'static KbEntry> {
    let message = message.to_lowercase();
    let mut best: Option<(usize, &'static KbEntry)> = None;
    for entry in KNOWLEDGE_BASE {
        let score = entry
            .keywords
            .iter()
            .filter(|keyword| message.contains(*keyword))
            .count();
        if score == 0 {
            continue;
        }
        match best {
            Some((top, _)) if score <= top => {}
            _ => best = Some((score, entry)),
        }
    }
    best.map(|(_, entry)| entry)
}

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_visitor: bool,
    text: String,
}

#[function_component(Chatbot)]
pub fn chatbot() -> Html {
    let open = use_state(|| false);
    let lines = use_state(|| {
        vec![ChatLine {
            from_visitor: false,
            text: "Hi! I'm the Cascade Plumbing helper. Ask me about drains, water heaters, pricing or scheduling.".to_string(),
        }]
    });
    let draft = use_state(String::new);

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let opening = !*open;
            open.set(opening);
            if opening {
                analytics::track_event("chatbot_open", json!({}));
            }
        })
    };

    let onsubmit = {
        let lines = lines.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = (*draft).trim().to_string();
            if message.is_empty() {
                return;
            }
            let matched = best_reply(&message);
            let reply = matched.map(|entry| entry.reply).unwrap_or(FALLBACK_REPLY);

            let mut next = (*lines).clone();
            next.push(ChatLine {
                from_visitor: true,
                text: message,
            });
            next.push(ChatLine {
                from_visitor: false,
                text: reply.to_string(),
            });
            lines.set(next);
            draft.set(String::new());

            analytics::track_event(
                "chatbot_message",
                json!({
                    "matchedTopic": matched.map(|entry| entry.topic).unwrap_or("fallback"),
                }),
            );
        })
    };

    html! {
        <div class="chatbot">
            <style>
                {r#"
                    .chatbot { position: fixed; bottom: 24px; right: 24px; z-index: 90; font-size: 15px; }
                    .chatbot-toggle {
                        width: 56px; height: 56px; border-radius: 50%;
                        border: none; cursor: pointer;
                        background: #1565c0; color: #fff; font-size: 24px;
                        box-shadow: 0 6px 16px rgba(0,0,0,0.25);
                    }
                    .chatbot-panel {
                        position: absolute; bottom: 72px; right: 0;
                        width: 320px; max-height: 420px;
                        display: flex; flex-direction: column;
                        background: #fff; border-radius: 12px;
                        box-shadow: 0 12px 32px rgba(0,0,0,0.25);
                        overflow: hidden;
                    }
                    .chatbot-header { background: #1565c0; color: #fff; padding: 12px 16px; font-weight: bold; }
                    .chatbot-lines { flex: 1; overflow-y: auto; padding: 12px; }
                    .chat-line { margin-bottom: 8px; padding: 8px 12px; border-radius: 10px; max-width: 85%; }
                    .chat-line.visitor { background: #e3f2fd; margin-left: auto; }
                    .chat-line.bot { background: #f5f5f5; }
                    .chatbot-form { display: flex; border-top: 1px solid #eee; }
                    .chatbot-form input { flex: 1; border: none; padding: 12px; outline: none; }
                    .chatbot-form button { border: none; background: #1565c0; color: #fff; padding: 0 16px; cursor: pointer; }
                "#}
            </style>
            {
                if *open {
                    html! {
                        <div class="chatbot-panel">
                            <div class="chatbot-header">{"Cascade Plumbing"}</div>
                            <div class="chatbot-lines">
                                {
                                    for (*lines).iter().map(|line| {
                                        let class = if line.from_visitor { "chat-line visitor" } else { "chat-line bot" };
                                        html! { <div class={class}>{ &line.text }</div> }
                                    })
                                }
                            </div>
                            <form class="chatbot-form" onsubmit={onsubmit}>
                                <input
                                    type="text"
                                    placeholder="Type a question..."
                                    value={(*draft).clone()}
                                    oninput={let draft = draft.clone(); move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        draft.set(input.value());
                                    }}
                                />
                                <button type="submit">{"Send"}</button>
                            </form>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button class="chatbot-toggle" onclick={toggle} aria-label="Chat with us">
                { if *open { "×" } else { "💬" } }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::OFFICE_PHONE;

    #[test]
    fn matcher_is_case_insensitive() {
        let entry = best_reply("My DRAIN is CLOGGED").expect("should match the drain entry");
        assert_eq!(entry.topic, "drain");
    }

    #[test]
    fn highest_keyword_count_wins() {
        // "leak" alone hits the leak entry once; "water bill" plus "leaking"
        // hits it twice, beating single-hit entries.
        let entry = best_reply("my water bill doubled and something is leaking").unwrap();
        assert_eq!(entry.topic, "leak");
    }

    #[test]
    fn first_entry_wins_ties() {
        // "cost" (pricing) and "book" (booking) both score one; pricing is
        // listed earlier.
        let entry = best_reply("what does it cost to book you").unwrap();
        assert_eq!(entry.topic, "pricing");
    }

    #[test]
    fn no_keywords_means_fallback() {
        assert!(best_reply("tell me about quantum physics").is_none());
    }

    #[test]
    fn phone_number_is_consistent_with_site_contact() {
        assert!(FALLBACK_REPLY.contains(OFFICE_PHONE));
    }
}
