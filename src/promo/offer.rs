use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

/// A promotional offer as configured by a page. Nothing here is persisted;
/// pages construct these fresh on every render and the banner derives the
/// time-dependent state from `expires_at` against the wall clock.
#[derive(Clone, PartialEq, Default)]
pub struct Offer {
    pub title: String,
    pub discount: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    pub code: Option<String>,
    pub valid_from: Option<String>,
    pub expires_at: Option<String>,
    pub offer_id: Option<String>,
    pub category: Option<String>,
}

/// Presentation variants for the promo banner. Closed set; anything else
/// coming in through the `promoVariant` query parameter is ignored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    Hero,
    Inline,
    Compact,
    Light,
}

impl Variant {
    pub fn from_param(value: &str) -> Option<Variant> {
        match value {
            "hero" => Some(Variant::Hero),
            "inline" => Some(Variant::Inline),
            "compact" => Some(Variant::Compact),
            "light" => Some(Variant::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Hero => "hero",
            Variant::Inline => "inline",
            Variant::Compact => "compact",
            Variant::Light => "light",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Variant::Hero => "promo-hero",
            Variant::Inline => "promo-inline",
            Variant::Compact => "promo-compact",
            Variant::Light => "promo-light",
        }
    }
}

/// The label recompute interval only runs this close to expiry; further out
/// the label cannot change in a way anyone would notice within a page visit.
pub const REFRESH_WINDOW_HOURS: i64 = 48;
pub const REFRESH_TICK_MS: u32 = 60_000;

fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Human-readable remaining-time label. `None` when the offer has no
/// expiration or the timestamp doesn't parse; such offers are always active.
pub fn compute_label(expires_at: Option<&str>, now: DateTime<Utc>) -> Option<String> {
    let expiry = parse_expiry(expires_at?)?;
    let diff = expiry - now;

    let label = if diff <= Duration::zero() {
        "Expired".to_string()
    } else if diff >= Duration::days(2) {
        format!("Expires in {} days", diff.num_days())
    } else if diff >= Duration::days(1) {
        "Expires tomorrow".to_string()
    } else if diff >= Duration::hours(2) {
        format!("Expires in {} hours", diff.num_hours())
    } else if diff >= Duration::hours(1) {
        "Expires in 1 hour".to_string()
    } else if diff >= Duration::minutes(2) {
        format!("Expires in {} minutes", diff.num_minutes())
    } else if diff >= Duration::minutes(1) {
        "Expires in 1 minute".to_string()
    } else {
        "Expires soon".to_string()
    };
    Some(label)
}

pub fn is_expired(expires_at: Option<&str>, now: DateTime<Utc>) -> bool {
    match expires_at.and_then(parse_expiry) {
        Some(expiry) => expiry <= now,
        None => false,
    }
}

/// Whether the banner should schedule the 60-second label refresh at mount.
/// False once expired or when expiry is further out than the refresh window.
pub fn within_refresh_window(expires_at: Option<&str>, now: DateTime<Utc>) -> bool {
    match expires_at.and_then(parse_expiry) {
        Some(expiry) => {
            let diff = expiry - now;
            diff > Duration::zero() && diff <= Duration::hours(REFRESH_WINDOW_HOURS)
        }
        None => false,
    }
}

/// Render-nothing policy. Callers still choose between the active and the
/// disabled visual state when this returns true and the offer is expired.
pub fn should_render(is_expired: bool, hide_if_expired: bool, show_expired: bool) -> bool {
    !(is_expired && hide_if_expired && !show_expired)
}

/// Query-parameter override wins over the prop default, but only for values
/// naming a real variant.
pub fn resolve_variant(default: Variant, query_value: Option<&str>) -> Variant {
    query_value
        .and_then(Variant::from_param)
        .unwrap_or(default)
}

/// Payload shared by all four tracking events. Absent identifiers are left
/// out of the object rather than sent as nulls.
pub fn tracking_payload(offer: &Offer, variant: Variant, meta: Option<Value>) -> Value {
    let mut fields = serde_json::Map::new();
    if let Some(offer_id) = &offer.offer_id {
        fields.insert("offerId".into(), json!(offer_id));
    }
    if let Some(code) = &offer.code {
        fields.insert("code".into(), json!(code));
    }
    if let Some(category) = &offer.category {
        fields.insert("category".into(), json!(category));
    }
    fields.insert("variant".into(), json!(variant.as_str()));
    if let Some(meta) = meta {
        fields.insert("meta".into(), meta);
    }
    Value::Object(fields)
}

/// schema.org Offer node for the page head. Never emitted for an expired
/// offer, no matter what the caller's structured-data flag says.
pub fn offer_json_ld(offer: &Offer, page_url: &str, now: DateTime<Utc>) -> Option<Value> {
    if is_expired(offer.expires_at.as_deref(), now) {
        return None;
    }
    let mut fields = serde_json::Map::new();
    fields.insert("@context".into(), json!("https://schema.org"));
    fields.insert("@type".into(), json!("Offer"));
    if let Some(code) = &offer.code {
        fields.insert("sku".into(), json!(code));
    }
    if let Some(category) = &offer.category {
        fields.insert("category".into(), json!(category));
    }
    fields.insert("name".into(), json!(offer.title));
    fields.insert("description".into(), json!(offer.description));
    fields.insert("url".into(), json!(page_url));
    fields.insert("price".into(), json!("0"));
    fields.insert("priceCurrency".into(), json!("USD"));
    if let Some(valid_from) = &offer.valid_from {
        fields.insert("availabilityStarts".into(), json!(valid_from));
    }
    if let Some(expires_at) = &offer.expires_at {
        fields.insert("availabilityEnds".into(), json!(expires_at));
    }
    fields.insert("eligibleRegion".into(), json!("US-WA"));
    if let Some(offer_id) = &offer.offer_id {
        fields.insert("identifier".into(), json!(offer_id));
    }
    Some(Value::Object(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    fn at(offset: Duration) -> String {
        (fixed_now() + offset).to_rfc3339()
    }

    #[test]
    fn label_is_none_without_expiry() {
        assert_eq!(compute_label(None, fixed_now()), None);
    }

    #[test]
    fn label_is_none_for_garbage_timestamp() {
        assert_eq!(compute_label(Some("not-a-date"), fixed_now()), None);
        assert_eq!(compute_label(Some("2026-13-45"), fixed_now()), None);
    }

    #[test]
    fn past_expiry_reads_expired() {
        let past = at(Duration::days(-30));
        assert_eq!(
            compute_label(Some(&past), fixed_now()).as_deref(),
            Some("Expired")
        );
        assert_eq!(
            compute_label(Some("2020-01-01T00:00:00Z"), fixed_now()).as_deref(),
            Some("Expired")
        );
    }

    #[test]
    fn exact_boundary_reads_expired() {
        let exactly_now = at(Duration::zero());
        assert_eq!(
            compute_label(Some(&exactly_now), fixed_now()).as_deref(),
            Some("Expired")
        );
    }

    #[test]
    fn multi_day_label_floors_days() {
        let expiry = at(Duration::days(3) + Duration::hours(7));
        assert_eq!(
            compute_label(Some(&expiry), fixed_now()).as_deref(),
            Some("Expires in 3 days")
        );
        let exactly_two = at(Duration::days(2));
        assert_eq!(
            compute_label(Some(&exactly_two), fixed_now()).as_deref(),
            Some("Expires in 2 days")
        );
    }

    #[test]
    fn tomorrow_label_covers_one_to_two_days() {
        let expiry = at(Duration::hours(25));
        assert_eq!(
            compute_label(Some(&expiry), fixed_now()).as_deref(),
            Some("Expires tomorrow")
        );
    }

    #[test]
    fn hour_labels() {
        let five_hours = at(Duration::hours(5));
        assert_eq!(
            compute_label(Some(&five_hours), fixed_now()).as_deref(),
            Some("Expires in 5 hours")
        );
        // 90 minutes rounds down to the coarser unit.
        let ninety_minutes = at(Duration::minutes(90));
        assert_eq!(
            compute_label(Some(&ninety_minutes), fixed_now()).as_deref(),
            Some("Expires in 1 hour")
        );
    }

    #[test]
    fn minute_labels() {
        let half_hour = at(Duration::minutes(30));
        assert_eq!(
            compute_label(Some(&half_hour), fixed_now()).as_deref(),
            Some("Expires in 30 minutes")
        );
        let ninety_seconds = at(Duration::seconds(90));
        assert_eq!(
            compute_label(Some(&ninety_seconds), fixed_now()).as_deref(),
            Some("Expires in 1 minute")
        );
        let thirty_seconds = at(Duration::seconds(30));
        assert_eq!(
            compute_label(Some(&thirty_seconds), fixed_now()).as_deref(),
            Some("Expires soon")
        );
    }

    #[test]
    fn expired_flag_follows_clock() {
        let past = at(Duration::minutes(-1));
        let future = at(Duration::minutes(1));
        assert!(is_expired(Some(&past), fixed_now()));
        assert!(!is_expired(Some(&future), fixed_now()));
        assert!(!is_expired(None, fixed_now()));
        assert!(!is_expired(Some("nonsense"), fixed_now()));
    }

    #[test]
    fn refresh_window_gates_the_timer() {
        let inside = at(Duration::hours(25));
        let outside = at(Duration::hours(72));
        let past = at(Duration::hours(-1));
        assert!(within_refresh_window(Some(&inside), fixed_now()));
        assert!(!within_refresh_window(Some(&outside), fixed_now()));
        assert!(!within_refresh_window(Some(&past), fixed_now()));
        assert!(!within_refresh_window(None, fixed_now()));
    }

    #[test]
    fn visibility_policy_truth_table() {
        // Hidden only when expired, hiding requested, and no override.
        assert!(!should_render(true, true, false));
        assert!(should_render(true, true, true));
        assert!(should_render(true, false, false));
        assert!(should_render(false, true, false));
        assert!(should_render(false, false, false));
    }

    #[test]
    fn variant_override_requires_known_value() {
        assert_eq!(resolve_variant(Variant::Inline, Some("hero")), Variant::Hero);
        assert_eq!(resolve_variant(Variant::Inline, Some("light")), Variant::Light);
        assert_eq!(resolve_variant(Variant::Hero, Some("banner")), Variant::Hero);
        assert_eq!(resolve_variant(Variant::Hero, Some("HERO")), Variant::Hero);
        assert_eq!(resolve_variant(Variant::Compact, None), Variant::Compact);
    }

    fn sample_offer() -> Offer {
        Offer {
            title: "$75 Off Drain Cleaning".into(),
            discount: "$75 OFF".into(),
            description: "Any mainline drain cleaning, any time slot.".into(),
            cta_text: "Claim Offer".into(),
            cta_link: "/contact".into(),
            code: Some("DRAIN75".into()),
            valid_from: Some("2026-05-01T00:00:00-07:00".into()),
            expires_at: Some("2026-09-30T23:59:59-07:00".into()),
            offer_id: Some("drain-75".into()),
            category: Some("drain-cleaning".into()),
        }
    }

    #[test]
    fn payload_carries_identifiers_and_variant() {
        let payload = tracking_payload(&sample_offer(), Variant::Hero, None);
        assert_eq!(payload["offerId"], "drain-75");
        assert_eq!(payload["code"], "DRAIN75");
        assert_eq!(payload["category"], "drain-cleaning");
        assert_eq!(payload["variant"], "hero");
        assert!(payload.get("meta").is_none());
    }

    #[test]
    fn payload_omits_absent_identifiers() {
        let offer = Offer {
            offer_id: None,
            code: None,
            category: None,
            ..sample_offer()
        };
        let payload = tracking_payload(&offer, Variant::Compact, Some(json!({"source": "timer"})));
        assert!(payload.get("offerId").is_none());
        assert!(payload.get("code").is_none());
        assert!(payload.get("category").is_none());
        assert_eq!(payload["variant"], "compact");
        assert_eq!(payload["meta"]["source"], "timer");
    }

    #[test]
    fn json_ld_has_offer_shape() {
        let node = offer_json_ld(&sample_offer(), "https://cascadeplumbingwa.com/coupons", fixed_now())
            .expect("active offer should emit structured data");
        assert_eq!(node["@context"], "https://schema.org");
        assert_eq!(node["@type"], "Offer");
        assert_eq!(node["sku"], "DRAIN75");
        assert_eq!(node["name"], "$75 Off Drain Cleaning");
        assert_eq!(node["price"], "0");
        assert_eq!(node["priceCurrency"], "USD");
        assert_eq!(node["eligibleRegion"], "US-WA");
        assert_eq!(node["availabilityStarts"], "2026-05-01T00:00:00-07:00");
        assert_eq!(node["availabilityEnds"], "2026-09-30T23:59:59-07:00");
        assert_eq!(node["identifier"], "drain-75");
        assert_eq!(node["url"], "https://cascadeplumbingwa.com/coupons");
    }

    #[test]
    fn json_ld_suppressed_once_expired() {
        let mut offer = sample_offer();
        offer.expires_at = Some("2020-01-01T00:00:00Z".into());
        assert!(offer_json_ld(&offer, "https://cascadeplumbingwa.com/coupons", fixed_now()).is_none());
    }

    #[test]
    fn json_ld_skips_absent_fields() {
        let offer = Offer {
            code: None,
            valid_from: None,
            offer_id: None,
            category: None,
            expires_at: None,
            ..sample_offer()
        };
        let node = offer_json_ld(&offer, "https://cascadeplumbingwa.com/", fixed_now()).unwrap();
        assert!(node.get("sku").is_none());
        assert!(node.get("availabilityStarts").is_none());
        assert!(node.get("availabilityEnds").is_none());
        assert!(node.get("identifier").is_none());
    }
}
