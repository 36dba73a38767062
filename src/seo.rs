use serde_json::{json, Value};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

pub const SITE_URL: &str = "https://cascadeplumbingwa.com";
pub const OFFICE_PHONE: &str = "(253) 555-0198";
pub const OFFICE_PHONE_HREF: &str = "tel:+12535550198";

#[derive(Properties, PartialEq)]
pub struct JsonLdProps {
    pub data: Value,
}

/// Renders a schema.org node as an `application/ld+json` script tag. Yew's
/// `html!` macro has no script-element support, so this goes through the
/// raw-HTML escape hatch; the payload is serialized JSON we built ourselves.
#[function_component(JsonLd)]
pub fn json_ld(props: &JsonLdProps) -> Html {
    let markup = format!(
        "<script type=\"application/ld+json\">{}</script>",
        props.data
    );
    Html::from_html_unchecked(AttrValue::from(markup))
}

pub fn local_business() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Plumber",
        "name": "Cascade Plumbing",
        "telephone": OFFICE_PHONE,
        "url": SITE_URL,
        "priceRange": "$$",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "4012 S Pine St",
            "addressLocality": "Tacoma",
            "addressRegion": "WA",
            "postalCode": "98409",
            "addressCountry": "US"
        },
        "areaServed": ["Tacoma", "Seattle", "Bellevue", "Everett", "Olympia", "Puyallup"],
        "openingHoursSpecification": [
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "07:00",
                "closes": "19:00"
            },
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Saturday"],
                "opens": "08:00",
                "closes": "17:00"
            }
        ]
    })
}

pub fn service_schema(name: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "serviceType": name,
        "description": description,
        "url": url,
        "areaServed": "US-WA",
        "provider": {
            "@type": "Plumber",
            "name": "Cascade Plumbing",
            "telephone": OFFICE_PHONE,
            "url": SITE_URL
        }
    })
}

pub fn faq_page(items: &[(&str, &str)]) -> Value {
    let questions: Vec<Value> = items
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer
                }
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions
    })
}

pub fn blog_posting(title: &str, description: &str, url: &str, date_published: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": title,
        "description": description,
        "url": url,
        "datePublished": date_published,
        "author": {
            "@type": "Organization",
            "name": "Cascade Plumbing"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_business_identifies_the_shop() {
        let node = local_business();
        assert_eq!(node["@type"], "Plumber");
        assert_eq!(node["address"]["addressRegion"], "WA");
        assert!(node["areaServed"].as_array().unwrap().len() >= 5);
    }

    #[test]
    fn service_schema_names_provider() {
        let node = service_schema("Drain Cleaning", "Mainline and branch drains.", "https://cascadeplumbingwa.com/services/drain-cleaning");
        assert_eq!(node["@type"], "Service");
        assert_eq!(node["serviceType"], "Drain Cleaning");
        assert_eq!(node["provider"]["@type"], "Plumber");
        assert_eq!(node["areaServed"], "US-WA");
    }

    #[test]
    fn faq_page_wraps_every_item() {
        let node = faq_page(&[("Do you charge for estimates?", "No."), ("Are you licensed?", "Yes.")]);
        assert_eq!(node["@type"], "FAQPage");
        let questions = node["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0]["@type"], "Question");
        assert_eq!(questions[1]["acceptedAnswer"]["text"], "Yes.");
    }

    #[test]
    fn blog_posting_carries_publication_date() {
        let node = blog_posting("Title", "Desc", "https://cascadeplumbingwa.com/blog/x", "2026-01-12");
        assert_eq!(node["@type"], "BlogPosting");
        assert_eq!(node["datePublished"], "2026-01-12");
    }
}
