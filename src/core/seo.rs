//! Search engine metadata

use serde::Serialize;
use serde_json::{Value, json};

use super::content::{BRAND_NAME, FEATURES, PRICING_PLANS, Price, PricingPlan};

pub const PAGE_TITLE: &str = "IRA FORCE - Security Workforce Management Platform";

pub const PAGE_DESCRIPTION: &str = "Enterprise-grade workforce management for security operations. Real-time guard tracking, intelligent dispatch, incident reporting and compliance in one platform.";

pub const PAGE_KEYWORDS: &str = "security workforce management, guard tour system, security scheduling, incident reporting, security operations center, guard tracking";

/// schema.org `Offer` for a plan with a fixed monthly price
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub price_currency: &'static str,
}

impl Offer {
    /// `None` for plans priced by sales
    pub fn for_plan(plan: &PricingPlan) -> Option<Self> {
        match plan.price {
            Price::Monthly(amount) => Some(Self {
                kind: "Offer",
                name: plan.name,
                description: plan.description,
                price: amount,
                price_currency: "USD",
            }),
            Price::Custom => None,
        }
    }
}

/// JSON-LD `SoftwareApplication` document for the landing page.
///
/// Only plans with a fixed monthly price are listed as offers.
pub fn structured_data() -> Value {
    let offers: Vec<Offer> = PRICING_PLANS.iter().filter_map(Offer::for_plan).collect();

    let feature_list: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();

    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": BRAND_NAME,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Web, iOS, Android",
        "description": PAGE_DESCRIPTION,
        "offers": offers,
        "featureList": feature_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers_skip_custom_plan() {
        let data = structured_data();
        let offers = data["offers"].as_array().unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0]["price"], "49");
        assert_eq!(offers[1]["name"], "Professional");
        assert!(offers.iter().all(|o| o["name"] != "Enterprise"));
    }

    #[test]
    fn test_offer_serializes_schema_org_keys() {
        let offer = Offer::for_plan(&PRICING_PLANS[1]).unwrap();
        assert_eq!(
            serde_json::to_value(&offer).unwrap(),
            json!({
                "@type": "Offer",
                "name": "Professional",
                "description": "For growing security operations",
                "price": "99",
                "priceCurrency": "USD",
            })
        );
        assert_eq!(Offer::for_plan(&PRICING_PLANS[2]), None);
    }

    #[test]
    fn test_feature_list() {
        let data = structured_data();
        assert_eq!(data["featureList"].as_array().unwrap().len(), 6);
        assert_eq!(data["@type"], "SoftwareApplication");
    }
}
