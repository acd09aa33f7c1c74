//! Page copy. Lives in `content/site.json` so wording changes don't touch the
//! components; it is compiled into the binary and parsed once at startup.

use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub services_subtitle: String,
    pub services: Vec<Service>,
    pub work_subtitle: String,
    pub posters: Vec<String>,
    pub process_subtitle: String,
    pub process: Vec<ProcessStep>,
    pub pricing_subtitle: String,
    pub pricing: Vec<PricingTier>,
    pub faq_subtitle: String,
    pub faq: Vec<FaqEntry>,
    pub contact: Contact,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    /// Element id of the section, without the leading `#`.
    pub target: String,
    pub label: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub headline_tail: String,
    pub lede: String,
    pub chips: Vec<String>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Camera,
    Funnel,
    Scissors,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: String,
    pub copy: String,
    pub bullets: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub label: String,
    pub price: String,
    pub meta: String,
    #[serde(default)]
    pub note: Option<String>,
    pub bullets: Vec<String>,
    /// Goes in brackets at the end of the email subject, e.g. `TRIAL`.
    pub subject_tag: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    pub headline: String,
    pub lede: String,
}

impl SiteContent {
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SITE_JSON)
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.nav.iter().map(|link| link.target.clone()).collect()
    }

    /// Subject line for the trial call-to-action shown in the header and hero.
    pub fn trial_subject(&self) -> String {
        self.subject_for("TRIAL")
    }

    pub fn subject_for(&self, tag: &str) -> String {
        format!("{} [{}]", self.brand, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn site() -> SiteContent {
        SiteContent::load().expect("embedded site.json should parse")
    }

    #[test]
    fn nav_targets_are_the_page_anchors() {
        let site = site();
        let hrefs: Vec<String> = site.nav.iter().map(NavLink::href).collect();
        assert_eq!(hrefs, ["#services", "#work", "#pricing", "#faq", "#contact"]);
    }

    #[test]
    fn nav_targets_are_unique() {
        let ids = site().section_ids();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn pricing_tiers_carry_subject_tags() {
        let site = site();
        let tags: Vec<&str> = site.pricing.iter().map(|t| t.subject_tag.as_str()).collect();
        assert_eq!(tags, ["STARTER", "TRIAL", "SCALE"]);

        let featured: Vec<&str> = site
            .pricing
            .iter()
            .filter(|t| t.featured)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(featured, ["Trial"]);
    }

    #[test]
    fn optional_fields_default() {
        let site = site();
        let starter = &site.pricing[0];
        assert_eq!(starter.note, None);
        assert!(!starter.featured);
        assert_eq!(site.pricing[1].note.as_deref(), Some("Refunded if unused"));
    }

    #[test]
    fn every_section_is_populated() {
        let site = site();
        assert_eq!(site.services.len(), 3);
        assert_eq!(site.posters.len(), 6);
        assert_eq!(site.process.len(), 4);
        assert_eq!(site.faq.len(), 6);
        assert_eq!(site.services[2].icon, ServiceIcon::Scissors);
    }

    #[test]
    fn subjects_use_the_brand() {
        assert_eq!(site().trial_subject(), "Kinetic Clips [TRIAL]");
    }
}
