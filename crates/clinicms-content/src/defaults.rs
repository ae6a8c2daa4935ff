//! Built-in default content.
//!
//! The marketing site must render something sensible on a fresh deployment,
//! so the store seeds these documents whenever a data file is absent or
//! unreadable. The copy below mirrors the launch content of the site.

use crate::page::{Page, PageMap, Section, SectionType, Seo};
use serde_json::{json, Map, Value};

const SEED_TIMESTAMP: &str = "2024-01-15T09:00:00Z";
const SEED_AUTHOR: &str = "system";

fn metadata(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn section(
    id: &str,
    section_type: SectionType,
    title: Option<&str>,
    content: &str,
    order: i64,
) -> Section {
    Section {
        id: id.to_string(),
        section_type,
        title: title.map(str::to_string),
        content: content.to_string(),
        image: None,
        order,
        metadata: Map::new(),
    }
}

/// The default page collection: four published marketing pages keyed
/// `"1"` through `"4"`.
pub fn default_pages() -> PageMap {
    let mut pages = PageMap::new();
    pages.insert("1".to_string(), dental_implants());
    pages.insert("2".to_string(), about_us());
    pages.insert("3".to_string(), all_on_four());
    pages.insert("4".to_string(), veneers());
    pages
}

fn dental_implants() -> Page {
    let mut hero = section(
        "implants-hero",
        SectionType::Hero,
        Some("Dental Implants in Istanbul"),
        "<p>Replace missing teeth with permanent, natural-looking implants \
         placed by specialists with over 15 years of experience.</p>",
        1,
    );
    hero.metadata = metadata(json!({
        "ctaLabel": "Get a Free Quote",
        "backgroundVideo": "/media/implants-hero.mp4"
    }));

    Page {
        id: "1".to_string(),
        slug: "dental-implants".to_string(),
        title: "Dental Implants".to_string(),
        description: "Permanent tooth replacement with titanium implants".to_string(),
        sections: vec![
            hero,
            section(
                "implants-what",
                SectionType::Text,
                Some("What Are Dental Implants?"),
                "<p>A dental implant is a titanium post that replaces the root of a \
                 missing tooth. Once integrated with the jawbone, it supports a \
                 crown, bridge, or full-arch restoration that looks and functions \
                 like a natural tooth.</p>",
                2,
            ),
            section(
                "implants-features",
                SectionType::Features,
                Some("Why Choose Us"),
                "<ul><li>Lifetime warranty on implant fixtures</li>\
                 <li>3D-guided placement planning</li>\
                 <li>All-inclusive packages with hotel and transfers</li>\
                 <li>Multilingual patient coordinators</li></ul>",
                3,
            ),
            section(
                "implants-cta",
                SectionType::Cta,
                Some("Ready to Smile Again?"),
                "<p>Send us a photo of your smile and receive a personalised \
                 treatment plan within 24 hours.</p>",
                4,
            ),
        ],
        seo: Seo {
            title: "Dental Implants in Istanbul | Free Consultation".to_string(),
            description: "Premium dental implants in Istanbul with lifetime warranty. \
                          All-inclusive packages for international patients."
                .to_string(),
            keywords: "dental implants, istanbul, tooth replacement, implant dentistry"
                .to_string(),
        },
        is_published: true,
        last_updated: SEED_TIMESTAMP.to_string(),
        updated_by: SEED_AUTHOR.to_string(),
    }
}

fn about_us() -> Page {
    let mut clinic_tour = section(
        "about-clinic",
        SectionType::ImageText,
        Some("A Modern Clinic in the Heart of Istanbul"),
        "<p>Our clinic spans three floors with 12 treatment rooms, an on-site \
         digital laboratory, and a dedicated recovery lounge for international \
         patients.</p>",
        2,
    );
    clinic_tour.image = Some("/media/clinic-exterior.jpg".to_string());

    Page {
        id: "2".to_string(),
        slug: "about-us".to_string(),
        title: "About Us".to_string(),
        description: "Meet the team behind thousands of new smiles".to_string(),
        sections: vec![
            section(
                "about-hero",
                SectionType::Hero,
                Some("Trusted by Patients from 40+ Countries"),
                "<p>Since 2009 we have treated more than 25,000 patients, combining \
                 European clinical standards with Turkish hospitality.</p>",
                1,
            ),
            clinic_tour,
            section(
                "about-team",
                SectionType::Text,
                Some("Our Team"),
                "<p>Every treatment is planned by a board of specialists: oral \
                 surgeons, prosthodontists, and cosmetic dentists who review each \
                 case together before your arrival.</p>",
                3,
            ),
        ],
        seo: Seo {
            title: "About Our Dental Clinic | Istanbul".to_string(),
            description: "A modern dental clinic in Istanbul trusted by patients \
                          from more than 40 countries since 2009."
                .to_string(),
            keywords: "dental clinic istanbul, about us, dental tourism turkey".to_string(),
        },
        is_published: true,
        last_updated: SEED_TIMESTAMP.to_string(),
        updated_by: SEED_AUTHOR.to_string(),
    }
}

fn all_on_four() -> Page {
    Page {
        id: "3".to_string(),
        slug: "all-on-four".to_string(),
        title: "All-on-4".to_string(),
        description: "A full arch of fixed teeth on four implants".to_string(),
        sections: vec![
            section(
                "aof-hero",
                SectionType::Hero,
                Some("A Full Smile on Four Implants"),
                "<p>The All-on-4 technique restores a complete arch of teeth with \
                 just four implants, often with fixed provisional teeth on the \
                 same day as surgery.</p>",
                1,
            ),
            section(
                "aof-how",
                SectionType::Text,
                Some("How It Works"),
                "<p>Two straight anterior implants and two tilted posterior \
                 implants support a full-arch bridge, avoiding bone grafting in \
                 most cases. Treatment is completed across two short visits.</p>",
                2,
            ),
            section(
                "aof-faq",
                SectionType::Faq,
                Some("Frequently Asked Questions"),
                "<h3>Is All-on-4 painful?</h3><p>Surgery is performed under local \
                 anaesthesia or sedation; most patients return to normal routines \
                 within a few days.</p>\
                 <h3>How long do the teeth last?</h3><p>With good hygiene the \
                 implants can last a lifetime; the bridge itself typically lasts \
                 10-15 years.</p>",
                3,
            ),
        ],
        seo: Seo {
            title: "All-on-4 Dental Implants in Istanbul".to_string(),
            description: "Fixed full-arch teeth on four implants, often in a single \
                          day. Transparent pricing for international patients."
                .to_string(),
            keywords: "all on 4, full arch implants, same day teeth, istanbul".to_string(),
        },
        is_published: true,
        last_updated: SEED_TIMESTAMP.to_string(),
        updated_by: SEED_AUTHOR.to_string(),
    }
}

fn veneers() -> Page {
    Page {
        id: "4".to_string(),
        slug: "veneers".to_string(),
        title: "Veneers".to_string(),
        description: "Hand-crafted porcelain veneers for a natural smile".to_string(),
        sections: vec![
            section(
                "veneers-hero",
                SectionType::Hero,
                Some("Porcelain Veneers, Designed for Your Face"),
                "<p>Ultra-thin porcelain shells, individually layered by our \
                 in-house ceramists to match the translucency of natural \
                 enamel.</p>",
                1,
            ),
            section(
                "veneers-features",
                SectionType::Features,
                Some("The Smile Design Process"),
                "<ul><li>Digital smile design preview before any preparation</li>\
                 <li>Minimal-prep techniques that preserve enamel</li>\
                 <li>E-max porcelain with 10-year warranty</li>\
                 <li>Completed in a single 5-7 day visit</li></ul>",
                2,
            ),
            section(
                "veneers-cta",
                SectionType::Cta,
                Some("See Your New Smile First"),
                "<p>Book a free video consultation and preview your smile design \
                 before you travel.</p>",
                3,
            ),
        ],
        seo: Seo {
            title: "Porcelain Veneers in Istanbul | Smile Design".to_string(),
            description: "Hand-crafted E-max porcelain veneers with digital smile \
                          design. Natural results in a single visit."
                .to_string(),
            keywords: "veneers, porcelain veneers, smile design, istanbul".to_string(),
        },
        is_published: true,
        last_updated: SEED_TIMESTAMP.to_string(),
        updated_by: SEED_AUTHOR.to_string(),
    }
}
