// src/specs/legislators.rs
//! Scraping *spec* for legislator bios.
//!
//! Two pages:
//! - the member list (`members/`): `.module-title` anchors, text like
//!   `"Rep. Alcala"`, href to the member page;
//! - the member page: `#main h1` (`"Representative John Alcala - Minority Whip"`),
//!   `#main h2` (`"District 57 - Democrat"`), and `#sidebar` with the mailto
//!   link, phone line and service history.
//!
//! Every field is best-effort. A bio with a missing node still yields a row,
//! with that cell left empty.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::LISTING_CLASS;
use crate::core::html::{self, Document};
use crate::core::sanitize::{digits_only, drop_first_word};
use crate::store::Tabular;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Phone:\s(\d{3}[\s-]\d{3}-\d{4})").unwrap());
static EXPERIENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(House|Senate):\s*(\d{4}\s*-\s*.*)").unwrap());

/// One entry from the member list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberLink {
    /// Anchor text minus the honorific ("Rep. Alcala" → "Alcala").
    pub short_name: String,
    pub link: String,
}

/// A stint in one chamber, e.g. House 2015-2023.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    pub chamber: String,
    pub start: String,
    pub end: String,
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}-{}", self.chamber, self.start, self.end)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legislator {
    pub chamber: String,
    pub name: String,
    pub title: String,
    pub district: String,
    pub party: String,
    pub email: String,
    pub phone: String,
    pub experience: Vec<Service>,
    pub short_name: String,
    pub url: String,
}

impl Tabular for Legislator {
    const HEADERS: &'static [&'static str] = &[
        "chamber", "legislator_name", "legislator_title", "district", "party_affiliation",
        "email_address", "phone_number", "ks_state_legislative_experience",
        "legislator_name_abbr", "info_url",
    ];

    fn to_row(&self) -> Vec<String> {
        let experience: Vec<String> = self.experience.iter().map(ToString::to_string).collect();
        vec![
            self.chamber.clone(),
            self.name.clone(),
            self.title.clone(),
            self.district.clone(),
            self.party.clone(),
            self.email.clone(),
            self.phone.clone(),
            experience.join(";"),
            self.short_name.clone(),
            self.url.clone(),
        ]
    }
}

pub fn parse_member_list(doc: &Document) -> Vec<MemberLink> {
    doc.find_by_class(LISTING_CLASS)
        .into_iter()
        .filter_map(|a| {
            let link = html::attr(a, "href")?;
            Some(MemberLink { short_name: drop_first_word(&html::text(a)), link: s!(link) })
        })
        .collect()
}

/// `rep_` / `sen_` in the member URL.
pub fn chamber_from_url(url: &str) -> &'static str {
    if url.contains("rep_") {
        "House"
    } else if url.contains("sen_") {
        "Senate"
    } else {
        ""
    }
}

/// `"Representative John Alcala - Minority Whip"` → `("John Alcala", "Minority Whip")`.
pub fn name_and_title(heading: &str) -> (String, String) {
    let rest = drop_first_word(heading);
    match rest.split_once('-') {
        Some((name, title)) => (s!(name.trim()), s!(title.trim())),
        None => (rest, s!()),
    }
}

/// `"District 57 - Democrat"` → `("57", "Democrat")`.
pub fn district_and_party(subheading: &str) -> (String, String) {
    let mut parts = subheading.split('-');
    let district = parts.next().unwrap_or_default().trim().replace("District ", "");
    let party = parts.next().map(|p| s!(p.trim())).unwrap_or_default();
    (district, party)
}

/// Address part of the last `ks.gov` link (`mailto:x@house.ks.gov` → `x@house.ks.gov`).
pub fn email_from_links(links: &[String]) -> String {
    links
        .iter()
        .rfind(|l| l.contains("ks.gov"))
        .and_then(|l| l.split(':').nth(1))
        .map(str::to_string)
        .unwrap_or_default()
}

/// First "Phone: 785-296-7500" style number, digits only.
pub fn phone(sidebar_text: &str) -> String {
    PHONE
        .captures(sidebar_text)
        .and_then(|c| c.get(1))
        .map(|m| digits_only(m.as_str()))
        .unwrap_or_default()
}

pub fn experience(sidebar_text: &str) -> Vec<Service> {
    EXPERIENCE
        .captures_iter(sidebar_text)
        .filter_map(|c| {
            let chamber = c.get(1)?.as_str();
            let years: String = c.get(2)?.as_str().split_whitespace().collect();
            let (start, end) = years.split_once('-')?;
            Some(Service { chamber: s!(chamber), start: s!(start), end: s!(end) })
        })
        .collect()
}

/// Read one member page. `member` and `url` come from the list page.
pub fn parse_bio(doc: &Document, member: &MemberLink, url: &str) -> Legislator {
    let main = doc.find_by_id("main");
    let heading = main.and_then(|m| html::first_tag(m, "h1")).map(html::text).unwrap_or_default();
    let subheading = main.and_then(|m| html::first_tag(m, "h2")).map(html::text).unwrap_or_default();

    let sidebar = doc.find_by_id("sidebar");
    let sidebar_text = sidebar.map(html::raw_text).unwrap_or_default();
    let sidebar_links = sidebar.map(html::links).unwrap_or_default();

    let (name, title) = name_and_title(&heading);
    let (district, party) = district_and_party(&subheading);
    if name.is_empty() {
        logw!("Bio: no name heading at {url}");
    }

    Legislator {
        chamber: s!(chamber_from_url(url)),
        name,
        title,
        district,
        party,
        email: email_from_links(&sidebar_links),
        phone: phone(&sidebar_text),
        experience: experience(&sidebar_text),
        short_name: member.short_name.clone(),
        url: s!(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"
        <div>
          <a class="module-title" href="/li/b2023_24/members/rep_alcala_john_1/">Rep. Alcala</a>
          <a class="module-title" href="/li/b2023_24/members/sen_alley_larry_1/">Sen. Alley</a>
          <a class="module-title">Rep. Nolink</a>
        </div>"#;

    const BIO: &str = r#"
        <html><body>
          <div id="main">
            <h1>Representative John Alcala - Minority Whip</h1>
            <h2>District 57 - Democrat</h2>
          </div>
          <div id="sidebar">
            <a href="/li/b2023_24/members/">Members</a>
            <a href="mailto:John.Alcala@house.ks.gov">John.Alcala@house.ks.gov</a>
            <p>Capitol Office<br>Phone: 785-296-7371</p>
            <p>Home Phone: 785 555-0101</p>
            <h3>Legislative Experience</h3>
            <p>Senate: 2023 - Present</p>
            <p>House: 2015 - 2023</p>
          </div>
        </body></html>"#;

    #[test]
    fn member_list_drops_honorific() {
        let members = parse_member_list(&Document::parse(LIST));
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].short_name, "Alcala");
        assert_eq!(members[0].link, "/li/b2023_24/members/rep_alcala_john_1/");
        assert_eq!(members[1].short_name, "Alley");
    }

    #[test]
    fn full_bio() {
        let member = MemberLink { short_name: s!("Alcala"), link: s!("/li/b2023_24/members/rep_alcala_john_1/") };
        let url = "http://kslegislature.org/li/b2023_24/members/rep_alcala_john_1/";
        let leg = parse_bio(&Document::parse(BIO), &member, url);

        assert_eq!(leg.chamber, "House");
        assert_eq!(leg.name, "John Alcala");
        assert_eq!(leg.title, "Minority Whip");
        assert_eq!(leg.district, "57");
        assert_eq!(leg.party, "Democrat");
        assert_eq!(leg.email, "John.Alcala@house.ks.gov");
        assert_eq!(leg.phone, "7852967371");
        assert_eq!(
            leg.experience,
            vec![
                Service { chamber: s!("Senate"), start: s!("2023"), end: s!("Present") },
                Service { chamber: s!("House"), start: s!("2015"), end: s!("2023") },
            ]
        );
        assert_eq!(leg.to_row()[7], "Senate 2023-Present;House 2015-2023");
        assert_eq!(leg.short_name, "Alcala");
        assert_eq!(leg.url, url);
    }

    #[test]
    fn missing_nodes_leave_fields_empty() {
        let member = MemberLink { short_name: s!("Ghost"), link: s!("/x/") };
        let leg = parse_bio(&Document::parse("<html><body></body></html>"), &member, "http://x/sen_ghost/");
        assert_eq!(leg.chamber, "Senate");
        assert_eq!(leg.name, "");
        assert_eq!(leg.district, "");
        assert_eq!(leg.party, "");
        assert_eq!(leg.email, "");
        assert_eq!(leg.phone, "");
        assert!(leg.experience.is_empty());
        assert_eq!(leg.to_row().len(), Legislator::HEADERS.len());
    }

    #[test]
    fn field_helpers() {
        assert_eq!(name_and_title("Senator Larry Alley"), (s!("Larry Alley"), s!()));
        assert_eq!(district_and_party("District 32 - Republican"), (s!("32"), s!("Republican")));
        assert_eq!(chamber_from_url("/members/xyz/"), "");
        assert_eq!(phone("Phone: 785 296-7500"), "7852967500");
        assert_eq!(phone("no number"), "");
    }
}
