//! Talent directory and profile renderers.

use super::icons;
use crate::{
    assemble::talent::{DirectoryView, InfluencerCard, ProfileView},
    utils::html::{escape, escape_attr},
};

const PROFILE_TEMPLATE: &str = include_str!("../embed/talent_profile.html");

/// One influencer card; shared by the directory, the homepage grid, and
/// the "other influencers" rail.
pub fn influencer_card(card: &InfluencerCard) -> String {
    let media = match &card.image_url {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_attr(url),
            escape_attr(&card.name)
        ),
        None => String::new(),
    };

    format!(
        "<a class=\"card\" href=\"{route}\">\n  <div class=\"card-media\">{media}</div>\n  <div class=\"card-body\">\n    <p class=\"handle\">@{handle}</p>\n    <p class=\"meta\">{icon}{followers}</p>\n  </div>\n</a>",
        route = escape_attr(&card.route),
        handle = escape(&card.handle),
        icon = icons::INSTAGRAM,
        followers = escape(&card.instagram_label),
    )
}

/// The `/talent-directory/` page content.
pub fn directory_page(view: &DirectoryView) -> String {
    let grid = if view.influencers.is_empty() {
        "<p class=\"empty-state\">Our roster is being updated — check back soon.</p>".to_string()
    } else {
        let cards = view
            .influencers
            .iter()
            .map(influencer_card)
            .collect::<Vec<_>>()
            .join("\n");
        format!("<div class=\"card-grid\">\n{cards}\n</div>")
    };

    format!(
        "    <section class=\"page-intro\">\n      <h1>Talent Directory</h1>\n      <p>Meet the creators on the Brand Link roster.</p>\n    </section>\n{grid}\n"
    )
}

/// A `/talent-directory/{handle}/` profile page content.
pub fn profile_page(view: &ProfileView) -> String {
    let image = match &view.image_url {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\">",
            escape_attr(url),
            escape_attr(&view.name)
        ),
        None => String::new(),
    };

    let chips = view
        .chips
        .iter()
        .map(|chip| {
            let inner = format!(
                "{}{}",
                icons::resolve(chip.platform),
                escape(&chip.count_label)
            );
            match &chip.link {
                Some(url) => format!(
                    "            <a class=\"chip\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{inner}</a>",
                    escape_attr(url)
                ),
                None => format!("            <span class=\"chip\">{inner}</span>"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let others = view
        .others
        .iter()
        .take(4)
        .map(influencer_card)
        .collect::<Vec<_>>()
        .join("\n");

    PROFILE_TEMPLATE
        .replace("{profile_image}", &image)
        .replace("{chips}", &chips)
        .replace("{others}", &others)
        .replace("{about}", &view.about_html)
        .replace("{handle}", &escape(&view.handle))
}
