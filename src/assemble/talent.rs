//! Talent directory and profile assemblers, plus route derivation.

use super::{SeoView, shape_seo};
use crate::{
    config::cfg,
    content::{
        ContentClient, FetchOptions,
        image::{Fit, ImageUrl},
        portable_text, query,
        types::Influencer,
    },
    log,
    render::format::format_followers,
    utils::slug::handle_segment,
};
use serde_json::json;

/// Derive a card-sized CDN variant of a profile image; sources pass
/// through untouched when the store identity is unavailable (tests) or
/// the source is unusable.
fn card_image(source: &str) -> Option<String> {
    let config = cfg();
    match config
        .store
        .as_ref()
        .and_then(|store| ImageUrl::from_source(store, source))
    {
        Some(url) => Some(url.width(640).height(800).fit(Fit::Crop).build()),
        None => (!source.is_empty()).then(|| source.to_string()),
    }
}

/// Full-width variant for the profile header.
fn hero_image(source: &str) -> Option<String> {
    let config = cfg();
    match config
        .store
        .as_ref()
        .and_then(|store| ImageUrl::from_source(store, source))
    {
        Some(url) => Some(url.width(1200).fit(Fit::Max).build()),
        None => (!source.is_empty()).then(|| source.to_string()),
    }
}

/// A card in the directory grid, the homepage grid, and the "other
/// influencers" rail.
#[derive(Debug, Clone)]
pub struct InfluencerCard {
    pub name: String,
    pub handle: String,
    /// Route to the profile page, derived from the handle.
    pub route: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    /// Abbreviated Instagram count, the directory's ranking metric.
    pub instagram_label: String,
}

impl InfluencerCard {
    /// Build a card; influencers without a handle cannot be linked and
    /// yield `None`.
    pub fn from_doc(doc: &Influencer) -> Option<Self> {
        let handle = doc.handle.clone().filter(|h| !h.is_empty())?;
        let segment = handle_segment(&handle);
        if segment.is_empty() {
            return None;
        }
        Some(Self {
            name: doc.name.clone().unwrap_or_else(|| format!("@{handle}")),
            route: format!("/talent-directory/{segment}/"),
            handle,
            image_url: doc.image_url.as_deref().and_then(card_image),
            description: doc.description.clone().filter(|d| !d.is_empty()),
            instagram_label: format_followers(doc.instagram_followers),
        })
    }
}

/// The talent directory page.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    pub influencers: Vec<InfluencerCard>,
    pub seo: SeoView,
}

/// One follower chip on a profile page.
#[derive(Debug, Clone)]
pub struct PlatformChip {
    /// Platform key, also the icon name.
    pub platform: &'static str,
    pub count_label: String,
    pub link: Option<String>,
}

/// A single influencer profile page.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub name: String,
    pub handle: String,
    pub route: String,
    pub image_url: Option<String>,
    /// Rendered bio; falls back to the short description.
    pub about_html: String,
    pub chips: Vec<PlatformChip>,
    pub others: Vec<InfluencerCard>,
    pub seo: SeoView,
}

/// Sort key: Instagram reach, absent counts last.
fn instagram_reach(doc: &Influencer) -> u64 {
    doc.instagram_followers.unwrap_or(0)
}

/// Shape the directory: all linkable influencers, strongest reach first.
pub fn shape_directory(mut influencers: Vec<Influencer>) -> DirectoryView {
    influencers.sort_by(|a, b| instagram_reach(b).cmp(&instagram_reach(a)));
    DirectoryView {
        influencers: influencers
            .iter()
            .filter_map(InfluencerCard::from_doc)
            .collect(),
        seo: shape_seo(
            None,
            "Talent Directory | Brand Link",
            "Meet the creators on the Brand Link roster.",
        ),
    }
}

/// Shape a profile from the influencer document and the "others" rail.
///
/// `None` means the handle resolved to no document: a not-found outcome,
/// handled by the caller, never a crash.
pub fn shape_profile(doc: Option<Influencer>, others: Vec<Influencer>) -> Option<ProfileView> {
    let doc = doc?;
    let card = InfluencerCard::from_doc(&doc)?;

    let about_html = match doc.about.as_ref() {
        Some(blocks) => {
            let html = portable_text::to_html(blocks);
            if html.is_empty() { fallback_about(&doc) } else { html }
        }
        None => fallback_about(&doc),
    };

    let chips = [
        ("instagram", doc.instagram_followers, doc.instagram_link.clone()),
        ("tiktok", doc.tiktok_followers, doc.tiktok_link.clone()),
        ("youtube", doc.youtube_followers, doc.youtube_link.clone()),
    ]
    .into_iter()
    .filter_map(|(platform, count, link)| {
        // A chip only appears for platforms with a real presence.
        let count = count.filter(|n| *n > 0)?;
        Some(PlatformChip {
            platform,
            count_label: format_followers(Some(count)),
            link: link.filter(|u| !u.is_empty()),
        })
    })
    .collect();

    let description = doc
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("{} on Brand Link", card.name));

    Some(ProfileView {
        seo: shape_seo(None, &format!("@{} | Brand Link", card.handle), &description),
        name: card.name.clone(),
        handle: card.handle.clone(),
        route: card.route.clone(),
        image_url: doc.image_url.as_deref().and_then(hero_image),
        about_html,
        chips,
        others: others
            .iter()
            .filter_map(InfluencerCard::from_doc)
            .take(10)
            .collect(),
    })
}

fn fallback_about(doc: &Influencer) -> String {
    let text = doc
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "Creator on the Brand Link roster.".to_string());
    format!("<p>{}</p>\n", crate::utils::html::escape(&text))
}

// ============================================================================
// Assembly
// ============================================================================

fn options() -> FetchOptions {
    FetchOptions::revalidate(cfg().build.revalidate)
}

/// Fetch and shape the full directory. Fetch failure → empty grid.
pub async fn assemble_directory(client: &ContentClient) -> DirectoryView {
    let influencers = client
        .fetch_many::<Influencer>(&query::ALL_INFLUENCERS, &[], options())
        .await
        .unwrap_or_else(|e| {
            log!("content"; "influencer list fetch failed: {e:#}");
            Vec::new()
        });
    shape_directory(influencers)
}

/// Fetch and shape one profile. The lookup parameterizes the follow-up
/// query, so the two run sequentially. `None` → not found.
pub async fn assemble_profile(client: &ContentClient, handle: &str) -> Option<ProfileView> {
    let doc = match client
        .fetch_one::<Influencer>(
            &query::INFLUENCER_BY_HANDLE,
            &[("handle", json!(handle))],
            options(),
        )
        .await
    {
        Ok(doc) => doc,
        Err(e) => {
            log!("content"; "profile fetch failed for @{handle}: {e:#}");
            None
        }
    };
    doc.as_ref()?;

    let others = client
        .fetch_many::<Influencer>(
            &query::OTHER_INFLUENCERS,
            &[("handle", json!(handle))],
            options(),
        )
        .await
        .unwrap_or_else(|e| {
            log!("content"; "other-influencers fetch failed: {e:#}");
            Vec::new()
        });

    shape_profile(doc, others)
}

/// Derive the static route parameters: every valid handle.
pub async fn routes(client: &ContentClient) -> Vec<String> {
    client
        .fetch_many::<String>(&query::ALL_HANDLES, &[], options())
        .await
        .unwrap_or_else(|e| {
            log!("content"; "handle enumeration failed: {e:#}");
            Vec::new()
        })
        .into_iter()
        .filter(|h| !h.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn influencer(handle: &str, instagram: Option<u64>) -> Influencer {
        serde_json::from_value(json!({
            "name": format!("Name {handle}"),
            "handle": handle,
            "instagramFollowers": instagram,
        }))
        .unwrap()
    }

    #[test]
    fn test_card_requires_handle() {
        let mut doc = influencer("jane", Some(1000));
        assert!(InfluencerCard::from_doc(&doc).is_some());

        doc.handle = None;
        assert!(InfluencerCard::from_doc(&doc).is_none());
    }

    #[test]
    fn test_card_route_derivation() {
        let card = InfluencerCard::from_doc(&influencer("@Jane Doe", Some(10))).unwrap();
        assert_eq!(card.route, "/talent-directory/jane-doe/");
        assert_eq!(card.handle, "@Jane Doe");
    }

    #[test]
    fn test_directory_sorted_by_instagram_desc() {
        let view = shape_directory(vec![
            influencer("small", Some(100)),
            influencer("big", Some(2_000_000)),
            influencer("none", None),
            influencer("mid", Some(50_000)),
        ]);
        let handles: Vec<_> = view.influencers.iter().map(|c| c.handle.as_str()).collect();
        assert_eq!(handles, vec!["big", "mid", "small", "none"]);
        assert_eq!(view.influencers[0].instagram_label, "2M");
    }

    #[test]
    fn test_profile_not_found_is_none() {
        assert!(shape_profile(None, Vec::new()).is_none());
    }

    #[test]
    fn test_profile_chips_skip_absent_platforms() {
        let doc: Influencer = serde_json::from_value(json!({
            "name": "Jane",
            "handle": "jane",
            "instagramFollowers": 1_500,
            "tiktokFollowers": 0,
            "instagramLink": "https://instagram.com/jane",
        }))
        .unwrap();

        let profile = shape_profile(Some(doc), Vec::new()).unwrap();
        assert_eq!(profile.chips.len(), 1);
        assert_eq!(profile.chips[0].platform, "instagram");
        assert_eq!(profile.chips[0].count_label, "1.5K");
        assert!(profile.chips[0].link.is_some());
    }

    #[test]
    fn test_profile_about_falls_back_to_description() {
        let doc: Influencer = serde_json::from_value(json!({
            "name": "Jane",
            "handle": "jane",
            "description": "Fashion & lifestyle",
        }))
        .unwrap();

        let profile = shape_profile(Some(doc), Vec::new()).unwrap();
        assert!(profile.about_html.contains("Fashion &amp; lifestyle"));
    }

    #[test]
    fn test_profile_about_renders_rich_text() {
        let doc: Influencer = serde_json::from_value(json!({
            "name": "Jane",
            "handle": "jane",
            "about": [
                {"_type": "block", "children": [{"text": "Ten years on camera."}]}
            ],
        }))
        .unwrap();

        let profile = shape_profile(Some(doc), Vec::new()).unwrap();
        assert!(profile.about_html.contains("<p>Ten years on camera.</p>"));
    }

    #[test]
    fn test_profile_others_capped_at_ten() {
        let others: Vec<Influencer> = (0..15)
            .map(|i| influencer(&format!("other{i}"), Some(i)))
            .collect();
        let profile =
            shape_profile(Some(influencer("jane", Some(1))), others).unwrap();
        assert_eq!(profile.others.len(), 10);
    }
}
