//! Events page assembler.

use super::{SeoView, shape_seo};
use crate::{
    config::cfg,
    content::{
        ContentClient, FetchOptions,
        query,
        types::{Event, EventsPage},
    },
    log,
    utils::date::EventDate,
};

pub const DEFAULT_EVENTS_TITLE: &str = "We craft experiences that move people";
pub const DEFAULT_EVENTS_DESCRIPTION: &str = "From intimate VIP dinners and creator meetups \
to large-scale brand campaigns and national talent tours, we handle every detail from start \
to finish.";

/// One event card in the carousel.
#[derive(Debug, Clone)]
pub struct EventCard {
    pub title: String,
    pub image_url: Option<String>,
    /// Short human date (`Jan 15, 2025`); absent when unparseable.
    pub date_label: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// `(value, label)` stat chips, authored order preserved.
    pub stats: Vec<(String, String)>,
}

/// One service block above the carousel.
#[derive(Debug, Clone)]
pub struct EventsServiceView {
    pub title: String,
    pub description: String,
}

/// The events page view model.
#[derive(Debug, Clone)]
pub struct EventsView {
    pub title: String,
    pub description: String,
    pub services: Vec<EventsServiceView>,
    pub events: Vec<EventCard>,
    pub seo: SeoView,
}

/// Shape the events page from its copy document and the event list.
pub fn shape_events(doc: Option<EventsPage>, events: Vec<Event>) -> EventsView {
    let doc = doc.unwrap_or_default();

    let title = doc
        .events_title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_EVENTS_TITLE.to_string());
    let description = doc
        .events_description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_EVENTS_DESCRIPTION.to_string());

    let services = doc
        .events_services
        .into_iter()
        .filter_map(|service| {
            Some(EventsServiceView {
                title: service.title.filter(|t| !t.is_empty())?,
                description: service.description.unwrap_or_default(),
            })
        })
        .collect();

    let events = events
        .into_iter()
        .map(|event| EventCard {
            title: event.title.unwrap_or_else(|| "Brand Link Event".to_string()),
            image_url: event.image_url.filter(|u| !u.is_empty()),
            date_label: event
                .event_date
                .as_deref()
                .and_then(EventDate::parse)
                .map(|d| d.format_short()),
            location: event.location.filter(|l| !l.is_empty()),
            description: event
                .summary
                .filter(|s| !s.is_empty())
                .or(event.description.filter(|d| !d.is_empty())),
            stats: event
                .stats
                .into_iter()
                .filter_map(|stat| Some((stat.value?, stat.label?)))
                .collect(),
        })
        .collect();

    EventsView {
        seo: shape_seo(None, "Events | Brand Link", &description),
        title,
        description,
        services,
        events,
    }
}

/// Fetch the copy document and event list concurrently and shape them.
pub async fn assemble_events(client: &ContentClient) -> EventsView {
    let options = FetchOptions::revalidate(cfg().build.revalidate);

    let (doc, events) = tokio::join!(
        client.fetch_one::<EventsPage>(&query::EVENTS_PAGE, &[], options),
        client.fetch_many::<Event>(&query::EVENTS_LIST, &[], options),
    );

    let doc = doc.unwrap_or_else(|e| {
        log!("content"; "events page fetch failed: {e:#}");
        None
    });
    let events = events.unwrap_or_else(|e| {
        log!("content"; "events list fetch failed: {e:#}");
        Vec::new()
    });

    shape_events(doc, events)
}
