//! Events page renderer.

use super::pagination;
use crate::{
    assemble::events::{EventCard, EventsView},
    utils::html::{escape, escape_attr},
};

const EVENTS_TEMPLATE: &str = include_str!("../embed/events.html");

/// The `/events/` page content.
pub fn events_page(view: &EventsView) -> String {
    let services = if view.services.is_empty() {
        String::new()
    } else {
        let blocks = view
            .services
            .iter()
            .map(|service| {
                format!(
                    "      <div class=\"events-service\">\n        <h3>{}</h3>\n        <p>{}</p>\n      </div>",
                    escape(&service.title),
                    escape(&service.description)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("    <div class=\"events-services\">\n{blocks}\n    </div>")
    };

    let cards = if view.events.is_empty() {
        "        <p class=\"empty-state\">New events are in the works — stay tuned.</p>"
            .to_string()
    } else {
        view.events
            .iter()
            .map(event_card)
            .collect::<Vec<_>>()
            .join("\n")
    };

    // Server-side page count assumes the widest breakpoint; the client
    // script re-derives it from the live viewport.
    let per_view =
        pagination::items_per_view_capped(view.events.len(), pagination::BREAKPOINT_LG);
    let total_pages = pagination::total_pages(view.events.len(), per_view).max(1);

    EVENTS_TEMPLATE
        .replace("{services}", &services)
        .replace("{event_cards}", &cards)
        .replace("{item_count}", &view.events.len().to_string())
        .replace("{total_pages}", &total_pages.to_string())
        .replace("{description}", &escape(&view.description))
        .replace("{title}", &escape(&view.title))
}

fn event_card(event: &EventCard) -> String {
    let media = match &event.image_url {
        Some(url) => format!(
            "        <div class=\"event-media\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>\n",
            escape_attr(url),
            escape_attr(&event.title)
        ),
        None => String::new(),
    };

    let mut meta = Vec::new();
    if let Some(date) = &event.date_label {
        meta.push(format!("<span>{}</span>", escape(date)));
    }
    if let Some(location) = &event.location {
        meta.push(format!("<span>{}</span>", escape(location)));
    }
    let meta = if meta.is_empty() {
        String::new()
    } else {
        format!(
            "          <p class=\"event-meta\">{}</p>\n",
            meta.join(" ")
        )
    };

    let description = match &event.description {
        Some(text) => format!("          <p>{}</p>\n", escape(text)),
        None => String::new(),
    };

    let stats = if event.stats.is_empty() {
        String::new()
    } else {
        let chips = event
            .stats
            .iter()
            .map(|(value, label)| {
                format!(
                    "            <span class=\"event-stat\"><b>{}</b>{}</span>",
                    escape(value),
                    escape(label)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("          <div class=\"event-stats\">\n{chips}\n          </div>\n")
    };

    format!(
        "      <article class=\"event-card\">\n{media}        <div class=\"event-body\">\n          <h3>{title}</h3>\n{meta}{description}{stats}        </div>\n      </article>",
        title = escape(&event.title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::events::{DEFAULT_EVENTS_TITLE, shape_events};
    use crate::content::types::Event;
    use serde_json::json;

    fn event(title: &str) -> Event {
        serde_json::from_value(json!({
            "title": title,
            "eventDate": "2025-09-12",
            "location": "LA",
            "summary": "A night out.",
            "stats": [{"value": "500", "label": "Guests"}],
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_events_page_still_complete() {
        let html = events_page(&shape_events(None, Vec::new()));
        assert!(html.contains(DEFAULT_EVENTS_TITLE));
        assert!(html.contains("empty-state"));
        assert!(html.contains("data-item-count=\"0\""));
    }

    #[test]
    fn test_event_cards_and_pagination_attrs() {
        let events: Vec<Event> = (0..7).map(|i| event(&format!("Event {i}"))).collect();
        let html = events_page(&shape_events(None, events));

        assert_eq!(html.matches("event-card").count(), 7);
        assert!(html.contains("data-item-count=\"7\""));
        // ceil(7 / 3) at the widest breakpoint
        assert!(html.contains("data-total-pages=\"3\""));
        assert!(html.contains("Sep 12, 2025"));
        assert!(html.contains("<b>500</b>Guests"));
    }
}
