//! Services page renderer.

use crate::{
    assemble::services::ServicesView,
    utils::html::{escape, escape_attr},
};

/// The `/services/` page content.
pub fn services_page(view: &ServicesView) -> String {
    let cards = if view.services.is_empty() {
        "    <p class=\"empty-state\">Our services are being updated — check back soon.</p>"
            .to_string()
    } else {
        let cards = view
            .services
            .iter()
            .map(|service| {
                let image = match &service.image_url {
                    Some(url) => format!(
                        "        <div class=\"card-media\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>\n",
                        escape_attr(url),
                        escape_attr(&service.title)
                    ),
                    None => String::new(),
                };
                format!(
                    "      <div class=\"card service-card\">\n{image}        <div class=\"card-body\">\n          <div class=\"stat-icon\">{icon}</div>\n          <h3>{title}</h3>\n          <p class=\"meta\">{description}</p>\n        </div>\n      </div>",
                    icon = service.icon_svg,
                    title = escape(&service.title),
                    description = escape(&service.description),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("    <div class=\"card-grid\">\n{cards}\n    </div>")
    };

    format!(
        "    <section class=\"page-intro\">\n      <h1>{}</h1>\n    </section>\n{cards}\n",
        escape(&view.title)
    )
}
