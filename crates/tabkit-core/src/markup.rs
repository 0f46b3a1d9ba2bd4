//! Pagination markup rendering
//!
//! Templating glue only: turns the pure pagination derivation into the
//! nav block appended into each pane.

use tabkit_model::{PageLink, PaginationConfig, PanePagination};

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn render_link(link: &PageLink, direction: &str, config: &PaginationConfig) -> String {
    let mut classes = vec![format!("tabs-{direction}")];
    classes.extend(config.extra_classes.iter().cloned());

    let mut attrs = String::new();
    for (name, value) in &link.attributes {
        attrs.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }

    format!(
        "<a href=\"{}\" class=\"{}\"{}>{}{}{}</a>",
        escape_attr(&link.href),
        classes.join(" "),
        attrs,
        config.before_text,
        link.label,
        config.after_text,
    )
}

/// Render one pane's pagination block. Empty string when the pane has
/// neither neighbor.
pub fn render_pagination(pagination: &PanePagination, config: &PaginationConfig) -> String {
    if pagination.prev.is_none() && pagination.next.is_none() {
        return String::new();
    }

    let mut out = String::from("<nav class=\"tabs-pagination\">");
    if let Some(prev) = &pagination.prev {
        out.push_str(&render_link(prev, "prev", config));
    }
    if let Some(next) = &pagination.next {
        out.push_str(&render_link(next, "next", config));
    }
    out.push_str("</nav>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, label: &str) -> PageLink {
        PageLink {
            href: href.to_string(),
            label: label.to_string(),
            attributes: Vec::new(),
        }
    }

    #[test]
    fn test_renders_prev_and_next() {
        let pagination = PanePagination {
            prev: Some(link("#a", "First")),
            next: Some(link("#c", "Third")),
        };
        let html = render_pagination(&pagination, &PaginationConfig::default());
        assert!(html.starts_with("<nav class=\"tabs-pagination\">"));
        assert!(html.contains("<a href=\"#a\" class=\"tabs-prev\">First</a>"));
        assert!(html.contains("<a href=\"#c\" class=\"tabs-next\">Third</a>"));
    }

    #[test]
    fn test_decoration_applied() {
        let config = PaginationConfig {
            before_text: "« ".to_string(),
            after_text: " »".to_string(),
            extra_classes: vec!["pill".to_string()],
            ..PaginationConfig::default()
        };
        let pagination = PanePagination {
            prev: Some(link("#a", "First")),
            next: None,
        };
        let html = render_pagination(&pagination, &config);
        assert!(html.contains("class=\"tabs-prev pill\""));
        assert!(html.contains("« First »"));
    }

    #[test]
    fn test_attributes_escaped() {
        let pagination = PanePagination {
            prev: None,
            next: Some(PageLink {
                href: "#b".to_string(),
                label: "B".to_string(),
                attributes: vec![("title".to_string(), "say \"hi\"".to_string())],
            }),
        };
        let html = render_pagination(&pagination, &PaginationConfig::default());
        assert!(html.contains("title=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn test_no_neighbors_renders_nothing() {
        let html = render_pagination(&PanePagination::default(), &PaginationConfig::default());
        assert!(html.is_empty());
    }
}
