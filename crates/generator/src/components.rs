//! Reusable HTML fragments shared by the index, detail and not-found pages.

use folio_core::{SiteConfig, Status};

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Status pill; `live` also gets the pulsing dot
pub fn status_badge(status: Status) -> String {
    let badge = status.badge();
    let pulse = if badge.pulse {
        r#"<span class="badge-pulse" aria-hidden="true"></span>"#
    } else {
        ""
    };
    format!(
        r#"<span class="badge {}" data-status="{}">{}{}</span>"#,
        badge.class,
        status.as_str(),
        pulse,
        badge.label
    )
}

/// Flat list of tag chips, in the given order
pub fn chips<S: AsRef<str>>(items: &[S], kind: &str) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"<span class="chip chip-{}">{}</span>"#,
                kind,
                html_escape(item.as_ref())
            )
        })
        .collect()
}

/// External link that opens in a new tab; escapes both `href` and `label`
pub fn external_link(href: &str, class: &str, label: &str) -> String {
    format!(
        r#"<a class="{}" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        class,
        html_escape(href),
        html_escape(label)
    )
}

/// Header used on the index page: identity block plus social links.
///
/// The mobile menu is a `<details>` element so its open state stays in the
/// browser and never touches generated content.
pub fn site_header(site: &SiteConfig) -> String {
    let links: String = site
        .social
        .iter()
        .map(|link| external_link(&link.url, "nav-link", &link.label))
        .collect();

    format!(
        r#"<header class="site-header">
    <div class="identity">
        <div class="initials">{}</div>
        <div>
            <p class="owner">{}</p>
            <p class="subtitle">{}</p>
        </div>
    </div>
    <nav class="nav-desktop">{}</nav>
    <details class="nav-mobile">
        <summary aria-label="Toggle menu">Menu</summary>
        <nav>{}</nav>
    </details>
</header>"#,
        html_escape(&site.initials),
        html_escape(&site.owner),
        html_escape(&site.subtitle),
        links,
        links
    )
}

/// Footer with copyright line and optional note
pub fn site_footer(site: &SiteConfig, back_link: bool) -> String {
    let copyright = match site.copyright_year {
        Some(year) => format!("&copy; {} {}", year, html_escape(&site.owner)),
        None => format!("&copy; {}", html_escape(&site.owner)),
    };

    let back = if back_link {
        r#"<a class="back-link" href="/">&larr; Back to Portfolio</a>"#
    } else {
        ""
    };

    let note = site
        .footer_note
        .as_deref()
        .map(|note| format!(r#"<span class="footer-note">{}</span>"#, html_escape(note)))
        .unwrap_or_default();

    format!(
        r#"<footer class="site-footer">{}<span class="copyright">{}</span>{}</footer>"#,
        back, copyright, note
    )
}

/// Wrap a page body in a complete HTML document
///
/// `title` and `description` must already be escaped.
pub fn document(title: &str, description: Option<&str>, body: &str, is_preview: bool) -> String {
    let meta_description = description
        .map(|d| format!("\n    <meta name=\"description\" content=\"{}\">", d))
        .unwrap_or_default();

    // Preview badge and reload script only in preview mode
    let (preview_badge, reload_script) = if is_preview {
        (
            r#"<div class="preview-badge">PREVIEW MODE - Live Reload Active</div>"#,
            r#"<script>
        // Hot reload via Server-Sent Events
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => {
            console.log('Reloading...');
            location.reload();
        };
        eventSource.onerror = () => {
            console.log('Preview server disconnected');
            eventSource.close();
        };
    </script>"#,
        )
    } else {
        ("", "")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>{}
</head>
<body>
{}
{}
{}
</body>
</html>
"#,
        title, meta_description, preview_badge, body, reload_script
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::SocialLink;

    #[test]
    fn test_html_escape_basic_characters() {
        assert_eq!(html_escape("Hello World"), "Hello World");
        assert_eq!(html_escape("Test & Test"), "Test &amp; Test");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#x27;single&#x27;");
    }

    #[test]
    fn test_html_escape_xss_attempts() {
        assert_eq!(
            html_escape("<script>alert('XSS')</script>"),
            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
        );
        assert_eq!(
            html_escape("\"><img src=x onerror=alert(1)>"),
            "&quot;&gt;&lt;img src=x onerror=alert(1)&gt;"
        );
    }

    #[test]
    fn test_html_escape_unicode() {
        assert_eq!(html_escape(""), "");
        assert_eq!(html_escape("プロジェクト"), "プロジェクト");
        assert_eq!(html_escape("GPT-4o → résumé"), "GPT-4o → résumé");
    }

    #[test]
    fn test_status_badge_live_has_pulse() {
        let html = status_badge(Status::Live);
        assert!(html.contains("badge-live"));
        assert!(html.contains("badge-pulse"));
        assert!(html.contains(">Live</span>"));
    }

    #[test]
    fn test_status_badge_others_have_no_pulse() {
        for status in [Status::InProgress, Status::Planned] {
            let html = status_badge(status);
            assert!(html.contains(status.badge().class));
            assert!(html.contains(status.badge().label));
            assert!(!html.contains("badge-pulse"));
        }
    }

    #[test]
    fn test_chips_keep_order_and_escape() {
        let html = chips(&["b", "a", "<c>"], "tech");
        let b = html.find(">b<").unwrap();
        let a = html.find(">a<").unwrap();
        assert!(b < a);
        assert!(html.contains("&lt;c&gt;"));
        assert_eq!(html.matches("chip-tech").count(), 3);
    }

    #[test]
    fn test_chips_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(chips(&empty, "tech"), "");
    }

    #[test]
    fn test_external_link_escapes_label_and_href() {
        let html = external_link("https://x.test/?q=\"a\"", "affordance", "<Demo>");
        assert!(html.contains(r#"href="https://x.test/?q=&quot;a&quot;""#));
        assert!(html.contains(">&lt;Demo&gt;</a>"));
    }

    #[test]
    fn test_footer_year_is_optional() {
        let mut site = SiteConfig::default();
        assert!(site_footer(&site, false).contains("&copy; Portfolio"));

        site.copyright_year = Some(2026);
        site.footer_note = Some("Hosted on GitHub Pages".to_string());
        let footer = site_footer(&site, true);
        assert!(footer.contains("&copy; 2026 Portfolio"));
        assert!(footer.contains("Hosted on GitHub Pages"));
        assert!(footer.contains("Back to Portfolio"));
    }

    #[test]
    fn test_header_escapes_social_links() {
        let site = SiteConfig {
            social: vec![SocialLink {
                label: "Git<Hub>".to_string(),
                url: "https://example.com/?a=1&b=2".to_string(),
            }],
            ..SiteConfig::default()
        };
        let header = site_header(&site);
        assert!(header.contains(">Git&lt;Hub&gt;</a>"));
        assert!(!header.contains("&amp;lt;"));
        assert!(header.contains("https://example.com/?a=1&amp;b=2"));
        assert!(header.contains("<details class=\"nav-mobile\">"));
    }

    #[test]
    fn test_document_preview_only_scripts() {
        let built = document("T", None, "<p>body</p>", false);
        assert!(!built.contains("EventSource"));
        assert!(!built.contains("PREVIEW MODE"));

        let preview = document("T", Some("desc"), "<p>body</p>", true);
        assert!(preview.contains("EventSource('/_reload')"));
        assert!(preview.contains(r#"<meta name="description" content="desc">"#));
    }
}
