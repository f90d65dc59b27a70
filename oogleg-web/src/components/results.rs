//! Result list components

use html_escape::{encode_double_quoted_attribute, encode_text};
use oogleg_core::view::NO_RESULTS_MESSAGE;
use oogleg_core::{ResultEntry, ResultsBody};

/// Renders one result: breadcrumb, linked title and description.
pub fn result_entry(entry: &ResultEntry) -> String {
    format!(
        r#"<div class="max-w-2xl">
            <div class="text-sm text-green-700 mb-1">{breadcrumb}</div>
            <h3 class="text-xl text-blue-600 hover:underline cursor-pointer mb-1">
                <a href="{href}" target="_blank" rel="noopener noreferrer">{title}</a>
            </h3>
            <p class="text-sm text-gray-600 leading-relaxed">{snippet}</p>
        </div>"#,
        breadcrumb = encode_text(&entry.breadcrumb),
        href = encode_double_quoted_attribute(link_target(&entry.url)),
        title = encode_text(&entry.title),
        snippet = encode_text(entry.snippet),
    )
}

/// Renders the body below the results header.
pub fn results_body(body: &ResultsBody) -> String {
    let inner = match body {
        ResultsBody::Searching => r#"<div class="flex items-center justify-center py-12">
                <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"></div>
                <span class="ml-2 text-gray-600">Searching...</span>
            </div>"#
            .to_string(),
        ResultsBody::Listing { summary, entries } => {
            let items: String = entries.iter().map(result_entry).collect();
            format!(
                r#"<div class="text-sm text-gray-600 mb-6">{}</div>
            <div class="space-y-6">{items}</div>"#,
                encode_text(summary)
            )
        }
        ResultsBody::NoResults => format!(
            r#"<div class="text-center py-12"><p class="text-gray-600">{NO_RESULTS_MESSAGE}</p></div>"#
        ),
    };

    format!(r#"<div class="max-w-6xl mx-auto px-4 py-6">{inner}</div>"#)
}

/// Only web URLs become links; anything else points nowhere.
fn link_target(url: &str) -> &str {
    if url.starts_with("https://") || url.starts_with("http://") {
        url
    } else {
        "#"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_entry_contents() {
        let entry = ResultEntry::from_url("https://wikipedia.org/wiki/Cat-facts");
        let html = result_entry(&entry);

        assert!(html.contains("wikipedia.org › https://wikipedia.org/wiki/Cat-facts"));
        assert!(html.contains(r#"href="https://wikipedia.org/wiki/Cat-facts""#));
        assert!(html.contains(">Cat Facts</a>"));
        assert!(html.contains(entry.snippet));
    }

    #[test]
    fn test_non_web_urls_are_not_linked() {
        let entry = ResultEntry::from_url("javascript:alert(1)");
        assert!(result_entry(&entry).contains(r##"href="#""##));
    }

    #[test]
    fn test_listing_keeps_api_order() {
        let body = ResultsBody::Listing {
            summary: "About 2 results for \"x\"".to_string(),
            entries: vec![
                ResultEntry::from_url("https://b.example/second-page"),
                ResultEntry::from_url("https://a.example/first-page"),
            ],
        };
        let html = results_body(&body);

        let second = html.find("Second Page").unwrap();
        let first = html.find("First Page").unwrap();
        assert!(second < first);
        assert!(html.contains("About 2 results for &quot;x&quot;") || html.contains("About 2 results for \"x\""));
    }

    #[test]
    fn test_no_results_message() {
        assert!(results_body(&ResultsBody::NoResults).contains(NO_RESULTS_MESSAGE));
    }
}
