//! Layout components - brand, search box, buttons

use html_escape::{encode_double_quoted_attribute, encode_text};
use oogleg_core::PageView;
use uuid::Uuid;

/// Tailwind color of each brand letter, in order.
const BRAND_LETTERS: [(char, &str); 6] = [
    ('O', "text-blue-500"),
    ('o', "text-red-500"),
    ('g', "text-yellow-500"),
    ('l', "text-blue-500"),
    ('e', "text-green-500"),
    ('g', "text-red-500"),
];

/// URL of an event endpoint for a page session.
pub fn event_url(session: Uuid, event: &str) -> String {
    format!("/session/{session}/{event}")
}

/// Large multicolored brand shown on the landing layout.
pub fn brand() -> String {
    let letters: String = BRAND_LETTERS
        .iter()
        .map(|(letter, color)| format!(r#"<span class="{color}">{letter}</span>"#))
        .collect();

    format!(r#"<h1 class="text-8xl font-semibold text-gray-700 mb-8">{letters}</h1>"#)
}

/// Brand mark in the results header. Clicking it resets the page.
pub fn brand_mark(session: Uuid) -> String {
    format!(
        r##"<button type="button" class="text-5xl font-semibold text-blue-500 hover:text-blue-600 transition-colors duration-200 mr-6"
                hx-post="{}" hx-target="#page">O</button>"##,
        event_url(session, "reset")
    )
}

/// Renders a button with Tailwind styling.
///
/// `variant` is `primary` (results header) or `secondary` (landing).
pub fn button(text: &str, variant: &str, attributes: &str) -> String {
    let classes = match variant {
        "primary" => {
            "ml-4 bg-blue-500 hover:bg-blue-600 text-white px-6 py-4 rounded-lg text-sm font-semibold"
        }
        _ => {
            "bg-gray-50 hover:bg-gray-100 border border-gray-200 text-gray-700 px-6 py-2 rounded text-sm"
        }
    };

    format!(
        r#"<button class="{classes}" {attributes}>{}</button>"#,
        encode_text(text)
    )
}

/// The "×" affordance, or nothing when the search box is empty.
pub fn clear_button(session: Uuid, show: bool) -> String {
    if !show {
        return String::new();
    }

    format!(
        r##"<button type="button" class="p-2 hover:bg-gray-100 rounded-full mr-2 text-gray-400" title="Clear"
                hx-post="{}" hx-target="#page">&times;</button>"##,
        event_url(session, "clear")
    )
}

/// Search box form. Enter submits the form, which runs a search.
///
/// `actions` is rendered inside the form after the input row, so submit
/// buttons placed there also trigger the search.
pub fn search_form(session: Uuid, view: &PageView, actions: &str) -> String {
    format!(
        r##"<form class="relative w-full max-w-3xl" hx-post="{search}" hx-target="#page" hx-indicator="#search-indicator">
            <div class="flex items-center border border-gray-300 rounded-full hover:shadow-md focus-within:shadow-md transition-shadow duration-200">
                <div class="pl-4 pr-2 text-gray-400">&#128269;</div>
                <input class="flex-1 py-3 px-2 text-lg outline-none" type="text" name="query"
                       value="{query}" placeholder="Search the web..." autocomplete="off"
                       hx-post="{update}" hx-trigger="input" hx-target="#clear-slot" hx-swap="innerHTML" />
                <span id="clear-slot">{clear}</span>
            </div>
            {actions}
        </form>"##,
        search = event_url(session, "search"),
        update = event_url(session, "query"),
        query = encode_double_quoted_attribute(&view.query),
        clear = clear_button(session, view.show_clear),
    )
}

/// Spinner text shown by HTMX while a search request is pending.
pub fn search_indicator() -> &'static str {
    r#"<span id="search-indicator" class="htmx-indicator ml-2 text-gray-600">Searching...</span>"#
}
