//! Search page - landing and results layouts

use axum::response::Html;
use oogleg_core::{Layout, PageView, ResultsBody};
use uuid::Uuid;

use crate::components::layout::{event_url, search_indicator};
use crate::components::{brand, brand_mark, button, results_body, search_form};

/// Renders the contents of `#page` for `view`.
pub fn render_body(session: Uuid, view: &PageView) -> String {
    match &view.layout {
        Layout::Landing => landing(session, view),
        Layout::Results(body) => results(session, view, body),
    }
}

/// Renders the complete HTML document for `view`.
pub fn render_document(session: Uuid, view: &PageView) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <title>Oogleg</title>
            <script src="https://unpkg.com/htmx.org@2.0.4"></script>
            <script src="https://cdn.tailwindcss.com"></script>
            <style>
                .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
                .htmx-request .htmx-indicator {{ opacity: 1; }}
                .htmx-request.htmx-indicator {{ opacity: 1; }}
            </style>
        </head>
        <body class="min-h-screen bg-white">
            <div id="page">{}</div>
        </body>
        </html>"#,
        render_body(session, view)
    ))
}

fn landing(session: Uuid, view: &PageView) -> String {
    let disabled = if view.loading { "disabled" } else { "" };
    let actions = format!(
        r#"<div class="flex justify-center mt-8 space-x-4">
                {}
                {}
                {}
            </div>"#,
        button(
            view.search_label(),
            "secondary",
            &format!(r#"type="submit" {disabled}"#)
        ),
        button(
            "I'm Feeling Lucky",
            "secondary",
            &format!(
                r##"type="button" hx-post="{}" hx-target="#page""##,
                event_url(session, "lucky")
            )
        ),
        search_indicator(),
    );

    format!(
        r#"<div class="max-w-6xl mx-auto px-4 pt-32">
            <div class="text-center mb-8">{}</div>
            <div class="flex justify-center mb-8">{}</div>
        </div>"#,
        brand(),
        search_form(session, view, &actions)
    )
}

fn results(session: Uuid, view: &PageView, body: &ResultsBody) -> String {
    let disabled = if view.loading { "disabled" } else { "" };
    let actions = format!(
        r#"<div class="absolute right-0 top-0 flex items-center translate-x-full">{}{}</div>"#,
        button("Search", "primary", &format!(r#"type="submit" {disabled}"#)),
        search_indicator(),
    );

    format!(
        r#"<div class="border-b border-gray-200">
            <div class="max-w-6xl mx-auto px-4 py-4">
                <div class="flex items-center">
                    {}
                    {}
                </div>
            </div>
        </div>
        {}"#,
        brand_mark(session),
        search_form(session, view, &actions),
        results_body(body)
    )
}
