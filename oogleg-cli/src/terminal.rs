//! Terminal rendering of the search page

use oogleg_core::{Layout, PageView, ResultsBody};
use oogleg_core::view::NO_RESULTS_MESSAGE;

/// A line typed at the interactive prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// Replace the query and search for it.
    Query(String),
    /// Search for the current query.
    Search,
    /// Fill in the next lucky query.
    Lucky,
    /// Empty the query.
    Clear,
    /// Back to the landing page.
    Reset,
    /// Leave the prompt.
    Quit,
    /// Unrecognized `:` command.
    Unknown(String),
}

/// Interprets one line of interactive input.
///
/// Plain text is a query. An empty line searches for the current query, as
/// pressing Enter in an unchanged search box would.
pub fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "" | ":search" => Input::Search,
        ":lucky" => Input::Lucky,
        ":clear" => Input::Clear,
        ":reset" => Input::Reset,
        ":quit" | ":q" => Input::Quit,
        command if command.starts_with(':') => Input::Unknown(command.to_string()),
        _ => Input::Query(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Renders `view` as plain text.
pub fn render(view: &PageView) -> String {
    let mut out = String::new();

    match &view.layout {
        Layout::Landing => {
            out.push_str("Oogleg\n\n");
            out.push_str(&search_box(view));
            out.push_str(&format!(
                "\n  [{}]  [I'm Feeling Lucky]   (:search :lucky :clear :quit)\n",
                view.search_label()
            ));
        }
        Layout::Results(body) => {
            out.push_str(&search_box(view));
            out.push_str("  (:search :clear :reset :quit)\n\n");
            out.push_str(&results(body));
        }
    }

    out
}

fn search_box(view: &PageView) -> String {
    let clear = if view.show_clear { " ×" } else { "" };
    format!("  [ {} ]{clear}\n", view.query)
}

fn results(body: &ResultsBody) -> String {
    match body {
        ResultsBody::Searching => "Searching...\n".to_string(),
        ResultsBody::NoResults => format!("{NO_RESULTS_MESSAGE}\n"),
        ResultsBody::Listing { summary, entries } => {
            let mut out = format!("{summary}\n\n");
            for entry in entries {
                out.push_str(&format!(
                    "{}\n{}\n{}\n\n",
                    entry.breadcrumb, entry.title, entry.snippet
                ));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use oogleg_core::{ClientState, SearchResult};

    use super::*;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("cats\n"), Input::Query("cats".to_string()));
        assert_eq!(parse_line("  cats"), Input::Query("  cats".to_string()));
        assert_eq!(parse_line(""), Input::Search);
        assert_eq!(parse_line(":lucky"), Input::Lucky);
        assert_eq!(parse_line(" :reset "), Input::Reset);
        assert_eq!(parse_line(":q"), Input::Quit);
        assert_eq!(parse_line(":nope"), Input::Unknown(":nope".to_string()));
    }

    #[test]
    fn test_render_landing() {
        let mut state = ClientState::new();
        state.advance_lucky();
        let text = render(&PageView::from_state(&state));

        assert!(text.starts_with("Oogleg"));
        assert!(text.contains("[ cristina lopes ] ×"));
        assert!(text.contains("[I'm Feeling Lucky]"));
    }

    #[test]
    fn test_render_results() {
        let state = ClientState {
            query: "cats".to_string(),
            search_results: Some(SearchResult::new(
                1234,
                "cats",
                vec!["https://wikipedia.org/wiki/Cat-facts".to_string()],
            )),
            has_searched: true,
            ..ClientState::default()
        };
        let text = render(&PageView::from_state(&state));

        assert!(text.contains("About 1,234 results for \"cats\""));
        assert!(text.contains("wikipedia.org › https://wikipedia.org/wiki/Cat-facts\nCat Facts\n"));
        assert!(!text.contains("Lucky"));
    }
}
