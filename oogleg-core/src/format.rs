//! Display formatting for result URLs.
//!
//! Every function here is total: input that does not parse as an absolute URL
//! falls back to a sensible display string instead of producing an error.

use url::Url;

/// Longest URL prefix shown in a breadcrumb before it is elided.
pub const BREADCRUMB_URL_LIMIT: usize = 60;

/// Returns the host of `url`, or `url` itself when it does not parse.
///
/// URLs that parse without a host (`mailto:`, `file:`) yield an empty string.
///
/// ```
/// use oogleg_core::format::extract_domain;
///
/// assert_eq!(extract_domain("https://example.com/a/b"), "example.com");
/// assert_eq!(extract_domain("not a url"), "not a url");
/// ```
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => host(&parsed),
        Err(_) => url.to_string(),
    }
}

/// Derives a human-readable title from the last path segment of `url`.
///
/// `https://example.com/path/my-cool-page` becomes `My Cool Page`. URLs
/// without a meaningful path use the host instead.
pub fn format_title(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let path = parsed.path();
    if !path.is_empty()
        && path != "/"
        && let Some(segment) = path.split('/').filter(|s| !s.is_empty()).next_back()
    {
        return title_case(segment);
    }

    host(&parsed)
}

/// Breadcrumb line shown above a result title: domain plus the (elided) URL.
pub fn breadcrumb(url: &str) -> String {
    format!("{} › {}", extract_domain(url), elide_url(url))
}

/// Cuts `url` to [`BREADCRUMB_URL_LIMIT`] characters, appending `...` if cut.
pub fn elide_url(url: &str) -> String {
    if url.chars().count() > BREADCRUMB_URL_LIMIT {
        let head: String = url.chars().take(BREADCRUMB_URL_LIMIT).collect();
        format!("{head}...")
    } else {
        url.to_string()
    }
}

/// Formats a result count with `,` thousands separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

fn host(parsed: &Url) -> String {
    parsed.host_str().unwrap_or_default().to_string()
}

fn title_case(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut capitalized: String = first.to_uppercase().collect();
    capitalized.push_str(&chars.as_str().to_lowercase());
    capitalized
}
