use std::time::Duration;

use scraper::{ElementRef, Selector};
use wordbank_fetch::FetchError;

pub(crate) fn client(timeout: Duration, user_agent: &str) -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// GET a page and return its body, mapping unsuccessful statuses to errors
pub(crate) async fn get_page(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
    source_name: &str,
) -> Result<String, FetchError> {
    let response = client.get(url).query(query).send().await?;

    if response.status() == 429 {
        return Err(FetchError::RateLimitExceeded);
    }

    if !response.status().is_success() {
        return Err(FetchError::Http {
            status: response.status().as_u16(),
            source_name: source_name.to_string(),
        });
    }

    Ok(response.text().await?)
}

pub(crate) fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::ParseError(format!("bad selector {css}: {e}")))
}

/// Visible text of an element with whitespace collapsed, `None` if blank
pub(crate) fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() { None } else { Some(text) }
}

pub(crate) fn trim_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
