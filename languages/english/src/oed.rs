use std::time::Duration;

use async_trait::async_trait;
use scraper::Html;
use wordbank_fetch::{DefinitionSource, FetchError, FetchedDefinition, SourceMetadata};

use crate::http;

/// Secondary definition source: the first entry snippet of an OED search
#[derive(Clone)]
pub struct OedSource {
    client: reqwest::Client,
    base_url: String,
}

impl OedSource {
    pub const NAME: &'static str = "oed";

    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: http::client(timeout, user_agent)?,
            base_url: http::trim_base(base_url),
        })
    }

    pub fn parse(html: &str) -> Result<Option<FetchedDefinition>, FetchError> {
        let item = http::selector("div.resultsSetItem")?;
        let snippet = http::selector("div.snippet")?;

        let document = Html::parse_document(html);
        let definition = document
            .select(&item)
            .next()
            .and_then(|first| first.select(&snippet).next())
            .and_then(http::element_text);

        Ok(definition.map(|definition| FetchedDefinition {
            definition,
            example: None,
            source: Self::NAME.to_string(),
        }))
    }
}

#[async_trait]
impl DefinitionSource for OedSource {
    async fn fetch(&self, word: &str) -> Result<Option<FetchedDefinition>, FetchError> {
        let url = format!("{}/search/dictionary/", self.base_url);
        let query = [("scope", "Entries"), ("q", word)];
        let html = http::get_page(&self.client, &url, &query, Self::NAME).await?;
        Self::parse(&html)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: Self::NAME.to_string(),
            base_url: self.base_url.clone(),
        }
    }
}
