use std::time::Duration;

use async_trait::async_trait;
use scraper::Html;
use wordbank_fetch::{DefinitionSource, FetchError, FetchedDefinition, SourceMetadata};

use crate::http;

/// Primary definition source, scraped from Urban Dictionary's define page
#[derive(Clone)]
pub struct UrbanDictionarySource {
    client: reqwest::Client,
    base_url: String,
}

impl UrbanDictionarySource {
    pub const NAME: &'static str = "urban-dictionary";

    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: http::client(timeout, user_agent)?,
            base_url: http::trim_base(base_url),
        })
    }

    /// First meaning on the page, with its example when there is one
    pub fn parse(html: &str) -> Result<Option<FetchedDefinition>, FetchError> {
        let meaning = http::selector("div.meaning")?;
        let example = http::selector("div.example")?;

        let document = Html::parse_document(html);
        let Some(definition) = document.select(&meaning).next().and_then(http::element_text)
        else {
            return Ok(None);
        };

        Ok(Some(FetchedDefinition {
            definition,
            example: document.select(&example).next().and_then(http::element_text),
            source: Self::NAME.to_string(),
        }))
    }
}

#[async_trait]
impl DefinitionSource for UrbanDictionarySource {
    async fn fetch(&self, word: &str) -> Result<Option<FetchedDefinition>, FetchError> {
        let url = format!("{}/define.php", self.base_url);
        let html = http::get_page(&self.client, &url, &[("term", word)], Self::NAME).await?;
        Self::parse(&html)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: Self::NAME.to_string(),
            base_url: self.base_url.clone(),
        }
    }
}
