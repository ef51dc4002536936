mod error;

pub use self::error::WorkshopError;

use pulse_core::prelude::*;

use reqwest::{Client, Url};

type Result<T, E = WorkshopError> = std::result::Result<T, E>;

/// Client for the workshop service hosting user-made levels.
pub struct Workshop {
    url: Url,
    api_key: Option<String>,
    client: Client,
}

impl Workshop {
    pub fn new(url: impl reqwest::IntoUrl, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            url: url.into_url()?,
            api_key,
            client: Client::new(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut url = self.url.clone();
        url.set_path(path);
        let mut req = self.client.get(url);
        if let Some(key) = &self.api_key {
            req = req.header("api-key", key);
        }
        req
    }

    /// The list of items the player is subscribed to.
    pub async fn get_subscribed(&self) -> Result<Vec<ItemInfo>> {
        let response = self.get("workshop/subscribed").send().await?;
        Ok(response.json().await?)
    }

    pub async fn get_item_info(&self, id: &str) -> Result<ItemInfo> {
        let response = self.get(&format!("workshop/items/{id}")).send().await?;
        Ok(response.json().await?)
    }
}
