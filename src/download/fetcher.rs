//! Media byte sources.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use reqwest::Client;

use crate::error::{Error, Result};

/// Body chunks of one response.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// An opened media response.
pub struct MediaStream {
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

/// Issues the GET for a media URL.
///
/// A non-success status is an error from `open`; transport failures while
/// reading surface as `Err` items of the body stream.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    async fn open(&self, url: &str) -> Result<MediaStream>;
}

/// Plain HTTP fetcher. Media links need no credentials.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl MediaFetcher for HttpFetcher {
    async fn open(&self, url: &str) -> Result<MediaStream> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!("HTTP {}", status)));
        }

        let content_length = response.content_length();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(Error::from))
            .boxed();

        Ok(MediaStream {
            content_length,
            body,
        })
    }
}
