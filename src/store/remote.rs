//! REST client for the hosted document store.
//!
//! The client is built once by the composition root from [`RemoteConfig`]
//! and passed to whoever needs persistence. Documents live under
//! `{endpoint}/databases/{database_id}/collections/{collection_id}/documents`;
//! listing walks them page by page with `limit`/`offset` queries.

use crate::config::RemoteConfig;
use crate::errors::{AppError, AppResult};
use crate::models::raw_document::document_id;
use crate::models::{NewWorkDay, RawDocument};
use crate::store::WorkDayStore;
use crate::ui::messages::warning;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

const PROJECT_HEADER: &str = "X-Appwrite-Project";
const KEY_HEADER: &str = "X-Appwrite-Key";

/// Lets the server pick the document id.
const UNIQUE_ID: &str = "unique()";

/// Documents requested per page when listing.
const PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentList {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    documents: Vec<RawDocument>,
}

pub struct RemoteStore {
    client: Client,
    config: RemoteConfig,
}

impl RemoteStore {
    pub fn new(config: RemoteConfig) -> AppResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(PROJECT_HEADER, header_value(&config.project_id)?);
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            headers.insert(KEY_HEADER, header_value(key)?);
        }

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client, config })
    }

    pub fn collection_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint.trim_end_matches('/'),
            self.config.database_id,
            self.config.collection_id
        )
    }

    pub fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

fn header_value(v: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(v).map_err(|e| AppError::Config(format!("invalid header value: {e}")))
}

/// Query pairs for one page of the document list.
pub(crate) fn page_query(offset: usize) -> [(&'static str, String); 2] {
    [
        ("queries[]", format!("limit({PAGE_SIZE})")),
        ("queries[]", format!("offset({offset})")),
    ]
}

/// Another page is due while the last one was not empty and fewer
/// documents than the server's `total` have been fetched.
pub(crate) fn needs_more_pages(fetched: usize, page: &DocumentList) -> bool {
    !page.documents.is_empty() && (fetched as u64) < page.total
}

pub(crate) fn create_body(day: &NewWorkDay) -> Value {
    json!({ "documentId": UNIQUE_ID, "data": day })
}

pub(crate) fn update_body(day: &NewWorkDay) -> Value {
    json!({ "data": day })
}

/// Turn a non-2xx answer into `AppError::Store("<status> — <server message>")`.
fn check(resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body: Value = resp.json().unwrap_or(Value::Null);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("no details");

    Err(AppError::Store(format!("{status} — {message}")))
}

impl WorkDayStore for RemoteStore {
    fn create(&self, day: &NewWorkDay) -> AppResult<String> {
        let url = self.collection_url();
        debug!(%url, date = %day.date, "creating remote document");

        let resp = check(self.client.post(&url).json(&create_body(day)).send()?)?;
        let doc: RawDocument = resp.json()?;

        document_id(&doc)
            .ok_or_else(|| AppError::Store("created document carries no id".to_string()))
    }

    fn list(&self) -> AppResult<Vec<RawDocument>> {
        let url = self.collection_url();
        let mut documents: Vec<RawDocument> = Vec::new();

        loop {
            let resp = check(self.client.get(&url).query(&page_query(documents.len())).send()?)?;
            let mut page: DocumentList = resp.json()?;
            let more = needs_more_pages(documents.len() + page.documents.len(), &page);
            debug!(
                total = page.total,
                offset = documents.len(),
                fetched = page.documents.len(),
                "remote page listed"
            );
            documents.append(&mut page.documents);

            if !more {
                if (documents.len() as u64) < page.total {
                    warn!(total = page.total, fetched = documents.len(), "remote list incomplete");
                    warning(format!(
                        "Remote store reports {} work days but only {} could be fetched.",
                        page.total,
                        documents.len()
                    ));
                }
                break;
            }
        }

        Ok(documents)
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let url = self.document_url(id);
        debug!(%url, "deleting remote document");
        check(self.client.delete(&url).send()?)?;
        Ok(())
    }

    fn replace(&self, id: &str, day: &NewWorkDay) -> AppResult<()> {
        let url = self.document_url(id);
        debug!(%url, "replacing remote document");
        check(self.client.patch(&url).json(&update_body(day)).send()?)?;
        Ok(())
    }
}
