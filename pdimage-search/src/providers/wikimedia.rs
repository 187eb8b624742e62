//! Wikimedia Commons search through the MediaWiki action API.
//!
//! Uses `generator=search` with `prop=imageinfo` so one request returns the
//! matching pages together with their thumbnail URL and license metadata.
//! `query.pages` is an object keyed by page id; records follow the order the
//! pages appear in the response body.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::WikimediaConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::ProviderAdapter;
use crate::types::{CanonicalRecord, Provider, Query};

use super::FALLBACK_LINK;
use super::lenient::{lenient, lenient_list, lenient_map};

/// Title used when a page has none.
pub const FALLBACK_TITLE: &str = "Wikimedia Image";

/// License label used when the page carries no usable `LicenseShortName`.
pub const FALLBACK_LICENSE: &str = "Unknown";

/// Top-level MediaWiki API response.
///
/// Fields of an unexpected type read as absent and malformed pages are
/// dropped, so one drifted page never costs the whole response.
#[derive(Debug, Default, Deserialize)]
pub struct WikimediaResponse {
    /// Absent when the search had no hits.
    #[serde(default, deserialize_with = "lenient")]
    pub query: Option<WikimediaQuery>,
    /// Present when the API rejected the request (still with HTTP 200).
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<ApiError>,
}

/// The `query` block of a generator response.
#[derive(Debug, Default, Deserialize)]
pub struct WikimediaQuery {
    /// Pages keyed by page id, in response order.
    #[serde(default, deserialize_with = "lenient_map")]
    pub pages: Option<IndexMap<String, WikimediaPage>>,
}

/// A single result page.
#[derive(Debug, Default, Deserialize)]
pub struct WikimediaPage {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    /// Only the first well-formed entry is used.
    #[serde(default, deserialize_with = "lenient_list")]
    pub imageinfo: Option<Vec<ImageInfo>>,
}

/// Image details requested with `iiprop=url|extmetadata`.
#[derive(Debug, Default, Deserialize)]
pub struct ImageInfo {
    /// Scaled rendition at `iiurlwidth`. Pages without one are skipped.
    #[serde(default, deserialize_with = "lenient")]
    pub thumburl: Option<String>,
    /// File description page on Commons.
    #[serde(default, deserialize_with = "lenient")]
    pub descriptionurl: Option<String>,
    /// Extended metadata fields such as `LicenseShortName`.
    #[serde(default, deserialize_with = "lenient_map")]
    pub extmetadata: Option<IndexMap<String, MetadataField>>,
}

/// One extended metadata entry. `value` is usually a string but the API
/// does not guarantee it.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataField {
    #[serde(default)]
    pub value: serde_json::Value,
}

/// MediaWiki API error payload.
#[derive(Debug, Default, Deserialize)]
pub struct ApiError {
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub info: Option<String>,
}

/// Wikimedia Commons adapter.
pub struct WikimediaAdapter {
    client: reqwest::Client,
    config: WikimediaConfig,
}

impl WikimediaAdapter {
    /// Create an adapter that queries `config.api_url` with `client`.
    pub fn new(client: reqwest::Client, config: WikimediaConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ProviderAdapter for WikimediaAdapter {
    fn provider(&self) -> Provider {
        Provider::WikimediaCommons
    }

    async fn search(&self, query: &Query) -> Result<Vec<CanonicalRecord>, SearchError> {
        tracing::trace!(query = query.as_str(), "Wikimedia search");

        let page_size = self.config.page_size.to_string();
        let thumb_width = self.config.thumb_width.to_string();
        let request = self.client.get(&self.config.api_url).query(&[
            ("action", "query"),
            ("format", "json"),
            ("generator", "search"),
            ("gsrsearch", query.as_str()),
            ("gsrlimit", page_size.as_str()),
            ("prop", "imageinfo"),
            ("iiprop", "url|extmetadata"),
            ("iiurlwidth", thumb_width.as_str()),
        ]);
        let body = http::fetch_text(request, self.provider()).await?;

        let response = parse_response(&body)?;
        if let Some(err) = response.error {
            return Err(SearchError::Http(format!(
                "Wikimedia API error {}: {}",
                err.code.as_deref().unwrap_or("unknown"),
                err.info.as_deref().unwrap_or_default()
            )));
        }

        let records = map_records(response);
        tracing::debug!(count = records.len(), "Wikimedia results parsed");
        Ok(records)
    }
}

/// Parse a raw MediaWiki API response body.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] if the body is not a JSON object of the
/// expected shape.
pub fn parse_response(body: &str) -> Result<WikimediaResponse, SearchError> {
    serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("Wikimedia response: {e}")))
}

/// Map a parsed response into canonical records, keeping page order.
pub fn map_records(response: WikimediaResponse) -> Vec<CanonicalRecord> {
    let pages = response
        .query
        .and_then(|q| q.pages)
        .unwrap_or_default();

    pages
        .into_values()
        .filter_map(|page| {
            let info = page.imageinfo?.into_iter().next()?;
            let thumbnail = info.thumburl.filter(|url| !url.is_empty())?;
            let license = info
                .extmetadata
                .as_ref()
                .and_then(|meta| meta.get("LicenseShortName"))
                .and_then(|field| field.value.as_str())
                .unwrap_or(FALLBACK_LICENSE)
                .to_owned();
            Some(CanonicalRecord {
                thumbnail,
                link: info
                    .descriptionurl
                    .unwrap_or_else(|| FALLBACK_LINK.to_owned()),
                source: Provider::WikimediaCommons.name().to_owned(),
                title: page.title.unwrap_or_else(|| FALLBACK_TITLE.to_owned()),
                license,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Page ids deliberately out of numeric order: records must follow the
    // body, not the key order.
    const MOCK_WIKIMEDIA_JSON: &str = r#"{
        "batchcomplete": "",
        "query": {
            "pages": {
                "904": {
                    "pageid": 904,
                    "ns": 6,
                    "title": "File:Lighthouse at dawn.jpg",
                    "imageinfo": [{
                        "thumburl": "https://upload.wikimedia.org/thumb/lighthouse-300px.jpg",
                        "descriptionurl": "https://commons.wikimedia.org/wiki/File:Lighthouse_at_dawn.jpg",
                        "extmetadata": {
                            "LicenseShortName": {"value": "Public Domain", "source": "commons-desc-page"},
                            "Artist": {"value": "Unknown photographer"}
                        }
                    }]
                },
                "17": {
                    "pageid": 17,
                    "ns": 6,
                    "title": "File:Harbour.png",
                    "imageinfo": [{
                        "thumburl": "https://upload.wikimedia.org/thumb/harbour-300px.png",
                        "descriptionurl": "https://commons.wikimedia.org/wiki/File:Harbour.png",
                        "extmetadata": {
                            "LicenseShortName": {"value": "CC BY-SA 4.0"}
                        }
                    }]
                },
                "55": {
                    "pageid": 55,
                    "ns": 0,
                    "title": "Lighthouses of Maine"
                },
                "230": {
                    "pageid": 230,
                    "imageinfo": [{
                        "thumburl": "https://upload.wikimedia.org/thumb/untitled-300px.jpg"
                    }]
                }
            }
        }
    }"#;

    fn mock_records() -> Vec<CanonicalRecord> {
        map_records(parse_response(MOCK_WIKIMEDIA_JSON).expect("should parse"))
    }

    #[test]
    fn parse_mock_json_returns_records_in_body_order() {
        let records = mock_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].title, "File:Lighthouse at dawn.jpg");
        assert_eq!(records[1].title, "File:Harbour.png");
        assert_eq!(records[0].source, "Wikimedia Commons");
        assert_eq!(
            records[0].link,
            "https://commons.wikimedia.org/wiki/File:Lighthouse_at_dawn.jpg"
        );
    }

    #[test]
    fn license_read_from_extmetadata() {
        let records = mock_records();
        assert_eq!(records[0].license, "Public Domain");
        assert_eq!(records[1].license, "CC BY-SA 4.0");
    }

    #[test]
    fn page_without_imageinfo_is_skipped() {
        let records = mock_records();
        assert!(records.iter().all(|r| r.title != "Lighthouses of Maine"));
    }

    #[test]
    fn missing_fields_fall_back() {
        let records = mock_records();
        assert_eq!(records[2].title, "Wikimedia Image");
        assert_eq!(records[2].link, "#");
        assert_eq!(records[2].license, "Unknown");
    }

    #[test]
    fn non_string_license_value_falls_back() {
        let body = r##"{"query": {"pages": {"1": {"title": "File:X.jpg", "imageinfo": [{
            "thumburl": "https://upload.wikimedia.org/x.jpg",
            "extmetadata": {"LicenseShortName": {"value": 42}}
        }]}}}}"##;
        let records = map_records(parse_response(body).expect("should parse"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].license, "Unknown");
    }

    #[test]
    fn empty_thumburl_is_skipped() {
        let body = r#"{"query": {"pages": {"1": {"title": "File:X.jpg", "imageinfo": [{"thumburl": ""}]}}}}"#;
        assert!(map_records(parse_response(body).expect("should parse")).is_empty());
    }

    #[test]
    fn empty_imageinfo_list_is_skipped() {
        let body = r#"{"query": {"pages": {"1": {"title": "File:X.jpg", "imageinfo": []}}}}"#;
        assert!(map_records(parse_response(body).expect("should parse")).is_empty());
    }

    #[test]
    fn no_hits_response_yields_nothing() {
        let body = r#"{"batchcomplete": ""}"#;
        assert!(map_records(parse_response(body).expect("should parse")).is_empty());
    }

    #[test]
    fn api_error_is_parsed() {
        let body = r#"{"error": {"code": "badvalue", "info": "Unrecognized value for parameter \"prop\"."}}"#;
        let response = parse_response(body).expect("should parse");
        let err = response.error.expect("error block");
        assert_eq!(err.code.as_deref(), Some("badvalue"));
    }

    #[test]
    fn drifted_page_does_not_drop_good_records() {
        let body = r#"{"query": {"pages": {
            "40": {"title": "File:Good.jpg", "imageinfo": [{
                "thumburl": "https://upload.wikimedia.org/good.jpg",
                "descriptionurl": "https://commons.wikimedia.org/wiki/File:Good.jpg",
                "extmetadata": {"LicenseShortName": {"value": "CC0"}}
            }]},
            "41": {"title": ["File:Drifted.jpg"], "imageinfo": [{
                "thumburl": "https://upload.wikimedia.org/drifted.jpg",
                "descriptionurl": 41,
                "extmetadata": {"LicenseShortName": "Public domain"}
            }]},
            "42": "not a page",
            "43": {"title": 43, "imageinfo": {"thumburl": "https://upload.wikimedia.org/x.jpg"}}
        }}}"#;
        let records = map_records(parse_response(body).expect("should parse"));
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].title, "File:Good.jpg");
        assert_eq!(records[0].license, "CC0");

        assert_eq!(records[1].thumbnail, "https://upload.wikimedia.org/drifted.jpg");
        assert_eq!(records[1].title, "Wikimedia Image");
        assert_eq!(records[1].link, "#");
        assert_eq!(records[1].license, "Unknown");
    }

    #[test]
    fn malformed_first_imageinfo_entry_is_passed_over() {
        let body = r#"{"query": {"pages": {"1": {"title": "File:X.jpg", "imageinfo": [
            "garbage",
            {"thumburl": "https://upload.wikimedia.org/x.jpg"}
        ]}}}}"#;
        let records = map_records(parse_response(body).expect("should parse"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].thumbnail, "https://upload.wikimedia.org/x.jpg");
    }

    #[test]
    fn empty_pages_sent_as_array_yield_nothing() {
        let body = r#"{"query": {"pages": []}}"#;
        assert!(map_records(parse_response(body).expect("should parse")).is_empty());
    }

    #[test]
    fn api_error_with_numeric_code_is_still_reported() {
        let response = parse_response(r#"{"error": {"code": 500, "info": "internal"}}"#)
            .expect("should parse");
        let err = response.error.expect("error block");
        assert!(err.code.is_none());
        assert_eq!(err.info.as_deref(), Some("internal"));
    }

    #[test]
    fn non_json_body_is_parse_error() {
        let err = parse_response("upstream connect error").unwrap_err();
        assert!(matches!(err, SearchError::Parse(_)));
    }

    #[test]
    fn provider_is_wikimedia() {
        let adapter = WikimediaAdapter::new(reqwest::Client::new(), WikimediaConfig::default());
        assert_eq!(adapter.provider(), Provider::WikimediaCommons);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WikimediaAdapter>();
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_wikimedia_search() {
        let config = crate::SearchConfig::default();
        let client = http::build_client(&config).expect("client");
        let adapter = WikimediaAdapter::new(client, config.wikimedia);
        let query = Query::normalize("lighthouse").expect("non-empty");
        let records = adapter.search(&query).await.expect("live search should work");
        for r in &records {
            assert!(!r.thumbnail.is_empty());
            assert_eq!(r.source, "Wikimedia Commons");
        }
    }
}
