//! Media asset resolution
//!
//! The storefront keeps its catalog as a JSON array of entries. The page
//! selects one entry with the `name` query parameter; each of the entry's
//! carousel assets becomes a media descriptor:
//!
//! - `*.webp` assets are images served from the asset host under the entry's
//!   `base_url`
//! - anything else is a video link whose first path segment is the video id,
//!   rewritten to an embeddable player URL

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AssetError;

/// Default host serving catalog images
pub const DEFAULT_ASSET_HOST: &str =
    "https://raw.githubusercontent.com/LiquidGalaxyLAB/Data/refs/heads/main";

/// Embeddable video player base
pub const VIDEO_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Query parameter selecting the store entry
pub const ENTRY_PARAM: &str = "name";

const IMAGE_SUFFIX: &str = ".webp";

/// Kind of media shown in a carousel slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A resolved media asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub kind: MediaKind,
    pub url: String,
}

impl MediaDescriptor {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
        }
    }
}

/// One store entry. Fields the carousel does not use are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreEntry {
    pub name: String,
    #[serde(default)]
    pub carousel_assets: Vec<String>,
    #[serde(default)]
    pub base_url: String,
}

/// The parsed store
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<StoreEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<StoreEntry>) -> Self {
        Self { entries }
    }

    /// Parse the store JSON array
    pub fn from_json(input: &str) -> Result<Self, AssetError> {
        let entries: Vec<StoreEntry> = serde_json::from_str(input)?;
        tracing::debug!(entries = entries.len(), "catalog loaded");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[StoreEntry] {
        &self.entries
    }

    /// First entry with the given name
    pub fn find(&self, name: &str) -> Option<&StoreEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Resolve the entry selected by `query`'s `name` parameter
    pub fn resolve_query(&self, query: &str, host: &str) -> Result<Vec<MediaDescriptor>, AssetError> {
        let name = query_param(query, ENTRY_PARAM)
            .ok_or_else(|| AssetError::MissingParam(ENTRY_PARAM.to_string()))?;
        let entry = self
            .find(&name)
            .ok_or_else(|| AssetError::UnknownEntry(name.clone()))?;
        resolve_entry(entry, host)
    }
}

/// Look up a query parameter. Accepts a full URL, `?a=b&c=d`, or `a=b&c=d`.
/// Values are percent-decoded; the first occurrence wins.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    if let Ok(url) = Url::parse(query) {
        return url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned());
    }
    let raw = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Resolve every asset of an entry, preserving order
pub fn resolve_entry(entry: &StoreEntry, host: &str) -> Result<Vec<MediaDescriptor>, AssetError> {
    entry
        .carousel_assets
        .iter()
        .map(|asset| resolve_asset(asset, &entry.base_url, host))
        .collect()
}

/// Resolve one asset string into a descriptor
pub fn resolve_asset(asset: &str, base_url: &str, host: &str) -> Result<MediaDescriptor, AssetError> {
    if asset.ends_with(IMAGE_SUFFIX) {
        return Ok(MediaDescriptor::image(format!("{host}{base_url}{asset}")));
    }

    let invalid = |reason: &str| AssetError::InvalidVideoUrl {
        url: asset.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(asset).map_err(|e| invalid(&e.to_string()))?;
    let id = url
        .path_segments()
        .and_then(|mut segments| segments.next())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| invalid("no video id in path"))?;

    Ok(MediaDescriptor::video(format!(
        "{VIDEO_EMBED_BASE}{id}?modestbranding=1&rel=0"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STORE: &str = r#"[
        {
            "name": "Orbit Viewer",
            "base_url": "/apps/orbit/",
            "carousel_assets": ["shot1.webp", "https://youtu.be/dQw4w9WgXcQ", "shot2.webp"],
            "description": "ignored"
        },
        { "name": "Empty App", "base_url": "/apps/empty/" }
    ]"#;

    #[test]
    fn test_resolves_images_and_videos_in_order() {
        let catalog = Catalog::from_json(STORE).unwrap();
        let items = catalog
            .resolve_query("?name=Orbit%20Viewer", DEFAULT_ASSET_HOST)
            .unwrap();

        assert_eq!(
            items,
            vec![
                MediaDescriptor::image(format!("{DEFAULT_ASSET_HOST}/apps/orbit/shot1.webp")),
                MediaDescriptor::video(
                    "https://www.youtube.com/embed/dQw4w9WgXcQ?modestbranding=1&rel=0"
                ),
                MediaDescriptor::image(format!("{DEFAULT_ASSET_HOST}/apps/orbit/shot2.webp")),
            ]
        );
    }

    #[test]
    fn test_entry_without_assets_resolves_empty() {
        let catalog = Catalog::from_json(STORE).unwrap();
        let items = catalog.resolve_query("name=Empty+App", "https://cdn").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_query_param_forms() {
        assert_eq!(query_param("?name=a&x=1", "name").as_deref(), Some("a"));
        assert_eq!(query_param("x=1&name=b", "name").as_deref(), Some("b"));
        assert_eq!(
            query_param("https://store.example/app.html?name=c%26d", "name").as_deref(),
            Some("c&d")
        );
        assert_eq!(query_param("?other=1", "name"), None);
    }

    #[test]
    fn test_missing_param_and_unknown_entry() {
        let catalog = Catalog::from_json(STORE).unwrap();
        assert!(matches!(
            catalog.resolve_query("?x=1", "h"),
            Err(AssetError::MissingParam(_))
        ));
        assert!(matches!(
            catalog.resolve_query("?name=Nope", "h"),
            Err(AssetError::UnknownEntry(name)) if name == "Nope"
        ));
    }

    #[test]
    fn test_invalid_video_urls() {
        assert!(matches!(
            resolve_asset("not a url", "/", "h"),
            Err(AssetError::InvalidVideoUrl { .. })
        ));
        assert!(matches!(
            resolve_asset("https://youtu.be/", "/", "h"),
            Err(AssetError::InvalidVideoUrl { .. })
        ));
    }

    #[test]
    fn test_malformed_store() {
        assert!(matches!(
            Catalog::from_json("{\"name\": 1}"),
            Err(AssetError::Store(_))
        ));
    }
}
