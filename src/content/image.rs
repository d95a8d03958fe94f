//! CDN image URL construction.
//!
//! Queries usually dereference assets to absolute URLs; a few places
//! derive resized variants (cards, share images) by appending transform
//! parameters. Raw asset references (`image-<id>-<WxH>-<ext>`) are also
//! accepted and resolved against the project's CDN path.

use crate::config::StoreConfig;

/// Resize fit mode, mirroring the CDN's `fit` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Crop,
    Max,
}

impl Fit {
    const fn as_param(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Max => "max",
        }
    }
}

/// Builder for a fully qualified image URL.
#[derive(Debug, Clone)]
pub struct ImageUrl {
    base: String,
    width: Option<u32>,
    height: Option<u32>,
    fit: Option<Fit>,
}

impl ImageUrl {
    /// Build from an absolute URL or an asset reference.
    ///
    /// Returns `None` when the source is neither (the caller falls back
    /// to rendering without an image).
    pub fn from_source(store: &StoreConfig, source: &str) -> Option<Self> {
        let source = source.trim();
        if source.is_empty() {
            return None;
        }
        if source.starts_with("https://") || source.starts_with("http://") {
            return Some(Self::raw(source.to_string()));
        }
        Self::from_asset_ref(store, source)
    }

    /// Resolve an asset reference like `image-abc123-800x600-jpg`.
    fn from_asset_ref(store: &StoreConfig, reference: &str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        // The id may itself contain dashes; dimensions and format are the
        // last two segments.
        let (rest, format) = rest.rsplit_once('-')?;
        let (id, dims) = rest.rsplit_once('-')?;
        if id.is_empty() || !dims.contains('x') {
            return None;
        }
        Some(Self::raw(format!("{}/{id}-{dims}.{format}", store.image_cdn())))
    }

    fn raw(base: String) -> Self {
        Self {
            base,
            width: None,
            height: None,
            fit: None,
        }
    }

    pub fn width(mut self, w: u32) -> Self {
        self.width = Some(w);
        self
    }

    pub fn height(mut self, h: u32) -> Self {
        self.height = Some(h);
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    /// Render the final URL.
    pub fn build(&self) -> String {
        let mut params = Vec::with_capacity(3);
        if let Some(w) = self.width {
            params.push(format!("w={w}"));
        }
        if let Some(h) = self.height {
            params.push(format!("h={h}"));
        }
        if let Some(fit) = self.fit {
            params.push(format!("fit={}", fit.as_param()));
        }

        if params.is_empty() {
            return self.base.clone();
        }
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!("{}{separator}{}", self.base, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StoreConfig {
        StoreConfig {
            project_id: "abc123".into(),
            dataset: "production".into(),
            api_version: "2023-01-01".into(),
        }
    }

    #[test]
    fn test_absolute_url_passthrough() {
        let url = ImageUrl::from_source(&store(), "https://cdn.sanity.io/images/x/y/z.jpg")
            .unwrap()
            .build();
        assert_eq!(url, "https://cdn.sanity.io/images/x/y/z.jpg");
    }

    #[test]
    fn test_asset_ref_resolution() {
        let url = ImageUrl::from_source(&store(), "image-deadbeef01-800x600-jpg")
            .unwrap()
            .build();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/abc123/production/deadbeef01-800x600.jpg"
        );
    }

    #[test]
    fn test_asset_ref_with_dashed_id() {
        let url = ImageUrl::from_source(&store(), "image-a1-b2-c3-1200x900-webp")
            .unwrap()
            .build();
        assert!(url.ends_with("/a1-b2-c3-1200x900.webp"));
    }

    #[test]
    fn test_transform_params() {
        let url = ImageUrl::from_source(&store(), "https://cdn.example.com/p.jpg")
            .unwrap()
            .width(640)
            .height(800)
            .fit(Fit::Crop)
            .build();
        assert_eq!(url, "https://cdn.example.com/p.jpg?w=640&h=800&fit=crop");
    }

    #[test]
    fn test_params_append_to_existing_query() {
        let url = ImageUrl::from_source(&store(), "https://cdn.example.com/p.jpg?auto=format")
            .unwrap()
            .width(100)
            .build();
        assert_eq!(url, "https://cdn.example.com/p.jpg?auto=format&w=100");
    }

    #[test]
    fn test_invalid_sources() {
        assert!(ImageUrl::from_source(&store(), "").is_none());
        assert!(ImageUrl::from_source(&store(), "file-abc-pdf").is_none());
        assert!(ImageUrl::from_source(&store(), "image-").is_none());
        assert!(ImageUrl::from_source(&store(), "image-abc").is_none());
    }
}
