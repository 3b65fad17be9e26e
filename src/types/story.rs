//! Enriched stories and the rule that decides which items are shown.

use serde::Serialize;
use url::{Host, Url};

use super::item::{Item, ItemId};

/// Kind tag of items that may appear on the front page.
pub const STORY_KIND: &str = "story";

/// Link target used in place of a link that is not safe to follow.
pub const UNSAFE_HREF: &str = "#";

/// An upstream [`Item`] plus the host name derived from its link.
///
/// Only constructed through [`Story::enrich`], and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    item: Item,
    host: String,
    followable: bool,
}

impl Story {
    /// Derive the display host from the item's link.
    ///
    /// The host has a leading `www.` stripped. A link that does not parse as
    /// an absolute URL (including the empty link) yields an empty host;
    /// enrichment itself never fails. IPv6 hosts are shown without brackets.
    pub fn enrich(item: Item) -> Self {
        let parsed = Url::parse(&item.url).ok();
        let host = parsed
            .as_ref()
            .and_then(display_host)
            .map(|host| host.strip_prefix("www.").map(str::to_owned).unwrap_or(host))
            .unwrap_or_default();
        let followable = parsed
            .as_ref()
            .is_some_and(|url| matches!(url.scheme(), "http" | "https"));
        Self {
            item,
            host,
            followable,
        }
    }

    /// Whether this story belongs on the front page: a story with a link.
    pub fn qualifies(&self) -> bool {
        self.item.kind == STORY_KIND && !self.item.url.is_empty()
    }

    pub fn id(&self) -> ItemId {
        self.item.id
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }

    pub fn url(&self) -> &str {
        &self.item.url
    }

    /// The link as an `href` value: the url for `http`/`https` links,
    /// [`UNSAFE_HREF`] for anything else (`javascript:`, `data:`, relative).
    pub fn href(&self) -> &str {
        if self.followable {
            &self.item.url
        } else {
            UNSAFE_HREF
        }
    }
}

fn display_host(url: &Url) -> Option<String> {
    let host = match url.host()? {
        Host::Domain(domain) => domain.to_owned(),
        Host::Ipv4(addr) => addr.to_string(),
        Host::Ipv6(addr) => addr.to_string(),
    };
    Some(host)
}
