use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use url::Url;

use crate::error::Result;

/// One bounded page of a collection, in server order.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_size: Option<u32>,
    pub links: PageLinks,
}

#[derive(Debug, Clone, Default)]
pub struct PageLinks {
    pub current: Option<Url>,
    pub next: Option<Url>,
}

impl PageLinks {
    /// The opaque cursor carried in the query string of the `next` link, if
    /// any. Returned verbatim; the client never constructs or interprets
    /// cursor values.
    #[must_use]
    pub fn next_cursor(&self) -> Option<String> {
        self.next
            .as_ref()?
            .query_pairs()
            .find(|(key, _)| key == "cursor")
            .map(|(_, value)| value.into_owned())
    }
}

/// A domain type that appears as an embedded collection in a page envelope.
pub(crate) trait Collection: Sized {
    /// Key of this resource's item array inside the `_embedded` block.
    const EMBEDDED: &'static str;

    type Wire: DeserializeOwned;

    fn from_wire(wire: Self::Wire) -> Self;
}

#[derive(Debug, Deserialize)]
pub(crate) struct WirePage {
    page_size: Option<u32>,
    #[serde(rename = "_embedded")]
    embedded: Option<Map<String, Value>>,
    #[serde(rename = "_links")]
    links: Option<WirePageLinks>,
}

#[derive(Debug, Deserialize)]
struct WirePageLinks {
    #[serde(rename = "self")]
    current: Option<WireLink>,
    next: Option<WireLink>,
}

#[derive(Debug, Deserialize)]
struct WireLink {
    href: String,
}

impl WirePage {
    /// A missing or malformed embedded collection yields an empty page, so
    /// iteration stays robust against partial server payloads.
    pub(crate) fn into_page<T: Collection>(self) -> Result<Page<T>> {
        let items = match self
            .embedded
            .and_then(|mut embedded| embedded.remove(T::EMBEDDED))
        {
            Some(Value::Array(values)) => values
                .into_iter()
                .map(|value| serde_json::from_value::<T::Wire>(value).map(T::from_wire))
                .collect::<std::result::Result<Vec<_>, _>>()?,
            _ => vec![],
        };

        let links = self.links.map_or_else(PageLinks::default, |links| PageLinks {
            current: links.current.and_then(|link| Url::parse(&link.href).ok()),
            next: links.next.and_then(|link| Url::parse(&link.href).ok()),
        });

        Ok(Page {
            items,
            page_size: self.page_size,
            links,
        })
    }
}
