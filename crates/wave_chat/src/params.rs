/// Filter parameters for collection listings.
///
/// All fields are optional; absent fields are omitted from the query string.
/// The `cursor` is the opaque pagination token from a previous page's `next`
/// link and is passed through verbatim, never interpreted. Listing a full
/// collection via a stream leaves `cursor` at `None`; setting it resumes
/// enumeration from that point.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page_size: Option<u32>,
    pub order: Option<Order>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub cursor: Option<String>,
}

impl ListParams {
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub const fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn date_start(mut self, date_start: impl Into<String>) -> Self {
        self.date_start = Some(date_start.into());
        self
    }

    #[must_use]
    pub fn date_end(mut self, date_end: impl Into<String>) -> Self {
        self.date_end = Some(date_end.into());
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Wire-named query pairs. Date values are opaque to the client and pass
    /// through unmodified.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![];

        if let Some(page_size) = self.page_size {
            query.push(("page_size".to_owned(), page_size.to_string()));
        }
        if let Some(order) = self.order {
            query.push(("order".to_owned(), order.as_str().to_owned()));
        }
        if let Some(date_start) = &self.date_start {
            query.push(("date_start".to_owned(), date_start.clone()));
        }
        if let Some(date_end) = &self.date_end {
            query.push(("date_end".to_owned(), date_end.clone()));
        }
        if let Some(cursor) = &self.cursor {
            query.push(("cursor".to_owned(), cursor.clone()));
        }

        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}
