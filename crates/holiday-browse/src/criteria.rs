use holiday_catalog::Catalog;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// A range with `min > max` matches nothing.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }

    /// Full price span of `catalog`; unbounded for an empty catalog.
    pub fn spanning(catalog: &Catalog) -> Self {
        catalog
            .price_span()
            .map(|(min, max)| Self { min, max })
            .unwrap_or_else(Self::unbounded)
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Listing predicates, rebuilt from UI input on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub tag: Option<String>,
    pub price_range: PriceRange,
    pub search_term: String,
}

impl FilterCriteria {
    /// Criteria that admit every package of `catalog`.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            tag: None,
            price_range: PriceRange::spanning(catalog),
            search_term: String::new(),
        }
    }

    /// Sets the category filter; blank or `all` clears it.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let trimmed = tag.trim();
        self.tag = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_price_range(mut self, min: u32, max: u32) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Lowercased, trimmed search needle; `None` when the term is blank.
    pub(crate) fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_term.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }
}
