use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Brand,
    Product,
    Motion,
    Web,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Brand, Tag::Product, Tag::Motion, Tag::Web];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Brand => "Brand",
            Tag::Product => "Product",
            Tag::Motion => "Motion",
            Tag::Web => "Web",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown portfolio tag {0:?}")]
    UnknownTag(String),
}

impl FromStr for Tag {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FilterError::UnknownTag(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub tag: Tag,
    pub image_url: &'static str,
}

/// Active gallery filter. `All` is the sentinel that shows every item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Tag(Tag),
}

impl Filter {
    pub const ALL_LABEL: &'static str = "All";

    /// Filter labels in display order: the sentinel first, then every tag.
    pub fn options() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(Tag::ALL.into_iter().map(Filter::Tag))
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => Self::ALL_LABEL,
            Filter::Tag(t) => t.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Result<Self, FilterError> {
        if label == Self::ALL_LABEL {
            return Ok(Filter::All);
        }
        label.parse::<Tag>().map(Filter::Tag)
    }

    #[inline]
    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(t) => item.tag == t,
        }
    }
}

/// Items matching `filter`, in their original relative order.
pub fn filter_items<'a>(items: &'a [PortfolioItem], filter: Filter) -> Vec<&'a PortfolioItem> {
    items.iter().filter(|it| filter.matches(it)).collect()
}

/// Gallery state: a fixed item list and the single active filter.
#[derive(Clone, Debug)]
pub struct PortfolioFilter {
    items: &'static [PortfolioItem],
    active: Filter,
}

impl PortfolioFilter {
    pub fn new(items: &'static [PortfolioItem]) -> Self {
        Self {
            items,
            active: Filter::All,
        }
    }

    pub fn select(&mut self, filter: Filter) {
        if filter != self.active {
            log::debug!("[portfolio] filter {} -> {}", self.active.label(), filter.label());
        }
        self.active = filter;
    }

    /// Select by label; an unknown label leaves the current filter untouched.
    pub fn select_label(&mut self, label: &str) -> Result<Filter, FilterError> {
        let filter = Filter::from_label(label)?;
        self.select(filter);
        Ok(filter)
    }

    #[inline]
    pub fn active(&self) -> Filter {
        self.active
    }

    pub fn visible(&self) -> Vec<&'static PortfolioItem> {
        filter_items(self.items, self.active)
    }
}
