//! Search filter models: the full filter set, its enumerated fields and the
//! partial patch used for field-by-field edits.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};


/// Raised when a string does not name a known value of an enumerated filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterValue {
    pub field: &'static str,
    pub value: String,
}

impl Display for UnknownFilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} value: {:?}", self.field, self.value)
    }
}

impl std::error::Error for UnknownFilterValue {}


macro_rules! filter_enum {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownFilterValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(UnknownFilterValue { field: stringify!($name), value: other.to_string() }),
                }
            }
        }
    };
}

filter_enum! {
    /// Product category filter.
    Category default All {
        All => "all",
        Electronics => "electronics",
        Clothing => "clothing",
        Books => "books",
    }
}

filter_enum! {
    /// Creation date window filter.
    DateRange default All {
        All => "all",
        Today => "today",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}

filter_enum! {
    /// Item status filter.
    Status default All {
        All => "all",
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
    }
}

filter_enum! {
    /// Result ordering.
    SortBy default Latest {
        Latest => "latest",
        Oldest => "oldest",
        Name => "name",
    }
}


/// The complete set of search criteria.
///
/// The default value (empty keyword, everything else `all`/`latest`) is never
/// persisted and travels through history as a `null` payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    pub keyword: String,
    pub category: Category,
    pub date_range: DateRange,
    pub status: Status,
    pub sort_by: SortBy,
}

impl FilterSet {
    pub fn is_default(&self) -> bool {
        *self == FilterSet::default()
    }

    pub fn apply(&mut self, patch: FilterPatch) {
        let FilterPatch { keyword, category, date_range, status, sort_by } = patch;
        if let Some(keyword) = keyword {
            self.keyword = keyword;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(date_range) = date_range {
            self.date_range = date_range;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(sort_by) = sort_by {
            self.sort_by = sort_by;
        }
    }

    pub fn merged(&self, patch: FilterPatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}


/// Names of the individual form controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Keyword,
    Category,
    DateRange,
    Status,
    SortBy,
}

/// A partial filter set. Only the fields that are `Some` are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl FilterPatch {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Build a single-field patch from a raw form control value.
    pub fn from_field(field: FilterField, value: &str) -> Result<Self, UnknownFilterValue> {
        let patch = FilterPatch::default();
        Ok(match field {
            FilterField::Keyword => patch.keyword(value),
            FilterField::Category => patch.category(value.parse()?),
            FilterField::DateRange => patch.date_range(value.parse()?),
            FilterField::Status => patch.status(value.parse()?),
            FilterField::SortBy => patch.sort_by(value.parse()?),
        })
    }
}

#[cfg(test)]
#[path = "filter_set_test.rs"]
mod tests;
