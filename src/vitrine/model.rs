use crate::error::VitrineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog entry. Items are read once from the data source and never
/// mutated afterwards; every derived view borrows from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "genero", default)]
    pub genre: String,
    #[serde(rename = "ano", default)]
    pub year: i32,
    #[serde(rename = "tipo", default)]
    pub kind: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "capa", default)]
    pub cover: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "conteudo", default)]
    pub content: String,
}

impl Item {
    pub fn badge_class(&self) -> BadgeClass {
        BadgeClass::for_category(&self.category)
    }

    pub fn action(&self) -> ItemAction {
        if self.price > 0.0 {
            ItemAction::Purchase { price: self.price }
        } else {
            ItemAction::Download
        }
    }

    /// Anything not priced above zero is free, matching [`Item::action`].
    pub fn is_free(&self) -> bool {
        !(self.price > 0.0)
    }
}

/// Visual class of the category badge shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeClass {
    Beat,
    Kit,
    Post,
}

impl BadgeClass {
    /// Case-insensitive lookup. Unknown categories fall back to `Post`.
    pub fn for_category(category: &str) -> Self {
        match category.to_lowercase().as_str() {
            "beats" => BadgeClass::Beat,
            "kits & plugins" => BadgeClass::Kit,
            "posts" | "post" => BadgeClass::Post,
            _ => BadgeClass::Post,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeClass::Beat => "beat",
            BadgeClass::Kit => "kit",
            BadgeClass::Post => "post",
        }
    }
}

impl fmt::Display for BadgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the card footer button offers. Purely a label: no transaction exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemAction {
    Download,
    Purchase { price: f64 },
}

/// Formats a price the way it is shown to visitors: whole amounts without
/// decimals, fractional amounts as-is.
pub fn format_amount(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}

/// A filterable attribute of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKey {
    Genre,
    Category,
    Year,
    Type,
}

impl FacetKey {
    pub const ALL: [FacetKey; 4] = [
        FacetKey::Genre,
        FacetKey::Category,
        FacetKey::Year,
        FacetKey::Type,
    ];

    /// The item's value for this facet, or `None` when it is empty (or a zero year).
    pub fn value_of(&self, item: &Item) -> Option<String> {
        let value = match self {
            FacetKey::Genre => item.genre.clone(),
            FacetKey::Category => item.category.clone(),
            FacetKey::Type => item.kind.clone(),
            FacetKey::Year if item.year == 0 => return None,
            FacetKey::Year => item.year.to_string(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetKey::Genre => "genre",
            FacetKey::Category => "category",
            FacetKey::Year => "year",
            FacetKey::Type => "type",
        }
    }
}

impl fmt::Display for FacetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetKey {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "genre" | "genero" => Ok(FacetKey::Genre),
            "category" | "categoria" => Ok(FacetKey::Category),
            "year" | "ano" => Ok(FacetKey::Year),
            "type" | "tipo" => Ok(FacetKey::Type),
            other => Err(VitrineError::UnknownFacet(other.to_string())),
        }
    }
}
