//! Catalog records for the page gallery.
//!
//! The engine never reads these; the page layer hands its record array over
//! as JSON and gets back a normalized list. Empty strings mean "absent" in the
//! hand-edited source data, so they are folded into `None` here. Only `code`
//! is required; a malformed rank leaves its record unranked.

use crate::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum Rank {
    First,
    Second,
    Third,
}

impl Rank {
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Rank::First),
            2 => Some(Rank::Second),
            3 => Some(Rank::Third),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Rank::First => 1,
            Rank::Second => 2,
            Rank::Third => 3,
        }
    }
}

impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r.number()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actress: Option<String>,
    #[serde(rename = "cover", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
}

impl CatalogEntry {
    pub fn has_cover(&self) -> bool {
        self.cover_url.is_some()
    }
}

/// Wire shape of one record before validation.
#[derive(Deserialize)]
struct RawEntry {
    code: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    actress: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    cover: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    link: Option<String>,
    /// Anything but 1, 2 or 3 (including `null`) leaves the record unranked.
    #[serde(default)]
    rank: Option<serde_json::Value>,
}

fn blank_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(de)?;
    Ok(v.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

/// Ordered record list; duplicate codes are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (index, r) in raw.into_iter().enumerate() {
            let code = r.code.trim().to_string();
            if code.is_empty() {
                return Err(CatalogError::MissingCode { index });
            }
            let rank = r.rank.as_ref().and_then(|v| {
                let rank = v
                    .as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .and_then(Rank::from_number);
                if rank.is_none() {
                    log::warn!("[catalog] record {} ({}): ignoring rank {}", index, code, v);
                }
                rank
            });
            entries.push(CatalogEntry {
                code,
                actress: r.actress,
                cover_url: r.cover,
                link: r.link,
                rank,
            });
        }
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked records, best first. Ties keep their source order.
    pub fn ranked(&self) -> Vec<&CatalogEntry> {
        let mut out: Vec<_> = self.entries.iter().filter(|e| e.rank.is_some()).collect();
        out.sort_by_key(|e| e.rank);
        out
    }

    /// Unranked records with a cover image.
    pub fn gallery(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.rank.is_none() && e.has_cover())
    }

    /// Records without a cover image.
    pub fn code_only(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| !e.has_cover())
    }
}
