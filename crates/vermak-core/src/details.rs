// crates/vermak-core/src/details.rs
//! # Detail Panel
//!
//! Formats a place-details record into the rows of the info panel. Optional
//! rows (phone, rating, website) are `None` when the panel should hide them.
use crate::place::PlaceDetails;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Scheme and host of a URL, up to and including the first `/` after the host.
static HOSTNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+?/").expect("hostname regex is valid"));

pub const FILLED_STAR: char = '\u{272D}';
pub const EMPTY_STAR: char = '\u{2729}';
pub const RATING_SCALE: usize = 5;

/// A place rating on the 0–5 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(pub f64);

impl Rating {
    /// Whether glyph `i` (0-based) is filled: `rating >= i + 0.5`.
    pub fn is_filled(&self, i: usize) -> bool {
        self.0 >= i as f64 + 0.5
    }

    /// Number of filled glyphs, i.e. the rating rounded to the nearest unit
    /// and clamped to `0..=5`.
    pub fn filled(&self) -> usize {
        (0..RATING_SCALE).filter(|&i| self.is_filled(i)).count()
    }

    pub fn glyphs(&self) -> [char; RATING_SCALE] {
        std::array::from_fn(|i| if self.is_filled(i) { FILLED_STAR } else { EMPTY_STAR })
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs().iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// A website as shown in the panel: short display text plus link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Website {
    pub display: String,
    pub href: String,
}

impl Website {
    /// Shortens `raw` to scheme plus host.
    ///
    /// `https://sub.example.com/path` displays as `https://sub.example.com/`
    /// and links to the full URL. A bare host such as `example.com` becomes
    /// `http://example.com/` for both.
    pub fn shorten(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(m) = HOSTNAME_RE.find(raw) {
            return Self {
                display: m.as_str().to_string(),
                href: raw.to_string(),
            };
        }

        let synthesized = if raw.starts_with("http://") || raw.starts_with("https://") {
            format!("{raw}/")
        } else {
            format!("http://{raw}/")
        };
        Self {
            display: synthesized.clone(),
            href: synthesized,
        }
    }
}

/// Everything the info panel renders for one place.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoContent {
    pub icon: Option<String>,
    pub name: String,
    /// Target of the name hyperlink.
    pub link: Option<String>,
    pub address: String,
    pub phone: Option<String>,
    /// `None` for unrated places, including a rating of 0.
    pub rating: Option<Rating>,
    pub website: Option<Website>,
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl InfoContent {
    pub fn from_details(place: &PlaceDetails) -> Self {
        let address = non_empty(&place.vicinity)
            .or_else(|| non_empty(&place.formatted_address))
            .unwrap_or_default()
            .to_string();

        Self {
            icon: non_empty(&place.icon).map(str::to_string),
            name: place.name.clone(),
            link: non_empty(&place.url).map(str::to_string),
            address,
            phone: non_empty(&place.formatted_phone_number).map(str::to_string),
            rating: place.rating.filter(|r| r.is_finite() && *r > 0.0).map(Rating),
            website: non_empty(&place.website).map(Website::shorten),
        }
    }
}

impl fmt::Display for InfoContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.link {
            Some(link) => writeln!(f, "{} <{}>", self.name, link)?,
            None => writeln!(f, "{}", self.name)?,
        }
        writeln!(f, "  Address: {}", self.address)?;
        if let Some(phone) = &self.phone {
            writeln!(f, "  Telephone: {phone}")?;
        }
        if let Some(rating) = &self.rating {
            writeln!(f, "  Rating: {rating}")?;
        }
        if let Some(site) = &self.website {
            writeln!(f, "  Website: {} <{}>", site.display, site.href)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_without_path_is_not_doubled() {
        let w = Website::shorten("https://example.com");
        assert_eq!(w.display, "https://example.com/");
        assert_eq!(w.href, "https://example.com/");
    }

    #[test]
    fn glyphs_render_in_order() {
        assert_eq!(Rating(3.4).to_string(), "✭✭✭✩✩");
        assert_eq!(Rating(3.5).to_string(), "✭✭✭✭✩");
    }
}
