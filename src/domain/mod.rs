//! Domain primitives for the favourites subsystem.
//!
//! Follows the Newtype pattern so a raw, unvalidated string cannot reach the
//! service layer where an absolute URL is required.

use std::fmt;
use url::Url;

/// A syntactically valid absolute URL identifying a favourited image.
///
/// The original input string is preserved verbatim; parsing is used only to
/// check syntax, never to normalize. The store keys lookups and deletion on
/// this exact string.
///
/// # Examples
///
/// ```rust
/// use pawdex::domain::ImageUrl;
///
/// let url = ImageUrl::parse("https://images.dog.ceo/breeds/beagle/n02088364_1.jpg").unwrap();
/// assert!(url.as_str().starts_with("https://"));
/// assert!(ImageUrl::parse("not-a-url").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        Url::parse(raw)?;
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ImageUrl> for String {
    fn from(url: ImageUrl) -> Self {
        url.0
    }
}
