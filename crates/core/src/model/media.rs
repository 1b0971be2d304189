use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media URI cannot be empty.")]
    EmptyMediaUri,
}

/// Location of a question image: an absolute URL or a path relative to the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|_| MediaValidationError::EmptyMediaUri)?;
        Ok(MediaUri::Url(u))
    }

    /// Accepts whatever a deck file puts in its `image` field.
    ///
    /// Anything that parses as an absolute URL becomes `Url`; everything else
    /// (`assets/cell.png`, `./img/x.gif`) is kept as a relative file path.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        match Url::parse(s) {
            Ok(url) if !url.cannot_be_a_base() || url.scheme() == "data" => Ok(MediaUri::Url(url)),
            _ => Self::from_file(s),
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            MediaUri::Url(_) => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            MediaUri::FilePath(_) => None,
        }
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaUri::FilePath(p) => write!(f, "{}", p.display()),
            MediaUri::Url(u) => write!(f, "{u}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_absolute_urls() {
        let uri = MediaUri::parse("https://example.com/cell.png").unwrap();
        assert_eq!(
            uri.as_url().map(Url::as_str),
            Some("https://example.com/cell.png")
        );
    }

    #[test]
    fn parse_keeps_relative_paths() {
        let uri = MediaUri::parse("assets/cell.png").unwrap();
        assert_eq!(uri.as_path(), Some(Path::new("assets/cell.png")));
        assert_eq!(uri.to_string(), "assets/cell.png");
    }

    #[test]
    fn parse_rejects_blank() {
        assert_eq!(
            MediaUri::parse("  ").unwrap_err(),
            MediaValidationError::EmptyMediaUri
        );
    }
}
