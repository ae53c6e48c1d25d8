//! Enumerated option values used by the naming settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which rendition of an image the downloader fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// Full-size original file (default).
    #[default]
    Original,
    /// Large display rendition.
    Regular,
    /// Small display rendition.
    Small,
    /// Square static thumbnail.
    Thumb,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSize::Original => write!(f, "original"),
            ImageSize::Regular => write!(f, "regular"),
            ImageSize::Small => write!(f, "small"),
            ImageSize::Thumb => write!(f, "thumb"),
        }
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "original" => Ok(ImageSize::Original),
            "regular" => Ok(ImageSize::Regular),
            "small" => Ok(ImageSize::Small),
            "thumb" => Ok(ImageSize::Thumb),
            _ => Err(format!("Unknown image size: {}", s)),
        }
    }
}

/// Container format animated works are saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UgoiraFormat {
    Zip,
    #[default]
    Webm,
    Gif,
    Png,
}

impl UgoiraFormat {
    /// File extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            UgoiraFormat::Zip => "zip",
            UgoiraFormat::Webm => "webm",
            UgoiraFormat::Gif => "gif",
            UgoiraFormat::Png => "png",
        }
    }
}

impl fmt::Display for UgoiraFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for UgoiraFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zip" => Ok(UgoiraFormat::Zip),
            "webm" => Ok(UgoiraFormat::Webm),
            "gif" => Ok(UgoiraFormat::Gif),
            "png" => Ok(UgoiraFormat::Png),
            _ => Err(format!("Unknown animation format: {}", s)),
        }
    }
}

/// Format text works are saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NovelFormat {
    #[default]
    Txt,
    Epub,
}

impl NovelFormat {
    /// File extension (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            NovelFormat::Txt => "txt",
            NovelFormat::Epub => "epub",
        }
    }
}

impl fmt::Display for NovelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for NovelFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(NovelFormat::Txt),
            "epub" => Ok(NovelFormat::Epub),
            _ => Err(format!("Unknown novel format: {}", s)),
        }
    }
}
