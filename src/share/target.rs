//! Supported share destinations and their endpoint table.
//!
//! | Target       | Endpoint                                           | Parameters                     |
//! |--------------|----------------------------------------------------|--------------------------------|
//! | `reddit`     | `https://www.reddit.com/submit`                    | `url`, `title`                 |
//! | `twitter`    | `https://twitter.com/intent/tweet`                 | `url`, `text`, `hashtags`      |
//! | `facebook`   | `https://www.facebook.com/sharer/sharer.php`       | `u`                            |
//! | `linkedin`   | `https://www.linkedin.com/sharing/share-offsite/`  | `url`                          |
//! | `hackernews` | `https://news.ycombinator.com/submitlink`          | `u`, `t`                       |
//! | `telegram`   | `https://t.me/share/url`                           | `url`, `text`                  |
//! | `whatsapp`   | `https://api.whatsapp.com/send`                    | `text` (text + url)            |
//! | `bluesky`    | `https://bsky.app/intent/compose`                  | `text` (text + url)            |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ShareError;

/// Destination network for a share link.
///
/// Serializes as its canonical name. Names are parsed with [`FromStr`],
/// which also accepts the aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Reddit,
    Twitter,
    Facebook,
    LinkedIn,
    HackerNews,
    Telegram,
    WhatsApp,
    Bluesky,
}

/// Request field a query parameter is filled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The page URL.
    Url,
    /// Share text, omitted when empty.
    Text,
    /// Comma-joined hashtags, omitted when there are none.
    Tags,
    /// `"{text} {url}"`, or just the URL when text is empty.
    TextWithUrl,
}

/// One row of the endpoint table.
#[derive(Debug)]
pub struct Endpoint {
    pub target: ShareTarget,
    pub base: &'static str,
    /// Query parameters in output order.
    pub params: &'static [(&'static str, Field)],
}

/// Endpoint table, indexed by `ShareTarget as usize`.
static ENDPOINTS: [Endpoint; ShareTarget::COUNT] = [
    Endpoint {
        target: ShareTarget::Reddit,
        base: "https://www.reddit.com/submit",
        params: &[("url", Field::Url), ("title", Field::Text)],
    },
    Endpoint {
        target: ShareTarget::Twitter,
        base: "https://twitter.com/intent/tweet",
        params: &[
            ("url", Field::Url),
            ("text", Field::Text),
            ("hashtags", Field::Tags),
        ],
    },
    Endpoint {
        target: ShareTarget::Facebook,
        base: "https://www.facebook.com/sharer/sharer.php",
        params: &[("u", Field::Url)],
    },
    Endpoint {
        target: ShareTarget::LinkedIn,
        base: "https://www.linkedin.com/sharing/share-offsite/",
        params: &[("url", Field::Url)],
    },
    Endpoint {
        target: ShareTarget::HackerNews,
        base: "https://news.ycombinator.com/submitlink",
        params: &[("u", Field::Url), ("t", Field::Text)],
    },
    Endpoint {
        target: ShareTarget::Telegram,
        base: "https://t.me/share/url",
        params: &[("url", Field::Url), ("text", Field::Text)],
    },
    Endpoint {
        target: ShareTarget::WhatsApp,
        base: "https://api.whatsapp.com/send",
        params: &[("text", Field::TextWithUrl)],
    },
    Endpoint {
        target: ShareTarget::Bluesky,
        base: "https://bsky.app/intent/compose",
        params: &[("text", Field::TextWithUrl)],
    },
];

impl ShareTarget {
    pub const COUNT: usize = 8;

    /// All targets in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Reddit,
        Self::Twitter,
        Self::Facebook,
        Self::LinkedIn,
        Self::HackerNews,
        Self::Telegram,
        Self::WhatsApp,
        Self::Bluesky,
    ];

    #[inline]
    pub fn endpoint(self) -> &'static Endpoint {
        &ENDPOINTS[self as usize]
    }

    /// Canonical lowercase name, as accepted in config and CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reddit => "reddit",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::HackerNews => "hackernews",
            Self::Telegram => "telegram",
            Self::WhatsApp => "whatsapp",
            Self::Bluesky => "bluesky",
        }
    }

    /// Human-readable label for anchors.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reddit => "Reddit",
            Self::Twitter => "X",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::HackerNews => "Hacker News",
            Self::Telegram => "Telegram",
            Self::WhatsApp => "WhatsApp",
            Self::Bluesky => "Bluesky",
        }
    }

    /// Whether any parameter of this target consumes `field`.
    ///
    /// `TextWithUrl` counts as consuming both `Text` and `Url`.
    pub fn supports(self, field: Field) -> bool {
        self.endpoint().params.iter().any(|&(_, f)| {
            f == field
                || (f == Field::TextWithUrl && matches!(field, Field::Text | Field::Url))
        })
    }

    /// Comma-separated list of canonical names, for hints.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShareTarget {
    type Err = ShareError;

    /// Case-insensitive; accepts `x` for Twitter, `hn` and `hacker-news`
    /// for Hacker News.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let target = match name.as_str() {
            "x" => Self::Twitter,
            "hn" | "hacker-news" => Self::HackerNews,
            _ => Self::ALL
                .into_iter()
                .find(|t| t.name() == name)
                .ok_or_else(|| ShareError::InvalidTarget { name: s.to_string() })?,
        };
        Ok(target)
    }
}
