//! GitHub user profile and its render-ready projection.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Bio text shown when the profile has none.
pub const NO_BIO: &str = "This profile has no bio";

/// Text shown for a missing profile detail.
pub const NOT_AVAILABLE: &str = "Not available";

/// A GitHub user profile from the `/users/{username}` endpoint.
///
/// Only `login` and `avatar_url` are required; GitHub sends `null` or `""`
/// for most unset fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
    pub blog: Option<String>,
    pub company: Option<String>,
    pub html_url: Option<String>,
}

/// Treat `None`, `""` and whitespace-only strings alike.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Profile {
    /// Name to show: the display name, or the login when unset.
    pub fn display_name(&self) -> &str {
        present(&self.name).unwrap_or(self.login.as_str())
    }

    /// The profile's page on github.com.
    pub fn page_url(&self) -> String {
        present(&self.html_url)
            .map(str::to_string)
            .unwrap_or_else(|| format!("https://github.com/{}", self.login))
    }

    /// Account creation date formatted as `25 Jan 2011`.
    ///
    /// Falls back to the raw value when it is not RFC 3339.
    pub fn joined_date(&self) -> Option<String> {
        let raw = present(&self.created_at)?;
        Some(match DateTime::parse_from_rfc3339(raw) {
            Ok(dt) => dt.format("%-d %b %Y").to_string(),
            Err(e) => {
                tracing::debug!("Unparseable created_at {:?}: {}", raw, e);
                raw.to_string()
            }
        })
    }
}

/// One of the four link rows under the stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    Available { text: String, url: Option<String> },
    NotAvailable,
}

impl Detail {
    pub fn text(&self) -> &str {
        match self {
            Detail::Available { text, .. } => text,
            Detail::NotAvailable => NOT_AVAILABLE,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Detail::Available { url, .. } => url.as_deref(),
            Detail::NotAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Detail::Available { .. })
    }
}

/// Everything a front end needs to draw a profile, with fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub display_name: String,
    pub handle: String,
    pub joined: String,
    pub bio: String,
    pub has_bio: bool,
    pub repos: u64,
    pub followers: u64,
    pub following: u64,
    pub location: Detail,
    pub twitter: Detail,
    pub blog: Detail,
    pub company: Detail,
    pub avatar_url: String,
    pub page_url: String,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        let bio = present(&profile.bio);

        let location = match present(&profile.location) {
            Some(loc) => Detail::Available {
                text: loc.to_string(),
                url: None,
            },
            None => Detail::NotAvailable,
        };

        let twitter = match present(&profile.twitter_username) {
            Some(handle) => Detail::Available {
                text: format!("@{handle}"),
                url: Some(format!("https://twitter.com/{handle}")),
            },
            None => Detail::NotAvailable,
        };

        let blog = match present(&profile.blog) {
            Some(blog) => {
                let url = if blog.starts_with("http://") || blog.starts_with("https://") {
                    blog.to_string()
                } else {
                    format!("https://{blog}")
                };
                Detail::Available {
                    text: blog.to_string(),
                    url: Some(url),
                }
            }
            None => Detail::NotAvailable,
        };

        let company = match present(&profile.company) {
            Some(company) => {
                let org = company.strip_prefix('@').unwrap_or(company);
                Detail::Available {
                    text: company.to_string(),
                    url: Some(format!("https://github.com/{org}")),
                }
            }
            None => Detail::NotAvailable,
        };

        Self {
            display_name: profile.display_name().to_string(),
            handle: format!("@{}", profile.login),
            joined: match profile.joined_date() {
                Some(date) => format!("Joined {date}"),
                None => format!("Joined {NOT_AVAILABLE}"),
            },
            bio: bio.unwrap_or(NO_BIO).to_string(),
            has_bio: bio.is_some(),
            repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            location,
            twitter,
            blog,
            company,
            avatar_url: profile.avatar_url.clone(),
            page_url: profile.page_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Profile {
        serde_json::from_str(
            r#"{"login":"octocat","avatar_url":"u","created_at":"2011-01-25T18:44:36Z","public_repos":2,"followers":3,"following":1}"#,
        )
        .unwrap()
    }

    #[test]
    fn minimal_profile_uses_fallbacks() {
        let card = ProfileCard::from(&minimal());

        assert_eq!(card.display_name, "octocat");
        assert_eq!(card.handle, "@octocat");
        assert_eq!(card.bio, NO_BIO);
        assert!(!card.has_bio);
        assert_eq!(card.joined, "Joined 25 Jan 2011");
        assert_eq!((card.repos, card.followers, card.following), (2, 3, 1));
        for detail in [&card.location, &card.twitter, &card.blog, &card.company] {
            assert_eq!(detail, &Detail::NotAvailable);
            assert_eq!(detail.text(), NOT_AVAILABLE);
        }
        assert_eq!(card.page_url, "https://github.com/octocat");
    }

    #[test]
    fn full_profile_builds_links() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "login": "octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                "html_url": "https://github.com/octocat",
                "name": "The Octocat",
                "created_at": "2011-01-25T18:44:36Z",
                "bio": "Mascot",
                "public_repos": 8,
                "followers": 9000,
                "following": 9,
                "location": "San Francisco",
                "twitter_username": "github",
                "blog": "github.blog",
                "company": "@github"
            }"#,
        )
        .unwrap();
        let card = ProfileCard::from(&profile);

        assert_eq!(card.display_name, "The Octocat");
        assert_eq!(card.bio, "Mascot");
        assert_eq!(card.location.text(), "San Francisco");
        assert_eq!(card.location.url(), None);
        assert_eq!(card.twitter.text(), "@github");
        assert_eq!(card.twitter.url(), Some("https://twitter.com/github"));
        assert_eq!(card.blog.url(), Some("https://github.blog"));
        assert_eq!(card.company.text(), "@github");
        assert_eq!(card.company.url(), Some("https://github.com/github"));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let profile: Profile = serde_json::from_str(
            r#"{"login":"ghost","avatar_url":"u","name":"","bio":null,"blog":"","company":"  ","created_at":"not a date"}"#,
        )
        .unwrap();
        let card = ProfileCard::from(&profile);

        assert_eq!(card.display_name, "ghost");
        assert_eq!(card.bio, NO_BIO);
        assert!(!card.blog.is_available());
        assert!(!card.company.is_available());
        assert_eq!(card.joined, "Joined not a date");
        assert_eq!(card.repos, 0);
    }

    #[test]
    fn missing_login_is_rejected() {
        assert!(serde_json::from_str::<Profile>(r#"{"avatar_url":"u"}"#).is_err());
    }
}
