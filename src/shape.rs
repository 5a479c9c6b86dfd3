// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Shape detection for job-search slugs.
//!
//! Both the request rewriter and the display-metadata deriver classify slugs
//! through [`classify_slug`], so the two can never disagree about what a slug
//! means.

use serde::Serialize;

/// Prefix of a location-only slug (`jobs-in-<location>`).
pub const LOCATION_PREFIX: &str = "jobs-in-";
/// Separator between keyword and location (`<keyword>-jobs-in-<location>`).
pub const KEYWORD_LOCATION_SEPARATOR: &str = "-jobs-in-";
/// Suffix of a keyword-only slug (`<keyword>-jobs`).
pub const KEYWORD_SUFFIX: &str = "-jobs";

/// Decomposition of a slug into its keyword and location fragments.
///
/// Fragments borrow from the slug passed to [`classify_slug`] and are not
/// normalized any further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize,)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SlugShape<'slug,>
{
    /// The slug does not encode a job search.
    NoMatch,
    /// `<keyword>-jobs`
    KeywordOnly
    {
        /// Text before the trailing `-jobs`.
        keyword: &'slug str,
    },
    /// `jobs-in-<location>`
    LocationOnly
    {
        /// Text after the leading `jobs-in-`.
        location: &'slug str,
    },
    /// `<keyword>-jobs-in-<location>`
    KeywordAndLocation
    {
        /// Text before the first `-jobs-in-`.
        keyword:  &'slug str,
        /// Text after the first `-jobs-in-`.
        location: &'slug str,
    },
}

impl<'slug,> SlugShape<'slug,>
{
    /// Returns `true` for every shape except [`SlugShape::NoMatch`].
    pub fn is_match(&self,) -> bool
    {
        !matches!(self, Self::NoMatch)
    }

    /// Keyword fragment, if the shape carries one.
    pub fn keyword_fragment(&self,) -> Option<&'slug str,>
    {
        match *self {
            Self::KeywordOnly {
                keyword,
            }
            | Self::KeywordAndLocation {
                keyword, ..
            } => Some(keyword,),
            Self::NoMatch | Self::LocationOnly { .. } => None,
        }
    }

    /// Location fragment, if the shape carries one.
    pub fn location_fragment(&self,) -> Option<&'slug str,>
    {
        match *self {
            Self::LocationOnly {
                location,
            }
            | Self::KeywordAndLocation {
                location, ..
            } => Some(location,),
            Self::NoMatch | Self::KeywordOnly { .. } => None,
        }
    }
}

/// Classifies an already lowercased slug.
///
/// The checks run in a fixed order and the first one that matches wins:
///
/// 1. a `jobs-in-` prefix yields [`SlugShape::LocationOnly`];
/// 2. a `-jobs-in-` infix yields [`SlugShape::KeywordAndLocation`], split on
///    its first occurrence;
/// 3. a `-jobs` suffix yields [`SlugShape::KeywordOnly`].
///
/// Checking the prefix first keeps `jobs-in-pune` from being read as an empty
/// keyword plus a location.
///
/// # Examples
///
/// ```
/// use referral_seo::{SlugShape, classify_slug};
///
/// assert_eq!(classify_slug("jobs-in-pune"), SlugShape::LocationOnly {
///     location: "pune",
/// });
/// assert_eq!(classify_slug("data-scientist-jobs-in-pune"), SlugShape::KeywordAndLocation {
///     keyword:  "data-scientist",
///     location: "pune",
/// });
/// assert_eq!(classify_slug("about-us"), SlugShape::NoMatch);
/// ```
pub fn classify_slug(slug: &str,) -> SlugShape<'_,>
{
    if let Some(location,) = slug.strip_prefix(LOCATION_PREFIX,) {
        return SlugShape::LocationOnly {
            location,
        };
    }

    if let Some((keyword, location,),) = slug.split_once(KEYWORD_LOCATION_SEPARATOR,) {
        return SlugShape::KeywordAndLocation {
            keyword,
            location,
        };
    }

    if let Some(keyword,) = slug.strip_suffix(KEYWORD_SUFFIX,) {
        return SlugShape::KeywordOnly {
            keyword,
        };
    }

    SlugShape::NoMatch
}

#[cfg(test)]
mod tests
{
    use super::{SlugShape, classify_slug};

    #[test]
    fn location_prefix_takes_priority_over_infix()
    {
        let shape = classify_slug("jobs-in-bangalore",);
        assert_eq!(shape, SlugShape::LocationOnly {
            location: "bangalore",
        });
        assert_eq!(shape.keyword_fragment(), None);
        assert_eq!(shape.location_fragment(), Some("bangalore"));
    }

    #[test]
    fn infix_splits_on_first_occurrence()
    {
        let shape = classify_slug("react-jobs-in-remote-jobs-in-pune",);
        assert_eq!(shape, SlugShape::KeywordAndLocation {
            keyword:  "react",
            location: "remote-jobs-in-pune",
        });
    }

    #[test]
    fn infix_takes_priority_over_suffix()
    {
        let shape = classify_slug("java-jobs-in-delhi-jobs",);
        assert_eq!(shape.keyword_fragment(), Some("java"));
        assert_eq!(shape.location_fragment(), Some("delhi-jobs"));
    }

    #[test]
    fn suffix_yields_keyword_only()
    {
        let shape = classify_slug("senior-engineer-jobs",);
        assert_eq!(shape, SlugShape::KeywordOnly {
            keyword: "senior-engineer",
        });
        assert_eq!(shape.location_fragment(), None);
    }

    #[test]
    fn unrelated_slugs_do_not_match()
    {
        for slug in ["", "jobs", "about", "jobsearch", "jobs-in", "engineer-job"] {
            let shape = classify_slug(slug,);
            assert!(!shape.is_match(), "{slug} should not match");
            assert_eq!(shape.keyword_fragment(), None);
            assert_eq!(shape.location_fragment(), None);
        }
    }

    #[test]
    fn bare_markers_produce_empty_fragments()
    {
        assert_eq!(classify_slug("jobs-in-",), SlugShape::LocationOnly {
            location: "",
        });
        assert_eq!(classify_slug("-jobs",), SlugShape::KeywordOnly {
            keyword: "",
        });
    }

    #[test]
    fn shape_serializes_with_tag()
    {
        let json = serde_json::to_string(&classify_slug("rust-jobs",),).expect("serialize",);
        assert_eq!(json, r#"{"shape":"keyword_only","keyword":"rust"}"#);
    }
}
