// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Outbound canonical paths for search criteria.
//!
//! [`build_seo_path`] encodes a keyword and a location into the slug shapes
//! recognized by [`classify_path`](crate::classify_path). Every slug it emits
//! is checked against the parser before it is returned, so navigating to the
//! result always lands on a URL the rewriter understands.

use serde::Serialize;
use tracing::debug;

use crate::{
    parser::{LISTING_PATH, match_slug},
    shape::{KEYWORD_LOCATION_SEPARATOR, KEYWORD_SUFFIX, LOCATION_PREFIX, classify_slug},
    skip::SkipList,
    slug::to_slug_fragment,
};

/// Search criteria that take part in slug encoding.
///
/// Experience is deliberately absent; it always travels as a query
/// parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq,)]
pub struct SeoPathInput<'input,>
{
    /// Free-text job title, skill or company.
    pub keyword: &'input str,
    /// Free-text country name.
    pub country: &'input str,
    /// Free-text city name.
    pub city:    &'input str,
}

/// Normalized keyword and location fragments of a search.
///
/// Fragments that normalize to an empty string are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct SeoFragments
{
    /// Slug fragment of the keyword.
    pub keyword:  Option<String,>,
    /// Slug fragment of the location, `<city>-<country>` when both exist.
    pub location: Option<String,>,
}

impl SeoFragments
{
    /// Normalizes the keyword and joins city and country, city first.
    ///
    /// # Examples
    ///
    /// ```
    /// use referral_seo::{SeoFragments, SeoPathInput};
    ///
    /// let fragments = SeoFragments::from_input(&SeoPathInput {
    ///     keyword: "", country: "India", city: "Bangalore",
    /// },);
    /// assert_eq!(fragments.keyword, None);
    /// assert_eq!(fragments.location.as_deref(), Some("bangalore-india"));
    /// ```
    pub fn from_input(input: &SeoPathInput<'_,>,) -> Self
    {
        let keyword = non_empty(to_slug_fragment(input.keyword,),);
        let city = non_empty(to_slug_fragment(input.city,),);
        let country = non_empty(to_slug_fragment(input.country,),);

        let location = match (city, country,) {
            (Some(city,), Some(country,),) => Some(format!("{city}-{country}"),),
            (city, country,) => city.or(country,),
        };

        Self {
            keyword,
            location,
        }
    }

    /// Slug for these fragments, or `None` when there are no criteria.
    pub fn slug(&self,) -> Option<String,>
    {
        match (self.keyword.as_deref(), self.location.as_deref(),) {
            (Some(keyword,), Some(location,),) => {
                Some(format!("{keyword}{KEYWORD_LOCATION_SEPARATOR}{location}"),)
            }
            (Some(keyword,), None,) => Some(format!("{keyword}{KEYWORD_SUFFIX}"),),
            (None, Some(location,),) => Some(format!("{LOCATION_PREFIX}{location}"),),
            (None, None,) => None,
        }
    }

    /// Returns `true` when classifying `path` under `skip_list` yields a
    /// rewrite whose fragments equal these fragments.
    pub fn round_trips(&self, path: &str, skip_list: &SkipList,) -> bool
    {
        let Some(seo,) = match_slug(path, skip_list,) else {
            return false;
        };

        let shape = classify_slug(&seo,);
        shape.keyword_fragment() == self.keyword.as_deref()
            && shape.location_fragment() == self.location.as_deref()
    }
}

/// Builds the canonical outbound path for the given criteria.
///
/// | keyword | location | path                              |
/// |---------|----------|-----------------------------------|
/// | yes     | yes      | `/<keyword>-jobs-in-<location>`   |
/// | yes     | no       | `/<keyword>-jobs`                 |
/// | no      | yes      | `/jobs-in-<location>`             |
/// | no      | no       | `/referrals`                      |
///
/// The location is `<city>-<country>` when both are supplied. When the
/// resulting slug would not parse back into the same fragments (a keyword
/// such as `"jobs in tech"`, or a slug swallowed by the default skip list)
/// the listing path is returned instead.
///
/// # Examples
///
/// ```
/// use referral_seo::{SeoPathInput, build_seo_path};
///
/// let path = build_seo_path(&SeoPathInput {
///     keyword: "Data Scientist", country: "", city: "Pune",
/// },);
/// assert_eq!(path, "/data-scientist-jobs-in-pune");
/// assert_eq!(build_seo_path(&SeoPathInput::default()), "/referrals");
/// ```
pub fn build_seo_path(input: &SeoPathInput<'_,>,) -> String
{
    build_with(input, SkipList::shared_default(), LISTING_PATH,)
}

/// Same as [`build_seo_path`] with a custom skip list and listing endpoint.
pub(crate) fn build_with(
    input: &SeoPathInput<'_,>,
    skip_list: &SkipList,
    listing_path: &str,
) -> String
{
    canonical_path(input, skip_list,).unwrap_or_else(|| listing_path.to_owned(),)
}

/// Slug path for the criteria, or `None` when the listing path has to be used
/// instead.
pub(crate) fn canonical_path(input: &SeoPathInput<'_,>, skip_list: &SkipList,) -> Option<String,>
{
    let fragments = SeoFragments::from_input(input,);
    let Some(slug,) = fragments.slug() else {
        debug!("no search criteria; using listing path");
        return None;
    };

    let path = format!("/{slug}");
    if !fragments.round_trips(&path, skip_list,) {
        debug!(slug = slug.as_str(), "slug would not parse back; using listing path");
        return None;
    }

    Some(path,)
}

fn non_empty(fragment: String,) -> Option<String,>
{
    if fragment.is_empty() { None } else { Some(fragment,) }
}
