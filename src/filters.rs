// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Search intent as submitted by the UI or carried in a query string.

use percent_encoding::{percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    builder::{SeoPathInput, canonical_path},
    parser::{LISTING_PATH, QUERY_VALUE},
    skip::SkipList,
};

/// Query parameter holding the years of experience.
pub const EXPERIENCE_PARAM: &str = "experience";
/// Longest accepted experience value, in digits.
const MAX_EXPERIENCE_DIGITS: usize = 2;

/// Canonical search intent.
///
/// Every field may be empty. `keyword`, `country` and `city` are combined
/// only when a slug is built; `experience` never becomes part of a slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(default)]
pub struct SearchFilters
{
    /// Free-text job title, skill or company fragment.
    pub keyword:    String,
    /// Free-text country name.
    pub country:    String,
    /// Free-text city name.
    pub city:       String,
    /// Years of experience as a decimal string.
    #[serde(alias = "exp")]
    pub experience: String,
}

impl SearchFilters
{
    /// Decodes filters from an `application/x-www-form-urlencoded` query.
    ///
    /// A leading `?` is ignored, `+` decodes to a space and unknown keys are
    /// skipped. When a key repeats, the first value wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use referral_seo::SearchFilters;
    ///
    /// let filters = SearchFilters::from_query("?keyword=Data+Scientist&city=Pune&experience=3",);
    /// assert_eq!(filters.keyword, "Data Scientist");
    /// assert_eq!(filters.city, "Pune");
    /// assert_eq!(filters.experience, "3");
    /// ```
    pub fn from_query(query: &str,) -> Self
    {
        let mut filters = Self::default();
        let mut seen = [false; 4];

        for pair in query.trim_start_matches('?',).split('&',).filter(|pair| !pair.is_empty(),) {
            let (raw_key, raw_value,) = pair.split_once('=',).unwrap_or((pair, "",),);
            let (slot, field,) = match decode_component(raw_key,).as_str() {
                "keyword" => (0, &mut filters.keyword,),
                "country" => (1, &mut filters.country,),
                "city" => (2, &mut filters.city,),
                EXPERIENCE_PARAM => (3, &mut filters.experience,),
                _ => continue,
            };
            if seen[slot] {
                continue;
            }
            seen[slot] = true;
            *field = decode_component(raw_value,);
        }

        filters
    }

    /// Borrows the fields that take part in slug encoding.
    pub fn seo_input(&self,) -> SeoPathInput<'_,>
    {
        SeoPathInput {
            keyword: &self.keyword,
            country: &self.country,
            city:    &self.city,
        }
    }

    /// Experience in years, when it is a one or two digit number.
    pub fn experience_years(&self,) -> Option<u8,>
    {
        let trimmed = self.experience.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= MAX_EXPERIENCE_DIGITS
            && trimmed.bytes().all(|byte| byte.is_ascii_digit(),);
        if valid { trimmed.parse().ok() } else { None }
    }

    /// Canonical path plus the `experience` query parameter, ready for
    /// client navigation.
    ///
    /// An experience value that is not a one or two digit number is dropped.
    /// When the criteria cannot be expressed as a slug, the listing path is
    /// returned with `keyword`, `country` and `city` carried as query
    /// parameters so the search is not lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use referral_seo::SearchFilters;
    ///
    /// let filters = SearchFilters {
    ///     keyword: "Rust".to_owned(),
    ///     experience: "5".to_owned(),
    ///     ..SearchFilters::default()
    /// };
    /// assert_eq!(filters.navigation_target(), "/rust-jobs?experience=5");
    ///
    /// let reserved = SearchFilters {
    ///     keyword: "Login".to_owned(),
    ///     city: "New Delhi".to_owned(),
    ///     ..SearchFilters::default()
    /// };
    /// assert_eq!(reserved.navigation_target(), "/referrals?keyword=Login&city=New%20Delhi");
    /// ```
    pub fn navigation_target(&self,) -> String
    {
        self.navigation_target_with(SkipList::shared_default(), LISTING_PATH,)
    }

    pub(crate) fn navigation_target_with(&self, skip_list: &SkipList, listing_path: &str,) -> String
    {
        let mut pairs = Vec::new();
        let path = match canonical_path(&self.seo_input(), skip_list,) {
            Some(path,) => path,
            None => {
                for (name, value,) in
                    [("keyword", &self.keyword,), ("country", &self.country,), ("city", &self.city,)]
                {
                    let value = value.trim();
                    if !value.is_empty() {
                        pairs.push(format!("{name}={}", utf8_percent_encode(value, QUERY_VALUE,)),);
                    }
                }
                if !pairs.is_empty() {
                    debug!(listing_path, "carrying search criteria as query parameters");
                }
                listing_path.to_owned()
            }
        };

        match self.experience_years() {
            Some(years,) => pairs.push(format!("{EXPERIENCE_PARAM}={years}"),),
            None if !self.experience.trim().is_empty() => {
                debug!(experience = self.experience.as_str(), "dropping invalid experience value");
            }
            None => {}
        }

        if pairs.is_empty() { path } else { format!("{path}?{}", pairs.join("&",)) }
    }
}

fn decode_component(raw: &str,) -> String
{
    let spaced = raw.replace('+', " ",);
    percent_decode_str(&spaced,).decode_utf8_lossy().into_owned()
}
