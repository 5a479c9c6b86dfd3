// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Display strings derived from a preserved `seo` tag.
//!
//! Page titles, breadcrumbs and structured data on the listing page are built
//! from these strings. Classification goes through the same predicate the
//! rewriter uses.

use serde::Serialize;

use crate::{shape::classify_slug, slug::to_display_text};

/// Human-readable keyword and location derived from a slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct DisplayMetadata
{
    /// Title-cased keyword, empty when the slug carries none.
    pub keyword:         String,
    /// `" in <Location>"`, empty when the slug carries no location.
    pub location_suffix: String,
}

impl DisplayMetadata
{
    /// Page title for the listing page, e.g. `"Data Scientist Jobs in Pune"`.
    ///
    /// Falls back to `"Jobs<suffix>"` without a keyword and to `"Jobs"` when
    /// nothing was derived.
    pub fn page_title(&self,) -> String
    {
        if self.keyword.is_empty() {
            format!("Jobs{}", self.location_suffix)
        } else {
            format!("{} Jobs{}", self.keyword, self.location_suffix)
        }
    }
}

/// Derives display strings from an `seo` tag.
///
/// The tag is lowercased before classification. Empty fragments are treated
/// as absent. Any input produces a result; unrecognized tags yield empty
/// strings.
///
/// # Examples
///
/// ```
/// use referral_seo::derive_display;
///
/// let display = derive_display("data-scientist-jobs-in-pune",);
/// assert_eq!(display.keyword, "Data Scientist");
/// assert_eq!(display.location_suffix, " in Pune");
/// assert_eq!(display.page_title(), "Data Scientist Jobs in Pune");
/// ```
pub fn derive_display(slug: &str,) -> DisplayMetadata
{
    let lowered = slug.trim().to_lowercase();
    let shape = classify_slug(&lowered,);

    let keyword = shape
        .keyword_fragment()
        .filter(|fragment| !fragment.is_empty(),)
        .map(to_display_text,)
        .unwrap_or_default();
    let location_suffix = shape
        .location_fragment()
        .filter(|fragment| !fragment.is_empty(),)
        .map(|fragment| format!(" in {}", to_display_text(fragment,)),)
        .unwrap_or_default();

    DisplayMetadata {
        keyword,
        location_suffix,
    }
}

#[cfg(test)]
mod tests
{
    use super::{DisplayMetadata, derive_display};

    #[test]
    fn keyword_only_slug_has_no_suffix()
    {
        let display = derive_display("senior-engineer-jobs",);
        assert_eq!(display.keyword, "Senior Engineer");
        assert_eq!(display.location_suffix, "");
        assert_eq!(display.page_title(), "Senior Engineer Jobs");
    }

    #[test]
    fn location_only_slug_has_no_keyword()
    {
        let display = derive_display("jobs-in-bangalore-india",);
        assert_eq!(display.keyword, "");
        assert_eq!(display.location_suffix, " in Bangalore India");
        assert_eq!(display.page_title(), "Jobs in Bangalore India");
    }

    #[test]
    fn keyword_and_location_slug_fills_both()
    {
        let display = derive_display("Data-Scientist-Jobs-In-Pune",);
        assert_eq!(display, DisplayMetadata {
            keyword:         "Data Scientist".to_owned(),
            location_suffix: " in Pune".to_owned(),
        });
    }

    #[test]
    fn unrecognized_tag_yields_empty_strings()
    {
        let display = derive_display("about-us",);
        assert_eq!(display, DisplayMetadata::default());
        assert_eq!(display.page_title(), "Jobs");
    }

    #[test]
    fn empty_fragments_are_treated_as_absent()
    {
        assert_eq!(derive_display("jobs-in-",), DisplayMetadata::default());
        assert_eq!(derive_display("-jobs",), DisplayMetadata::default());

        let display = derive_display("-jobs-in-pune",);
        assert_eq!(display.keyword, "");
        assert_eq!(display.location_suffix, " in Pune");
    }

    #[test]
    fn priority_matches_the_rewriter()
    {
        let display = derive_display("jobs-in-remote-jobs",);
        assert_eq!(display.keyword, "");
        assert_eq!(display.location_suffix, " in Remote Jobs");
    }
}
