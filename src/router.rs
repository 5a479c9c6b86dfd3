// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configured entry point for the hosting route layer.
//!
//! A [`SlugRouter`] is built once at startup (usually through
//! [`load_config`](crate::load_config)) and shared read-only across request
//! handlers. It pairs the parser and the builder with the same skip list so
//! that paths produced by one are always accepted by the other.

use crate::{
    builder::{SeoPathInput, build_with},
    filters::SearchFilters,
    metadata::{DisplayMetadata, derive_display},
    parser::{LISTING_PATH, RewriteDecision, rewrite_to},
    skip::SkipList,
};

/// Slug parser and builder bound to one skip list and listing endpoint.
///
/// # Examples
///
/// ```
/// use referral_seo::{SeoPathInput, SlugRouter};
///
/// let router = SlugRouter::default();
/// let path = router.build_seo_path(&SeoPathInput {
///     keyword: "Rust", country: "", city: "Pune",
/// },);
/// assert_eq!(path, "/rust-jobs-in-pune");
/// assert!(router.classify_path(&path,).is_rewrite());
/// ```
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct SlugRouter
{
    skip_list:    SkipList,
    listing_path: String,
}

impl SlugRouter
{
    /// Creates a router that rewrites to [`LISTING_PATH`].
    pub fn new(skip_list: SkipList,) -> Self
    {
        Self::with_listing_path(skip_list, LISTING_PATH,)
    }

    /// Creates a router with a custom listing endpoint.
    ///
    /// The listing path is always added to the skip list so rewritten
    /// requests are never classified twice.
    pub fn with_listing_path(mut skip_list: SkipList, listing_path: &str,) -> Self
    {
        skip_list.insert(listing_path,);
        Self {
            skip_list,
            listing_path: listing_path.to_owned(),
        }
    }

    /// Reserved prefixes consulted by this router.
    pub fn skip_list(&self,) -> &SkipList
    {
        &self.skip_list
    }

    /// Listing endpoint used for rewrites and fallbacks.
    pub fn listing_path(&self,) -> &str
    {
        &self.listing_path
    }

    /// See [`classify_path`](crate::classify_path).
    pub fn classify_path(&self, path: &str,) -> RewriteDecision
    {
        rewrite_to(path, &self.skip_list, &self.listing_path,)
    }

    /// Convenience forward to [`derive_display`](crate::derive_display), so
    /// callers holding a router need nothing else. Display derivation reads
    /// only the tag and does not depend on the router's configuration.
    pub fn derive_display(&self, seo: &str,) -> DisplayMetadata
    {
        derive_display(seo,)
    }

    /// See [`build_seo_path`](crate::build_seo_path). Slugs reserved by this
    /// router's skip list fall back to the listing path.
    pub fn build_seo_path(&self, input: &SeoPathInput<'_,>,) -> String
    {
        build_with(input, &self.skip_list, &self.listing_path,)
    }

    /// See [`SearchFilters::navigation_target`].
    pub fn navigation_target(&self, filters: &SearchFilters,) -> String
    {
        filters.navigation_target_with(&self.skip_list, &self.listing_path,)
    }
}

impl Default for SlugRouter
{
    fn default() -> Self
    {
        Self::new(SkipList::default(),)
    }
}

#[cfg(test)]
mod tests
{
    use super::SlugRouter;
    use crate::{
        builder::SeoPathInput, filters::SearchFilters, parser::RewriteDecision, skip::SkipList,
    };

    #[test]
    fn custom_listing_path_is_reserved()
    {
        let router = SlugRouter::with_listing_path(SkipList::empty(), "/listing-jobs",);
        assert_eq!(router.listing_path(), "/listing-jobs");
        assert!(router.skip_list().matches("/listing-jobs"));
        assert_eq!(router.classify_path("/listing-jobs",), RewriteDecision::NoRewrite);
    }

    #[test]
    fn rewrites_target_the_configured_listing_path()
    {
        let router = SlugRouter::with_listing_path(SkipList::empty(), "/search-results",);
        let decision = router.classify_path("/rust-jobs",);
        let rewrite = decision.as_rewrite().expect("expected rewrite",);
        assert_eq!(rewrite.target_path, "/search-results");
        assert_eq!(rewrite.seo, "rust-jobs");
    }

    #[test]
    fn builder_respects_router_skip_list()
    {
        let router = SlugRouter::new(SkipList::new(["/go"],),);
        let input = SeoPathInput {
            keyword: "Go", ..SeoPathInput::default()
        };
        assert_eq!(router.build_seo_path(&input,), "/referrals");

        let permissive = SlugRouter::new(SkipList::empty(),);
        assert_eq!(permissive.build_seo_path(&input,), "/go-jobs");
    }

    #[test]
    fn navigation_target_uses_router_listing_path()
    {
        let router = SlugRouter::with_listing_path(SkipList::empty(), "/listing",);
        let filters = SearchFilters {
            experience: "1".to_owned(),
            ..SearchFilters::default()
        };
        assert_eq!(router.navigation_target(&filters,), "/listing?experience=1");
    }

    #[test]
    fn derive_display_matches_free_function()
    {
        let router = SlugRouter::default();
        assert_eq!(router.derive_display("rust-jobs",).keyword, "Rust");

        let custom = SlugRouter::with_listing_path(SkipList::new(["/rust"],), "/listing",);
        let tag = "rust-jobs-in-pune";
        assert_eq!(custom.derive_display(tag,), crate::metadata::derive_display(tag,));
    }
}
