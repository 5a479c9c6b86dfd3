// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Inbound request classification.
//!
//! [`classify_path`] decides whether a root-level request path encodes a job
//! search. Matching paths are rewritten to the listing endpoint with the
//! original slug preserved in the `seo` query parameter, everything else
//! passes through untouched.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use tracing::debug;

use crate::{shape::classify_slug, skip::SkipList};

/// Listing endpoint that search slugs are rewritten to.
pub const LISTING_PATH: &str = "/referrals";
/// Query parameter carrying the original slug after a rewrite.
pub const SEO_PARAM: &str = "seo";

/// Characters left unescaped in query values (RFC 3986 unreserved set).
pub(crate) const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-',).remove(b'_',).remove(b'.',).remove(b'~',);

/// Outcome of classifying an inbound request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RewriteDecision
{
    /// Serve the request as-is.
    NoRewrite,
    /// Serve the listing endpoint instead, keeping the browser URL.
    Rewrite(SeoRewrite,),
}

impl RewriteDecision
{
    /// Returns the rewrite instruction, if any.
    pub fn as_rewrite(&self,) -> Option<&SeoRewrite,>
    {
        match self {
            Self::Rewrite(rewrite,) => Some(rewrite,),
            Self::NoRewrite => None,
        }
    }

    /// Returns `true` for [`RewriteDecision::Rewrite`].
    pub fn is_rewrite(&self,) -> bool
    {
        matches!(self, Self::Rewrite(_))
    }
}

/// Internal rewrite target for a recognized search slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct SeoRewrite
{
    /// Path the request is served from.
    pub target_path: String,
    /// Lowercased original slug, kept as an opaque tag.
    pub seo:         String,
}

impl SeoRewrite
{
    /// Renders the rewrite as a URI, carrying over the request's existing
    /// query string.
    ///
    /// Existing pairs are appended verbatim after the `seo` pair. A stale
    /// `seo` pair in the existing query is dropped so the tag is never
    /// ambiguous.
    ///
    /// # Examples
    ///
    /// ```
    /// use referral_seo::{SkipList, classify_path};
    ///
    /// let decision = classify_path("/rust-jobs-in-pune", &SkipList::default(),);
    /// let rewrite = decision.as_rewrite().expect("slug should be recognized",);
    /// assert_eq!(
    ///     rewrite.to_uri(Some("experience=3&seo=old",)),
    ///     "/referrals?seo=rust-jobs-in-pune&experience=3"
    /// );
    /// ```
    pub fn to_uri(&self, existing_query: Option<&str,>,) -> String
    {
        let mut uri = format!(
            "{}?{SEO_PARAM}={}",
            self.target_path,
            utf8_percent_encode(&self.seo, QUERY_VALUE,)
        );

        let pairs = existing_query
            .map(|query| query.trim_start_matches('?',),)
            .into_iter()
            .flat_map(|query| query.split('&',),)
            .filter(|pair| !pair.is_empty(),);

        for pair in pairs {
            let key = pair.split_once('=',).map_or(pair, |(key, _,)| key,);
            if key == SEO_PARAM {
                continue;
            }
            uri.push('&',);
            uri.push_str(pair,);
        }

        uri
    }
}

/// Classifies an inbound request path against the provided skip list.
///
/// The path must consist of exactly one non-empty segment; a leading slash is
/// optional. Reserved prefixes from `skip_list` short-circuit before any
/// slug matching happens. The function is total: every input maps to either
/// [`RewriteDecision::NoRewrite`] or a rewrite to [`LISTING_PATH`].
///
/// # Examples
///
/// ```
/// use referral_seo::{RewriteDecision, SkipList, classify_path};
///
/// let skip = SkipList::default();
/// let decision = classify_path("/Senior-Engineer-Jobs-In-Bangalore", &skip,);
/// let rewrite = decision.as_rewrite().expect("slug should be recognized",);
/// assert_eq!(rewrite.target_path, "/referrals");
/// assert_eq!(rewrite.seo, "senior-engineer-jobs-in-bangalore");
///
/// assert_eq!(classify_path("/login", &skip,), RewriteDecision::NoRewrite);
/// assert_eq!(classify_path("/foo/bar-jobs", &skip,), RewriteDecision::NoRewrite);
/// ```
pub fn classify_path(path: &str, skip_list: &SkipList,) -> RewriteDecision
{
    rewrite_to(path, skip_list, LISTING_PATH,)
}

/// Same as [`classify_path`] with a custom listing endpoint.
pub(crate) fn rewrite_to(path: &str, skip_list: &SkipList, listing_path: &str,) -> RewriteDecision
{
    match match_slug(path, skip_list,) {
        Some(seo,) => {
            debug!(path, seo = seo.as_str(), "rewriting search slug");
            RewriteDecision::Rewrite(SeoRewrite {
                target_path: listing_path.to_owned(),
                seo,
            },)
        }
        None => RewriteDecision::NoRewrite,
    }
}

/// Returns the lowercased slug when `path` is a recognized search slug.
pub(crate) fn match_slug(path: &str, skip_list: &SkipList,) -> Option<String,>
{
    let mut segments = path.split('/',).filter(|segment| !segment.is_empty(),);
    let (Some(segment,), None,) = (segments.next(), segments.next(),) else {
        return None;
    };

    let slug = segment.to_lowercase();
    if skip_list.matches(&format!("/{slug}"),) {
        debug!(path, "path is reserved by the skip list");
        return None;
    }

    classify_slug(&slug,).is_match().then_some(slug,)
}
