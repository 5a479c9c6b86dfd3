// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Reserved root-level path prefixes that are never treated as slugs.

use std::{collections::BTreeSet, sync::LazyLock};

/// Prefixes reserved by the framework, static assets and the application's
/// own routes.
///
/// Asset and directory roots end in `/`, so they only cover paths below them
/// and never a root-level slug such as `/api-developer-jobs`. File entries
/// carry their extension. Bare route entries are the pages whose names would
/// otherwise read as a slug and must win over one.
pub const DEFAULT_SKIP_PREFIXES: &[&str] = &[
    "/_next/",
    "/api/",
    "/static/",
    "/public/",
    "/favicon.ico",
    "/robots.txt",
    "/sitemap.xml",
    "/manifest.json",
    "/referrals",
    "/login",
    "/signup",
    "/logout",
];

static DEFAULT_SKIP_LIST: LazyLock<SkipList,> = LazyLock::new(SkipList::default,);

/// Set of reserved path prefixes with case-insensitive prefix matching.
///
/// Entries are stored lowercased in an ordered set. A lookup probes every
/// prefix of the candidate path against the set, so its cost depends on the
/// path length rather than on the number of reserved routes.
///
/// # Examples
///
/// ```
/// use referral_seo::SkipList;
///
/// let skip = SkipList::new(["/login", "/API"],);
/// assert!(skip.matches("/login"));
/// assert!(skip.matches("/api/v1/jobs"));
/// assert!(skip.matches("/Login-jobs"));
/// assert!(!skip.matches("/rust-jobs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct SkipList
{
    prefixes: BTreeSet<String,>,
}

impl SkipList
{
    /// Builds a skip list from the provided prefixes.
    ///
    /// Entries are lowercased and given a leading slash when they lack one.
    /// Blank entries are ignored.
    pub fn new<I, S,>(prefixes: I,) -> Self
    where
        I: IntoIterator<Item = S,>,
        S: AsRef<str,>,
    {
        let prefixes = prefixes
            .into_iter()
            .filter_map(|prefix| normalize_prefix(prefix.as_ref(),),)
            .collect();

        Self {
            prefixes,
        }
    }

    /// Returns an empty skip list.
    pub fn empty() -> Self
    {
        Self {
            prefixes: BTreeSet::new(),
        }
    }

    /// Returns the process-wide default skip list.
    pub fn shared_default() -> &'static Self
    {
        &DEFAULT_SKIP_LIST
    }

    /// Adds a prefix to the list. Returns `false` when the normalized prefix
    /// was blank or already present.
    pub fn insert(&mut self, prefix: &str,) -> bool
    {
        normalize_prefix(prefix,).is_some_and(|normalized| self.prefixes.insert(normalized,),)
    }

    /// Returns `true` when the lowercased path equals or starts with any
    /// entry.
    pub fn matches(&self, path: &str,) -> bool
    {
        let lowered = path.to_lowercase();
        lowered
            .char_indices()
            .map(|(index, character,)| index + character.len_utf8(),)
            .any(|end| self.prefixes.contains(&lowered[..end],),)
    }

    /// Iterates over the normalized entries in lexicographic order.
    pub fn iter(&self,) -> impl Iterator<Item = &str,>
    {
        self.prefixes.iter().map(String::as_str,)
    }

    /// Number of entries.
    pub fn len(&self,) -> usize
    {
        self.prefixes.len()
    }

    /// Returns `true` when the list has no entries.
    pub fn is_empty(&self,) -> bool
    {
        self.prefixes.is_empty()
    }
}

impl Default for SkipList
{
    fn default() -> Self
    {
        Self::new(DEFAULT_SKIP_PREFIXES,)
    }
}

fn normalize_prefix(prefix: &str,) -> Option<String,>
{
    let trimmed = prefix.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('/',) { Some(lowered,) } else { Some(format!("/{lowered}"),) }
}

#[cfg(test)]
mod tests
{
    use super::{DEFAULT_SKIP_PREFIXES, SkipList};

    #[test]
    fn default_list_contains_listing_and_auth_routes()
    {
        let skip = SkipList::default();
        assert_eq!(skip.len(), DEFAULT_SKIP_PREFIXES.len());
        assert!(skip.matches("/referrals"));
        assert!(skip.matches("/login"));
        assert!(skip.matches("/_next/static/chunk.js"));
        assert!(skip.matches("/api/v1/jobs"));
        assert!(skip.matches("/favicon.ico"));
    }

    #[test]
    fn default_directory_roots_leave_root_slugs_alone()
    {
        let skip = SkipList::default();
        for path in [
            "/api-developer-jobs-in-pune",
            "/apis-jobs",
            "/public-relations-jobs-in-pune",
            "/static-analysis-jobs",
            "/search-engineer-jobs-in-pune",
            "/company-secretary-jobs-in-pune",
            "/contact-center-agent-jobs-in-pune",
            "/authentication-engineer-jobs-in-pune",
            "/privacy-engineer-jobs",
        ] {
            assert!(!skip.matches(path), "{path} should not be reserved");
        }
    }

    #[test]
    fn matching_is_case_insensitive()
    {
        let skip = SkipList::new(["/Careers"],);
        assert!(skip.matches("/careers"));
        assert!(skip.matches("/CAREERS-jobs"));
    }

    #[test]
    fn prefix_match_covers_longer_paths()
    {
        let skip = SkipList::new(["/login", "/api/"],);
        assert!(skip.matches("/login"));
        assert!(skip.matches("/login-jobs"));
        assert!(!skip.matches("/log"));
        assert!(!skip.matches("/blogin-jobs"));
        assert!(skip.matches("/api/v1"));
        assert!(!skip.matches("/api"));
        assert!(!skip.matches("/apis-jobs"));
    }

    #[test]
    fn entries_are_normalized()
    {
        let skip = SkipList::new(["  Login ", "", "   "],);
        assert_eq!(skip.iter().collect::<Vec<_,>>(), ["/login"]);
    }

    #[test]
    fn insert_reports_duplicates()
    {
        let mut skip = SkipList::empty();
        assert!(skip.is_empty());
        assert!(skip.insert("/faq"));
        assert!(!skip.insert("/FAQ"));
        assert!(!skip.insert("  "));
        assert_eq!(skip.len(), 1);
    }

    #[test]
    fn empty_list_matches_nothing()
    {
        assert!(!SkipList::empty().matches("/referrals"));
    }

    #[test]
    fn matching_handles_multibyte_paths()
    {
        let skip = SkipList::new(["/über"],);
        assert!(skip.matches("/Über-jobs"));
        assert!(!skip.matches("/ü"));
    }

    #[test]
    fn shared_default_equals_default()
    {
        assert_eq!(SkipList::shared_default(), &SkipList::default());
    }
}
