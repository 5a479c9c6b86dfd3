// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Round-trip audit of canonical search paths.
//!
//! Every filter set is encoded with the builder, classified by the parser and
//! turned into display strings. The report flags inputs that could not be
//! encoded as a slug and canonical paths shared by different searches, which
//! happens when normalization drops the characters that told them apart.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    builder::SeoFragments,
    error::{self, Error},
    filters::SearchFilters,
    metadata::DisplayMetadata,
    parser::RewriteDecision,
    router::SlugRouter,
};

/// Root document of an audit input file.
///
/// ```yaml
/// filters:
///   - keyword: Data Scientist
///     city: Pune
///   - country: India
///     city: Bangalore
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, Default,)]
pub struct AuditDocument
{
    /// Filter sets to audit.
    #[serde(default)]
    pub filters: Vec<SearchFilters,>,
}

/// Outcome for a single filter set.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct AuditEntry
{
    /// Audited input.
    pub filters:    SearchFilters,
    /// Normalized fragments the builder worked from.
    pub fragments:  SeoFragments,
    /// Canonical path produced by the builder.
    pub path:       String,
    /// Parser decision for the canonical path.
    pub decision:   RewriteDecision,
    /// Display strings derived from the rewrite tag, if any.
    pub display:    Option<DisplayMetadata,>,
    /// `true` when the path parses back to the same fragments, or when there
    /// were no criteria to encode.
    pub round_trip: bool,
    /// `true` when the input had criteria but landed on the listing path.
    pub fallback:   bool,
}

/// Canonical path shared by several distinct searches.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct Collision
{
    /// Shared canonical path.
    pub path:   String,
    /// Distinct inputs mapping to the path, in input order.
    pub inputs: Vec<SearchFilters,>,
}

/// Aggregated audit results.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct AuditReport
{
    /// Per-input outcomes, in input order.
    pub entries:    Vec<AuditEntry,>,
    /// Number of inputs that fell back to the listing path.
    pub fallbacks:  usize,
    /// Paths produced by more than one distinct search, sorted by path.
    pub collisions: Vec<Collision,>,
}

impl AuditReport
{
    /// Returns `true` when every entry round-trips and nothing collides.
    pub fn is_clean(&self,) -> bool
    {
        self.fallbacks == 0
            && self.collisions.is_empty()
            && self.entries.iter().all(|entry| entry.round_trip,)
    }
}

/// Audits the provided filter sets against `router`.
///
/// Entries are processed in parallel; the report keeps input order.
///
/// # Examples
///
/// ```
/// use referral_seo::{SearchFilters, SlugRouter, audit_filters};
///
/// let filters = vec![
///     SearchFilters { city: "Bangalore".into(), country: "India".into(), ..Default::default() },
///     SearchFilters { city: "Bangalore India".into(), ..Default::default() },
/// ];
/// let report = audit_filters(&filters, &SlugRouter::default(),);
/// assert_eq!(report.collisions.len(), 1);
/// assert_eq!(report.collisions[0].path, "/jobs-in-bangalore-india");
/// ```
pub fn audit_filters(filters: &[SearchFilters], router: &SlugRouter,) -> AuditReport
{
    let entries: Vec<AuditEntry,> =
        filters.par_iter().map(|candidate| audit_entry(candidate, router,),).collect();

    let fallbacks = entries.iter().filter(|entry| entry.fallback,).count();
    let collisions = find_collisions(&entries,);

    info!(
        "Audited {} filter sets: {} fallbacks, {} collisions",
        entries.len(),
        fallbacks,
        collisions.len()
    );
    for collision in &collisions {
        warn!(
            path = collision.path.as_str(),
            inputs = collision.inputs.len(),
            "canonical path shared by distinct searches"
        );
    }

    AuditReport {
        entries,
        fallbacks,
        collisions,
    }
}

/// Loads audit input from a YAML (or JSON) document at `path`.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, cannot be decoded, or
/// contains no filter sets.
pub fn load_audit_input(path: &Path,) -> Result<Vec<SearchFilters,>, Error,>
{
    debug!("Reading audit input from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_audit_input(&contents,)
}

/// Parses audit input from a document string.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the document cannot be
/// decoded and [`Error::Validation`](Error::Validation) when it is empty.
pub fn parse_audit_input(contents: &str,) -> Result<Vec<SearchFilters,>, Error,>
{
    let document: AuditDocument = serde_yaml::from_str(contents,)?;
    if document.filters.is_empty() {
        return Err(Error::validation("audit input must include at least one filter set",),);
    }
    Ok(document.filters,)
}

fn audit_entry(filters: &SearchFilters, router: &SlugRouter,) -> AuditEntry
{
    let input = filters.seo_input();
    let fragments = SeoFragments::from_input(&input,);
    let path = router.build_seo_path(&input,);
    let decision = router.classify_path(&path,);
    let display = decision.as_rewrite().map(|rewrite| router.derive_display(&rewrite.seo,),);

    let has_criteria = fragments.slug().is_some();
    let fallback = has_criteria && path == router.listing_path();
    let round_trip = if has_criteria {
        fragments.round_trips(&path, router.skip_list(),)
    } else {
        path == router.listing_path()
    };

    AuditEntry {
        filters: filters.clone(),
        fragments,
        path,
        decision,
        display,
        round_trip,
        fallback,
    }
}

fn find_collisions(entries: &[AuditEntry],) -> Vec<Collision,>
{
    let mut by_path: BTreeMap<&str, (HashSet<[String; 3],>, Vec<SearchFilters,>,),> = BTreeMap::new();

    for entry in entries.iter().filter(|entry| entry.decision.is_rewrite(),) {
        let (seen, inputs,) = by_path.entry(entry.path.as_str(),).or_default();
        if seen.insert(search_identity(&entry.filters,),) {
            inputs.push(entry.filters.clone(),);
        }
    }

    by_path
        .into_iter()
        .filter(|(_, (_, inputs,),)| inputs.len() > 1,)
        .map(|(path, (_, inputs,),)| Collision {
            path: path.to_owned(),
            inputs,
        },)
        .collect()
}

/// Case- and spacing-insensitive identity of the slug-relevant fields.
fn search_identity(filters: &SearchFilters,) -> [String; 3]
{
    let squash = |value: &str| value.split_whitespace().collect::<Vec<_,>>().join(" ",).to_lowercase();
    [squash(&filters.keyword,), squash(&filters.city,), squash(&filters.country,)]
}

#[cfg(test)]
mod tests
{
    use std::io::Write;

    use super::{audit_filters, load_audit_input, parse_audit_input};
    use crate::{error::Error, filters::SearchFilters, router::SlugRouter, skip::SkipList};

    fn search(keyword: &str, country: &str, city: &str,) -> SearchFilters
    {
        SearchFilters {
            keyword: keyword.to_owned(),
            country: country.to_owned(),
            city: city.to_owned(),
            experience: String::new(),
        }
    }

    #[test]
    fn clean_inputs_produce_clean_report()
    {
        let inputs = [
            search("Senior Engineer", "", "",),
            search("", "India", "Bangalore",),
            search("Data Scientist", "", "Pune",),
        ];

        let report = audit_filters(&inputs, &SlugRouter::default(),);
        assert!(report.is_clean());
        let paths: Vec<_,> = report.entries.iter().map(|entry| entry.path.as_str(),).collect();
        assert_eq!(paths, [
            "/senior-engineer-jobs",
            "/jobs-in-bangalore-india",
            "/data-scientist-jobs-in-pune"
        ]);

        let display = report.entries[2].display.as_ref().expect("expected display",);
        assert_eq!(display.keyword, "Data Scientist");
        assert_eq!(display.location_suffix, " in Pune");
    }

    #[test]
    fn empty_criteria_round_trip_without_fallback()
    {
        let report = audit_filters(&[search("", "", "",)], &SlugRouter::default(),);
        let entry = &report.entries[0];
        assert_eq!(entry.path, "/referrals");
        assert!(entry.round_trip);
        assert!(!entry.fallback);
        assert!(entry.display.is_none());
        assert!(report.is_clean());
    }

    #[test]
    fn ambiguous_keyword_is_reported_as_fallback()
    {
        let report = audit_filters(&[search("Jobs in Tech", "", "",)], &SlugRouter::default(),);
        assert_eq!(report.fallbacks, 1);
        assert!(!report.entries[0].round_trip);
        assert!(!report.is_clean());
    }

    #[test]
    fn city_country_join_collisions_are_reported()
    {
        let inputs = [
            search("Rust", "India", "Bangalore",),
            search("rust", "", "Bangalore India",),
            search("RUST ", "india", " bangalore",),
        ];

        let report = audit_filters(&inputs, &SlugRouter::default(),);
        assert_eq!(report.collisions.len(), 1);
        let collision = &report.collisions[0];
        assert_eq!(collision.path, "/rust-jobs-in-bangalore-india");
        assert_eq!(collision.inputs, [inputs[0].clone(), inputs[1].clone()]);
    }

    #[test]
    fn identical_searches_do_not_collide()
    {
        let inputs = [search("Rust", "", "Pune",), search("rust", "", "pune",)];
        let report = audit_filters(&inputs, &SlugRouter::default(),);
        assert!(report.collisions.is_empty());
    }

    #[test]
    fn router_skip_list_drives_fallbacks()
    {
        let inputs = [search("Careers", "", "",)];
        let strict = SlugRouter::new(SkipList::new(["/careers"],),);
        assert_eq!(audit_filters(&inputs, &strict,).fallbacks, 1);
        assert_eq!(audit_filters(&inputs, &SlugRouter::default(),).fallbacks, 0);
    }

    #[test]
    fn parse_audit_input_reads_filter_list()
    {
        let yaml = r"
            filters:
              - keyword: Rust
                experience: '3'
              - city: Pune
        ";

        let filters = parse_audit_input(yaml,).expect("expected parse success",);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].experience, "3");
        assert_eq!(filters[1].city, "Pune");
    }

    #[test]
    fn parse_audit_input_accepts_json()
    {
        let filters = parse_audit_input(r#"{"filters": [{"keyword": "Go"}]}"#,)
            .expect("expected parse success",);
        assert_eq!(filters[0].keyword, "Go");
    }

    #[test]
    fn parse_audit_input_rejects_empty_list()
    {
        let error = parse_audit_input("filters: []",).expect_err("expected validation error",);
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn load_audit_input_reads_from_disk()
    {
        let mut file = tempfile::NamedTempFile::new().expect("expected temp file",);
        write!(file, "filters:\n  - keyword: Rust\n").expect("expected write to succeed",);

        let filters = load_audit_input(file.path(),).expect("expected load to succeed",);
        assert_eq!(filters, [search("Rust", "", "",)]);
    }
}
