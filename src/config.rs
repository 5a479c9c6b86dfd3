// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Router configuration documents.
//!
//! The hosting route layer describes its reserved routes in a small YAML
//! document. Loading validates every entry and produces a ready-to-use
//! [`SlugRouter`]:
//!
//! ```yaml
//! listing_path: /referrals
//! inherit_default_skip: true
//! skip_prefixes:
//!   - /careers
//!   - /blog
//! ```

use std::{collections::HashSet, fs, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{self, Error},
    parser::LISTING_PATH,
    router::SlugRouter,
    skip::SkipList,
};

/// Shape of a valid route prefix: leading slash, no whitespace, no query or
/// fragment.
const ROUTE_PATTERN: &str = r"^/[^\s?#]+$";

/// Raw router configuration before validation.
///
/// # Examples
///
/// ```
/// use referral_seo::RouterConfig;
///
/// let yaml = r#"
/// skip_prefixes:
///   - /careers
/// "#;
/// let config: RouterConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert!(config.inherit_default_skip);
/// assert_eq!(config.skip_prefixes, ["/careers"]);
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq,)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig
{
    /// Listing endpoint override; defaults to `/referrals`.
    #[serde(default, alias = "listing-path", alias = "listingPath")]
    pub listing_path: Option<String,>,

    /// Whether the built-in reserved prefixes stay active.
    #[serde(
        default = "default_inherit",
        alias = "inherit-default-skip",
        alias = "inheritDefaultSkip"
    )]
    pub inherit_default_skip: bool,

    /// Additional reserved prefixes.
    #[serde(default, alias = "skip", alias = "skip-prefixes", alias = "skipPrefixes")]
    pub skip_prefixes: Vec<String,>,
}

impl Default for RouterConfig
{
    fn default() -> Self
    {
        Self {
            listing_path:         None,
            inherit_default_skip: default_inherit(),
            skip_prefixes:        Vec::new(),
        }
    }
}

impl RouterConfig
{
    /// Validates the configuration and builds a router from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when a prefix or the
    /// listing path is blank, is the root path, lacks a leading slash,
    /// contains whitespace or query characters, or when a prefix is listed
    /// twice (case-insensitively).
    pub fn into_router(self,) -> Result<SlugRouter, Error,>
    {
        let route = Regex::new(ROUTE_PATTERN,)
            .map_err(|source| Error::validation(format!("invalid route pattern: {source}"),),)?;

        let listing_path = match self.listing_path.as_deref() {
            Some(custom,) => normalize_route(&route, custom, "listing_path",)?,
            None => LISTING_PATH.to_owned(),
        };

        let mut skip_list =
            if self.inherit_default_skip { SkipList::default() } else { SkipList::empty() };

        let mut seen = HashSet::with_capacity(self.skip_prefixes.len(),);
        for prefix in &self.skip_prefixes {
            let normalized = normalize_route(&route, prefix, "skip_prefixes entry",)?;
            if !seen.insert(normalized.to_lowercase(),) {
                return Err(Error::validation(format!("duplicate skip prefix '{normalized}'"),),);
            }
            if !skip_list.insert(&normalized,) {
                debug!(prefix = normalized.as_str(), "prefix already reserved by defaults");
            }
        }

        Ok(SlugRouter::with_listing_path(skip_list, &listing_path,),)
    }
}

/// Loads a router from the YAML configuration at `path`.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// decoded, or the configuration is invalid.
pub fn load_config(path: &Path,) -> Result<SlugRouter, Error,>
{
    info!("Reading router config from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses a router from a YAML document string. A blank document yields the
/// default router.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) for malformed YAML and
/// [`Error::Validation`](Error::Validation) for invalid entries.
pub fn parse_config(contents: &str,) -> Result<SlugRouter, Error,>
{
    if contents.trim().is_empty() {
        debug!("Empty router config; using defaults");
        return RouterConfig::default().into_router();
    }

    let config: RouterConfig = serde_yaml::from_str(contents,)?;
    let router = config.into_router()?;
    debug!(
        "Router listing path {} with {} reserved prefixes",
        router.listing_path(),
        router.skip_list().len()
    );
    Ok(router,)
}

fn default_inherit() -> bool
{
    true
}

/// Validates a route-like value.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when the value does not
/// look like a non-root path.
fn normalize_route(route: &Regex, input: &str, field: &str,) -> Result<String, Error,>
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty"),),);
    }
    if trimmed == "/" {
        return Err(Error::validation(format!("{field} cannot be the root path"),),);
    }
    if !route.is_match(trimmed,) {
        return Err(Error::validation(format!(
            "{field} '{trimmed}' must start with '/' and contain no whitespace, '?' or '#'"
        ),),);
    }
    Ok(trimmed.to_owned(),)
}
