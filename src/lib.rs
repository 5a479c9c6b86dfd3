//! SEO slug routing for the job-referral marketplace.
//!
//! The library recognizes job-search slugs such as
//! `/senior-engineer-jobs-in-bangalore` among root-level request paths,
//! rewrites them to the listing endpoint with the original slug preserved in
//! an `seo` query parameter, derives display strings from that tag, and
//! encodes search filters back into the same canonical slugs. Parsing and
//! building are exact inverses for every slug the builder emits.
//!
//! ```
//! use referral_seo::{SearchFilters, SlugRouter};
//!
//! let router = SlugRouter::default();
//! let filters = SearchFilters::from_query("keyword=Data+Scientist&city=Pune",);
//! let target = router.navigation_target(&filters,);
//! assert_eq!(target, "/data-scientist-jobs-in-pune");
//!
//! let decision = router.classify_path(&target,);
//! let rewrite = decision.as_rewrite().expect("canonical paths are always rewritten",);
//! let display = router.derive_display(&rewrite.seo,);
//! assert_eq!(display.page_title(), "Data Scientist Jobs in Pune");
//! ```

mod audit;
mod builder;
mod config;
mod error;
mod filters;
mod logging;
mod metadata;
mod parser;
mod router;
mod shape;
mod skip;
mod slug;

pub use audit::{
    AuditDocument, AuditEntry, AuditReport, Collision, audit_filters, load_audit_input,
    parse_audit_input,
};
pub use builder::{SeoFragments, SeoPathInput, build_seo_path};
pub use config::{RouterConfig, load_config, parse_config};
pub use error::{Error, io_error};
pub use filters::{EXPERIENCE_PARAM, SearchFilters};
pub use logging::{DEFAULT_LOG_FILTER, init_tracing};
pub use metadata::{DisplayMetadata, derive_display};
pub use parser::{LISTING_PATH, RewriteDecision, SEO_PARAM, SeoRewrite, classify_path};
pub use router::SlugRouter;
pub use shape::{
    KEYWORD_LOCATION_SEPARATOR, KEYWORD_SUFFIX, LOCATION_PREFIX, SlugShape, classify_slug,
};
pub use skip::{DEFAULT_SKIP_PREFIXES, SkipList};
pub use slug::{to_display_text, to_slug_fragment};
