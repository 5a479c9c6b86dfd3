//! Command-line interface for the referral-seo binary.
//!
//! The CLI exposes subcommands for classifying request paths, building
//! canonical search paths, describing `seo` tags and auditing round-trips
//! over a list of filter sets.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use referral_seo::{
    DEFAULT_LOG_FILTER, DisplayMetadata, Error, RewriteDecision, SearchFilters, SlugRouter,
    SlugShape, audit_filters, classify_slug, derive_display, init_tracing, load_audit_input,
    load_config,
};
use serde::Serialize;

/// Command line interface for SEO slug routing.
#[derive(Debug, Parser,)]
#[command(name = "referral-seo", version, about = "Parse and build SEO job-search slugs")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Classify inbound request paths.
    Classify(ClassifyArgs,),
    /// Build the canonical navigation target for search criteria.
    Build(BuildArgs,),
    /// Derive display strings from an `seo` tag.
    Describe(DescribeArgs,),
    /// Check that canonical paths round-trip for a list of filter sets.
    Audit(AuditArgs,),
}

/// Router configuration shared by subcommands that route paths.
#[derive(Debug, Args, Default,)]
struct RouterArgs
{
    /// Path to the YAML router configuration.
    #[arg(long = "config", value_name = "PATH", env = "REFERRAL_SEO_CONFIG")]
    config: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
struct ClassifyArgs
{
    /// Request paths to classify.
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<String,>,

    /// Existing query string merged into rewrite URIs.
    #[arg(long = "query", value_name = "QUERY")]
    query: Option<String,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,

    #[command(flatten)]
    router: RouterArgs,
}

#[derive(Debug, Args,)]
struct BuildArgs
{
    /// Job title, skill or company.
    #[arg(long = "keyword", default_value = "")]
    keyword: String,

    /// Country name.
    #[arg(long = "country", default_value = "")]
    country: String,

    /// City name.
    #[arg(long = "city", default_value = "")]
    city: String,

    /// Years of experience.
    #[arg(long = "experience", default_value = "")]
    experience: String,

    #[command(flatten)]
    router: RouterArgs,
}

#[derive(Debug, Args,)]
struct DescribeArgs
{
    /// Tag carried by the `seo` query parameter.
    #[arg(value_name = "SLUG")]
    slug: String,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct AuditArgs
{
    /// YAML or JSON document with a `filters` list.
    #[arg(long = "input", value_name = "PATH")]
    input: PathBuf,

    /// Fail when any fallback or collision is found.
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,

    #[command(flatten)]
    router: RouterArgs,
}

/// Classification result for one path.
#[derive(Debug, Serialize,)]
struct ClassifiedPath<'path,>
{
    path:     &'path str,
    #[serde(flatten)]
    decision: RewriteDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri:      Option<String,>,
}

/// Display strings for one tag.
#[derive(Debug, Serialize,)]
struct Description<'slug,>
{
    seo:            &'slug str,
    classification: SlugShape<'slug,>,
    #[serde(flatten)]
    display:        DisplayMetadata,
    title:          String,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing(DEFAULT_LOG_FILTER,);

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, input and serialization errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Classify(args,) => run_classify(&args, &mut handle,),
        Command::Build(args,) => run_build(&args, &mut handle,),
        Command::Describe(args,) => run_describe(&args, &mut handle,),
        Command::Audit(args,) => run_audit(&args, &mut handle,),
    }
}

fn load_router(args: &RouterArgs,) -> Result<SlugRouter, Error,>
{
    args.config.as_deref().map_or_else(|| Ok(SlugRouter::default(),), load_config,)
}

fn run_classify<W: io::Write,>(args: &ClassifyArgs, writer: &mut W,) -> Result<(), Error,>
{
    let router = load_router(&args.router,)?;
    let classified: Vec<_,> = args
        .paths
        .iter()
        .map(|path| {
            let decision = router.classify_path(path,);
            let uri = decision
                .as_rewrite()
                .filter(|_| args.query.is_some(),)
                .map(|rewrite| rewrite.to_uri(args.query.as_deref(),),);
            ClassifiedPath {
                path,
                decision,
                uri,
            }
        },)
        .collect();

    write_json(writer, &classified, args.pretty,)
}

fn run_build<W: io::Write,>(args: &BuildArgs, writer: &mut W,) -> Result<(), Error,>
{
    let router = load_router(&args.router,)?;
    let filters = SearchFilters {
        keyword:    args.keyword.clone(),
        country:    args.country.clone(),
        city:       args.city.clone(),
        experience: args.experience.clone(),
    };

    writeln!(writer, "{}", router.navigation_target(&filters,))
        .map_err(|source| referral_seo::io_error(Path::new("<stdout>",), source,),)
}

fn run_describe<W: io::Write,>(args: &DescribeArgs, writer: &mut W,) -> Result<(), Error,>
{
    let seo = args.slug.trim();
    let lowered = seo.to_lowercase();
    let display = derive_display(seo,);
    let description = Description {
        seo,
        classification: classify_slug(&lowered,),
        title: display.page_title(),
        display,
    };

    write_json(writer, &description, args.pretty,)
}

fn run_audit<W: io::Write,>(args: &AuditArgs, writer: &mut W,) -> Result<(), Error,>
{
    let router = load_router(&args.router,)?;
    let filters = load_audit_input(&args.input,)?;
    let report = audit_filters(&filters, &router,);

    write_json(writer, &report, args.pretty,)?;

    if args.strict && !report.is_clean() {
        return Err(Error::validation(format!(
            "audit found {} fallbacks and {} collisions",
            report.fallbacks,
            report.collisions.len()
        ),),);
    }

    Ok((),)
}

fn write_json<W: io::Write, T: Serialize,>(writer: &mut W, value: &T, pretty: bool,) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, value,)?;
    } else {
        serde_json::to_writer(writer, value,)?;
    }

    Ok((),)
}
