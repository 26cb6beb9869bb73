//! CLI for contentful2sanity - resolve one link from a Contentful export

use clap::Parser;
use contentful2sanity::{ExportDataset, LinkResolver, ResolverOptions, StderrSink, SysLink};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Contentful export JSON file
    export: PathBuf,

    /// ID of the linked asset or entry
    #[arg(long)]
    id: String,

    /// Link type (Asset or Entry)
    #[arg(long, default_value = "Entry")]
    link_type: String,

    /// Locale to read localized fields from
    #[arg(long, default_value = "en-US")]
    locale: String,

    /// ID of the document containing the link (prefix with "drafts." for drafts)
    #[arg(long, default_value = "")]
    from: String,

    /// Fallback locale (defaults to the export's default locale)
    #[arg(long)]
    default_locale: Option<String>,

    /// Mark references to published entries as weak
    #[arg(long)]
    weak_refs: bool,

    /// Pretty-print the output record
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error resolving link: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> contentful2sanity::Result<()> {
    let dataset = ExportDataset::from_path(&args.export)?;

    let options = ResolverOptions {
        default_locale: args
            .default_locale
            .or_else(|| dataset.default_locale().map(str::to_string)),
        weak_refs: args.weak_refs,
    };

    let link = SysLink::new(args.link_type, args.id);
    let resolver = LinkResolver::new(&dataset, &options);
    let resolution = resolver.resolve(&args.from, &link, &args.locale, &mut StderrSink)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&resolution)?
    } else {
        serde_json::to_string(&resolution)?
    };
    println!("{}", json);

    Ok(())
}
