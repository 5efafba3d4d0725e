use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use layer_geometry::{
    BrowserInfo, SnapshotHost, TransformReader, VendorPrefixes, coeffs, common_ancestor,
    document_order, effective_transform, layout_offset_transform, order_sign,
};

#[derive(Parser, Debug)]
#[command(name = "layer-geometry", version)]
struct Cli {
    /// Log library diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the local, layout-offset and effective transforms of one node.
    Inspect(InspectArgs),
    /// Compare two nodes in document order (-1, 0 or 1).
    Order(PairArgs),
    /// Print the nearest common ancestor of two nodes, or null.
    Ancestor(PairArgs),
    /// Print the detected browser and its prefixed property names.
    Prefixes(PrefixArgs),
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Node id.
    #[arg(long)]
    node: String,

    /// User agent used to configure vendor prefixes.
    #[arg(long)]
    user_agent: Option<String>,
}

#[derive(Args, Debug)]
struct PairArgs {
    /// Input snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First node id.
    #[arg(long)]
    a: String,

    /// Second node id.
    #[arg(long)]
    b: String,
}

#[derive(Args, Debug)]
struct PrefixArgs {
    /// User agent to classify; omitted means a non-browser host.
    #[arg(long)]
    user_agent: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::TRACE)
            .init();
    }
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Order(args) => cmd_order(args),
        Command::Ancestor(args) => cmd_ancestor(args),
        Command::Prefixes(args) => cmd_prefixes(args),
    }
}

fn read_snapshot(path: &Path) -> anyhow::Result<SnapshotHost> {
    let f = File::open(path).with_context(|| format!("open snapshot '{}'", path.display()))?;
    let host = SnapshotHost::from_reader(BufReader::new(f))
        .with_context(|| format!("load snapshot '{}'", path.display()))?;
    Ok(host)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let host = read_snapshot(&args.in_path)?;
    let node = host.node(&args.node)?;
    let info = BrowserInfo::detect(args.user_agent.as_deref());
    let reader = TransformReader::new(VendorPrefixes::from_browser(&info));

    let local = reader
        .read_transform(&host, node)
        .with_context(|| format!("read transform of '{}'", args.node))?;
    let offset = layout_offset_transform(&host, node);
    let effective = effective_transform(&host, &reader, node)?;

    let out = serde_json::json!({
        "node": args.node,
        "local": coeffs(local),
        "offset": coeffs(offset),
        "effective": coeffs(effective),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_order(args: PairArgs) -> anyhow::Result<()> {
    let host = read_snapshot(&args.in_path)?;
    let a = host.node(&args.a)?;
    let b = host.node(&args.b)?;
    let ordering = document_order(&host, a, b)
        .with_context(|| format!("compare '{}' with '{}'", args.a, args.b))?;
    println!("{}", order_sign(ordering));
    Ok(())
}

fn cmd_ancestor(args: PairArgs) -> anyhow::Result<()> {
    let host = read_snapshot(&args.in_path)?;
    let a = host.node(&args.a)?;
    let b = host.node(&args.b)?;
    let found = common_ancestor(&host, a, b).map(|n| host.id_of(n));
    println!("{}", serde_json::to_string(&found)?);
    Ok(())
}

fn cmd_prefixes(args: PrefixArgs) -> anyhow::Result<()> {
    let info = BrowserInfo::detect(args.user_agent.as_deref());
    let prefixes = VendorPrefixes::from_browser(&info);
    let out = serde_json::json!({
        "browser": info,
        "prefixes": prefixes,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
