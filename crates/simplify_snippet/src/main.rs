use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use entry_block::ScanStrategy;
use simplify_snippet::batch::report_line;
use simplify_snippet::{
    discover_files, resolve_root, run_batch, AppConfig, DefaultFileProcessor, SimplifyOptions,
};
use snippet_markers::DEFAULT_FILE_SUFFIX;

fn main() -> Result<()> {
    let matches = Command::new("simplify_snippet")
        .version("0.1.0")
        .about("Strips commentary from Go teaching snippets and truncates them after main()")
        .arg(
            Arg::new("root")
                .help(
                    "Directory containing the snippet files \
                     (defaults to $SIMPLIFY_ROOT or the current directory)",
                )
                .index(1),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .num_args(1)
                .default_value(DEFAULT_FILE_SUFFIX)
                .help("Only process files whose name ends with this suffix"),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .help("Search subdirectories as well")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Report what would change without writing any file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ensure_header")
                .long("ensure-header")
                .help("Prepend a package declaration to files that lack one")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("naive")
                .long("naive")
                .help("Count every brace, including those inside strings and comments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = AppConfig {
        root: resolve_root(matches.get_one::<String>("root").map(String::as_str))?,
        suffix: matches
            .get_one::<String>("suffix")
            .cloned()
            .unwrap_or_else(|| DEFAULT_FILE_SUFFIX.to_string()),
        recursive: matches.get_flag("recursive"),
        dry_run: matches.get_flag("dry_run"),
        verbose: matches.get_flag("verbose"),
        options: SimplifyOptions {
            strategy: if matches.get_flag("naive") {
                ScanStrategy::Naive
            } else {
                ScanStrategy::Lexical
            },
            ensure_header: matches.get_flag("ensure_header"),
        },
    };

    init_logging(config.verbose);
    log::debug!("{:?}", config);

    let files = discover_files(&config.root, &config.suffix, config.recursive)?;
    println!(
        "Found {} file(s) to process in {}",
        files.len(),
        config.root.display()
    );
    if config.dry_run {
        println!("Dry run: no files will be written");
    }

    let processor = DefaultFileProcessor {
        options: config.options,
        dry_run: config.dry_run,
    };
    let report = run_batch(&files, &processor, |path, outcome| {
        println!("{}", report_line(path, outcome));
    });

    println!();
    println!(
        "✓ Successfully updated {}/{} files",
        report.updated(),
        report.total()
    );
    if !report.is_success() {
        eprintln!("✗ {} file(s) failed", report.failed());
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
