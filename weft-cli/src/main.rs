// Command-line interface for weft
//
// This binary assembles outline files (YAML or JSON) into finished document
// artifacts through the weft-assembly engine.
//
// The inspect command is an internal aid: it prints the resolved block
// sequence so that matching and heading-depth problems can be diagnosed
// without opening the emitted artifact.
//
// Usage:
//  weft <outline> [--to <emitter>] [--output <file>]   - Assemble a document (default)
//  weft export <outline> [--to <emitter>] [-o <file>]  - Same as above (explicit)
//  weft inspect <outline> [--draft]                    - Print the resolved blocks
//  weft --list-emitters                                - List available emitters

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::path::{Path, PathBuf};
use weft_assembly::ir::resolved::DocBlock;
use weft_assembly::{assemble, emit_to_file, AssemblyOptions, ContentStage, EmitterRegistry, Outline};
use weft_config::{Loader, WeftConfig};

fn build_cli() -> Command {
    Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assemble outline files into finished documents")
        .long_about(
            "weft is a command-line tool for assembling outline files into documents.\n\n\
            Commands:\n  \
            - export:  Assemble an outline into a document artifact\n  \
            - inspect: Print the resolved block sequence for debugging\n\n\
            The outline format (YAML or JSON) is auto-detected from the file\n\
            extension. The target emitter is taken from --to, detected from the\n\
            output filename, or read from configuration, in that order.\n\n\
            Examples:\n  \
            weft thesis.yaml                          # Assemble with the configured emitter\n  \
            weft thesis.yaml --to latex -o out.tex    # Emit flat LaTeX to a file\n  \
            weft export thesis.json -o report.docx    # 'export' is optional\n  \
            weft inspect thesis.yaml                  # Show the resolved blocks",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-emitters")
                .long("list-emitters")
                .help("List available output emitters")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a weft.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Assemble an outline into a document artifact (default command)")
                .long_about(
                    "Assemble an outline file into a document artifact.\n\n\
                    Emitters:\n  \
                    - docx:  Native Word document\n  \
                    - latex: Flat LaTeX markup\n\n\
                    Without --output the artifact lands in the configured output\n\
                    directory, named after the outline file.\n\n\
                    Examples:\n  \
                    weft export thesis.yaml --to docx          # Into the output directory\n  \
                    weft export thesis.yaml -o paper.tex       # Emitter detected from extension\n  \
                    weft export thesis.yaml --draft            # Assemble draft-stage text",
                )
                .arg(
                    Arg::new("input")
                        .help("Outline file path (.yaml or .json)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target emitter (detected from the output filename if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to the configured output directory)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("media-root")
                        .long("media-root")
                        .help("Base directory for resolving declared figure and table paths")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("draft")
                        .long("draft")
                        .help("Assemble draft-stage section text instead of finalized text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the resolved block sequence for an outline")
                .long_about(
                    "Assemble the outline without emitting anything and print one line\n\
                    per resolved block. Useful for checking placeholder matching and\n\
                    heading depths before committing to an artifact.",
                )
                .arg(
                    Arg::new("path")
                        .help("Outline file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("draft")
                        .long("draft")
                        .help("Inspect draft-stage section text")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    env_logger::init();

    // Try to parse args. If no subcommand is provided, inject "export"
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the first arg looks like a file
            if args.len() > 1
                && !args[1].starts_with('-')
                && args[1] != "export"
                && args[1] != "inspect"
                && args[1] != "help"
            {
                // Inject "export" as the subcommand
                let mut new_args = vec![args[0].clone(), "export".to_string()];
                new_args.extend_from_slice(&args[1..]);

                // Try parsing again with "export" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject export, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-emitters") {
        handle_list_emitters_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let media_root = sub_matches
                .get_one::<String>("media-root")
                .map(|s| s.as_str());
            let draft = sub_matches.get_flag("draft");
            handle_export_command(input, to, output, media_root, draft, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let draft = sub_matches.get_flag("draft");
            handle_inspect_command(path, draft, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the export command
fn handle_export_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    media_root: Option<&str>,
    draft: bool,
    config: &WeftConfig,
) {
    let registry = EmitterRegistry::default();
    let outline = load_outline(input);

    let emitter_name = select_emitter_name(&registry, to, output, config).unwrap_or_else(|| {
        eprintln!("Error: Could not determine an emitter from the output filename");
        eprintln!("Please specify --to explicitly");
        std::process::exit(1);
    });
    let emitter = registry.get(&emitter_name).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let mut options = config.assembly_options(emitter.max_heading_depth());
    if draft {
        options.stage = ContentStage::Draft;
    }
    if let Some(root) = media_root {
        options.media_root = Some(PathBuf::from(root));
    }

    let target = match output {
        Some(path) => PathBuf::from(path),
        None => default_output_path(input, emitter.file_extensions(), &config.emit.output_dir),
    };

    let doc = assemble(&outline, &options);
    emit_to_file(emitter, &doc, &target).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    println!("{}", target.display());
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, draft: bool, config: &WeftConfig) {
    let outline = load_outline(path);

    let mut options = config.assembly_options(AssemblyOptions::default().max_heading_depth);
    if draft {
        options.stage = ContentStage::Draft;
    }

    let doc = assemble(&outline, &options);
    for block in &doc.blocks {
        println!("{}", block_summary(block));
    }
}

/// Handle the list-emitters command
fn handle_list_emitters_command() {
    let registry = EmitterRegistry::default();
    println!("Available emitters:\n");
    for name in registry.list_emitters() {
        match registry.get(&name) {
            Ok(emitter) => println!("  {name:<8}{}", emitter.description()),
            Err(_) => println!("  {name}"),
        }
    }
}

/// Pick the emitter: explicit --to wins, then output filename detection,
/// then the configured default.
fn select_emitter_name(
    registry: &EmitterRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &WeftConfig,
) -> Option<String> {
    if let Some(name) = to {
        return Some(name.to_string());
    }
    if let Some(filename) = output {
        return registry.detect_emitter_from_filename(filename);
    }
    Some(config.emit.default_format.clone())
}

/// `<output_dir>/<outline stem>.<emitter's first extension>`
fn default_output_path(input: &str, extensions: &[&str], output_dir: &str) -> PathBuf {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let extension = extensions.first().copied().unwrap_or("out");
    Path::new(output_dir).join(format!("{stem}.{extension}"))
}

/// Deserialize the outline, choosing the codec from the file extension.
fn load_outline(path: &str) -> Outline {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    let parsed = match extension {
        "yaml" | "yml" => serde_yaml::from_str::<Outline>(&source).map_err(|e| e.to_string()),
        "json" => serde_json::from_str::<Outline>(&source).map_err(|e| e.to_string()),
        other => {
            eprintln!("Error: Unsupported outline extension '{other}' (expected yaml, yml, or json)");
            std::process::exit(1);
        }
    };

    parsed.unwrap_or_else(|e| {
        eprintln!("Error parsing outline '{path}': {e}");
        std::process::exit(1);
    })
}

fn block_summary(block: &DocBlock<'_>) -> String {
    match block {
        DocBlock::Heading { level, text } => format!("heading({level}): {text}"),
        DocBlock::Paragraph(text) => {
            format!("paragraph: {} words", text.split_whitespace().count())
        }
        DocBlock::Figure(resolved) => format!(
            "figure {}: {} [{}]",
            resolved.figure.id,
            resolved.figure.caption,
            if resolved.has_file() { "file" } else { "no file" }
        ),
        DocBlock::FigurePlaceholder { caption, .. } => format!("figure placeholder: {caption}"),
        DocBlock::Table(resolved) => {
            format!("table {}: {}", resolved.table.id, resolved.table.caption)
        }
        DocBlock::TablePlaceholder { caption, .. } => format!("table placeholder: {caption}"),
        DocBlock::Keywords { items, english } => format!(
            "keywords ({}): {}",
            if *english { "en" } else { "zh" },
            items.len()
        ),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> WeftConfig {
    let loader = Loader::new().with_optional_file("weft.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
