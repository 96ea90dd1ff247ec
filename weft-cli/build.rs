use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI surface from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn completion_cli() -> Command {
    Command::new("weft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Assemble outline files into finished documents")
        .arg_required_else_help(true)
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
                .arg(
                    Arg::new("input")
                        .help("Outline file path (.yaml or .json)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("media-root")
                        .long("media-root")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("draft")
                        .long("draft")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the resolved block sequence for an outline")
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
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = completion_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "weft", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "weft", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "weft", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
