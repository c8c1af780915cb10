//! Build script for an-structure-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! The command structure is rebuilt here rather than imported, since build
//! scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("an-structure")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve project-structure directory names")
        .long_about(
            "Resolve the studio project-structure convention into literal directory names \
             and root paths. The configuration file is named by AN_STRUCTURE_CONFIG.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (overrides AN_STRUCTURE_CONFIG)")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("name")
                .about("Print the directory name for a logical role")
                .long_about("Print the literal directory name configured for one role"),
            Command::new("bundle")
                .about("Print every directory name in a group")
                .long_about(
                    "Print production categories, shot children or 3D production children",
                ),
            Command::new("root")
                .about("Print a root path")
                .long_about(
                    "Resolve the projects, resources, pitches or render-farm root; \
                     current-generation AN_ variables win over legacy ANALOG_ ones",
                ),
            Command::new("shot")
                .about("Print the folder name for a shot number")
                .long_about("Compose a zero-padded shot folder name such as Shot_001"),
            Command::new("validate")
                .about("Report vocabulary keys the configuration does not define")
                .long_about("Exit with status 1 when any configured name is missing"),
            Command::new("show-config-path")
                .about("Show where the configuration is loaded from")
                .long_about("Display the resolved configuration file path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("an-structure.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
