use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command-line surface in src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("fastsnip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn selected code into an editor snippet definition")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("line-ending")
                .long("line-ending")
                .value_parser(["crlf", "lf"])
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a code selection into a snippet (default command)")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("start").long("start").value_name("LINE[:COL]"))
                .arg(Arg::new("end").long("end").value_name("LINE[:COL]"))
                .arg(Arg::new("first-indent").long("first-indent").value_name("TABS"))
                .arg(Arg::new("last-indent").long("last-indent").value_name("TABS"))
                .arg(
                    Arg::new("dedent")
                        .long("dedent")
                        .value_parser(["clamp", "reject"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("clipboard")
                        .long("clipboard")
                        .short('c')
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("template").about("Print the empty snippet skeleton"))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "fastsnip", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "fastsnip", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "fastsnip", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
