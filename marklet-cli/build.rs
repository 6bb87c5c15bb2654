use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

#[allow(dead_code)]
mod cli {
    include!("src/cli.rs");
}

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let Some(outdir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };

    let mut cmd = cli::Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        generate_to(shell, &mut cmd, "marklet", &outdir)?;
    }

    println!("cargo:warning=Shell completions generated in {outdir:?}");
    Ok(())
}
