use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lagrange_rec::{
    input::{DirectOutput, ShareDoc},
    rec::{direct::rec_from_pts, majority::rec_majority},
};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "lagrange-rec", version, about = "Exact polynomial reconstruction from shares", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interpolate the k shares with the smallest index and print the polynomial as JSON
    Direct {
        /// Share document; read from stdin if omitted
        file: Option<PathBuf>,
    },
    /// Interpolate every k-subset of the shares and report the most frequent secret
    Majority {
        /// Share document; read from stdin if omitted
        file: Option<PathBuf>,
    },
}

fn read_doc(file: Option<&PathBuf>) -> Result<ShareDoc> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read from stdin")?;
            raw
        }
    };
    Ok(ShareDoc::from_json(&raw)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Direct { file } => {
            let doc = read_doc(file.as_ref())?;
            let (n, k) = doc.params()?;
            let pts = doc.points()?;
            info!("Read {} shares, n = {n}, k = {k}", pts.len());
            let rec = rec_from_pts(&pts, k)?;
            let out = DirectOutput::from(&rec);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Majority { file } => {
            let doc = read_doc(file.as_ref())?;
            let (n, k) = doc.params()?;
            let pts = doc.points()?;
            info!("Read {} shares, n = {n}, k = {k}", pts.len());
            let res = rec_majority(&pts, k)?;
            println!("{res}");
        }
    }
    Ok(())
}
