use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use num_bigint::BigUint;

use imst::{
    verify_proof, verify_proof_with_target_sum, FieldHasher, LeafDisclosure, MembershipProof,
    MerkleSumTree, PaddingPolicy, SumTree, TargetSumProof, TreeConfig,
};

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Build a tree from a csv file and print its root
    Build {
        /// Csv file with an `identifier,balance` header
        csv: PathBuf,

        /// Fail instead of padding when the entry count is not a power of 2
        #[arg(long)]
        exact: bool,
    },
    /// Build a tree from a csv file and print the proof of one of its leaves as JSON
    Prove {
        csv: PathBuf,

        /// Index of the leaf to prove
        index: usize,

        /// Also claim the total of the tree is at most this value
        #[arg(long)]
        target_sum: Option<BigUint>,

        /// Put the encoded identifier in the proof instead of the leaf hash
        #[arg(long)]
        disclose_identifier: bool,

        #[arg(long)]
        exact: bool,
    },
    /// Verify a JSON proof with the default hasher
    Verify {
        proof: PathBuf,

        /// The file holds a target sum proof
        #[arg(long)]
        target_sum: bool,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Incremental Merkle Sum Tree")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn config(exact: bool, disclose_identifier: bool) -> TreeConfig {
    let padding = if exact {
        PaddingPolicy::Exact
    } else {
        PaddingPolicy::Pad
    };
    let disclosure = if disclose_identifier {
        LeafDisclosure::Identifier
    } else {
        LeafDisclosure::Hash
    };
    TreeConfig::default()
        .with_padding(padding)
        .with_disclosure(disclosure)
}

fn build(csv: &Path, config: TreeConfig) -> Result<MerkleSumTree> {
    MerkleSumTree::from_csv(csv, Arc::new(FieldHasher::new()), config)
        .with_context(|| format!("failed to build a tree from {}", csv.display()))
}

fn run(command: Command) -> Result<bool> {
    match command {
        Command::Build { csv, exact } => {
            let tree = build(&csv, config(exact, false))?;
            println!("depth: {}", tree.depth());
            println!("entries: {}", tree.entries().len());
            println!("root hash: 0x{}", hex::encode(tree.root().hash().to_bytes_be()));
            println!("root sum: {}", tree.root().sum());
            Ok(true)
        }
        Command::Prove {
            csv,
            index,
            target_sum,
            disclose_identifier,
            exact,
        } => {
            let tree = build(&csv, config(exact, disclose_identifier))?;
            let json = match target_sum {
                Some(target_sum) => serde_json::to_string_pretty(
                    &tree
                        .merkle_proof_with_target_sum(index, target_sum)
                        .with_context(|| format!("failed to prove leaf {index}"))?,
                )?,
                None => serde_json::to_string_pretty(
                    &tree
                        .merkle_proof(index)
                        .with_context(|| format!("failed to prove leaf {index}"))?,
                )?,
            };
            println!("{json}");
            Ok(true)
        }
        Command::Verify { proof, target_sum } => {
            let text = fs::read_to_string(&proof)
                .with_context(|| format!("failed to read {}", proof.display()))?;
            let hasher = FieldHasher::new();
            let valid = if target_sum {
                let proof: TargetSumProof =
                    serde_json::from_str(&text).context("malformed target sum proof")?;
                verify_proof_with_target_sum(&proof, &hasher)
            } else {
                let proof: MembershipProof =
                    serde_json::from_str(&text).context("malformed proof")?;
                verify_proof(&proof, &hasher)
            };
            info!("{} verified: {}", proof.display(), valid);
            println!("{}", if valid { "valid" } else { "invalid" });
            Ok(valid)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(&cli.log_level));
    if run(cli.command)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
