use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use keydance_sim::{parse_script, Simulator, DEFAULT_TAPPING_TERM_MS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a key event script against the keydance engine", long_about = None)]
struct Args {
    /// Input script file
    script: PathBuf,

    /// Tap-dance window in milliseconds
    #[arg(long, default_value_t = DEFAULT_TAPPING_TERM_MS)]
    term: u64,

    /// Print every host call
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading {}", args.script.display()))?;
    let commands = parse_script(&text)?;
    let mut sim = Simulator::new(args.term)?;

    for command in &commands {
        if args.verbose {
            println!("> {:?}", command);
        }
        let status = sim.step(command);
        if args.verbose {
            for entry in sim.host_mut().take_journal() {
                println!("  {}", entry);
            }
        }
        if let Some(status) = status {
            println!("{}", status);
            println!();
        }
    }

    if args.verbose {
        println!(
            "Replayed {} commands in {} simulated ms",
            commands.len(),
            sim.clock_ms()
        );
    }
    Ok(())
}
