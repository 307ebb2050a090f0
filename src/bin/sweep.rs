use anyhow::Result;
use clap::Parser;
use tracing::info;

use std::time::Instant;

use connect4_minimax::sweep::Sweep;

#[derive(Parser)]
#[command(name = "sweep", about = "Let the engine play out every Connect 4 opening against itself")]
struct Cli {
    /// Length of the openings to enumerate, in plies (at most 6)
    #[arg(long, default_value_t = 2)]
    plies: usize,

    /// Size of the worker pool (defaults to one thread per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let sweep = Sweep::new(cli.plies)?.with_progress(!cli.quiet);
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    info!(plies = cli.plies, "starting opening sweep");
    let start = Instant::now();
    let report = sweep.run()?;

    println!("{}", report);
    println!(
        "Sweep completed in {:.1}s",
        (Instant::now() - start).as_secs_f64()
    );
    Ok(())
}
