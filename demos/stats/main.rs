//! Compares the average search cost of a sequential list and a move-to-front
//! list under uniform and normally distributed access.

use clap::Parser;
use mtflist::AdaptiveList;
use mtflist::List;
use mtflist::SequentialList;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution;
use rand_distr::Normal;
use rand_distr::Uniform;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use std::error::Error;

#[derive(Parser)]
#[command(name = "stats", about = "Average nodes traversed per access", version)]
struct Args {
  /// Number of distinct values stored in each list.
  #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(i64).range(1 ..))]
  values: i64,

  /// Number of membership queries per distribution.
  #[arg(long, default_value_t = 100_000, value_parser = clap::value_parser!(u64).range(1 ..))]
  accesses: u64,

  /// Seed for the query generator. Drawn from entropy when absent.
  #[arg(long)]
  seed: Option<u64>,

  /// Log more; repeat for more detail.
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn populate(list: &mut dyn List, values: i64) -> Result<(), Box<dyn Error>> {
  // Adding in reverse leaves 0 at the front.

  for value in (0 .. values).rev() {
    list.try_add(value).map_err(|e| format!("populating list: {e}"))?;
  }

  list.reset_traversal_count();

  Ok(())
}

fn run<F>(name: &str, lists: &mut [(&str, &mut dyn List)], accesses: u64, mut draw: F)
where
  F: FnMut() -> i64
{
  for (_, list) in lists.iter_mut() {
    list.reset_traversal_count();
  }

  for _ in 0 .. accesses {
    let value = draw();

    for (label, list) in lists.iter_mut() {
      if ! list.contains(value) {
        log::error!("{label}: {value} not found");
      }
    }
  }

  for (label, list) in lists.iter() {
    let average = list.traversal_count() as f64 / accesses as f64;
    println!("{label} - Average number of nodes traversed per access ({name}): {average}");
  }
}

fn main() -> Result<(), Box<dyn Error>> {
  let args = Args::parse();

  let level =
    match args.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    };

  TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

  let mut rng =
    match args.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };

  let mut sequential = SequentialList::new();
  let mut adaptive = AdaptiveList::new();

  populate(&mut sequential, args.values)?;
  populate(&mut adaptive, args.values)?;

  log::info!("populated both lists with {} values", args.values);

  let mut lists: [(&str, &mut dyn List); 2] = [
    ("SequentialList", &mut sequential),
    ("AdaptiveList", &mut adaptive),
  ];

  // A uniform distribution is the baseline: no ordering heuristic can beat
  // sequential search on it.

  let uniform = Uniform::new(0, args.values);

  run("uniform", &mut lists, args.accesses, || uniform.sample(&mut rng));

  // A normal distribution concentrates accesses around the middle of the
  // list, which move-to-front can exploit. Samples outside the stored range
  // are redrawn.

  let mean = args.values as f64 / 2.0;
  let std_dev = args.values as f64 / 5.0;
  let normal = Normal::new(mean, std_dev)?;

  run("normal", &mut lists, args.accesses, || {
    loop {
      let value = normal.sample(&mut rng) as i64;
      if (0 .. args.values).contains(&value) {
        return value;
      }
    }
  });

  log::debug!("adaptive list front after queries: {:?}", adaptive.iter().take(10).collect::<Vec<_>>());

  Ok(())
}
