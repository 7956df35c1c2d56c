//! kugiri crate example
//!
//! Resolves a dictionary through the fallback chain, loads the engine, and prints
//! one segment per line as `text<TAB>pos`.
//!
//! ```bash
//! cargo run --example example_kugiri -- path/to/system.dic "東京タワーは観光名所です"
//! ```
//!
//! With no arguments the dictionary is resolved from `$DICT` or the working
//! directory, and a sample sentence is segmented.

use tracing_subscriber::EnvFilter;

use kugiri::dictionary::locate_dictionary;
use kugiri::segmenter::Segmenter;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
  // Initialize tracing_subscriber
  // Use RUST_LOG environment variable if set
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,kugiri=debug"));
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  let mut args = std::env::args().skip(1);
  let explicit = args.next();
  let text = args.next().unwrap_or_else(|| "東京タワーは東京の観光名所です".to_string());

  // 1. Resolve the dictionary path
  let path = locate_dictionary(explicit.as_deref())?;
  println!("dictionary: {}", path.display());

  // 2. Load the engine
  let segmenter = Segmenter::from_path(&path)?;

  // 3. Segment and print
  for segment in segmenter.segment(&text) {
    println!("{}\t{}", segment.text, segment.pos);
  }

  Ok(())
}
