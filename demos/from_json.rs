//! Reads a JSON view description from the file named on the command line
//! (or stdin) and prints the rendered markup.

use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut tree = tessera::view::parse(&json)?;
    let engine = tessera::default_engine()?;
    let summary = engine.render(&mut tree, &mut std::io::stdout().lock())?;
    println!();
    if !summary.deferred.is_empty() {
        eprintln!("activate: {}", summary.deferred.join(" "));
    }
    Ok(())
}
