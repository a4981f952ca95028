use std::env;
use std::process;

use schema_orphans::{configure_logging, scan_endpoint};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    configure_logging();

    let mut args = env::args().skip(1);
    let introspection_url = match (args.next(), args.next()) {
        (Some(url), None) => url,
        _ => {
            eprintln!("Usage: schema_orphans <introspection-url>");
            process::exit(1);
        }
    };

    let report = scan_endpoint(&introspection_url).await?;
    print!("{report}");

    Ok(())
}
