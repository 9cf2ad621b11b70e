use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopfront_tools::io::csv_write::format_price;
use shopfront_tools::io::seed;
use shopfront_tools::model::{ProductSeed, default_seeds, parse_price};
use shopfront_tools::roles::DEFAULT_EXPORT_FILE;
use shopfront_tools::session::Session;
use shopfront_tools::{Catalog, Result, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init_logging(&cli.log_level)?;

    let seeds = load_seeds(cli.seed.as_ref())?;
    let mut catalog = Catalog::from_seeds(seeds, &cli.export_path);

    match cli.command.unwrap_or(Command::Session) {
        Command::Session => {
            let stdin = io::stdin();
            let mut session = Session::new(catalog, stdin.lock(), io::stdout());
            session.run()
        }
        Command::Export => {
            let summary = catalog
                .executive
                .write_data_to_csv(&catalog.store, &cli.export_path)?;
            println!("Data has been written to {}", summary.path.display());
            Ok(())
        }
        Command::View => {
            let mut stdout = io::stdout().lock();
            catalog.executive.view_products(&catalog.store, &mut stdout)?;
            stdout.flush()?;
            Ok(())
        }
        Command::Competitor { base } => {
            let content = catalog.executive.competitor_content(&base)?;
            content.echo(&mut io::stdout().lock())
        }
        Command::Reprice { product, price } => {
            let id = catalog.product_at(product)?;
            let change = catalog
                .executive
                .change_price(&mut catalog.store, id, price)?;
            println!(
                "Price of {} has been changed to ${}",
                change.name,
                format_price(change.price)
            );
            let summary = change.export?;
            println!("Data has been written to {}", summary.path.display());
            Ok(())
        }
    }
}

fn load_seeds(path: Option<&PathBuf>) -> Result<Vec<ProductSeed>> {
    match path {
        Some(path) => seed::read_seeds(path),
        None => Ok(default_seeds()),
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Manage a small product catalog and export it to CSV."
)]
struct Cli {
    /// JSON file with the products to start from. Defaults to two sample products.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// CSV file rewritten after every review and price change.
    #[arg(long, global = true, default_value = DEFAULT_EXPORT_FILE)]
    export_path: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive customer/executive console (default).
    Session,
    /// Write the catalog to the export file once.
    Export,
    /// Print every product with its reviews.
    View,
    /// Echo a competitor's `<BASE>.csv` file.
    Competitor {
        /// File name without the `.csv` extension.
        base: PathBuf,
    },
    /// Change the price of a product and re-export the catalog.
    Reprice {
        /// 1-based product number.
        product: usize,
        /// New price.
        #[arg(allow_negative_numbers = true, value_parser = parse_price)]
        price: f64,
    },
}
