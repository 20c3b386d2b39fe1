//! Command-line front end for the talent compendium.
//!
//! Maps the five search flags onto the form adapter, runs the query against
//! the shipped catalog (or an explicit `--catalog` file), and prints the
//! presentation rows as an aligned table or NDJSON. Invoking the binary with
//! no filter flags is the reset path: every talent, default order.

use anyhow::{Context, Result};
use compendium::{
    CatalogStore, PresentationRow, SearchCriteria, SearchForm, find_catalog_path, present_rows,
};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let catalog_path = match &cli.catalog {
        Some(path) => path.clone(),
        None => find_catalog_path()?,
    };
    let store = CatalogStore::load(&catalog_path)?;

    let criteria = SearchCriteria::from_form(&cli.form)?;
    let rows = if criteria.is_empty() {
        present_rows(store.list_all())
    } else {
        present_rows(store.search(&criteria))
    };

    if rows.is_empty() {
        eprintln!("No talents matched the requested filters.");
        return Ok(());
    }

    if cli.json {
        print_ndjson(&rows)?;
    } else {
        print_table(store.title(), &rows);
    }
    Ok(())
}

struct Cli {
    form: SearchForm,
    catalog: Option<PathBuf>,
    json: bool,
    verbose: bool,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut cli = Self {
            form: SearchForm::default(),
            catalog: None,
            json: false,
            verbose: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--name" | "-n" => cli.form.name = flag_value(&mut args, "--name")?,
                "--source" | "-s" => cli.form.source = flag_value(&mut args, "--source")?,
                "--requirements" | "-r" => {
                    cli.form.requirements = flag_value(&mut args, "--requirements")?;
                }
                "--text" | "-t" => cli.form.text = flag_value(&mut args, "--text")?,
                "--flavor" | "-f" => cli.form.flavor = flag_value(&mut args, "--flavor")?,
                "--catalog" => cli.catalog = Some(PathBuf::from(flag_value(&mut args, "--catalog")?)),
                "--json" => cli.json = true,
                "--verbose" => cli.verbose = true,
                "--help" | "-h" => usage(0),
                other => {
                    eprintln!("Unknown flag: {other}\n");
                    usage(1);
                }
            }
        }

        Ok(cli)
    }
}

fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().with_context(|| format!("{flag} requires a value"))
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: talents [filters] [options]\n\nFilters (omitted filters match everything; no filters lists the full compendium):\n  --name, -n <text>           Substring of the talent name.\n  --source, -s <token>        Source book token, one of:\n                                core\n                                Sand_and_Dust\n                                Power_And_Pawns_Emperors_Court\n                                The_Great_Game_Houses_of_the_Landsraad\n  --requirements, -r <text>   Substring of the requirement line.\n  --text, -t <text>           Substring of the rules text.\n  --flavor, -f <text>         Substring of the flavor text.\n\nOptions:\n  --catalog <path>            Catalog file to load instead of the shipped one.\n  --json                      Emit rows as NDJSON instead of a table.\n  --verbose                   Debug-level logging on stderr.\n\nExamples:\n  talents\n  talents --source Sand_and_Dust\n  talents --name Gri --json"
    );
    std::process::exit(code);
}

fn print_ndjson(rows: &[PresentationRow]) -> Result<()> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

// Table cells are clipped so long rules text does not wrap the whole layout.
const CELL_MAX_CHARS: usize = 48;
const CELL_ELLIPSIS: &str = "\u{2026}";

fn clip(text: &str) -> String {
    let mut acc = String::new();
    for (idx, ch) in text.chars().enumerate() {
        if idx >= CELL_MAX_CHARS {
            acc.push_str(CELL_ELLIPSIS);
            return acc;
        }
        acc.push(ch);
    }
    acc
}

fn print_table(title: &str, rows: &[PresentationRow]) {
    if !title.is_empty() {
        println!("{title}\n");
    }

    let labels = compendium::COLUMN_LABELS;
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| row.columns().map(clip))
        .collect();

    let mut widths: [usize; 5] = [0; 5];
    for (idx, label) in labels.iter().enumerate() {
        widths[idx] = label.chars().count();
    }
    for row in &cells {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    print_row(&labels.map(String::from), &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&separator, &widths);
    for row in &cells {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String], widths: &[usize; 5]) {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = widths[idx].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
    }
    println!("{}", line.trim_end());
}
