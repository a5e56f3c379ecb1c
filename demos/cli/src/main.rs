use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use perfume_catalog::parse_catalog_str;
use perfume_core::{PanelConfig, PanelView, PerfumeOption};

#[derive(Parser, Debug)]
#[command(
    name = "perfume-cli",
    about = "Preview the perfume media panel or render the dropdown from a catalog JSON file."
)]
struct Args {
    /// Path to the catalog JSON file.
    #[arg(short, long)]
    input: PathBuf,

    /// Id of the perfume to select. Defaults to the only perfume, if there is one.
    #[arg(short, long)]
    select: Option<u64>,

    /// Image shown when nothing is selected.
    #[arg(long, default_value = "")]
    default_image: String,

    /// Print the `<select>` markup instead of the panel preview.
    #[arg(long)]
    markup: bool,

    /// Print the panel preview as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Cannot read file {:?}", args.input))?;

    let config = PanelConfig::default().with_default_image(args.default_image);
    let catalog = parse_catalog_str(&data)?;

    if args.markup {
        println!("{}", catalog.render_select("-- Select a perfume --", &config));
        return Ok(());
    }

    let selected = match args.select {
        Some(id) => match catalog.find(id) {
            Some(perfume) => Some(perfume),
            None => bail!("No perfume with id {id} in {:?}", args.input),
        },
        None => catalog.initial_selection(),
    };

    let option: Option<PerfumeOption> = selected.map(|perfume| perfume.to_option(&config));
    let view = PanelView::for_selection(option.as_ref(), &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!(
        "Perfumes: {}\nSource: {:?}\nImage: {}\nAlt: {}\nTitle: {}\nSubtitle: {}",
        catalog.perfumes().len(),
        view.source,
        view.image_src,
        view.image_alt,
        view.title,
        view.subtitle
    );

    Ok(())
}
