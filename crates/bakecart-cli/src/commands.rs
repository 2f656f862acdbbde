use anyhow::Context;
use colored::Colorize;

use bakecart_cart::{view, CartConfig, CartStore, Catalog, FileKvStore};

use crate::cli::*;
use crate::settings;
use crate::terminal::TerminalObserver;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = settings::load_config(cli.config.as_deref(), cli.data_dir)?;
    let catalog = Catalog::bakery();

    match cli.command {
        Command::Catalog => cmd_catalog(&catalog),
        Command::Add(args) => cmd_add(&mut open_cart(catalog, config)?, args),
        Command::Remove(args) => {
            let removed = open_cart(catalog, config)?.remove_item(args.index)?;
            println!("  removed {}", removed.name.bold());
            Ok(())
        }
        Command::Update(args) => {
            open_cart(catalog, config)?.update_quantity(args.index, args.quantity)?;
            Ok(())
        }
        Command::Clear => {
            open_cart(catalog, config)?.clear()?;
            Ok(())
        }
        Command::Show => {
            print!("{}", view::render_cart(&open_cart(catalog, config)?)?);
            Ok(())
        }
        Command::Count => {
            println!("{}", open_cart(catalog, config)?.item_count());
            Ok(())
        }
        Command::Total => {
            println!("{}", open_cart(catalog, config)?.total()?);
            Ok(())
        }
    }
}

/// Open the file-backed cart with the terminal observer attached.
fn open_cart(catalog: Catalog, config: CartConfig) -> anyhow::Result<CartStore<FileKvStore>> {
    let dir = settings::data_dir(&config);
    tracing::debug!(dir = %dir.display(), key = %config.storage_key, "opening cart storage");
    let store = FileKvStore::open(&dir)
        .with_context(|| format!("opening cart storage in {}", dir.display()))?;
    let mut cart = CartStore::open(catalog, store, config);
    cart.set_observer(TerminalObserver);
    Ok(cart)
}

fn cmd_catalog(catalog: &Catalog) -> anyhow::Result<()> {
    for product in catalog.iter() {
        println!(
            "{}  {}  {}/kg",
            product.id.as_str().yellow(),
            product.name.bold(),
            product.unit_price
        );
        let flavors: Vec<String> = view::flavor_choices(product)
            .into_iter()
            .skip(1)
            .map(|c| c.label)
            .collect();
        if !flavors.is_empty() {
            println!("    Sabores: {}", flavors.join(", ").cyan());
        }
    }
    Ok(())
}

fn cmd_add(cart: &mut CartStore<FileKvStore>, args: AddArgs) -> anyhow::Result<()> {
    cart.add_item(&args.product_id, args.quantity, &args.notes, &args.flavor)
        .with_context(|| format!("adding {}", args.product_id))?;
    Ok(())
}
