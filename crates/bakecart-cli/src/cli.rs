use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bakecart",
    about = "Bakery storefront cart",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with cart settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted cart
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List products and their flavors
    Catalog,
    /// Add a product to the cart
    Add(AddArgs),
    /// Remove the line at an index
    Remove(IndexArgs),
    /// Set the quantity of the line at an index (0 or less removes it)
    Update(UpdateArgs),
    /// Empty the cart
    Clear,
    /// Show the cart with subtotals and total
    Show,
    /// Print the number of units in the cart
    Count,
    /// Print the cart total
    Total,
}

#[derive(Args)]
pub struct AddArgs {
    pub product_id: String,
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub quantity: i64,
    #[arg(long, default_value = "")]
    pub flavor: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args)]
pub struct IndexArgs {
    pub index: usize,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub index: usize,
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
}
