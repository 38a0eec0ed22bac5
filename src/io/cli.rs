//! Command-line interface for generating layouts and browsing the catalog

use crate::algorithm::executor::{GenerationRequest, Layout, LayoutGenerator};
use crate::catalog::Catalog;
use crate::io::catalog_file::load_catalog;
use crate::io::configuration::{DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::io::error::{LayoutError, Result, invalid_parameter};
use crate::io::image::{export_layout_as_png, preview_dimensions};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slotgrid")]
#[command(
    author,
    version,
    about = "Generate deterministic page layouts by binary space partitioning"
)]
/// Command-line arguments for the layout generator
pub struct Cli {
    /// Seed text; the same seed always yields the same layout
    #[arg(short, long, required_unless_present = "list")]
    pub seed: Option<String>,

    /// Category id or display name
    #[arg(short, long, required_unless_present = "list")]
    pub category: Option<String>,

    /// Subcategory id or display name
    #[arg(short = 'b', long, required_unless_present = "list")]
    pub subcategory: Option<String>,

    /// Canvas width in grid cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in grid cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// TOML catalog to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Also write a PNG preview of the layout
    #[arg(short, long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Preview cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Print single-line JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,

    /// List categories and their subcategories, then exit
    #[arg(short, long)]
    pub list: bool,

    /// Increase log detail (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log verbosity: negative when quiet, otherwise the `-v` count
    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            i8::try_from(self.verbose).unwrap_or(i8::MAX)
        }
    }

    /// Build the generation request from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if seed, category or subcategory is missing
    pub fn request(&self) -> Result<GenerationRequest> {
        let required = |value: &Option<String>, parameter: &'static str| {
            value
                .clone()
                .ok_or_else(|| invalid_parameter(parameter, &"", &"argument is required"))
        };

        Ok(GenerationRequest::new(
            required(&self.seed, "seed")?,
            required(&self.category, "category")?,
            required(&self.subcategory, "subcategory")?,
        )
        .with_dimensions(self.width, self.height))
    }
}

/// Runs one CLI invocation against a catalog and an output stream
pub struct CommandRunner {
    cli: Cli,
    catalog: Catalog,
}

impl CommandRunner {
    /// Load the catalog named by the arguments, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be loaded
    pub fn new(cli: Cli) -> Result<Self> {
        let catalog = match &cli.catalog {
            Some(path) => load_catalog(path)?,
            None => Catalog::builtin(),
        };
        Ok(Self { cli, catalog })
    }

    /// Execute the command, writing JSON or the catalog listing to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if generation, preview export or writing fails
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        if self.cli.list {
            return self.write_listing(out);
        }

        let request = self.cli.request()?;
        if self.cli.png.is_some() {
            preview_dimensions(request.width, request.height, self.cli.cell_size)?;
        }
        let layout = LayoutGenerator::new(&self.catalog).generate(&request)?;

        if let Some(path) = &self.cli.png {
            export_layout_as_png(&layout, self.cli.cell_size, path)?;
            tracing::info!(path = %path.display(), "wrote preview");
        }

        self.write_layout(&layout, out)
    }

    fn write_layout(&self, layout: &Layout, out: &mut impl Write) -> Result<()> {
        let json = layout.to_json(!self.cli.compact)?;
        writeln!(out, "{json}").map_err(output_error)
    }

    fn write_listing(&self, out: &mut impl Write) -> Result<()> {
        for category in &self.catalog.categories {
            let slot_count = self.catalog.slots_for(&category.id).map_or(0, <[String]>::len);
            writeln!(out, "{} ({}) - {slot_count} slots", category.id, category.name)
                .map_err(output_error)?;
            for subcategory in self.catalog.subcategories_of(&category.id) {
                writeln!(out, "  {} ({})", subcategory.id, subcategory.name)
                    .map_err(output_error)?;
            }
        }
        Ok(())
    }
}

fn output_error(source: std::io::Error) -> LayoutError {
    LayoutError::FileSystem {
        path: PathBuf::from("<stdout>"),
        operation: "write output",
        source,
    }
}
