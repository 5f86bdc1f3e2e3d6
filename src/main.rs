//! Maintenance CLI for the project asset pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};

use portfolio_assets::admin::delete_project;
use portfolio_assets::models::ProjectMetadata;
use portfolio_assets::store::metadata::set_project_metadata;
use portfolio_assets::store::order::save_display_order;
use portfolio_assets::{SiteConfig, resolve_project_items};

#[derive(Parser)]
#[command(name = "portfolio-assets", version, about)]
struct Cli {
    /// Site root containing portfolio.config.json and the content directories.
    #[arg(long, global = true, default_value = ".")]
    site_root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the current project catalog and print it as JSON.
    List {
        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
    /// Persist the display order as the given sequence of titles.
    SetOrder {
        /// Titles in the desired display order.
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Set or patch the metadata record for a project key.
    ///
    /// At least one field must be given; a patch with nothing to change is
    /// rejected instead of writing an empty record into the store.
    #[command(group = ArgGroup::new("fields").required(true).multiple(true).args(["title", "subtitle"]))]
    SetMeta {
        /// Base name or normalized key of the project.
        key: String,
        /// Display title override.
        #[arg(long)]
        title: Option<String>,
        /// Subtitle shown under the title.
        #[arg(long)]
        subtitle: Option<String>,
    },
    /// Delete a project's PDF and its derived image and thumbnail.
    Delete {
        /// Base name of the document (file name without `.pdf`).
        base_name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let site_root = cli
        .site_root
        .canonicalize()
        .with_context(|| format!("site root {} not found", cli.site_root.display()))?;
    let layout = SiteConfig::discover(&site_root).into_layout(&site_root);

    match cli.command {
        Command::List { pretty } => {
            let items = resolve_project_items(&layout);
            let json = if pretty {
                serde_json::to_string_pretty(&items)
            } else {
                serde_json::to_string(&items)
            }
            .context("failed to serialize catalog")?;
            println!("{json}");
        }
        Command::SetOrder { titles } => {
            save_display_order(&layout.order_file, &titles)?;
        }
        Command::SetMeta {
            key,
            title,
            subtitle,
        } => {
            set_project_metadata(&layout.metadata_file, &key, &ProjectMetadata {
                title,
                subtitle,
            })?;
        }
        Command::Delete { base_name } => {
            delete_project(&layout, &base_name)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn set_meta_requires_at_least_one_field() {
        assert!(Cli::try_parse_from(["portfolio-assets", "set-meta", "bridge-study"]).is_err());
        assert!(
            Cli::try_parse_from([
                "portfolio-assets",
                "set-meta",
                "bridge-study",
                "--title",
                "Bridge Study",
            ])
            .is_ok()
        );
        assert!(
            Cli::try_parse_from([
                "portfolio-assets",
                "set-meta",
                "bridge-study",
                "--subtitle",
                "2024",
            ])
            .is_ok()
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
