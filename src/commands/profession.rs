//! Profession management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use memberhub_core::error::AppError;
use memberhub_core::types::lookup::NameLookup;
use memberhub_entity::profession::{CreateProfession, Profession, UpdateProfession};

use super::{ListArgs, or_dash, walk_to_page};
use crate::app::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for profession commands
#[derive(Debug, Args)]
pub struct ProfessionArgs {
    /// Profession subcommand
    #[command(subcommand)]
    pub command: ProfessionCommand,
}

/// Profession subcommands
#[derive(Debug, Subcommand)]
pub enum ProfessionCommand {
    /// List professions, newest first or by name when searching
    List(ListArgs),
    /// Look a profession up by name
    Lookup {
        /// Profession name
        name: String,
    },
    /// Show a profession by id
    Show {
        /// Profession ID
        id: String,
    },
    /// Create a profession
    Create {
        /// Acting administrator
        #[arg(long)]
        actor: String,
        /// Profession name
        #[arg(short, long)]
        name: String,
        #[command(flatten)]
        details: ProfessionDetails,
    },
    /// Update a profession
    Update {
        /// Profession ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        details: ProfessionDetails,
    },
    /// Delete a profession
    Delete {
        /// Profession ID
        id: String,
    },
    /// Return the profession with this name, creating it if needed
    Ensure {
        /// Acting administrator
        #[arg(long)]
        actor: String,
        /// Profession name
        #[arg(short, long)]
        name: String,
        #[command(flatten)]
        details: ProfessionDetails,
    },
}

/// Optional profession details
#[derive(Debug, Clone, Args)]
pub struct ProfessionDetails {
    /// Grouping such as "Santé"
    #[arg(long)]
    pub category: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub description: Option<String>,
}

impl ProfessionDetails {
    fn to_create(&self, name: &str) -> CreateProfession {
        CreateProfession {
            name: name.to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
        }
    }
}

/// Profession display row
#[derive(Debug, Serialize, Tabled)]
struct ProfessionRow {
    id: String,
    name: String,
    category: String,
    created_by: String,
    created_at: String,
}

impl From<&Profession> for ProfessionRow {
    fn from(p: &Profession) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            category: or_dash(p.category.as_deref()),
            created_by: p.created_by.clone(),
            created_at: p.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn print_profession(profession: &Profession, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_item(profession, format),
        OutputFormat::Table => output::print_record(ProfessionRow::from(profession), format),
    }
}

/// Execute profession commands
pub async fn execute(
    args: &ProfessionArgs,
    app: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = &app.professions;

    match &args.command {
        ProfessionCommand::List(list) => {
            let filters = list.filters();
            if list.all {
                let professions = service.get_all(&filters).await;
                match format {
                    OutputFormat::Json => output::print_item(&professions, format),
                    OutputFormat::Table => {
                        let rows: Vec<ProfessionRow> =
                            professions.iter().map(ProfessionRow::from).collect();
                        output::print_list(&rows, format);
                    }
                }
            } else {
                let first = list.first_page(&app.config);
                let filters = &filters;
                let page = walk_to_page(first, list.page, move |request| {
                    service.get_paginated(filters, request)
                })
                .await;
                let rows: Vec<ProfessionRow> = page.data.iter().map(ProfessionRow::from).collect();
                output::print_page(&rows, &page.pagination, format);
            }
        }
        ProfessionCommand::Lookup { name } => match service.find_by_name(name).await {
            NameLookup::Found { entity } => print_profession(&entity, format),
            NameLookup::NotFound { suggestions } => {
                output::print_warning(&format!("No profession named '{}'", name));
                if !suggestions.is_empty() {
                    output::print_kv("Did you mean", &suggestions.join(", "));
                }
            }
        },
        ProfessionCommand::Show { id } => {
            let profession = service
                .get_by_id(id)
                .await
                .ok_or_else(|| AppError::not_found(format!("Profession '{}' not found", id)))?;
            print_profession(&profession, format);
        }
        ProfessionCommand::Create {
            actor,
            name,
            details,
        } => {
            let profession = service.create(details.to_create(name), actor).await?;
            output::print_success(&format!("Profession '{}' created", profession.name));
            print_profession(&profession, format);
        }
        ProfessionCommand::Update { id, name, details } => {
            let changes = UpdateProfession {
                name: name.clone(),
                category: details.category.clone(),
                description: details.description.clone(),
            };
            match service.update(id, changes).await? {
                Some(profession) => {
                    output::print_success(&format!("Profession '{}' updated", id));
                    print_profession(&profession, format);
                }
                None => {
                    output::print_warning(&format!("Profession '{}' vanished after update", id))
                }
            }
        }
        ProfessionCommand::Delete { id } => {
            service.delete(id).await?;
            output::print_success(&format!("Profession '{}' deleted", id));
        }
        ProfessionCommand::Ensure {
            actor,
            name,
            details,
        } => {
            let outcome = service
                .find_or_create(name, actor, Some(details.to_create(name)))
                .await?;
            if outcome.is_new {
                output::print_success(&format!("Profession '{}' created", name));
            }
            output::print_item(&outcome, format);
        }
    }

    Ok(())
}
