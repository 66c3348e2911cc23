//! Company management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use memberhub_core::error::AppError;
use memberhub_core::types::lookup::NameLookup;
use memberhub_entity::company::{Company, CreateCompany, UpdateCompany};

use super::{ListArgs, or_dash, walk_to_page};
use crate::app::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for company commands
#[derive(Debug, Args)]
pub struct CompanyArgs {
    /// Company subcommand
    #[command(subcommand)]
    pub command: CompanyCommand,
}

/// Company subcommands
#[derive(Debug, Subcommand)]
pub enum CompanyCommand {
    /// List companies, newest first or by name when searching
    List(ListArgs),
    /// Look a company up by name
    Lookup {
        /// Company name, matched ignoring case and accents
        name: String,
    },
    /// Show a company by id
    Show {
        /// Company ID
        id: String,
    },
    /// Create a company
    Create {
        /// Acting administrator
        #[arg(long)]
        actor: String,
        #[command(flatten)]
        fields: CompanyFields,
    },
    /// Update a company
    Update {
        /// Company ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        #[command(flatten)]
        details: CompanyDetails,
    },
    /// Delete a company
    Delete {
        /// Company ID
        id: String,
    },
    /// Return the company with this name, creating it if needed
    Ensure {
        /// Acting administrator
        #[arg(long)]
        actor: String,
        #[command(flatten)]
        fields: CompanyFields,
    },
}

/// Fields of a new company
#[derive(Debug, Args)]
pub struct CompanyFields {
    /// Company name
    #[arg(short, long)]
    pub name: String,
    #[command(flatten)]
    pub details: CompanyDetails,
}

/// Optional company details
#[derive(Debug, Clone, Args)]
pub struct CompanyDetails {
    /// Postal address
    #[arg(long)]
    pub address: Option<String>,
    /// Business sector
    #[arg(long)]
    pub industry: Option<String>,
    /// Headcount
    #[arg(long)]
    pub employee_count: Option<u32>,
    /// Free-form notes
    #[arg(long)]
    pub description: Option<String>,
}

impl CompanyFields {
    fn to_create(&self) -> CreateCompany {
        CreateCompany {
            name: self.name.clone(),
            address: self.details.address.clone(),
            industry: self.details.industry.clone(),
            employee_count: self.details.employee_count,
            description: self.details.description.clone(),
        }
    }
}

/// Company display row
#[derive(Debug, Serialize, Tabled)]
struct CompanyRow {
    /// Company ID
    id: String,
    /// Name
    name: String,
    /// Industry
    industry: String,
    /// Headcount
    employees: String,
    /// Creator
    created_by: String,
    /// Creation time
    created_at: String,
}

impl From<&Company> for CompanyRow {
    fn from(c: &Company) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            industry: or_dash(c.industry.as_deref()),
            employees: c
                .employee_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
            created_by: c.created_by.clone(),
            created_at: c.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Print one company, in full when JSON is requested
fn print_company(company: &Company, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_item(company, format),
        OutputFormat::Table => output::print_record(CompanyRow::from(company), format),
    }
}

/// Execute company commands
pub async fn execute(
    args: &CompanyArgs,
    app: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = &app.companies;

    match &args.command {
        CompanyCommand::List(list) => {
            let filters = list.filters();
            if list.all {
                let companies = service.get_all(&filters).await;
                match format {
                    OutputFormat::Json => output::print_item(&companies, format),
                    OutputFormat::Table => {
                        let rows: Vec<CompanyRow> = companies.iter().map(CompanyRow::from).collect();
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
                let rows: Vec<CompanyRow> = page.data.iter().map(CompanyRow::from).collect();
                output::print_page(&rows, &page.pagination, format);
            }
        }
        CompanyCommand::Lookup { name } => match service.find_by_name(name).await {
            NameLookup::Found { entity } => print_company(&entity, format),
            NameLookup::NotFound { suggestions } => {
                output::print_warning(&format!("No company named '{}'", name));
                if !suggestions.is_empty() {
                    output::print_kv("Did you mean", &suggestions.join(", "));
                }
            }
        },
        CompanyCommand::Show { id } => {
            let company = service
                .get_by_id(id)
                .await
                .ok_or_else(|| AppError::not_found(format!("Company '{}' not found", id)))?;
            print_company(&company, format);
        }
        CompanyCommand::Create { actor, fields } => {
            let company = service.create(fields.to_create(), actor).await?;
            output::print_success(&format!("Company '{}' created", company.name));
            print_company(&company, format);
        }
        CompanyCommand::Update { id, name, details } => {
            let changes = UpdateCompany {
                name: name.clone(),
                address: details.address.clone(),
                industry: details.industry.clone(),
                employee_count: details.employee_count,
                description: details.description.clone(),
            };
            match service.update(id, changes).await? {
                Some(company) => {
                    output::print_success(&format!("Company '{}' updated", id));
                    print_company(&company, format);
                }
                None => output::print_warning(&format!("Company '{}' vanished after update", id)),
            }
        }
        CompanyCommand::Delete { id } => {
            service.delete(id).await?;
            output::print_success(&format!("Company '{}' deleted", id));
        }
        CompanyCommand::Ensure { actor, fields } => {
            let outcome = service
                .find_or_create(&fields.name, actor, Some(fields.to_create()))
                .await?;
            if outcome.is_new {
                output::print_success(&format!("Company '{}' created", fields.name));
            }
            output::print_item(&outcome, format);
        }
    }

    Ok(())
}
