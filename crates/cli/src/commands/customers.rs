//! Customer search, edit, create, and delete.

use clap::{Args, ValueEnum};

use emporium_api::ApiClient;
use emporium_app::manage::{self, AddCustomerForm};
use emporium_app::{AdjustDirection, SearchEditFlow, SearchField};
use emporium_core::{CustomerId, CustomerRecord};

/// Which field the search query is narrowed on.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Name,
    Email,
    Phone,
}

impl From<FieldArg> for SearchField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Name => Self::Name,
            FieldArg::Email => Self::Email,
            FieldArg::Phone => Self::Phone,
        }
    }
}

/// Search customers and print the matches.
pub async fn search(
    client: &ApiClient,
    token: &str,
    query: &str,
    field: FieldArg,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut flow = SearchEditFlow::new(client.clone());
    let results = flow.search(token, query, field.into()).await?;

    tracing::info!("{} match(es)", results.len());
    for record in results {
        print_record(record);
    }
    Ok(())
}

/// Arguments for the `edit` command.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Search query used to locate the customer
    pub query: String,

    /// Field the query is narrowed on
    #[arg(short, long, value_enum, default_value_t = FieldArg::Phone)]
    pub field: FieldArg,

    /// Pick a specific customer ID from the matches (default: first match)
    #[arg(long)]
    pub id: Option<String>,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New contact email
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Points to add to the balance
    #[arg(long, conflicts_with = "subtract_points")]
    pub add_points: Option<i64>,

    /// Points to subtract from the balance
    #[arg(long)]
    pub subtract_points: Option<i64>,
}

/// Locate a customer, apply field and point changes, and save.
pub async fn edit(
    client: &ApiClient,
    token: &str,
    args: EditArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut flow = SearchEditFlow::new(client.clone());
    flow.search(token, &args.query, args.field.into()).await?;

    let id = match args.id {
        Some(id) => CustomerId::from(id),
        None => {
            flow.results()
                .first()
                .ok_or("No customer matched the search")?
                .id
                .clone()
        }
    };

    let buffer = flow
        .start_edit(&id)
        .ok_or("Customer is not in the search results")?;
    if let Some(name) = args.name {
        buffer.name = Some(name);
    }
    if let Some(email) = args.email {
        buffer.email = Some(email);
    }
    if let Some(phone) = args.phone {
        buffer.phone = Some(phone);
    }
    if let Some(notes) = args.notes {
        buffer.notes = Some(notes);
    }
    if let Some(amount) = args.add_points {
        buffer.stage_amount(amount);
        buffer.apply_adjustment(AdjustDirection::Add);
    }
    if let Some(amount) = args.subtract_points {
        buffer.stage_amount(amount);
        buffer.apply_adjustment(AdjustDirection::Subtract);
    }

    flow.save(token).await?;
    tracing::info!("Customer {id} updated");
    for record in flow.results() {
        print_record(record);
    }
    Ok(())
}

/// Arguments for the `add` command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Phone number (required)
    #[arg(long)]
    pub phone: String,

    /// Display name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,

    /// Free-text notes
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Initial point balance
    #[arg(long, default_value_t = 0)]
    pub points: i64,
}

/// Create a customer record.
pub async fn add(
    client: &ApiClient,
    token: &str,
    args: AddArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = AddCustomerForm {
        name: args.name,
        phone: args.phone,
        email: args.email,
        notes: args.notes,
        points: args.points,
    };
    manage::add_customer(client, token, form).await?;
    tracing::info!("Customer added");
    Ok(())
}

/// Delete the first customer matching a phone number or email.
pub async fn delete(
    client: &ApiClient,
    token: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = manage::delete_customer(client, token, value).await?;
    tracing::info!("Customer {id} deleted");
    Ok(())
}

fn print_record(record: &CustomerRecord) {
    tracing::info!(
        "  {} | {} | {} | {} | {} points",
        record.id,
        record.name,
        record.phone,
        record.email,
        record.points
    );
}
