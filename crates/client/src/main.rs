//! `partstock` — command line front-end for the parts inventory.
//!
//! ```sh
//! partstock login alice --password s3cret
//! partstock list --query resistor --category passive
//! partstock add --name "LED red" --description 5mm --brand Kingbright \
//!     --price 0.25 --supplier Digikey --category opto
//! partstock delete 3 --yes
//! partstock check id 111.444.777-35
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use partstock_client::config::{DEFAULT_API_URL, default_store_path};
use partstock_client::{
    AlwaysConfirm, AppState, ClientConfig, Confirm, ControllerError, Level, ListView,
    RecordingNotifier,
};
use partstock_core::ComponentId;
use partstock_format::{display_naive_date, format_currency};
use partstock_inventory::{ComponentForm, ComponentRow};
use partstock_validation::{format_id_number, is_valid_email, is_valid_id_number};

#[derive(Parser, Debug)]
#[command(name = "partstock", version, about = "Parts inventory client")]
struct Cli {
    /// Base URL of the inventory API.
    #[arg(long, env = "PARTSTOCK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// SQLite file holding the session token.
    #[arg(long, env = "PARTSTOCK_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in against the user list and remember the session.
    Login {
        name: String,
        #[arg(long, env = "PARTSTOCK_PASSWORD")]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Report whether a session is stored.
    Status,
    /// List components, optionally filtered.
    List {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List the categories in use.
    Categories,
    /// Create a component.
    Add(FormArgs),
    /// Edit a component; omitted fields keep their current value.
    Edit {
        id: ComponentId,
        #[command(flatten)]
        fields: FormArgs,
    },
    /// Delete a component.
    Delete {
        id: ComponentId,
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Validate a value locally.
    #[command(subcommand)]
    Check(Check),
}

#[derive(Args, Debug, Default)]
struct FormArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    brand: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    supplier: Option<String>,
    #[arg(long)]
    category: Option<String>,
}

impl FormArgs {
    /// Overlay the given fields on `base`.
    fn apply(self, mut base: ComponentForm) -> ComponentForm {
        let fields = [
            (self.name, &mut base.name),
            (self.description, &mut base.description),
            (self.brand, &mut base.brand),
            (self.price, &mut base.price),
            (self.supplier, &mut base.supplier),
            (self.category, &mut base.category),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        base
    }
}

#[derive(Subcommand, Debug)]
enum Check {
    /// Identification number check digits.
    Id { value: String },
    /// Email address shape.
    Email { value: String },
}

/// Asks on the terminal; anything but `y`/`yes` declines.
struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn print_rows(rows: &[ComponentRow]) {
    if rows.is_empty() {
        println!("No components found.");
        return;
    }
    for row in rows {
        println!(
            "{:>6}  {:<24} {:<14} {:<14} {:<12} {:>14}  {}",
            row.id, row.name, row.brand, row.supplier, row.category, row.price, row.description
        );
    }
}

fn print_view(view: &ListView) {
    match view {
        ListView::Rows(rows) => print_rows(rows),
        ListView::LoadError(placeholder) => println!("{placeholder}"),
    }
}

fn flush_notifications(notifier: &RecordingNotifier) {
    for note in notifier.drain() {
        match note.level {
            Level::Info => eprintln!("{}", note.message),
            Level::Error => eprintln!("error: {}", note.message),
        }
    }
}

async fn run(cli: Cli, state: &AppState) -> Result<(), ControllerError> {
    match cli.command {
        Command::Login { name, password } => {
            state.login().login(&name, &password).await?;
        }
        Command::Logout => state.login().logout().await?,
        Command::Status => {
            let logged_in = state.login().is_authenticated().await?;
            println!("{}", if logged_in { "logged in" } else { "logged out" });
        }
        Command::List { query, category } => {
            let mut components = state.components();
            components.load().await.into_rows()?;
            let today = display_naive_date(chrono::Local::now().date_naive());
            println!("Inventory as of {today}");
            let rows = components.filter(&query, category.as_deref());
            print_rows(&rows);
            let total: f64 = components
                .items()
                .iter()
                .filter(|c| rows.iter().any(|r| r.id == c.id))
                .filter_map(|c| c.price)
                .sum();
            println!("{} item(s), total {}", rows.len(), format_currency(Some(total)));
        }
        Command::Categories => {
            let mut components = state.components();
            components.load().await.into_rows()?;
            for category in components.categories() {
                println!("{category}");
            }
        }
        Command::Add(fields) => {
            let mut components = state.components();
            let view = components.create(&fields.apply(ComponentForm::default())).await?;
            print_view(&view);
        }
        Command::Edit { id, fields } => {
            let mut components = state.components();
            components.load().await.into_rows()?;
            let Some(current) = components.begin_edit(&id) else {
                eprintln!("no component with id {id}");
                return Ok(());
            };
            if let Some(view) = components.update(&id, &fields.apply(current)).await? {
                print_view(&view);
            }
        }
        Command::Delete { id, yes } => {
            let mut components = state.components();
            components.load().await.into_rows()?;
            let confirm: &dyn Confirm = if yes { &AlwaysConfirm } else { &PromptConfirm };
            match components.delete(&id, confirm).await? {
                Some(view) => print_view(&view),
                None => eprintln!("nothing deleted"),
            }
        }
        Command::Check(Check::Id { value }) => {
            let verdict = if is_valid_id_number(&value) { "valid" } else { "invalid" };
            let shown = format_id_number(&value).unwrap_or(value);
            println!("{shown}: {verdict}");
        }
        Command::Check(Check::Email { value }) => {
            let verdict = if is_valid_email(&value) { "valid" } else { "invalid" };
            println!("{value}: {verdict}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    partstock_observability::init_with_default("warn");

    let cli = Cli::parse();

    let store_path = match cli.store.clone() {
        Some(path) => path,
        None => default_store_path()?,
    };
    let config = ClientConfig::new(cli.api_url.clone()).with_store_path(store_path);

    let notifier = RecordingNotifier::new();
    let state = AppState::new(config, Arc::new(notifier.clone()))
        .await
        .context("failed to initialise client state")?;

    let result = run(cli, &state).await;
    flush_notifications(&notifier);

    if let Err(err) = result {
        tracing::debug!("command failed: {err:?}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
    Ok(())
}
