mod commands;
mod main_lib;
mod render;

use clap::{Args, Parser, Subcommand, ValueEnum};

use tucash_client::ClientConfig;
use tucash_core::dashboard::Period;
use tucash_core::transactions::TransactionType;

use main_lib::{build_context, init_tracing};

#[derive(Parser, Debug)]
#[command(name = "tucash", version, about = "TuCash personal finance client")]
struct Cli {
    /// Backend base URL (overrides TUCASH_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in when the backend returns a session
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Accounts and their balances
    Accounts {
        #[command(subcommand)]
        action: Option<AccountAction>,
    },
    /// List transactions
    Transactions(TransactionArgs),
    /// Budget spending, recomputed from transactions
    Budgets,
    /// Savings goal progress
    Goals,
    /// Recurring transactions due in the next days
    Recurring {
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
    /// Pending reminders
    Reminders,
    /// Income, expenses, balances and top spending categories
    Dashboard {
        #[arg(long, value_enum, default_value_t = PeriodArg::Month)]
        period: PeriodArg,
        #[arg(long, default_value_t = tucash_core::constants::DEFAULT_LEAKS_TOP)]
        top: usize,
    },
    /// Monthly income and expense trend from the server
    Trends {
        #[arg(long, default_value_t = 6)]
        months: u32,
    },
    /// Unread notifications
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },
    /// Run the first-run wizard non-interactively
    Onboard(OnboardArgs),
}

#[derive(Subcommand, Debug)]
enum AccountAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = tucash_core::constants::DEFAULT_CURRENCY)]
        currency: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum NotificationAction {
    List,
    Read { id: i64 },
    ReadAll,
    /// Keep polling and print the unread count whenever it changes
    Watch,
}

#[derive(Args, Debug)]
struct TransactionArgs {
    #[arg(long = "type", value_enum)]
    transaction_type: Option<TypeArg>,
    #[arg(long)]
    category: Option<i64>,
    /// yyyy-MM-dd
    #[arg(long)]
    from: Option<String>,
    /// yyyy-MM-dd
    #[arg(long)]
    to: Option<String>,
    #[arg(long, default_value_t = 0)]
    page: u32,
    #[arg(long, default_value_t = tucash_core::constants::DEFAULT_PAGE_SIZE)]
    size: u32,
}

#[derive(Args, Debug)]
struct OnboardArgs {
    #[arg(long)]
    account_name: String,
    #[arg(long, default_value = tucash_core::constants::DEFAULT_CURRENCY)]
    currency: String,
    /// Record a first transaction in this category; skipped when absent
    #[arg(long, requires = "amount")]
    category: Option<i64>,
    #[arg(long, requires = "category")]
    amount: Option<String>,
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Expense)]
    transaction_type: TypeArg,
    #[arg(long)]
    description: Option<String>,
    /// Run even when accounts already exist
    #[arg(long)]
    force: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PeriodArg {
    Today,
    Week,
    Month,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Today => Period::Today,
            PeriodArg::Week => Period::Week,
            PeriodArg::Month => Period::Month,
            PeriodArg::Year => Period::Year,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TypeArg {
    Income,
    Expense,
    Transfer,
}

impl From<TypeArg> for TransactionType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Income => TransactionType::Income,
            TypeArg::Expense => TransactionType::Expense,
            TypeArg::Transfer => TransactionType::Transfer,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ClientConfig::from_env().map_err(anyhow::Error::new)?;
    if let Some(api_url) = cli.api_url {
        config = config.with_api_url(api_url);
    }
    let ctx = build_context(config)?;

    match cli.command {
        Command::Login { email, password } => commands::login(&ctx, email, password).await,
        Command::Register {
            email,
            password,
            name,
        } => commands::register(&ctx, email, password, name).await,
        Command::Logout => commands::logout(&ctx),
        Command::Whoami => commands::whoami(&ctx).await,
        Command::Accounts { action } => match action.unwrap_or(AccountAction::List) {
            AccountAction::List => commands::list_accounts(&ctx).await,
            AccountAction::Create { name, currency } => {
                commands::create_account(&ctx, name, currency).await
            }
            AccountAction::Delete { id } => commands::delete_account(&ctx, id).await,
        },
        Command::Transactions(args) => {
            let filter = commands::transaction_filter(
                args.transaction_type.map(Into::into),
                args.category,
                args.from.as_deref(),
                args.to.as_deref(),
                args.page,
                args.size,
            )?;
            commands::list_transactions(&ctx, filter).await
        }
        Command::Budgets => commands::budgets(&ctx).await,
        Command::Goals => commands::goals(&ctx).await,
        Command::Recurring { days } => commands::recurring(&ctx, days).await,
        Command::Reminders => commands::reminders(&ctx).await,
        Command::Dashboard { period, top } => commands::dashboard(&ctx, period.into(), top).await,
        Command::Trends { months } => commands::trends(&ctx, months).await,
        Command::Notifications { action } => match action.unwrap_or(NotificationAction::List) {
            NotificationAction::List => commands::list_notifications(&ctx).await,
            NotificationAction::Read { id } => commands::read_notification(&ctx, id).await,
            NotificationAction::ReadAll => commands::read_all_notifications(&ctx).await,
            NotificationAction::Watch => commands::watch_notifications(&ctx).await,
        },
        Command::Onboard(args) => {
            let draft = commands::onboarding_draft(
                args.category,
                args.amount.as_deref(),
                args.transaction_type.into(),
                args.description,
            )?;
            commands::onboard(&ctx, args.account_name, args.currency, draft, args.force).await
        }
    }
}
