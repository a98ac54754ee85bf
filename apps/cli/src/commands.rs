//! Subcommand handlers. Each one talks to the backend through the shared
//! [`ApiClient`](tucash_client::ApiClient) and prints plain text to stdout.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use tucash_client::NotificationPoller;
use tucash_core::accounts::{Account, AccountClientTrait, NewAccount};
use tucash_core::budgets::{budget_statuses, BudgetClientTrait};
use tucash_core::categories::CategoryClientTrait;
use tucash_core::constants::DEFAULT_CURRENCY;
use tucash_core::dashboard::{
    balances_by_currency, category_leaks, chart_split, filter_by_date_range, pulse,
    DashboardClientTrait, Period,
};
use tucash_core::goals::{GoalClientTrait, GoalProgress, GoalStatus};
use tucash_core::notifications::NotificationClientTrait;
use tucash_core::onboarding::{OnboardingGate, TransactionDraft, Wizard};
use tucash_core::recurring::{upcoming, RecurringClientTrait, RecurringType};
use tucash_core::reminders::{pending, ReminderClientTrait};
use tucash_core::transactions::{
    list_all_transactions, Transaction, TransactionClientTrait, TransactionFilter,
    TransactionType,
};
use tucash_core::users::{AuthClientTrait, LoginRequest, RegisterRequest, UserClientTrait};
use tucash_core::utils::{format_amount, parse_api_date, today};

use crate::main_lib::AppContext;
use crate::render;

/// Page size used when a command needs every transaction of a window.
const HISTORY_PAGE_SIZE: u32 = 1000;

fn require_login(ctx: &AppContext) -> anyhow::Result<()> {
    if !ctx.session.is_logged_in() {
        bail!("Not signed in. Run `tucash login` first.");
    }
    Ok(())
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    parse_api_date(raw).with_context(|| format!("Invalid date '{}', expected yyyy-MM-dd", raw))
}

fn primary_currency(accounts: &[Account]) -> String {
    accounts
        .first()
        .map(|a| a.currency.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

async fn transactions_between(
    ctx: &AppContext,
    from: NaiveDate,
    to: NaiveDate,
) -> anyhow::Result<Vec<Transaction>> {
    let filter = TransactionFilter::default()
        .between(from, to)
        .with_size(HISTORY_PAGE_SIZE);
    Ok(list_all_transactions(ctx.client.as_ref(), &filter).await?)
}

pub async fn login(ctx: &AppContext, email: String, password: String) -> anyhow::Result<()> {
    let session = ctx.client.login(LoginRequest::new(email, password)).await?;
    let name = session.user.display_name.clone();
    ctx.session.establish(session)?;
    tracing::info!("Signed in as {}", name);
    println!("Welcome, {}!", name);
    Ok(())
}

pub async fn register(
    ctx: &AppContext,
    email: String,
    password: String,
    display_name: String,
) -> anyhow::Result<()> {
    let response = ctx
        .client
        .register(RegisterRequest {
            email,
            password,
            display_name,
        })
        .await?;
    match response.into_session() {
        Some(session) => {
            let name = session.user.display_name.clone();
            ctx.session.establish(session)?;
            println!("Account created. Welcome, {}!", name);
        }
        None => println!("Account created. Sign in with `tucash login`."),
    }
    Ok(())
}

pub fn logout(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.session.clear()?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ctx.session.require_authenticated()?;
    match ctx.client.get_user(session.user.id).await {
        Ok(user) => println!(
            "{} <{}>, currency {}, locale {}",
            user.display_name, user.email, user.currency, user.locale
        ),
        Err(e) if e.is_authentication() => return Err(e.into()),
        Err(e) => {
            tracing::warn!("Could not load the user profile: {}", e);
            println!("{} <{}>", session.user.display_name, session.user.email);
        }
    }
    Ok(())
}

pub async fn list_accounts(ctx: &AppContext) -> anyhow::Result<()> {
    require_login(ctx)?;
    let accounts = ctx.client.list_accounts().await?;
    if accounts.is_empty() {
        println!("No accounts yet. Create one with `tucash onboard` or `tucash accounts create`.");
        return Ok(());
    }
    for account in &accounts {
        println!(
            "#{:<5} {:<24} {:>14}",
            account.id,
            account.name,
            format_amount(account.balance, Some(&account.currency), false)
        );
    }
    println!();
    for balance in balances_by_currency(&accounts) {
        println!("{}", render::balance_line(&balance));
    }
    Ok(())
}

pub async fn create_account(ctx: &AppContext, name: String, currency: String) -> anyhow::Result<()> {
    require_login(ctx)?;
    let account = ctx.client.create_account(NewAccount::new(name, currency)).await?;
    println!("Created account #{} {}", account.id, account.name);
    Ok(())
}

pub async fn delete_account(ctx: &AppContext, account_id: i64) -> anyhow::Result<()> {
    require_login(ctx)?;
    ctx.client.delete_account(account_id).await?;
    println!("Deleted account #{}", account_id);
    Ok(())
}

pub fn transaction_filter(
    transaction_type: Option<TransactionType>,
    category_id: Option<i64>,
    from: Option<&str>,
    to: Option<&str>,
    page: u32,
    size: u32,
) -> anyhow::Result<TransactionFilter> {
    let from_date = from.map(parse_date).transpose()?;
    let to_date = to.map(parse_date).transpose()?;
    if let (Some(from), Some(to)) = (from_date, to_date) {
        if from > to {
            bail!("--from must not be after --to");
        }
    }
    Ok(TransactionFilter {
        transaction_type,
        category_id,
        from_date,
        to_date,
        page,
        size,
    })
}

pub async fn list_transactions(ctx: &AppContext, filter: TransactionFilter) -> anyhow::Result<()> {
    require_login(ctx)?;
    let page = ctx.client.list_transactions(&filter).await?;
    for t in &page.content {
        let amount = match t.transaction_type {
            TransactionType::Expense => -t.amount,
            _ => t.amount,
        };
        println!(
            "{} #{:<5} {:<18} {:>14}  {}",
            t.transaction_date,
            t.id,
            t.category_name.as_deref().unwrap_or("-"),
            render::signed(amount, DEFAULT_CURRENCY),
            t.description.as_deref().unwrap_or("")
        );
    }
    println!(
        "Page {} of {} ({} transactions)",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements
    );
    Ok(())
}

pub async fn budgets(ctx: &AppContext) -> anyhow::Result<()> {
    require_login(ctx)?;
    let budgets = ctx.client.list_budgets().await?;
    if budgets.is_empty() {
        println!("No budgets.");
        return Ok(());
    }
    let from = budgets.iter().map(|b| b.start_date).min().unwrap_or_else(today);
    let to = budgets.iter().map(|b| b.end_date).max().unwrap_or_else(today);
    let transactions = transactions_between(ctx, from, to).await?;
    let currency = primary_currency(&ctx.client.list_accounts().await?);

    for status in budget_statuses(&budgets, &transactions, today()) {
        println!("{}", render::budget_line(&status, &currency));
    }
    Ok(())
}

pub async fn goals(ctx: &AppContext) -> anyhow::Result<()> {
    require_login(ctx)?;
    let goals = ctx.client.list_goals().await?;
    let currency = primary_currency(&ctx.client.list_accounts().await?);
    let today = today();
    let mut shown = 0;
    for goal in goals.iter().filter(|g| g.status == GoalStatus::Active) {
        let progress = GoalProgress::compute(goal, today);
        println!("{}", render::goal_line(goal, &progress, &currency));
        shown += 1;
    }
    if shown == 0 {
        println!("No active goals.");
    }
    Ok(())
}

pub async fn recurring(ctx: &AppContext, days: i64) -> anyhow::Result<()> {
    require_login(ctx)?;
    let templates = ctx.client.list_recurring().await?;
    let due = upcoming(&templates, today(), days);
    if due.is_empty() {
        println!("Nothing scheduled in the next {} days.", days);
    }
    for r in due {
        let amount = match r.recurring_type {
            RecurringType::Expense => -r.amount,
            RecurringType::Income => r.amount,
        };
        println!(
            "{} {:<24} {:>14}  {:?}",
            r.next_execution_date,
            r.description.as_deref().unwrap_or("-"),
            render::signed(amount, DEFAULT_CURRENCY),
            r.frequency
        );
    }
    Ok(())
}

pub async fn reminders(ctx: &AppContext) -> anyhow::Result<()> {
    require_login(ctx)?;
    let reminders = ctx.client.list_reminders().await?;
    let today = today();
    let open = pending(&reminders);
    if open.is_empty() {
        println!("No pending reminders.");
    }
    for r in open {
        let marker = if r.is_overdue(today) { "!" } else { " " };
        println!("{} {} {}", marker, r.due_date, r.title);
    }
    Ok(())
}

pub async fn dashboard(ctx: &AppContext, period: Period, top: usize) -> anyhow::Result<()> {
    require_login(ctx)?;
    let range = period.date_range(today());
    let (accounts, categories) = tokio::try_join!(
        ctx.client.list_accounts(),
        ctx.client.list_categories(None)
    )?;
    let transactions = transactions_between(ctx, range.from, range.to).await?;
    let in_period = filter_by_date_range(&transactions, range);

    let pulse = pulse(&in_period, &accounts, period);
    let split = chart_split(pulse.total_income, pulse.total_expenses);
    for line in render::pulse_lines(&pulse, &split) {
        println!("{}", line);
    }

    let balances = balances_by_currency(&accounts);
    if !balances.is_empty() {
        println!("\nBalances");
        for balance in &balances {
            println!("  {}", render::balance_line(balance));
        }
    }

    let leaks = category_leaks(&in_period, &categories, top);
    if !leaks.is_empty() {
        println!("\nTop spending");
        for leak in &leaks {
            println!("  {}", render::leak_line(leak, &pulse.currency));
        }
    }
    Ok(())
}

pub async fn trends(ctx: &AppContext, months: u32) -> anyhow::Result<()> {
    require_login(ctx)?;
    let trends = ctx.client.get_trends(months).await?;
    for month in &trends.series {
        println!(
            "{}  in {:>12}  out {:>12}  net {:>12}",
            month.month,
            format_amount(month.income, Some(&trends.currency), false),
            format_amount(month.expenses, Some(&trends.currency), false),
            render::signed(month.balance, &trends.currency)
        );
    }
    Ok(())
}

pub async fn list_notifications(ctx: &AppContext) -> anyhow::Result<()> {
    require_login(ctx)?;
    let unread = ctx.client.list_unread_notifications().await?;
    if unread.is_empty() {
        println!("No unread notifications.");
    }
    for n in &unread {
        println!(
            "#{:<5} {} {}: {}",
            n.id,
            n.notification_type.icon(),
            n.title,
            n.message
        );
    }
    Ok(())
}

pub async fn read_notification(ctx: &AppContext, notification_id: i64) -> anyhow::Result<()> {
    require_login(ctx)?;
    ctx.client.mark_notification_as_read(notification_id).await?;
    println!("Marked #{} as read.", notification_id);
    Ok(())
}

pub async fn read_all_notifications(ctx: &AppContext) -> anyhow::Result<()> {
    require_login(ctx)?;
    let poller = NotificationPoller::new(ctx.client.clone(), ctx.config.poll_interval);
    poller.refresh().await;
    let count = poller.snapshot().unread_count;
    poller.mark_all_as_read().await?;
    println!("Marked {} notification(s) as read.", count);
    Ok(())
}

/// Polls until Ctrl-C, printing whenever the unread count changes.
pub async fn watch_notifications(ctx: &AppContext) -> anyhow::Result<()> {
    require_login(ctx)?;
    let client: Arc<dyn NotificationClientTrait> = ctx.client.clone();
    let poller = NotificationPoller::new(client, ctx.config.poll_interval);
    let mut updates = poller.subscribe();
    poller.start();
    println!(
        "Watching notifications every {}s, Ctrl-C to stop.",
        ctx.config.poll_interval.as_secs()
    );

    let mut last_count = None;
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                if snapshot.is_loading {
                    continue;
                }
                if let Some(error) = &snapshot.error {
                    tracing::warn!("Notification poll failed: {}", error);
                    if !ctx.session.is_logged_in() {
                        bail!("Session expired. Run `tucash login` again.");
                    }
                    continue;
                }
                if last_count != Some(snapshot.unread_count) {
                    last_count = Some(snapshot.unread_count);
                    println!("{} unread", snapshot.unread_count);
                    for n in &snapshot.unread {
                        println!("  {} {}", n.notification_type.icon(), n.title);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    poller.stop();
    Ok(())
}

pub fn onboarding_draft(
    category_id: Option<i64>,
    amount: Option<&str>,
    transaction_type: TransactionType,
    description: Option<String>,
) -> anyhow::Result<Option<TransactionDraft>> {
    let (category_id, amount) = match (category_id, amount) {
        (Some(category_id), Some(amount)) => (category_id, amount),
        _ => return Ok(None),
    };
    let amount = Decimal::from_str(amount.trim())
        .with_context(|| format!("Invalid amount '{}'", amount))?;
    Ok(Some(TransactionDraft {
        category_id,
        transaction_type,
        amount,
        transaction_date: today(),
        description,
    }))
}

pub async fn onboard(
    ctx: &AppContext,
    account_name: String,
    currency: String,
    draft: Option<TransactionDraft>,
    force: bool,
) -> anyhow::Result<()> {
    require_login(ctx)?;
    let gate = OnboardingGate::new();
    if !gate.should_show(ctx.client.as_ref()).await? && !force {
        println!("You already have accounts; pass --force to run the wizard anyway.");
        return Ok(());
    }

    let mut wizard = Wizard::new();
    wizard.next();
    if let Err(e) = wizard
        .submit_account(ctx.client.as_ref(), NewAccount::new(account_name, currency))
        .await
    {
        bail!("{} ({})", wizard.error().unwrap_or("errors.unexpected"), e);
    }

    match draft {
        Some(draft) => {
            if let Err(e) = wizard.submit_transaction(ctx.client.as_ref(), draft).await {
                bail!("{} ({})", wizard.error().unwrap_or("errors.unexpected"), e);
            }
        }
        None => {
            wizard.skip_transaction();
        }
    }

    for step in wizard.steps() {
        let mark = if step.completed || wizard.current_step().index() == step.id {
            "x"
        } else {
            " "
        };
        println!("[{}] {}", mark, step.title_key);
    }
    let summary = wizard.summary();
    println!(
        "Account: {}",
        summary.account_name.as_deref().unwrap_or("-")
    );
    println!(
        "First transaction: {}",
        if summary.has_transaction { "recorded" } else { "skipped" }
    );
    Ok(())
}
