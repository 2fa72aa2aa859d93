//! desk-runner: headless front end for the customer risk review desk.
//!
//! Usage:
//!   desk-runner [--data portfolio.json] [--query miami] [--show 3]
//!   desk-runner --ipc-mode
//!   desk-runner --synthesize 50 --seed 42 --out portfolio.json

use anyhow::Result;
use riskportal_core::{
    customer::{Customer, FactorImpact},
    dataset,
    desk::DeskSession,
    generator::PortfolioGenerator,
    query::PortfolioStats,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Query {
        text: String,
    },
    Select {
        customer_id: Option<String>,
    },
    Upload {
        path: String,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    query: String,
    stats: PortfolioStats,
    selected: Option<Customer>,
    customers: Vec<Customer>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data = flag_value(&args, "--data");
    let query = flag_value(&args, "--query");
    let show = flag_value(&args, "--show");

    if let Some(count) = flag_value(&args, "--synthesize") {
        let count: usize = count.parse()?;
        let seed = parse_arg(&args, "--seed", 42u64);
        let out = flag_value(&args, "--out");
        return synthesize(count, seed, out.as_deref());
    }

    let mut session = match data {
        Some(path) => DeskSession::new(dataset::load_portfolio(Path::new(&path))?),
        None => DeskSession::with_default_portfolio()?,
    };
    if let Some(text) = query {
        session.set_query(text);
    }

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else if let Some(id) = show {
        session.select(Some(id.as_str()));
        match session.selected() {
            Some(customer) => print_customer_detail(customer),
            None => println!("customer {id} not found"),
        }
    } else {
        print_summary(&session);
    }

    Ok(())
}

fn run_ipc_loop(session: &mut DeskSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                let state = build_ui_state(session);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::Query { text } => {
                session.set_query(text);
                let state = build_ui_state(session);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::Select { customer_id } => {
                session.select(customer_id.as_deref());
                let state = build_ui_state(session);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::Upload { path } => {
                match apply_upload(session, &path) {
                    Ok(()) => {
                        let state = build_ui_state(session);
                        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
                    }
                    Err(e) => {
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        writeln!(stdout, "{}", err_json)?;
                    }
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Read the file and hand it to the session. Any failure leaves the
/// session untouched and is reported once on the IPC channel.
fn apply_upload(session: &mut DeskSession, path: &str) -> Result<()> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        log::warn!("cannot read {path}: {e}");
        e
    })?;
    session.replace_portfolio(&text)?;
    Ok(())
}

fn build_ui_state(session: &DeskSession) -> UiState {
    UiState {
        query: session.query().to_string(),
        stats: session.stats(),
        selected: session.selected().cloned(),
        customers: session.visible().into_iter().cloned().collect(),
    }
}

fn print_summary(session: &DeskSession) {
    let stats = session.stats();

    println!("=== PORTFOLIO SUMMARY ===");
    println!("  customers:      {}", stats.total_customers);
    println!("  high risk:      {}", stats.risk_counts.high);
    println!("  medium risk:    {}", stats.risk_counts.medium);
    println!("  low risk:       {}", stats.risk_counts.low);
    println!("  aml alerts:     {}", stats.total_aml_alerts);
    println!("  total balance:  {}", format_currency(stats.total_balance));

    println!();
    if session.query().is_empty() {
        println!("=== CUSTOMERS ===");
    } else {
        println!("=== CUSTOMERS MATCHING {:?} ===", session.query());
    }
    for customer in session.visible() {
        let flags = if customer.aml_flags.is_empty() {
            "clean".to_string()
        } else {
            format!("{} alerts", customer.aml_flags.len())
        };
        println!(
            "  {:<10} {:<24} {:<20} {:<8} {:>5} {:>14} {:<10} {}",
            customer.id,
            customer.name,
            customer.city,
            customer.risk_rating.as_str(),
            customer.credit_score,
            format_currency(customer.account_balance),
            flags,
            display_date(&customer.last_activity, customer.last_activity_parsed()),
        );
    }
}

fn print_customer_detail(customer: &Customer) {
    println!("=== CUSTOMER {} ===", customer.id);
    println!("  name:           {}", customer.name);
    println!("  city:           {}", customer.city);
    println!("  risk rating:    {}", customer.risk_rating.as_str().to_uppercase());
    println!("  credit score:   {}", customer.credit_score);
    println!("  balance:        {}", format_currency(customer.account_balance));
    println!("  txn volume:     {}", format_currency(customer.transaction_volume));
    println!(
        "  joined:         {}",
        display_date(&customer.join_date, customer.join_date_parsed())
    );
    println!(
        "  last activity:  {}",
        display_date(&customer.last_activity, customer.last_activity_parsed())
    );

    println!();
    println!("=== AML FLAGS ({}) ===", customer.aml_flags.len());
    let flags = customer.flag_details();
    if flags.is_empty() {
        println!("  (clean)");
    }
    for flag in &flags {
        println!(
            "  [{:<6}] {:<24} {} (detected {})",
            flag.severity.as_str(),
            flag.flag_type.as_str(),
            flag.description,
            flag.date_detected,
        );
    }
    let unrecognized = customer.aml_flags.len() - flags.len();
    if unrecognized > 0 {
        println!("  ({unrecognized} entries in an unrecognized shape)");
    }

    println!();
    println!("=== RISK FACTORS ({}) ===", customer.risk_factors.len());
    for factor in customer.factor_details() {
        let sign = match factor.impact {
            FactorImpact::Positive => '+',
            FactorImpact::Negative => '-',
        };
        println!(
            "  [{sign}] {:<20} weight {:.1}  {}",
            factor.category.as_str(),
            factor.weight,
            factor.description,
        );
    }
}

fn synthesize(count: usize, seed: u64, out: Option<&str>) -> Result<()> {
    let customers = PortfolioGenerator::generate(seed, count);
    let json = serde_json::to_string_pretty(&customers)?;
    match out {
        Some(path) => {
            std::fs::write(path, &json)?;
            log::info!("wrote {count} synthetic customers (seed {seed}) to {path}");
            println!("wrote {count} customers to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Render a stored date string as a calendar date when it parses, or
/// fall back to the raw text.
fn display_date(raw: &str, parsed: Option<chrono::NaiveDate>) -> String {
    parsed
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Whole-dollar currency with thousands separators, matching the way the
/// portfolio table renders balances.
fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
