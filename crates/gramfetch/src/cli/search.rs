use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use prettytable::row;

use super::account_flags;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Free text to search accounts by
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Searching accounts for {:?}...", options.query);
    }

    let accounts = global
        .client()?
        .search_users(&options.query)
        .await
        .wrap_err_with(|| f!("Failed to search for {:?}", options.query))?;

    if options.json {
        return print_json(&accounts);
    }

    println!("Found {} account(s):\n", accounts.len());

    if accounts.is_empty() {
        println!("{}", "No accounts found.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(row!["Username", "Name", "Followers", "Flags"]);

    for account in &accounts {
        table.add_row(row![
            f!("@{}", account.username),
            account.full_name.as_deref().unwrap_or(""),
            account
                .followed_by
                .map(|c| c.to_string())
                .unwrap_or_default(),
            account_flags(account)
        ]);
    }

    table.printstd();

    Ok(())
}
