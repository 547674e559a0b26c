//! Console rendering of receipts, balances, history and account lists

use std::fmt::Write;

use shared::{format_money, Account, AccountBalance, TransactionRecord, TransferResponse};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn receipt(response: &TransferResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule());
    let _ = writeln!(out, "TRANSFER SUCCESSFUL");
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Transaction ID:    {}", response.transaction_id);
    let _ = writeln!(out, "Status:            {}", response.status);
    let _ = writeln!(out, "From Account:      {}", response.from_account);
    let _ = writeln!(out, "To Account:        {}", response.to_account);
    let _ = writeln!(out, "Amount:            {}", format_money(response.amount));
    let _ = writeln!(out, "Timestamp:         {}", response.timestamp);
    if let Some(message) = &response.message {
        let _ = writeln!(out, "Message:           {}", message);
    }
    if let Some(points) = &response.bonus_points {
        let _ = writeln!(out, "Bonus Points:      {}", points);
    }
    if let Some(level) = &response.permission_level {
        let _ = writeln!(out, "Permission Level:  {}", level);
    }
    if let Some(balance) = response.new_from_balance {
        let _ = writeln!(out, "New From Balance:  {}", format_money(balance));
    }
    if let Some(balance) = response.new_to_balance {
        let _ = writeln!(out, "New To Balance:    {}", format_money(balance));
    }
    let _ = writeln!(out, "{}", rule());
    out
}

pub fn balances(from: &AccountBalance, to: &AccountBalance) -> String {
    format!(
        "\nAccount Balances:\n  From ({}): {}\n  To   ({}): {}\n",
        from.account_number,
        format_money(from.balance),
        to.account_number,
        format_money(to.balance),
    )
}

pub fn history(records: &[TransactionRecord], account: Option<&str>, limit: usize) -> String {
    if records.is_empty() {
        return "\nNo transaction history found\n".to_string();
    }

    let mut out = String::new();
    let heading = match account {
        Some(account) => format!("Transaction History for {}", account),
        None => "Transaction History".to_string(),
    };
    let _ = writeln!(out, "\n{}\n{}\n{}", rule(), heading, rule());

    for (i, record) in records.iter().take(limit).enumerate() {
        let timestamp: String = record
            .timestamp
            .as_deref()
            .unwrap_or("N/A")
            .chars()
            .take(19)
            .collect();
        let _ = writeln!(out, "{:2}. {}", i + 1, timestamp);
        let _ = writeln!(out, "    Transaction ID: {}", record.transaction_id.as_deref().unwrap_or("N/A"));
        let _ = writeln!(out, "    Type: {}", record.kind.as_deref().unwrap_or("N/A"));
        let _ = writeln!(out, "    Amount: {}", format_money(record.amount));
        let _ = writeln!(out, "    Status: {}", record.status.as_deref().unwrap_or("N/A"));
        if let Some(from) = &record.from_account {
            let _ = writeln!(
                out,
                "    From: {} → To: {}",
                from,
                record.to_account.as_deref().unwrap_or("N/A")
            );
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{}", rule());
    out
}

pub fn accounts(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "\nNo accounts found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n{}\nAccounts\n{}", rule(), rule());
    for account in accounts {
        let balance = account
            .balance()
            .map(format_money)
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(
            out,
            "  {:<12} {:>14}  {}",
            account.account_number(),
            balance,
            account.status().unwrap_or("N/A")
        );
    }
    let _ = writeln!(out, "{}", rule());
    out
}
