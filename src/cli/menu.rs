//! Interactive menu driver
//!
//! Dispatches numbered menu choices to the service layer. Domain errors are
//! reported to the user and never terminate the loop; only I/O failures on
//! the prompts themselves propagate. End of input is treated as Exit so the
//! binary behaves when scripted with piped stdin.

use crate::display::format_expense_list;
use crate::error::MoneyMateResult;
use crate::services::{AuthService, Session};
use crate::storage::Storage;

use super::prompt;

const MENU: &str = "\n1. Register\n2. Login\n3. Add Expense\n4. View Expenses\n5. Save Financial Data\n6. Logout\n7. Exit";

/// Run the interactive menu loop until Exit or end of input
///
/// The caller persists the credential store after this returns; that is the
/// normal exit path.
pub fn run_menu(storage: &Storage) -> MoneyMateResult<()> {
    let mut session = Session::new();

    loop {
        println!("{}", MENU);
        let Some(choice) = prompt::read_line("Enter choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => handle_register(storage)?,
            "2" => handle_login(storage, &mut session)?,
            "3" => handle_add_expense(&mut session)?,
            "4" => handle_view_expenses(&session),
            "5" => handle_save(storage, &mut session),
            "6" => handle_logout(storage, &mut session)?,
            "7" => {
                println!("Exiting MoneyMate. Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

fn handle_register(storage: &Storage) -> MoneyMateResult<()> {
    let Some(username) = prompt::read_line("Enter a username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt::read_password("Enter a password: ")? else {
        return Ok(());
    };

    match AuthService::new(storage).register(&username, &password) {
        Ok(()) => println!("User registered successfully."),
        Err(err @ crate::MoneyMateError::DuplicateUser { .. }) => {
            println!("{}. Try again with a different username.", err)
        }
        Err(err) => println!("Registration failed: {}", err),
    }
    Ok(())
}

fn handle_login(storage: &Storage, session: &mut Session) -> MoneyMateResult<()> {
    if session.is_logged_in() {
        println!("A user is already logged in. Please log out first.");
        return Ok(());
    }

    let Some(username) = prompt::read_line("Enter username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt::read_password("Enter password: ")? else {
        return Ok(());
    };

    match session.login(storage, &username, &password) {
        Ok(()) => {
            println!("Login successful.");
            if session.expenses()?.is_empty() {
                println!("No expenses found for this user. Start adding expenses.");
            }
        }
        Err(err) => println!("{}. Try again.", err),
    }
    Ok(())
}

fn handle_add_expense(session: &mut Session) -> MoneyMateResult<()> {
    if !session.is_logged_in() {
        println!("Please log in first.");
        return Ok(());
    }

    let Some(category) = prompt::read_line("Enter expense category: ")? else {
        return Ok(());
    };
    let Some(amount) = prompt::read_line("Enter expense amount: ")? else {
        return Ok(());
    };

    let Ok(amount) = amount.parse::<f64>() else {
        println!("Invalid amount. Expense not added.");
        return Ok(());
    };

    match session.add_expense(&category, amount) {
        Ok(()) => println!("Expense added."),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn handle_view_expenses(session: &Session) {
    match session.expenses() {
        Ok(entries) => {
            let username = session.current_user().unwrap_or_default();
            println!("{}", format_expense_list(username, &entries));
        }
        Err(_) => println!("Please log in first."),
    }
}

fn handle_save(storage: &Storage, session: &mut Session) {
    let Some(username) = session.current_user().map(str::to_string) else {
        println!("Please log in first.");
        return;
    };

    match session.save(storage) {
        Ok(()) => println!(
            "Financial data saved to {}.",
            storage.paths().ledger_file(&username).display()
        ),
        Err(err) => println!("Failed to save financial data: {}", err),
    }
}

fn handle_logout(storage: &Storage, session: &mut Session) -> MoneyMateResult<()> {
    if !session.is_logged_in() {
        println!("No user is logged in.");
        return Ok(());
    }

    if session.has_unsaved_changes() {
        let save = prompt::confirm(
            "You have unsaved changes. Would you like to save them before logging out? (y/n): ",
        )?;
        if save {
            handle_save(storage, session);
        } else {
            println!("Changes were not saved.");
        }
    }

    session.logout()?;
    println!("Logged out.");
    Ok(())
}
