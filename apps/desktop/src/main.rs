use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{DraftField, HttpUserDirectory, ListState, Mode, UserListClient};
use shared::domain::UserId;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

mod config;

use config::load_settings;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the user collection; overrides directory.toml and env.
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.server_url {
        settings.server_url = url;
    }

    let directory = HttpUserDirectory::new(&settings.server_url)?;
    let mut client = UserListClient::new(Arc::new(directory));

    println!("User directory at {}", settings.server_url);
    println!("Loading...");
    if let Err(err) = client.load().await {
        eprintln!("could not load users: {err}");
    }
    render(client.state());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if !dispatch(&mut client, line.trim()).await {
            break;
        }
    }

    Ok(())
}

/// Runs one command against the controller. Returns false on `quit`.
/// Operation failures are printed and otherwise dropped; the controller
/// already guarantees state stayed consistent.
async fn dispatch(client: &mut UserListClient, line: &str) -> bool {
    let mut parts = line.splitn(3, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let arg = parts.next();
    let rest = parts.next();

    let outcome = match command {
        "" => Ok(()),
        "list" => Ok(()),
        "set" => match (arg.and_then(parse_field), rest) {
            (Some(field), Some(value)) => {
                client.set_draft_field(field, value);
                Ok(())
            }
            _ => {
                println!("usage: set <name|email|website> <value>");
                Ok(())
            }
        },
        "add" => client.submit_create().await.map(|id| {
            println!("created user {}", id.0);
        }),
        "edit" => match parse_id(arg) {
            Some(id) => client.begin_edit(id),
            None => {
                println!("usage: edit <id>");
                Ok(())
            }
        },
        "update" => client.submit_update().await,
        "cancel" => {
            client.cancel_edit();
            Ok(())
        }
        "delete" => match parse_id(arg) {
            Some(id) => client.delete_user(id).await,
            None => {
                println!("usage: delete <id>");
                Ok(())
            }
        },
        "help" => {
            print_help();
            Ok(())
        }
        "quit" | "exit" => return false,
        other => {
            println!("unknown command '{other}' (try 'help')");
            Ok(())
        }
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
    }
    render(client.state());
    true
}

fn parse_field(raw: &str) -> Option<DraftField> {
    match raw {
        "name" => Some(DraftField::Name),
        "email" => Some(DraftField::Email),
        "website" => Some(DraftField::Website),
        _ => None,
    }
}

fn parse_id(raw: Option<&str>) -> Option<UserId> {
    raw?.parse::<i64>().ok().map(UserId)
}

fn render(state: &ListState) {
    if state.loading {
        println!("Loading...");
        return;
    }
    if state.users.is_empty() {
        println!("No users found.");
    } else {
        for user in &state.users {
            println!(
                "{:>5}  {} - {} - {}",
                user.id.0, user.name, user.email, user.website
            );
        }
    }
    match state.mode {
        Mode::Editing(id) => println!(
            "[editing {}] name='{}' email='{}' website='{}'",
            id.0, state.draft.name, state.draft.email, state.draft.website
        ),
        Mode::Creating => {
            if state.draft != client_core::FormDraft::default() {
                println!(
                    "[new user] name='{}' email='{}' website='{}'",
                    state.draft.name, state.draft.email, state.draft.website
                );
            }
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                      show the user table");
    println!("  set <field> <value>       fill a draft field (name, email, website)");
    println!("  add                       create a user from the draft");
    println!("  edit <id>                 load a user into the draft");
    println!("  update                    save the draft to the edited user");
    println!("  cancel                    drop the draft and leave edit mode");
    println!("  delete <id>               remove a user");
    println!("  quit                      exit");
}
