use recipebook_client::{
    Command, DEFAULT_URL, FormMode, RecipeClient, Session, command::HELP, view,
};
use std::env;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let base_url = env::var("RECIPEBOOK_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    println!("Connected to {}", base_url);
    println!("{}", HELP);

    let mut session = Session::new(RecipeClient::new(base_url));
    show(&mut session).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(&session);
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Failed to read stdin: {}", e);
                break;
            }
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(recipebook_client::ParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        execute(&mut session, command).await;
    }
}

async fn execute(session: &mut Session, command: Command) {
    let result = match command {
        Command::List => {
            show(session).await;
            return;
        }
        Command::Help => {
            println!("{}", HELP);
            return;
        }
        Command::Quit => return,
        Command::Edit(id) => {
            if session.start_edit(id) {
                let fields = session.form().fields();
                println!(
                    "Editing [{}] {} | {} | {}",
                    id, fields.name, fields.ingredients, fields.instructions
                );
            } else {
                println!("No recipe with id {} (try `list`)", id);
            }
            return;
        }
        Command::Cancel => {
            session.cancel_edit();
            return;
        }
        Command::Submit(fields) => session.submit(fields).await,
        Command::Delete(id) => session.delete_recipe(id).await,
        Command::NewCollection(name) => session.create_collection(&name).await,
        Command::DeleteCollection(id) => session.delete_collection(id).await,
        Command::Link { recipe, collection } => session.link(&recipe, &collection).await,
    };

    // Gli errori di rete vengono solo loggati
    match result {
        Ok(message) => {
            println!("{}", message);
            print_snapshot(session);
        }
        Err(e) => warn!("Request failed: {}", e),
    }
}

async fn show(session: &mut Session) {
    match session.refresh().await {
        Ok(_) => print_snapshot(session),
        Err(e) => warn!("Failed to fetch lists: {}", e),
    }
}

fn print_snapshot(session: &Session) {
    let snapshot = session.snapshot();
    print!("{}", view::render_recipes(&snapshot.recipes));
    print!("{}", view::render_collections(&snapshot.collections));
}

fn prompt(session: &Session) {
    match session.form().mode() {
        FormMode::Create => print!("recipebook> "),
        FormMode::Editing(id) => print!("recipebook (editing {})> ", id),
    }
    let _ = std::io::stdout().flush();
}
