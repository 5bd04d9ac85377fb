use clap::{Parser, Subcommand};
use deluge_ls::analysis::{CompletionOptions, completion_items};
use deluge_ls::catalog::{list_services, lookup_hover};
use deluge_ls::lsp::DelugeLs;
use tokio::io::{stdin, stdout};
use tower_lsp_server::{LspService, Server};

/// A Language Server Protocol (LSP) server for Zoho Deluge scripts
#[derive(Parser)]
#[command(name = "deluge-ls")]
#[command(version)]
#[command(about = "A Language Server Protocol (LSP) server for Zoho Deluge scripts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the services suggested after `zoho.`
    Services,
    /// Print completion labels for the text left of the cursor
    Complete {
        /// Line text up to the cursor (e.g., "resp = zoho.crm.")
        line_prefix: String,
    },
    /// Print the hover documentation for a word
    Hover {
        /// The word under the cursor (e.g., getRecords)
        word: String,
    },
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Services) => {
            for descriptor in list_services() {
                println!("{}\t{}", descriptor.identifier(), descriptor.display_label);
            }
        }
        Some(Commands::Complete { line_prefix }) => {
            let items = completion_items(&line_prefix, CompletionOptions::default())
                .unwrap_or_default();
            for item in items {
                println!("{}", item.label);
            }
        }
        Some(Commands::Hover { word }) => match lookup_hover(&word) {
            Some(doc) => println!("{}", doc),
            None => {
                eprintln!("No documentation for '{}'", word);
                std::process::exit(1);
            }
        },
        None => {
            log::info!(target: "deluge_ls::server", "Starting deluge-ls on stdio");
            let stdin = stdin();
            let stdout = stdout();

            let (service, socket) = LspService::new(DelugeLs::new);
            Server::new(stdin, stdout, socket).serve(service).await;
        }
    }
}
