use anyhow::Result;
use clap::Parser;
use userfetch_lib::userfetch_api::Client;
use userfetch_lib::{
    ConnectivityProbe, ConsoleToast, FixedProbe, GlobalErrorHandler, Notify, SystemProbe,
    ToastOptions,
};

/// Demo of centralized HTTP error handling: fetches users from a
/// deliberately misspelled endpoint and routes the failure through a
/// global handler that classifies it and raises a toast.
#[derive(Parser)]
#[command(name = "userfetch")]
#[command(about = "Fetch users and demonstrate centralized error handling")]
struct Cli {
    /// Base URL of the users API.
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com")]
    base_url: String,

    /// Call the correct /users endpoint instead of the misspelled one.
    #[arg(long)]
    correct: bool,

    /// Pretend the device is offline when classifying errors.
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let client = Client::with_base_url(&cli.base_url);
    let probe: Box<dyn ConnectivityProbe + Send + Sync> = if cli.offline {
        Box::new(FixedProbe(false))
    } else {
        Box::new(SystemProbe::new())
    };
    let handler = GlobalErrorHandler::new(probe, || {
        Box::new(ConsoleToast::new(ToastOptions::default())) as Box<dyn Notify>
    });

    let result = if cli.correct {
        client.get_users_correct().await
    } else {
        client.get_users().await
    };

    match result {
        Ok(users) => {
            println!("Fetched {} users:", users.len());
            for user in &users {
                println!("  {} <{}>", user.name, user.email);
            }
        }
        // Anything not recovered along the way terminates at the global
        // handler, which classifies it and shows a single toast.
        Err(err) => handler.handle(&err),
    }

    Ok(())
}
