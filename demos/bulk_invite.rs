//! Sends a personalised invitation to every row of a two-column CSV file
//! (`name,email`).
//!
//! ```sh
//! ELASTICEMAIL_API_KEY=... cargo run --example bulk_invite -- guests.csv events@example.com
//! ```

use elasticemail_rs::Client;
use elasticemail_rs::invite::{Invitation, parse_recipients, send_invitations};
use std::env;
use std::fs::File;
use tracing_subscriber::EnvFilter;

const CONCURRENCY: usize = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = env::args().skip(1);
    let (Some(csv_path), Some(from)) = (args.next(), args.next()) else {
        eprintln!("usage: bulk_invite <recipients.csv> <from-address>");
        std::process::exit(2);
    };

    let client = Client::from_env()?;
    let recipients = parse_recipients(File::open(&csv_path)?)?;
    println!("Loaded {} recipient(s) from {csv_path}", recipients.len());

    let invitation = Invitation::new(
        "{name}, you're invited",
        from,
        "Hi {name},\n\nWe'd love to see you there. This invitation was sent to {email}.",
    )
    .with_from_name("Events Team")
    .with_tracking(true, true);

    let report = send_invitations(&client, &invitation, recipients, CONCURRENCY).await;

    println!("\n--- Report ---");
    for (recipient, sent) in &report.sent {
        println!("  sent    {} ({:?})", recipient.email, sent.transaction_id);
    }
    for (recipient, error) in &report.failed {
        println!("  failed  {}: {error}", recipient.email);
    }

    if !report.is_complete() {
        std::process::exit(1);
    }
    Ok(())
}
