use elasticemail_rs::api::{DateRange, Page};
use elasticemail_rs::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = Client::from_env()?;

    // Several independent reads, issued concurrently on the same client.
    let (account, overview, domains, tokens) = tokio::try_join!(
        client.account().load(),
        client.account().overview(),
        client.domain().list(),
        client.access_token().list(),
    )?;

    println!("--- Account ---");
    println!("Email:        {:?}", account.email);
    println!("Public ID:    {:?}", account.public_account_id);
    println!("Credits:      {:?}", account.email_credits);

    println!("\n--- Overview ---");
    println!("Sent:         {:?}", overview.total_emails_sent);
    println!("Contacts:     {:?}", overview.contact_count);

    println!("\n--- Domains ({}) ---", domains.len());
    for domain in &domains {
        println!("  {:?} (default: {:?})", domain.domain, domain.default_domain);
    }

    println!("\n--- Access tokens ({}) ---", tokens.len());
    for token in &tokens {
        println!("  {:?} last used {:?}", token.name, token.last_use);
    }

    let summary = client
        .log()
        .summary(DateRange::default(), None, None, None)
        .await?;
    if let Some(status) = summary.log_status_summary {
        println!("\n--- Log summary ---");
        println!("Recipients:   {:?}", status.recipients);
        println!("Delivered:    {:?}", status.delivered);
    }

    let channels = client.channel().list(Page::new(10, 0)).await?;
    println!("\n--- Channels ---");
    for channel in &channels {
        println!("  {:?}", channel.name);
    }
    Ok(())
}
