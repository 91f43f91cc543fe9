use elasticemail_rs::api::{EmailMessage, JobStatusFilter};
use elasticemail_rs::{Client, Error};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 1. Client from ELASTICEMAIL_API_KEY (and optionally ELASTICEMAIL_API_URL)
    let client = Client::from_env()?;

    let to = env::var("DEMO_TO").expect("DEMO_TO (recipient address) not set");
    let from = env::var("DEMO_FROM").expect("DEMO_FROM (verified sender) not set");

    // 2. Build the message. Merge fields fill {firstname} per recipient.
    let mut message = EmailMessage {
        subject: Some("Hello from elasticemail-rs".to_string()),
        from: Some(from),
        from_name: Some("elasticemail-rs demo".to_string()),
        to: vec![to.clone()],
        body_html: Some("<p>Hi {firstname}, this came through the v2 API.</p>".to_string()),
        body_text: Some("Hi {firstname}, this came through the v2 API.".to_string()),
        is_transactional: Some(true),
        ..Default::default()
    }
    .merge("firstname", "there")
    .header("X-Demo", "send_email");

    // Optional attachment
    if let Ok(path) = env::var("DEMO_ATTACHMENT") {
        message = message.attach(path);
    }

    // 3. Send and report
    match client.email().send(&message).await {
        Ok(sent) => {
            println!("--- Sent ---");
            println!("Transaction ID: {:?}", sent.transaction_id);
            println!("Message ID:     {:?}", sent.message_id);

            if let Some(transaction_id) = sent.transaction_id {
                let status = client
                    .email()
                    .get_status(&transaction_id, JobStatusFilter::default())
                    .await?;
                println!("Job status:     {:?}", status.status);
            }
        }
        Err(Error::Api(reason)) => {
            eprintln!("The API refused the message: {reason}");
        }
        Err(Error::Attachment { path, source }) => {
            eprintln!("Could not read {}: {source}", path.display());
        }
        Err(e) if e.is_retryable() => {
            eprintln!("Transient failure, try again later: {e}");
        }
        Err(e) => return Err(e.into()),
    }

    println!("\n--- What You'll See with LOUD_WIRE=1 ---");
    println!("  [REQ#1] POST email/send (form, or multipart with an attachment)");
    println!("  [RES#1] {{\"success\": true, \"data\": {{\"TransactionID\": ...}}}}");
    println!("  [REQ#2] POST email/getstatus");
    Ok(())
}
