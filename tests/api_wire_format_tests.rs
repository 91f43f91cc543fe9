//! Wire format of the resource wrappers: endpoint paths, parameter names and
//! payload decoding, checked against a mock transport.

mod common;

use chrono::NaiveDate;
use common::{MockTransport, RecordedPart, TEST_API_KEY, mock_client};
use elasticemail_rs::api::{
    ContactOptions, ContactUpdate, ContactUploadOptions, DateRange, EmailMessage, ExportOptions,
    FileRef, FileUploadOptions, JobStatusFilter, ListRule, LogFilter, Page, SubAccountOptions,
    TemplateContent, WebhookNotifications,
};
use elasticemail_rs::models::Campaign;
use elasticemail_rs::types::{
    CampaignStatus, CompressionFormat, ContactSort, ContactStatus, CreditType, ExportFileFormats,
    ExportStatus, IntervalType, LogJobStatus, TrackingType,
};
use elasticemail_rs::{AccessLevel, Error, SubAccountRef};
use serde_json::json;
use std::collections::BTreeMap;

// =============================================================================
// Access Tokens
// =============================================================================

#[tokio::test]
async fn test_access_token_add() {
    let mock = MockTransport::new();
    mock.push_data(json!("5A1B-TOKEN"));
    let client = mock_client(&mock);

    let token = client
        .access_token()
        .add("deploy", AccessLevel::VIEW_ACCOUNT | AccessLevel::SEND_HTTP)
        .await
        .unwrap();

    assert_eq!(token, "5A1B-TOKEN");
    let sent = mock.single_request();
    assert_eq!(sent.target(), "accesstoken/add");
    assert_eq!(sent.param("tokenName").as_deref(), Some("deploy"));
    let level: u64 = sent.param("accessLevel").unwrap().parse().unwrap();
    assert_eq!(
        level,
        (AccessLevel::VIEW_ACCOUNT | AccessLevel::SEND_HTTP).bits()
    );
}

#[tokio::test]
async fn test_access_token_list_and_update() {
    let mock = MockTransport::new();
    mock.push_data(json!([
        {"Name": "deploy", "AccessLevel": 6, "LastUse": "2024-03-01T10:00:00"},
        {"Name": "ci", "AccessLevel": 2}
    ]));
    let client = mock_client(&mock);

    let tokens = client.access_token().list().await.unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].name.as_deref(), Some("deploy"));

    client
        .access_token()
        .update("ci", AccessLevel::NONE, Some("ci-readonly"))
        .await
        .unwrap();
    let sent = &mock.requests()[1];
    assert_eq!(sent.target(), "accesstoken/update");
    assert_eq!(sent.param("tokenNameNew").as_deref(), Some("ci-readonly"));
}

// =============================================================================
// Account
// =============================================================================

#[tokio::test]
async fn test_account_load_decodes_dto() {
    let mock = MockTransport::new();
    mock.push_data(json!({
        "PublicAccountID": "abc-123",
        "Email": "owner@example.com",
        "EmailCredits": 500,
        "DateCreated": "2019-05-04T08:15:00"
    }));
    let client = mock_client(&mock);

    let account = client.account().load().await.unwrap();
    assert_eq!(account.public_account_id.as_deref(), Some("abc-123"));
    assert_eq!(account.email.as_deref(), Some("owner@example.com"));
    assert_eq!(account.email_credits, Some(500));
    assert_eq!(mock.single_request().target(), "account/load");
}

#[tokio::test]
async fn test_account_add_sub_account() {
    let mock = MockTransport::new();
    mock.push_data(json!("SUB-API-KEY"));
    let client = mock_client(&mock);

    let options = SubAccountOptions {
        requires_email_credits: Some(true),
        daily_send_limit: Some(1000),
        ..Default::default()
    };
    let key = client
        .account()
        .add_sub_account("sub@example.com", "s3cret!", "s3cret!", &options)
        .await
        .unwrap();

    assert_eq!(key, "SUB-API-KEY");
    let sent = mock.single_request();
    assert_eq!(sent.target(), "account/addsubaccount");
    let names: Vec<_> = sent.form().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        names,
        vec![
            "email",
            "password",
            "confirmPassword",
            "requiresEmailCredits",
            "dailySendLimit",
            "apikey"
        ]
    );
}

#[tokio::test]
async fn test_account_sub_account_reference() {
    let mock = MockTransport::new();
    let client = mock_client(&mock);

    client
        .account()
        .delete_sub_account(&SubAccountRef::email("sub@example.com"))
        .await
        .unwrap();
    client
        .account()
        .add_sub_account_credits(
            250,
            "monthly top-up",
            Some(CreditType::Email),
            Some(&SubAccountRef::public_account_id("pub-42")),
        )
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].target(), "account/deletesubaccount");
    assert_eq!(
        requests[0].param("subAccountEmail").as_deref(),
        Some("sub@example.com")
    );
    assert_eq!(requests[0].param("publicAccountID"), None);

    assert_eq!(requests[1].target(), "account/addsubaccountcredits");
    assert_eq!(requests[1].param("credits").as_deref(), Some("250"));
    assert_eq!(requests[1].param("creditType").as_deref(), Some("9"));
    assert_eq!(requests[1].param("publicAccountID").as_deref(), Some("pub-42"));
    assert_eq!(requests[1].param("subAccountEmail"), None);
}

#[tokio::test]
async fn test_account_webhook_and_usage() {
    let mock = MockTransport::new();
    mock.push_data(json!("wh-1"));
    mock.push_data(json!([]));
    let client = mock_client(&mock);

    let id = client
        .account()
        .add_webhook(
            "https://hooks.example.com/ee",
            "main",
            WebhookNotifications {
                sent: Some(true),
                error: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(id, "wh-1");

    let from = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 1, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    let usage = client
        .account()
        .load_usage(DateRange::between(from, to), false)
        .await
        .unwrap();
    assert!(usage.is_empty());

    let requests = mock.requests();
    assert_eq!(
        requests[0].param("notificationForSent").as_deref(),
        Some("true")
    );
    assert_eq!(requests[0].param("notificationForOpened"), None);
    assert_eq!(requests[1].target(), "account/loadusage");
    assert_eq!(requests[1].param("from").as_deref(), Some("2024-01-01T00:00:00"));
    assert_eq!(requests[1].param("to").as_deref(), Some("2024-01-31T23:59:59"));
    assert_eq!(
        requests[1].param("loadSubaccountsUsage").as_deref(),
        Some("false")
    );
}

#[tokio::test]
async fn test_completion_only_endpoint_accepts_payload() {
    let mock = MockTransport::new();
    mock.push_data(json!("ok"));
    let client = mock_client(&mock);

    client
        .account()
        .request_private_ip(2, "dedicated pool")
        .await
        .unwrap();
    assert_eq!(mock.single_request().param("count").as_deref(), Some("2"));
}

// =============================================================================
// Campaigns and Channels
// =============================================================================

#[tokio::test]
async fn test_campaign_add_sends_json() {
    let mock = MockTransport::new();
    mock.push_data(json!(77));
    let client = mock_client(&mock);

    let campaign = Campaign {
        name: Some("Spring".to_string()),
        status: Some(CampaignStatus::Draft),
        targets: Some(vec!["Newsletter".to_string()]),
        ..Default::default()
    };
    let id = client.campaign().add(&campaign).await.unwrap();

    assert_eq!(id, 77);
    let sent = mock.single_request();
    assert_eq!(sent.target(), "campaign/add");
    let body: serde_json::Value = serde_json::from_str(&sent.param("campaign").unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"Name": "Spring", "Status": 6, "Targets": ["Newsletter"]})
    );
}

#[tokio::test]
async fn test_campaign_export_and_channel_export() {
    let mock = MockTransport::new();
    mock.push_data(json!({"Link": "https://files.example.com/c.zip", "PublicExportID": "e1"}));
    mock.push_data(json!({"Link": "https://files.example.com/ch.csv"}));
    let client = mock_client(&mock);

    let options = ExportOptions {
        file_format: Some(ExportFileFormats::Csv),
        compression_format: Some(CompressionFormat::Zip),
        file_name: None,
    };
    let link = client.campaign().export(&[3, 5], &options).await.unwrap();
    assert_eq!(link.public_export_id.as_deref(), Some("e1"));
    client
        .channel()
        .export(&["alpha", "beta"], &ExportOptions::default())
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].param("channelIDs").as_deref(), Some("3;5"));
    assert_eq!(requests[0].param("fileFormat").as_deref(), Some("1"));
    assert_eq!(requests[0].param("compressionFormat").as_deref(), Some("1"));
    assert_eq!(requests[1].target(), "channel/export");
    assert_eq!(requests[1].param("channelNames").as_deref(), Some("alpha;beta"));
    assert_eq!(requests[1].param("fileFormat"), None);
}

#[tokio::test]
async fn test_campaign_list_without_data_is_missing_payload() {
    let mock = MockTransport::new();
    mock.push_json(json!({"success": true}));
    let client = mock_client(&mock);

    let err = client
        .campaign()
        .list(Some("spring"), None, Some(10))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingPayload(_)), "got {err:?}");
}

// =============================================================================
// Contacts
// =============================================================================

#[tokio::test]
async fn test_contact_add_with_fields_and_lists() {
    let mock = MockTransport::new();
    mock.push_data(json!("contact-public-id"));
    let client = mock_client(&mock);

    let options = ContactOptions {
        list_names: vec!["Newsletter".to_string(), "Beta".to_string()],
        first_name: Some("Ada".to_string()),
        fields: BTreeMap::from([
            ("city".to_string(), "London".to_string()),
            ("plan".to_string(), "pro".to_string()),
        ]),
        ..Default::default()
    };
    client
        .contact()
        .add("pub-1", "ada@example.com", &options)
        .await
        .unwrap();

    let sent = mock.single_request();
    assert_eq!(sent.target(), "contact/add");
    assert_eq!(sent.param("publicAccountID").as_deref(), Some("pub-1"));
    assert_eq!(sent.param("listName").as_deref(), Some("Newsletter;Beta"));
    assert_eq!(sent.param("field_city").as_deref(), Some("London"));
    assert_eq!(sent.param("field_plan").as_deref(), Some("pro"));
    assert_eq!(sent.param("publicListID"), None);
}

#[tokio::test]
async fn test_contact_bulk_operations() {
    let mock = MockTransport::new();
    mock.push_data(json!({"Active": 10, "Bounced": 2}));
    mock.push_data(json!([{"Email": "x@example.com", "Status": 1}]));
    let client = mock_client(&mock);

    let counts = client
        .contact()
        .count_by_status(Some("Status = Active"))
        .await
        .unwrap();
    assert_eq!(counts.active, Some(10));

    let blocked = client
        .contact()
        .load_blocked(
            &[ContactStatus::Bounced, ContactStatus::Unsubscribed],
            None,
            Page::new(20, 40),
        )
        .await
        .unwrap();
    assert_eq!(blocked[0].status, Some(ContactStatus::Bounced));

    client
        .contact()
        .change_status(ContactStatus::Inactive, None, &["a@example.com", "b@example.com"])
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].param("rule").as_deref(), Some("Status = Active"));
    assert_eq!(requests[1].param("statuses").as_deref(), Some("1;2"));
    assert_eq!(requests[1].param("limit").as_deref(), Some("20"));
    assert_eq!(requests[1].param("offset").as_deref(), Some("40"));
    assert_eq!(requests[2].target(), "contact/changestatus");
    assert_eq!(requests[2].param("status").as_deref(), Some("4"));
    assert_eq!(
        requests[2].param("emails").as_deref(),
        Some("a@example.com;b@example.com")
    );
}

#[tokio::test]
async fn test_contact_list_and_update() {
    let mock = MockTransport::new();
    mock.push_data(json!([]));
    mock.push_data(json!({"Email": "ada@example.com", "FirstName": "Ada"}));
    let client = mock_client(&mock);

    client
        .contact()
        .list(None, Page::default(), Some(ContactSort::DateAddedDesc))
        .await
        .unwrap();
    let update = ContactUpdate {
        last_name: Some("Lovelace".to_string()),
        clear_rest_of_fields: Some(false),
        fields: BTreeMap::from([("city".to_string(), "Paris".to_string())]),
        ..Default::default()
    };
    let contact = client
        .contact()
        .update("ada@example.com", &update)
        .await
        .unwrap();
    assert_eq!(contact.first_name.as_deref(), Some("Ada"));

    let requests = mock.requests();
    assert_eq!(
        requests[0].form(),
        vec![
            ("sort".to_string(), "2".to_string()),
            ("apikey".to_string(), TEST_API_KEY.to_string()),
        ]
    );
    assert_eq!(requests[1].param("clearRestOfFields").as_deref(), Some("false"));
    assert_eq!(requests[1].param("field_city").as_deref(), Some("Paris"));
}

#[tokio::test]
async fn test_contact_upload_is_multipart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.csv");
    std::fs::write(&path, "email\nada@example.com\n").unwrap();

    let mock = MockTransport::new();
    mock.push_data(json!(1));
    let client = mock_client(&mock);

    let options = ContactUploadOptions {
        list_name: Some("Imported".to_string()),
        status: Some(ContactStatus::Active),
        ..Default::default()
    };
    let imported = client.contact().upload(&path, &options).await.unwrap();

    assert_eq!(imported, 1);
    let sent = mock.single_request();
    assert_eq!(sent.target(), "contact/upload");
    assert_eq!(
        sent.part_names(),
        vec!["file_0", "listName", "status", "apikey"]
    );
    assert!(matches!(
        &sent.parts()[0],
        RecordedPart::File { file_name, .. } if file_name == "contacts.csv"
    ));
}

// =============================================================================
// Domains and Email
// =============================================================================

#[tokio::test]
async fn test_domain_calls() {
    let mock = MockTransport::new();
    mock.push_json(json!({"success": true}));
    mock.push_data(json!({"IsValid": true, "Log": "SPF record found"}));
    let client = mock_client(&mock);

    client
        .domain()
        .add("mail.example.com", Some(TrackingType::LetsEncryptCert), true)
        .await
        .unwrap();
    let spf = client.domain().verify_spf("mail.example.com").await.unwrap();
    assert_eq!(spf.is_valid, Some(true));

    let requests = mock.requests();
    assert_eq!(requests[0].param("trackingType").as_deref(), Some("3"));
    assert_eq!(requests[0].param("setAsDefault").as_deref(), Some("true"));
    assert_eq!(requests[1].target(), "domain/verifyspf");
}

#[tokio::test]
async fn test_email_send_form() {
    let mock = MockTransport::new();
    mock.push_data(json!({"TransactionID": "tx-1", "MessageID": "msg-1"}));
    let client = mock_client(&mock);

    let message = EmailMessage {
        subject: Some("Hello".to_string()),
        from: Some("team@example.com".to_string()),
        to: vec!["a@example.com".to_string(), "b@example.com".to_string()],
        body_html: Some("<p>Hi {firstname}</p>".to_string()),
        is_transactional: Some(true),
        ..Default::default()
    }
    .header("X-Campaign", "spring")
    .merge("firstname", "Ada");

    let sent = client.email().send(&message).await.unwrap();
    assert_eq!(sent.transaction_id.as_deref(), Some("tx-1"));

    let request = mock.single_request();
    assert_eq!(request.target(), "email/send");
    assert_eq!(request.param("to").as_deref(), Some("a@example.com;b@example.com"));
    assert_eq!(
        request.param("headers_X-Campaign").as_deref(),
        Some("X-Campaign: spring")
    );
    assert_eq!(request.param("merge_firstname").as_deref(), Some("Ada"));
    assert_eq!(request.param("isTransactional").as_deref(), Some("true"));
    assert!(request.parts().is_empty());
}

#[tokio::test]
async fn test_email_send_with_attachment_is_multipart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoice.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();

    let mock = MockTransport::new();
    mock.push_data(json!({"TransactionID": "tx-2"}));
    let client = mock_client(&mock);

    let message = EmailMessage {
        subject: Some("Invoice".to_string()),
        to: vec!["a@example.com".to_string()],
        ..Default::default()
    }
    .attach(&path);
    client.email().send(&message).await.unwrap();

    let request = mock.single_request();
    assert_eq!(request.part_names(), vec!["file_0", "subject", "to", "apikey"]);
    match &request.parts()[0] {
        RecordedPart::File {
            file_name, content, ..
        } => {
            assert_eq!(file_name, "invoice.pdf");
            assert_eq!(content, b"%PDF-1.4");
        }
        other => panic!("expected file part, got {other:?}"),
    }
}

#[tokio::test]
async fn test_email_get_status_sends_every_flag() {
    let mock = MockTransport::new();
    mock.push_data(json!({"ID": "tx-1", "Status": "Complete", "RecipientsCount": 2}));
    let client = mock_client(&mock);

    let status = client
        .email()
        .get_status("tx-1", JobStatusFilter::all())
        .await
        .unwrap();
    assert_eq!(status.id.as_deref(), Some("tx-1"));

    let sent = mock.single_request();
    assert_eq!(sent.param("transactionID").as_deref(), Some("tx-1"));
    assert_eq!(sent.param("showMessageIDs").as_deref(), Some("true"));
    assert_eq!(sent.form().len(), 12);
}

// =============================================================================
// Exports and Files
// =============================================================================

#[tokio::test]
async fn test_export_check_status_decodes_enum() {
    let mock = MockTransport::new();
    mock.push_data(json!("Ready"));
    let client = mock_client(&mock);

    let status = client.export().check_status("e1").await.unwrap();
    assert_eq!(status, ExportStatus::Ready);
    assert_eq!(
        mock.single_request().param("publicExportID").as_deref(),
        Some("e1")
    );
}

#[tokio::test]
async fn test_file_upload_and_download() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("banner.txt");
    std::fs::write(&path, "hello").unwrap();

    let mock = MockTransport::new();
    mock.push_data(json!({"FileName": "banner.txt", "Size": 5}));
    mock.push_raw(200, "hello");
    mock.push_raw(200, r#"{"success":false,"error":"File not found"}"#);
    let client = mock_client(&mock);

    let options = FileUploadOptions {
        expires_after_days: Some(7),
        ..Default::default()
    };
    let file = client.file().upload(&path, &options).await.unwrap();
    assert_eq!(file.file_name.as_deref(), Some("banner.txt"));

    let bytes = client
        .file()
        .download(&FileRef::Name("banner.txt".to_string()))
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"hello");

    let err = client.file().download(&FileRef::Id(9)).await.unwrap_err();
    assert!(matches!(err, Error::Api(ref m) if m == "File not found"));

    let requests = mock.requests();
    assert_eq!(
        requests[0].part_names(),
        vec!["file_0", "expiresAfterDays", "apikey"]
    );
    assert_eq!(requests[1].param("filename").as_deref(), Some("banner.txt"));
    assert_eq!(requests[2].param("fileID").as_deref(), Some("9"));
}

// =============================================================================
// Lists, Logs, Segments, SMS and Templates
// =============================================================================

#[tokio::test]
async fn test_list_add_with_rule_variants() {
    let mock = MockTransport::new();
    mock.push_data(json!(12));
    let client = mock_client(&mock);

    let id = client
        .list()
        .add("VIP", Some(&ListRule::AllContacts), false, true)
        .await
        .unwrap();
    assert_eq!(id, 12);

    client
        .list()
        .add_contacts(
            "VIP",
            &ListRule::Emails(vec!["a@example.com".to_string()]),
        )
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].param("allContacts").as_deref(), Some("true"));
    assert_eq!(requests[0].param("allowUnsubscribe").as_deref(), Some("true"));
    assert_eq!(requests[1].target(), "list/addcontacts");
    assert_eq!(requests[1].param("emails").as_deref(), Some("a@example.com"));
    assert_eq!(requests[1].param("rule"), None);
}

#[tokio::test]
async fn test_log_load_and_summary() {
    let mock = MockTransport::new();
    mock.push_data(json!({"Recipients": [{"To": "a@example.com", "Status": "Sent"}]}));
    mock.push_data(json!({"LogStatusSummary": {"Recipients": 10, "Delivered": 9}}));
    let client = mock_client(&mock);

    let filter = LogFilter {
        statuses: vec![LogJobStatus::Sent, LogJobStatus::Clicked],
        channel_name: Some("spring".to_string()),
        ..Default::default()
    };
    client.log().load(&filter, Page::new(100, 0)).await.unwrap();
    client
        .log()
        .summary(DateRange::default(), None, Some(IntervalType::Hourly), None)
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].target(), "log/load");
    assert_eq!(requests[0].param("statuses").as_deref(), Some("5;7"));
    assert_eq!(requests[0].param("channelName").as_deref(), Some("spring"));
    assert_eq!(requests[1].param("interval").as_deref(), Some("1"));
}

#[tokio::test]
async fn test_segment_and_sms() {
    let mock = MockTransport::new();
    mock.push_data(json!({"Name": "Engaged", "Rule": "Status = Engaged"}));
    let client = mock_client(&mock);

    let segment = client
        .segment()
        .add("Engaged", "Status = Engaged")
        .await
        .unwrap();
    assert_eq!(segment.name.as_deref(), Some("Engaged"));
    client.sms().send("+15550100", "Your code is 1234").await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].param("segmentName").as_deref(), Some("Engaged"));
    assert_eq!(requests[1].target(), "sms/send");
    assert_eq!(requests[1].param("to").as_deref(), Some("+15550100"));
}

#[tokio::test]
async fn test_template_check_usage_reads_false_envelope() {
    let mock = MockTransport::new();
    mock.push_data(json!(true));
    mock.push_json(json!({"success": true, "data": false}));
    let client = mock_client(&mock);

    assert!(client.template().check_usage(3).await.unwrap());
    assert!(!client.template().check_usage(4).await.unwrap());
    assert_eq!(mock.requests()[1].param("templateID").as_deref(), Some("4"));
}

#[tokio::test]
async fn test_template_add_and_bulk_delete() {
    let mock = MockTransport::new();
    mock.push_data(json!(901));
    let client = mock_client(&mock);

    let content = TemplateContent {
        subject: Some("Welcome".to_string()),
        from_email: Some("team@example.com".to_string()),
        from_name: Some("Team".to_string()),
        body_html: Some("<h1>Hi</h1>".to_string()),
        tags: vec!["onboarding".to_string(), "2024".to_string()],
        ..Default::default()
    };
    let id = client
        .template()
        .add("welcome", &content, None, None)
        .await
        .unwrap();
    assert_eq!(id, 901);
    client.template().delete_bulk(&[1, 2, 3]).await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].param("tags").as_deref(), Some("onboarding;2024"));
    assert_eq!(requests[0].param("templateScope"), None);
    assert_eq!(requests[1].param("templateIDs").as_deref(), Some("1;2;3"));
}
