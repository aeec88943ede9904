use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const POST_COLLECTION: &str = "app.bsky.feed.post";

/// Short-lived credentials returned by createSession. One per run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_jwt: String,
    pub did: String,
}

#[derive(Debug, Serialize)]
pub struct PostRecord {
    #[serde(rename = "$type")]
    pub record_type: &'static str,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub langs: Vec<String>,
    pub embed: ExternalEmbed,
}

#[derive(Debug, Serialize)]
pub struct ExternalEmbed {
    #[serde(rename = "$type")]
    pub embed_type: &'static str,
    pub external: ExternalCard,
}

#[derive(Debug, Serialize)]
pub struct ExternalCard {
    pub uri: String,
    pub title: String,
    pub description: String,
    /// Opaque blob reference echoed back by uploadBlob.
    pub thumb: Value,
}

impl PostRecord {
    /// An empty-bodied post carrying an external link card.
    pub fn card(created_at: &str, language: &str, external: ExternalCard) -> Self {
        Self {
            record_type: "app.bsky.feed.post",
            text: String::new(),
            created_at: created_at.to_owned(),
            langs: vec![language.to_owned()],
            embed: ExternalEmbed {
                embed_type: "app.bsky.embed.external",
                external,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadBlobResponse {
    blob: Value,
}

#[derive(Debug, Serialize)]
struct CreateRecordRequest<'a> {
    repo: &'a str,
    collection: &'static str,
    record: &'a PostRecord,
}

pub async fn create_session(
    client: &Client,
    service_url: &str,
    identifier: &str,
    password: &str,
) -> Result<Session, reqwest::Error> {
    let response = client
        .post(format!("{service_url}/xrpc/com.atproto.server.createSession"))
        .json(&serde_json::json!({ "identifier": identifier, "password": password }))
        .send()
        .await?
        .error_for_status()?;
    response.json().await
}

pub async fn upload_blob(
    client: &Client,
    service_url: &str,
    session: &Session,
    png_bytes: Vec<u8>,
) -> Result<Value, reqwest::Error> {
    let response = client
        .post(format!("{service_url}/xrpc/com.atproto.repo.uploadBlob"))
        .header(CONTENT_TYPE, "image/png")
        .bearer_auth(&session.access_jwt)
        .body(png_bytes)
        .send()
        .await?
        .error_for_status()?;
    let parsed: UploadBlobResponse = response.json().await?;
    Ok(parsed.blob)
}

pub async fn create_record(
    client: &Client,
    service_url: &str,
    session: &Session,
    record: &PostRecord,
) -> Result<Value, reqwest::Error> {
    let response = client
        .post(format!("{service_url}/xrpc/com.atproto.repo.createRecord"))
        .bearer_auth(&session.access_jwt)
        .json(&CreateRecordRequest {
            repo: &session.did,
            collection: POST_COLLECTION,
            record,
        })
        .send()
        .await?
        .error_for_status()?;
    response.json().await
}
