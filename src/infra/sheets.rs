//! Append-only Google Sheets writer authenticated with a service account.
//!
//! - Mints a short-lived access token per append (RS256 JWT bearer grant).
//! - Writes one row per submission; there is no idempotency key, so a
//!   repeated submission produces a duplicate row.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::domain::SubmissionRecord;
use crate::infra::config::{ServiceAccount, SheetsTarget};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 60 * 60;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("sheets base URL cannot hold path segments")]
    BaseUrl,
    #[error("service account key rejected: {0}")]
    Credentials(#[from] jsonwebtoken::errors::Error),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("token endpoint responded with {status}: {body}")]
    Token { status: u16, body: String },
    #[error("sheets append responded with {status}: {body}")]
    Append { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct AppendBody {
    #[serde(rename = "majorDimension")]
    major_dimension: &'static str,
    values: Vec<Vec<serde_json::Value>>,
}

/// Extracts the spreadsheet id from a sharing URL; bare ids pass through.
pub fn spreadsheet_id(url_or_id: &str) -> String {
    let trimmed = url_or_id.trim();
    trimmed
        .split_once("/spreadsheets/d/")
        .and_then(|(_, rest)| rest.split(['/', '?', '#']).next())
        .filter(|id| !id.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}

#[derive(Clone)]
pub struct SheetsClient {
    http: Client,
    base_url: Url,
    token_url: Url,
    account: ServiceAccount,
    key: EncodingKey,
    spreadsheet_id: String,
    worksheet: String,
}

impl SheetsClient {
    /// Parses the signing key up front so a bad credential fails at start-up.
    pub fn new(
        http: Client,
        base_url: &str,
        account: ServiceAccount,
        target: &SheetsTarget,
    ) -> Result<Self, SheetsError> {
        let key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            token_url: Url::parse(&account.token_uri)?,
            account,
            key,
            spreadsheet_id: spreadsheet_id(&target.spreadsheet),
            worksheet: target.worksheet.clone(),
        })
    }

    pub async fn append(&self, record: &SubmissionRecord) -> Result<(), SheetsError> {
        let token = self.access_token().await?;
        let url = self.append_url()?;
        let body = AppendBody {
            major_dimension: "ROWS",
            values: vec![record.to_row()],
        };

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Append {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(worksheet = %self.worksheet, "appended submission row");
        Ok(())
    }

    fn append_url(&self) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SheetsError::BaseUrl)?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{}:append", self.worksheet));
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");
        Ok(url)
    }

    fn signed_assertion(&self, issued_at: i64) -> Result<String, SheetsError> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.account.private_key_id.clone());
        let claims = Claims {
            iss: &self.account.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.account.token_uri,
            iat: issued_at,
            exp: issued_at + TOKEN_LIFETIME_SECS,
        };
        Ok(jsonwebtoken::encode(&header, &claims, &self.key)?)
    }

    async fn access_token(&self) -> Result<String, SheetsError> {
        let assertion = self.signed_assertion(OffsetDateTime::now_utc().unix_timestamp())?;
        let response = self
            .http
            .post(self.token_url.clone())
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Token {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    use super::*;
    use crate::infra::http::{build_client, test_server};

    const TEST_KEY: &str = include_str!("testdata/service_account_key.pem");

    fn client(base: &str) -> SheetsClient {
        let account = ServiceAccount {
            client_email: "tools@abode-marketing.iam.gserviceaccount.com".to_string(),
            private_key_id: "kid-1".to_string(),
            private_key: TEST_KEY.to_string(),
            token_uri: format!("{base}/token"),
            project_id: Some("abode-marketing".to_string()),
        };
        let target = SheetsTarget {
            spreadsheet: "https://docs.google.com/spreadsheets/d/abc123/edit#gid=0".to_string(),
            worksheet: "Eng_Mkt_Tools".to_string(),
        };
        let http = build_client(Duration::from_secs(5)).unwrap();
        SheetsClient::new(http, &format!("{base}/v4/spreadsheets/"), account, &target).unwrap()
    }

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            address: "123 MAIN ST, SAN FRANCISCO, CA 94105".to_string(),
            market_value: 500_000,
            assessed_value: 600_000,
            timestamp_utc: "2024-03-01 12:00:00".to_string(),
        }
    }

    #[test]
    fn spreadsheet_id_from_url_or_bare_id() {
        assert_eq!(
            spreadsheet_id("https://docs.google.com/spreadsheets/d/abc123/edit#gid=0"),
            "abc123"
        );
        assert_eq!(spreadsheet_id("https://docs.google.com/spreadsheets/d/xyz"), "xyz");
        assert_eq!(spreadsheet_id(" abc123 "), "abc123");
    }

    #[test]
    fn rejects_non_pem_private_key() {
        let account = ServiceAccount {
            client_email: "a@b".into(),
            private_key_id: "kid".into(),
            private_key: "not a key".into(),
            token_uri: "https://oauth2.googleapis.com/token".into(),
            project_id: None,
        };
        let target = SheetsTarget {
            spreadsheet: "abc".into(),
            worksheet: "Sheet1".into(),
        };
        let http = build_client(Duration::from_secs(5)).unwrap();
        let result = SheetsClient::new(http, "https://sheets.googleapis.com/v4/spreadsheets/", account, &target);
        assert!(matches!(result, Err(SheetsError::Credentials(_))));
    }

    #[tokio::test]
    async fn exchanges_token_then_appends_row() {
        let (base, captured) = test_server::serve(vec![
            (200, r#"{"access_token":"tok-1","expires_in":3599,"token_type":"Bearer"}"#.to_string()),
            (200, r#"{"spreadsheetId":"abc123","updates":{"updatedRows":1}}"#.to_string()),
        ])
        .await;

        client(&base).append(&record()).await.unwrap();

        let requests = captured.await.unwrap();
        let token_request = &requests[0];
        assert!(token_request.request_line().starts_with("POST /token "));
        assert!(token_request
            .body
            .contains("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer"));

        let assertion = token_request
            .body
            .split('&')
            .find_map(|pair| pair.strip_prefix("assertion="))
            .unwrap();
        let payload = assertion.split('.').nth(1).unwrap();
        let claims: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();
        assert_eq!(claims["iss"], "tools@abode-marketing.iam.gserviceaccount.com");
        assert_eq!(claims["scope"], SHEETS_SCOPE);
        assert_eq!(claims["aud"], format!("{base}/token"));
        assert_eq!(
            claims["exp"].as_i64().unwrap() - claims["iat"].as_i64().unwrap(),
            TOKEN_LIFETIME_SECS
        );

        let append_request = &requests[1];
        assert!(append_request.request_line().starts_with(
            "POST /v4/spreadsheets/abc123/values/Eng_Mkt_Tools:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS "
        ));
        assert_eq!(
            append_request.header("authorization").as_deref(),
            Some("Bearer tok-1")
        );
        let body: serde_json::Value = serde_json::from_str(&append_request.body).unwrap();
        assert_eq!(
            body["values"][0],
            serde_json::json!(["123 MAIN ST, SAN FRANCISCO, CA 94105", 500000, 600000, "2024-03-01 12:00:00"])
        );
    }

    #[tokio::test]
    async fn formula_like_cells_are_stored_verbatim() {
        let (base, captured) = test_server::serve(vec![
            (200, r#"{"access_token":"tok-1"}"#.to_string()),
            (200, r#"{"updates":{"updatedRows":1}}"#.to_string()),
        ])
        .await;

        let mut row = record();
        row.address = "=IMPORTXML(\"http://x\"), +1 MAIN ST".to_string();
        client(&base).append(&row).await.unwrap();

        let requests = captured.await.unwrap();
        let line = requests[1].request_line();
        assert!(line.contains("valueInputOption=RAW"));
        assert!(!line.contains("USER_ENTERED"));
        let body: serde_json::Value = serde_json::from_str(&requests[1].body).unwrap();
        assert_eq!(body["values"][0][0], "=IMPORTXML(\"http://x\"), +1 MAIN ST");
        assert_eq!(body["values"][0][3], "2024-03-01 12:00:00");
    }

    #[tokio::test]
    async fn token_rejection_surfaces_status() {
        let (base, _captured) =
            test_server::serve_once(400, r#"{"error":"invalid_grant"}"#).await;

        let err = client(&base).append(&record()).await.unwrap_err();
        assert!(matches!(err, SheetsError::Token { status: 400, .. }));
    }

    #[tokio::test]
    async fn append_failure_surfaces_status() {
        let (base, _captured) = test_server::serve(vec![
            (200, r#"{"access_token":"tok-1"}"#.to_string()),
            (403, r#"{"error":{"code":403}}"#.to_string()),
        ])
        .await;

        let err = client(&base).append(&record()).await.unwrap_err();
        assert!(matches!(err, SheetsError::Append { status: 403, .. }));
    }
}
