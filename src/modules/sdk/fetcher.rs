use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{Connection, DeclaredSchema, Result, ScenarioError};

/// Send `body` as JSON and return the validated, typed response
pub async fn fetch<Req, Res>(
    conn: &Connection,
    method: Method,
    path: &str,
    body: &Req,
) -> Result<Res>
where
    Req: Serialize + ?Sized,
    Res: DeserializeOwned + DeclaredSchema,
{
    let request = prepare(conn, method.clone(), path).json(body);
    let value = send(request, &method, path).await?;
    assert_type(value)
}

/// Bodiless request (GET) returning the validated, typed response
pub async fn fetch_without_body<Res>(conn: &Connection, method: Method, path: &str) -> Result<Res>
where
    Res: DeserializeOwned + DeclaredSchema,
{
    let request = prepare(conn, method.clone(), path);
    let value = send(request, &method, path).await?;
    assert_type(value)
}

/// Bodiless request whose response carries nothing to validate (DELETE)
pub async fn fetch_empty(conn: &Connection, method: Method, path: &str) -> Result<()> {
    let request = prepare(conn, method.clone(), path);
    send_raw(request, &method, path).await.map(|_| ())
}

/// Structural validation followed by deserialization.
///
/// Fails with every violation found, so a broken response is reported in
/// full rather than at the first mismatching field.
pub fn assert_type<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned + DeclaredSchema,
{
    let schema = T::schema();
    let violations = schema.validate(&value);
    if !violations.is_empty() {
        return Err(ScenarioError::Schema {
            type_name: schema.type_name(),
            violations,
        });
    }

    Ok(serde_json::from_value(value)?)
}

fn prepare(conn: &Connection, method: Method, path: &str) -> RequestBuilder {
    conn.headers()
        .iter()
        .fold(conn.http().request(method, conn.url(path)), |request, (name, value)| {
            request.header(name.as_str(), value.as_str())
        })
}

async fn send(request: RequestBuilder, method: &Method, path: &str) -> Result<Value> {
    let text = send_raw(request, method, path).await?;
    Ok(serde_json::from_str(&text)?)
}

async fn send_raw(request: RequestBuilder, method: &Method, path: &str) -> Result<String> {
    debug!(%method, path, "calling backend");

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!(%method, path, status = status.as_u16(), "backend rejected call");
        return Err(ScenarioError::Http {
            method: method.to_string(),
            path: path.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    debug!(%method, path, status = status.as_u16(), bytes = body.len(), "backend answered");
    Ok(body)
}
