//! Local server: static output plus the lead-capture endpoints.
//!
//! Built on `tiny_http`:
//!
//! - Static file serving from the build output directory
//! - Automatic `index.html` resolution for directories
//! - `POST /api/contact` and `POST /api/join-influencer`: JSON in,
//!   `{success, data|error}` out, forwarding to the email provider
//! - Graceful shutdown on Ctrl+C
//!
//! # Architecture
//!
//! ```text
//! request ──► POST /api/* ──► validate ──► Mailer ──► provider
//!        │        │422 on field errors        │502 on transport failure
//!        │
//!        └──► static path ──► file | dir index.html | 404 page
//! ```

use crate::{
    config::{SiteConfig, cfg},
    leads::{
        ApplicationWizard, Mailer, SubmitError,
        validate::{ApplicationSubmission, ContactSubmission, FieldError, validate_contact},
    },
    log,
};
use anyhow::{Context, Result};
use serde_json::json;
use std::{
    fs,
    io::Read,
    net::SocketAddr,
    path::Path,
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Request bodies past this size are rejected outright.
const MAX_BODY_BYTES: usize = 64 * 1024;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the local server.
///
/// Binds to the configured interface and port (with auto-retry on port
/// conflict), sets up a Ctrl+C handler, then blocks in the request loop.
pub fn serve_site() -> Result<()> {
    let config = cfg();
    let interface: std::net::IpAddr = config.serve.interface.parse()?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    // Submissions block on the async provider call through this runtime.
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let mailer = Mailer::new(config.mail())?;
    if !mailer.is_configured() {
        log!("serve"; "RESEND_API_KEY is unset — form submissions will fail until configured");
    }

    log!("serve"; "http://{}", addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &cfg(), &runtime, &mailer) {
            log!("serve"; "request error: {e:#}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: std::net::IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < max_retries => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    max_retries,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

// ============================================================================
// Request Handling
// ============================================================================

fn handle_request(
    mut request: Request,
    config: &SiteConfig,
    runtime: &tokio::runtime::Runtime,
    mailer: &Mailer,
) -> Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or(&url);

    if *request.method() == Method::Post {
        return match path {
            "/api/contact" => handle_contact(request, runtime, mailer),
            "/api/join-influencer" => handle_application(request, runtime, mailer),
            _ => respond_json(
                request,
                404,
                &json!({"success": false, "error": "No such endpoint"}),
            ),
        };
    }

    serve_static(request, path, config)
}

// ============================================================================
// Lead Endpoints
// ============================================================================

fn handle_contact(
    mut request: Request,
    runtime: &tokio::runtime::Runtime,
    mailer: &Mailer,
) -> Result<()> {
    let submission: ContactSubmission = match read_json_body(&mut request) {
        Ok(body) => body,
        Err(message) => return respond_invalid_body(request, &message),
    };

    let errors = validate_contact(&submission);
    if !errors.is_empty() {
        return respond_field_errors(request, &errors);
    }

    match runtime.block_on(mailer.send_contact(&submission)) {
        Ok(data) => {
            log!("leads"; "contact submission forwarded for {}", submission.email);
            respond_json(request, 200, &json!({"success": true, "data": data}))
        }
        Err(e) => respond_send_failure(request, &e),
    }
}

fn handle_application(
    mut request: Request,
    runtime: &tokio::runtime::Runtime,
    mailer: &Mailer,
) -> Result<()> {
    let submission: ApplicationSubmission = match read_json_body(&mut request) {
        Ok(body) => body,
        Err(message) => return respond_invalid_body(request, &message),
    };

    // Replay the wizard: the submission must clear each step's local
    // validation, exactly as the in-page wizard gates progression.
    if let Err(errors) = ApplicationWizard::replay(submission.clone()) {
        return respond_field_errors(request, &errors);
    }

    match runtime.block_on(mailer.send_application(&submission)) {
        Ok(data) => {
            log!("leads"; "application forwarded for {}", submission.email);
            respond_json(request, 200, &json!({"success": true, "data": data}))
        }
        Err(e) => respond_send_failure(request, &e),
    }
}

fn read_json_body<T: serde::de::DeserializeOwned>(request: &mut Request) -> Result<T, String> {
    let mut body = String::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES as u64 + 1)
        .read_to_string(&mut body)
        .map_err(|_| "Failed to read request body".to_string())?;
    if body.len() > MAX_BODY_BYTES {
        return Err("Request body too large".to_string());
    }
    serde_json::from_str(&body).map_err(|_| "Invalid JSON body".to_string())
}

fn respond_invalid_body(request: Request, message: &str) -> Result<()> {
    respond_json(request, 400, &json!({"success": false, "error": message}))
}

fn respond_field_errors(request: Request, errors: &[FieldError]) -> Result<()> {
    respond_json(
        request,
        422,
        &json!({
            "success": false,
            "error": "Validation failed",
            "fields": errors,
        }),
    )
}

fn respond_send_failure(request: Request, error: &SubmitError) -> Result<()> {
    log!("leads"; "submission failed: {error:#}");
    respond_json(
        request,
        502,
        &json!({"success": false, "error": error.to_string()}),
    )
}

fn respond_json(request: Request, status: u16, body: &serde_json::Value) -> Result<()> {
    let response = Response::from_string(body.to_string())
        .with_status_code(status)
        .with_header(
            Header::from_bytes("Content-Type", "application/json; charset=utf-8").unwrap(),
        );
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Static Files
// ============================================================================

/// Request resolution order:
/// 1. Exact file match → serve file
/// 2. Directory with index.html → serve index.html
/// 3. Nothing found → rendered 404 page
fn serve_static(request: Request, path: &str, config: &SiteConfig) -> Result<()> {
    let serve_root = &config.build.output;

    // Decode URL-encoded characters (e.g., %20 → space)
    let decoded = urlencoding::decode(path)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();
    let request_path = decoded.trim_matches('/');

    // Reject traversal outright; all real routes are simple segments.
    if request_path.split('/').any(|segment| segment == "..") {
        return serve_not_found(request, config);
    }

    let local_path = serve_root.join(request_path);

    if local_path.is_file() {
        return serve_file(request, &local_path);
    }

    if local_path.is_dir() {
        let index_path = local_path.join("index.html");
        if index_path.is_file() {
            return serve_file(request, &index_path);
        }
    }

    serve_not_found(request, config)
}

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let content_type = guess_content_type(path);

    let response = Response::from_data(content)
        .with_header(Header::from_bytes("Content-Type", content_type).unwrap());

    request.respond(response)?;
    Ok(())
}

/// Serve the rendered 404 page, falling back to plain text.
fn serve_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    let page = config.build.output.join("404.html");
    let response = match fs::read(&page) {
        Ok(content) => Response::from_data(content)
            .with_status_code(404)
            .with_header(
                Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap(),
            ),
        Err(_) => Response::from_string("404 Not Found")
            .with_status_code(404)
            .with_header(Header::from_bytes("Content-Type", "text/plain").unwrap()),
    };
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Content Type Detection
// ============================================================================

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(
            guess_content_type(Path::new("index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            guess_content_type(Path::new("assets/site.css")),
            "text/css; charset=utf-8"
        );
        assert_eq!(guess_content_type(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(
            guess_content_type(Path::new("blob.bin")),
            "application/octet-stream"
        );
    }
}
