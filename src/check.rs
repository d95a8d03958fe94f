//! Authoring-time content validation (`brandlink check`).
//!
//! Fetches every document of each declared type and validates it against
//! the schema definitions, surfacing warnings and errors to the editor.
//! This stands in for the authoring UI's validation surface; the
//! rendering path never runs these checks.

use crate::{
    config::cfg,
    content::{
        FetchOptions, client,
        query,
        schema::{self, Severity},
    },
    log,
};
use anyhow::{Result, bail};
use serde_json::{Value, json};

/// Validate all store content. Fails (non-zero exit) when any
/// error-severity violation exists; warnings are informational.
pub fn check_content() -> Result<()> {
    let client = client::shared()?;
    log!("check"; "validating content in {}", cfg().store()?.project_id);

    let runtime = tokio::runtime::Runtime::new()?;
    let (errors, warnings) = runtime.block_on(run_checks(client))?;

    if warnings > 0 {
        log!("check"; "{warnings} warning(s)");
    }
    if errors > 0 {
        bail!("{errors} validation error(s) found");
    }
    log!("check"; "all content valid");
    Ok(())
}

async fn run_checks(client: &'static client::ContentClient) -> Result<(usize, usize)> {
    let mut errors = 0;
    let mut warnings = 0;

    for spec in schema::registry() {
        let documents = client
            .fetch_many::<Value>(
                &query::DOCUMENTS_OF_TYPE,
                &[("type", json!(spec.name))],
                FetchOptions::none(),
            )
            .await?;

        log!("check"; "{}: {} document(s)", spec.name, documents.len());

        for doc in &documents {
            for violation in schema::validate(spec, doc) {
                let id = doc
                    .get("_id")
                    .and_then(Value::as_str)
                    .unwrap_or("<no id>");
                match violation.severity {
                    Severity::Error => {
                        errors += 1;
                        log!("error"; "{id}: {violation}");
                    }
                    Severity::Warning => {
                        warnings += 1;
                        log!("warn"; "{id}: {violation}");
                    }
                }
            }
        }
    }

    // Singleton-rendered page types take the first match; flag extras.
    for page_type in schema::PAGE_TYPES {
        let pages = client
            .fetch_many::<Value>(
                &query::PAGES_OF_TYPE,
                &[("pageType", json!(page_type))],
                FetchOptions::none(),
            )
            .await?;
        if pages.len() > 1 {
            warnings += 1;
            log!(
                "warn";
                "{} documents share pageType `{page_type}`; only the first match renders",
                pages.len()
            );
        }
    }

    Ok((errors, warnings))
}
