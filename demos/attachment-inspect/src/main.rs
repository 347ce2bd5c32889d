//! Decodes attachment JSON and reports how each attachment re-encodes.
//!
//! ```text
//! attachment-inspect card.json image.json
//! cat image.json | RUST_LOG=botwire_protocol=trace attachment-inspect
//! ```
//!
//! Reads stdin when no paths are given. Exits non-zero if any input fails
//! to decode or fails to re-encode for any reason other than having no wire
//! form. A card that cannot be re-encoded is reported, not a failure.

use std::io::Read;
use std::process::ExitCode;

use botwire::prelude::*;
use tracing_subscriber::EnvFilter;

const STDIN: &str = "-";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut sources: Vec<String> = std::env::args().skip(1).collect();
    if sources.is_empty() {
        sources.push(STDIN.to_string());
    }

    let mut failures = 0usize;
    for source in &sources {
        match inspect(source) {
            Ok(report) => println!("{report}"),
            Err(e) => {
                tracing::error!(%source, error = %e, "failed to inspect attachment");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn read_source(source: &str) -> std::io::Result<Vec<u8>> {
    if source == STDIN {
        let mut data = Vec::new();
        std::io::stdin().read_to_end(&mut data)?;
        Ok(data)
    } else {
        std::fs::read(source)
    }
}

fn inspect(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let data = read_source(source)?;
    let attachment = JsonCodec.decode_attachment(&data)?;
    let content = attachment.content();
    tracing::info!(
        %source,
        kind = %content.kind(),
        content_type = content.content_type(),
        "decoded attachment"
    );

    let reencoded = match wire_form(JsonCodec.encode_attachment(&attachment))? {
        Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        None => {
            tracing::warn!(%source, "attachment has no wire form");
            "<not encodable>".to_string()
        }
    };

    Ok(format!(
        "{source}: {kind} ({content_type}) name={name:?} thumbnail={thumbnail:?}\n  -> {reencoded}",
        kind = content.kind(),
        content_type = content.content_type(),
        name = attachment.name(),
        thumbnail = attachment.thumbnail_url().map(UriReference::as_str),
    ))
}

/// `None` when the attachment has no wire form. Any other encode error is
/// passed through.
fn wire_form(encoded: Result<Vec<u8>, ProtocolError>) -> Result<Option<Vec<u8>>, ProtocolError> {
    match encoded {
        Ok(bytes) => Ok(Some(bytes)),
        Err(ProtocolError::Attachment(AttachmentError::UnsupportedEncoding { .. })) => Ok(None),
        Err(e) => Err(e),
    }
}
