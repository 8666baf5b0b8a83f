//! The CLI's [`ActionSink`]: what tag, email and export actually do when a
//! terminal is the whole product. Export writes a gzipped tar archive with
//! one JSON file per record; tag and email produce notices for the user —
//! there is no mail server behind a sample binary.

use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use listwise::actions::ActionSink;
use listwise::error::Result;
use listwise::model::{FieldValue, Record};
use serde::Serialize;
use std::fs::File;
use std::io::Write;

pub struct CliSink {
    /// Tag to report for `tag` actions.
    pub tag_name: String,
    /// Human-readable lines for the client to print after dispatch.
    pub notices: Vec<String>,
}

impl CliSink {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            notices: Vec::new(),
        }
    }
}

impl<T: Record + Serialize> ActionSink<T> for CliSink {
    fn tag(&mut self, records: &[T]) -> Result<()> {
        for record in records {
            self.notices
                .push(format!("Tagged '{}': {}", self.tag_name, record.id()));
        }
        Ok(())
    }

    fn email(&mut self, records: &[T]) -> Result<()> {
        for record in records {
            let to = match record.field("email") {
                FieldValue::Text(addr) => addr,
                _ => record.id().to_string(),
            };
            self.notices.push(format!("Queued email to {}", to));
        }
        Ok(())
    }

    fn export(&mut self, records: &[T]) -> Result<()> {
        let filename = format!("listwise-{}.tar.gz", Utc::now().format("%Y-%m-%d_%H%M%S"));
        let file = File::create(&filename)?;
        write_archive(file, records)?;
        self.notices.push(format!("Wrote {}", filename));
        Ok(())
    }
}

fn write_archive<W: Write, T: Record + Serialize>(writer: W, records: &[T]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for record in records {
        let entry_name = format!("listwise/{}.json", sanitize_filename(&record.id().to_string()));
        let content = serde_json::to_vec_pretty(record)?;

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_slice())?;
    }

    tar.finish()?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
