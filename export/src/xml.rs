//! FILENAME: export/src/xml.rs
//! PURPOSE: XML serialization of the report.
//! CONTEXT: One `<Record>` element per record under an `<APNReport>` root,
//! one child element per field with the field key as tag. Values are
//! entity-escaped by the writer.

use crate::{ExportError, ExportPayload};
use engine::{FieldDescriptor, Record};
use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

const ROOT_TAG: &str = "APNReport";
const RECORD_TAG: &str = "Record";

pub fn export_xml(
    records: &[Record],
    fields: &[FieldDescriptor],
) -> Result<ExportPayload, ExportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;

    for record in records {
        writer.write_event(Event::Start(BytesStart::new(RECORD_TAG)))?;
        for field in fields {
            let tag = field.key.key();
            let value = record.field_text(field.key);
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            writer.write_event(Event::Text(BytesText::new(&value)))?;
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(RECORD_TAG)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

    let bytes = writer.into_inner();
    debug!("XML export: {} records, {} bytes", records.len(), bytes.len());

    Ok(ExportPayload {
        filename: "apn-report.xml",
        content_type: "application/xml;charset=utf-8",
        bytes,
    })
}
