//! FILENAME: export/src/pdf.rs
//! PURPOSE: PDF serialization of the report.
//! CONTEXT: A4 portrait with a title and a table grid. Column widths are
//! proportional to the longest value per column; rows that overflow the page
//! continue on a fresh page with the header row repeated. Built-in Helvetica
//! keeps the exporter free of font assets.

use crate::{ExportError, ExportPayload};
use engine::{FieldDescriptor, Record};
use log::debug;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
    Rgb,
};
use std::io::BufWriter;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 14.0;
const ROW_HEIGHT: f64 = 6.0;
const TITLE_FONT_SIZE: f64 = 14.0;
const TABLE_FONT_SIZE: f64 = 8.0;
/// Approximate advance of one 8pt Helvetica character, used to budget
/// truncation. Generous enough that fitted columns never clip.
const CHAR_WIDTH: f64 = 1.6;
const CELL_PADDING: f64 = 1.5;

pub fn export_pdf(
    records: &[Record],
    fields: &[FieldDescriptor],
) -> Result<ExportPayload, ExportError> {
    let (doc, page, layer) = PdfDocument::new("APN Report", Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::PdfRender(e.to_string()))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::PdfRender(e.to_string()))?;

    let widths = column_widths(records, fields);

    let mut layer = doc.get_page(page).get_layer(layer);
    layer.use_text(
        "APN Report",
        TITLE_FONT_SIZE as f32,
        Mm(MARGIN as f32),
        Mm((PAGE_HEIGHT - 10.0) as f32),
        &font_bold,
    );

    // Top edge of the current row; the first table row sits under the title.
    let mut y = PAGE_HEIGHT - 20.0;
    draw_header_row(&layer, fields, &widths, y, &font_bold);
    y -= ROW_HEIGHT;

    for (index, record) in records.iter().enumerate() {
        if y - ROW_HEIGHT < MARGIN {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH as f32), Mm(PAGE_HEIGHT as f32), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN;
            draw_header_row(&layer, fields, &widths, y, &font_bold);
            y -= ROW_HEIGHT;
        }
        draw_record_row(&layer, record, fields, &widths, y, index % 2 == 1, &font);
        y -= ROW_HEIGHT;
    }

    let mut bytes: Vec<u8> = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        doc.save(&mut writer)
            .map_err(|e| ExportError::PdfRender(e.to_string()))?;
    }
    debug!("PDF export: {} records, {} bytes", records.len(), bytes.len());

    Ok(ExportPayload {
        filename: "apn-report.pdf",
        content_type: "application/pdf",
        bytes,
    })
}

/// Column widths in millimetres, sharing the printable width in proportion
/// to each column's longest value (label or cell).
fn column_widths(records: &[Record], fields: &[FieldDescriptor]) -> Vec<f64> {
    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    let weights: Vec<f64> = fields
        .iter()
        .map(|field| {
            let longest_cell = records
                .iter()
                .map(|record| record.field_text(field.key).chars().count())
                .max()
                .unwrap_or(0);
            (longest_cell.max(field.label.chars().count()) + 2) as f64
        })
        .collect();
    let total: f64 = weights.iter().sum();
    weights.iter().map(|w| usable * w / total).collect()
}

fn draw_header_row(
    layer: &PdfLayerReference,
    fields: &[FieldDescriptor],
    widths: &[f64],
    y: f64,
    font_bold: &IndirectFontRef,
) {
    // Dark blue band with white labels
    layer.set_fill_color(Color::Rgb(Rgb::new(30.0 / 255.0, 60.0 / 255.0, 120.0 / 255.0, None)));
    layer.add_rect(Rect::new(
        Mm(MARGIN as f32),
        Mm((y - ROW_HEIGHT) as f32),
        Mm((PAGE_WIDTH - MARGIN) as f32),
        Mm(y as f32),
    ));

    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    let mut x = MARGIN;
    for (field, width) in fields.iter().zip(widths) {
        layer.use_text(
            fit_text(field.label, *width),
            TABLE_FONT_SIZE as f32,
            Mm((x + CELL_PADDING) as f32),
            Mm((y - ROW_HEIGHT + 1.8) as f32),
            font_bold,
        );
        x += width;
    }
}

fn draw_record_row(
    layer: &PdfLayerReference,
    record: &Record,
    fields: &[FieldDescriptor],
    widths: &[f64],
    y: f64,
    striped: bool,
    font: &IndirectFontRef,
) {
    if striped {
        layer.set_fill_color(Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None)));
        layer.add_rect(Rect::new(
            Mm(MARGIN as f32),
            Mm((y - ROW_HEIGHT) as f32),
            Mm((PAGE_WIDTH - MARGIN) as f32),
            Mm(y as f32),
        ));
    }

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    let mut x = MARGIN;
    for (field, width) in fields.iter().zip(widths) {
        layer.use_text(
            fit_text(&record.field_text(field.key), *width),
            TABLE_FONT_SIZE as f32,
            Mm((x + CELL_PADDING) as f32),
            Mm((y - ROW_HEIGHT + 1.8) as f32),
            font,
        );
        x += width;
    }

    // Row separator
    layer.set_outline_color(Color::Rgb(Rgb::new(0.8, 0.8, 0.8, None)));
    layer.set_outline_thickness(0.2);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN as f32), Mm((y - ROW_HEIGHT) as f32)), false),
            (Point::new(Mm((PAGE_WIDTH - MARGIN) as f32), Mm((y - ROW_HEIGHT) as f32)), false),
        ],
        is_closed: false,
    });
}

/// Truncates text that cannot fit the column, keeping the cell grid intact.
fn fit_text(text: &str, width: f64) -> String {
    let budget = ((width - 2.0 * CELL_PADDING) / CHAR_WIDTH).max(1.0) as usize;
    if text.chars().count() <= budget {
        text.to_string()
    } else {
        let kept: String = text.chars().take(budget.saturating_sub(2)).collect();
        format!("{}..", kept)
    }
}
