//! Paginated PDF checklist rendering.
//!
//! [`ChecklistPdf`] is a stateful builder exclusively owned by one render
//! call: `start_page` opens a location page, `write_row` appends a table
//! row, `finish` assembles the document and serializes it to bytes once.
//! Every page carries a header region (production date, location) and a
//! bordered two-column table with a shaded header row and alternating row
//! shading.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};

use prodsheet_core::format_numeric;
use prodsheet_model::ReportSection;

/// Suggested filename for the download collaborator.
pub const DOWNLOAD_FILENAME: &str = "production_summary.pdf";

/// MIME type of the rendered artifact.
pub const PDF_MIME_TYPE: &str = "application/pdf";

// A4 portrait geometry, in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;
const COLUMN_WIDTH: f32 = 257.0;
const HEADER_FONT_SIZE: f32 = 12.0;
const TABLE_FONT_SIZE: f32 = 10.0;
const HEADER_ROW_HEIGHT: f32 = 22.0;
const DATA_ROW_HEIGHT: f32 = 18.0;
const CELL_PADDING: f32 = 4.0;

// Grey levels for the shaded table rows.
const HEADER_SHADE: f32 = 0.78;
const ODD_ROW_SHADE: f32 = 0.9;
const WHITE: f32 = 1.0;

struct PageInProgress {
    operations: Vec<Operation>,
    cursor_y: f32,
    data_rows: usize,
}

/// Incremental builder for the paginated checklist document.
pub struct ChecklistPdf {
    doc: Document,
    pages_id: ObjectId,
    font_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: Option<PageInProgress>,
}

impl ChecklistPdf {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        Self {
            doc,
            pages_id,
            font_id,
            page_ids: Vec::new(),
            current: None,
        }
    }

    /// Pages started so far, including the one still being written.
    pub fn page_count(&self) -> usize {
        self.page_ids.len() + usize::from(self.current.is_some())
    }

    /// Opens a new page: header region plus the shaded table header row.
    ///
    /// The previous page, if any, is sealed first.
    pub fn start_page(&mut self, production_date: Option<&str>, location: &str) -> Result<()> {
        self.flush_page()?;

        let mut operations = Vec::new();
        let mut y = PAGE_HEIGHT - MARGIN - HEADER_FONT_SIZE;
        if let Some(date) = production_date {
            text(
                &mut operations,
                HEADER_FONT_SIZE,
                MARGIN,
                y,
                &format!("Production date: {date}"),
            );
            y -= HEADER_FONT_SIZE + 6.0;
        }
        text(
            &mut operations,
            HEADER_FONT_SIZE,
            MARGIN,
            y,
            &format!("Location: {location}"),
        );
        y -= HEADER_FONT_SIZE + 10.0;

        let mut page = PageInProgress {
            operations,
            cursor_y: y,
            data_rows: 0,
        };
        draw_row(
            &mut page,
            HEADER_ROW_HEIGHT,
            HEADER_SHADE,
            "Product",
            "Quantity to Prepare",
        );
        self.current = Some(page);
        Ok(())
    }

    /// Appends one bordered table row to the open page, shading odd rows.
    pub fn write_row(&mut self, product: &str, quantity: &str) -> Result<()> {
        let Some(page) = self.current.as_mut() else {
            bail!("write_row called before start_page");
        };
        let shade = if page.data_rows % 2 == 1 {
            ODD_ROW_SHADE
        } else {
            WHITE
        };
        draw_row(page, DATA_ROW_HEIGHT, shade, product, quantity);
        page.data_rows += 1;
        Ok(())
    }

    /// Seals the last page, assembles the page tree and serializes the
    /// document into a single in-memory artifact.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.flush_page()?;

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let count = self.page_ids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => self.font_id,
                },
            },
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::from(PAGE_WIDTH),
                Object::from(PAGE_HEIGHT),
            ],
        };
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut bytes = Vec::new();
        self.doc
            .save_to(&mut bytes)
            .context("serialize checklist document")?;
        Ok(bytes)
    }

    fn flush_page(&mut self) -> Result<()> {
        let Some(page) = self.current.take() else {
            return Ok(());
        };
        let content = Content {
            operations: page.operations,
        };
        let encoded = content.encode().context("encode page content")?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }
}

impl Default for ChecklistPdf {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the whole checklist: one page per section, in section order.
///
/// A section with no rows still gets its page with the header and the
/// header-only table. Fatal on failure; no partial document is produced.
pub fn render_checklist(
    sections: &[ReportSection],
    production_date: Option<NaiveDate>,
) -> Result<Vec<u8>> {
    let date = production_date.map(|date| date.format("%d-%m-%Y").to_string());
    let mut pdf = ChecklistPdf::new();
    for section in sections {
        pdf.start_page(date.as_deref(), &section.location)?;
        for row in &section.rows {
            pdf.write_row(&row.product, &format_numeric(row.quantity_to_prepare))?;
        }
    }
    pdf.finish()
}

/// Draws one bordered two-cell row at the page cursor and advances it.
fn draw_row(page: &mut PageInProgress, height: f32, shade: f32, left: &str, right: &str) {
    let top = page.cursor_y;
    let bottom = top - height;
    let ops = &mut page.operations;

    ops.push(Operation::new(
        "rg",
        vec![shade.into(), shade.into(), shade.into()],
    ));
    ops.push(Operation::new(
        "re",
        vec![
            MARGIN.into(),
            bottom.into(),
            COLUMN_WIDTH.into(),
            height.into(),
        ],
    ));
    ops.push(Operation::new(
        "re",
        vec![
            (MARGIN + COLUMN_WIDTH).into(),
            bottom.into(),
            COLUMN_WIDTH.into(),
            height.into(),
        ],
    ));
    ops.push(Operation::new("B", vec![]));

    let baseline = bottom + CELL_PADDING + 1.0;
    text(ops, TABLE_FONT_SIZE, MARGIN + CELL_PADDING, baseline, left);
    text(
        ops,
        TABLE_FONT_SIZE,
        MARGIN + COLUMN_WIDTH + CELL_PADDING,
        baseline,
        right,
    );

    page.cursor_y = bottom;
}

fn text(ops: &mut Vec<Operation>, size: f32, x: f32, y: f32, value: &str) {
    ops.push(Operation::new("rg", vec![0.into(), 0.into(), 0.into()]));
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec!["F1".into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![latin1_text(value)]));
    ops.push(Operation::new("ET", vec![]));
}

// Helvetica is addressed through WinAnsiEncoding; characters outside the
// single-byte range render as '?'.
fn latin1_text(value: &str) -> Object {
    let bytes = value
        .chars()
        .map(|ch| {
            let code = ch as u32;
            if code < 256 { code as u8 } else { b'?' }
        })
        .collect::<Vec<u8>>();
    Object::String(bytes, StringFormat::Literal)
}
