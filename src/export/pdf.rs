use crate::errors::{AppError, AppResult};
use crate::export::model::{Report, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs;
use std::path::Path;

const FONT: Name<'static> = Name(b"F1");

/// Standard Type1 Helvetica expects WinAnsi bytes, not UTF-8.
/// Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{0000}'..='\u{007F}' | '\u{00A0}'..='\u{00FF}' => c as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            next_id: 4,
            font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 16.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(FONT, self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = encode_win_ansi(text);
        content.begin_text();
        content.set_font(FONT, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    // Helvetica averages a bit over half an em per glyph
    fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.55
    }

    fn table_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    /// Date, Start, End, Hours; the hours column is right aligned.
    fn col_widths(&self) -> [f32; 4] {
        let w = self.table_width();
        [w * 0.34, w * 0.22, w * 0.22, w * 0.22]
    }

    fn fill_band(&self, content: &mut Content, y: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(self.margin, y, self.table_width(), self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, cells: &[String], size: f32) {
        let widths = self.col_widths();
        let mut x = self.margin;
        let last = cells.len().saturating_sub(1);

        for (i, (text, w)) in cells.iter().zip(widths).enumerate() {
            let tx = if i == last {
                x + w - 4.0 - Self::text_width(text, size)
            } else {
                x + 4.0
            };
            self.draw_text(content, tx, y + 6.0, size, text);

            content.save_state();
            content.set_stroke_rgb(0.85, 0.85, 0.85);
            content.rect(x, y, w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Title and period on every page, table header, page number.
    /// Returns the y of the first free table line.
    fn draw_page_frame(&self, content: &mut Content, report: &Report, page: usize) -> f32 {
        let top = self.page_h - self.margin;
        self.draw_text(content, self.margin, top, self.title_font_size, &report.title);
        self.draw_text(
            content,
            self.margin,
            top - 20.0,
            self.font_size,
            &report.period_label(),
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 30.0,
            self.font_size,
            &pg,
        );

        let y = top - 50.0;
        self.fill_band(content, y, 0.90);
        let header: Vec<String> = get_headers().iter().map(|h| h.to_string()).collect();
        self.draw_row(content, y, &header, self.header_font_size);

        y - self.row_h
    }

    /// Report laid out over as many pages as needed, total on the last one.
    pub fn write_report(&mut self, report: &Report) {
        let mut remaining = report.rows.as_slice();
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            let mut y = self.draw_page_frame(&mut content, report, page_idx);

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y < self.margin {
                    break;
                }
                if i % 2 == 1 {
                    self.fill_band(&mut content, y, 0.97);
                }
                self.draw_row(&mut content, y, &row.cells(), self.font_size);
                y -= self.row_h;
                consumed += 1;
            }
            remaining = &remaining[consumed..];

            // total needs one more line below the table
            if remaining.is_empty() && y - self.row_h >= self.margin {
                let label = report.total_label();
                let x = self.margin + self.table_width()
                    - Self::text_width(&label, self.header_font_size)
                    - 4.0;
                self.draw_text(&mut content, x, y - 4.0, self.header_font_size, &label);
                self.finalize_page(content);
                break;
            }

            self.finalize_page(content);
            page_idx += 1;
        }
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.finish())
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        self.pdf.finish()
    }
}

pub(crate) fn export_pdf(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_report(report);
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))?;

    notify_export_success("PDF", path);
    Ok(())
}
