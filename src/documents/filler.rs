//! Fills a convenio template with collected case data.
//!
//! Templates are `.docx` documents containing bracketed placeholder
//! tokens (e.g. `[NOMBRE_DEMANDANTE]`). Filling is a literal substring
//! replacement over every paragraph and table cell; unmatched
//! placeholders are left verbatim.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::Local;
use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use super::registry::DocumentType;
use crate::conversation::fields::FIELDS;
use crate::error::DocumentError;

/// Generates filled documents from the template directory into the
/// output directory.
pub struct DocumentFiller {
    templates_dir: PathBuf,
    output_dir: PathBuf,
    /// Value substituted for the `[LUGAR]` placeholder.
    place: String,
}

impl DocumentFiller {
    pub fn new(templates_dir: PathBuf, output_dir: PathBuf, place: impl Into<String>) -> Self {
        Self {
            templates_dir,
            output_dir,
            place: place.into(),
        }
    }

    /// Fill the template for `doc_type` with the collected data and
    /// persist the result. Returns the output path.
    ///
    /// The output filename is derived from the document-type key and
    /// the claimant's DNI (`unknown` if absent).
    pub fn fill(
        &self,
        doc_type: DocumentType,
        data: &HashMap<String, String>,
    ) -> Result<PathBuf, DocumentError> {
        let template_path = self.templates_dir.join(doc_type.template_file());
        if !template_path.exists() {
            return Err(DocumentError::TemplateFileMissing {
                path: template_path,
            });
        }

        let buf = fs::read(&template_path)?;
        let mut docx = read_docx(&buf).map_err(|e| DocumentError::TemplateParse {
            path: template_path.clone(),
            reason: e.to_string(),
        })?;

        let replacements = self.replacements(data);
        for child in docx.document.children.iter_mut() {
            match child {
                DocumentChild::Paragraph(paragraph) => {
                    replace_in_paragraph(paragraph, &replacements);
                }
                DocumentChild::Table(table) => {
                    replace_in_table(table, &replacements);
                }
                _ => {}
            }
        }

        fs::create_dir_all(&self.output_dir)?;
        let dni = data
            .get("dni_demandante")
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or("unknown");
        let output_path = self
            .output_dir
            .join(format!("{}_{}.docx", doc_type.key(), dni));

        let file = fs::File::create(&output_path)?;
        docx.build()
            .pack(file)
            .map_err(|e| DocumentError::Write {
                path: output_path.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!(doc_type = %doc_type, path = %output_path.display(), "Wrote document");
        Ok(output_path)
    }

    /// Resolve a raw document-type key, then fill.
    ///
    /// Unknown keys fail with `TemplateNotFound` before any file IO.
    pub fn fill_by_key(
        &self,
        key: &str,
        data: &HashMap<String, String>,
    ) -> Result<PathBuf, DocumentError> {
        let doc_type = DocumentType::from_key(key).ok_or_else(|| {
            DocumentError::TemplateNotFound {
                doc_type: key.to_string(),
            }
        })?;
        self.fill(doc_type, data)
    }

    /// Placeholder→value map: one token per collected field, plus the
    /// generation date and place.
    fn replacements(&self, data: &HashMap<String, String>) -> Vec<(String, String)> {
        let mut replacements: Vec<(String, String)> = FIELDS
            .iter()
            .map(|field| {
                (
                    format!("[{}]", field.key.to_uppercase()),
                    data.get(field.key).cloned().unwrap_or_default(),
                )
            })
            .collect();
        replacements.push((
            "[FECHA]".to_string(),
            Local::now().format("%d/%m/%Y").to_string(),
        ));
        replacements.push(("[LUGAR]".to_string(), self.place.clone()));
        replacements
    }
}

/// Joined text of a paragraph's runs.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Replace placeholders in one paragraph.
///
/// Untouched paragraphs keep their runs; a paragraph containing a
/// placeholder is collapsed to a single run carrying the replaced
/// text, mirroring a paragraph-level rewrite. Placeholders split
/// across runs are not matched.
fn replace_in_paragraph(paragraph: &mut Paragraph, replacements: &[(String, String)]) {
    let original = paragraph_text(paragraph);
    if !replacements
        .iter()
        .any(|(token, _)| original.contains(token.as_str()))
    {
        return;
    }

    let mut replaced = original;
    for (token, value) in replacements {
        replaced = replaced.replace(token.as_str(), value);
    }

    paragraph
        .children
        .retain(|child| !matches!(child, ParagraphChild::Run(_)));
    paragraph
        .children
        .push(ParagraphChild::Run(Box::new(Run::new().add_text(replaced))));
}

/// Replace placeholders in every cell of a table, recursing into
/// nested tables.
fn replace_in_table(table: &mut Table, replacements: &[(String, String)]) {
    for row_child in table.rows.iter_mut() {
        let TableChild::TableRow(row) = row_child;
        for cell_child in row.cells.iter_mut() {
            let TableRowChild::TableCell(cell) = cell_child;
            for content in cell.children.iter_mut() {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        replace_in_paragraph(paragraph, replacements);
                    }
                    TableCellContent::Table(nested) => {
                        replace_in_table(nested, replacements);
                    }
                    _ => {}
                }
            }
        }
    }
}
