use super::{resolve_in, DocumentStore};
use crate::error::{Result, WordError};
use crate::model::{Block, HeadingLevel};
use docx_rs::{
    read_docx, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild, Style, StyleType,
    Table, TableCell, TableCellContent, TableChild, TableRow, TableRowChild,
};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Production store: documents are `.docx` files under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        resolve_in(&self.root, name)
    }

    fn load(&self, path: &Path) -> Result<Docx> {
        let bytes = fs::read(path)?;
        read_docx(&bytes).map_err(|e| WordError::Read(e.to_string()))
    }

    /// Serialize the whole document to a sibling temp file, then rename it
    /// over `path`. The temp file is removed if anything fails.
    fn save(&self, path: &Path, docx: Docx) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = dir.join(format!(".wordsvc-{}.tmp", Uuid::new_v4()));

        let result =
            pack_to(&tmp, docx).and_then(|_| fs::rename(&tmp, path).map_err(WordError::Io));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        tracing::debug!(path = %path.display(), "document saved");
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    fn create(&mut self, name: &str, blocks: &[Block]) -> Result<PathBuf> {
        let path = self.path_for(name);
        let docx = blocks.iter().fold(Docx::new(), append_block);
        self.save(&path, docx)?;
        Ok(fs::canonicalize(&path)?)
    }

    fn read_blocks(&self, name: &str) -> Result<Vec<Block>> {
        let docx = self.load(&self.path_for(name))?;
        Ok(docx_blocks(&docx))
    }

    fn append(&mut self, name: &str, block: Block) -> Result<()> {
        let path = self.path_for(name);
        let docx = self.load(&path)?;
        self.save(&path, append_block(docx, &block))
    }

    fn is_directory(&self, directory: &str) -> bool {
        self.path_for(directory).is_dir()
    }

    fn file_names(&self, directory: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.path_for(directory))? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}

fn pack_to(path: &Path, docx: Docx) -> Result<()> {
    let file = File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|e| WordError::Write(e.to_string()))
}

// --- docx object model <-> blocks ---

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn append_block(docx: Docx, block: &Block) -> Docx {
    match block {
        Block::Paragraph {
            text,
            heading: None,
        } => docx.add_paragraph(text_paragraph(text)),
        Block::Paragraph {
            text,
            heading: Some(level),
        } => ensure_heading_style(docx, *level)
            .add_paragraph(text_paragraph(text).style(&level.style_id())),
        Block::Table { rows } => {
            let rows = rows
                .iter()
                .map(|cells| {
                    TableRow::new(
                        cells
                            .iter()
                            .map(|cell| TableCell::new().add_paragraph(text_paragraph(cell)))
                            .collect(),
                    )
                })
                .collect();
            docx.add_table(Table::new(rows))
        }
    }
}

/// Heading styles are not part of an empty document's style table; add the
/// definition the first time a level is used.
fn ensure_heading_style(docx: Docx, level: HeadingLevel) -> Docx {
    let style_id = level.style_id();
    if docx.styles.styles.iter().any(|s| s.style_id == style_id) {
        return docx;
    }
    let size = match level.get() {
        1 => 32,
        2 => 28,
        _ => 26,
    };
    docx.add_style(
        Style::new(&style_id, StyleType::Paragraph)
            .name(&level.style_name())
            .size(size)
            .bold(),
    )
}

fn docx_blocks(docx: &Docx) -> Vec<Block> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(Block::Paragraph {
                text: paragraph_text(p),
                heading: p
                    .property
                    .style
                    .as_ref()
                    .and_then(|s| HeadingLevel::from_style_id(&s.val)),
            }),
            DocumentChild::Table(t) => Some(Block::Table {
                rows: table_rows(t),
            }),
            _ => None,
        })
        .collect()
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        collect_text(child, &mut text);
    }
    text
}

fn collect_text(child: &ParagraphChild, out: &mut String) {
    match child {
        ParagraphChild::Run(run) => {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => out.push_str(&t.text),
                    RunChild::Tab(_) => out.push('\t'),
                    RunChild::Break(_) => out.push('\n'),
                    _ => {}
                }
            }
        }
        ParagraphChild::Hyperlink(link) => {
            for c in &link.children {
                collect_text(c, out);
            }
        }
        _ => {}
    }
}

#[allow(unreachable_patterns)]
fn table_rows(table: &Table) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .filter_map(|child| match child {
            TableChild::TableRow(row) => Some(
                row.cells
                    .iter()
                    .filter_map(|cell| match cell {
                        TableRowChild::TableCell(cell) => Some(cell_text(cell)),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
        .collect()
}

/// Paragraphs inside a cell joined by newlines.
fn cell_text(cell: &TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
