//! Parser Engine - line walker and orchestrator
//!
//!     [BlockParser::parse_range] is the single entry point used both for the whole document
//!     and, recursively, for the body of every compound delimited block. A [Scope] tells it
//!     whether headings are structural: they are at document level, and they are plain text
//!     inside delimited blocks, which is what keeps a section from opening inside a quote.
//!
//!     The walker owns three pieces of state per range: the cursor, the pending metadata
//!     buffer and the section frames. Nothing outlives the call.

use super::builders::{self, ParagraphStyle};
use super::fences::match_fence;
use super::metadata::PendingMetadata;
use super::sections::{IdRegistry, SectionFrames};
use super::ParseOptions;
use crate::quire::ast::{attributes, Block, BlockKind, ParseError, ParseResult};
use crate::quire::lexing::delimiters::{content_model_of, ContentModel, Fence};
use crate::quire::lexing::line_classification::{admonition_label, is_indented};
use crate::quire::lexing::{classify, classify_underline, LineContext, LineTag};

/// Whether headings are structural in the range being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    Document,
    Nested,
}

impl Scope {
    fn headings(self) -> bool {
        self == Scope::Document
    }
}

/// Recursive descent parser over lines
pub(super) struct BlockParser<'o> {
    options: &'o ParseOptions,
    ids: IdRegistry,
}

impl<'o> BlockParser<'o> {
    pub(super) fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            ids: IdRegistry::default(),
        }
    }

    pub(super) fn parse_document(mut self, lines: &[&str]) -> ParseResult<Block> {
        let frames = self.parse_range(lines, 0, Scope::Document, 0)?;
        let (header, children) = frames.finish();

        let mut document = Block::document().with_children(children);
        if let Some(header) = header {
            document.title = Some(header.title);
            document.attributes = header.attributes;
        }
        Ok(document)
    }

    /// Parse `lines`, whose first line is line `offset + 1` of the source.
    fn parse_range(
        &mut self,
        lines: &[&str],
        offset: usize,
        scope: Scope,
        depth: usize,
    ) -> ParseResult<SectionFrames> {
        let headings = scope.headings();
        let mut frames = SectionFrames::default();
        let mut pending = PendingMetadata::default();
        let mut cursor = 0;

        while cursor < lines.len() {
            let line = lines[cursor];
            let line_no = offset + cursor + 1;

            match classify(line, LineContext::block_start(headings)) {
                LineTag::Blank | LineTag::CommentLine => cursor += 1,
                LineTag::CommentFence(fence) => {
                    let span = match_fence(lines, cursor, fence, ContentModel::Raw);
                    tracing::trace!(line = line_no, closed = span.closed, "comment block skipped");
                    cursor = span.next;
                }
                LineTag::AttributeLine(attrs) => {
                    pending.absorb(attrs);
                    cursor += 1;
                }
                LineTag::BlockTitle(title) => {
                    pending.set_title(title);
                    cursor += 1;
                }
                LineTag::Heading { level, text } => {
                    self.open_section(&mut frames, level, text, pending.take(), line_no);
                    cursor += 1;
                }
                LineTag::Fence(fence) => {
                    let meta = pending.take();
                    let (block, next) =
                        self.delimited(lines, offset, cursor, fence, meta, depth)?;
                    frames.push_some(block);
                    cursor = next;
                }
                LineTag::Content => {
                    if headings {
                        if let Some(level) = self.two_line_heading(lines, cursor, &pending) {
                            let title = line.trim();
                            self.open_section(&mut frames, level, title, pending.take(), line_no);
                            cursor += 2;
                            continue;
                        }
                    }
                    let (block, next) =
                        self.paragraph(lines, offset, cursor, headings, pending.take());
                    frames.push_some(block);
                    cursor = next;
                }
            }
        }

        if !pending.is_empty() {
            tracing::debug!(
                line = offset + lines.len(),
                "block metadata at end of range has no block to attach to"
            );
        }
        Ok(frames)
    }

    /// Level of a `Title` + underline pair starting at `cursor`.
    ///
    /// An underline that is also a fence (`====`, `----`) is read as the fence when a style
    /// is pending, so `[NOTE]` followed by text and `====` never turns into a heading.
    fn two_line_heading(
        &self,
        lines: &[&str],
        cursor: usize,
        pending: &PendingMetadata,
    ) -> Option<usize> {
        let line = lines[cursor];
        if is_indented(line) {
            return None;
        }
        let underline = lines.get(cursor + 1)?;
        let level = classify_underline(line, underline)?;
        if pending.style().is_some() && Fence::parse(underline).is_some() {
            return None;
        }
        Some(level)
    }

    fn open_section(
        &mut self,
        frames: &mut SectionFrames,
        level: usize,
        text: &str,
        meta: PendingMetadata,
        line_no: usize,
    ) {
        if level == 0 && frames.is_pristine() {
            tracing::trace!(line = line_no, "document title");
            frames.set_header(text, meta.attributes);
            return;
        }

        let mut section = Block::new(BlockKind::Section, line_no);
        section.level = level;
        section.title = Some(text.to_string());
        section.attributes = meta.attributes;
        if meta.title.is_some() {
            tracing::debug!(line = line_no, "block title before a heading ignored");
        }

        match section.id() {
            Some(id) => self.ids.reserve(id),
            None if self.options.section_ids => {
                let id = self.ids.generate(text);
                section.attributes.insert(attributes::ID, id);
            }
            None => {}
        }

        tracing::trace!(line = line_no, level, "section opened");
        frames.open(section);
    }

    /// Delimited block opened by `fence` at `open`. Returns the block (none for comment
    /// blocks) and the index of the first line after the closing fence.
    fn delimited(
        &mut self,
        lines: &[&str],
        offset: usize,
        open: usize,
        fence: Fence,
        meta: PendingMetadata,
        depth: usize,
    ) -> ParseResult<(Option<Block>, usize)> {
        let line_no = offset + open + 1;
        let kind = fence.delimiter.resolve_kind(meta.style());
        let model = content_model_of(kind);
        let span = match_fence(lines, open, fence, model);
        if !span.closed {
            tracing::debug!(
                line = line_no,
                kind = %kind,
                "unterminated fence closed at end of input"
            );
        }

        let body = &lines[span.body.clone()];
        let mut block = Block::new(kind, line_no);
        match model {
            ContentModel::Compound => {
                let child_depth = depth + 1;
                if child_depth > self.options.max_nesting_depth {
                    return Err(ParseError::NestingTooDeep {
                        limit: self.options.max_nesting_depth,
                        line: line_no,
                    });
                }
                let frames =
                    self.parse_range(body, offset + span.body.start, Scope::Nested, child_depth)?;
                let (_, children) = frames.finish();
                block.children = children;
            }
            ContentModel::Verbatim => block.raw_lines = builders::verbatim_lines(kind, body),
            ContentModel::Raw => return Ok((None, span.next)),
        }

        meta.apply_to(&mut block);
        builders::interpret_positional(&mut block);
        tracing::trace!(line = line_no, kind = %kind, "delimited block closed");
        Ok((Some(block), span.next))
    }

    /// Paragraph run starting at `start`, shaped by the pending style.
    fn paragraph(
        &mut self,
        lines: &[&str],
        offset: usize,
        start: usize,
        headings: bool,
        meta: PendingMetadata,
    ) -> (Option<Block>, usize) {
        let line_no = offset + start + 1;
        let style = ParagraphStyle::from_style(meta.style());

        if style == ParagraphStyle::Plain {
            if let Some((label, _)) = admonition_label(lines[start]) {
                let (run, next) = read_run(lines, start, headings, false);
                let block = builders::inline_admonition(label, &run, line_no, meta);
                return (block, next);
            }
            if is_indented(lines[start]) {
                let (run, next) = read_indented(lines, start);
                let block = builders::styled_paragraph(ParagraphStyle::Literal, &run, line_no, meta);
                return (block, next);
            }
        }

        let (run, next) = read_run(lines, start, headings, style.keeps_comments());
        (builders::styled_paragraph(style, &run, line_no, meta), next)
    }
}

/// Contiguous paragraph lines from `start`. Comment lines are dropped (or kept for verbatim
/// styles) without ending the run. Comment blocks are always dropped and the run goes on
/// after their closing fence.
fn read_run<'a>(
    lines: &[&'a str],
    start: usize,
    headings: bool,
    keep_comments: bool,
) -> (Vec<&'a str>, usize) {
    let mut run = vec![lines[start]];
    let mut cursor = start + 1;
    while cursor < lines.len() {
        let line = lines[cursor];
        match classify(line, LineContext::paragraph(headings)) {
            LineTag::Content => run.push(line),
            LineTag::CommentLine if keep_comments => run.push(line),
            LineTag::CommentLine => {}
            LineTag::CommentFence(fence) => {
                cursor = match_fence(lines, cursor, fence, ContentModel::Raw).next;
                continue;
            }
            _ => break,
        }
        cursor += 1;
    }
    (run, cursor)
}

/// Contiguous indented lines from `start` (literal paragraph)
fn read_indented<'a>(lines: &[&'a str], start: usize) -> (Vec<&'a str>, usize) {
    let end = lines[start..]
        .iter()
        .position(|line| !is_indented(line))
        .map_or(lines.len(), |n| start + n);
    (lines[start..end].to_vec(), end)
}
