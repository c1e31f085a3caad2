//! Qt Linguist `.ts` reader.
//!
//! Streams the document with quick-xml and builds a [`TsFile`]. Whitespace
//! between structural elements is dropped; text inside leaf elements is kept
//! verbatim.

use std::{fs, mem, path::Path};

use anyhow::{Context as _, Result, anyhow, bail};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::core::data::{
    Context, LineRef, Location, Message, Translation, TranslationText, TranslationType, TsFile,
};

pub fn parse_ts_file(path: &Path) -> Result<TsFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read TS file: {}", path.display()))?;
    parse_ts_str(&content, &path.to_string_lossy())
}

/// Parse the content of a `.ts` document.
///
/// `file_path` is only used for error messages and is stored in the result.
pub fn parse_ts_str(content: &str, file_path: &str) -> Result<TsFile> {
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);
    let mut builder = TsBuilder::new(file_path);

    loop {
        let offset = reader.buffer_position() as usize;
        let line = offset_to_line(&line_index, offset);
        let event = reader
            .read_event()
            .map_err(|e| anyhow!("{}:{}: malformed XML: {}", file_path, line, e))?;

        let result = match event {
            Event::Start(ref e) => builder.start(e, line),
            Event::Empty(ref e) => builder.start(e, line).and_then(|_| {
                let name = element_name(e);
                builder.end(&name)
            }),
            Event::End(ref e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                builder.end(&name)
            }
            Event::Text(ref e) => {
                let text = e
                    .unescape()
                    .map_err(|err| anyhow!("invalid text content: {}", err))?;
                builder.text(&text);
                Ok(())
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                builder.text(&String::from_utf8_lossy(&raw));
                Ok(())
            }
            Event::Eof => break,
            // Declaration, doctype, comments and processing instructions
            _ => Ok(()),
        };

        result.map_err(|e| anyhow!("{}:{}: {}", file_path, line, e))?;
    }

    builder.finish()
}

/// Elements whose text content is captured.
const TEXT_ELEMENTS: &[&str] = &[
    "name",
    "source",
    "oldsource",
    "comment",
    "oldcomment",
    "extracomment",
    "translatorcomment",
    "numerusform",
    "lengthvariant",
];

struct TsBuilder {
    file: TsFile,
    seen_root: bool,
    /// Names of the currently open elements.
    stack: Vec<String>,
    context: Option<Context>,
    message: Option<Message>,
    /// Plural forms of the translation being read.
    forms: Option<Vec<String>>,
    /// Text directly inside `<translation>`.
    translation_text: String,
    translation_kind: TranslationType,
    /// Text of the innermost text element.
    text: String,
}

impl TsBuilder {
    fn new(file_path: &str) -> Self {
        Self {
            file: TsFile::new(file_path),
            seen_root: false,
            stack: Vec::new(),
            context: None,
            message: None,
            forms: None,
            translation_text: String::new(),
            translation_kind: TranslationType::Finished,
            text: String::new(),
        }
    }

    fn start(&mut self, e: &BytesStart, line: usize) -> Result<()> {
        let name = element_name(e);

        if self.stack.is_empty() {
            if name != "TS" {
                bail!("expected <TS> root element, found <{}>", name);
            }
            if self.seen_root {
                bail!("more than one <TS> root element");
            }
            self.seen_root = true;
            self.file.version = attr(e, b"version")?;
            self.file.language = attr(e, b"language")?;
            self.file.source_language = attr(e, b"sourcelanguage")?;
            self.stack.push(name);
            return Ok(());
        }

        match name.as_str() {
            "context" => {
                self.context = Some(Context::default());
            }
            "message" => {
                if self.context.is_none() {
                    bail!("<message> outside of <context>");
                }
                self.message = Some(Message {
                    id: attr(e, b"id")?,
                    numerus: attr(e, b"numerus")?.as_deref() == Some("yes"),
                    line,
                    ..Default::default()
                });
            }
            "location" => {
                let message = self
                    .message
                    .as_mut()
                    .ok_or_else(|| anyhow!("<location> outside of <message>"))?;
                let line_ref = match attr(e, b"line")? {
                    Some(value) => Some(
                        LineRef::parse(&value)
                            .ok_or_else(|| anyhow!("invalid location line \"{}\"", value))?,
                    ),
                    None => None,
                };
                message.locations.push(Location {
                    filename: attr(e, b"filename")?,
                    line: line_ref,
                });
            }
            "translation" => {
                if self.message.is_none() {
                    bail!("<translation> outside of <message>");
                }
                self.translation_kind = match attr(e, b"type")? {
                    Some(value) => TranslationType::from_attr(&value)
                        .ok_or_else(|| anyhow!("unknown translation type \"{}\"", value))?,
                    None => TranslationType::Finished,
                };
                self.translation_text.clear();
                self.forms = None;
            }
            "numerusform" => {
                self.forms.get_or_insert_with(Vec::new);
                self.text.clear();
            }
            "byte" => {
                let value = attr(e, b"value")?.unwrap_or_default();
                let ch = decode_byte(&value)
                    .ok_or_else(|| anyhow!("invalid byte value \"{}\"", value))?;
                self.push_char(ch);
                return Ok(());
            }
            _ => {
                self.text.clear();
            }
        }

        self.stack.push(name);
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        if name == "byte" {
            // <byte> is handled entirely in start()
            return Ok(());
        }
        self.stack.pop();

        match name {
            "TS" => {}
            "context" => {
                if let Some(ctx) = self.context.take() {
                    self.file.contexts.push(ctx);
                }
            }
            "name" => {
                if self.message.is_none()
                    && let Some(ctx) = self.context.as_mut()
                {
                    ctx.name = mem::take(&mut self.text);
                }
            }
            "message" => {
                if let (Some(message), Some(ctx)) = (self.message.take(), self.context.as_mut()) {
                    ctx.messages.push(message);
                }
            }
            "translation" => {
                let text = match self.forms.take() {
                    Some(forms) => TranslationText::Numerus(forms),
                    None if self.message.as_ref().is_some_and(|m| m.numerus) => {
                        TranslationText::Numerus(Vec::new())
                    }
                    None => TranslationText::Single(mem::take(&mut self.translation_text)),
                };
                if let Some(message) = self.message.as_mut() {
                    message.translation = Translation {
                        kind: self.translation_kind,
                        text,
                    };
                }
            }
            "numerusform" => {
                let form = mem::take(&mut self.text);
                self.forms.get_or_insert_with(Vec::new).push(form);
            }
            _ => {
                let text = mem::take(&mut self.text);
                if let Some(message) = self.message.as_mut() {
                    match name {
                        "source" => message.source = text,
                        "oldsource" => message.old_source = Some(text),
                        "comment" => message.comment = Some(text),
                        "oldcomment" => message.old_comment = Some(text),
                        "extracomment" => message.extra_comment = Some(text),
                        "translatorcomment" => message.translator_comment = Some(text),
                        other => {
                            if let Some(extra) = other.strip_prefix("extra-") {
                                message.extras.push((extra.to_string(), text));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn text(&mut self, text: &str) {
        match self.stack.last().map(String::as_str) {
            Some("translation") => self.translation_text.push_str(text),
            Some(name) if TEXT_ELEMENTS.contains(&name) || name.starts_with("extra-") => {
                self.text.push_str(text)
            }
            // Whitespace between structural elements
            _ => {}
        }
    }

    fn push_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.text(ch.encode_utf8(&mut buf));
    }

    fn finish(self) -> Result<TsFile> {
        if !self.seen_root {
            bail!("{}: missing <TS> root element", self.file.file_path);
        }
        if let Some(open) = self.stack.last() {
            bail!(
                "{}: unexpected end of file, <{}> is not closed",
                self.file.file_path,
                open
            );
        }
        Ok(self.file)
    }
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn attr(e: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Decode the `value` of a `<byte>` element ("x1b" hex or "27" decimal).
fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
