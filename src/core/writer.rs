//! Qt Linguist `.ts` serializer.
//!
//! Output follows the lupdate layout so that a rewritten catalog diffs cleanly
//! against files produced by Qt tooling.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use quick_xml::escape::escape;

use crate::core::data::{Message, TranslationText, TsFile};

const INDENT: &str = "    ";

/// Serialize a document in lupdate layout.
pub fn write_ts(file: &TsFile) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    for (name, value) in [
        ("version", &file.version),
        ("language", &file.language),
        ("sourcelanguage", &file.source_language),
    ] {
        if let Some(value) = value {
            let _ = write!(out, " {}=\"{}\"", name, escape_text(value));
        }
    }
    out.push_str(">\n");

    for ctx in &file.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "{INDENT}<name>{}</name>", escape_text(&ctx.name));
        for message in &ctx.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

/// Serialize `file` and write it to `path`.
pub fn write_ts_file(file: &TsFile, path: &Path) -> Result<()> {
    fs::write(path, write_ts(file))
        .with_context(|| format!("Failed to write TS file: {}", path.display()))
}

fn write_message(out: &mut String, message: &Message) {
    let pad = INDENT.repeat(2);

    out.push_str(INDENT);
    out.push_str("<message");
    if let Some(id) = &message.id {
        let _ = write!(out, " id=\"{}\"", escape_text(id));
    }
    if message.numerus {
        out.push_str(" numerus=\"yes\"");
    }
    out.push_str(">\n");

    for loc in &message.locations {
        out.push_str(&pad);
        out.push_str("<location");
        if let Some(filename) = &loc.filename {
            let _ = write!(out, " filename=\"{}\"", escape_text(filename));
        }
        if let Some(line) = &loc.line {
            let _ = write!(out, " line=\"{}\"", line);
        }
        out.push_str("/>\n");
    }

    write_element(out, &pad, "source", Some(&message.source));
    write_element(out, &pad, "oldsource", message.old_source.as_deref());
    write_element(out, &pad, "comment", message.comment.as_deref());
    write_element(out, &pad, "oldcomment", message.old_comment.as_deref());
    write_element(out, &pad, "extracomment", message.extra_comment.as_deref());
    write_element(
        out,
        &pad,
        "translatorcomment",
        message.translator_comment.as_deref(),
    );

    out.push_str(&pad);
    out.push_str("<translation");
    if let Some(kind) = message.translation.kind.as_attr() {
        let _ = write!(out, " type=\"{}\"", kind);
    }
    out.push('>');
    match &message.translation.text {
        TranslationText::Single(text) => out.push_str(&escape_text(text)),
        TranslationText::Numerus(forms) => {
            out.push('\n');
            for form in forms {
                let _ = writeln!(
                    out,
                    "{pad}{INDENT}<numerusform>{}</numerusform>",
                    escape_text(form)
                );
            }
            out.push_str(&pad);
        }
    }
    out.push_str("</translation>\n");

    for (name, value) in &message.extras {
        let tag = format!("extra-{}", name);
        write_element(out, &pad, &tag, Some(value));
    }

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn write_element(out: &mut String, pad: &str, tag: &str, text: Option<&str>) {
    if let Some(text) = text {
        let _ = writeln!(out, "{pad}<{tag}>{}</{tag}>", escape_text(text));
    }
}

/// Escape markup characters; control characters become `<byte>` elements.
fn escape_text(text: &str) -> String {
    let escaped = escape(text);
    if !escaped.chars().any(is_byte_encoded) {
        return escaped.into_owned();
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for ch in escaped.chars() {
        if is_byte_encoded(ch) {
            let _ = write!(out, "<byte value=\"x{:x}\"/>", u32::from(ch));
        } else {
            out.push(ch);
        }
    }
    out
}

fn is_byte_encoded(ch: char) -> bool {
    u32::from(ch) < 0x20 && !matches!(ch, '\n' | '\r' | '\t')
}
