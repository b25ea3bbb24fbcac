//! Log output parser (svn log --xml)

use std::borrow::Cow;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::super::SvnError;
use super::{Parser, decode_error};
use crate::model::{Log, LogEntry};

/// Child elements of `<logentry>` that map onto `LogEntry` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Author,
    Date,
    Message,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"author" => Some(Field::Author),
            b"date" => Some(Field::Date),
            b"msg" => Some(Field::Message),
            _ => None,
        }
    }

    fn slot(self, entry: &mut LogEntry) -> &mut String {
        match self {
            Field::Author => &mut entry.author,
            Field::Date => &mut entry.date,
            Field::Message => &mut entry.message,
        }
    }
}

/// XML end-of-line handling: `\r\n` and lone `\r` become `\n`
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

// Element depths: 1 = root, 2 = logentry, 3 = entry fields
const ROOT_DEPTH: usize = 1;
const ENTRY_DEPTH: usize = 2;
const FIELD_DEPTH: usize = 3;

impl Parser {
    /// Parse `svn log --xml` output into a Log
    ///
    /// Expected format:
    /// ```text
    /// <log>
    ///   <logentry revision="R">
    ///     <author>A</author>
    ///     <date>D</date>
    ///     <msg>M</msg>
    ///   </logentry>
    /// </log>
    /// ```
    ///
    /// The root element name is not checked. Missing fields stay empty and
    /// unknown elements (`<paths>`, nested merge entries) are skipped.
    /// Documents that are not well-formed, or have no root element, fail.
    pub fn parse_log(output: &str) -> Result<Log, SvnError> {
        let mut reader = Reader::from_str(output);
        let mut entries = Vec::new();
        let mut depth = 0usize;
        let mut seen_root = false;
        let mut current: Option<LogEntry> = None;
        let mut field: Option<Field> = None;

        loop {
            match reader.read_event().map_err(decode_error)? {
                Event::Start(e) => {
                    depth += 1;
                    match depth {
                        ROOT_DEPTH => seen_root = true,
                        ENTRY_DEPTH if e.local_name().as_ref() == b"logentry" => {
                            current = Some(Self::start_entry(&e)?);
                        }
                        FIELD_DEPTH => {
                            field = Field::from_name(e.local_name().as_ref());
                            if let (Some(f), Some(entry)) = (field, current.as_mut()) {
                                f.slot(entry).clear();
                            }
                        }
                        _ => {}
                    }
                }
                Event::Empty(e) => match depth + 1 {
                    ROOT_DEPTH => break,
                    ENTRY_DEPTH if e.local_name().as_ref() == b"logentry" => {
                        entries.push(Self::start_entry(&e)?);
                    }
                    FIELD_DEPTH => {
                        if let (Some(f), Some(entry)) =
                            (Field::from_name(e.local_name().as_ref()), current.as_mut())
                        {
                            f.slot(entry).clear();
                        }
                    }
                    _ => {}
                },
                Event::End(_) => {
                    match depth {
                        FIELD_DEPTH => field = None,
                        ENTRY_DEPTH => entries.extend(current.take()),
                        _ => {}
                    }
                    depth = depth.saturating_sub(1);
                    if depth == 0 && seen_root {
                        break;
                    }
                }
                Event::Text(t) if depth == FIELD_DEPTH => {
                    if let (Some(f), Some(entry)) = (field, current.as_mut()) {
                        let raw = std::str::from_utf8(&t).map_err(decode_error)?;
                        let normalized = normalize_newlines(raw);
                        let text = unescape(&normalized).map_err(decode_error)?;
                        f.slot(entry).push_str(&text);
                    }
                }
                Event::CData(c) if depth == FIELD_DEPTH => {
                    if let (Some(f), Some(entry)) = (field, current.as_mut()) {
                        let raw = std::str::from_utf8(&c).map_err(decode_error)?;
                        f.slot(entry).push_str(&normalize_newlines(raw));
                    }
                }
                Event::Eof => {
                    let reason = if seen_root {
                        "unexpected end of document"
                    } else {
                        "missing root element"
                    };
                    return Err(SvnError::Decode(reason.to_string()));
                }
                _ => {}
            }
        }

        Ok(Log::new(entries))
    }

    /// Parse raw process output, rejecting invalid UTF-8
    pub fn parse_log_bytes(output: &[u8]) -> Result<Log, SvnError> {
        let text = std::str::from_utf8(output).map_err(decode_error)?;
        Self::parse_log(text)
    }

    /// New entry carrying the `revision` attribute of a `<logentry>`
    fn start_entry(e: &BytesStart<'_>) -> Result<LogEntry, SvnError> {
        let mut entry = LogEntry::default();
        for attr in e.attributes() {
            let attr = attr.map_err(decode_error)?;
            if attr.key.local_name().as_ref() == b"revision" {
                entry.revision = attr.unescape_value().map_err(decode_error)?.into_owned();
            }
        }
        Ok(entry)
    }
}
