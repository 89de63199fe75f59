//! PLY header parser.
//!
//! The header is consumed one line at a time so the offset of the first
//! body byte is known exactly. Each line is split into tokens with `nom`
//! and classified into a [`Declaration`]; only properties declared while
//! the `vertex` element is being tracked are kept, so elements before or
//! after it (faces, edges, ...) are skipped without knowing their layout.

use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use nom::{
    IResult,
    bytes::complete::take_till1,
    character::complete::{digit1, space0, space1},
    combinator::{all_consuming, map_res},
    multi::separated_list0,
    sequence::delimited,
};
use tracing::debug;

use crate::{
    error::HeaderError,
    format::Format,
    header::{Header, PropertyDef},
};

/// First line of every PLY file.
pub const MAGIC: &str = "ply";
/// Line terminating the header.
pub const END_HEADER: &str = "end_header";
/// The only element whose properties are captured.
pub const VERTEX_ELEMENT: &str = "vertex";

#[derive(Debug, PartialEq)]
enum Declaration<'a> {
    Blank,
    Element { name: &'a str, count: usize },
    Property { type_name: &'a str, name: &'a str },
    ListProperty,
    EndHeader,
    /// `comment`, `obj_info` and unknown keywords.
    Other,
}

/// Parse the header of the PLY file at `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_header(path: impl AsRef<Path>) -> Result<Header, HeaderError> {
    let file = File::open(path.as_ref())?;
    parse_header_from_reader(BufReader::new(file))
}

/// Parse a PLY header from any buffered reader positioned at the start of
/// the file. The reader is left positioned somewhere after `end_header`.
pub fn parse_header_from_reader<R: BufRead>(reader: R) -> Result<Header, HeaderError> {
    let mut lines = LineReader::new(reader);

    // 1. magic, as raw bytes ahead of the ASCII check
    loop {
        match lines.read_raw() {
            Ok(()) => {}
            Err(HeaderError::LineTooLong { .. }) => {
                return Err(HeaderError::NotAPlyFile {
                    line: lines.preview(),
                });
            }
            Err(e) => return Err(e),
        }
        if !lines.current().iter().all(u8::is_ascii_whitespace) {
            break;
        }
        lines.accept();
    }
    if lines.current() != MAGIC.as_bytes() {
        return Err(HeaderError::NotAPlyFile {
            line: lines.preview(),
        });
    }
    lines.accept();

    // 2. format <name> <version>
    let format_line = lines.next_line()?;
    let (format, version) = match split_tokens(&format_line).as_slice() {
        ["format", name, version] => match Format::from_name(name) {
            Some(format) => (format, version.to_string()),
            None => {
                return Err(HeaderError::MalformedFormatLine {
                    line: format_line.clone(),
                });
            }
        },
        _ => {
            return Err(HeaderError::MalformedFormatLine {
                line: format_line.clone(),
            });
        }
    };

    // 3. element / property / other declarations
    let mut vertex_count: Option<usize> = None;
    let mut vertex_properties = Vec::new();
    let mut seen = HashSet::new();
    let mut in_vertex = false;

    loop {
        let line = lines.next_line()?;
        match classify(&line)? {
            Declaration::EndHeader => break,
            Declaration::Element { name, count } => {
                in_vertex = name == VERTEX_ELEMENT;
                if in_vertex {
                    if vertex_count.is_some() {
                        return Err(HeaderError::MalformedElementLine { line: line.clone() });
                    }
                    vertex_count = Some(count);
                }
            }
            Declaration::Property { type_name, name } if in_vertex => {
                let property = PropertyDef::parse(type_name, name)?;
                if !seen.insert(property.name.clone()) {
                    return Err(HeaderError::DuplicateProperty {
                        name: property.name,
                    });
                }
                vertex_properties.push(property);
            }
            Declaration::ListProperty if in_vertex => {
                return Err(HeaderError::ListPropertyUnsupported { line: line.clone() });
            }
            Declaration::Property { .. }
            | Declaration::ListProperty
            | Declaration::Blank
            | Declaration::Other => {}
        }
    }

    let vertex_count = vertex_count.ok_or(HeaderError::NoVertexElement)?;
    let (raw_header_lines, data_start_offset) = lines.finish();

    debug!(
        %format,
        vertex_count,
        properties = vertex_properties.len(),
        data_start_offset,
        "parsed PLY header"
    );

    Ok(Header {
        format,
        version,
        vertex_count,
        vertex_properties,
        raw_header_lines,
        data_start_offset,
    })
}

fn classify(line: &str) -> Result<Declaration<'_>, HeaderError> {
    Ok(match split_tokens(line).as_slice() {
        [] => Declaration::Blank,
        [END_HEADER] => Declaration::EndHeader,
        ["element", name, raw_count] => match element_count(raw_count) {
            Ok((_, count)) => Declaration::Element { name: *name, count },
            Err(_) => {
                return Err(HeaderError::MalformedElementLine {
                    line: line.to_string(),
                });
            }
        },
        ["element", ..] => {
            return Err(HeaderError::MalformedElementLine {
                line: line.to_string(),
            });
        }
        ["property", "list", _, _, _] => Declaration::ListProperty,
        ["property", "list", ..] => {
            return Err(HeaderError::MalformedPropertyLine {
                line: line.to_string(),
            });
        }
        ["property", type_name, name] => Declaration::Property {
            type_name: *type_name,
            name: *name,
        },
        ["property", ..] => {
            return Err(HeaderError::MalformedPropertyLine {
                line: line.to_string(),
            });
        }
        _ => Declaration::Other,
    })
}

fn token(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c == ' ' || c == '\t')(input)
}

fn tokens(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(delimited(space0, separated_list0(space1, token), space0))(input)
}

fn split_tokens(line: &str) -> Vec<&str> {
    tokens(line).map(|(_, t)| t).unwrap_or_default()
}

fn element_count(input: &str) -> IResult<&str, usize> {
    all_consuming(map_res(digit1, str::parse::<usize>))(input)
}

/// Longest header line accepted, terminator excluded.
const MAX_LINE_LEN: usize = 64 * 1024;
/// Bytes of a rejected first line echoed back in [`HeaderError::NotAPlyFile`].
const PREVIEW_LEN: usize = 32;

/// Reads ASCII header lines while counting consumed bytes.
struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    end: usize,
    line_no: usize,
    lines: Vec<String>,
    offset: u64,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            end: 0,
            line_no: 0,
            lines: Vec::new(),
            offset: 0,
        }
    }

    /// Read the next line into the buffer without checking its contents.
    fn read_raw(&mut self) -> Result<(), HeaderError> {
        self.buf.clear();
        let limit = MAX_LINE_LEN as u64 + 1;
        let n = self
            .reader
            .by_ref()
            .take(limit)
            .read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Err(HeaderError::UnexpectedEof);
        }
        self.offset += n as u64;
        self.line_no += 1;

        let mut end = self.buf.len();
        if self.buf.ends_with(b"\n") {
            end -= 1;
        } else if n > MAX_LINE_LEN {
            self.end = end;
            return Err(HeaderError::LineTooLong {
                line_no: self.line_no,
            });
        }
        if self.buf[..end].ends_with(b"\r") {
            end -= 1;
        }
        self.end = end;
        Ok(())
    }

    /// The last line read, without its terminator.
    fn current(&self) -> &[u8] {
        &self.buf[..self.end]
    }

    /// Printable prefix of the last line read.
    fn preview(&self) -> String {
        let shown = &self.buf[..self.end.min(PREVIEW_LEN)];
        shown.escape_ascii().to_string()
    }

    /// Record the last line read as a header line.
    fn accept(&mut self) -> String {
        let line = String::from_utf8_lossy(self.current()).into_owned();
        self.lines.push(line.clone());
        line
    }

    fn next_line(&mut self) -> Result<String, HeaderError> {
        self.read_raw()?;
        if !self.current().is_ascii() {
            return Err(HeaderError::NonAsciiHeader {
                line_no: self.line_no,
            });
        }
        Ok(self.accept())
    }

    fn finish(self) -> (Vec<String>, u64) {
        (self.lines, self.offset)
    }
}
