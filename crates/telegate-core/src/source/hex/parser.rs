use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::source::{FrameEvent, FrameSource, SourceError};

use super::error::HexSourceError;
use super::reader::{decode_hex_line, is_frame_line};

pub struct HexFileSource {
    lines: Lines<BufReader<File>>,
    line: u64,
}

impl HexFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line: 0,
        })
    }
}

impl FrameSource for HexFileSource {
    fn next_frame(&mut self) -> Result<Option<FrameEvent>, SourceError> {
        loop {
            let line = match self.lines.next() {
                Some(line) => line.map_err(HexSourceError::from)?,
                None => return Ok(None),
            };
            self.line += 1;
            if !is_frame_line(&line) {
                continue;
            }
            let data = decode_hex_line(&line).map_err(|message| HexSourceError::Hex {
                line: self.line,
                message,
            })?;
            return Ok(Some(FrameEvent {
                line: self.line,
                data,
            }));
        }
    }
}
