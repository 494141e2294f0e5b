#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use srand::{Error, RandomSource};

/// Hands out a fixed sequence of bytes and fails once it runs dry.
pub struct ScriptedSource {
    bytes: VecDeque<u8>,
}

impl ScriptedSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl RandomSource for ScriptedSource {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> srand::Result<()> {
        if self.bytes.len() < buf.len() {
            return Err(Error::EntropySource(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            )));
        }

        for b in buf.iter_mut() {
            *b = self.bytes.pop_front().unwrap();
        }
        Ok(())
    }
}

/// Always fails, like an OS source that is unavailable.
pub struct FailingSource;

impl RandomSource for FailingSource {
    fn fill_bytes(&mut self, _buf: &mut [u8]) -> srand::Result<()> {
        Err(Error::EntropySource(io::Error::other("entropy unavailable")))
    }
}
