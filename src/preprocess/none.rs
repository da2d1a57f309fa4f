//! Identity preprocessor: the residual stream is the sample stream.

use crate::error::CmpResult;
use crate::sample::SampleReader;

#[derive(Debug, Clone, Copy, Default)]
pub struct NonePass;

impl NonePass {
    pub fn work_buf_size(_sample_count: usize) -> usize {
        0
    }

    pub fn init() -> CmpResult<Self> {
        Ok(NonePass)
    }

    pub fn process(&mut self, reader: &SampleReader, i: usize) -> i32 {
        reader.get(i) as i32
    }
}
