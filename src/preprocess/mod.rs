//! Sample-to-residual preprocessor dispatch (C4).
//!
//! Closed `enum` over the four transform kinds, matched once per pass so
//! the per-sample `process` call monomorphizes instead of going through a
//! vtable.

mod diff;
mod iwt;
mod model;
mod none;

use crate::error::CmpResult;
use crate::params::Preprocessing;
use crate::sample::SampleReader;

use diff::DiffPass;
use iwt::IwtPass;
use model::ModelPass;
use none::NonePass;

pub enum Preprocessor<'w> {
    None(NonePass),
    Diff(DiffPass),
    Iwt(IwtPass<'w>),
    Model(ModelPass<'w>),
}

/// Work-buffer elements (`i32` each) this preprocessing kind needs beyond
/// the context's separately-sized model array.
pub fn work_buf_size(preprocessing: Preprocessing, sample_count: usize) -> usize {
    match preprocessing {
        Preprocessing::None => NonePass::work_buf_size(sample_count),
        Preprocessing::Diff => DiffPass::work_buf_size(sample_count),
        Preprocessing::Iwt => IwtPass::work_buf_size(sample_count),
        Preprocessing::Model => ModelPass::work_buf_size(sample_count),
    }
}

impl<'w> Preprocessor<'w> {
    /// `work_buf` backs the `Iwt` variant's coefficient cache; `model`
    /// backs the `Model` variant's running prediction array. Only the
    /// buffer the selected variant actually needs is retained.
    pub fn init(
        preprocessing: Preprocessing,
        reader: &SampleReader,
        work_buf: &'w mut [i32],
        model: &'w mut [i32],
        model_rate: u8,
    ) -> CmpResult<Self> {
        Ok(match preprocessing {
            Preprocessing::None => Preprocessor::None(NonePass::init()?),
            Preprocessing::Diff => Preprocessor::Diff(DiffPass::init()?),
            Preprocessing::Iwt => Preprocessor::Iwt(IwtPass::init(reader, work_buf)?),
            Preprocessing::Model => {
                Preprocessor::Model(ModelPass::init(model, model_rate, reader)?)
            }
        })
    }

    pub fn process(&mut self, reader: &SampleReader, i: usize) -> i32 {
        match self {
            Preprocessor::None(p) => p.process(reader, i),
            Preprocessor::Diff(p) => p.process(reader, i),
            Preprocessor::Iwt(p) => p.process(reader, i),
            Preprocessor::Model(p) => p.process(reader, i),
        }
    }
}
