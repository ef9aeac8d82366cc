//! Sample sinks.
//!
//! A sink receives every rendered sample, one at a time and in temporal order.
//! The synth never batches samples on its own.

pub mod queue;

#[cfg(feature = "std")]
pub mod io;

#[cfg(feature = "std")]
pub use io::IoSink;
pub use queue::{QueueConsumer, QueueProducer, SampleQueue};

pub trait SampleSink {
    fn write_sample(&mut self, sample: i8);
}

/// Discards all samples. Used when no output is installed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullSink;

impl SampleSink for NullSink {
    #[inline]
    fn write_sample(&mut self, _sample: i8) {}
}

/// Adapts a callback to a sink.
#[derive(Debug, Clone)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(i8)> SampleSink for FnSink<F> {
    #[inline]
    fn write_sample(&mut self, sample: i8) {
        (self.0)(sample)
    }
}

/// Wraps a callback as a sink.
pub fn from_fn<F: FnMut(i8)>(f: F) -> FnSink<F> {
    FnSink(f)
}

impl<S: SampleSink + ?Sized> SampleSink for &mut S {
    #[inline]
    fn write_sample(&mut self, sample: i8) {
        (**self).write_sample(sample)
    }
}

#[cfg(feature = "std")]
impl SampleSink for std::vec::Vec<i8> {
    #[inline]
    fn write_sample(&mut self, sample: i8) {
        self.push(sample)
    }
}
