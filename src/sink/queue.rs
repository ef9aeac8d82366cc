//! Bounded sample queue between the renderer and a periodic consumer.
//!
//! On a microcontroller the renderer pushes samples from the main loop and a
//! timer interrupt pops one sample per tick to drive the PWM output. The
//! producer busy-waits while the queue is full. The consumer never waits: on
//! underrun it repeats the last sample it delivered, so the output holds its
//! level instead of clicking.
//!
//! The storage is a `ringbuf::StaticRb`, which lives inline and never touches
//! the heap. Splitting the queue hands out exactly one producer and one
//! consumer.

use ringbuf::traits::{Consumer, Observer, Producer, SplitRef};
use ringbuf::{StaticCons, StaticProd, StaticRb};

use crate::sink::SampleSink;

pub struct SampleQueue<const N: usize> {
    rb: StaticRb<i8, N>,
}

impl<const N: usize> Default for SampleQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleQueue<N> {
    pub fn new() -> Self {
        Self {
            rb: StaticRb::default(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Splits the queue into its producer and consumer halves.
    pub fn split(&mut self) -> (QueueProducer<'_, N>, QueueConsumer<'_, N>) {
        let (producer, consumer) = self.rb.split_ref();
        (
            QueueProducer { producer },
            QueueConsumer { consumer, last: 0 },
        )
    }
}

/// Producer half. Doubles as the sink the synth renders into.
pub struct QueueProducer<'a, const N: usize> {
    producer: StaticProd<'a, i8, N>,
}

impl<const N: usize> QueueProducer<'_, N> {
    pub fn len(&self) -> usize {
        self.producer.occupied_len()
    }

    pub fn is_empty(&self) -> bool {
        self.producer.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.producer.is_full()
    }

    /// Appends a sample, or hands it back if the queue is full.
    pub fn try_push(&mut self, sample: i8) -> Result<(), i8> {
        self.producer.try_push(sample)
    }

    /// Appends a sample, spinning until the consumer frees a slot.
    pub fn push(&mut self, sample: i8) {
        while self.producer.try_push(sample).is_err() {
            core::hint::spin_loop();
        }
    }
}

impl<const N: usize> SampleSink for QueueProducer<'_, N> {
    #[inline]
    fn write_sample(&mut self, sample: i8) {
        self.push(sample)
    }
}

/// Consumer half. Remembers the last sample it delivered.
pub struct QueueConsumer<'a, const N: usize> {
    consumer: StaticCons<'a, i8, N>,
    last: i8,
}

impl<const N: usize> QueueConsumer<'_, N> {
    pub fn len(&self) -> usize {
        self.consumer.occupied_len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumer.is_empty()
    }

    /// Takes the oldest sample, or `None` on underrun.
    pub fn try_pop(&mut self) -> Option<i8> {
        let sample = self.consumer.try_pop()?;
        self.last = sample;
        Some(sample)
    }

    /// Takes the oldest sample. On underrun, repeats the last sample taken
    /// (0 before the first one).
    pub fn pop(&mut self) -> i8 {
        self.try_pop().unwrap_or(self.last)
    }
}
