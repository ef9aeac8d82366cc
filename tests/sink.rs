//! Tests for the sample sinks

use std::io::{self, Write};

use juno_synth::sink::{from_fn, IoSink, NullSink, SampleQueue};
use juno_synth::{SampleSink, Synth, SLICE_SAMPLES};

#[test]
fn queue_is_fifo() {
    let mut queue: SampleQueue<8> = SampleQueue::new();
    let (mut producer, mut consumer) = queue.split();

    for s in [1, -2, 3] {
        producer.try_push(s).unwrap();
    }

    assert_eq!(consumer.len(), 3);
    assert_eq!(consumer.try_pop(), Some(1));
    assert_eq!(consumer.try_pop(), Some(-2));
    assert_eq!(consumer.try_pop(), Some(3));
    assert_eq!(consumer.try_pop(), None);
    assert!(consumer.is_empty());
    assert!(producer.is_empty());
}

#[test]
fn full_queue_hands_sample_back() {
    let mut queue: SampleQueue<4> = SampleQueue::new();
    assert_eq!(queue.capacity(), 4);
    let (mut producer, mut consumer) = queue.split();
    for s in 0..4 {
        producer.try_push(s).unwrap();
    }

    assert!(producer.is_full());
    assert_eq!(producer.try_push(9), Err(9));

    assert_eq!(consumer.pop(), 0);
    assert!(!producer.is_full());
    assert_eq!(producer.len(), 3);
    assert_eq!(producer.try_push(9), Ok(()));
    let rest: Vec<i8> = std::iter::from_fn(|| consumer.try_pop()).collect();
    assert_eq!(rest, [1, 2, 3, 9]);
}

#[test]
fn underrun_repeats_last_sample() {
    let mut queue: SampleQueue<4> = SampleQueue::new();
    let (mut producer, mut consumer) = queue.split();

    assert_eq!(consumer.pop(), 0);

    producer.push(-7);
    assert_eq!(consumer.pop(), -7);
    assert_eq!(consumer.pop(), -7);
    assert_eq!(consumer.pop(), -7);

    producer.push(5);
    assert_eq!(consumer.pop(), 5);
    assert_eq!(consumer.pop(), 5);
}

#[test]
fn queue_wraps_around() {
    let mut queue: SampleQueue<3> = SampleQueue::new();
    let (mut producer, mut consumer) = queue.split();

    for s in 0..20 {
        producer.push(s);
        assert_eq!(consumer.try_pop(), Some(s));
    }
    assert!(consumer.is_empty());
}

#[test]
fn producer_blocks_until_consumer_catches_up() {
    const COUNT: usize = 10_000;
    let mut queue: SampleQueue<16> = SampleQueue::new();
    let (mut producer, mut consumer) = queue.split();

    let received = std::thread::scope(|scope| {
        scope.spawn(move || {
            for i in 0..COUNT {
                producer.write_sample((i % 128) as i8);
            }
        });

        let mut received = Vec::with_capacity(COUNT);
        while received.len() < COUNT {
            match consumer.try_pop() {
                Some(s) => received.push(s),
                None => std::thread::yield_now(),
            }
        }
        received
    });

    let expected: Vec<i8> = (0..COUNT).map(|i| (i % 128) as i8).collect();
    assert_eq!(received, expected);
}

#[test]
fn synth_into_queue() {
    let mut queue: SampleQueue<{ 10 * SLICE_SAMPLES }> = SampleQueue::new();
    let (producer, mut consumer) = queue.split();
    let mut synth = Synth::new();
    synth.set_output(Some(producer));

    synth.speak_symbol(' ');

    assert!(synth.output().is_some_and(|producer| producer.is_full()));
    assert_eq!(consumer.len(), 10 * SLICE_SAMPLES);
    assert!(std::iter::from_fn(|| consumer.try_pop()).all(|s| s == 0));
}

#[test]
fn io_sink_writes_offset_bytes() {
    let mut sink = IoSink::new(Vec::<u8>::new());
    for s in [0, 1, -1, i8::MIN, i8::MAX] {
        sink.write_sample(s);
    }

    let bytes = sink.finish().unwrap();

    assert_eq!(bytes, [128, 129, 127, 0, 255]);
}

#[derive(Debug)]
struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn io_sink_keeps_first_error() {
    let mut sink = IoSink::new(FailingWriter);

    for _ in 0..10 {
        sink.write_sample(0);
    }

    let error = sink.finish().unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn closure_and_null_sinks() {
    let mut count = 0;
    {
        let mut sink = from_fn(|_| count += 1);
        sink.write_sample(3);
        sink.write_sample(4);
    }
    assert_eq!(count, 2);

    let mut null = NullSink;
    null.write_sample(1);

    let mut samples: Vec<i8> = Vec::new();
    feed(&mut samples, -3);
    assert_eq!(samples, [-3]);
}

fn feed<S: SampleSink>(mut sink: S, sample: i8) {
    sink.write_sample(sample);
}
