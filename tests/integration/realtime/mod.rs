//! Real-time stream integration tests

mod stream_test;
