//! Installs the global subscriber, so this file holds a single test.

mod common;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use exposure_core::Simulation;
use exposure_core::logging::{LogFormat, init_logging_with_writer};
use exposure_model::SimulationConfig;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn json_events_reach_the_writer() {
    let captured = Captured::default();
    let writer = captured.clone();
    init_logging_with_writer(Level::DEBUG, LogFormat::Json, move || writer.clone()).unwrap();

    let table = common::encoded_table(11, 8760, 8);
    let simulation = Simulation::from_table(table, SimulationConfig::default()).unwrap();
    assert_eq!(simulation.end_year(), 1940);
    assert!(simulation.cross_section(1935).is_ok());

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    let events: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let messages: Vec<&str> = events
        .iter()
        .filter_map(|event| event["fields"]["message"].as_str())
        .collect();
    assert!(messages.contains(&"built time index"), "{messages:?}");
    assert!(messages.contains(&"indexed simulation table"), "{messages:?}");
    assert!(messages.contains(&"extracted cross-section"), "{messages:?}");

    // A second global subscriber is refused.
    assert!(init_logging_with_writer(Level::INFO, LogFormat::Text, io::sink).is_err());
}
