use std::sync::Mutex;

use common::model::composer::Composer;
use common::model::data_uri::DataUri;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn read_transitions_reach_the_installed_logger() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Debug);

    let mut composer = Composer::new();
    let first = composer.file_chosen();
    let second = composer.file_chosen();
    composer
        .read_completed(second, DataUri::encode("image/png", b"p"))
        .unwrap();
    composer.toggle_attachment();
    let third = composer.file_chosen();
    composer.toggle_attachment();
    composer.input("x");

    let lines = RECORDER.lines.lock().unwrap().clone();
    assert_eq!(
        lines,
        vec![
            format!("read {} superseded by {}", first, second),
            format!("read {} staged", second),
            format!("read {} cancelled", third),
        ]
    );
}
