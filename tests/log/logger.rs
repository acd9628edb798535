use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use chainlog::log::{Color, ConsoleLogger, Level, LogFormatConfig, Logger, RESET};
use chainlog::{ErrorChain, LogString};
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

fn fixed_now() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2023, 2, 2, 15, 15, 15).unwrap().fixed_offset()
}

fn buffer() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
    let lines = Rc::new(RefCell::new(Vec::new()));
    let out = Rc::clone(&lines);
    (lines, move |line: &str| out.borrow_mut().push(line.to_owned()))
}

#[test]
fn formatter_logger_renders_each_level() {
    let config = LogFormatConfig::formatted("[date] [level]: [log] [default]")
        .with_date_format("2023-02-02 15:15:15");
    let (lines, sink) = buffer();
    let logger = ConsoleLogger::with_config(config, sink).with_clock(fixed_now);
    let log = LogString::new("test message");

    logger.error(&log);
    logger.info(&log);
    logger.debug(&log);

    let expected: Vec<String> = [("ERROR", Color::Red), ("INFO", Color::Blue), ("DEBUG", Color::Yellow)]
        .into_iter()
        .map(|(level, color)| {
            format!(
                "2023-02-02 15:15:15 {}{level}{RESET}: test message [default]{RESET}",
                color.escape()
            )
        })
        .collect();
    assert_eq!(*lines.borrow(), expected);
}

#[test]
fn simple_logger_uses_preset_layout() {
    let (lines, sink) = buffer();
    let logger = ConsoleLogger::simple(sink).with_clock(fixed_now);

    logger.error(&LogString::new("test message"));

    let expected = format!(
        "{}[2023-02-02 15:15:15]{RESET} {}->{RESET} {}ERROR{RESET}: test message{RESET}",
        Color::Green.escape(),
        Color::Yellow.escape(),
        Color::Red.escape(),
    );
    assert_eq!(*lines.borrow(), vec![expected]);
}

#[test]
fn console_logger_defaults_to_local_clock() {
    let (lines, sink) = buffer();
    let colors = BTreeMap::from([("error".to_owned(), Color::Red)]);
    let logger = ConsoleLogger::console("%Y-%m-%d", "[date]: [log]", colors, sink).unwrap();

    let before = Local::now().format("%Y-%m-%d").to_string();
    logger.error(&LogString::new("test message"));
    let after = Local::now().format("%Y-%m-%d").to_string();

    let line = lines.borrow()[0].clone();
    assert!(
        line == format!("{before}: test message{RESET}")
            || line == format!("{after}: test message{RESET}")
    );
}

#[test]
fn console_logger_rejects_bad_date_pattern() {
    let (_, sink) = buffer();
    let err = ConsoleLogger::console("%!", "[date]", BTreeMap::new(), sink).unwrap_err();

    assert_eq!(err.depth(), 2);
    assert_eq!(err.stack()[1].message(), "could not build console logger");
    assert!(err.stack_trace().starts_with("root cause: invalid date format"));
}

#[test]
fn console_logger_rejects_parse_only_date_pattern() {
    let (_, sink) = buffer();
    let err = ConsoleLogger::console("%#z", "[date]", BTreeMap::new(), sink).unwrap_err();

    assert_eq!(err.stack()[1].message(), "could not build console logger");
    assert!(err.stack_trace().starts_with("root cause: invalid date format: \"%#z\""));
}

#[test]
fn formatted_logger_keeps_default_colors() {
    let (lines, sink) = buffer();
    let logger =
        ConsoleLogger::formatted("[blue][date][reset] -- [level]: [yellow][log]", sink)
            .with_clock(fixed_now);

    logger.info(&LogString::new("hello"));

    let expected = format!(
        "{blue}[2023-02-02 15:15:15]{RESET} -- {blue}INFO{RESET}: {}hello{RESET}",
        Color::Yellow.escape(),
        blue = Color::Blue.escape(),
    );
    assert_eq!(lines.borrow()[0], expected);
}

#[test]
fn log_if_err_feeds_logger_sink() {
    let (lines, sink) = buffer();
    let logger = ConsoleLogger::formatted("[level] [log]", sink).with_clock(fixed_now);

    let ok = ErrorChain::<&str>::empty().log_if_err(logger.sink());
    let failed = ErrorChain::new("some go error")
        .caused("failed to run example")
        .log_if_err(logger.sink());

    assert!(ok.is_ok());
    assert!(failed.is_err());
    assert_eq!(lines.borrow().len(), 1);
    assert_eq!(
        lines.borrow()[0],
        format!(
            "{}ERROR{RESET} root cause: some go error\ncaused: failed to run example\n{RESET}",
            Color::Red.escape()
        )
    );
}

#[test]
fn render_does_not_emit() {
    let (lines, sink) = buffer();
    let config = LogFormatConfig::formatted("[level]").level_color(false);
    let logger = ConsoleLogger::with_config(config, sink);

    assert_eq!(logger.render(Level::Debug, &"x"), format!("DEBUG{RESET}"));
    assert!(lines.borrow().is_empty());
}

#[test]
fn level_names() {
    assert_eq!(Level::Error.as_str(), "error");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Debug.as_str(), "debug");
}
