use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        // Millisecond precision so consecutive ticks stay distinguishable.
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format_line(file, line, message));
    }

    pub fn log_error(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(file: &str, line: u32, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(file, line, message),
        None => eprintln!("Logger not initialized! Call init_logger() first."),
    }
}

pub fn log_error(file: &str, line: u32, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log_error(file, line, message),
        None => eprintln!("{}", message),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log_error(file!(), line!(), &format!($($arg)*))
    };
}
