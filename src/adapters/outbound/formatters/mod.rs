/// Graph description formatters
mod dot_formatter;

pub use dot_formatter::DotFormatter;
