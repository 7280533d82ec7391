use std::{fmt, time::Instant};
use tracing::{Span, error, info, info_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "SUCCESS"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}

/// One remote operation: a span plus the clock started when it began.
#[derive(Debug)]
pub struct TracingContext {
    pub span: Span,
    pub method: Method,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation_name: &'static str, component: &'static str, method: Method) -> Self {
        let span = info_span!(
            "api_call",
            operation = operation_name,
            component = component,
            method = %method
        );

        span.in_scope(|| info!("Starting operation: {operation_name}"));

        TracingContext {
            span,
            method,
            start_time: Instant::now(),
        }
    }

    pub fn complete_success(&self, message: &str) {
        self.complete(Status::Success, message);
    }

    pub fn complete_error(&self, message: &str) {
        self.complete(Status::Error, message);
    }

    fn complete(&self, status: Status, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();

        self.span.in_scope(|| match status {
            Status::Success => {
                info!(status = %status, duration_secs = elapsed, "Operation completed successfully: {message}")
            }
            Status::Error => {
                error!(status = %status, duration_secs = elapsed, "Operation failed: {message}")
            }
        });
    }
}
